//! Frame renderer: projects the simulation state into draw primitives.
//!
//! A pure consumer with no internal state. Each frame it emits an ordered
//! primitive list in a fixed z-order — background, epicycle chain,
//! trace/spline, UI controls, help overlay — so later primitives occlude
//! earlier ones. Only the app shell replays the list onto the real surface.

use egui::{Color32, Pos2, Rect};

use crate::color_scheme::CIRCLE_COLORS;
use crate::controls::{ControlParameters, ControlRegions};
use crate::data::epicycles::EpicycleState;
use crate::data::harmonics::{HarmonicTerm, WavePreset};
use crate::data::spline;
use crate::data::trace::TraceBuffer;
use crate::layout::{Layout, Viewport};

/// Font size tier for rendered text; the shell maps tiers to point sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTier {
    Small,
    Medium,
    Large,
}

/// One drawing-surface primitive (top-left-origin pixel coordinates).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    CircleOutline {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
    CircleFilled {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    /// Single curve sample, painted as a 1px dot.
    Point {
        pos: Pos2,
        color: Color32,
    },
    Text {
        pos: Pos2,
        text: String,
        tier: TextTier,
        color: Color32,
        centered: bool,
    },
}

const STROKE_WIDTH: f32 = 2.0;

const HELP_LINES: [&str; 6] = [
    "The Fourier series represents periodic functions as sums of sines and cosines.",
    "More circles (higher n) create more accurate approximations.",
    "Each circle represents a term in the series: a_n*cos(nx) + b_n*sin(nx).",
    "The square wave is approximated by: 4/\u{3c0} * (sin(x) + sin(3x)/3 + sin(5x)/5 + ...)",
    "The sawtooth wave is approximated by: 2/\u{3c0} * (sin(x) - sin(2x)/2 + sin(3x)/3 - ...)",
    "The triangle wave is approximated by: 8/\u{3c0}\u{b2} * (sin(x) - sin(3x)/9 + sin(5x)/25 - ...)",
];

/// Render one frame.
///
/// `user_wave` is the captured pointer wave, drawn instead of the simulated
/// trace while drawing mode is active.
pub fn render_frame(
    params: &ControlParameters,
    terms: &[HarmonicTerm],
    state: &EpicycleState,
    trace: &TraceBuffer,
    user_wave: &[f32],
    layout: &Layout,
    regions: &ControlRegions,
    viewport: Viewport,
) -> Vec<DrawPrimitive> {
    let palette = params.scheme.palette();
    let mut out = Vec::new();

    // Background
    out.push(DrawPrimitive::FillRect {
        rect: Rect::from_min_size(
            Pos2::ZERO,
            egui::vec2(viewport.vw(100.0), viewport.vh(100.0)),
        ),
        color: palette.background,
    });

    // Epicycle chain
    push_chain(&mut out, state, palette.circle_outline, palette.highlight);

    // Scrolling trace (or the user-drawn wave while capturing)
    if params.drawing_mode {
        for (i, &y) in user_wave.iter().enumerate() {
            out.push(DrawPrimitive::Point {
                pos: Pos2::new(layout.line_x + i as f32, y),
                color: palette.wave,
            });
        }
    } else {
        push_trace(&mut out, state, trace, layout, params, palette.wave);
    }

    // UI controls, equation readout and coefficient bars
    push_controls(&mut out, params, regions, viewport, &palette);
    push_equation(&mut out, terms, viewport, palette.text);
    if params.show_coefficients {
        push_coefficient_bars(&mut out, terms, viewport, palette.text);
    }

    // Help overlay occludes everything else
    if params.show_help {
        push_help_overlay(&mut out, params, viewport, palette.text);
    }

    out
}

fn push_chain(
    out: &mut Vec<DrawPrimitive>,
    state: &EpicycleState,
    outline: Color32,
    highlight: Color32,
) {
    for (i, circle) in state.circles.iter().enumerate() {
        // The next circle's center is this circle's rim point.
        let rim = state
            .circles
            .get(i + 1)
            .map(|c| c.center)
            .unwrap_or(state.tip);
        out.push(DrawPrimitive::CircleOutline {
            center: circle.center,
            radius: circle.radius,
            width: STROKE_WIDTH,
            color: outline,
        });
        out.push(DrawPrimitive::Line {
            from: circle.center,
            to: rim,
            width: STROKE_WIDTH,
            color: CIRCLE_COLORS[i % CIRCLE_COLORS.len()],
        });
    }
    if !state.circles.is_empty() {
        out.push(DrawPrimitive::CircleFilled {
            center: state.tip,
            radius: 4.0,
            color: highlight,
        });
    }
}

fn push_trace(
    out: &mut Vec<DrawPrimitive>,
    state: &EpicycleState,
    trace: &TraceBuffer,
    layout: &Layout,
    params: &ControlParameters,
    wave_color: Color32,
) {
    if trace.is_empty() {
        return;
    }
    // Connector from the chain tip to the newest trace column.
    if !state.circles.is_empty() {
        out.push(DrawPrimitive::Line {
            from: state.tip,
            to: Pos2::new(layout.line_x, state.tip.y),
            width: 1.0,
            color: wave_color,
        });
    }
    let ys = trace.as_vec();
    let samples = spline::reconstruct(&ys, layout.line_x, params.quality.segments_per_span());
    if samples.is_empty() {
        // Below the 4-point interpolation window: plot the raw columns.
        for (i, &y) in ys.iter().enumerate() {
            out.push(DrawPrimitive::Point {
                pos: Pos2::new(layout.line_x + i as f32, y),
                color: wave_color,
            });
        }
    } else {
        for [x, y] in samples {
            out.push(DrawPrimitive::Point {
                pos: Pos2::new(x, y),
                color: wave_color,
            });
        }
    }
}

fn push_controls(
    out: &mut Vec<DrawPrimitive>,
    params: &ControlParameters,
    regions: &ControlRegions,
    viewport: Viewport,
    palette: &crate::color_scheme::Palette,
) {
    let button = |out: &mut Vec<DrawPrimitive>, rect: Rect, text: String, tier: TextTier| {
        out.push(DrawPrimitive::FillRect {
            rect,
            color: palette.button,
        });
        out.push(DrawPrimitive::Text {
            pos: rect.center(),
            text,
            tier,
            color: palette.text,
            centered: true,
        });
    };
    let label = |out: &mut Vec<DrawPrimitive>, x: f32, y: f32, text: &str| {
        out.push(DrawPrimitive::Text {
            pos: Pos2::new(x, y - 26.0),
            text: text.to_string(),
            tier: TextTier::Medium,
            color: palette.text,
            centered: false,
        });
    };

    label(out, regions.freq_dec.min.x, regions.freq_dec.min.y, "Frequency");
    button(out, regions.freq_dec, "-".into(), TextTier::Large);
    button(out, regions.freq_inc, "+".into(), TextTier::Large);

    label(
        out,
        regions.circles_dec.min.x,
        regions.circles_dec.min.y,
        "Circles / Accuracy",
    );
    button(out, regions.circles_dec, "-".into(), TextTier::Large);
    button(out, regions.circles_inc, "+".into(), TextTier::Large);

    button(
        out,
        regions.theme,
        format!("Theme: {}", params.scheme.label()),
        TextTier::Medium,
    );

    // Animation speed slider: track plus highlight handle.
    label(
        out,
        regions.speed_slider.min.x,
        regions.speed_slider.min.y,
        "Animation Speed",
    );
    out.push(DrawPrimitive::FillRect {
        rect: regions.speed_slider,
        color: palette.button,
    });
    let handle_w = viewport.vw(2.0);
    let handle_x = regions.speed_slider.min.x
        + params.animation_speed as f32 * regions.speed_slider.width()
        - handle_w / 2.0;
    out.push(DrawPrimitive::FillRect {
        rect: Rect::from_min_size(
            Pos2::new(handle_x, regions.speed_slider.min.y - viewport.vh(1.0)),
            egui::vec2(handle_w, viewport.vh(4.0)),
        ),
        color: palette.highlight,
    });

    let drawing_text = if params.drawing_mode {
        format!("{} Drawing Mode", egui_phosphor::regular::PENCIL_SIMPLE)
    } else {
        format!("{} Wave Mode", egui_phosphor::regular::WAVE_SINE)
    };
    button(out, regions.drawing, drawing_text, TextTier::Medium);

    let help_text = if params.show_help { "Hide Help" } else { "Show Help" };
    button(out, regions.help, help_text.into(), TextTier::Medium);

    button(
        out,
        regions.square,
        WavePreset::Square.label().into(),
        TextTier::Medium,
    );
    button(
        out,
        regions.sawtooth,
        WavePreset::Sawtooth.label().into(),
        TextTier::Medium,
    );
    button(
        out,
        regions.triangle,
        WavePreset::Triangle.label().into(),
        TextTier::Medium,
    );
    button(
        out,
        regions.quality,
        format!("Quality: {}", params.quality.label()),
        TextTier::Medium,
    );
    let coef_text = if params.show_coefficients {
        "Hide Coefficients"
    } else {
        "Show Coefficients"
    };
    button(out, regions.coefficients, coef_text.into(), TextTier::Medium);
}

/// Truncated series readout, e.g. `f(x) = 1.27sin(x) + 0.42sin(3x) + ...`.
fn push_equation(
    out: &mut Vec<DrawPrimitive>,
    terms: &[HarmonicTerm],
    viewport: Viewport,
    text_color: Color32,
) {
    let mut eq = String::from("f(x) = ");
    for (i, term) in terms.iter().take(3).enumerate() {
        // Negative coefficients fold their sign into the separator.
        if i == 0 {
            if term.amplitude < 0.0 {
                eq.push('-');
            }
        } else {
            eq.push_str(if term.amplitude < 0.0 { " - " } else { " + " });
        }
        let coef = term.amplitude.abs();
        if term.n == 1 {
            eq.push_str(&format!("{coef:.2}sin(x)"));
        } else {
            eq.push_str(&format!("{coef:.2}sin({}x)", term.n));
        }
    }
    if terms.len() > 3 {
        eq.push_str(" + ...");
    }
    out.push(DrawPrimitive::Text {
        pos: Pos2::new(viewport.vw(5.0), viewport.vh(15.0)),
        text: eq,
        tier: TextTier::Medium,
        color: text_color,
        centered: false,
    });
}

/// Bar chart of the series coefficients with per-bar value and n labels.
fn push_coefficient_bars(
    out: &mut Vec<DrawPrimitive>,
    terms: &[HarmonicTerm],
    viewport: Viewport,
    text_color: Color32,
) {
    let bar_w = viewport.vw(2.0);
    let max_h = viewport.vh(15.0);
    let x_start = viewport.vw(5.0);
    let y_base = viewport.vh(40.0);
    for (i, term) in terms.iter().enumerate() {
        let x = x_start + i as f32 * bar_w * 2.0;
        let h = term.amplitude.abs() as f32 * max_h;
        out.push(DrawPrimitive::FillRect {
            rect: Rect::from_min_size(Pos2::new(x, y_base - h), egui::vec2(bar_w, h)),
            color: CIRCLE_COLORS[i % CIRCLE_COLORS.len()],
        });
        out.push(DrawPrimitive::Text {
            pos: Pos2::new(x, y_base + 5.0),
            text: format!("{:.2}", term.amplitude),
            tier: TextTier::Small,
            color: text_color,
            centered: false,
        });
        out.push(DrawPrimitive::Text {
            pos: Pos2::new(x, y_base + 20.0),
            text: format!("n={}", term.n),
            tier: TextTier::Small,
            color: text_color,
            centered: false,
        });
    }
}

fn push_help_overlay(
    out: &mut Vec<DrawPrimitive>,
    params: &ControlParameters,
    viewport: Viewport,
    text_color: Color32,
) {
    out.push(DrawPrimitive::FillRect {
        rect: Rect::from_min_size(
            Pos2::new(viewport.vw(5.0), viewport.vh(70.0)),
            egui::vec2(viewport.vw(90.0), viewport.vh(30.0)),
        ),
        color: params.scheme.overlay_fill(),
    });
    let mut y = viewport.vh(72.0);
    for line in HELP_LINES {
        out.push(DrawPrimitive::Text {
            pos: Pos2::new(viewport.vw(7.0), y),
            text: line.to_string(),
            tier: TextTier::Medium,
            color: text_color,
            centered: false,
        });
        y += viewport.vh(4.0);
    }
}
