//! Interaction state: control parameters, hit regions and transition rules.
//!
//! [`ControlParameters`] is a plain value type owning every adjustable
//! parameter; all other components receive it read-only each frame. Pointer
//! input mutates it exclusively through [`ControlParameters::apply_event`],
//! which clamps every numeric parameter at the point of mutation — buttons
//! can never produce out-of-range state.

use egui::{Pos2, Rect};

use crate::color_scheme::ColorScheme;
use crate::data::harmonics::WavePreset;
use crate::events::{PointerEvent, PointerEventKind};
use crate::layout::Viewport;

// ─────────────────────────────────────────────────────────────────────────────
// Parameter ranges
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_CIRCLES: u32 = 1;
pub const MAX_CIRCLES: u32 = 15;
/// Preset selection clamps the circle count to bound coefficient work.
pub const PRESET_CIRCLE_CEILING: u32 = 10;

pub const MIN_ANGULAR_SPEED: f64 = 1.0 / 1000.0;
pub const MAX_ANGULAR_SPEED: f64 = 1.0 / 5.0;
pub const ANGULAR_SPEED_STEP: f64 = 1.0 / 800.0;

pub const MIN_ANIMATION_SPEED: f64 = 0.1;
pub const MAX_ANIMATION_SPEED: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Quality level
// ─────────────────────────────────────────────────────────────────────────────

/// Output quality, mapped to the number of spline samples per span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::Low => "Low",
            QualityLevel::Medium => "Medium",
            QualityLevel::High => "High",
        }
    }

    /// Spline samples emitted per 4-point window.
    pub fn segments_per_span(&self) -> usize {
        match self {
            QualityLevel::Low => 3,
            QualityLevel::Medium => 5,
            QualityLevel::High => 10,
        }
    }

    /// Next level, wrapping High back to Low.
    pub fn cycled(&self) -> QualityLevel {
        match self {
            QualityLevel::Low => QualityLevel::Medium,
            QualityLevel::Medium => QualityLevel::High,
            QualityLevel::High => QualityLevel::Low,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ControlParameters
// ─────────────────────────────────────────────────────────────────────────────

/// All adjustable parameters of the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlParameters {
    /// Number of harmonic terms / circles, in `[1, 15]`.
    pub circle_count: u32,
    /// Phase increment per frame in radians, in `[1/1000, 1/5]`.
    pub angular_speed: f64,
    /// Multiplier applied to the phase increment, in `[0.1, 1.0]`.
    pub animation_speed: f64,
    /// When on, pointer drags in the trace lane are captured instead of
    /// feeding the simulation.
    pub drawing_mode: bool,
    pub scheme: ColorScheme,
    pub quality: QualityLevel,
    pub show_coefficients: bool,
    pub show_help: bool,
    /// `None` renders the default odd-harmonic square series.
    pub selected_preset: Option<WavePreset>,
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            circle_count: 6,
            angular_speed: 1.0 / 100.0,
            animation_speed: 1.0,
            drawing_mode: false,
            scheme: ColorScheme::default(),
            quality: QualityLevel::default(),
            show_coefficients: true,
            show_help: false,
            selected_preset: None,
        }
    }
}

/// Invalidations produced by a control transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlEffects {
    /// Harmonic layout changed: terms, layout and trace history are stale.
    pub geometry_invalidated: bool,
    /// Drawing mode flipped; the captured wave must be cleared.
    pub drawing_toggled: bool,
}

impl ControlEffects {
    pub fn merge(&mut self, other: ControlEffects) {
        self.geometry_invalidated |= other.geometry_invalidated;
        self.drawing_toggled |= other.drawing_toggled;
    }
}

impl ControlParameters {
    /// Formula family currently in effect.
    pub fn active_preset(&self) -> WavePreset {
        self.selected_preset.unwrap_or(WavePreset::Square)
    }

    /// Apply one pointer event against the control hit regions.
    ///
    /// Regions are disjoint, so a release maps to exactly one parameter
    /// mutation. The animation-speed slider reacts to presses instead of
    /// releases so it can be grabbed directly.
    pub fn apply_event(
        &mut self,
        event: &PointerEvent,
        regions: &ControlRegions,
    ) -> ControlEffects {
        let mut fx = ControlEffects::default();
        match event.kind {
            PointerEventKind::Up => {
                let pos = event.pos;
                if regions.freq_dec.contains(pos) {
                    self.angular_speed =
                        (self.angular_speed - ANGULAR_SPEED_STEP).max(MIN_ANGULAR_SPEED);
                } else if regions.freq_inc.contains(pos) {
                    self.angular_speed =
                        (self.angular_speed + ANGULAR_SPEED_STEP).min(MAX_ANGULAR_SPEED);
                } else if regions.circles_dec.contains(pos) {
                    fx.geometry_invalidated |= self.set_circle_count(self.circle_count.saturating_sub(1));
                } else if regions.circles_inc.contains(pos) {
                    fx.geometry_invalidated |= self.set_circle_count(self.circle_count + 1);
                } else if regions.theme.contains(pos) {
                    self.scheme = self.scheme.toggled();
                } else if regions.square.contains(pos) {
                    fx.geometry_invalidated = true;
                    self.select_preset(WavePreset::Square);
                } else if regions.sawtooth.contains(pos) {
                    fx.geometry_invalidated = true;
                    self.select_preset(WavePreset::Sawtooth);
                } else if regions.triangle.contains(pos) {
                    fx.geometry_invalidated = true;
                    self.select_preset(WavePreset::Triangle);
                } else if regions.drawing.contains(pos) {
                    self.drawing_mode = !self.drawing_mode;
                    fx.drawing_toggled = true;
                } else if regions.help.contains(pos) {
                    self.show_help = !self.show_help;
                } else if regions.quality.contains(pos) {
                    self.quality = self.quality.cycled();
                } else if regions.coefficients.contains(pos) {
                    self.show_coefficients = !self.show_coefficients;
                }
            }
            PointerEventKind::Down => {
                if regions.speed_slider.contains(event.pos) {
                    let frac = (event.pos.x - regions.speed_slider.min.x)
                        / regions.speed_slider.width();
                    self.animation_speed =
                        (frac as f64).clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED);
                }
            }
            PointerEventKind::Move => {}
        }
        fx
    }

    /// Clamp and store a new circle count; true if it actually changed.
    fn set_circle_count(&mut self, count: u32) -> bool {
        let clamped = count.clamp(MIN_CIRCLES, MAX_CIRCLES);
        let changed = clamped != self.circle_count;
        self.circle_count = clamped;
        changed
    }

    /// Selecting a preset always invalidates geometry, even when re-picking
    /// the current one, and clamps the circle count to the preset ceiling.
    fn select_preset(&mut self, preset: WavePreset) {
        self.selected_preset = Some(preset);
        self.circle_count = self.circle_count.min(PRESET_CIRCLE_CEILING);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hit regions
// ─────────────────────────────────────────────────────────────────────────────

/// Pixel hit rectangles for every control, derived from the viewport.
///
/// The rectangles must stay pairwise disjoint at every supported viewport
/// size so that one release maps to exactly one mutation; a test walks
/// [`ControlRegions::all`] to verify this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRegions {
    pub freq_dec: Rect,
    pub freq_inc: Rect,
    pub circles_dec: Rect,
    pub circles_inc: Rect,
    pub theme: Rect,
    pub speed_slider: Rect,
    pub drawing: Rect,
    pub help: Rect,
    pub square: Rect,
    pub sawtooth: Rect,
    pub triangle: Rect,
    pub quality: Rect,
    pub coefficients: Rect,
}

impl ControlRegions {
    pub fn compute(viewport: Viewport) -> Self {
        let btn_w = viewport.vw(6.0);
        let btn_h = viewport.vh(5.0);
        let ctrls_y = viewport.vh(5.0);
        let preset_y = ctrls_y + btn_h + viewport.vh(8.0);
        let btn = |x: f32, y: f32, w: f32| {
            Rect::from_min_size(Pos2::new(x, y), egui::vec2(w, btn_h))
        };
        Self {
            freq_dec: btn(viewport.vw(5.0), ctrls_y, btn_w),
            freq_inc: btn(viewport.vw(5.0) + btn_w + 4.0, ctrls_y, btn_w),
            circles_dec: btn(viewport.vw(20.0), ctrls_y, btn_w),
            circles_inc: btn(viewport.vw(20.0) + btn_w + 4.0, ctrls_y, btn_w),
            theme: btn(viewport.vw(35.0), ctrls_y, btn_w * 1.5),
            speed_slider: Rect::from_min_size(
                Pos2::new(viewport.vw(45.0), ctrls_y),
                egui::vec2(viewport.vw(15.0), viewport.vh(2.0)),
            ),
            drawing: btn(viewport.vw(62.0), ctrls_y, btn_w * 1.8),
            help: btn(viewport.vw(75.0), ctrls_y, btn_w * 1.5),
            square: btn(viewport.vw(5.0), preset_y, btn_w * 1.5),
            sawtooth: btn(viewport.vw(15.0), preset_y, btn_w * 1.5),
            triangle: btn(viewport.vw(25.0), preset_y, btn_w * 1.5),
            quality: btn(viewport.vw(35.0), preset_y, btn_w * 1.5),
            coefficients: btn(viewport.vw(45.0), preset_y, btn_w * 2.0),
        }
    }

    /// All regions with their names, for iteration in tests and rendering.
    pub fn all(&self) -> [(&'static str, Rect); 13] {
        [
            ("freq_dec", self.freq_dec),
            ("freq_inc", self.freq_inc),
            ("circles_dec", self.circles_dec),
            ("circles_inc", self.circles_inc),
            ("theme", self.theme),
            ("speed_slider", self.speed_slider),
            ("drawing", self.drawing),
            ("help", self.help),
            ("square", self.square),
            ("sawtooth", self.sawtooth),
            ("triangle", self.triangle),
            ("quality", self.quality),
            ("coefficients", self.coefficients),
        ]
    }
}
