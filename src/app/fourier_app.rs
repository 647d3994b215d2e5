//! eframe application wrapper around the simulation engine.
//!
//! The shell's responsibilities are deliberately thin: collect the frame's
//! pointer events into the core batch, hand them to
//! [`FourierScope::tick`], replay the returned primitives onto the egui
//! painter and schedule the next frame.

use std::time::Duration;

use eframe::egui;
use egui::{Align2, FontId, Painter, Stroke, Vec2};

use crate::color_scheme::ColorScheme;
use crate::config::FourierScopeConfig;
use crate::engine::FourierScope;
use crate::events::collect_pointer_events;
use crate::layout::Viewport;
use crate::render::{DrawPrimitive, TextTier};

pub struct FourierApp {
    scope: FourierScope,
    frame_interval: Duration,
    applied_scheme: Option<ColorScheme>,
}

impl FourierApp {
    pub fn new(cfg: &FourierScopeConfig) -> Self {
        let mut params = cfg.initial_params;
        params.scheme = cfg.color_scheme;
        // The real viewport is only known once the first frame runs; any
        // placeholder works because tick() relayouts on viewport change.
        let scope = FourierScope::new(params, Viewport::new(1280.0, 800.0));
        Self {
            scope,
            frame_interval: Duration::from_secs_f64(1.0 / cfg.fps.max(1) as f64),
            applied_scheme: None,
        }
    }
}

impl eframe::App for FourierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(collect_pointer_events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let viewport = Viewport::new(rect.width(), rect.height());
                // Events arrive in screen coordinates; the core works in
                // panel-local coordinates.
                let mut events = events.clone();
                for ev in &mut events {
                    ev.pos -= rect.min.to_vec2();
                }
                let primitives = self.scope.tick(&events, viewport);

                let scheme = self.scope.params().scheme;
                if self.applied_scheme != Some(scheme) {
                    scheme.apply(ctx);
                    self.applied_scheme = Some(scheme);
                }

                paint_primitives(ui.painter(), rect.min.to_vec2(), &primitives);
            });

        ctx.request_repaint_after(self.frame_interval);
    }
}

fn font_for(tier: TextTier) -> FontId {
    match tier {
        TextTier::Small => FontId::proportional(12.0),
        TextTier::Medium => FontId::proportional(16.0),
        TextTier::Large => FontId::proportional(22.0),
    }
}

/// Replay the core's primitive list onto the painter, in order. `offset`
/// translates core coordinates (panel top-left origin) to screen space.
fn paint_primitives(painter: &Painter, offset: Vec2, primitives: &[DrawPrimitive]) {
    for prim in primitives {
        match prim {
            DrawPrimitive::FillRect { rect, color } => {
                painter.rect_filled(rect.translate(offset), egui::CornerRadius::ZERO, *color);
            }
            DrawPrimitive::CircleOutline {
                center,
                radius,
                width,
                color,
            } => {
                painter.circle_stroke(*center + offset, *radius, Stroke::new(*width, *color));
            }
            DrawPrimitive::CircleFilled {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(*center + offset, *radius, *color);
            }
            DrawPrimitive::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment([*from + offset, *to + offset], Stroke::new(*width, *color));
            }
            DrawPrimitive::Point { pos, color } => {
                painter.circle_filled(*pos + offset, 1.0, *color);
            }
            DrawPrimitive::Text {
                pos,
                text,
                tier,
                color,
                centered,
            } => {
                let align = if *centered {
                    Align2::CENTER_CENTER
                } else {
                    Align2::LEFT_TOP
                };
                painter.text(*pos + offset, align, text, font_for(*tier), *color);
            }
        }
    }
}
