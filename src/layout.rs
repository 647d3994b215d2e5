//! Viewport sizing and derived layout constants.
//!
//! Everything the renderer and controls position on screen is expressed in
//! percentages of the current surface size, so a host-triggered resize only
//! requires recomputing [`Layout`]. All derived constants live here and are
//! rebuilt wholesale whenever the circle count, preset or viewport changes;
//! they are never mutated piecemeal.

use egui::Pos2;

use crate::data::harmonics::{total_amplitude, HarmonicTerm};

/// Current drawing surface size, addressed top-left-origin in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width percentage in pixels.
    pub fn vw(&self, pct: f32) -> f32 {
        pct * self.width / 100.0
    }

    /// Height percentage in pixels.
    pub fn vh(&self, pct: f32) -> f32 {
        pct * self.height / 100.0
    }
}

/// Derived layout constants for one (terms, viewport) combination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Base radius of the fundamental circle.
    pub max_radius: f32,
    /// Worst-case chain extent from the anchor.
    pub total_radius: f32,
    /// Chain anchor point.
    pub center: Pos2,
    /// Left edge of the trace lane.
    pub line_x: f32,
    /// Width of the trace lane in pixels; also the trace buffer capacity.
    pub line_w: f32,
}

impl Layout {
    /// Compute the layout for the current term list and viewport.
    ///
    /// The anchor sits past the worst-case chain extent so the circles
    /// never overlap the trace lane; the lane takes the remaining width.
    pub fn compute(terms: &[HarmonicTerm], viewport: Viewport) -> Self {
        let max_radius = viewport.vw(10.0);
        let total_radius = (max_radius as f64 * total_amplitude(terms)) as f32;
        let center = Pos2::new(total_radius + 32.0, viewport.vh(60.0));
        let line_x = center.x * 2.0;
        let line_w = (viewport.vw(100.0) - line_x - 20.0).max(0.0);
        Self {
            max_radius,
            total_radius,
            center,
            line_x,
            line_w,
        }
    }

    /// Trace buffer capacity: one sample per lane pixel column.
    pub fn trace_capacity(&self) -> usize {
        self.line_w as usize
    }

    /// Whether an x coordinate falls inside the trace lane.
    pub fn in_trace_lane(&self, x: f32) -> bool {
        x >= self.line_x && x <= self.line_x + self.line_w
    }
}
