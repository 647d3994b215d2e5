//! Epicycle chain evaluation.
//!
//! Given a phase and the current harmonic terms, computes the sequence of
//! circle centers/radii for one frame by chained addition. The geometry is
//! a pure function of (terms, phase, anchor, base radius), so advancing the
//! phase `k` times by `s` yields the same chain as one evaluation at
//! accumulated phase `k·s`.

use std::f64::consts::TAU;

use egui::Pos2;

use crate::data::harmonics::HarmonicTerm;

/// One circle in the chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epicycle {
    /// Center of this circle (the previous circle's rim point).
    pub center: Pos2,
    /// Radius in pixels.
    pub radius: f32,
    /// Frequency multiplier applied to the phase.
    pub n: u32,
}

/// Per-frame epicycle geometry plus the running phase.
#[derive(Clone, Debug, Default)]
pub struct EpicycleState {
    /// Accumulated rotation phase, kept in `[0, 2π)`.
    pub phase: f64,
    /// Circle chain in ascending harmonic order.
    pub circles: Vec<Epicycle>,
    /// Final rim point of the last circle; the sample fed to the trace.
    pub tip: Pos2,
}

impl EpicycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the phase by `angular_speed * speed_multiplier` and rebuild
    /// the chain from `anchor`. Returns the new tip position.
    pub fn advance(
        &mut self,
        terms: &[HarmonicTerm],
        angular_speed: f64,
        speed_multiplier: f64,
        anchor: Pos2,
        max_radius: f32,
    ) -> Pos2 {
        // Wrap the accumulator so very long sessions do not lose precision.
        self.phase = (self.phase + angular_speed * speed_multiplier).rem_euclid(TAU);
        let (circles, tip) = evaluate_chain(terms, self.phase, anchor, max_radius);
        self.circles = circles;
        self.tip = tip;
        tip
    }

    /// Drop the chain and restart the phase. Called when the harmonic
    /// layout changes, since the phase-to-tip mapping is no longer the same.
    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.circles.clear();
        self.tip = Pos2::ZERO;
    }
}

/// Evaluate the chain at an absolute phase.
///
/// Circle `i` has radius `max_radius·|amplitude_i|` and rotates at
/// `n_i·phase`; its rim point is the next circle's center. The sign
/// convention is `x += r·cos(nφ)`, `y −= r·sin(nφ)` and is held fixed
/// throughout the crate. An empty term list short-circuits to the anchor.
pub fn evaluate_chain(
    terms: &[HarmonicTerm],
    phase: f64,
    anchor: Pos2,
    max_radius: f32,
) -> (Vec<Epicycle>, Pos2) {
    let mut circles = Vec::with_capacity(terms.len());
    let mut x = anchor.x as f64;
    let mut y = anchor.y as f64;
    for term in terms {
        let radius = max_radius as f64 * term.amplitude.abs();
        circles.push(Epicycle {
            center: Pos2::new(x as f32, y as f32),
            radius: radius as f32,
            n: term.n,
        });
        let angle = term.n as f64 * phase;
        // Signed amplitude flips the rotation for negative coefficients.
        let r = max_radius as f64 * term.amplitude;
        x += r * angle.cos();
        y -= r * angle.sin();
    }
    (circles, Pos2::new(x as f32, y as f32))
}
