use std::f64::consts::TAU;

use egui::Pos2;
use fourierscope::data::epicycles::{evaluate_chain, EpicycleState};
use fourierscope::data::harmonics::{generate_terms, WavePreset};

const ANCHOR: Pos2 = Pos2::new(300.0, 420.0);
const MAX_RADIUS: f32 = 100.0;

#[test]
fn advance_is_phase_additive() {
    let terms = generate_terms(WavePreset::Square, 6);
    let speed = 0.03;
    let steps = 7;

    let mut state = EpicycleState::new();
    for _ in 0..steps {
        state.advance(&terms, speed, 1.0, ANCHOR, MAX_RADIUS);
    }

    let accumulated = (steps as f64 * speed).rem_euclid(TAU);
    let (circles, tip) = evaluate_chain(&terms, accumulated, ANCHOR, MAX_RADIUS);

    assert!(
        (state.tip.x - tip.x).abs() < 1e-3 && (state.tip.y - tip.y).abs() < 1e-3,
        "k advances by s must equal one evaluation at k*s: {:?} vs {:?}",
        state.tip,
        tip
    );
    assert_eq!(state.circles.len(), circles.len());
    for (a, b) in state.circles.iter().zip(circles.iter()) {
        assert!(
            (a.center.x - b.center.x).abs() < 1e-3 && (a.center.y - b.center.y).abs() < 1e-3,
            "circle centers drifted: {:?} vs {:?}",
            a,
            b
        );
    }
}

#[test]
fn speed_multiplier_scales_phase_increment() {
    let terms = generate_terms(WavePreset::Square, 3);
    let mut half = EpicycleState::new();
    let mut full = EpicycleState::new();
    half.advance(&terms, 0.1, 0.5, ANCHOR, MAX_RADIUS);
    half.advance(&terms, 0.1, 0.5, ANCHOR, MAX_RADIUS);
    full.advance(&terms, 0.1, 1.0, ANCHOR, MAX_RADIUS);
    assert!(
        (half.phase - full.phase).abs() < 1e-12,
        "two half-speed steps must equal one full step"
    );
}

#[test]
fn chain_preserves_term_order() {
    let terms = generate_terms(WavePreset::Sawtooth, 8);
    let (circles, _) = evaluate_chain(&terms, 1.23, ANCHOR, MAX_RADIUS);
    assert_eq!(circles.len(), terms.len());
    for (circle, term) in circles.iter().zip(terms.iter()) {
        assert_eq!(
            circle.n, term.n,
            "chain must keep ascending harmonic order"
        );
        let expected_radius = MAX_RADIUS as f64 * term.amplitude.abs();
        assert!(
            (circle.radius as f64 - expected_radius).abs() < 1e-3,
            "radius of n={} must be max_radius * |amplitude|",
            term.n
        );
    }
}

#[test]
fn first_circle_sits_on_the_anchor() {
    let terms = generate_terms(WavePreset::Square, 4);
    let (circles, _) = evaluate_chain(&terms, 0.7, ANCHOR, MAX_RADIUS);
    assert_eq!(circles[0].center, ANCHOR);
}

#[test]
fn empty_terms_short_circuit_to_anchor() {
    let (circles, tip) = evaluate_chain(&[], 2.5, ANCHOR, MAX_RADIUS);
    assert!(circles.is_empty(), "no terms must produce no circles");
    assert_eq!(tip, ANCHOR, "degenerate chain collapses to the anchor");
}

#[test]
fn phase_wraps_into_zero_to_tau() {
    let terms = generate_terms(WavePreset::Square, 2);
    let mut state = EpicycleState::new();
    for _ in 0..100 {
        state.advance(&terms, 0.19, 1.0, ANCHOR, MAX_RADIUS);
        assert!(
            (0.0..TAU).contains(&state.phase),
            "phase {} escaped [0, 2pi)",
            state.phase
        );
    }
}

#[test]
fn reset_clears_phase_and_chain() {
    let terms = generate_terms(WavePreset::Square, 3);
    let mut state = EpicycleState::new();
    state.advance(&terms, 0.05, 1.0, ANCHOR, MAX_RADIUS);
    state.reset();
    assert_eq!(state.phase, 0.0);
    assert!(state.circles.is_empty());
}
