use egui::Pos2;
use fourierscope::controls::{
    ControlParameters, ControlRegions, QualityLevel, MAX_ANGULAR_SPEED, MIN_ANGULAR_SPEED,
};
use fourierscope::data::harmonics::WavePreset;
use fourierscope::events::PointerEvent;
use fourierscope::layout::Viewport;

fn regions() -> ControlRegions {
    ControlRegions::compute(Viewport::new(1280.0, 800.0))
}

#[test]
fn hit_regions_are_pairwise_disjoint() {
    for (w, h) in [
        (800.0, 600.0),
        (1280.0, 800.0),
        (1920.0, 1080.0),
        (2560.0, 1440.0),
    ] {
        let all = ControlRegions::compute(Viewport::new(w, h)).all();
        for (i, (name_a, a)) in all.iter().enumerate() {
            for (name_b, b) in all.iter().skip(i + 1) {
                assert!(
                    !a.intersects(*b),
                    "regions {name_a} and {name_b} overlap at viewport {w}x{h}: {a:?} vs {b:?}"
                );
            }
        }
    }
}

#[test]
fn circle_increase_clamps_at_fifteen() {
    let regions = regions();
    let mut params = ControlParameters::default();
    for _ in 0..20 {
        params.apply_event(&PointerEvent::up(regions.circles_inc.center()), &regions);
    }
    assert_eq!(
        params.circle_count, 15,
        "20 increments from 6 must clamp at 15, not reach 26"
    );
}

#[test]
fn circle_decrease_clamps_at_one() {
    let regions = regions();
    let mut params = ControlParameters::default();
    for _ in 0..20 {
        params.apply_event(&PointerEvent::up(regions.circles_dec.center()), &regions);
    }
    assert_eq!(params.circle_count, 1);
}

#[test]
fn circle_change_reports_geometry_invalidation() {
    let regions = regions();
    let mut params = ControlParameters::default();
    let fx = params.apply_event(&PointerEvent::up(regions.circles_inc.center()), &regions);
    assert!(fx.geometry_invalidated);
    // Already clamped: a no-op release must not invalidate.
    params.circle_count = 15;
    let fx = params.apply_event(&PointerEvent::up(regions.circles_inc.center()), &regions);
    assert!(
        !fx.geometry_invalidated,
        "clamped increment changes nothing and must not reset the trace"
    );
}

#[test]
fn angular_speed_stays_in_range() {
    let regions = regions();
    let mut params = ControlParameters::default();
    for _ in 0..500 {
        params.apply_event(&PointerEvent::up(regions.freq_inc.center()), &regions);
    }
    assert!((params.angular_speed - MAX_ANGULAR_SPEED).abs() < 1e-12);
    for _ in 0..500 {
        params.apply_event(&PointerEvent::up(regions.freq_dec.center()), &regions);
    }
    assert!((params.angular_speed - MIN_ANGULAR_SPEED).abs() < 1e-12);
}

#[test]
fn preset_selection_clamps_circles_and_invalidates() {
    let regions = regions();
    let mut params = ControlParameters {
        circle_count: 14,
        ..Default::default()
    };
    let fx = params.apply_event(&PointerEvent::up(regions.sawtooth.center()), &regions);
    assert_eq!(params.selected_preset, Some(WavePreset::Sawtooth));
    assert_eq!(
        params.circle_count, 10,
        "presets clamp the circle count to the performance ceiling"
    );
    assert!(
        fx.geometry_invalidated,
        "switching presets always invalidates geometry"
    );

    // Re-picking the active preset still invalidates.
    let fx = params.apply_event(&PointerEvent::up(regions.sawtooth.center()), &regions);
    assert!(fx.geometry_invalidated);
}

#[test]
fn theme_toggle_leaves_numeric_state_alone() {
    let regions = regions();
    let mut params = ControlParameters::default();
    let before = params;
    params.apply_event(&PointerEvent::up(regions.theme.center()), &regions);
    assert_ne!(params.scheme, before.scheme);
    assert_eq!(params.circle_count, before.circle_count);
    assert_eq!(params.angular_speed, before.angular_speed);
    assert_eq!(params.animation_speed, before.animation_speed);
}

#[test]
fn speed_slider_clamps_to_range() {
    let regions = regions();
    let slider = regions.speed_slider;
    let mut params = ControlParameters::default();

    params.apply_event(&PointerEvent::down(slider.left_center()), &regions);
    assert!(
        (params.animation_speed - 0.1).abs() < 1e-6,
        "left edge must clamp to the 0.1 floor, got {}",
        params.animation_speed
    );

    params.apply_event(&PointerEvent::down(slider.center()), &regions);
    assert!((params.animation_speed - 0.5).abs() < 1e-3);

    params.apply_event(
        &PointerEvent::down(Pos2::new(slider.max.x - 0.01, slider.center().y)),
        &regions,
    );
    assert!(
        params.animation_speed <= 1.0 && params.animation_speed > 0.99,
        "right edge must cap at 1.0, got {}",
        params.animation_speed
    );
}

#[test]
fn quality_cycles_through_segment_counts() {
    let regions = regions();
    let mut params = ControlParameters::default();
    assert_eq!(params.quality, QualityLevel::Medium);
    assert_eq!(params.quality.segments_per_span(), 5);

    params.apply_event(&PointerEvent::up(regions.quality.center()), &regions);
    assert_eq!(params.quality.segments_per_span(), 10);
    params.apply_event(&PointerEvent::up(regions.quality.center()), &regions);
    assert_eq!(params.quality, QualityLevel::Low);
    assert_eq!(params.quality.segments_per_span(), 3);
    params.apply_event(&PointerEvent::up(regions.quality.center()), &regions);
    assert_eq!(params.quality, QualityLevel::Medium);
}

#[test]
fn toggles_flip_their_flags_only() {
    let regions = regions();
    let mut params = ControlParameters::default();

    let fx = params.apply_event(&PointerEvent::up(regions.drawing.center()), &regions);
    assert!(params.drawing_mode);
    assert!(fx.drawing_toggled);

    params.apply_event(&PointerEvent::up(regions.help.center()), &regions);
    assert!(params.show_help);

    params.apply_event(&PointerEvent::up(regions.coefficients.center()), &regions);
    assert!(!params.show_coefficients);
}

#[test]
fn release_outside_every_region_is_ignored() {
    let regions = regions();
    let mut params = ControlParameters::default();
    let before = params;
    params.apply_event(&PointerEvent::up(Pos2::new(700.0, 500.0)), &regions);
    assert_eq!(params, before, "a miss must not mutate any parameter");
}
