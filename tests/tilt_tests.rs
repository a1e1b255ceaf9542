// Host-side tests for the pointer tilt engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tilt {
    include!("../src/core/tilt.rs");
}

use glam::Vec2;
use std::time::Duration;
use tilt::*;

fn card() -> SurfaceRect {
    SurfaceRect::new(100.0, 50.0, 200.0, 100.0)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn normalized_sample_is_zero_at_center() {
    let s = normalized_sample(&card(), Vec2::new(200.0, 100.0)).unwrap();
    assert!(approx(s.x, 0.0));
    assert!(approx(s.y, 0.0));
}

#[test]
fn normalized_sample_reaches_unit_at_edges() {
    let rect = card();
    let top_left = normalized_sample(&rect, Vec2::new(100.0, 50.0)).unwrap();
    assert!(approx(top_left.x, -1.0));
    assert!(approx(top_left.y, -1.0));

    let bottom_right = normalized_sample(&rect, Vec2::new(300.0, 150.0)).unwrap();
    assert!(approx(bottom_right.x, 1.0));
    assert!(approx(bottom_right.y, 1.0));
}

#[test]
fn normalized_sample_is_not_clamped() {
    // 100px past the right edge of a 200px-wide card
    let s = normalized_sample(&card(), Vec2::new(400.0, 100.0)).unwrap();
    assert!(approx(s.x, 2.0));
}

#[test]
fn zero_size_surface_is_a_no_op() {
    let mut engine = TiltEngine::default();
    let flat = SurfaceRect::new(10.0, 10.0, 0.0, 80.0);
    assert!(normalized_sample(&flat, Vec2::new(10.0, 20.0)).is_none());
    assert!(engine.pointer_move(&flat, Vec2::new(10.0, 20.0)).is_none());
    assert!(engine.transform().is_identity());

    let thin = SurfaceRect::new(10.0, 10.0, 80.0, 0.0);
    assert!(engine.pointer_move(&thin, Vec2::new(10.0, 10.0)).is_none());
}

#[test]
fn moving_up_tilts_top_edge_away() {
    let config = TiltConfig::default();
    // Pointer at the top-centre of the card
    let t = tilt_for_sample(&config, Vec2::new(0.0, -1.0));
    assert!(approx(t.rotate_x_deg, config.max_angle_deg));
    assert!(approx(t.rotate_y_deg, 0.0));

    // Pointer at the right-centre
    let t = tilt_for_sample(&config, Vec2::new(1.0, 0.0));
    assert!(approx(t.rotate_x_deg, 0.0));
    assert!(approx(t.rotate_y_deg, config.max_angle_deg));
}

#[test]
fn rotation_is_bounded_inside_surface() {
    let rect = card();
    let mut engine = TiltEngine::default();
    let max = engine.config().max_angle_deg;
    for ix in 0..=20 {
        for iy in 0..=20 {
            let p = Vec2::new(
                rect.left + rect.width * ix as f32 / 20.0,
                rect.top + rect.height * iy as f32 / 20.0,
            );
            let frame = engine.pointer_move(&rect, p).unwrap();
            assert!(frame.transform.rotate_x_deg.abs() <= max + 1e-4);
            assert!(frame.transform.rotate_y_deg.abs() <= max + 1e-4);
        }
    }
}

#[test]
fn hover_uses_hover_scale_and_immediate_transition() {
    let mut engine = TiltEngine::default();
    engine.pointer_enter();
    let frame = engine.pointer_move(&card(), Vec2::new(150.0, 75.0)).unwrap();
    assert!(approx(frame.transform.scale, engine.config().hover_scale));
    assert_eq!(frame.transition, Transition::Immediate);
    assert!(engine.is_hovering());
}

#[test]
fn leave_resets_to_identity_with_eased_transition() {
    let mut engine = TiltEngine::default();
    engine.pointer_enter();
    engine.pointer_move(&card(), Vec2::new(290.0, 55.0)).unwrap();
    assert!(!engine.transform().is_identity());

    let frame = engine.pointer_leave();
    assert_eq!(frame.transform, TiltTransform::IDENTITY);
    assert_eq!(frame.transition, Transition::Ease(Duration::from_millis(500)));
    assert_eq!(frame.gloss.opacity, 0.0);
    assert!(!engine.is_hovering());
}

#[test]
fn gloss_tracks_pointer_while_hovering() {
    let mut engine = TiltEngine::default();
    assert_eq!(engine.gloss(), Gloss::HIDDEN);

    // Right edge, vertical centre
    let frame = engine.pointer_move(&card(), Vec2::new(300.0, 100.0)).unwrap();
    assert!(frame.gloss.opacity > 0.0);
    assert!(approx(frame.gloss.center_pct.x, 100.0));
    assert!(approx(frame.gloss.center_pct.y, 50.0));
}

#[test]
fn css_strings_are_well_formed() {
    let t = TiltTransform {
        rotate_x_deg: 10.0,
        rotate_y_deg: -5.5,
        scale: 1.05,
    };
    assert_eq!(
        t.to_css(1000.0),
        "perspective(1000px) rotateX(10.00deg) rotateY(-5.50deg) scale(1.050)"
    );
    assert_eq!(Transition::Immediate.to_css(), "none");
    assert_eq!(
        Transition::Ease(Duration::from_millis(500)).to_css(),
        "transform 500ms ease-out"
    );
    assert!(Gloss::HIDDEN.background_css().contains("50.0% 50.0%"));
}

#[test]
fn custom_config_scales_rotation() {
    let config = TiltConfig {
        max_angle_deg: 8.0,
        ..TiltConfig::default()
    };
    let t = tilt_for_sample(&config, Vec2::new(0.5, 0.5));
    assert!(approx(t.rotate_x_deg, -4.0));
    assert!(approx(t.rotate_y_deg, 4.0));
}
