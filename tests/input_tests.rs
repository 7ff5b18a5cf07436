// Host-side tests for pure input math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn ndc_maps_viewport_corners() {
    let viewport = Vec2::new(800.0, 600.0);
    let tl = pointer_ndc(Vec2::new(0.0, 0.0), viewport);
    assert!((tl - Vec2::new(-1.0, 1.0)).length() < 1e-6);
    let br = pointer_ndc(Vec2::new(800.0, 600.0), viewport);
    assert!((br - Vec2::new(1.0, -1.0)).length() < 1e-6);
}

#[test]
fn ndc_center_is_origin() {
    let viewport = Vec2::new(800.0, 600.0);
    let c = pointer_ndc(Vec2::new(400.0, 300.0), viewport);
    assert!(c.length() < 1e-6);
}

#[test]
fn ndc_y_points_up() {
    let viewport = Vec2::new(100.0, 100.0);
    let near_top = pointer_ndc(Vec2::new(50.0, 10.0), viewport);
    let near_bottom = pointer_ndc(Vec2::new(50.0, 90.0), viewport);
    assert!(near_top.y > 0.0);
    assert!(near_bottom.y < 0.0);
}

#[test]
fn degenerate_viewport_maps_to_center() {
    assert_eq!(pointer_ndc(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
    assert_eq!(
        pointer_ndc(Vec2::new(10.0, 10.0), Vec2::new(100.0, 0.0)),
        Vec2::ZERO
    );
}
