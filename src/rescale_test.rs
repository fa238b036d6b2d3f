#![allow(clippy::float_cmp)]

use super::*;

use crate::doc::{ShapeKind, ShapeSeed, ShapeStore};

// =============================================================
// Helpers
// =============================================================

fn store_with(x: i32, y: i32, w: i32, h: i32) -> ShapeStore {
    let mut store = ShapeStore::new();
    store.add(ShapeSeed {
        kind: ShapeKind::Rect,
        x,
        y,
        w,
        h,
        fill: "#60a5fa".to_owned(),
        stroke: "#1f2937".to_owned(),
        stroke_width: 1,
        corner_radius: 0,
    });
    store
}

fn geometry(store: &ShapeStore) -> (i32, i32, i32, i32) {
    let s = &store.shapes()[0];
    (s.x, s.y, s.w, s.h)
}

// =============================================================
// scale_factor
// =============================================================

#[test]
fn factor_is_quotient_for_positive_dimensions() {
    assert_eq!(scale_factor(400.0, 800.0), 2.0);
    assert_eq!(scale_factor(800.0, 400.0), 0.5);
}

#[test]
fn factor_identity_for_equal_dimensions() {
    assert_eq!(scale_factor(393.0, 393.0), 1.0);
}

#[test]
fn factor_forced_to_one_for_zero_old() {
    assert_eq!(scale_factor(0.0, 500.0), 1.0);
}

#[test]
fn factor_forced_to_one_for_zero_new() {
    assert_eq!(scale_factor(500.0, 0.0), 1.0);
}

#[test]
fn factor_forced_to_one_for_negative_dimensions() {
    assert_eq!(scale_factor(-10.0, 400.0), 1.0);
    assert_eq!(scale_factor(400.0, -10.0), 1.0);
}

#[test]
fn factor_forced_to_one_for_non_finite_input() {
    assert_eq!(scale_factor(f64::NAN, 400.0), 1.0);
    assert_eq!(scale_factor(400.0, f64::INFINITY), 1.0);
}

// =============================================================
// apply_scale
// =============================================================

#[test]
fn identity_scale_leaves_geometry_unchanged() {
    let mut store = store_with(13, 77, 201, 99);
    apply_scale(&mut store, 1.0, 1.0);
    assert_eq!(geometry(&store), (13, 77, 201, 99));
}

#[test]
fn doubling_scale_doubles_geometry() {
    // 400×400 artboard growing to 800×800.
    let mut store = store_with(100, 100, 50, 50);
    apply_scale(&mut store, 2.0, 2.0);
    assert_eq!(geometry(&store), (200, 200, 100, 100));
}

#[test]
fn axes_scale_independently() {
    let mut store = store_with(100, 100, 50, 50);
    apply_scale(&mut store, 2.0, 0.5);
    assert_eq!(geometry(&store), (200, 50, 100, 25));
}

#[test]
fn rounding_is_half_away_from_zero() {
    // 1 × 2.5 = 2.5 rounds to 3, 3 × 2.5 = 7.5 rounds to 8.
    let mut store = store_with(1, 3, 1, 3);
    apply_scale(&mut store, 2.5, 2.5);
    assert_eq!(geometry(&store), (3, 8, 3, 8));
}

#[test]
fn rounding_is_deterministic_across_repeats() {
    let mut a = store_with(7, 11, 33, 47);
    let mut b = store_with(7, 11, 33, 47);
    apply_scale(&mut a, 1.37, 0.81);
    apply_scale(&mut b, 1.37, 0.81);
    assert_eq!(geometry(&a), geometry(&b));
}

#[test]
fn every_shape_in_store_is_scaled() {
    let mut store = ShapeStore::new();
    for i in 0..5 {
        store.add(ShapeSeed {
            kind: ShapeKind::Rect,
            x: i * 10,
            y: i * 10,
            w: 20,
            h: 20,
            fill: String::new(),
            stroke: String::new(),
            stroke_width: 0,
            corner_radius: 0,
        });
    }
    apply_scale(&mut store, 2.0, 2.0);
    for (i, shape) in store.shapes().iter().enumerate() {
        let expected = i32::try_from(i).unwrap() * 20;
        assert_eq!(shape.x, expected);
        assert_eq!(shape.w, 40);
    }
}

// =============================================================
// Tokens
// =============================================================

#[test]
fn tokens_compare_by_sequence() {
    assert_eq!(RescaleToken(3), RescaleToken(3));
    assert_ne!(RescaleToken(3), RescaleToken(4));
}

#[test]
fn pending_exposes_its_token() {
    let pending = PendingRescale { token: RescaleToken(9), baseline_w: 400.0, baseline_h: 300.0 };
    assert_eq!(pending.token(), RescaleToken(9));
}
