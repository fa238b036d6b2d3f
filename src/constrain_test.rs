use super::*;

// =============================================================
// Helpers
// =============================================================

fn rect(x: i32, y: i32, w: i32, h: i32) -> Shape {
    Shape {
        id: 1,
        kind: ShapeKind::Rect,
        x,
        y,
        w,
        h,
        fill: "#60a5fa".to_owned(),
        stroke: "#1f2937".to_owned(),
        stroke_width: 2,
        corner_radius: 8,
    }
}

fn in_bounds(shape: &Shape, w: i32, h: i32) -> bool {
    shape.x >= 0
        && shape.y >= 0
        && shape.w >= 1
        && shape.h >= 1
        && shape.x + shape.w <= w
        && shape.y + shape.h <= h
}

// =============================================================
// Geometry clamping
// =============================================================

#[test]
fn in_bounds_shape_unchanged() {
    let mut shape = rect(10, 20, 100, 80);
    constrain(&mut shape, 400, 400);
    assert_eq!((shape.x, shape.y, shape.w, shape.h), (10, 20, 100, 80));
}

#[test]
fn oversized_shape_shrinks_to_artboard() {
    let mut shape = rect(0, 0, 900, 900);
    constrain(&mut shape, 400, 300);
    assert_eq!((shape.w, shape.h), (400, 300));
    assert_eq!((shape.x, shape.y), (0, 0));
}

#[test]
fn zero_size_floors_at_one() {
    let mut shape = rect(10, 10, 0, -5);
    constrain(&mut shape, 400, 400);
    assert_eq!((shape.w, shape.h), (1, 1));
}

#[test]
fn negative_position_clamps_to_zero() {
    let mut shape = rect(-50, -20, 100, 80);
    constrain(&mut shape, 400, 400);
    assert_eq!((shape.x, shape.y), (0, 0));
}

#[test]
fn overflowing_position_pulled_back_inside() {
    let mut shape = rect(380, 390, 100, 80);
    constrain(&mut shape, 400, 400);
    assert_eq!((shape.x, shape.y), (300, 320));
    assert!(in_bounds(&shape, 400, 400));
}

#[test]
fn size_clamped_before_position() {
    // Width exceeds the artboard AND the shape sits off the right edge;
    // both must resolve without underflowing x below zero.
    let mut shape = rect(350, 0, 600, 50);
    constrain(&mut shape, 400, 400);
    assert_eq!(shape.w, 400);
    assert_eq!(shape.x, 0);
}

#[test]
fn degenerate_artboard_treated_as_one_by_one() {
    let mut shape = rect(10, 10, 50, 50);
    constrain(&mut shape, 0, -3);
    assert_eq!((shape.x, shape.y, shape.w, shape.h), (0, 0, 1, 1));
}

#[test]
fn bounds_invariant_holds_for_grid_of_inputs() {
    for x in [-100, 0, 37, 399, 1000] {
        for w in [-10, 0, 1, 200, 401, 5000] {
            let mut shape = rect(x, x, w, w);
            constrain(&mut shape, 400, 400);
            assert!(in_bounds(&shape, 400, 400), "violated for x={x} w={w}: {shape:?}");
        }
    }
}

// =============================================================
// Style normalization
// =============================================================

#[test]
fn negative_stroke_width_floors_at_zero() {
    let mut shape = rect(0, 0, 10, 10);
    shape.stroke_width = -4;
    constrain(&mut shape, 400, 400);
    assert_eq!(shape.stroke_width, 0);
}

#[test]
fn rect_negative_radius_floors_at_zero() {
    let mut shape = rect(0, 0, 10, 10);
    shape.corner_radius = -1;
    constrain(&mut shape, 400, 400);
    assert_eq!(shape.corner_radius, 0);
}

#[test]
fn rect_radius_preserved() {
    let mut shape = rect(0, 0, 10, 10);
    constrain(&mut shape, 400, 400);
    assert_eq!(shape.corner_radius, 8);
}

#[test]
fn ellipse_radius_forced_to_sentinel() {
    let mut shape = rect(0, 0, 10, 10);
    shape.kind = ShapeKind::Ellipse;
    shape.corner_radius = 3;
    constrain(&mut shape, 400, 400);
    assert_eq!(shape.corner_radius, FULL_ROUND_RADIUS);
}

#[test]
fn ellipse_sentinel_survives_any_supplied_value() {
    for radius in [-1, 0, 12, FULL_ROUND_RADIUS, i32::MAX] {
        let mut shape = rect(0, 0, 10, 10);
        shape.kind = ShapeKind::Ellipse;
        shape.corner_radius = radius;
        constrain(&mut shape, 400, 400);
        assert_eq!(shape.corner_radius, FULL_ROUND_RADIUS);
    }
}
