//! Geometry clamping that keeps edited shapes inside the artboard.
//!
//! Gesture-created shapes are in-bounds by construction because the drag
//! anchor and cursor are clamped while drawing. Manual edits arrive with
//! arbitrary numbers and must be re-clamped before they are committed.

#[cfg(test)]
#[path = "constrain_test.rs"]
mod constrain_test;

use crate::consts::FULL_ROUND_RADIUS;
use crate::doc::{Shape, ShapeKind};

/// Clamp a shape's geometry to the artboard bounds.
///
/// Size first: `w` to `[1, artboard_w]`, `h` to `[1, artboard_h]`; then
/// position: `x` to `[0, artboard_w - w]`, `y` to `[0, artboard_h - h]`.
/// Ellipses get the full-round sentinel forced regardless of any supplied
/// radius; rectangle radii are floored at zero.
pub fn constrain(shape: &mut Shape, artboard_w: i32, artboard_h: i32) {
    let max_w = artboard_w.max(1);
    let max_h = artboard_h.max(1);
    shape.w = shape.w.clamp(1, max_w);
    shape.h = shape.h.clamp(1, max_h);
    shape.x = shape.x.clamp(0, max_w - shape.w);
    shape.y = shape.y.clamp(0, max_h - shape.h);
    shape.stroke_width = shape.stroke_width.max(0);
    shape.corner_radius = match shape.kind {
        ShapeKind::Ellipse => FULL_ROUND_RADIUS,
        ShapeKind::Rect => shape.corner_radius.max(0),
    };
}
