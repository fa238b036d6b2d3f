//! Document model: shapes, sparse edits, and the in-memory store.
//!
//! This module defines the core data types that describe what is on the
//! artboard (`Shape`, `ShapeKind`), a sparse-update type for the edit path
//! (`PartialShape`), and the runtime store that owns all live shapes
//! (`ShapeStore`). The store is an ordered list: insertion order is the
//! render and table order, there is no separate z-index.
//!
//! Ids are allocated from a monotonically increasing sequence that is never
//! reset, so an id is never reused — not after deletion and not after
//! `clear`.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::FULL_ROUND_RADIUS;

/// Unique identifier for a shape.
pub type ShapeId = u64;

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle with an optional corner radius.
    Rect,
    /// Ellipse inscribed within the bounding box.
    Ellipse,
}

impl ShapeKind {
    /// Lowercase name used in tables and generated code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
        }
    }
}

/// A shape as stored in the document and embedded in generated code.
///
/// Geometry is in artboard-local pixels: `x`/`y` are the top-left offset
/// (`>= 0` after constraining), `w`/`h` the size (`>= 1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier, assigned by the store and never reused.
    pub id: ShapeId,
    /// Rectangle or ellipse.
    pub kind: ShapeKind,
    /// Left edge in artboard pixels.
    pub x: i32,
    /// Top edge in artboard pixels.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
    /// Fill color; any CSS-compatible color string, opaque to the engine.
    pub fill: String,
    /// Stroke color.
    pub stroke: String,
    /// Stroke width in pixels.
    pub stroke_width: i32,
    /// Corner radius in pixels; always [`FULL_ROUND_RADIUS`] for ellipses.
    pub corner_radius: i32,
}

impl Shape {
    /// Whether this shape carries the full-round ellipse sentinel.
    #[must_use]
    pub fn is_fully_rounded(&self) -> bool {
        self.corner_radius >= FULL_ROUND_RADIUS
    }
}

/// Geometry and style for a shape about to be created; the store adds the id.
#[derive(Debug, Clone)]
pub struct ShapeSeed {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: i32,
    pub corner_radius: i32,
}

/// Sparse update for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialShape {
    /// New kind, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShapeKind>,
    /// New left edge, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// New top edge, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<i32>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<i32>,
    /// New fill color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// New stroke color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// New stroke width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<i32>,
    /// New corner radius, if being updated. Ignored in effect for ellipses:
    /// the constraint pass restores the full-round sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<i32>,
}

/// In-memory store of shapes, in insertion order.
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl ShapeStore {
    /// Create an empty store. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new(), next_id: 1 }
    }

    /// Allocate the next id, append a fully-populated shape, and return it.
    ///
    /// No validation beyond what callers already applied; gesture-created
    /// shapes are in-bounds by construction, edits are re-constrained.
    pub fn add(&mut self, seed: ShapeSeed) -> &Shape {
        let id = self.next_id;
        self.next_id += 1;
        self.shapes.push(Shape {
            id,
            kind: seed.kind,
            x: seed.x,
            y: seed.y,
            w: seed.w,
            h: seed.h,
            fill: seed.fill,
            stroke: seed.stroke,
            stroke_width: seed.stroke_width,
            corner_radius: seed.corner_radius,
        });
        // Just pushed, so the list is non-empty.
        &self.shapes[self.shapes.len() - 1]
    }

    /// Remove the shape with the given id, returning it if it was present.
    /// Absent ids are a no-op, not an error.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Empty the store. The id sequence is not reset, so ids are never
    /// reused even across a clear.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Return a mutable reference to a shape by id.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// All shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Mutable iteration in insertion order; used by the rescaler.
    pub fn shapes_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    /// Apply a sparse update to an existing shape. Returns `false` if the
    /// shape doesn't exist. Callers re-run the constraint pass afterwards.
    pub fn apply_partial(&mut self, id: ShapeId, partial: &PartialShape) -> bool {
        let Some(shape) = self.get_mut(id) else {
            return false;
        };
        if let Some(kind) = partial.kind {
            shape.kind = kind;
        }
        if let Some(x) = partial.x {
            shape.x = x;
        }
        if let Some(y) = partial.y {
            shape.y = y;
        }
        if let Some(w) = partial.w {
            shape.w = w;
        }
        if let Some(h) = partial.h {
            shape.h = h;
        }
        if let Some(ref fill) = partial.fill {
            shape.fill = fill.clone();
        }
        if let Some(ref stroke) = partial.stroke {
            shape.stroke = stroke.clone();
        }
        if let Some(sw) = partial.stroke_width {
            shape.stroke_width = sw;
        }
        if let Some(radius) = partial.corner_radius {
            shape.corner_radius = radius;
        }
        true
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
