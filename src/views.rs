//! Presentation projections derived from the document.
//!
//! Three views depend on the shape list: the rendered scene, the tabular
//! summary, and the generated code pane. All three are re-derived by full
//! recomputation whenever the store, the active frame, or the gesture
//! preview changes — no incremental diffing. A [`ViewSnapshot`] is plain
//! data; hosts paint from it however they like.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use crate::codegen::{self, CodeArtifacts};
use crate::doc::{Shape, ShapeId, ShapeKind, ShapeStore};
use crate::frame::Frame;
use crate::input::PreviewRect;

/// One absolutely-positioned visual box in the scene, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneBox {
    pub id: ShapeId,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub background: String,
    pub border_width: i32,
    pub border_color: String,
    /// CSS border-radius value, `9999px` for ellipses.
    pub border_radius: String,
}

impl SceneBox {
    fn from_shape(shape: &Shape) -> Self {
        Self {
            id: shape.id,
            left: shape.x,
            top: shape.y,
            width: shape.w,
            height: shape.h,
            background: shape.fill.clone(),
            border_width: shape.stroke_width,
            border_color: shape.stroke.clone(),
            border_radius: codegen::border_radius_css(shape),
        }
    }
}

/// One row of the tabular summary. The host renders edit/delete actions
/// against `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: ShapeId,
    /// Lowercase kind name.
    pub kind: &'static str,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// Fill color; the host shows it as a swatch plus text.
    pub fill: String,
    pub stroke: String,
    pub stroke_width: i32,
    /// Radius column text; an em dash for ellipses, where it is not
    /// editable.
    pub radius: String,
}

impl TableRow {
    fn from_shape(shape: &Shape) -> Self {
        let radius = match shape.kind {
            ShapeKind::Ellipse => "—".to_owned(),
            ShapeKind::Rect => shape.corner_radius.to_string(),
        };
        Self {
            id: shape.id,
            kind: shape.kind.as_str(),
            x: shape.x,
            y: shape.y,
            w: shape.w,
            h: shape.h,
            fill: shape.fill.clone(),
            stroke: shape.stroke.clone(),
            stroke_width: shape.stroke_width,
            radius,
        }
    }
}

/// Everything the presentation surfaces need, derived from current state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Scene boxes in insertion (render) order.
    pub scene: Vec<SceneBox>,
    /// The rubber-band overlay, while a gesture is active.
    pub preview: Option<PreviewRect>,
    /// Table rows in insertion order.
    pub table: Vec<TableRow>,
    /// Generated code pane content.
    pub code: CodeArtifacts,
    /// Frame info readout, e.g. `iPhone 16: 393×852`.
    pub frame_info: String,
}

impl ViewSnapshot {
    /// Full recomputation from current state. Idempotent and side-effect
    /// free; equal inputs produce equal snapshots.
    #[must_use]
    pub fn derive(store: &ShapeStore, frame: &Frame, preview: Option<PreviewRect>) -> Self {
        let shapes = store.shapes();
        Self {
            scene: shapes.iter().map(SceneBox::from_shape).collect(),
            preview,
            table: shapes.iter().map(TableRow::from_shape).collect(),
            code: codegen::artifacts(shapes, frame),
            frame_info: frame.info(),
        }
    }
}
