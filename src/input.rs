//! Input model: tools, pointer events, style state, and the drag gesture.
//!
//! `Tool` and `StyleState` capture the toolbar configuration read at
//! gesture-commit time. `InputState` is the active gesture being tracked
//! between pointer-down and pointer-up/cancel; it owns the gesture's
//! pointer capture and the live preview rectangle. The preview never
//! touches the shape store.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FILL, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, MIN_DRAW_SIZE};

/// Which shape tool is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Draw a rectangle (default).
    #[default]
    Rect,
    /// Draw an ellipse.
    Ellipse,
}

impl Tool {
    /// Whether the corner-radius style field applies to this tool. Ellipses
    /// are always fully rounded, so the radius input is hidden for them.
    #[must_use]
    pub fn uses_corner_radius(self) -> bool {
        matches!(self, Self::Rect)
    }
}

/// The class of input device a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Whether this device honors the constrain-to-square modifier. The
    /// modifier is a keyboard key, so only mouse input carries it.
    #[must_use]
    pub fn honors_square_modifier(self) -> bool {
        matches!(self, Self::Mouse)
    }
}

/// Mouse button identifier. Touch and pen contacts are always `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// Identifier of the input device contact, as reported by the host.
/// Distinguishes concurrent pointers so a gesture can capture one
/// exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub i64);

/// A point in artboard-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp into `[0, w] × [0, h]`.
    #[must_use]
    pub fn clamped(self, w: f64, h: f64) -> Self {
        Self {
            x: self.x.clamp(0.0, w.max(0.0)),
            y: self.y.clamp(0.0, h.max(0.0)),
        }
    }
}

/// Force the drag delta square: the smaller magnitude of `|dx|, |dy|` wins
/// and both axes take it, preserving direction. A zero delta counts as
/// positive so a degenerate drag still has a direction.
#[must_use]
pub fn square_lock(anchor: Point, current: Point) -> Point {
    let dx = current.x - anchor.x;
    let dy = current.y - anchor.y;
    let size = dx.abs().min(dy.abs());
    Point {
        x: anchor.x + sign_or_positive(dx) * size,
        y: anchor.y + sign_or_positive(dy) * size,
    }
}

fn sign_or_positive(delta: f64) -> f64 {
    if delta == 0.0 { 1.0 } else { delta.signum() }
}

/// The live rubber-band rectangle shown while a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewRect {
    pub left: f64,
    pub top: f64,
    pub w: f64,
    pub h: f64,
}

impl PreviewRect {
    /// Normalized rectangle spanning the anchor and the current point.
    #[must_use]
    pub fn from_corners(anchor: Point, current: Point) -> Self {
        Self {
            left: anchor.x.min(current.x),
            top: anchor.y.min(current.y),
            w: (current.x - anchor.x).abs(),
            h: (current.y - anchor.y).abs(),
        }
    }

    /// Whether releasing now would commit a shape. Sub-threshold gestures
    /// in either axis are discarded.
    #[must_use]
    pub fn is_committable(&self) -> bool {
        self.w >= MIN_DRAW_SIZE && self.h >= MIN_DRAW_SIZE
    }
}

/// Toolbar configuration read when a gesture commits.
///
/// `stroke_width` and `corner_radius` are already coerced integers; hosts
/// feed raw field text through [`coerce_px`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleState {
    pub tool: Tool,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: i32,
    pub corner_radius: i32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            fill: DEFAULT_FILL.to_owned(),
            stroke: DEFAULT_STROKE.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            corner_radius: 0,
        }
    }
}

/// Coerce a raw numeric field to a non-negative pixel count. Non-numeric
/// input (including empty) coerces to 0 rather than being rejected;
/// fractional values round half away from zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_px(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value.round().max(0.0) as i32,
        _ => 0,
    }
}

/// Internal state of the gesture state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A rubber-band drag is in progress.
    Drawing {
        /// The captured pointer. Events from any other pointer id are
        /// ignored until this gesture ends, and only this pointer can end
        /// it.
        pointer: PointerId,
        /// The fixed corner where the drag started, clamped to the
        /// artboard bounds at press time.
        anchor: Point,
        /// Live preview bounds, updated on every move.
        preview: PreviewRect,
    },
}

impl InputState {
    /// The preview rectangle, while a gesture is active.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewRect> {
        match self {
            Self::Idle => None,
            Self::Drawing { preview, .. } => Some(preview),
        }
    }

    /// Whether the given pointer currently owns the gesture.
    #[must_use]
    pub fn owns(&self, id: PointerId) -> bool {
        matches!(self, Self::Drawing { pointer, .. } if *pointer == id)
    }
}
