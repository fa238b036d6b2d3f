//! Recorded input sessions and deterministic replay.
//!
//! A trace is the serialized form of the engine's external interfaces: a
//! sequence of pointer, toolbar, frame-selection, and edit events. Hosts
//! can record one and the CLI can replay it to rebuild the exact same
//! document — the engine has no other inputs. The layout-reflow suspension
//! point is explicit in the format: a `layout` event carries the measured
//! artboard size and completes whatever rescale is pending.
//!
//! Two encodings are accepted: a single JSON array, or one JSON object per
//! line (JSONL).

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use serde::{Deserialize, Serialize};

use crate::doc::{PartialShape, ShapeId};
use crate::engine::EngineCore;
use crate::input::{Button, Point, PointerId, PointerKind, Tool};

/// Error returned by [`parse_trace`].
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// The text could not be decoded as trace events.
    #[error("invalid trace JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One recorded input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Pointer press at artboard-local coordinates.
    PointerDown {
        x: f64,
        y: f64,
        pointer: i64,
        #[serde(default = "default_pointer_kind")]
        kind: PointerKind,
        #[serde(default = "default_button")]
        button: Button,
        #[serde(default)]
        shift: bool,
    },
    /// Pointer motion.
    PointerMove {
        x: f64,
        y: f64,
        pointer: i64,
        #[serde(default = "default_pointer_kind")]
        kind: PointerKind,
        #[serde(default)]
        shift: bool,
    },
    /// Pointer release.
    PointerUp {
        x: f64,
        y: f64,
        pointer: i64,
        #[serde(default = "default_pointer_kind")]
        kind: PointerKind,
        #[serde(default)]
        shift: bool,
    },
    /// Pointer cancellation (or abrupt capture loss).
    PointerCancel { pointer: i64 },
    /// Toolbar tool selection.
    SetTool { tool: Tool },
    /// Toolbar style fields; raw text, coerced on apply.
    SetStyle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_width: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        corner_radius: Option<String>,
    },
    /// Frame selection by catalog key.
    SelectFrame { key: String },
    /// Host layout pass settled at this rendered artboard size. Completes
    /// a pending rescale if one is waiting, otherwise a plain resize.
    Layout { width: f64, height: f64 },
    /// External edit of one shape.
    Edit {
        id: ShapeId,
        #[serde(flatten)]
        fields: PartialShape,
    },
    /// Shape deletion.
    Delete { id: ShapeId },
    /// Clear the whole scene.
    Clear,
}

fn default_pointer_kind() -> PointerKind {
    PointerKind::Mouse
}

fn default_button() -> Button {
    Button::Primary
}

/// Decode a trace from either a JSON array or JSONL text. Blank lines are
/// skipped; empty input is an empty trace.
pub fn parse_trace(text: &str) -> Result<Vec<TraceEvent>, TraceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    let mut events = Vec::new();
    for line in trimmed.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        events.push(serde_json::from_str(line)?);
    }
    Ok(events)
}

/// Apply one event to the engine.
pub fn apply(engine: &mut EngineCore, event: &TraceEvent) {
    match event {
        TraceEvent::PointerDown { x, y, pointer, kind, button, .. } => {
            engine.pointer_down(Point::new(*x, *y), PointerId(*pointer), *kind, *button);
        }
        TraceEvent::PointerMove { x, y, pointer, kind, shift } => {
            engine.pointer_move(Point::new(*x, *y), PointerId(*pointer), *kind, *shift);
        }
        TraceEvent::PointerUp { x, y, pointer, kind, shift } => {
            engine.pointer_up(Point::new(*x, *y), PointerId(*pointer), *kind, *shift);
        }
        TraceEvent::PointerCancel { pointer } => {
            engine.pointer_cancel(PointerId(*pointer));
        }
        TraceEvent::SetTool { tool } => engine.set_tool(*tool),
        TraceEvent::SetStyle { fill, stroke, stroke_width, corner_radius } => {
            if let Some(fill) = fill {
                engine.set_fill(fill.clone());
            }
            if let Some(stroke) = stroke {
                engine.set_stroke(stroke.clone());
            }
            if let Some(raw) = stroke_width {
                engine.set_stroke_width_raw(raw);
            }
            if let Some(raw) = corner_radius {
                engine.set_corner_radius_raw(raw);
            }
        }
        TraceEvent::SelectFrame { key } => {
            engine.request_frame_change(key);
        }
        TraceEvent::Layout { width, height } => match engine.pending_token() {
            Some(token) => {
                engine.complete_rescale(token, *width, *height);
            }
            None => engine.set_artboard_size(*width, *height),
        },
        TraceEvent::Edit { id, fields } => {
            engine.apply_edit(*id, fields);
        }
        TraceEvent::Delete { id } => {
            engine.delete_shape(*id);
        }
        TraceEvent::Clear => {
            engine.clear();
        }
    }
}

/// Replay a whole trace in order. Deterministic: the same trace always
/// produces the same document state.
pub fn replay(engine: &mut EngineCore, events: &[TraceEvent]) {
    for event in events {
        apply(engine, event);
    }
}
