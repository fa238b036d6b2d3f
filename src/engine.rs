//! Engine core: one owned state object, no hidden singletons.
//!
//! `EngineCore` owns the shape store, the frame registry, the toolbar style
//! state, and the gesture state machine, and is the only thing hosts talk
//! to. Input handlers return [`Action`] values describing what changed so
//! the host knows what to repaint; the sole way state becomes visible is
//! the [`ViewSnapshot`] re-derived after every mutation.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::constrain::constrain;
use crate::consts::{EXPORT_FILE_NAME, FULL_ROUND_RADIUS};
use crate::doc::{PartialShape, Shape, ShapeId, ShapeKind, ShapeSeed, ShapeStore};
use crate::frame::FrameRegistry;
use crate::input::{
    Button, InputState, Point, PointerId, PointerKind, PreviewRect, StyleState, Tool, coerce_px,
    square_lock,
};
use crate::rescale::{PendingRescale, RescaleToken, apply_scale, scale_factor};
use crate::views::ViewSnapshot;

/// What an engine operation changed, for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A gesture committed and this shape was appended to the store.
    ShapeCreated(Shape),
    /// An edit was applied and re-constrained.
    ShapeUpdated { id: ShapeId },
    /// A shape was deleted.
    ShapeDeleted { id: ShapeId },
    /// The store was emptied.
    SceneCleared,
    /// The rubber-band overlay appeared, moved, or vanished.
    PreviewChanged,
    /// The store changed; presentation surfaces must re-derive views.
    SyncNeeded,
}

/// The application state object. Hosts hold one instance and feed it
/// events; there is no process-wide mutable state anywhere in the crate.
pub struct EngineCore {
    pub doc: ShapeStore,
    pub frames: FrameRegistry,
    pub style: StyleState,
    pub input: InputState,
    /// Rendered artboard size as last measured by the host's layout.
    artboard_w: f64,
    artboard_h: f64,
    pending: Option<PendingRescale>,
    rescale_seq: u64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: ShapeStore::new(),
            frames: FrameRegistry::new(),
            style: StyleState::default(),
            input: InputState::default(),
            artboard_w: 0.0,
            artboard_h: 0.0,
            pending: None,
            rescale_seq: 0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Artboard geometry ---

    /// Record the artboard's rendered size from a plain host layout pass
    /// (initial load, window resize). Does not rescale shapes; only frame
    /// switches do.
    pub fn set_artboard_size(&mut self, width: f64, height: f64) {
        self.artboard_w = width.max(0.0);
        self.artboard_h = height.max(0.0);
    }

    /// Last measured rendered artboard size.
    #[must_use]
    pub fn artboard_size(&self) -> (f64, f64) {
        (self.artboard_w, self.artboard_h)
    }

    // --- Frame switching (two-phase rescale) ---

    /// Switch the active frame. Records the currently-known rendered size
    /// as the rescale baseline and returns the token the host must present
    /// once the reflowed size is measured. Unknown keys are rejected with
    /// no state change. A second request before the first completes
    /// supersedes it.
    pub fn request_frame_change(&mut self, key: &str) -> Option<RescaleToken> {
        if !self.frames.set_active(key) {
            return None;
        }
        self.rescale_seq += 1;
        let token = RescaleToken(self.rescale_seq);
        self.pending = Some(PendingRescale {
            token,
            baseline_w: self.artboard_w,
            baseline_h: self.artboard_h,
        });
        Some(token)
    }

    /// Token of the rescale currently waiting for a measurement, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<RescaleToken> {
        self.pending.map(|p| p.token)
    }

    /// Complete a pending rescale with the post-reflow measured size.
    /// Returns `false` (no state change) unless `token` is the currently
    /// pending one — completions of superseded requests are ignored.
    pub fn complete_rescale(&mut self, token: RescaleToken, width: f64, height: f64) -> bool {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                let sx = scale_factor(p.baseline_w, width);
                let sy = scale_factor(p.baseline_h, height);
                apply_scale(&mut self.doc, sx, sy);
                self.set_artboard_size(width, height);
                true
            }
            _ => false,
        }
    }

    // --- Toolbar / style ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.style.tool = tool;
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.style.fill = fill.into();
    }

    pub fn set_stroke(&mut self, stroke: impl Into<String>) {
        self.style.stroke = stroke.into();
    }

    /// Set the stroke width from raw field text; non-numeric coerces to 0.
    pub fn set_stroke_width_raw(&mut self, raw: &str) {
        self.style.stroke_width = coerce_px(raw);
    }

    /// Set the corner radius from raw field text; non-numeric coerces to 0.
    pub fn set_corner_radius_raw(&mut self, raw: &str) {
        self.style.corner_radius = coerce_px(raw);
    }

    // --- Gesture state machine ---

    /// Pointer press inside the artboard. Starts a gesture when idle:
    /// captures the pointer exclusively, records the clamped anchor, and
    /// shows a zero-size preview. Non-primary mouse buttons and presses
    /// during an active gesture are ignored.
    pub fn pointer_down(
        &mut self,
        pos: Point,
        pointer: PointerId,
        kind: PointerKind,
        button: Button,
    ) -> Vec<Action> {
        if self.input != InputState::Idle {
            return Vec::new();
        }
        if kind == PointerKind::Mouse && button != Button::Primary {
            return Vec::new();
        }
        let anchor = pos.clamped(self.artboard_w, self.artboard_h);
        self.input = InputState::Drawing {
            pointer,
            anchor,
            preview: PreviewRect::from_corners(anchor, anchor),
        };
        vec![Action::PreviewChanged]
    }

    /// Pointer motion. Only the captured pointer updates the preview; the
    /// store is never mutated during a drag.
    pub fn pointer_move(
        &mut self,
        pos: Point,
        pointer: PointerId,
        kind: PointerKind,
        shift: bool,
    ) -> Vec<Action> {
        let InputState::Drawing { pointer: captured, anchor, preview } = &mut self.input else {
            return Vec::new();
        };
        if *captured != pointer {
            return Vec::new();
        }
        let current = gesture_point(*anchor, pos, self.artboard_w, self.artboard_h, kind, shift);
        *preview = PreviewRect::from_corners(*anchor, current);
        vec![Action::PreviewChanged]
    }

    /// Release of the captured pointer: commit. Sub-threshold gestures are
    /// discarded with no shape created. Capture is released either way.
    pub fn pointer_up(
        &mut self,
        pos: Point,
        pointer: PointerId,
        kind: PointerKind,
        shift: bool,
    ) -> Vec<Action> {
        if !self.input.owns(pointer) {
            return Vec::new();
        }
        let InputState::Drawing { anchor, .. } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let current = gesture_point(anchor, pos, self.artboard_w, self.artboard_h, kind, shift);
        let rect = PreviewRect::from_corners(anchor, current);
        if !rect.is_committable() {
            return vec![Action::PreviewChanged];
        }
        let shape_kind = match self.style.tool {
            Tool::Rect => ShapeKind::Rect,
            Tool::Ellipse => ShapeKind::Ellipse,
        };
        let corner_radius = match shape_kind {
            ShapeKind::Ellipse => FULL_ROUND_RADIUS,
            ShapeKind::Rect => self.style.corner_radius.max(0),
        };
        let shape = self
            .doc
            .add(ShapeSeed {
                kind: shape_kind,
                x: px(rect.left),
                y: px(rect.top),
                w: px(rect.w),
                h: px(rect.h),
                fill: self.style.fill.clone(),
                stroke: self.style.stroke.clone(),
                stroke_width: self.style.stroke_width.max(0),
                corner_radius,
            })
            .clone();
        vec![
            Action::PreviewChanged,
            Action::ShapeCreated(shape),
            Action::SyncNeeded,
        ]
    }

    /// Cancellation from the captured pointer: discard the preview, no
    /// shape. Events from non-captured pointers are ignored.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> Vec<Action> {
        if !self.input.owns(pointer) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::PreviewChanged]
    }

    /// Abrupt loss of pointer capture. Same exit as a cancel, so the
    /// machine can never stick in `Drawing`.
    pub fn pointer_capture_lost(&mut self, pointer: PointerId) -> Vec<Action> {
        self.pointer_cancel(pointer)
    }

    /// The live preview rectangle, while a gesture is active.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewRect> {
        self.input.preview()
    }

    // --- Edits ---

    /// Apply an external edit to a shape, then re-constrain it to the
    /// artboard bounds. Unknown ids are a no-op.
    pub fn apply_edit(&mut self, id: ShapeId, partial: &PartialShape) -> Vec<Action> {
        if !self.doc.apply_partial(id, partial) {
            return Vec::new();
        }
        let (bw, bh) = self.artboard_bounds();
        if let Some(shape) = self.doc.get_mut(id) {
            constrain(shape, bw, bh);
        }
        vec![Action::ShapeUpdated { id }, Action::SyncNeeded]
    }

    /// Delete a shape. Absent ids are a no-op, not an error.
    pub fn delete_shape(&mut self, id: ShapeId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        vec![Action::ShapeDeleted { id }, Action::SyncNeeded]
    }

    /// Empty the store. The id sequence keeps counting.
    pub fn clear(&mut self) -> Vec<Action> {
        self.doc.clear();
        vec![Action::SceneCleared, Action::SyncNeeded]
    }

    // --- Views / export ---

    /// Re-derive all presentation projections from current state.
    #[must_use]
    pub fn views(&self) -> ViewSnapshot {
        ViewSnapshot::derive(&self.doc, self.frames.active(), self.input.preview().copied())
    }

    /// The combined export artifact and its fixed download filename.
    #[must_use]
    pub fn export_document(&self) -> (&'static str, String) {
        let document =
            crate::codegen::single_document(self.doc.shapes(), self.frames.active());
        (EXPORT_FILE_NAME, document)
    }

    /// Integer artboard bounds for the constraint pass, floored at 1×1.
    #[must_use]
    fn artboard_bounds(&self) -> (i32, i32) {
        (px(self.artboard_w).max(1), px(self.artboard_h).max(1))
    }
}

/// The clamped (and possibly square-locked) gesture point for an event.
fn gesture_point(
    anchor: Point,
    pos: Point,
    artboard_w: f64,
    artboard_h: f64,
    kind: PointerKind,
    shift: bool,
) -> Point {
    let current = pos.clamped(artboard_w, artboard_h);
    if shift && kind.honors_square_modifier() {
        square_lock(anchor, current)
    } else {
        current
    }
}

/// Round to whole pixels, half away from zero.
#[allow(clippy::cast_possible_truncation)]
fn px(value: f64) -> i32 {
    value.round() as i32
}
