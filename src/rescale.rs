//! Proportional rescaling of shape geometry across artboard size changes.
//!
//! Switching frames changes the artboard's aspect ratio, and the resulting
//! rendered pixel size is only knowable after the host's layout pass. The
//! rescale is therefore two-phase: the engine records the pre-switch size
//! and hands out a [`RescaleToken`]; once the host has measured the new
//! size it completes the token and every shape's geometry is multiplied by
//! the per-axis scale factors, preserving proportional position and size.
//!
//! A newer frame-change request supersedes a pending one: the baseline is
//! re-captured from the most recently observed pre-resize dimensions and
//! completing the stale token becomes a no-op.

#[cfg(test)]
#[path = "rescale_test.rs"]
mod rescale_test;

use crate::doc::ShapeStore;

/// Opaque handle for one pending rescale. Obtained from
/// `EngineCore::request_frame_change` and spent by
/// `EngineCore::complete_rescale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescaleToken(pub(crate) u64);

/// A frame change waiting for the host to measure the reflowed artboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRescale {
    pub(crate) token: RescaleToken,
    /// Rendered artboard size observed before the aspect-ratio change.
    pub(crate) baseline_w: f64,
    pub(crate) baseline_h: f64,
}

impl PendingRescale {
    /// The token the host must present to complete this rescale.
    #[must_use]
    pub fn token(&self) -> RescaleToken {
        self.token
    }
}

/// Per-axis scale factor between an old and a new rendered dimension.
///
/// Forced to 1 when either dimension is not positive (first load, before
/// any layout) or the quotient is not finite, making the rescale a no-op.
#[must_use]
pub fn scale_factor(old: f64, new: f64) -> f64 {
    if old > 0.0 && new > 0.0 {
        let factor = new / old;
        if factor.is_finite() { factor } else { 1.0 }
    } else {
        1.0
    }
}

/// Multiply every shape's geometry by the per-axis factors, rounding half
/// away from zero to whole pixels.
pub fn apply_scale(store: &mut ShapeStore, sx: f64, sy: f64) {
    for shape in store.shapes_mut() {
        shape.x = scale_px(shape.x, sx);
        shape.y = scale_px(shape.y, sy);
        shape.w = scale_px(shape.w, sx);
        shape.h = scale_px(shape.h, sy);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale_px(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor).round() as i32
}
