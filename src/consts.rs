//! Shared numeric constants for the artboard engine.

// ── Drawing ─────────────────────────────────────────────────────

/// Minimum committed gesture size in pixels. Drags smaller than this in
/// either axis are discarded without creating a shape.
pub const MIN_DRAW_SIZE: f64 = 2.0;

/// Corner-radius sentinel meaning "render as a full ellipse".
///
/// Large enough that any box clips to an ellipse; ellipse shapes always
/// carry this value regardless of what the toolbar or an edit supplies.
pub const FULL_ROUND_RADIUS: i32 = 9999;

// ── Styling defaults ────────────────────────────────────────────

/// Fill color used when the host supplies no value.
pub const DEFAULT_FILL: &str = "#60a5fa";

/// Stroke color used when the host supplies no value.
pub const DEFAULT_STROKE: &str = "#1f2937";

/// Stroke width in pixels used when the host supplies no value.
pub const DEFAULT_STROKE_WIDTH: i32 = 1;

// ── Export ──────────────────────────────────────────────────────

/// Fixed filename offered for the combined exported document.
pub const EXPORT_FILE_NAME: &str = "index.html";
