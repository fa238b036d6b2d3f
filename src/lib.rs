//! Shape geometry and state-synchronization engine for an artboard editor.
//!
//! This crate owns the full model of a rectangle/ellipse mockup editor: it
//! translates pointer input into rubber-band drawing gestures, keeps every
//! shape proportionally placed across device-frame switches, and derives
//! the three presentation projections (scene, table, generated code) that
//! hosts paint from. Hosts — a browser shell or the bundled CLI — wire
//! events to [`engine::EngineCore`] and read back [`views::ViewSnapshot`]s;
//! the engine holds no hidden global state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`] state object and actions |
//! | [`doc`] | In-memory shape store and shape types |
//! | [`frame`] | Device frame catalog and active-frame registry |
//! | [`rescale`] | Two-phase proportional rescale across frame switches |
//! | [`input`] | Input event types and the drag gesture state machine |
//! | [`constrain`] | Clamping edited shapes to the artboard bounds |
//! | [`views`] | Derived presentation projections |
//! | [`codegen`] | Generated HTML/CSS/JS artifacts and the export document |
//! | [`trace`] | Recorded input sessions and deterministic replay |
//! | [`consts`] | Shared numeric constants (thresholds, sentinels, defaults) |

pub mod codegen;
pub mod constrain;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod frame;
pub mod input;
pub mod rescale;
pub mod trace;
pub mod views;
