//! Pointer input types and the replayable input script.
//!
//! Backends (or the input script replayer) produce [`PointerEvent`]s in client
//! coordinates; the painter and the scene translate them to canvas space.

pub mod events;
pub mod script;

// Re-export commonly used types at module level
pub use events::{MouseButton, PointerEvent, PointerKind};
pub use script::{Script, ScriptError, Step};
