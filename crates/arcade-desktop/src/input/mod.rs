//! Input routing and the drag/resize state machine
//!
//! A gesture is an explicit [`DragState`] value owned by the [`InputRouter`]
//! instead of state captured in event-listener closures, so it can be
//! inspected and driven without real pointer events.

mod drag;
mod router;

pub use drag::DragState;
pub use router::{InputResult, InputRouter};
