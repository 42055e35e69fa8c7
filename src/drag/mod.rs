pub mod listeners;
pub mod pairing;

pub use listeners::{apply_draggable, DraggableBindings};
pub use pairing::{DragEffect, DragMsg, DragPairing, PlanningRequest, RowKind, RowRef, RowStyle};
