mod coordinator;
mod curve;
mod types;

pub use coordinator::{AnimCoordinator, SlotKind, StartOutcome};
pub use curve::curve_value;
pub use types::{AnimAttr, AnimCurve, AnimDescriptor, AnimKind};
