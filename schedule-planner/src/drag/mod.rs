pub mod target;
pub mod sensor;
pub mod session;

pub use target::{DropTarget, BOARD_TARGET};
pub use sensor::{ActivationConstraint, ActivationSensor, PointerKind, PointerPoint};
pub use session::{DragSession, DragState, DropAction, TargetResolver};
