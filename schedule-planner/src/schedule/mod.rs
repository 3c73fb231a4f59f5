pub mod types;
pub mod seed;
pub mod model;
pub mod placement;
pub mod ids;
pub mod palette;

pub use types::{Activity, DaySchedule, Location, ScheduleData, TimeSlot};
pub use seed::{build_initial_data, default_days, generate_initial_data, slot_id, time_labels};
pub use model::{find_activity, ScheduleModel};
pub use placement::{add_from_catalog, move_to_board, move_to_slot, PlacementError};
pub use ids::IdGenerator;
pub use palette::{color_classes, ColorClasses};
