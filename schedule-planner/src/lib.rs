pub mod error;
pub mod schedule;
pub mod drag;
pub mod events;
pub mod planner;
pub mod catalog;
pub mod display;
pub mod config;
pub mod web;

pub use error::{PlannerError, Result};
pub use events::{Notification, NotificationFeed, NotificationSink};
pub use planner::Planner;
