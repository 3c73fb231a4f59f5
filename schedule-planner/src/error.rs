use thiserror::Error;

use crate::schedule::PlacementError;

pub type Result<T> = core::result::Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("invalid drop target: {0}")]
    InvalidTarget(String),
    #[error("catalog entry not found: {0}")]
    CatalogEntryNotFound(String),
    #[error("activity id {0:?} appears more than once")]
    DuplicateActivity(String),
    #[error("day {0:?} appears more than once")]
    DuplicateDay(String),
    #[error("invalid time label {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
