use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::schedule::slot_id;

/// Identifier of the unscheduled board region
pub const BOARD_TARGET: &str = "activity-board";

const SLOT_MARKER: &str = "timeslot-";

/// Where a dragged activity was released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    Board,
    Slot { day: String, time_index: usize },
}

impl FromStr for DropTarget {
    type Err = PlannerError;

    /// Accepts `activity-board` or `timeslot-{day}-{index}`
    /// The index is split off the last `-`, so day labels may contain dashes.
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        if id == BOARD_TARGET {
            return Ok(DropTarget::Board);
        }

        let invalid = || PlannerError::InvalidTarget(id.to_string());
        let rest = id.strip_prefix(SLOT_MARKER).ok_or_else(invalid)?;
        let (day, index) = rest.rsplit_once('-').ok_or_else(invalid)?;
        if day.is_empty() || index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let time_index = index.parse().map_err(|_| invalid())?;

        Ok(DropTarget::Slot {
            day: day.to_string(),
            time_index,
        })
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropTarget::Board => f.write_str(BOARD_TARGET),
            DropTarget::Slot { day, time_index } => f.write_str(&slot_id(day, *time_index)),
        }
    }
}
