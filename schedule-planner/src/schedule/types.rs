use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An item that can sit on the board or inside a time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>, // minutes, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Activity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Activity {
            id: id.into(),
            name: name.into(),
            description: None,
            color: String::new(),
            duration: None,
            category: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single (day, time row) cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub activities: Vec<Activity>, // insertion order = display order
}

/// One slot per time row, fixed for the life of the model
pub type DaySchedule = Vec<TimeSlot>;

/// The whole planner state: unscheduled board plus the day/time grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleData {
    pub days: Vec<String>,
    pub times: Vec<String>,
    pub activities: Vec<Activity>,
    pub schedule: HashMap<String, DaySchedule>,
}

impl ScheduleData {
    /// Total number of activities across the board and every slot
    pub fn activity_count(&self) -> usize {
        let scheduled: usize = self
            .schedule
            .values()
            .flat_map(|slots| slots.iter())
            .map(|slot| slot.activities.len())
            .sum();
        self.activities.len() + scheduled
    }

    /// Whether `id` is live anywhere, on the board or in any slot
    pub fn contains_id(&self, id: &str) -> bool {
        self.activities.iter().any(|a| a.id == id)
            || self
                .schedule
                .values()
                .flat_map(|slots| slots.iter())
                .any(|slot| slot.activities.iter().any(|a| a.id == id))
    }

    pub fn slot(&self, day: &str, time_index: usize) -> Option<&TimeSlot> {
        self.schedule.get(day).and_then(|slots| slots.get(time_index))
    }
}

/// Where an activity currently lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    Board,
    Slot { day: String, time_index: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Board => write!(f, "board"),
            Location::Slot { day, time_index } => write!(f, "{} row {}", day, time_index),
        }
    }
}
