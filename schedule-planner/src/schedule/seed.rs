use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::{NaiveTime, TimeDelta};
use serde::Deserialize;

use super::types::{Activity, ScheduleData, TimeSlot};
use crate::error::{PlannerError, Result};

/// Identifier of the slot at `(day, index)`, also used as its drop target id
pub fn slot_id(day: &str, index: usize) -> String {
    format!("timeslot-{}-{}", day, index)
}

/// Monday through Friday
pub fn default_days() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

/// Builds `rows` row labels starting at `start` (HH:MM), one every `interval_minutes`
/// Labels read like "9:00 AM" and wrap past midnight.
pub fn time_labels(start: &str, rows: usize, interval_minutes: u32) -> Result<Vec<String>> {
    let start_time = NaiveTime::parse_from_str(start.trim(), "%H:%M")
        .map_err(|_| PlannerError::InvalidTime(start.to_string()))?;

    let labels = (0..rows)
        .map(|row| {
            let offset = TimeDelta::minutes(row as i64 * interval_minutes as i64);
            (start_time + offset).format("%-I:%M %p").to_string()
        })
        .collect();
    Ok(labels)
}

/// Creates a schedule with the given board and an empty slot for every day and time row
pub fn generate_initial_data(
    days: Vec<String>,
    times: Vec<String>,
    activities: Vec<Activity>,
) -> ScheduleData {
    let mut schedule = HashMap::new();
    for day in &days {
        let slots = times
            .iter()
            .enumerate()
            .map(|(index, time)| TimeSlot {
                id: slot_id(day, index),
                time: time.clone(),
                activities: Vec::new(),
            })
            .collect();
        schedule.insert(day.clone(), slots);
    }

    ScheduleData {
        days,
        times,
        activities,
        schedule,
    }
}

/// Like `generate_initial_data`, but refuses repeated day labels or activity ids
pub fn build_initial_data(
    days: Vec<String>,
    times: Vec<String>,
    activities: Vec<Activity>,
) -> Result<ScheduleData> {
    {
        let mut seen = HashSet::new();
        if let Some(day) = days.iter().find(|d| !seen.insert(d.as_str())) {
            return Err(PlannerError::DuplicateDay(day.clone()));
        }
    }
    {
        let mut seen = HashSet::new();
        if let Some(activity) = activities.iter().find(|a| !seen.insert(a.id.as_str())) {
            return Err(PlannerError::DuplicateActivity(activity.id.clone()));
        }
    }
    Ok(generate_initial_data(days, times, activities))
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default = "default_days")]
    days: Vec<String>,
    times: Vec<String>,
    #[serde(default)]
    activities: Vec<Activity>,
}

/// Loads days, time rows and the initial board from a JSON file
/// The grid always starts empty, whatever the file holds.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<ScheduleData> {
    let raw = std::fs::read_to_string(path)?;
    parse_seed(&raw)
}

pub fn parse_seed(raw: &str) -> Result<ScheduleData> {
    let seed: SeedFile = serde_json::from_str(raw)?;
    build_initial_data(seed.days, seed.times, seed.activities)
}
