use thiserror::Error;

use super::ids::IdGenerator;
use super::types::{Activity, ScheduleData};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
    #[error("unknown day: {0}")]
    UnknownDay(String),
    #[error("time row {time_index} is out of range for {day}")]
    SlotOutOfRange { day: String, time_index: usize },
}

/// Moves an activity from wherever it is (board or a slot) to the end of the target slot
///
/// Returns the next state; on error the caller keeps `state` as it was.
pub fn move_to_slot(
    state: &ScheduleData,
    activity_id: &str,
    day: &str,
    time_index: usize,
) -> Result<ScheduleData, PlacementError> {
    // Check the target before touching anything so a bad drop never loses an activity
    let rows = state
        .schedule
        .get(day)
        .ok_or_else(|| PlacementError::UnknownDay(day.to_string()))?;
    if time_index >= rows.len() {
        return Err(PlacementError::SlotOutOfRange {
            day: day.to_string(),
            time_index,
        });
    }

    let mut next = state.clone();
    let activity = take_activity(&mut next, activity_id, true)
        .ok_or_else(|| PlacementError::ActivityNotFound(activity_id.to_string()))?;

    if let Some(slot) = next
        .schedule
        .get_mut(day)
        .and_then(|rows| rows.get_mut(time_index))
    {
        slot.activities.push(activity);
    }
    Ok(next)
}

/// Moves a scheduled activity back to the end of the board
///
/// Only the grid is searched; an activity already on the board is reported as not found.
pub fn move_to_board(state: &ScheduleData, activity_id: &str) -> Result<ScheduleData, PlacementError> {
    let mut next = state.clone();
    let activity = take_activity(&mut next, activity_id, false)
        .ok_or_else(|| PlacementError::ActivityNotFound(activity_id.to_string()))?;
    next.activities.push(activity);
    Ok(next)
}

/// Appends a copy of a catalog entry to the board under a freshly minted id
/// The catalog entry itself is left untouched. Returns the next state and the new id.
pub fn add_from_catalog(
    state: &ScheduleData,
    entry: &Activity,
    ids: &mut IdGenerator,
) -> (ScheduleData, String) {
    let id = ids.mint(state);
    let mut next = state.clone();
    next.activities.push(Activity {
        id: id.clone(),
        ..entry.clone()
    });
    (next, id)
}

/// Removes the first activity with `activity_id`, searching the board (optionally),
/// then days in `days` order, rows in order, activities in insertion order
fn take_activity(data: &mut ScheduleData, activity_id: &str, include_board: bool) -> Option<Activity> {
    if include_board {
        if let Some(index) = data.activities.iter().position(|a| a.id == activity_id) {
            return Some(data.activities.remove(index));
        }
    }

    for day in &data.days {
        let Some(rows) = data.schedule.get_mut(day) else {
            continue;
        };
        for slot in rows.iter_mut() {
            if let Some(index) = slot.activities.iter().position(|a| a.id == activity_id) {
                return Some(slot.activities.remove(index));
            }
        }
    }
    None
}
