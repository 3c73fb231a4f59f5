use std::sync::Arc;

use super::types::{Activity, Location, ScheduleData};

/// Finds an activity and where it lives
///
/// Search order is the board first, then days in `days` order, rows in order,
/// activities in insertion order.
pub fn find_activity<'a>(data: &'a ScheduleData, activity_id: &str) -> Option<(&'a Activity, Location)> {
    if let Some(activity) = data.activities.iter().find(|a| a.id == activity_id) {
        return Some((activity, Location::Board));
    }

    for day in &data.days {
        let Some(rows) = data.schedule.get(day) else {
            continue;
        };
        for (time_index, slot) in rows.iter().enumerate() {
            if let Some(activity) = slot.activities.iter().find(|a| a.id == activity_id) {
                return Some((
                    activity,
                    Location::Slot {
                        day: day.clone(),
                        time_index,
                    },
                ));
            }
        }
    }
    None
}

/// Holds the current snapshot
///
/// Updates swap the whole snapshot, so a reader holding an older `Arc` keeps
/// seeing a complete state.
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    current: Arc<ScheduleData>,
}

impl ScheduleModel {
    pub fn new(data: ScheduleData) -> Self {
        ScheduleModel {
            current: Arc::new(data),
        }
    }

    pub fn snapshot(&self) -> Arc<ScheduleData> {
        Arc::clone(&self.current)
    }

    pub fn data(&self) -> &ScheduleData {
        &self.current
    }

    pub fn find_activity(&self, activity_id: &str) -> Option<(&Activity, Location)> {
        find_activity(&self.current, activity_id)
    }

    pub fn contains_id(&self, activity_id: &str) -> bool {
        self.current.contains_id(activity_id)
    }

    pub fn replace(&mut self, next: ScheduleData) {
        self.current = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::seed::generate_initial_data;

    fn model() -> ScheduleModel {
        let mut data = generate_initial_data(
            vec!["Monday".into(), "Tuesday".into()],
            vec!["9:00 AM".into(), "10:00 AM".into()],
            vec![Activity::new("activity-1", "Team Meeting")],
        );
        data.schedule.get_mut("Tuesday").unwrap()[1]
            .activities
            .push(Activity::new("activity-2", "Review"));
        ScheduleModel::new(data)
    }

    #[test]
    fn finds_on_board_and_in_grid() {
        let model = model();

        let (activity, location) = model.find_activity("activity-1").unwrap();
        assert_eq!(activity.name, "Team Meeting");
        assert_eq!(location, Location::Board);

        let (_, location) = model.find_activity("activity-2").unwrap();
        assert_eq!(
            location,
            Location::Slot {
                day: "Tuesday".into(),
                time_index: 1
            }
        );

        assert!(model.find_activity("activity-3").is_none());
        assert!(model.contains_id("activity-2"));
        assert!(!model.contains_id("activity-3"));
    }

    #[test]
    fn board_wins_over_grid_for_duplicate_ids() {
        let mut data = model().data().clone();
        data.schedule.get_mut("Monday").unwrap()[0]
            .activities
            .push(Activity::new("activity-1", "Shadow"));
        let (activity, location) = find_activity(&data, "activity-1").unwrap();

        assert_eq!(location, Location::Board);
        assert_eq!(activity.name, "Team Meeting");
    }

    #[test]
    fn old_snapshot_survives_replace() {
        let mut model = model();
        let before = model.snapshot();

        let mut next = before.as_ref().clone();
        next.activities.clear();
        model.replace(next);

        assert_eq!(before.activities.len(), 1);
        assert!(model.snapshot().activities.is_empty());
    }
}
