use super::types::ScheduleData;

/// Mints `activity-{n}` ids from a counter that only goes up
///
/// Candidates already live in the schedule are skipped, so a minted id never
/// collides with anything on the board or in the grid.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next: 1 }
    }
}

impl IdGenerator {
    pub fn starting_at(next: u64) -> Self {
        IdGenerator { next }
    }

    pub fn mint(&mut self, state: &ScheduleData) -> String {
        loop {
            let candidate = format!("activity-{}", self.next);
            self.next += 1;
            if !state.contains_id(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::seed::generate_initial_data;
    use crate::schedule::types::Activity;

    #[test]
    fn skips_ids_already_in_use() {
        let state = generate_initial_data(
            vec!["Monday".into()],
            vec!["9:00 AM".into()],
            vec![
                Activity::new("activity-1", "Team Meeting"),
                Activity::new("activity-2", "Lunch"),
            ],
        );
        let mut ids = IdGenerator::default();

        assert_eq!(ids.mint(&state), "activity-3");
        assert_eq!(ids.mint(&state), "activity-4");
    }

    #[test]
    fn skips_ids_live_in_the_grid() {
        let mut state = generate_initial_data(vec!["Monday".into()], vec!["9:00 AM".into()], vec![]);
        state.schedule.get_mut("Monday").unwrap()[0]
            .activities
            .push(Activity::new("activity-1", "Review"));

        assert!(state.contains_id("activity-1"));
        assert!(!state.contains_id("activity-2"));
        assert_eq!(IdGenerator::default().mint(&state), "activity-2");
    }

    #[test]
    fn counter_never_reuses_a_value() {
        let state = generate_initial_data(vec![], vec![], vec![]);
        let mut ids = IdGenerator::starting_at(41);
        let first = ids.mint(&state);
        let second = ids.mint(&state);
        assert_eq!(first, "activity-41");
        assert_eq!(second, "activity-42");
    }
}
