use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use schedule_planner::schedule::{
    add_from_catalog, generate_initial_data, move_to_board, move_to_slot, Activity, IdGenerator,
    ScheduleData,
};

fn seeded_state() -> ScheduleData {
    let board = (1..=6)
        .map(|n| Activity::new(format!("activity-{}", n), format!("Task {}", n)))
        .collect();
    generate_initial_data(
        vec!["Monday".into(), "Tuesday".into(), "Wednesday".into()],
        vec!["9:00 AM".into(), "10:00 AM".into(), "11:00 AM".into()],
        board,
    )
}

fn id_counts(state: &ScheduleData) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    let scheduled = state
        .schedule
        .values()
        .flat_map(|rows| rows.iter())
        .flat_map(|slot| slot.activities.iter());
    for activity in state.activities.iter().chain(scheduled) {
        *counts.entry(activity.id.clone()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn random_moves_never_duplicate_or_lose_activities() {
    let catalog = Activity::new("lib-1", "Focus block").with_color("schedule-item-5");

    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ids = IdGenerator::default();
        let mut state = seeded_state();
        let mut expected = state.activity_count();

        for _ in 0..200 {
            let known: Vec<String> = id_counts(&state).into_keys().collect();
            // Mix in ids that do not exist and targets that are out of range
            let activity_id = if rng.gen_bool(0.1) {
                "activity-missing".to_string()
            } else {
                known[rng.gen_range(0..known.len())].clone()
            };
            let day = ["Monday", "Tuesday", "Wednesday", "Saturday"][rng.gen_range(0..4)];
            let time_index = rng.gen_range(0..4);

            let next = match rng.gen_range(0..10) {
                0 => {
                    let (next, _) = add_from_catalog(&state, &catalog, &mut ids);
                    expected += 1;
                    Some(next)
                }
                1..=3 => move_to_board(&state, &activity_id).ok(),
                _ => move_to_slot(&state, &activity_id, day, time_index).ok(),
            };
            if let Some(next) = next {
                state = next;
            }

            let counts = id_counts(&state);
            assert_eq!(state.activity_count(), expected, "seed {seed}");
            assert!(counts.values().all(|&n| n == 1), "seed {seed}: duplicate id");
        }
    }
}

#[test]
fn round_trip_restores_board_membership() {
    let state = seeded_state();
    let state = move_to_slot(&state, "activity-3", "Tuesday", 2).unwrap();
    let state = move_to_board(&state, "activity-3").unwrap();

    assert!(state.activities.iter().any(|a| a.id == "activity-3"));
    assert_eq!(state.activities.last().map(|a| a.id.as_str()), Some("activity-3"));
    assert!(state.schedule["Tuesday"][2].activities.is_empty());
}

#[test]
fn append_order_in_a_shared_slot() {
    let state = seeded_state();
    let state = move_to_slot(&state, "activity-4", "Wednesday", 0).unwrap();
    let state = move_to_slot(&state, "activity-2", "Wednesday", 0).unwrap();

    let ids: Vec<&str> = state.schedule["Wednesday"][0]
        .activities
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, vec!["activity-4", "activity-2"]);
}

#[test]
fn unknown_id_is_a_structural_no_op() {
    let state = seeded_state();
    assert!(move_to_slot(&state, "nope", "Monday", 0).is_err());
    assert_eq!(state, seeded_state());
}
