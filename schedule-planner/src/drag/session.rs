use crate::error::Result;
use crate::schedule::{find_activity, ScheduleData};

use super::target::DropTarget;

/// Resolves which drop target, if any, sits under a pointer position
pub trait TargetResolver {
    fn target_at(&self, x: f32, y: f32) -> Option<String>;
}

impl<F> TargetResolver for F
where
    F: Fn(f32, f32) -> Option<String>,
{
    fn target_at(&self, x: f32, y: f32) -> Option<String> {
        self(x, y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(String),
}

/// The move a finished drag asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    ToSlot {
        activity_id: String,
        day: String,
        time_index: usize,
    },
    ToBoard {
        activity_id: String,
    },
    /// Nothing tracked, or released over no target
    Cancel,
}

/// Tracks the one activity being dragged, if any
///
/// A second start while already dragging is ignored: the first drag keeps
/// going until it ends.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn dragging(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// Begins tracking `activity_id` if it exists in `data`; returns whether it is now tracked
    pub fn start(&mut self, data: &ScheduleData, activity_id: &str) -> bool {
        if let DragState::Dragging(current) = &self.state {
            tracing::debug!(current = %current, ignored = %activity_id, "drag already in progress");
            return false;
        }
        if find_activity(data, activity_id).is_none() {
            tracing::debug!(activity_id, "drag started on unknown activity");
            return false;
        }
        self.state = DragState::Dragging(activity_id.to_string());
        true
    }

    /// Motion never changes the model; returns the tracked id for live feedback
    pub fn moved(&self) -> Option<&str> {
        self.dragging()
    }

    /// Finishes the drag over `target` and returns to idle whatever the outcome
    ///
    /// An unparseable target is an error, but the session is idle afterwards all the same.
    pub fn end(&mut self, target: Option<&str>) -> Result<DropAction> {
        let DragState::Dragging(activity_id) = std::mem::take(&mut self.state) else {
            return Ok(DropAction::Cancel);
        };
        let Some(target) = target else {
            return Ok(DropAction::Cancel);
        };

        let action = match target.parse::<DropTarget>()? {
            DropTarget::Board => DropAction::ToBoard { activity_id },
            DropTarget::Slot { day, time_index } => DropAction::ToSlot {
                activity_id,
                day,
                time_index,
            },
        };
        Ok(action)
    }

    /// Ends the drag at a pointer position, asking `resolver` what lies underneath
    pub fn end_at<R: TargetResolver + ?Sized>(&mut self, resolver: &R, x: f32, y: f32) -> Result<DropAction> {
        let target = resolver.target_at(x, y);
        self.end(target.as_deref())
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::schedule::{generate_initial_data, Activity};

    fn data() -> ScheduleData {
        generate_initial_data(
            vec!["Monday".into()],
            vec!["9:00 AM".into()],
            vec![
                Activity::new("activity-1", "Team Meeting"),
                Activity::new("activity-2", "Lunch"),
            ],
        )
    }

    #[test]
    fn drop_on_slot() {
        let mut session = DragSession::new();
        assert!(session.start(&data(), "activity-1"));
        assert_eq!(session.moved(), Some("activity-1"));

        let action = session.end(Some("timeslot-Monday-0")).unwrap();
        assert_eq!(
            action,
            DropAction::ToSlot {
                activity_id: "activity-1".into(),
                day: "Monday".into(),
                time_index: 0
            }
        );
        assert_eq!(session.state(), &DragState::Idle);
    }

    #[test]
    fn drop_on_board() {
        let mut session = DragSession::new();
        session.start(&data(), "activity-2");
        assert_eq!(
            session.end(Some("activity-board")).unwrap(),
            DropAction::ToBoard {
                activity_id: "activity-2".into()
            }
        );
    }

    #[test]
    fn unknown_activity_stays_idle() {
        let mut session = DragSession::new();
        assert!(!session.start(&data(), "activity-9"));
        assert_eq!(session.state(), &DragState::Idle);
        assert_eq!(session.end(Some("activity-board")).unwrap(), DropAction::Cancel);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut session = DragSession::new();
        session.start(&data(), "activity-1");
        assert!(!session.start(&data(), "activity-2"));
        assert_eq!(session.dragging(), Some("activity-1"));
    }

    #[test]
    fn no_target_or_bad_target_returns_to_idle() {
        let mut session = DragSession::new();
        session.start(&data(), "activity-1");
        assert_eq!(session.end(None).unwrap(), DropAction::Cancel);
        assert_eq!(session.state(), &DragState::Idle);

        session.start(&data(), "activity-1");
        assert!(matches!(
            session.end(Some("sidebar")),
            Err(PlannerError::InvalidTarget(_))
        ));
        assert_eq!(session.state(), &DragState::Idle);
    }

    #[test]
    fn resolver_picks_the_target() {
        let resolver = |x: f32, _y: f32| {
            if x < 100.0 {
                Some("activity-board".to_string())
            } else {
                Some("timeslot-Monday-0".to_string())
            }
        };
        let mut session = DragSession::new();
        session.start(&data(), "activity-1");

        let action = session.end_at(&resolver, 250.0, 40.0).unwrap();
        assert!(matches!(action, DropAction::ToSlot { .. }));
    }
}
