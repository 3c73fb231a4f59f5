use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// User-facing feedback raised by successful planner operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Scheduled {
        day: String,
        time_index: usize,
        activity_id: String,
    },
    Unscheduled {
        activity_id: String,
    },
    Added {
        activity_id: String,
    },
}

impl Notification {
    /// Short toast-style title
    pub fn title(&self) -> &'static str {
        match self {
            Notification::Scheduled { .. } => "Activity scheduled",
            Notification::Unscheduled { .. } => "Activity unscheduled",
            Notification::Added { .. } => "Activity added",
        }
    }
}

/// Receives notifications; delivery is fire-and-forget
pub trait NotificationSink: Send {
    fn notify(&self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(&Notification) + Send,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Bounded queue of recent notifications, drained by whoever shows them
/// The oldest entry is dropped once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    inner: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        NotificationFeed {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, notification: Notification) {
        let Ok(mut queue) = self.inner.lock() else {
            return;
        };
        if queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(notification);
    }

    pub fn drain(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for NotificationFeed {
    fn notify(&self, notification: &Notification) {
        self.push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(id: &str) -> Notification {
        Notification::Added {
            activity_id: id.to_string(),
        }
    }

    #[test]
    fn feed_drops_oldest_when_full() {
        let feed = NotificationFeed::new(2);
        feed.notify(&added("a"));
        feed.notify(&added("b"));
        feed.notify(&added("c"));

        assert_eq!(feed.drain(), vec![added("b"), added("c")]);
        assert!(feed.is_empty());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Notification::Scheduled {
            day: "Monday".into(),
            time_index: 2,
            activity_id: "activity-1".into(),
        })
        .unwrap();
        assert_eq!(json["kind"], "scheduled");
        assert_eq!(json["time_index"], 2);
    }
}
