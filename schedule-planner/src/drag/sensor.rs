use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// A pointer position with a timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPoint {
    pub x: f32,
    pub y: f32,
    pub at_ms: u64,
}

impl PointerPoint {
    pub fn new(x: f32, y: f32, at_ms: u64) -> Self {
        PointerPoint { x, y, at_ms }
    }

    fn distance_to(&self, other: &PointerPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// When a press turns into a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationConstraint {
    /// Pointer must travel at least `px` (tells drags from clicks)
    Distance { px: f32 },
    /// Press must be held `ms` while staying within `tolerance_px` (tells drags from scrolls)
    Delay { ms: u64, tolerance_px: f32 },
}

impl ActivationConstraint {
    pub fn default_for(kind: PointerKind) -> Self {
        match kind {
            PointerKind::Mouse => ActivationConstraint::Distance { px: 10.0 },
            PointerKind::Touch => ActivationConstraint::Delay {
                ms: 250,
                tolerance_px: 5.0,
            },
        }
    }
}

#[derive(Debug, Clone)]
struct Press {
    activity_id: String,
    kind: PointerKind,
    origin: PointerPoint,
}

/// Turns raw presses and motion into drag activations
#[derive(Debug, Clone)]
pub struct ActivationSensor {
    mouse: ActivationConstraint,
    touch: ActivationConstraint,
    pending: Option<Press>,
}

impl Default for ActivationSensor {
    fn default() -> Self {
        ActivationSensor::new(
            ActivationConstraint::default_for(PointerKind::Mouse),
            ActivationConstraint::default_for(PointerKind::Touch),
        )
    }
}

impl ActivationSensor {
    pub fn new(mouse: ActivationConstraint, touch: ActivationConstraint) -> Self {
        ActivationSensor {
            mouse,
            touch,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts tracking a press on an activity, replacing any earlier unactivated press
    pub fn press(&mut self, activity_id: &str, kind: PointerKind, at: PointerPoint) {
        self.pending = Some(Press {
            activity_id: activity_id.to_string(),
            kind,
            origin: at,
        });
    }

    /// Feeds pointer motion; returns the activity id once the press qualifies as a drag
    pub fn motion(&mut self, at: PointerPoint) -> Option<String> {
        let press = self.pending.as_ref()?;
        let moved = press.origin.distance_to(&at);
        let elapsed = at.at_ms.saturating_sub(press.origin.at_ms);

        match self.constraint_for(press.kind) {
            ActivationConstraint::Distance { px } => {
                if moved >= px {
                    return self.activate();
                }
            }
            ActivationConstraint::Delay { ms, tolerance_px } => {
                if elapsed >= ms {
                    return self.activate();
                }
                if moved > tolerance_px {
                    // Finger left the tolerance before the hold finished: a scroll
                    self.pending = None;
                }
            }
        }
        None
    }

    /// Lets a held touch activate without any motion
    pub fn tick(&mut self, now_ms: u64) -> Option<String> {
        let press = self.pending.as_ref()?;
        match self.constraint_for(press.kind) {
            ActivationConstraint::Delay { ms, .. }
                if now_ms.saturating_sub(press.origin.at_ms) >= ms =>
            {
                self.activate()
            }
            _ => None,
        }
    }

    /// Ends the press; returns true when it never became a drag (a click or tap)
    pub fn release(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn constraint_for(&self, kind: PointerKind) -> ActivationConstraint {
        match kind {
            PointerKind::Mouse => self.mouse,
            PointerKind::Touch => self.touch,
        }
    }

    fn activate(&mut self) -> Option<String> {
        self.pending.take().map(|press| press.activity_id)
    }
}
