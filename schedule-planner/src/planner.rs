use std::sync::Arc;

use crate::drag::{
    ActivationSensor, DragSession, DragState, DropAction, PointerKind, PointerPoint, TargetResolver,
};
use crate::error::{PlannerError, Result};
use crate::events::{Notification, NotificationSink};
use crate::schedule::{
    add_from_catalog, move_to_board, move_to_slot, Activity, IdGenerator, Location, ScheduleData,
    ScheduleModel,
};

/// Entry point for whatever draws the board and grid
///
/// Owns the schedule snapshot, the catalog, the drag session and the
/// notification sinks. Every mutation goes through the placement functions
/// and replaces the snapshot wholesale.
pub struct Planner {
    model: ScheduleModel,
    catalog: Vec<Activity>,
    ids: IdGenerator,
    session: DragSession,
    sensor: ActivationSensor,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Planner {
    pub fn new(data: ScheduleData, catalog: Vec<Activity>) -> Self {
        Planner {
            model: ScheduleModel::new(data),
            catalog,
            ids: IdGenerator::default(),
            session: DragSession::new(),
            sensor: ActivationSensor::default(),
            sinks: Vec::new(),
        }
    }

    pub fn with_sensor(mut self, sensor: ActivationSensor) -> Self {
        self.sensor = sensor;
        self
    }

    pub fn subscribe<S: NotificationSink + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    pub fn snapshot(&self) -> Arc<ScheduleData> {
        self.model.snapshot()
    }

    pub fn find_activity(&self, activity_id: &str) -> Option<(&Activity, Location)> {
        self.model.find_activity(activity_id)
    }

    pub fn catalog(&self) -> &[Activity] {
        &self.catalog
    }

    pub fn drag_state(&self) -> &DragState {
        self.session.state()
    }

    pub fn move_to_slot(&mut self, activity_id: &str, day: &str, time_index: usize) -> Result<()> {
        let next = move_to_slot(self.model.data(), activity_id, day, time_index)
            .inspect_err(|err| tracing::debug!(%err, "move to slot skipped"))?;
        self.model.replace(next);

        tracing::debug!(activity_id, day, time_index, "activity scheduled");
        self.emit(Notification::Scheduled {
            day: day.to_string(),
            time_index,
            activity_id: activity_id.to_string(),
        });
        Ok(())
    }

    pub fn move_to_board(&mut self, activity_id: &str) -> Result<()> {
        let next = move_to_board(self.model.data(), activity_id)
            .inspect_err(|err| tracing::debug!(%err, "move to board skipped"))?;
        self.model.replace(next);

        tracing::debug!(activity_id, "activity unscheduled");
        self.emit(Notification::Unscheduled {
            activity_id: activity_id.to_string(),
        });
        Ok(())
    }

    /// Puts a copy of `entry` on the board under a new id and returns that id
    pub fn add_from_catalog(&mut self, entry: &Activity) -> String {
        let (next, id) = add_from_catalog(self.model.data(), entry, &mut self.ids);
        self.model.replace(next);

        tracing::debug!(activity_id = %id, name = %entry.name, "activity added to board");
        self.emit(Notification::Added {
            activity_id: id.clone(),
        });
        id
    }

    /// Same as `add_from_catalog`, looking the entry up by its catalog id
    pub fn add_catalog_entry(&mut self, catalog_id: &str) -> Result<String> {
        let entry = self
            .catalog
            .iter()
            .find(|a| a.id == catalog_id)
            .cloned()
            .ok_or_else(|| PlannerError::CatalogEntryNotFound(catalog_id.to_string()))?;
        Ok(self.add_from_catalog(&entry))
    }

    pub fn begin_drag(&mut self, activity_id: &str) -> bool {
        self.session.start(self.model.data(), activity_id)
    }

    pub fn drag_move(&self) -> Option<&str> {
        self.session.moved()
    }

    pub fn cancel_drag(&mut self) {
        self.session.cancel();
        self.sensor.release();
    }

    /// Ends the current drag over the target with identifier `target` and applies the move
    ///
    /// Releasing over nothing is a cancel. A move that cannot be applied leaves the
    /// snapshot untouched and comes back as an error.
    pub fn end_drag(&mut self, target: Option<&str>) -> Result<DropAction> {
        let action = self
            .session
            .end(target)
            .inspect_err(|err| tracing::debug!(%err, "drop ignored"))?;
        self.apply(&action)?;
        Ok(action)
    }

    /// Ends the current drag at a pointer position
    pub fn end_drag_at<R: TargetResolver + ?Sized>(&mut self, resolver: &R, x: f32, y: f32) -> Result<DropAction> {
        let target = resolver.target_at(x, y);
        self.end_drag(target.as_deref())
    }

    /// Raw pointer press on an activity; the drag starts once the sensor activates
    pub fn pointer_down(&mut self, activity_id: &str, kind: PointerKind, at: PointerPoint) {
        if self.session.dragging().is_none() {
            self.sensor.press(activity_id, kind, at);
        }
    }

    /// Raw pointer motion; returns true while a drag is in progress
    pub fn pointer_move(&mut self, at: PointerPoint) -> bool {
        if let Some(activity_id) = self.sensor.motion(at) {
            self.begin_drag(&activity_id);
        }
        self.session.dragging().is_some()
    }

    /// Timer tick for touch holds
    pub fn pointer_tick(&mut self, now_ms: u64) -> bool {
        if let Some(activity_id) = self.sensor.tick(now_ms) {
            self.begin_drag(&activity_id);
        }
        self.session.dragging().is_some()
    }

    /// Raw pointer release; a release that never activated a drag is a click and changes nothing
    pub fn pointer_up<R: TargetResolver + ?Sized>(&mut self, resolver: &R, at: PointerPoint) -> Result<DropAction> {
        if self.sensor.release() {
            return Ok(DropAction::Cancel);
        }
        self.end_drag_at(resolver, at.x, at.y)
    }

    fn apply(&mut self, action: &DropAction) -> Result<()> {
        match action {
            DropAction::ToSlot {
                activity_id,
                day,
                time_index,
            } => self.move_to_slot(activity_id, day, *time_index),
            DropAction::ToBoard { activity_id } => self.move_to_board(activity_id),
            DropAction::Cancel => Ok(()),
        }
    }

    fn emit(&self, notification: Notification) {
        for sink in &self.sinks {
            sink.notify(&notification);
        }
    }
}
