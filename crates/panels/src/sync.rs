use std::cell::Cell;

use engine::MapEngine;

use crate::registry::{PanelId, PanelRegistry};

/// Broadcasts one panel's camera onto every other registered panel.
///
/// Programmatically moving a follower fires that follower's own
/// camera-change event, which would re-enter the broadcast. The
/// `in_flight` flag excludes those nested calls: they are dropped
/// outright, not queued. A dropped call is fine — the next natural
/// camera-change event reconverges everything.
pub struct CameraSync {
    in_flight: Cell<bool>,
}

impl CameraSync {
    pub fn new() -> Self {
        Self {
            in_flight: Cell::new(false),
        }
    }

    /// Copy the source panel's camera onto every other panel, in
    /// registry order. Followers observe a snapshot taken up front,
    /// not a live reference. The source panel itself is untouched.
    pub fn broadcast<E: MapEngine>(&self, registry: &PanelRegistry<E>, source: PanelId) {
        if self.in_flight.get() {
            return;
        }
        // Tolerates delivery before the source finished registering.
        let Some(source_panel) = registry.get(source) else {
            return;
        };

        self.in_flight.set(true);
        let snapshot = source_panel.engine.borrow().camera();
        for panel in registry.iter() {
            if panel.id == source {
                continue;
            }
            panel.engine.borrow_mut().jump_to(snapshot);
        }
        self.in_flight.set(false);
    }
}

impl Default for CameraSync {
    fn default() -> Self {
        Self::new()
    }
}
