use std::cell::RefCell;
use std::rc::Rc;

use catalog::StyleDescriptor;
use engine::{MapEngine, MapEvent};
use tracing::{error, warn};

use crate::registry::{PanelId, PanelRegistry};
use crate::sync::CameraSync;
use crate::terrain::ensure_terrain;

/// Delay before the post-load terrain attempt, letting the engine
/// settle after its initial load.
pub const TERRAIN_GRACE_MS: u32 = 100;

/// Work the host must schedule on behalf of the grid.
///
/// The grid itself owns no timers; the browser host maps this to
/// `setTimeout`, tests deliver it by hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// Call [`PanelGrid::grace_elapsed`] for this panel after the delay.
    TerrainGrace { panel: PanelId, delay_ms: u32 },
}

/// The synchronized panel grid: registry, camera synchronizer and
/// grace-timer bookkeeping behind one event entry point.
///
/// Methods other than [`PanelGrid::add_panel`] take `&self` so that a
/// follower's camera-change event fired from inside a broadcast can
/// re-enter [`PanelGrid::handle_event`] without tripping over an
/// exclusive borrow; the synchronizer's own flag then drops the
/// nested call.
pub struct PanelGrid<E> {
    registry: PanelRegistry<E>,
    sync: CameraSync,
    pending_grace: RefCell<Vec<PanelId>>,
}

impl<E: MapEngine> PanelGrid<E> {
    pub fn new() -> Self {
        Self::with_sync(CameraSync::new())
    }

    /// Build a grid around an injected synchronizer.
    pub fn with_sync(sync: CameraSync) -> Self {
        Self {
            registry: PanelRegistry::new(),
            sync,
            pending_grace: RefCell::new(Vec::new()),
        }
    }

    /// Register one panel, in catalog order. Setup-phase only; the
    /// registry is append-only afterwards.
    pub fn add_panel(&mut self, descriptor: StyleDescriptor, engine: E) -> PanelId {
        self.registry.register(descriptor, engine)
    }

    /// Route one engine notification for one panel.
    pub fn handle_event(&self, id: PanelId, event: MapEvent) -> Option<FollowUp> {
        let Some(panel) = self.registry.get(id) else {
            warn!(panel = id.0, "event for unregistered panel dropped");
            return None;
        };

        match event {
            MapEvent::Load => {
                panel.engine.borrow_mut().resize();
                self.pending_grace.borrow_mut().push(id);
                Some(FollowUp::TerrainGrace {
                    panel: id,
                    delay_ms: TERRAIN_GRACE_MS,
                })
            }
            MapEvent::StyleLoad => {
                // Eager attempt; fires on every style swap.
                let mut map = panel.engine.borrow_mut();
                ensure_terrain(&mut *map, &panel.descriptor.id);
                None
            }
            MapEvent::Error(msg) => {
                error!(
                    panel = %panel.descriptor.id,
                    label = %panel.descriptor.label,
                    "engine error: {msg}"
                );
                None
            }
            MapEvent::StyleImageMissing(image) => {
                warn!(
                    panel = %panel.descriptor.id,
                    image = %image,
                    "style references a missing image"
                );
                None
            }
            MapEvent::Move => {
                self.sync.broadcast(&self.registry, id);
                None
            }
        }
    }

    /// Host timer callback for a [`FollowUp::TerrainGrace`].
    ///
    /// Consumes one pending entry; a delivery with nothing pending is
    /// a no-op, so a stale timer cannot act on a panel that no longer
    /// expects it.
    pub fn grace_elapsed(&self, id: PanelId) {
        {
            let mut pending = self.pending_grace.borrow_mut();
            let Some(pos) = pending.iter().position(|p| *p == id) else {
                return;
            };
            pending.remove(pos);
        }
        let Some(panel) = self.registry.get(id) else {
            return;
        };
        let mut map = panel.engine.borrow_mut();
        if map.is_style_loaded() {
            ensure_terrain(&mut *map, &panel.descriptor.id);
        }
    }

    /// Viewport resize relay: every panel recomputes its rendering
    /// size, unconditionally, no debouncing.
    pub fn resize_all(&self) {
        for panel in self.registry.iter() {
            panel.engine.borrow_mut().resize();
        }
    }

    pub fn engine(&self, id: PanelId) -> Option<Rc<RefCell<E>>> {
        self.registry.get(id).map(|p| p.engine.clone())
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn has_pending_grace(&self, id: PanelId) -> bool {
        self.pending_grace.borrow().contains(&id)
    }
}

impl<E: MapEngine> Default for PanelGrid<E> {
    fn default() -> Self {
        Self::new()
    }
}
