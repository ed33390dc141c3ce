//! Orchestration for the synchronized style-comparison grid.
//!
//! One panel per catalog entry, all sharing a single camera. Engine
//! adapters deliver [`engine::MapEvent`]s into [`PanelGrid`], which
//! routes them: camera moves broadcast to every other panel, style
//! loads trigger terrain and sky augmentation, engine errors are
//! logged and never fatal.

pub mod grid;
pub mod registry;
pub mod sync;
pub mod terrain;

pub use grid::{FollowUp, PanelGrid, TERRAIN_GRACE_MS};
pub use registry::{Panel, PanelId, PanelRegistry};
pub use sync::CameraSync;
pub use terrain::{apply_sky_layer, ensure_terrain, DEM_SOURCE_ID, SKY_LAYER_ID};
