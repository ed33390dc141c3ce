//! Capability surface for an interactive map rendering engine.
//!
//! The orchestration layers never talk to a concrete engine directly;
//! they see the [`MapEngine`] trait plus a small set of value types.
//! Concrete adapters (the browser binding, the in-memory fake) live at
//! the edges.

pub mod camera;
pub mod error;
pub mod events;
pub mod fake;
pub mod sky;
pub mod source;
pub mod style;

pub use camera::{Camera, LngLat};
pub use error::EngineError;
pub use events::MapEvent;
pub use fake::FakeMap;
pub use sky::SkyPaint;
pub use source::{DemSource, TerrainSettings};
pub use style::{LayerInfo, LayerKind};

/// Operations one map panel's engine must provide.
///
/// Camera reads and writes are infallible by contract; style and
/// source mutation can be rejected by the engine and return
/// [`EngineError`].
pub trait MapEngine {
    /// Current camera (center, zoom, bearing, pitch).
    fn camera(&self) -> Camera;

    /// Instantaneously move the camera. No animation, no transition.
    fn jump_to(&mut self, camera: Camera);

    /// Whether the current style has finished loading completely.
    fn is_style_loaded(&self) -> bool;

    /// Layers of the current style, in style order.
    fn style_layers(&self) -> Vec<LayerInfo>;

    /// Whether a data source with this identifier exists on the map.
    fn has_source(&self, id: &str) -> bool;

    /// Attach a raster elevation source under the given identifier.
    fn add_dem_source(&mut self, id: &str, source: &DemSource) -> Result<(), EngineError>;

    /// Activate terrain displacement from an attached elevation source.
    /// Re-applying the same settings is a no-op in effect.
    fn set_terrain(&mut self, settings: &TerrainSettings) -> Result<(), EngineError>;

    /// Add a new sky layer with the given paint in one operation.
    fn add_sky_layer(&mut self, id: &str, paint: &SkyPaint) -> Result<(), EngineError>;

    /// Update a single paint property on an existing layer.
    fn set_paint_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &serde_json::Value,
    ) -> Result<(), EngineError>;

    /// Recompute the engine's internal rendering size.
    fn resize(&mut self);
}
