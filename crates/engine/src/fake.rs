//! In-memory engine adapter for tests and offline harnesses.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::camera::{Camera, LngLat};
use crate::error::EngineError;
use crate::sky::SkyPaint;
use crate::source::{DemSource, TerrainSettings};
use crate::style::{LayerInfo, LayerKind};
use crate::MapEngine;

/// Scriptable [`MapEngine`] that records everything done to it.
///
/// Style mutation before `finish_style_load` is rejected with
/// [`EngineError::StyleNotReady`], like a real engine. Further
/// failures are opt-in: `fail_add_source` rejects the next source
/// attach, `fail_paint_property` rejects individual paint updates.
/// The `on_jump` hook fires after every `jump_to`, which lets tests
/// reproduce the move-event feedback real engines produce when moved
/// programmatically.
pub struct FakeMap {
    camera: Camera,
    style_loaded: bool,
    layers: Vec<LayerInfo>,
    paint: BTreeMap<String, BTreeMap<String, Value>>,
    sources: BTreeMap<String, DemSource>,
    terrain: Option<TerrainSettings>,
    resize_count: usize,
    jump_count: usize,
    fail_add_source: bool,
    failing_paint: BTreeSet<String>,
    on_jump: Option<Box<dyn FnMut(Camera)>>,
}

impl FakeMap {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            style_loaded: false,
            layers: Vec::new(),
            paint: BTreeMap::new(),
            sources: BTreeMap::new(),
            terrain: None,
            resize_count: 0,
            jump_count: 0,
            fail_add_source: false,
            failing_paint: BTreeSet::new(),
            on_jump: None,
        }
    }

    /// Mark the current style as fully loaded.
    pub fn finish_style_load(&mut self) {
        self.style_loaded = true;
    }

    /// Move the camera as a user gesture would, without going through
    /// `jump_to` bookkeeping.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Pre-seed a style layer, as if the loaded style shipped with it.
    pub fn push_layer(&mut self, id: impl Into<String>, kind: LayerKind) {
        self.layers.push(LayerInfo::new(id, kind));
    }

    /// Reject the next `add_dem_source` calls.
    pub fn fail_add_source(&mut self) {
        self.fail_add_source = true;
    }

    /// Reject updates to one named paint property.
    pub fn fail_paint_property(&mut self, name: impl Into<String>) {
        self.failing_paint.insert(name.into());
    }

    /// Hook fired after every `jump_to`.
    pub fn set_on_jump(&mut self, hook: impl FnMut(Camera) + 'static) {
        self.on_jump = Some(Box::new(hook));
    }

    pub fn terrain(&self) -> Option<&TerrainSettings> {
        self.terrain.as_ref()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn sky_layer_count(&self) -> usize {
        self.layers.iter().filter(|l| l.is_sky()).count()
    }

    pub fn paint_of(&self, layer_id: &str) -> Option<&BTreeMap<String, Value>> {
        self.paint.get(layer_id)
    }

    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    pub fn jump_count(&self) -> usize {
        self.jump_count
    }

    /// A loaded, layer-less map at the given camera. Most tests start here.
    pub fn loaded(camera: Camera) -> Self {
        let mut map = Self::new(camera);
        map.finish_style_load();
        map
    }

    /// A loaded map at the default comparison-grid start camera.
    pub fn loaded_at_start() -> Self {
        Self::loaded(Camera::new(LngLat::new(-71.0, 43.5), 5.5))
    }
}

impl std::fmt::Debug for FakeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeMap")
            .field("camera", &self.camera)
            .field("style_loaded", &self.style_loaded)
            .field("layers", &self.layers)
            .field("sources", &self.sources)
            .field("terrain", &self.terrain)
            .finish_non_exhaustive()
    }
}

impl MapEngine for FakeMap {
    fn camera(&self) -> Camera {
        self.camera
    }

    fn jump_to(&mut self, camera: Camera) {
        self.camera = camera;
        self.jump_count += 1;
        if let Some(hook) = self.on_jump.as_mut() {
            hook(camera);
        }
    }

    fn is_style_loaded(&self) -> bool {
        self.style_loaded
    }

    fn style_layers(&self) -> Vec<LayerInfo> {
        self.layers.clone()
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn add_dem_source(&mut self, id: &str, source: &DemSource) -> Result<(), EngineError> {
        if !self.style_loaded {
            return Err(EngineError::StyleNotReady);
        }
        if self.fail_add_source {
            return Err(EngineError::SourceRejected("scripted failure".to_string()));
        }
        if self.sources.contains_key(id) {
            return Err(EngineError::SourceRejected(format!(
                "source {id} already exists"
            )));
        }
        self.sources.insert(id.to_string(), source.clone());
        Ok(())
    }

    fn set_terrain(&mut self, settings: &TerrainSettings) -> Result<(), EngineError> {
        self.terrain = Some(settings.clone());
        Ok(())
    }

    fn add_sky_layer(&mut self, id: &str, paint: &SkyPaint) -> Result<(), EngineError> {
        if !self.style_loaded {
            return Err(EngineError::StyleNotReady);
        }
        if self.layers.iter().any(|l| l.id == id) {
            return Err(EngineError::LayerRejected(format!(
                "layer {id} already exists"
            )));
        }
        self.layers.push(LayerInfo::new(id, LayerKind::Sky));
        let props = self
            .paint
            .entry(id.to_string())
            .or_default();
        for (name, value) in paint.properties() {
            props.insert(name.to_string(), value);
        }
        Ok(())
    }

    fn set_paint_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &Value,
    ) -> Result<(), EngineError> {
        if self.failing_paint.contains(name) {
            return Err(EngineError::PaintRejected {
                layer: layer_id.to_string(),
                property: name.to_string(),
                reason: "scripted failure".to_string(),
            });
        }
        if !self.layers.iter().any(|l| l.id == layer_id) {
            return Err(EngineError::PaintRejected {
                layer: layer_id.to_string(),
                property: name.to_string(),
                reason: "unknown layer".to_string(),
            });
        }
        self.paint
            .entry(layer_id.to_string())
            .or_default()
            .insert(name.to_string(), value.clone());
        Ok(())
    }

    fn resize(&mut self) {
        self.resize_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::FakeMap;
    use crate::camera::{Camera, LngLat};
    use crate::error::EngineError;
    use crate::sky::SkyPaint;
    use crate::source::{DemSource, TerrainSettings};
    use crate::MapEngine;
    use pretty_assertions::assert_eq;

    fn dem() -> DemSource {
        DemSource {
            url: "mapbox://mapbox.terrain-rgb".to_string(),
            tile_size: 512,
            max_zoom: 14,
        }
    }

    #[test]
    fn records_sources_and_terrain() {
        let mut map = FakeMap::loaded_at_start();
        map.add_dem_source("dem", &dem()).unwrap();
        assert!(map.has_source("dem"));
        map.set_terrain(&TerrainSettings {
            source: "dem".to_string(),
            exaggeration: 1.0,
        })
        .unwrap();
        assert_eq!(map.terrain().unwrap().source, "dem");
    }

    #[test]
    fn mutating_an_unloaded_style_is_rejected() {
        let mut map = FakeMap::new(Camera::new(LngLat::new(0.0, 0.0), 1.0));
        assert_eq!(
            map.add_dem_source("dem", &dem()),
            Err(EngineError::StyleNotReady)
        );
        assert_eq!(
            map.add_sky_layer("sky", &SkyPaint::default()),
            Err(EngineError::StyleNotReady)
        );
        assert_eq!(map.source_count(), 0);
        assert_eq!(map.sky_layer_count(), 0);
    }

    #[test]
    fn duplicate_source_is_rejected() {
        let mut map = FakeMap::loaded_at_start();
        map.add_dem_source("dem", &dem()).unwrap();
        assert!(map.add_dem_source("dem", &dem()).is_err());
        assert_eq!(map.source_count(), 1);
    }

    #[test]
    fn add_sky_layer_records_all_paint() {
        let mut map = FakeMap::loaded_at_start();
        map.add_sky_layer("sky", &SkyPaint::default()).unwrap();
        assert_eq!(map.sky_layer_count(), 1);
        assert_eq!(map.paint_of("sky").unwrap().len(), 4);
    }

    #[test]
    fn on_jump_hook_fires_with_the_new_camera() {
        use std::cell::Cell;
        use std::rc::Rc;

        let seen = Rc::new(Cell::new(0.0f64));
        let mut map = FakeMap::loaded_at_start();
        let seen_in_hook = seen.clone();
        map.set_on_jump(move |cam| seen_in_hook.set(cam.zoom));

        map.jump_to(Camera::new(LngLat::new(-70.0, 44.0), 6.0));
        assert_eq!(seen.get(), 6.0);
        assert_eq!(map.jump_count(), 1);
    }

    #[test]
    fn scripted_paint_failure_is_per_property() {
        let mut map = FakeMap::loaded_at_start();
        map.add_sky_layer("sky", &SkyPaint::default()).unwrap();
        map.fail_paint_property("sky-atmosphere-color");
        assert!(map
            .set_paint_property("sky", "sky-atmosphere-color", &serde_json::json!("#fff"))
            .is_err());
        assert!(map
            .set_paint_property("sky", "sky-type", &serde_json::json!("atmosphere"))
            .is_ok());
    }
}
