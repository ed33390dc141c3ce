//! Terrain and sky augmentation applied to each panel once its style
//! is fully loaded.
//!
//! Every failure here is non-fatal: the operation is logged with the
//! panel's identity and execution continues, leaving that one panel
//! with degraded visuals. There is no retry; the next style load
//! re-triggers the attempt.

use engine::{DemSource, MapEngine, SkyPaint, TerrainSettings};
use tracing::warn;

/// Well-known identifier of the elevation source.
pub const DEM_SOURCE_ID: &str = "mapbox-dem";
/// Locator of the tiled raster elevation dataset.
pub const DEM_TILESET_URL: &str = "mapbox://mapbox.terrain-rgb";
pub const DEM_TILE_SIZE: u32 = 512;
pub const DEM_MAX_ZOOM: u8 = 14;
/// Multiplier applied to real elevation.
pub const TERRAIN_EXAGGERATION: f64 = 1.0;
/// Identifier used when this system adds the sky layer itself.
pub const SKY_LAYER_ID: &str = "synced-sky";

fn dem_source() -> DemSource {
    DemSource {
        url: DEM_TILESET_URL.to_string(),
        tile_size: DEM_TILE_SIZE,
        max_zoom: DEM_MAX_ZOOM,
    }
}

/// Idempotently attach the elevation source, activate terrain
/// displacement from it, and apply the sky layer.
///
/// Safe to call repeatedly on the same loaded style: the source is
/// only added when absent and re-applying the same terrain settings
/// is a no-op in effect.
pub fn ensure_terrain<E: MapEngine>(map: &mut E, panel: &str) {
    if !map.is_style_loaded() {
        return;
    }

    if !map.has_source(DEM_SOURCE_ID) {
        if let Err(err) = map.add_dem_source(DEM_SOURCE_ID, &dem_source()) {
            warn!(panel, %err, "failed to add elevation source");
        }
    }

    if let Err(err) = map.set_terrain(&TerrainSettings {
        source: DEM_SOURCE_ID.to_string(),
        exaggeration: TERRAIN_EXAGGERATION,
    }) {
        warn!(panel, %err, "failed to activate terrain");
    }

    apply_sky_layer(map, panel);
}

/// Ensure exactly one atmospheric sky layer with the fixed paint.
///
/// Detection is by layer TYPE, not identifier: a style that ships its
/// own sky layer gets its paint updated in place rather than a second
/// layer added. A failed paint property does not abort the rest.
pub fn apply_sky_layer<E: MapEngine>(map: &mut E, panel: &str) {
    if !map.is_style_loaded() {
        return;
    }

    let paint = SkyPaint::default();
    let existing = map.style_layers().into_iter().find(|l| l.is_sky());

    if let Some(layer) = existing {
        for (name, value) in paint.properties() {
            if let Err(err) = map.set_paint_property(&layer.id, name, &value) {
                warn!(panel, property = name, %err, "failed to set sky paint property");
            }
        }
        return;
    }

    if let Err(err) = map.add_sky_layer(SKY_LAYER_ID, &paint) {
        warn!(panel, %err, "failed to add sky layer");
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_sky_layer, ensure_terrain, DEM_SOURCE_ID, SKY_LAYER_ID};
    use engine::{Camera, FakeMap, LayerKind, LngLat};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn ensure_terrain_is_idempotent() {
        let mut map = FakeMap::loaded_at_start();
        ensure_terrain(&mut map, "streets");
        ensure_terrain(&mut map, "streets");

        assert_eq!(map.source_count(), 1);
        assert_eq!(map.sky_layer_count(), 1);
        let terrain = map.terrain().unwrap();
        assert_eq!(terrain.source, DEM_SOURCE_ID);
        assert_eq!(terrain.exaggeration, 1.0);
    }

    #[test]
    fn does_nothing_until_the_style_is_loaded() {
        let mut map = FakeMap::new(Camera::new(LngLat::new(0.0, 0.0), 1.0));
        ensure_terrain(&mut map, "streets");
        assert_eq!(map.source_count(), 0);
        assert_eq!(map.sky_layer_count(), 0);
        assert!(map.terrain().is_none());
    }

    #[test]
    fn fresh_style_gets_one_sky_layer_with_all_paint() {
        let mut map = FakeMap::loaded_at_start();
        apply_sky_layer(&mut map, "streets");

        assert_eq!(map.sky_layer_count(), 1);
        let paint = map.paint_of(SKY_LAYER_ID).unwrap();
        assert_eq!(paint.get("sky-type"), Some(&json!("atmosphere")));
        assert_eq!(
            paint.get("sky-atmosphere-sun-intensity"),
            Some(&json!(20.0))
        );
        assert_eq!(paint.get("sky-atmosphere-color"), Some(&json!("#9fd4ff")));
        assert_eq!(
            paint.get("sky-atmosphere-halo-color"),
            Some(&json!("#f6fbff"))
        );
    }

    #[test]
    fn preexisting_sky_layer_is_updated_in_place() {
        let mut map = FakeMap::loaded_at_start();
        map.push_layer("style-own-sky", LayerKind::Sky);

        apply_sky_layer(&mut map, "dark");

        assert_eq!(map.sky_layer_count(), 1);
        assert!(map.paint_of(SKY_LAYER_ID).is_none());
        let paint = map.paint_of("style-own-sky").unwrap();
        assert_eq!(paint.len(), 4);
    }

    #[test]
    fn failed_paint_property_does_not_abort_the_rest() {
        let mut map = FakeMap::loaded_at_start();
        map.push_layer("style-own-sky", LayerKind::Sky);
        map.fail_paint_property("sky-atmosphere-sun-intensity");

        apply_sky_layer(&mut map, "dark");

        assert_eq!(map.sky_layer_count(), 1);
        let paint = map.paint_of("style-own-sky").unwrap();
        assert_eq!(paint.len(), 3);
        assert_eq!(paint.get("sky-atmosphere-halo-color"), Some(&json!("#f6fbff")));
    }

    #[test]
    fn source_failure_still_attempts_terrain_and_sky() {
        let mut map = FakeMap::loaded_at_start();
        map.fail_add_source();

        ensure_terrain(&mut map, "light");

        assert_eq!(map.source_count(), 0);
        assert!(map.terrain().is_some());
        assert_eq!(map.sky_layer_count(), 1);
    }
}
