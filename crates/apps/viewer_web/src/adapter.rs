//! [`MapEngine`] adapter over the mapbox-gl bindings.
//!
//! Structured values cross the JS boundary as `serde_json::Value`
//! serialized through `JSON.parse` / `JSON.stringify`; DOM handles
//! stay on the JS side.

use engine::{
    Camera, DemSource, EngineError, LayerInfo, LayerKind, LngLat, MapEngine, SkyPaint,
    TerrainSettings,
};
use serde::Deserialize;
use serde_json::{Map as JsonMap, Value, json};
use wasm_bindgen::JsValue;

use crate::mapbox;

pub struct MapboxMap {
    inner: mapbox::Map,
}

impl MapboxMap {
    pub fn new(inner: mapbox::Map) -> Self {
        Self { inner }
    }
}

/// The slice of a style document this system reads.
#[derive(Deserialize)]
struct StyleDoc {
    #[serde(default)]
    layers: Vec<StyleLayer>,
}

#[derive(Deserialize)]
struct StyleLayer {
    id: String,
    #[serde(rename = "type")]
    kind: String,
}

fn to_js(value: &Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(JsValue::NULL)
}

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn number_prop(object: &JsValue, name: &str) -> f64 {
    js_sys::Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

impl MapEngine for MapboxMap {
    fn camera(&self) -> Camera {
        let center = self.inner.get_center();
        Camera {
            center: LngLat::new(number_prop(&center, "lng"), number_prop(&center, "lat")),
            zoom: self.inner.get_zoom(),
            bearing: self.inner.get_bearing(),
            pitch: self.inner.get_pitch(),
        }
    }

    fn jump_to(&mut self, camera: Camera) {
        let options = json!({
            "center": [camera.center.lng, camera.center.lat],
            "zoom": camera.zoom,
            "bearing": camera.bearing,
            "pitch": camera.pitch,
        });
        self.inner.jump_to(&to_js(&options));
    }

    fn is_style_loaded(&self) -> bool {
        self.inner.is_style_loaded()
    }

    fn style_layers(&self) -> Vec<LayerInfo> {
        let Ok(raw) = js_sys::JSON::stringify(&self.inner.get_style()) else {
            return Vec::new();
        };
        let Ok(doc) = serde_json::from_str::<StyleDoc>(&String::from(raw)) else {
            return Vec::new();
        };
        doc.layers
            .into_iter()
            .map(|layer| LayerInfo::new(layer.id, LayerKind::from_type_str(&layer.kind)))
            .collect()
    }

    fn has_source(&self, id: &str) -> bool {
        let source = self.inner.get_source(id);
        !source.is_undefined() && !source.is_null()
    }

    fn add_dem_source(&mut self, id: &str, source: &DemSource) -> Result<(), EngineError> {
        let spec = json!({
            "type": "raster-dem",
            "url": source.url,
            "tileSize": source.tile_size,
            "maxzoom": source.max_zoom,
        });
        self.inner
            .add_source(id, &to_js(&spec))
            .map_err(|e| EngineError::SourceRejected(js_err(e)))
    }

    fn set_terrain(&mut self, settings: &TerrainSettings) -> Result<(), EngineError> {
        let spec = json!({
            "source": settings.source,
            "exaggeration": settings.exaggeration,
        });
        self.inner
            .set_terrain(&to_js(&spec))
            .map_err(|e| EngineError::Backend(js_err(e)))
    }

    fn add_sky_layer(&mut self, id: &str, paint: &SkyPaint) -> Result<(), EngineError> {
        let mut paint_spec = JsonMap::new();
        for (name, value) in paint.properties() {
            paint_spec.insert(name.to_string(), value);
        }
        let spec = json!({
            "id": id,
            "type": "sky",
            "paint": Value::Object(paint_spec),
        });
        self.inner
            .add_layer(&to_js(&spec))
            .map_err(|e| EngineError::LayerRejected(js_err(e)))
    }

    fn set_paint_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &Value,
    ) -> Result<(), EngineError> {
        self.inner
            .set_paint_property(layer_id, name, &to_js(value))
            .map_err(|e| EngineError::PaintRejected {
                layer: layer_id.to_string(),
                property: name.to_string(),
                reason: js_err(e),
            })
    }

    fn resize(&mut self) {
        self.inner.resize();
    }
}
