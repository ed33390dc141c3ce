use serde_json::{Value, json};

/// Paint property names of a sky layer, as the engine spells them.
pub const SKY_TYPE: &str = "sky-type";
pub const SKY_SUN_INTENSITY: &str = "sky-atmosphere-sun-intensity";
pub const SKY_COLOR: &str = "sky-atmosphere-color";
pub const SKY_HALO_COLOR: &str = "sky-atmosphere-halo-color";

/// Paint configuration of an atmospheric sky layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyPaint {
    pub sky_type: String,
    pub sun_intensity: f64,
    pub color: String,
    pub halo_color: String,
}

impl Default for SkyPaint {
    /// The fixed atmosphere applied to every panel.
    fn default() -> Self {
        Self {
            sky_type: "atmosphere".to_string(),
            sun_intensity: 20.0,
            color: "#9fd4ff".to_string(),
            halo_color: "#f6fbff".to_string(),
        }
    }
}

impl SkyPaint {
    /// The four paint properties as `(name, value)` pairs, for
    /// adapters and for per-property updates on an existing layer.
    pub fn properties(&self) -> [(&'static str, Value); 4] {
        [
            (SKY_TYPE, json!(self.sky_type)),
            (SKY_SUN_INTENSITY, json!(self.sun_intensity)),
            (SKY_COLOR, json!(self.color)),
            (SKY_HALO_COLOR, json!(self.halo_color)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::SkyPaint;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn default_paint_has_the_four_fixed_properties() {
        let props = SkyPaint::default().properties();
        assert_eq!(props[0], ("sky-type", json!("atmosphere")));
        assert_eq!(props[1], ("sky-atmosphere-sun-intensity", json!(20.0)));
        assert_eq!(props[2], ("sky-atmosphere-color", json!("#9fd4ff")));
        assert_eq!(props[3], ("sky-atmosphere-halo-color", json!("#f6fbff")));
    }
}
