/// Layer type as far as this system cares: sky layers are special,
/// everything else is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerKind {
    Sky,
    Other(String),
}

impl LayerKind {
    /// Classify an engine-reported layer type string.
    pub fn from_type_str(kind: &str) -> Self {
        if kind == "sky" {
            LayerKind::Sky
        } else {
            LayerKind::Other(kind.to_string())
        }
    }

    pub fn is_sky(&self) -> bool {
        matches!(self, LayerKind::Sky)
    }
}

/// One layer of a loaded style, in style order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerInfo {
    pub id: String,
    pub kind: LayerKind,
}

impl LayerInfo {
    pub fn new(id: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn is_sky(&self) -> bool {
        self.kind.is_sky()
    }
}

#[cfg(test)]
mod tests {
    use super::LayerKind;

    #[test]
    fn sky_is_detected_by_type_string() {
        assert!(LayerKind::from_type_str("sky").is_sky());
        assert!(!LayerKind::from_type_str("raster").is_sky());
        assert_eq!(
            LayerKind::from_type_str("fill"),
            LayerKind::Other("fill".to_string())
        );
    }
}
