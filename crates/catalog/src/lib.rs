//! The static catalog of map styles shown in the comparison grid.
//!
//! One panel is created per entry, in catalog order. The catalog is
//! fixed at startup; there is no runtime mutation path.

use serde::{Deserialize, Serialize};

/// One visual style of the comparison grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// Unique slug identifying the panel.
    pub id: String,
    /// Human-readable name shown on the panel label.
    pub label: String,
    /// Opaque style locator resolved by the rendering engine.
    #[serde(rename = "style")]
    pub style_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse(String),
    DuplicateId(String),
    EmptyField { id: String, field: &'static str },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "catalog parse error: {msg}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate catalog id: {id}"),
            CatalogError::EmptyField { id, field } => {
                write!(f, "catalog entry {id} has an empty {field}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Parse a JSON array of style descriptors and validate it.
pub fn from_json_str(json: &str) -> Result<Vec<StyleDescriptor>, CatalogError> {
    let entries: Vec<StyleDescriptor> =
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
    validate(&entries)?;
    Ok(entries)
}

/// Ids must be unique and every field non-empty.
pub fn validate(entries: &[StyleDescriptor]) -> Result<(), CatalogError> {
    let mut seen = std::collections::BTreeSet::new();
    for entry in entries {
        for (field, value) in [
            ("id", &entry.id),
            ("label", &entry.label),
            ("style", &entry.style_url),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: entry.id.clone(),
                    field,
                });
            }
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(CatalogError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(())
}

/// The built-in catalog, in grid order.
pub fn builtin() -> Vec<StyleDescriptor> {
    let entries = [
        ("streets", "Streets", "mapbox://styles/mapbox/streets-v12"),
        ("outdoors", "Outdoors", "mapbox://styles/mapbox/outdoors-v12"),
        (
            "custom-style-3",
            "Burgundy",
            "mapbox://styles/evandapplegate/clrwzxv8b016s01pbgmsa8fcs",
        ),
        ("light", "Light", "mapbox://styles/mapbox/light-v11"),
        ("dark", "Dark", "mapbox://styles/mapbox/dark-v11"),
        (
            "custom-style-6",
            "Minimo",
            "mapbox://styles/evandapplegate/ckgzk8twb0xol19qm5131gzy3",
        ),
        (
            "custom-style-7",
            "Beige",
            "mapbox://styles/evandapplegate/cm0o5j76w024v01o0ds82fzpr",
        ),
        (
            "custom-cali-terrain",
            "Warm",
            "mapbox://styles/evandapplegate/cmie1azfq008f01r97qppgp2t",
        ),
        (
            "custom-desert-tones",
            "Green-y",
            "mapbox://styles/evandapplegate/cmc58lfs6006z01sr1qse2mbu",
        ),
        (
            "frank",
            "Frank",
            "mapbox://styles/evandapplegate/cmie1lfrg000d01stbv41djit",
        ),
        (
            "american-memory",
            "American Memory",
            "mapbox://styles/evandapplegate/cmie1ntqn007n01svgxmxh4g8",
        ),
        (
            "basic-overcast",
            "Basic Overcast",
            "mapbox://styles/evandapplegate/cmie1s1ql007501snhbf3478v",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, label, style_url)| StyleDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            style_url: style_url.to_string(),
        })
        .collect()
}
