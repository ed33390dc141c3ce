/// A tiled raster elevation dataset resolved by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DemSource {
    /// Opaque locator resolved by the engine.
    pub url: String,
    pub tile_size: u32,
    pub max_zoom: u8,
}

/// Terrain displacement referencing an attached elevation source.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainSettings {
    /// Identifier of the elevation source to displace from.
    pub source: String,
    /// Multiplier applied to real elevation.
    pub exaggeration: f64,
}
