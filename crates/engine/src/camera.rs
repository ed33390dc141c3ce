/// Geographic position in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Viewing parameters of one map panel.
///
/// Logically a single shared value replicated across all panels; each
/// engine owns its own copy and the synchronizer converges them after
/// any one changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub center: LngLat,
    /// Zoom level.
    pub zoom: f64,
    /// Rotation in degrees.
    pub bearing: f64,
    /// Tilt in degrees.
    pub pitch: f64,
}

impl Camera {
    /// Camera looking straight down at `center` with no rotation.
    pub fn new(center: LngLat, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            bearing: 0.0,
            pitch: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Camera, LngLat};

    #[test]
    fn new_zeroes_bearing_and_pitch() {
        let cam = Camera::new(LngLat::new(-71.0, 43.5), 5.5);
        assert_eq!(cam.bearing, 0.0);
        assert_eq!(cam.pitch, 0.0);
        assert_eq!(cam.center, LngLat::new(-71.0, 43.5));
    }

    #[test]
    fn cameras_compare_exactly() {
        let a = Camera::new(LngLat::new(-70.0, 44.0), 6.0);
        let b = Camera::new(LngLat::new(-70.0, 44.0), 6.0);
        assert_eq!(a, b);
        assert_ne!(a, Camera::new(LngLat::new(-70.0, 44.0), 6.1));
    }
}
