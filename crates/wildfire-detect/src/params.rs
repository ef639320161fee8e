//! Detection parameters

use crate::error::{DetectError, DetectResult};
use wildfire_region::{ConnectivityType, RegionOptions};

/// Thresholds and structuring element sizes for [`detect_fire`]
///
/// All thresholds apply to min-max normalised bands.
///
/// [`detect_fire`]: crate::detect_fire
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectionParams {
    /// Outer fire: B12 must exceed this
    pub outer_b12_min: f32,
    /// Outer fire: B11 must stay below this (excludes clouds)
    pub outer_b11_max: f32,
    /// Outer fire: B8A must stay below this (excludes vegetation)
    pub outer_b8a_max: f32,
    /// Core fire: B12 must exceed this
    pub core_b12_min: f32,
    /// Core fire: B11 must exceed this
    pub core_b11_min: f32,
    /// Core fire: B04, B03 and B02 must each stay below this
    pub core_visible_max: f32,
    /// Side of the closing brick that widens outer fire into the core
    /// search area
    pub search_brick: u32,
    /// Side of the closing brick applied to the combined fire mask
    pub close_brick: u32,
    /// Side of the opening brick applied after the closing
    pub open_brick: u32,
    /// Connectivity and color seed for region labeling
    pub regions: RegionOptions,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            outer_b12_min: 0.6,
            outer_b11_max: 0.5,
            outer_b8a_max: 0.5,
            core_b12_min: 0.7,
            core_b11_min: 0.7,
            core_visible_max: 0.8,
            search_brick: 135,
            close_brick: 7,
            open_brick: 2,
            regions: RegionOptions::default(),
        }
    }
}

impl DetectionParams {
    /// Create parameters with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the core search closing size
    pub fn with_search_brick(mut self, size: u32) -> Self {
        self.search_brick = size;
        self
    }

    /// Set the closing and opening sizes of the region cleanup
    pub fn with_cleanup_bricks(mut self, close: u32, open: u32) -> Self {
        self.close_brick = close;
        self.open_brick = open;
        self
    }

    /// Set region connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.regions.connectivity = connectivity;
        self
    }

    /// Set the region color seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.regions.seed = seed;
        self
    }

    /// Check that thresholds are finite and bricks non-empty
    pub fn validate(&self) -> DetectResult<()> {
        let thresholds = [
            ("outer_b12_min", self.outer_b12_min),
            ("outer_b11_max", self.outer_b11_max),
            ("outer_b8a_max", self.outer_b8a_max),
            ("core_b12_min", self.core_b12_min),
            ("core_b11_min", self.core_b11_min),
            ("core_visible_max", self.core_visible_max),
        ];
        if let Some((name, value)) = thresholds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DetectError::InvalidParameters(format!(
                "{name} must be finite, got {value}"
            )));
        }

        let bricks = [
            ("search_brick", self.search_brick),
            ("close_brick", self.close_brick),
            ("open_brick", self.open_brick),
        ];
        if let Some((name, _)) = bricks.iter().find(|(_, v)| *v == 0) {
            return Err(DetectError::InvalidParameters(format!(
                "{name} must be positive"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildfire_region::DEFAULT_SEED;

    #[test]
    fn test_defaults() {
        let params = DetectionParams::default();
        assert_eq!(params.search_brick, 135);
        assert_eq!(params.close_brick, 7);
        assert_eq!(params.open_brick, 2);
        assert_eq!(params.regions.connectivity, ConnectivityType::EightWay);
        assert_eq!(params.regions.seed, DEFAULT_SEED);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let params = DetectionParams::new()
            .with_search_brick(15)
            .with_cleanup_bricks(3, 1)
            .with_connectivity(ConnectivityType::FourWay)
            .with_seed(7);
        assert_eq!(params.search_brick, 15);
        assert_eq!((params.close_brick, params.open_brick), (3, 1));
        assert_eq!(params.regions.connectivity, ConnectivityType::FourWay);
        assert_eq!(params.regions.seed, 7);
    }

    #[test]
    fn test_validate() {
        let params = DetectionParams::new().with_cleanup_bricks(0, 2);
        assert!(matches!(
            params.validate(),
            Err(DetectError::InvalidParameters(_))
        ));

        let params = DetectionParams {
            core_b11_min: f32::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml() {
        let params: DetectionParams = toml::from_str(
            r#"
            search_brick = 51
            core_visible_max = 0.75

            [regions]
            connectivity = "four_way"
            seed = 3
            "#,
        )
        .unwrap();
        assert_eq!(params.search_brick, 51);
        assert_eq!(params.core_visible_max, 0.75);
        assert_eq!(params.close_brick, 7);
        assert_eq!(params.regions.connectivity, ConnectivityType::FourWay);
        assert_eq!(params.regions.seed, 3);
    }
}
