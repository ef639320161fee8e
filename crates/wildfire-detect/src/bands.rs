//! Spectral bands
//!
//! A scene is the set of Sentinel-2 bands the detector reads: three
//! infrared bands (B12, B11, B8A), three visible bands (B04, B03, B02) and
//! an optional cloud probability layer. Decoding the band files is left to
//! a [`BandSource`] implementation; this module only defines which bands
//! exist, where they conventionally live, and how they are scaled.

use crate::error::{DetectError, DetectResult};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use wildfire_core::Band;

/// Sentinel-2 L2A products store reflectance scaled by this factor
pub const REFLECTANCE_SCALE: f32 = 10000.0;

/// Bands used by the fire detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpectralBand {
    /// Short-wave infrared, 2190 nm
    B12,
    /// Short-wave infrared, 1610 nm
    B11,
    /// Narrow near infrared, 865 nm
    B8A,
    /// Red
    B04,
    /// Green
    B03,
    /// Blue
    B02,
    /// Cloud probability mask
    CloudProbability,
}

impl SpectralBand {
    /// Bands every scene must provide
    pub const REQUIRED: [SpectralBand; 6] = [
        SpectralBand::B12,
        SpectralBand::B11,
        SpectralBand::B8A,
        SpectralBand::B04,
        SpectralBand::B03,
        SpectralBand::B02,
    ];

    /// Short band name
    pub fn name(self) -> &'static str {
        match self {
            SpectralBand::B12 => "B12",
            SpectralBand::B11 => "B11",
            SpectralBand::B8A => "B8A",
            SpectralBand::B04 => "B04",
            SpectralBand::B03 => "B03",
            SpectralBand::B02 => "B02",
            SpectralBand::CloudProbability => "CLDPRB",
        }
    }

    /// True for bands that must be present in a scene
    pub fn is_required(self) -> bool {
        self != SpectralBand::CloudProbability
    }
}

impl fmt::Display for SpectralBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supplies raw band data
///
/// Implementations decode whatever storage they wrap (JPEG 2000 tiles,
/// GeoTIFFs, test fixtures) into [`Band`]s of raw digital numbers.
/// `Ok(None)` means the band is not available.
pub trait BandSource {
    fn load(&self, band: SpectralBand) -> DetectResult<Option<Band>>;
}

/// Band source backed by bands already in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryBands {
    bands: HashMap<SpectralBand, Band>,
}

impl InMemoryBands {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a band
    pub fn insert(&mut self, band: SpectralBand, data: Band) -> Option<Band> {
        self.bands.insert(band, data)
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_band(mut self, band: SpectralBand, data: Band) -> Self {
        self.bands.insert(band, data);
        self
    }

    /// Number of bands held
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// True if no band is held
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl BandSource for InMemoryBands {
    fn load(&self, band: SpectralBand) -> DetectResult<Option<Band>> {
        Ok(self.bands.get(&band).cloned())
    }
}

/// On-disk layout of a scene's 20 m band files
///
/// Infrared bands live under `infrared/`, visible bands under `color/`,
/// both named `<prefix>_<band>_20m.jp2`; the cloud probability mask is
/// `MSK_CLDPRB_20m.jp2` in the scene directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLayout {
    /// Scene directory
    pub directory: PathBuf,
    /// Tile and acquisition prefix, e.g. `T13UFA_20250602T175931`
    pub file_name_prefix: String,
}

impl SceneLayout {
    pub fn new(directory: impl AsRef<Path>, file_name_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            file_name_prefix: file_name_prefix.into(),
        }
    }

    /// Path of the file holding `band`
    pub fn band_path(&self, band: SpectralBand) -> PathBuf {
        let file = |name: &str| format!("{}_{}_20m.jp2", self.file_name_prefix, name);
        match band {
            SpectralBand::B12 => self.directory.join("infrared").join(file("B12")),
            SpectralBand::B11 => self.directory.join("infrared").join(file("B11")),
            SpectralBand::B8A => self.directory.join("infrared").join(file("B8a")),
            SpectralBand::B04 => self.directory.join("color").join(file("B04")),
            SpectralBand::B03 => self.directory.join("color").join(file("B03")),
            SpectralBand::B02 => self.directory.join("color").join(file("B02")),
            SpectralBand::CloudProbability => self.directory.join("MSK_CLDPRB_20m.jp2"),
        }
    }
}

/// The bands of one scene, all with the same dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    pub b12: Band,
    pub b11: Band,
    pub b8a: Band,
    pub b04: Band,
    pub b03: Band,
    pub b02: Band,
    pub cloud_probability: Option<Band>,
}

impl BandSet {
    /// Load and scale a scene
    ///
    /// Every band is divided by `scale` (use [`REFLECTANCE_SCALE`] for L2A
    /// products).
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::MissingBand`] if a required band is absent and
    /// [`DetectError::BandSizeMismatch`] if a band's dimensions differ from
    /// B12's.
    pub fn load<S: BandSource + ?Sized>(source: &S, scale: f32) -> DetectResult<Self> {
        let required = |band: SpectralBand| -> DetectResult<Band> {
            let raw = source.load(band)?.ok_or(DetectError::MissingBand(band))?;
            Ok(raw.scaled(scale)?)
        };

        let set = BandSet {
            b12: required(SpectralBand::B12)?,
            b11: required(SpectralBand::B11)?,
            b8a: required(SpectralBand::B8A)?,
            b04: required(SpectralBand::B04)?,
            b03: required(SpectralBand::B03)?,
            b02: required(SpectralBand::B02)?,
            cloud_probability: source
                .load(SpectralBand::CloudProbability)?
                .map(|b| b.scaled(scale))
                .transpose()?,
        };
        set.check_dimensions()?;

        log::debug!(
            "loaded scene {}x{} (cloud mask: {})",
            set.b12.width(),
            set.b12.height(),
            set.cloud_probability.is_some()
        );
        Ok(set)
    }

    /// Build a set from bands that are already scaled
    pub fn from_bands(bands: [Band; 6], cloud_probability: Option<Band>) -> DetectResult<Self> {
        let [b12, b11, b8a, b04, b03, b02] = bands;
        let set = BandSet {
            b12,
            b11,
            b8a,
            b04,
            b03,
            b02,
            cloud_probability,
        };
        set.check_dimensions()?;
        Ok(set)
    }

    fn check_dimensions(&self) -> DetectResult<()> {
        let expected = self.dimensions();
        for band in SpectralBand::REQUIRED
            .into_iter()
            .chain([SpectralBand::CloudProbability])
        {
            if let Some(data) = self.get(band) {
                if data.dimensions() != expected {
                    return Err(DetectError::BandSizeMismatch {
                        band,
                        expected,
                        actual: data.dimensions(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Scene dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        self.b12.dimensions()
    }

    /// Band by name
    pub fn get(&self, band: SpectralBand) -> Option<&Band> {
        match band {
            SpectralBand::B12 => Some(&self.b12),
            SpectralBand::B11 => Some(&self.b11),
            SpectralBand::B8A => Some(&self.b8a),
            SpectralBand::B04 => Some(&self.b04),
            SpectralBand::B03 => Some(&self.b03),
            SpectralBand::B02 => Some(&self.b02),
            SpectralBand::CloudProbability => self.cloud_probability.as_ref(),
        }
    }

    /// Min-max normalise every band to [0, 1] independently
    pub fn normalized(&self) -> BandSet {
        BandSet {
            b12: self.b12.normalized(),
            b11: self.b11.normalized(),
            b8a: self.b8a.normalized(),
            b04: self.b04.normalized(),
            b03: self.b03.normalized(),
            b02: self.b02.normalized(),
            cloud_probability: self.cloud_probability.as_ref().map(Band::normalized),
        }
    }
}
