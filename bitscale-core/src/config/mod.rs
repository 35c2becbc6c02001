//! Configuration structures and constants for the bitscale-core library.
//!
//! The [`ReferenceProfile`] is the known-good pairing of resolution, framerate,
//! codec and bitrate that every suggestion is scaled from. It is built once
//! (from the environment, the builder, or `Default`) and passed explicitly to
//! the scaling functions.

mod builder;
mod env;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{CoreError, CoreResult};

pub use builder::ReferenceProfileBuilder;
pub use env::{
    ENV_FRAMERATE_SCALING, ENV_OUTPUT_ENCODER, ENV_PIXEL_SCALING, ENV_REFERENCE_BITRATE,
    ENV_REFERENCE_ENCODER, ENV_REFERENCE_FRAMERATE, ENV_REFERENCE_HEIGHT, ENV_REFERENCE_WIDTH,
};

// Default constants

/// Default pixel-count scaling exponent, in percent (0.90 as an exponent).
pub const DEFAULT_PIXEL_SCALING: f64 = 90.0;

/// Default framerate scaling exponent, in percent (0.75 as an exponent).
pub const DEFAULT_FRAMERATE_SCALING: f64 = 75.0;

/// Default reference width in pixels.
pub const DEFAULT_REFERENCE_WIDTH: u32 = 1920;

/// Default reference height in pixels.
pub const DEFAULT_REFERENCE_HEIGHT: u32 = 1080;

/// Default reference framerate in frames per second.
pub const DEFAULT_REFERENCE_FRAMERATE: f64 = 24.0;

/// Default reference bitrate in bits per second.
pub const DEFAULT_REFERENCE_BITRATE: u64 = 6_000_000;

/// Default reference codec family.
pub const DEFAULT_REFERENCE_ENCODER: &str = codec::BASELINE_FAMILY;

/// Default concrete output encoder.
pub const DEFAULT_OUTPUT_ENCODER: &str = "libx265";

/// Baseline against which all bitrate suggestions are scaled.
///
/// # Examples
///
/// ```
/// use bitscale_core::config::ReferenceProfile;
///
/// let profile = ReferenceProfile::default();
/// assert_eq!(profile.reference_bitrate, 6_000_000);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    /// Pixel-count scaling exponent, in percent
    pub pixel_scaling_pct: f64,

    /// Framerate scaling exponent, in percent
    pub framerate_scaling_pct: f64,

    /// Reference width in pixels
    pub reference_width: u32,

    /// Reference height in pixels
    pub reference_height: u32,

    /// Reference framerate in frames per second
    pub reference_framerate: f64,

    /// Known-good bitrate at the reference resolution/framerate/codec, in bps
    pub reference_bitrate: u64,

    /// Codec family name of the reference encode (e.g. "AVC")
    pub reference_encoder: String,
}

impl Default for ReferenceProfile {
    fn default() -> Self {
        Self {
            pixel_scaling_pct: DEFAULT_PIXEL_SCALING,
            framerate_scaling_pct: DEFAULT_FRAMERATE_SCALING,
            reference_width: DEFAULT_REFERENCE_WIDTH,
            reference_height: DEFAULT_REFERENCE_HEIGHT,
            reference_framerate: DEFAULT_REFERENCE_FRAMERATE,
            reference_bitrate: DEFAULT_REFERENCE_BITRATE,
            reference_encoder: DEFAULT_REFERENCE_ENCODER.to_string(),
        }
    }
}

impl ReferenceProfile {
    /// Loads the profile from process environment variables, using the
    /// defaults for any variable that is not set.
    ///
    /// A variable that is set but not valid UTF-8 is a `CoreError::Config`.
    pub fn from_env() -> CoreResult<Self> {
        env::reference_profile_from_lookup(env::var)
    }

    /// Loads the profile through an arbitrary key lookup.
    ///
    /// `lookup` returns `None` for keys that are not set.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        env::reference_profile_from_lookup(|key: &str| Ok(lookup(key)))
    }

    /// Reference pixel count (width * height).
    #[must_use]
    pub fn reference_pixel_count(&self) -> u64 {
        u64::from(self.reference_width) * u64::from(self.reference_height)
    }

    /// Pixel scaling exponent as a fraction.
    #[must_use]
    pub fn pixel_exponent(&self) -> f64 {
        self.pixel_scaling_pct / 100.0
    }

    /// Framerate scaling exponent as a fraction.
    #[must_use]
    pub fn framerate_exponent(&self) -> f64 {
        self.framerate_scaling_pct / 100.0
    }

    /// Checks the invariants the scaling model depends on.
    ///
    /// Reference dimensions, framerate and bitrate must be positive, both
    /// scaling percentages finite and positive, and the reference encoder
    /// present in the efficiency table.
    pub fn validate(&self) -> CoreResult<()> {
        if self.reference_width == 0 || self.reference_height == 0 {
            return Err(CoreError::InvalidInput(format!(
                "reference resolution must be positive, got {}x{}",
                self.reference_width, self.reference_height
            )));
        }
        if !(self.reference_framerate.is_finite() && self.reference_framerate > 0.0) {
            return Err(CoreError::InvalidInput(format!(
                "reference framerate must be positive, got {}",
                self.reference_framerate
            )));
        }
        if self.reference_bitrate == 0 {
            return Err(CoreError::InvalidInput(
                "reference bitrate must be positive".to_string(),
            ));
        }
        for (name, pct) in [
            ("pixel scaling", self.pixel_scaling_pct),
            ("framerate scaling", self.framerate_scaling_pct),
        ] {
            if !(pct.is_finite() && pct > 0.0) {
                return Err(CoreError::InvalidInput(format!(
                    "{name} percentage must be positive, got {pct}"
                )));
            }
        }
        if codec::efficiency(&self.reference_encoder).is_none() {
            return Err(CoreError::UnknownCodec(self.reference_encoder.clone()));
        }
        Ok(())
    }
}

/// Settings for the re-encode job that consumes the suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Concrete encoder identifier passed to the encoder (e.g. "libx265")
    pub output_encoder: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_encoder: DEFAULT_OUTPUT_ENCODER.to_string(),
        }
    }
}

impl OutputConfig {
    /// Loads the output settings from process environment variables.
    pub fn from_env() -> CoreResult<Self> {
        env::output_config_from_lookup(env::var)
    }

    /// Loads the output settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        env::output_config_from_lookup(|key: &str| Ok(lookup(key)))
    }
}
