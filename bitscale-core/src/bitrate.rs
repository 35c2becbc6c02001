//! Power-law bitrate scaling.
//!
//! A suggestion is the reference bitrate scaled by three multipliers:
//!
//! ```text
//! pixel     = (pixels / reference_pixels) ^ (pixel_scaling_pct / 100)
//! framerate = (fps / reference_fps)       ^ (framerate_scaling_pct / 100)
//! encoder   = efficiency(codec) / efficiency(reference_encoder)
//! ```
//!
//! The product is rounded down to a multiple of [`BITRATE_QUANTUM`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::config::ReferenceProfile;
use crate::error::{CoreError, CoreResult};

/// Suggested bitrates are rounded down to a multiple of this step, in bps.
pub const BITRATE_QUANTUM: u64 = 100_000;

/// Properties of a video stream, as reported by a media probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoProfile {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Frames per second
    pub framerate: f64,
    /// Codec name, matched case-insensitively against the efficiency table
    pub codec: String,
}

impl VideoProfile {
    pub fn new<S: Into<String>>(width: u32, height: u32, framerate: f64, codec: S) -> Self {
        Self {
            width,
            height,
            framerate,
            codec: codec.into(),
        }
    }

    /// Computes the intermediate multipliers and the quantized suggestion.
    pub fn breakdown(&self, profile: &ReferenceProfile) -> CoreResult<BitrateBreakdown> {
        breakdown(profile, self.width, self.height, self.framerate, &self.codec)
    }

    /// Suggested bitrate for this video, in bps.
    pub fn suggest_bitrate(&self, profile: &ReferenceProfile) -> CoreResult<u64> {
        self.breakdown(profile).map(|b| b.suggested_bitrate)
    }
}

/// The factors behind one bitrate suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BitrateBreakdown {
    pub pixel_multiplier: f64,
    pub framerate_multiplier: f64,
    pub encoder_multiplier: f64,
    /// Unquantized bitrate in bps
    pub raw_bitrate: f64,
    /// `raw_bitrate` rounded down to a multiple of [`BITRATE_QUANTUM`]
    pub suggested_bitrate: u64,
}

fn check_video_input(width: u32, height: u32, framerate: f64) -> CoreResult<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidInput(format!(
            "resolution must be positive, got {width}x{height}"
        )));
    }
    if !(framerate.is_finite() && framerate > 0.0) {
        return Err(CoreError::InvalidInput(format!(
            "framerate must be positive, got {framerate}"
        )));
    }
    Ok(())
}

fn codec_efficiency(name: &str) -> CoreResult<f64> {
    codec::efficiency(name).ok_or_else(|| CoreError::UnknownCodec(name.to_string()))
}

/// Largest bitrate that fits in a `u64` and is a multiple of [`BITRATE_QUANTUM`].
pub const MAX_BITRATE: u64 = (u64::MAX / BITRATE_QUANTUM) * BITRATE_QUANTUM;

/// Rounds a raw bitrate down to a multiple of [`BITRATE_QUANTUM`].
///
/// Values beyond [`MAX_BITRATE`] clamp to it, so the result is always a
/// multiple of the quantum.
#[must_use]
pub fn quantize(raw_bitrate: f64) -> u64 {
    let steps = (raw_bitrate / BITRATE_QUANTUM as f64).floor();
    if steps <= 0.0 {
        0
    } else {
        (steps as u64).min(MAX_BITRATE / BITRATE_QUANTUM) * BITRATE_QUANTUM
    }
}

/// Computes every factor of a bitrate suggestion.
///
/// # Errors
///
/// * `CoreError::InvalidInput` - zero width/height, a non-positive or
///   non-finite framerate, an invalid reference profile, or a result too
///   large to represent in bps
/// * `CoreError::UnknownCodec` - `codec` or the reference encoder is not in
///   the efficiency table
pub fn breakdown(
    profile: &ReferenceProfile,
    width: u32,
    height: u32,
    framerate: f64,
    codec: &str,
) -> CoreResult<BitrateBreakdown> {
    profile.validate()?;
    check_video_input(width, height, framerate)?;

    let encoder_efficiency = codec_efficiency(codec)?;
    let reference_efficiency = codec_efficiency(&profile.reference_encoder)?;

    let pixel_count = u64::from(width) * u64::from(height);
    let pixel_ratio = pixel_count as f64 / profile.reference_pixel_count() as f64;
    let pixel_multiplier = pixel_ratio.powf(profile.pixel_exponent());

    let framerate_ratio = framerate / profile.reference_framerate;
    let framerate_multiplier = framerate_ratio.powf(profile.framerate_exponent());

    let encoder_multiplier = encoder_efficiency / reference_efficiency;

    let raw_bitrate = profile.reference_bitrate as f64
        * pixel_multiplier
        * framerate_multiplier
        * encoder_multiplier;
    if !raw_bitrate.is_finite() {
        return Err(CoreError::InvalidInput(format!(
            "bitrate for {width}x{height}@{framerate} is not finite"
        )));
    }
    if raw_bitrate >= MAX_BITRATE as f64 {
        return Err(CoreError::InvalidInput(format!(
            "bitrate for {width}x{height}@{framerate} exceeds {MAX_BITRATE} bps"
        )));
    }

    let suggested_bitrate = quantize(raw_bitrate);

    debug!(
        "{width}x{height}@{framerate} {codec}: pixel x{pixel_multiplier:.4}, \
         framerate x{framerate_multiplier:.4}, encoder x{encoder_multiplier:.4} \
         -> {raw_bitrate:.0} bps (suggested {suggested_bitrate})"
    );

    Ok(BitrateBreakdown {
        pixel_multiplier,
        framerate_multiplier,
        encoder_multiplier,
        raw_bitrate,
        suggested_bitrate,
    })
}

/// Suggests a bitrate, in bps, for a video of the given resolution,
/// framerate and codec, relative to `profile`.
///
/// # Examples
///
/// ```
/// use bitscale_core::bitrate::suggest_bitrate;
/// use bitscale_core::config::ReferenceProfile;
///
/// let profile = ReferenceProfile::default();
/// assert_eq!(suggest_bitrate(&profile, 1920, 1080, 24.0, "avc").unwrap(), 6_000_000);
/// assert_eq!(suggest_bitrate(&profile, 1920, 1080, 24.0, "hevc").unwrap(), 4_500_000);
/// ```
pub fn suggest_bitrate(
    profile: &ReferenceProfile,
    width: u32,
    height: u32,
    framerate: f64,
    codec: &str,
) -> CoreResult<u64> {
    breakdown(profile, width, height, framerate, codec).map(|b| b.suggested_bitrate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(99_999.9), 0);
        assert_eq!(quantize(100_000.0), 100_000);
        assert_eq!(quantize(6_000_000.0), 6_000_000);
        assert_eq!(quantize(6_099_999.0), 6_000_000);
        assert_eq!(quantize(-5.0), 0);
        assert_eq!(quantize(1.0e30), MAX_BITRATE);
        assert_eq!(MAX_BITRATE % BITRATE_QUANTUM, 0);
    }

    #[test]
    fn test_oversized_bitrate_is_rejected() {
        let profile = ReferenceProfile::default();
        let result = suggest_bitrate(&profile, u32::MAX, u32::MAX, 1.0e6, "avc");
        assert!(
            matches!(result, Err(CoreError::InvalidInput(ref msg)) if msg.contains("exceeds")),
            "unexpected result {result:?}"
        );
    }

    #[test]
    fn test_breakdown_at_reference() {
        let profile = ReferenceProfile::default();
        let b = breakdown(&profile, 1920, 1080, 24.0, "AVC").unwrap();
        assert_eq!(b.pixel_multiplier, 1.0);
        assert_eq!(b.framerate_multiplier, 1.0);
        assert_eq!(b.encoder_multiplier, 1.0);
        assert_eq!(b.raw_bitrate, 6_000_000.0);
        assert_eq!(b.suggested_bitrate, 6_000_000);
    }

    #[test]
    fn test_breakdown_uhd_multiplier() {
        let profile = ReferenceProfile::default();
        let b = breakdown(&profile, 3840, 2160, 24.0, "avc").unwrap();
        assert!((b.pixel_multiplier - 4f64.powf(0.9)).abs() < 1e-12);
        assert!((b.pixel_multiplier - 3.48).abs() < 0.01);
    }

    #[test]
    fn test_invalid_video_input() {
        let profile = ReferenceProfile::default();
        for (w, h, fps) in [
            (0, 1080, 24.0),
            (1920, 0, 24.0),
            (1920, 1080, 0.0),
            (1920, 1080, -24.0),
            (1920, 1080, f64::NAN),
            (1920, 1080, f64::INFINITY),
        ] {
            assert!(
                matches!(
                    suggest_bitrate(&profile, w, h, fps, "avc"),
                    Err(CoreError::InvalidInput(_))
                ),
                "{w}x{h}@{fps} should be rejected"
            );
        }
    }

    #[test]
    fn test_video_profile_helpers() {
        let video = VideoProfile::new(1280, 720, 30.0, "HEVC");
        let profile = ReferenceProfile::default();
        assert_eq!(
            video.suggest_bitrate(&profile).unwrap(),
            suggest_bitrate(&profile, 1280, 720, 30.0, "HEVC").unwrap()
        );
    }
}
