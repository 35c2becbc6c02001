//! Encoder rate-control parameters for a re-encode job.
//!
//! The target bitrate is the suggestion for the SOURCE resolution and
//! framerate with the output encoder's codec family, so only codec
//! efficiency changes between source and output.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bitrate::suggest_bitrate;
use crate::codec;
use crate::config::ReferenceProfile;
use crate::error::{CoreError, CoreResult};

/// Peak bitrate allowance over the target.
pub const MAXRATE_FACTOR: f64 = 1.15;

/// Rate-control buffer size, in multiples of the maxrate.
pub const BUFSIZE_FACTOR: u64 = 2;

/// Rate-control settings for one encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingParameters {
    /// Average bitrate, bps
    pub target_bitrate: u64,
    /// Peak bitrate, bps
    pub maxrate: u64,
    /// Rate-control buffer, bits
    pub bufsize: u64,
    /// Concrete encoder identifier as requested
    pub encoder: String,
}

impl EncodingParameters {
    /// Derives maxrate and bufsize from a target bitrate.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidInput` when the maxrate or bufsize does not fit in
    /// a `u64`.
    pub fn from_target<S: Into<String>>(target_bitrate: u64, encoder: S) -> CoreResult<Self> {
        let overflow = || {
            CoreError::InvalidInput(format!(
                "rate-control values for a {target_bitrate} bps target overflow"
            ))
        };

        let maxrate = (target_bitrate as f64 * MAXRATE_FACTOR).floor();
        if maxrate >= u64::MAX as f64 {
            return Err(overflow());
        }
        let maxrate = maxrate as u64;
        let bufsize = maxrate.checked_mul(BUFSIZE_FACTOR).ok_or_else(overflow)?;

        Ok(Self {
            target_bitrate,
            maxrate,
            bufsize,
            encoder: encoder.into(),
        })
    }

    /// Video rate-control arguments in ffmpeg syntax.
    ///
    /// ```
    /// use bitscale_core::encoding::EncodingParameters;
    ///
    /// let params = EncodingParameters::from_target(2_000_000, "libx265").unwrap();
    /// assert_eq!(
    ///     params.ffmpeg_args(),
    ///     ["-c:v", "libx265", "-b:v", "2000000", "-maxrate", "2300000", "-bufsize", "4600000"]
    /// );
    /// ```
    #[must_use]
    pub fn ffmpeg_args(&self) -> Vec<String> {
        vec![
            "-c:v".to_string(),
            self.encoder.clone(),
            "-b:v".to_string(),
            self.target_bitrate.to_string(),
            "-maxrate".to_string(),
            self.maxrate.to_string(),
            "-bufsize".to_string(),
            self.bufsize.to_string(),
        ]
    }
}

/// Computes the rate-control parameters for re-encoding a source of the
/// given resolution and framerate with `output_encoder`.
///
/// The encoder identifier is mapped to its codec family for the efficiency
/// lookup (unmapped encoders count as HEVC); the returned `encoder` field is
/// `output_encoder` unchanged. Callers that want to report an unmapped
/// encoder should check [`codec::is_mapped_encoder`] once up front.
pub fn derive_encoding_parameters(
    profile: &ReferenceProfile,
    source_width: u32,
    source_height: u32,
    source_framerate: f64,
    output_encoder: &str,
) -> CoreResult<EncodingParameters> {
    let family = codec::encoder_family(output_encoder);
    if !codec::is_mapped_encoder(output_encoder) {
        debug!("Encoder '{output_encoder}' has no codec family mapping; assuming {family}");
    }

    let target_bitrate =
        suggest_bitrate(profile, source_width, source_height, source_framerate, family)?;
    let params = EncodingParameters::from_target(target_bitrate, output_encoder)?;

    debug!(
        "Encoding parameters for {source_width}x{source_height}@{source_framerate} \
         with {output_encoder} ({family}): {params:?}"
    );
    Ok(params)
}
