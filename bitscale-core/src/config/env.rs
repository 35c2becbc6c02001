//! Environment variable loading for configuration values.
//!
//! Keys that are not set fall back to their defaults. Keys that are set but
//! empty, not valid UTF-8, unparseable or out of range fail with
//! [`CoreError::Config`] so that bad configuration is reported at load time
//! rather than inside a calculation.

use std::env::{self, VarError};
use std::str::FromStr;

use log::debug;

use super::{OutputConfig, ReferenceProfile};
use crate::codec;
use crate::error::{CoreError, CoreResult};

pub const ENV_PIXEL_SCALING: &str = "PIXEL_SCALING";
pub const ENV_FRAMERATE_SCALING: &str = "FRAMERATE_SCALING";
pub const ENV_REFERENCE_WIDTH: &str = "REFERENCE_WIDTH";
pub const ENV_REFERENCE_HEIGHT: &str = "REFERENCE_HEIGHT";
pub const ENV_REFERENCE_FRAMERATE: &str = "REFERENCE_FRAMERATE";
pub const ENV_REFERENCE_BITRATE: &str = "REFERENCE_BITRATE";
pub const ENV_REFERENCE_ENCODER: &str = "REFERENCE_ENCODER";
pub const ENV_OUTPUT_ENCODER: &str = "OUTPUT_ENCODER";

/// Reads one process environment variable; unset is `None`.
pub(super) fn var(key: &str) -> CoreResult<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(CoreError::config(
            key,
            &raw.to_string_lossy(),
            "value is not valid UTF-8",
        )),
    }
}

/// Get a parsed value from the lookup or use the default
fn get_parsed<T, F>(lookup: &F, key: &str, default: T) -> CoreResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> CoreResult<Option<String>>,
{
    match lookup(key)? {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(CoreError::config(key, &raw, "value cannot be empty"));
            }
            trimmed
                .parse::<T>()
                .map_err(|e| CoreError::config(key, &raw, e.to_string()))
        }
        None => Ok(default),
    }
}

/// Get a positive, finite f64 from the lookup or use the default
fn get_positive_f64<F>(lookup: &F, key: &str, default: f64) -> CoreResult<f64>
where
    F: Fn(&str) -> CoreResult<Option<String>>,
{
    let value = get_parsed(lookup, key, default)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CoreError::config(key, &value.to_string(), "must be a positive number"))
    }
}

/// Get a non-zero integer from the lookup or use the default
fn get_nonzero<T, F>(lookup: &F, key: &str, default: T) -> CoreResult<T>
where
    T: FromStr + PartialEq + Default + ToString,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> CoreResult<Option<String>>,
{
    let value = get_parsed(lookup, key, default)?;
    if value == T::default() {
        Err(CoreError::config(key, &value.to_string(), "must be greater than zero"))
    } else {
        Ok(value)
    }
}

/// Get a non-empty string from the lookup or use the default
fn get_string<F>(lookup: &F, key: &str, default: &str) -> CoreResult<String>
where
    F: Fn(&str) -> CoreResult<Option<String>>,
{
    match lookup(key)? {
        Some(raw) if raw.trim().is_empty() => {
            Err(CoreError::config(key, &raw, "value cannot be empty"))
        }
        Some(raw) => Ok(raw.trim().to_string()),
        None => Ok(default.to_string()),
    }
}

pub(super) fn reference_profile_from_lookup<F>(lookup: F) -> CoreResult<ReferenceProfile>
where
    F: Fn(&str) -> CoreResult<Option<String>>,
{
    let reference_encoder =
        get_string(&lookup, ENV_REFERENCE_ENCODER, super::DEFAULT_REFERENCE_ENCODER)?;
    if codec::efficiency(&reference_encoder).is_none() {
        return Err(CoreError::config(
            ENV_REFERENCE_ENCODER,
            &reference_encoder,
            "codec is not in the efficiency table",
        ));
    }

    let profile = ReferenceProfile {
        pixel_scaling_pct: get_positive_f64(
            &lookup,
            ENV_PIXEL_SCALING,
            super::DEFAULT_PIXEL_SCALING,
        )?,
        framerate_scaling_pct: get_positive_f64(
            &lookup,
            ENV_FRAMERATE_SCALING,
            super::DEFAULT_FRAMERATE_SCALING,
        )?,
        reference_width: get_nonzero(&lookup, ENV_REFERENCE_WIDTH, super::DEFAULT_REFERENCE_WIDTH)?,
        reference_height: get_nonzero(
            &lookup,
            ENV_REFERENCE_HEIGHT,
            super::DEFAULT_REFERENCE_HEIGHT,
        )?,
        reference_framerate: get_positive_f64(
            &lookup,
            ENV_REFERENCE_FRAMERATE,
            super::DEFAULT_REFERENCE_FRAMERATE,
        )?,
        reference_bitrate: get_nonzero(
            &lookup,
            ENV_REFERENCE_BITRATE,
            super::DEFAULT_REFERENCE_BITRATE,
        )?,
        reference_encoder,
    };

    debug!("Loaded reference profile: {profile:?}");
    Ok(profile)
}

pub(super) fn output_config_from_lookup<F>(lookup: F) -> CoreResult<OutputConfig>
where
    F: Fn(&str) -> CoreResult<Option<String>>,
{
    let output_encoder = get_string(&lookup, ENV_OUTPUT_ENCODER, super::DEFAULT_OUTPUT_ENCODER)?;
    debug!("Loaded output encoder: {output_encoder}");
    Ok(OutputConfig { output_encoder })
}
