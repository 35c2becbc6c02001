// ============================================================================
// bitscale-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ReferenceProfile
//
// This module implements the builder pattern for the ReferenceProfile
// structure, providing a fluent API for creating profiles in code and tests.
// Unset fields keep the documented defaults; `build` validates the result.

// ---- Internal crate imports ----
use super::ReferenceProfile;
use crate::error::CoreResult;

/// Builder for creating ReferenceProfile instances.
///
/// # Examples
///
/// ```rust
/// use bitscale_core::config::ReferenceProfileBuilder;
///
/// let profile = ReferenceProfileBuilder::new()
///     .resolution(1280, 720)
///     .framerate(30.0)
///     .bitrate(3_000_000)
///     .encoder("HEVC")
///     .build()
///     .unwrap();
///
/// assert_eq!(profile.reference_width, 1280);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceProfileBuilder {
    profile: ReferenceProfile,
}

impl ReferenceProfileBuilder {
    /// Creates a new builder holding the default profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pixel-count scaling exponent, in percent.
    pub fn pixel_scaling(mut self, pct: f64) -> Self {
        self.profile.pixel_scaling_pct = pct;
        self
    }

    /// Sets the framerate scaling exponent, in percent.
    pub fn framerate_scaling(mut self, pct: f64) -> Self {
        self.profile.framerate_scaling_pct = pct;
        self
    }

    /// Sets the reference resolution.
    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.profile.reference_width = width;
        self.profile.reference_height = height;
        self
    }

    /// Sets the reference framerate.
    pub fn framerate(mut self, fps: f64) -> Self {
        self.profile.reference_framerate = fps;
        self
    }

    /// Sets the reference bitrate in bits per second.
    pub fn bitrate(mut self, bps: u64) -> Self {
        self.profile.reference_bitrate = bps;
        self
    }

    /// Sets the reference codec family.
    pub fn encoder<S: Into<String>>(mut self, encoder: S) -> Self {
        self.profile.reference_encoder = encoder.into();
        self
    }

    /// Builds the profile, checking its invariants.
    pub fn build(self) -> CoreResult<ReferenceProfile> {
        self.profile.validate()?;
        Ok(self.profile)
    }
}
