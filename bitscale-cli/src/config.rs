// bitscale-cli/src/config.rs
//
// Loads the reference profile and output settings from the process
// environment once per invocation.

use bitscale_core::codec::{encoder_family, is_mapped_encoder};
use bitscale_core::{CoreResult, OutputConfig, ReferenceProfile};
use log::{debug, warn};

/// Configuration shared by every subcommand.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub profile: ReferenceProfile,
    pub output: OutputConfig,
}

impl RuntimeConfig {
    /// Reads the environment, replacing the output encoder with
    /// `encoder_override` when one was given on the command line.
    pub fn load(encoder_override: Option<&str>) -> CoreResult<Self> {
        let profile = ReferenceProfile::from_env()?;
        let mut output = OutputConfig::from_env()?;
        if let Some(encoder) = encoder_override {
            debug!("Output encoder overridden on the command line: {encoder}");
            output.output_encoder = encoder.to_string();
        }
        if !is_mapped_encoder(&output.output_encoder) {
            warn!(
                "Encoder '{}' has no codec family mapping; assuming {}",
                output.output_encoder,
                encoder_family(&output.output_encoder)
            );
        }
        Ok(Self { profile, output })
    }
}
