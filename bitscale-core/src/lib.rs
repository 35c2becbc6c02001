//! Core library for suggesting re-encode bitrates.
//!
//! A suggested bitrate is a known-good reference bitrate scaled by power laws
//! in pixel count and framerate, and by the relative efficiency of the codec.
//! This crate provides the codec efficiency table, the scaling engine, the
//! derivation of encoder rate-control parameters, configuration loading and a
//! parallel batch evaluator.
//!
//! ## Usage Example
//!
//! ```rust
//! use bitscale_core::{ReferenceProfile, derive_encoding_parameters, format_bitrate, suggest_bitrate};
//!
//! let profile = ReferenceProfile::default();
//!
//! let suggested = suggest_bitrate(&profile, 1920, 1080, 24.0, "HEVC").unwrap();
//! assert_eq!(format_bitrate(suggested), "4.50 Mbps");
//!
//! let params = derive_encoding_parameters(&profile, 1920, 1080, 24.0, "libx265").unwrap();
//! assert_eq!(params.bufsize, 2 * params.maxrate);
//! ```

pub mod batch;
pub mod bitrate;
pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod utils;

// Re-exports for public API
pub use batch::{BatchEntry, evaluate_batch, load_batch_file};
pub use bitrate::{BITRATE_QUANTUM, BitrateBreakdown, VideoProfile, breakdown, suggest_bitrate};
pub use codec::{efficiency, encoder_family};
pub use config::{OutputConfig, ReferenceProfile, ReferenceProfileBuilder};
pub use encoding::{EncodingParameters, derive_encoding_parameters};
pub use error::{CoreError, CoreResult};
pub use utils::{format_bitrate, format_change};
