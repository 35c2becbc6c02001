//! Batch evaluation of many videos against one reference profile.
//!
//! Each video is independent, so entries are evaluated with rayon and
//! collected in input order. A failing entry carries its error message and
//! does not stop the rest of the batch.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::bitrate::VideoProfile;
use crate::config::{OutputConfig, ReferenceProfile};
use crate::encoding::{EncodingParameters, derive_encoding_parameters};
use crate::error::CoreResult;

/// Outcome for one video in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub video: VideoProfile,
    /// Suggested bitrate for the video's own codec
    pub suggested_bitrate: Option<u64>,
    /// Rate-control parameters for re-encoding with the output encoder
    pub encoding: Option<EncodingParameters>,
    pub error: Option<String>,
}

impl BatchEntry {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn evaluate_one(
    profile: &ReferenceProfile,
    output: &OutputConfig,
    video: &VideoProfile,
) -> BatchEntry {
    let result = video.suggest_bitrate(profile).and_then(|suggested| {
        derive_encoding_parameters(
            profile,
            video.width,
            video.height,
            video.framerate,
            &output.output_encoder,
        )
        .map(|params| (suggested, params))
    });

    match result {
        Ok((suggested, params)) => BatchEntry {
            video: video.clone(),
            suggested_bitrate: Some(suggested),
            encoding: Some(params),
            error: None,
        },
        Err(e) => {
            warn!(
                "Skipping {}x{}@{} {}: {}",
                video.width, video.height, video.framerate, video.codec, e
            );
            BatchEntry {
                video: video.clone(),
                suggested_bitrate: None,
                encoding: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Evaluates every video in parallel, preserving input order.
pub fn evaluate_batch(
    profile: &ReferenceProfile,
    output: &OutputConfig,
    videos: &[VideoProfile],
) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = videos
        .par_iter()
        .map(|video| evaluate_one(profile, output, video))
        .collect();

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    info!(
        "Evaluated {} video(s): {} ok, {} failed",
        entries.len(),
        entries.len() - failed,
        failed
    );
    entries
}

/// Reads a JSON array of video profiles.
///
/// ```json
/// [{"width": 1920, "height": 1080, "framerate": 23.976, "codec": "AVC"}]
/// ```
pub fn load_batch_file(path: &Path) -> CoreResult<Vec<VideoProfile>> {
    let reader = BufReader::new(File::open(path)?);
    let videos: Vec<VideoProfile> = serde_json::from_reader(reader)?;
    info!("Loaded {} video(s) from {}", videos.len(), path.display());
    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_batch_preserves_order() {
        let profile = ReferenceProfile::default();
        let output = OutputConfig::default();
        let videos: Vec<VideoProfile> = (1..=64)
            .map(|i| VideoProfile::new(i * 60, i * 34, 24.0, "avc"))
            .collect();

        let entries = evaluate_batch(&profile, &output, &videos);
        assert_eq!(entries.len(), videos.len());
        for (entry, video) in entries.iter().zip(&videos) {
            assert_eq!(&entry.video, video);
            assert!(entry.is_ok());
        }
    }

    #[test]
    fn test_evaluate_batch_isolates_failures() {
        let profile = ReferenceProfile::default();
        let output = OutputConfig::default();
        let videos = vec![
            VideoProfile::new(1920, 1080, 24.0, "avc"),
            VideoProfile::new(1920, 1080, 24.0, "foobar"),
            VideoProfile::new(1920, 1080, 0.0, "avc"),
            VideoProfile::new(1920, 1080, 24.0, "hevc"),
        ];

        let entries = evaluate_batch(&profile, &output, &videos);
        assert_eq!(entries[0].suggested_bitrate, Some(6_000_000));
        assert_eq!(
            entries[0].encoding.as_ref().map(|p| p.target_bitrate),
            Some(4_500_000)
        );
        assert!(entries[1].error.as_deref().unwrap().contains("foobar"));
        assert!(entries[1].suggested_bitrate.is_none());
        assert!(!entries[2].is_ok());
        assert_eq!(entries[3].suggested_bitrate, Some(4_500_000));
    }

    #[test]
    fn test_evaluate_empty_batch() {
        let entries = evaluate_batch(&ReferenceProfile::default(), &OutputConfig::default(), &[]);
        assert!(entries.is_empty());
    }
}
