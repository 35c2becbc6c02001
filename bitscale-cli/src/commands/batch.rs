//! Implementation of the 'batch' subcommand.

use bitscale_core::{evaluate_batch, format_bitrate, load_batch_file};
use log::info;
use serde_json::json;

use crate::cli::BatchArgs;
use crate::config::RuntimeConfig;
use crate::error::CliResult;
use crate::output::{print_heading, print_json, print_success, print_warning};

pub fn run_batch(args: &BatchArgs) -> CliResult<()> {
    let config = RuntimeConfig::load(args.encoder.as_deref())?;
    let videos = load_batch_file(&args.input)?;
    let entries = evaluate_batch(&config.profile, &config.output, &videos);

    if args.json {
        print_json(&json!(entries));
        return Ok(());
    }

    print_heading(&format!("Batch: {}", args.input.display()));
    for entry in &entries {
        let video = &entry.video;
        let label = format!(
            "{}x{} @ {} fps, {}",
            video.width, video.height, video.framerate, video.codec
        );
        match (&entry.suggested_bitrate, &entry.encoding, &entry.error) {
            (Some(suggested), Some(params), _) => print_success(&format!(
                "{label}: {} -> {} {} (max {}, buf {})",
                format_bitrate(*suggested),
                params.encoder,
                format_bitrate(params.target_bitrate),
                format_bitrate(params.maxrate),
                format_bitrate(params.bufsize)
            )),
            (_, _, Some(error)) => print_warning(&format!("{label}: {error}")),
            _ => print_warning(&format!("{label}: no result")),
        }
    }

    let ok = entries.iter().filter(|e| e.is_ok()).count();
    info!("{ok} of {} video(s) evaluated", entries.len());
    Ok(())
}
