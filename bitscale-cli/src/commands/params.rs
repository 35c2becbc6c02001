//! Implementation of the 'params' subcommand.
//!
//! Derives the rate-control parameters for re-encoding a source at its own
//! resolution and framerate with the configured output encoder.

use bitscale_core::{
    derive_encoding_parameters, encoder_family, format_bitrate, format_change, suggest_bitrate,
};
use serde_json::json;

use crate::cli::ParamsArgs;
use crate::config::RuntimeConfig;
use crate::error::CliResult;
use crate::output::{print_heading, print_info, print_json};

pub fn run_params(args: &ParamsArgs) -> CliResult<()> {
    let config = RuntimeConfig::load(args.encoder.as_deref())?;
    let encoder = config.output.output_encoder.as_str();
    let (width, height, framerate) = (args.video.width, args.video.height, args.video.framerate);

    let params = derive_encoding_parameters(&config.profile, width, height, framerate, encoder)?;

    let source_bitrate = args
        .source_codec
        .as_deref()
        .map(|codec| suggest_bitrate(&config.profile, width, height, framerate, codec))
        .transpose()?;

    if args.json {
        let mut value = json!(params);
        value["family"] = json!(encoder_family(encoder));
        if let Some(source) = source_bitrate {
            value["source_bitrate"] = json!(source);
        }
        print_json(&value);
        return Ok(());
    }

    print_heading("Encoding Parameters");
    print_info("Source", format!("{width}x{height} @ {framerate} fps"));
    print_info(
        "Encoder",
        format!("{} ({})", params.encoder, encoder_family(encoder)),
    );
    if let Some(source) = source_bitrate {
        print_info("Source suggestion", format_bitrate(source));
    }
    print_info("Target bitrate", format_bitrate(params.target_bitrate));
    if let Some(source) = source_bitrate {
        print_info("Change", format_change(source, params.target_bitrate));
    }
    print_info("Max rate", format_bitrate(params.maxrate));
    print_info("Buffer size", format_bitrate(params.bufsize));
    print_info("ffmpeg", params.ffmpeg_args().join(" "));

    Ok(())
}
