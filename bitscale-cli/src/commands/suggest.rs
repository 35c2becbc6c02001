//! Implementation of the 'suggest' subcommand.

use bitscale_core::{VideoProfile, format_bitrate};
use log::info;
use serde_json::json;

use crate::cli::SuggestArgs;
use crate::config::RuntimeConfig;
use crate::error::CliResult;
use crate::output::{print_heading, print_info, print_json, print_section};

pub fn run_suggest(args: &SuggestArgs) -> CliResult<()> {
    let config = RuntimeConfig::load(None)?;
    let video = VideoProfile::new(
        args.video.width,
        args.video.height,
        args.video.framerate,
        args.codec.as_str(),
    );

    let breakdown = video.breakdown(&config.profile)?;
    info!(
        "Suggested {} for {}x{}@{} {}",
        format_bitrate(breakdown.suggested_bitrate),
        video.width,
        video.height,
        video.framerate,
        video.codec
    );

    if args.json {
        let mut value = json!({
            "video": video,
            "suggested_bitrate": breakdown.suggested_bitrate,
            "formatted": format_bitrate(breakdown.suggested_bitrate),
        });
        if args.breakdown {
            value["breakdown"] = json!(breakdown);
        }
        print_json(&value);
        return Ok(());
    }

    print_heading("Bitrate Suggestion");
    print_info(
        "Video",
        format!(
            "{}x{} @ {} fps, {}",
            video.width, video.height, video.framerate, video.codec
        ),
    );
    print_info(
        "Reference",
        format!(
            "{}x{} @ {} fps, {}, {}",
            config.profile.reference_width,
            config.profile.reference_height,
            config.profile.reference_framerate,
            config.profile.reference_encoder,
            format_bitrate(config.profile.reference_bitrate)
        ),
    );
    print_info("Suggested bitrate", format_bitrate(breakdown.suggested_bitrate));

    if args.breakdown {
        print_section("Multipliers");
        print_info("Pixel", format!("{:.4}", breakdown.pixel_multiplier));
        print_info("Framerate", format!("{:.4}", breakdown.framerate_multiplier));
        print_info("Encoder", format!("{:.4}", breakdown.encoder_multiplier));
        print_info("Raw bitrate", format!("{:.0} bps", breakdown.raw_bitrate));
    }

    Ok(())
}
