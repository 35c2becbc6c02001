// bitscale-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Bitscale: re-encode bitrate suggestions",
    long_about = "Suggests video bitrates by scaling a reference bitrate with resolution, \
                  framerate and codec efficiency. The reference profile is read from the \
                  PIXEL_SCALING, FRAMERATE_SCALING, REFERENCE_* and OUTPUT_ENCODER \
                  environment variables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (shows the scaling multipliers)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggests a bitrate for a video of the given resolution, framerate and codec
    Suggest(SuggestArgs),
    /// Computes target/max/buffer rates for re-encoding a source with the output encoder
    Params(ParamsArgs),
    /// Lists the codec efficiency table
    Codecs(CodecsArgs),
    /// Evaluates a JSON file of video profiles
    Batch(BatchArgs),
}

/// Video dimensions and framerate shared by several subcommands.
#[derive(Args, Debug)]
pub struct VideoArgs {
    /// Width in pixels
    #[arg(value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height in pixels
    #[arg(value_name = "HEIGHT", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Frames per second (e.g. 23.976)
    #[arg(value_name = "FRAMERATE")]
    pub framerate: f64,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub video: VideoArgs,

    /// Codec name (e.g. AVC, HEVC, AV1, "MPEG-4 Visual"); case-insensitive
    #[arg(value_name = "CODEC")]
    pub codec: String,

    /// Also print the pixel, framerate and encoder multipliers
    #[arg(long)]
    pub breakdown: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ParamsArgs {
    #[command(flatten)]
    pub video: VideoArgs,

    /// Output encoder identifier (defaults to OUTPUT_ENCODER, then libx265)
    #[arg(short, long, value_name = "ENCODER")]
    pub encoder: Option<String>,

    /// Source codec, to report the change against the source's own suggestion
    #[arg(short, long, value_name = "CODEC")]
    pub source_codec: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CodecsArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON array of {"width", "height", "framerate", "codec"} objects
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output encoder identifier (defaults to OUTPUT_ENCODER, then libx265)
    #[arg(short, long, value_name = "ENCODER")]
    pub encoder: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
