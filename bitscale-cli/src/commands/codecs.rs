//! Implementation of the 'codecs' subcommand.

use bitscale_core::codec::{self, ENCODER_FAMILIES};
use serde_json::json;

use crate::cli::CodecsArgs;
use crate::error::CliResult;
use crate::output::{print_heading, print_info, print_json, print_section};

pub fn run_codecs(args: &CodecsArgs) -> CliResult<()> {
    if args.json {
        let codecs: Vec<_> = codec::known_codecs()
            .map(|(name, efficiency)| json!({ "codec": name, "efficiency": efficiency }))
            .collect();
        let encoders: Vec<_> = ENCODER_FAMILIES
            .iter()
            .map(|(encoder, family)| json!({ "encoder": encoder, "family": family }))
            .collect();
        print_json(&json!({
            "codecs": codecs,
            "encoders": encoders,
            "default_family": codec::DEFAULT_ENCODER_FAMILY,
        }));
        return Ok(());
    }

    print_heading("Codec Efficiency");
    for (name, efficiency) in codec::known_codecs() {
        print_info(name, format!("{efficiency:.2}"));
    }

    print_section("Output Encoders");
    for (encoder, family) in ENCODER_FAMILIES {
        print_info(encoder, family);
    }
    print_info("(other)", codec::DEFAULT_ENCODER_FAMILY);

    Ok(())
}
