// ============================================================================
// bitscale-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The level is `info` by default and `debug` with --verbose. RUST_LOG, when
// set, takes precedence:
// - RUST_LOG=debug: scaling multipliers and loaded configuration
// - RUST_LOG=trace: everything

use log::LevelFilter;

/// Initializes env_logger on stderr so that stdout stays machine-readable.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}
