// bitscale-core/tests/config_tests.rs

use bitscale_core::config::{
    DEFAULT_OUTPUT_ENCODER, ENV_OUTPUT_ENCODER, ENV_REFERENCE_BITRATE, ENV_REFERENCE_ENCODER,
    ENV_REFERENCE_WIDTH,
};
use bitscale_core::{CoreError, OutputConfig, ReferenceProfile, suggest_bitrate};

#[test]
fn test_lookup_profile_drives_suggestion() {
    let profile = ReferenceProfile::from_lookup(|key| match key {
        ENV_REFERENCE_BITRATE => Some("8000000".to_string()),
        ENV_REFERENCE_ENCODER => Some("hevc".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(suggest_bitrate(&profile, 1920, 1080, 24.0, "HEVC").unwrap(), 8_000_000);
    // AVC needs 1.0 / 0.75 of the HEVC bitrate
    assert_eq!(suggest_bitrate(&profile, 1920, 1080, 24.0, "AVC").unwrap(), 10_600_000);
}

#[test]
fn test_lookup_rejects_malformed_value() {
    let result = ReferenceProfile::from_lookup(|key| {
        (key == ENV_REFERENCE_WIDTH).then(|| "1920px".to_string())
    });
    match result {
        Err(CoreError::Config { key, value, .. }) => {
            assert_eq!(key, ENV_REFERENCE_WIDTH);
            assert_eq!(value, "1920px");
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_output_config_lookup() {
    let output = OutputConfig::from_lookup(|_| None).unwrap();
    assert_eq!(output.output_encoder, DEFAULT_OUTPUT_ENCODER);

    let output = OutputConfig::from_lookup(|key| {
        (key == ENV_OUTPUT_ENCODER).then(|| "libx264".to_string())
    })
    .unwrap();
    assert_eq!(output.output_encoder, "libx264");
}
