//! Codec efficiency table and encoder family mapping.
//!
//! Efficiency coefficients express how many bits a codec needs, relative to
//! AVC/H.264, for equivalent perceived quality. Lower is more efficient.
//! Codec names are matched case-insensitively against the names that media
//! probes commonly report (e.g. "AVC", "HEVC", "MPEG-4 Visual").

/// Baseline family against which all coefficients are expressed.
pub const BASELINE_FAMILY: &str = "AVC";

/// Family used for output encoders that have no entry in [`ENCODER_FAMILIES`].
pub const DEFAULT_ENCODER_FAMILY: &str = "HEVC";

/// Known codec names (lowercase) and their efficiency coefficients.
pub const CODEC_EFFICIENCIES: &[(&str, f64)] = &[
    // Editing intermediates
    ("prores", 3.0),
    ("dnxhd", 3.0),
    ("dnxhr", 3.0),
    // Legacy
    ("mpeg-1", 2.0),
    ("mpeg-2", 1.8),
    ("vc-1", 1.5),
    ("wmv", 1.6),
    ("realvideo", 2.0),
    // MPEG-4 Part 2
    ("mpeg-4 visual", 1.3),
    ("iso/asp", 1.3),
    ("xvid", 1.3),
    ("divx", 1.3),
    ("dx50", 1.3),
    ("mp4v", 1.3),
    // AVC / H.264
    ("avc", 1.0),
    ("h.264", 1.0),
    ("iso/avc", 1.0),
    // HEVC / H.265
    ("hevc", 0.75),
    ("h.265", 0.75),
    ("iso/hevc", 0.75),
    // Google
    ("vp8", 1.2),
    ("vp9", 0.7),
    // AV1
    ("av1", 0.6),
];

/// Concrete output encoder identifiers and the codec family they produce.
pub const ENCODER_FAMILIES: &[(&str, &str)] = &[
    ("libx264", "AVC"),
    ("libx265", "HEVC"),
    ("libaom-av1", "AV1"),
    ("libvpx-vp9", "VP9"),
];

/// Looks up the efficiency coefficient for a codec name.
///
/// Returns `None` when the codec is not in [`CODEC_EFFICIENCIES`]; callers
/// must not substitute a zero, which would silently collapse the bitrate.
///
/// # Examples
///
/// ```
/// use bitscale_core::codec::efficiency;
///
/// assert_eq!(efficiency("HEVC"), Some(0.75));
/// assert_eq!(efficiency("foobar"), None);
/// ```
#[must_use]
pub fn efficiency(codec: &str) -> Option<f64> {
    let key = codec.trim().to_lowercase();
    CODEC_EFFICIENCIES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, coefficient)| *coefficient)
}

/// Maps a concrete encoder identifier (e.g. `libx265`) to the codec family
/// name understood by [`efficiency`].
///
/// Unmapped encoders fall back to [`DEFAULT_ENCODER_FAMILY`].
#[must_use]
pub fn encoder_family(encoder: &str) -> &'static str {
    ENCODER_FAMILIES
        .iter()
        .find(|(name, _)| *name == encoder)
        .map_or(DEFAULT_ENCODER_FAMILY, |(_, family)| *family)
}

/// Returns true when `encoder` has an explicit family mapping.
#[must_use]
pub fn is_mapped_encoder(encoder: &str) -> bool {
    ENCODER_FAMILIES.iter().any(|(name, _)| *name == encoder)
}

/// All known codec names with their coefficients, in table order.
pub fn known_codecs() -> impl Iterator<Item = (&'static str, f64)> {
    CODEC_EFFICIENCIES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_is_case_insensitive() {
        assert_eq!(efficiency("avc"), Some(1.0));
        assert_eq!(efficiency("AVC"), Some(1.0));
        assert_eq!(efficiency("H.264"), Some(1.0));
        assert_eq!(efficiency("Mpeg-4 Visual"), Some(1.3));
        assert_eq!(efficiency("  hevc "), Some(0.75));
    }

    #[test]
    fn test_efficiency_families() {
        assert_eq!(efficiency("prores"), Some(3.0));
        assert_eq!(efficiency("mpeg-2"), Some(1.8));
        assert_eq!(efficiency("vc-1"), Some(1.5));
        assert_eq!(efficiency("xvid"), Some(1.3));
        assert_eq!(efficiency("iso/hevc"), Some(0.75));
        assert_eq!(efficiency("vp8"), Some(1.2));
        assert_eq!(efficiency("vp9"), Some(0.7));
        assert_eq!(efficiency("av1"), Some(0.6));
    }

    #[test]
    fn test_efficiency_unknown() {
        assert_eq!(efficiency("foobar"), None);
        assert_eq!(efficiency(""), None);
        // Encoder identifiers are not codec names
        assert_eq!(efficiency("libx265"), None);
    }

    #[test]
    fn test_encoder_family() {
        assert_eq!(encoder_family("libx264"), "AVC");
        assert_eq!(encoder_family("libx265"), "HEVC");
        assert_eq!(encoder_family("libaom-av1"), "AV1");
        assert_eq!(encoder_family("libvpx-vp9"), "VP9");
        assert_eq!(encoder_family("libsvtav1"), DEFAULT_ENCODER_FAMILY);
        assert_eq!(encoder_family("LIBX264"), DEFAULT_ENCODER_FAMILY);
        assert!(is_mapped_encoder("libx264"));
        assert!(!is_mapped_encoder("hevc_nvenc"));
    }

    #[test]
    fn test_every_family_has_an_efficiency() {
        for (_, family) in ENCODER_FAMILIES {
            assert!(efficiency(family).is_some(), "{family} missing");
        }
        assert!(efficiency(DEFAULT_ENCODER_FAMILY).is_some());
        assert!(efficiency(BASELINE_FAMILY).is_some());
    }

    #[test]
    fn test_known_codecs_positive() {
        assert_eq!(known_codecs().count(), CODEC_EFFICIENCIES.len());
        assert!(known_codecs().all(|(_, e)| e > 0.0));
    }
}
