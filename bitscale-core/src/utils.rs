//! Utility functions for formatting bitrates.

/// Formats a bitrate with decimal units (bps, Kbps, Mbps).
///
/// Values of at least 1,000,000 are shown in Mbps and values of at least
/// 1,000 in Kbps, both with two decimals; smaller values are shown as whole bps.
#[must_use]
pub fn format_bitrate(bitrate: u64) -> String {
    const KBPS: u64 = 1_000;
    const MBPS: u64 = 1_000_000;

    if bitrate >= MBPS {
        format!("{:.2} Mbps", bitrate as f64 / MBPS as f64)
    } else if bitrate >= KBPS {
        format!("{:.2} Kbps", bitrate as f64 / KBPS as f64)
    } else {
        format!("{bitrate} bps")
    }
}

/// Formats a bitrate difference as a signed percentage of `from`.
/// Returns "n/a" when `from` is 0.
#[must_use]
pub fn format_change(from: u64, to: u64) -> String {
    if from == 0 {
        return "n/a".to_string();
    }
    let pct = (to as f64 - from as f64) / from as f64 * 100.0;
    format!("{pct:+.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bitrate() {
        // Test bps
        assert_eq!(format_bitrate(0), "0 bps");
        assert_eq!(format_bitrate(999), "999 bps");

        // Test Kbps
        assert_eq!(format_bitrate(1_000), "1.00 Kbps");
        assert_eq!(format_bitrate(128_000), "128.00 Kbps");
        assert_eq!(format_bitrate(999_999), "1000.00 Kbps");

        // Test Mbps
        assert_eq!(format_bitrate(1_000_000), "1.00 Mbps");
        assert_eq!(format_bitrate(4_500_000), "4.50 Mbps");
        assert_eq!(format_bitrate(20_800_000), "20.80 Mbps");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(6_000_000, 4_500_000), "-25.0%");
        assert_eq!(format_change(4_000_000, 5_000_000), "+25.0%");
        assert_eq!(format_change(1_000, 1_000), "+0.0%");
        assert_eq!(format_change(0, 1_000), "n/a");
    }
}
