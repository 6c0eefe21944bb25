//! Formatting utilities for human-readable output.

use thousands::Separable;

const THRESHOLD: f64 = 1000.0;
const UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with decimal (SI) units, e.g. "999 B", "1.5 MB".
///
/// Zero and non-finite values render as "? B" (size unknown).
pub fn format_bytes(bytes: f64) -> String {
    if bytes == 0.0 || !bytes.is_finite() {
        return "? B".to_string();
    }

    // Fractional values just under a kilobyte round up into the unit path.
    let rounded = bytes.round();
    if rounded.abs() < THRESHOLD {
        return format!("{} B", rounded as i64);
    }

    let mut value = bytes;
    let mut unit = 0;
    value /= THRESHOLD;
    while value.abs() >= THRESHOLD && unit < UNITS.len() - 1 {
        value /= THRESHOLD;
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

/// Integer convenience wrapper around [`format_bytes`].
pub fn human_bytes(bytes: u64) -> String {
    format_bytes(bytes as f64)
}

/// Format a count with thousands separators (e.g., "12,345").
pub fn format_count(count: u64) -> String {
    count.separate_with_commas()
}

/// Format a millisecond duration with the given number of decimals.
pub fn format_millis(ms: f64, decimals: usize) -> String {
    format!("{:.*}ms", decimals, ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_zero_is_unknown() {
        assert_eq!(format_bytes(0.0), "? B");
        assert_eq!(human_bytes(0), "? B");
        assert_eq!(format_bytes(f64::NAN), "? B");
    }

    #[test]
    fn test_format_bytes_bytes() {
        assert_eq!(human_bytes(1), "1 B");
        assert_eq!(human_bytes(999), "999 B");
        assert_eq!(format_bytes(-12.0), "-12 B");
    }

    #[test]
    fn test_format_bytes_fractional_near_kilobyte() {
        assert_eq!(format_bytes(999.4), "999 B");
        assert_eq!(format_bytes(999.6), "1.0 kB");
        assert_eq!(format_bytes(-999.6), "-1.0 kB");
        assert_eq!(format_bytes(12.5), "13 B");
    }

    #[test]
    fn test_format_bytes_kilobytes() {
        assert_eq!(human_bytes(1000), "1.0 kB");
        assert_eq!(human_bytes(1024), "1.0 kB");
        assert_eq!(human_bytes(999_000), "999.0 kB");
    }

    #[test]
    fn test_format_bytes_larger_units() {
        assert_eq!(human_bytes(1_500_000), "1.5 MB");
        assert_eq!(human_bytes(45_600_000_000), "45.6 GB");
        assert_eq!(human_bytes(2_000_000_000_000), "2.0 TB");
        assert_eq!(human_bytes(u64::MAX), "18.4 EB");
    }

    #[test]
    fn test_format_bytes_unit_list_exhausted() {
        assert_eq!(format_bytes(5e27), "5000.0 YB");
    }

    #[test]
    fn test_format_bytes_negative_magnitude() {
        assert_eq!(format_bytes(-2_500_000.0), "-2.5 MB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(12.0, 0), "12ms");
        assert_eq!(format_millis(3.14159, 2), "3.14ms");
    }
}
