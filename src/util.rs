/// `round(numerator / denominator * scale)` with halves rounded up.
///
/// Returns `None` when `denominator` is zero.
pub fn scaled_round(numerator: u32, denominator: u32, scale: u32) -> Option<u32> {
    match denominator {
        0 => None,
        d => {
            let n = numerator as u64 * scale as u64;
            let d = d as u64;
            Some(((2 * n + d) / (2 * d)) as u32)
        }
    }
}

/// Completions normalised to a per-minute rate over `secs` seconds
pub fn per_minute(count: u32, secs: u32) -> u32 {
    scaled_round(count, secs, 60).unwrap_or(0)
}

/// `part` as a rounded percentage of `whole`, 0 when `whole` is 0
pub fn percent(part: u32, whole: u32) -> u32 {
    scaled_round(part, whole, 100).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_round() {
        assert_eq!(scaled_round(10, 30, 60), Some(20));
        assert_eq!(scaled_round(1, 3, 100), Some(33));
        assert_eq!(scaled_round(2, 3, 100), Some(67));
    }

    #[test]
    fn test_scaled_round_zero_denominator() {
        assert_eq!(scaled_round(5, 0, 100), None);
    }

    #[test]
    fn test_scaled_round_half_rounds_up() {
        // 1/8 * 100 = 12.5
        assert_eq!(scaled_round(1, 8, 100), Some(13));
        // 7/8 * 100 = 87.5
        assert_eq!(scaled_round(7, 8, 100), Some(88));
    }

    #[test]
    fn test_per_minute() {
        assert_eq!(per_minute(10, 30), 20);
        assert_eq!(per_minute(7, 30), 14);
        assert_eq!(per_minute(0, 30), 0);
        assert_eq!(per_minute(3, 0), 0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(10, 12), 83);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 4), 0);
        assert_eq!(percent(0, 0), 0);
    }
}
