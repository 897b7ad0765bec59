//! Natural aspect-ratio math for media tiles.

/// Wrapper ratio used until an asset reports its natural dimensions.
pub const FALLBACK_RATIO: f64 = 16.0 / 9.0;

/// Ratio from reported natural dimensions, or `None` when the report is
/// unusable (zero or degenerate sizes), in which case the caller keeps
/// whatever ratio it already has.
pub fn aspect_ratio(width: u32, height: u32) -> Option<f64> {
    if width == 0 || height == 0 {
        return None;
    }
    let ratio = f64::from(width) / f64::from(height);
    if ratio.is_finite() && ratio > 0.0 {
        Some(ratio)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_natural_ratio() {
        assert_eq!(aspect_ratio(1920, 1080), Some(1920.0 / 1080.0));
        assert_eq!(aspect_ratio(1080, 1920), Some(0.5625));
    }

    #[test]
    fn zero_dimensions_leave_ratio_unchanged() {
        // A load event reporting width=0 must not clobber the placeholder.
        assert_eq!(aspect_ratio(0, 1080), None);
        assert_eq!(aspect_ratio(1920, 0), None);
        assert_eq!(aspect_ratio(0, 0), None);
    }

    #[test]
    fn square_and_extreme_sizes_are_valid() {
        assert_eq!(aspect_ratio(1, 1), Some(1.0));
        assert!(aspect_ratio(u32::MAX, 1).is_some());
        assert!(aspect_ratio(1, u32::MAX).is_some());
    }
}
