//! Number formatting for SVG attributes.

/// Formats with at most three decimals, trailing zeros trimmed.
///
/// `-0` is printed as `0` so mirrored geometry does not change the markup.
pub(crate) fn num(value: f64) -> String {
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_trims() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(3.68), "3.68");
        assert_eq!(num(14.216), "14.216");
        assert_eq!(num(8.660_254_037_844_386), "8.66");
        assert_eq!(num(1.000_4), "1");
    }

    #[test]
    fn test_num_negative_zero() {
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-0.000_2), "0");
        assert_eq!(num(-3.0), "-3");
    }
}
