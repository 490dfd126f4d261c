//! Conversion between the `M:SS,CC` display format of a swim time and a
//! number of seconds.

/// Parses a time written as `M:SS,CC` (minutes, seconds, hundredths).
///
/// Each part is read from its leading digits, so trailing characters left by
/// a half-filled entry mask are ignored (`"00:32,1_"` is 32.01 seconds).
/// Anything that cannot be read as a valid time yields `None`: an empty
/// string, a missing `:` or `,`, a part that does not start with a digit, or
/// a component that is out of range (minutes or seconds >= 60, hundredths
/// >= 100).
pub fn decode(text: &str) -> Option<f64> {
    if text.is_empty() || !text.contains(':') || !text.contains(',') {
        return None;
    }

    let mut split = text.split(':');
    let (minutes, rest) = match (split.next(), split.next(), split.next()) {
        (Some(minutes), Some(rest), None) => (minutes, rest),
        _ => return None,
    };

    let minutes = parse_part(minutes)?;
    if minutes >= 60 {
        return None;
    }

    let mut split = rest.split(',');
    let (seconds, hundredths) = match (split.next(), split.next(), split.next()) {
        (Some(seconds), Some(hundredths), None) => (seconds, hundredths),
        _ => return None,
    };

    let seconds = parse_part(seconds)?;
    let millis = parse_part(hundredths)?.checked_mul(10)?;
    if seconds >= 60 || millis >= 1000 {
        return None;
    }

    Some((minutes * 60 + seconds) as f64 + millis as f64 / 1000.0)
}

/// Formats a number of seconds as `M:S,CC`.
///
/// Minutes and seconds are not padded. The fraction is the first two
/// characters of the millisecond count as printed, so it is truncated rather
/// than rounded: `61.999` gives `1:1,99`, and a whole number of seconds gives
/// a single `0` (`60.0` gives `1:0,0`).
pub fn encode(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor();
    let remaining = seconds - minutes * 60.0;
    let whole = remaining.floor();
    let millis = 1000.0 * (remaining - whole);

    let fraction: String = millis.to_string().chars().take(2).collect();
    format!("{minutes}:{whole},{fraction}")
}

/// Reads the digits at the start of `part`, after leading whitespace.
fn parse_part(part: &str) -> Option<u32> {
    let part = part.trim_start();
    let end = part.find(|c: char| !c.is_ascii_digit()).unwrap_or(part.len());
    part[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_reads_minutes_seconds_and_hundredths() {
        assert_eq!(decode("0:05,50"), Some(5.5));
        assert_eq!(decode("1:02,25"), Some(62.25));
        assert_eq!(decode("00:00,00"), Some(0.0));
    }

    #[test]
    fn decode_rejects_missing_separators() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("abc"), None);
        assert_eq!(decode("1:05"), None);
        assert_eq!(decode("1,05"), None);
    }

    #[test]
    fn decode_rejects_out_of_range_components() {
        assert_eq!(decode("1:60,00"), None);
        assert_eq!(decode("60:00,00"), None);
        assert_eq!(decode("0:10,100"), None);
    }

    #[test]
    fn decode_rejects_extra_separators() {
        assert_eq!(decode("1:2:03,00"), None);
        assert_eq!(decode("1:03,00,00"), None);
    }

    #[test]
    fn decode_rejects_non_numeric_parts() {
        assert_eq!(decode("x:05,50"), None);
        assert_eq!(decode("0:ab,50"), None);
        assert_eq!(decode("0:05,"), None);
        assert_eq!(decode("-1:05,50"), None);
        assert_eq!(decode("  :  ,  "), None);
    }

    #[test]
    fn decode_ignores_characters_after_the_digits() {
        assert_eq!(decode("00:32,1_"), Some(32.01));
        assert_eq!(decode("0:05,50s"), Some(5.5));
        assert_eq!(decode(" 1:02 ,25"), Some(62.25));
        assert_eq!(decode("_0:05,50"), None);
    }

    #[test]
    fn decode_scales_a_single_hundredths_digit_by_ten_millis() {
        assert_eq!(decode("0:05,5"), Some(5.05));
    }

    #[test]
    fn encode_does_not_pad_minutes_or_seconds() {
        assert_eq!(encode(5.5), "0:5,50");
        assert_eq!(encode(125.25), "2:5,25");
    }

    #[test]
    fn encode_truncates_the_fraction() {
        assert_eq!(encode(61.999), "1:1,99");
        assert_eq!(encode(7.1), "0:7,99");
    }

    #[test]
    fn encode_keeps_a_tiny_residue_as_printed() {
        assert_eq!(encode(120.00000000000001), "2:0,0.");
    }

    #[test]
    fn encode_whole_seconds_keeps_a_single_zero() {
        assert_eq!(encode(60.0), "1:0,0");
        assert_eq!(encode(0.0), "0:0,0");
    }

    #[test]
    fn encode_then_decode_keeps_exact_fractions() {
        for seconds in [5.5, 61.75, 125.25, 3599.5] {
            assert_eq!(decode(&encode(seconds)), Some(seconds));
        }
    }

    proptest! {
        #[test]
        fn decode_never_panics_and_is_non_negative(text in ".*") {
            if let Some(seconds) = decode(&text) {
                prop_assert!(seconds >= 0.0);
                prop_assert!(seconds < 3600.0);
            }
        }

        #[test]
        fn decode_accepts_every_masked_value(m in 0u32..60, s in 0u32..60, c in 0u32..100) {
            let text = format!("{m:02}:{s:02},{c:02}");
            let seconds = decode(&text);
            prop_assert!(seconds.is_some());
            let expected = f64::from(m * 60 + s) + f64::from(c * 10) / 1000.0;
            prop_assert_eq!(seconds, Some(expected));
        }

        #[test]
        fn encode_keeps_minutes_and_whole_seconds(m in 0u32..100, s in 0u32..60, c in 10u32..100) {
            let seconds = f64::from(m * 60 + s) + f64::from(c) / 100.0;
            let text = encode(seconds);
            let prefix = format!("{m}:{s},");
            prop_assert!(text.starts_with(&prefix), "{} does not start with {}", text, prefix);
            prop_assert_eq!(text.len(), prefix.len() + 2);
        }
    }
}
