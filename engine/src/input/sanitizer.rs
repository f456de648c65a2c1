// Keystroke-level filter for the numeric input fields.

pub const DECIMAL_POINT: char = '.';

/// Keeps ASCII digits and the first decimal point, drops everything else.
///
/// `"$1,234.5.6"` becomes `"1234.56"`. The result may still be unparseable
/// (`""` or `"."`); range and syntax checks belong to validation.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch == DECIMAL_POINT && !seen_point {
            seen_point = true;
            out.push(ch);
        }
    }
    out
}

/// True when `sanitize` would return the text unchanged.
pub fn is_sanitized(text: &str) -> bool {
    let mut points = 0;
    text.chars().all(|ch| {
        if ch == DECIMAL_POINT {
            points += 1;
            points == 1
        } else {
            ch.is_ascii_digit()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_currency_and_grouping() {
        assert_eq!(sanitize("$1,234.56"), "1234.56");
    }

    #[test]
    fn test_keeps_only_first_point() {
        assert_eq!(sanitize("1.2.3"), "1.23");
        assert_eq!(sanitize(".."), ".");
    }

    #[test]
    fn test_strips_letters_signs_and_spaces() {
        assert_eq!(sanitize(" -5 USD"), "5");
        assert_eq!(sanitize("abc"), "");
    }

    #[test]
    fn test_non_ascii_digits_dropped() {
        assert_eq!(sanitize("١٢3"), "3");
    }

    #[test]
    fn test_is_sanitized() {
        assert!(is_sanitized(""));
        assert!(is_sanitized("."));
        assert!(is_sanitized("12.50"));
        assert!(!is_sanitized("1.2.3"));
        assert!(!is_sanitized("$5"));
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(raw in ".*") {
            let once = sanitize(&raw);
            let twice = sanitize(&once);
            prop_assert_eq!(&once, &twice);
            prop_assert!(is_sanitized(&once));
        }

        #[test]
        fn sanitized_output_has_at_most_one_point(raw in "[0-9.,$a-z -]{0,40}") {
            let out = sanitize(&raw);
            prop_assert!(out.chars().filter(|c| *c == DECIMAL_POINT).count() <= 1);
        }
    }
}
