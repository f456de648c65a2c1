// Display-number helpers shared by the engine formatter and any UI caller.

pub mod number_format {
    /// Every displayed number is rounded to this many decimal places.
    pub const DISPLAY_DECIMALS: i32 = 2;
    pub const THOUSANDS_SEPARATOR: char = ',';

    pub fn round_to_places(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        let scaled = value * factor;
        // Past ~1.8e306 the scaled value overflows; anything that large is already whole
        if !scaled.is_finite() {
            return value;
        }
        let rounded = scaled.round() / factor;
        // -0.0 would otherwise render as "-0"
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Rounds to two places, then prints the value as an integer when it is whole
    /// and with exactly two decimals otherwise: `20`, `66.67`, `1234.50`.
    pub fn format_trimmed(value: f64) -> String {
        let rounded = round_to_places(value, DISPLAY_DECIMALS);
        if rounded.fract() == 0.0 {
            format!("{:.0}", rounded)
        } else {
            format!("{:.prec$}", rounded, prec = DISPLAY_DECIMALS as usize)
        }
    }

    /// Inserts the thousands separator into a run of ASCII digits: "1234567" -> "1,234,567".
    pub fn group_thousands(digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(THOUSANDS_SEPARATOR);
            }
            out.push(ch);
        }
        out
    }

    /// `format_trimmed` with the integer part grouped. Sign is kept in front.
    pub fn format_grouped(value: f64) -> String {
        let plain = format_trimmed(value);
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        match unsigned.split_once('.') {
            Some((int_part, frac_part)) => {
                format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
            }
            None => format!("{}{}", sign, group_thousands(unsigned)),
        }
    }

}
