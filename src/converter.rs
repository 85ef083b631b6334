use thiserror::Error;

/// Upper bound on emitted fractional bits, so values like decimal 0.1 terminate.
pub const FRACTION_BITS: usize = 10;

const SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("'{input}' is not a valid non-negative number")]
    InvalidFormat { input: String },
    #[error("'{digit}' at position {position} is not a binary digit")]
    InvalidBinaryDigit { digit: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    InvalidFormat,
    InvalidBinaryDigit,
}

impl ConversionError {
    fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat { input: input.to_string() }
    }

    pub const fn kind(&self) -> ConversionErrorKind {
        match self {
            Self::InvalidFormat { .. } => ConversionErrorKind::InvalidFormat,
            Self::InvalidBinaryDigit { .. } => ConversionErrorKind::InvalidBinaryDigit,
        }
    }
}

/// Converts a non-negative decimal literal such as `"10"` or `"2.5"` into binary.
///
/// The integer part is written without leading zeros. The fractional part is
/// produced by repeated doubling and is cut off after [`FRACTION_BITS`] bits.
pub fn decimal_to_binary(input: &str) -> Result<String, ConversionError> {
    let input = input.trim();
    let (whole, fraction) =
        split_number(input).ok_or_else(|| ConversionError::invalid_format(input))?;

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !fraction.is_none_or(all_digits) {
        return Err(ConversionError::invalid_format(input));
    }

    let whole: u128 = whole.parse().map_err(|_| ConversionError::invalid_format(input))?;
    let mut binary = format!("{whole:b}");

    if let Some(fraction) = fraction {
        let value = if fraction.is_empty() {
            0.0
        } else {
            format!("0.{fraction}")
                .parse::<f64>()
                .map_err(|_| ConversionError::invalid_format(input))?
        };
        binary.push(SEPARATOR);
        binary.push_str(&fraction_to_bits(value));
    }

    Ok(binary)
}

/// Converts a binary literal such as `"1010"` or `"10.1"` into decimal.
///
/// Fractional digits are summed as native floating point without rounding.
pub fn binary_to_decimal(input: &str) -> Result<String, ConversionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConversionError::invalid_format(input));
    }

    let mut seen_separator = false;
    for (position, digit) in input.chars().enumerate() {
        match digit {
            '0' | '1' => {}
            SEPARATOR if !seen_separator => seen_separator = true,
            _ => return Err(ConversionError::InvalidBinaryDigit { digit, position }),
        }
    }

    let (whole, fraction) =
        split_number(input).ok_or_else(|| ConversionError::invalid_format(input))?;
    let whole = u128::from_str_radix(whole, 2)
        .map_err(|_| ConversionError::invalid_format(input))?;

    let Some(fraction) = fraction else {
        return Ok(whole.to_string());
    };

    let mut sum = 0.0;
    let mut weight = 0.5;
    for digit in fraction.chars() {
        if digit == '1' {
            sum += weight;
        }
        weight /= 2.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let value = whole as f64 + sum;
    Ok(format_fractional(value))
}

// Splits on the separator; None when the integer part is empty or there is
// more than one separator.
fn split_number(input: &str) -> Option<(&str, Option<&str>)> {
    let mut parts = input.split(SEPARATOR);
    let whole = parts.next()?;
    let fraction = parts.next();
    if whole.is_empty() || parts.next().is_some() {
        return None;
    }
    Some((whole, fraction))
}

fn fraction_to_bits(mut fraction: f64) -> String {
    let mut bits = String::with_capacity(FRACTION_BITS);
    for _ in 0..FRACTION_BITS {
        let doubled = fraction * 2.0;
        if doubled < 1.0 {
            bits.push('0');
            fraction = doubled;
        } else if doubled > 1.0 {
            bits.push('1');
            fraction = doubled - 1.0;
        } else {
            // exactly one: nothing left to expand
            bits.push('1');
            break;
        }
    }
    bits
}

fn format_fractional(value: f64) -> String {
    let text = value.to_string();
    if text.contains(SEPARATOR) { text } else { format!("{text}.0") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn decimal_integers_to_binary() {
        assert_eq!(decimal_to_binary("10").unwrap(), "1010");
        assert_eq!(decimal_to_binary("0").unwrap(), "0");
        assert_eq!(decimal_to_binary("255").unwrap(), "11111111");
        assert_eq!(decimal_to_binary("007").unwrap(), "111");
        assert_eq!(decimal_to_binary("  42 ").unwrap(), "101010");
    }

    #[test]
    fn binary_integers_to_decimal() {
        assert_eq!(binary_to_decimal("1010").unwrap(), "10");
        assert_eq!(binary_to_decimal("0").unwrap(), "0");
        assert_eq!(binary_to_decimal("000101").unwrap(), "5");
    }

    #[test]
    fn terminating_fraction_stops_early() {
        assert_eq!(decimal_to_binary("2.5").unwrap(), "10.1");
        assert_eq!(decimal_to_binary("0.75").unwrap(), "0.11");
        assert_eq!(decimal_to_binary("5.125").unwrap(), "101.001");
    }

    #[test]
    fn non_terminating_fraction_is_capped() {
        let binary = decimal_to_binary("0.1").unwrap();
        let (whole, fraction) = binary.split_once('.').unwrap();
        assert_eq!(whole, "0");
        assert_eq!(fraction.len(), FRACTION_BITS);
        assert!(fraction.starts_with("000110011"), "got {fraction}");
    }

    #[test]
    fn zero_fraction_emits_all_zero_bits() {
        assert_eq!(decimal_to_binary("2.0").unwrap(), "10.0000000000");
        assert_eq!(decimal_to_binary("3.").unwrap(), "11.0000000000");
    }

    #[test]
    fn binary_fractions_to_decimal() {
        assert_eq!(binary_to_decimal("10.1").unwrap(), "2.5");
        assert_eq!(binary_to_decimal("0.01").unwrap(), "0.25");
        assert_eq!(binary_to_decimal("1.101").unwrap(), "1.625");
        assert_eq!(binary_to_decimal("1.0").unwrap(), "1.0");
    }

    #[test]
    fn malformed_decimal_is_invalid_format() {
        for input in ["abc", "", "   ", "1.2.3", ".5", "-5", "+5", "1e3", "12a", "1_000"] {
            let err = decimal_to_binary(input).unwrap_err();
            assert_eq!(err.kind(), ConversionErrorKind::InvalidFormat, "input {input:?}");
        }
    }

    #[test]
    fn decimal_beyond_u128_is_invalid_format() {
        let too_big = format!("{}0", u128::MAX);
        assert_eq!(
            decimal_to_binary(&too_big).unwrap_err().kind(),
            ConversionErrorKind::InvalidFormat
        );
    }

    #[test]
    fn non_binary_character_is_rejected() {
        assert_eq!(
            binary_to_decimal("12").unwrap_err(),
            ConversionError::InvalidBinaryDigit { digit: '2', position: 1 }
        );
        assert_eq!(
            binary_to_decimal("1.0.1").unwrap_err(),
            ConversionError::InvalidBinaryDigit { digit: '.', position: 3 }
        );
        assert_eq!(
            binary_to_decimal("10 1").unwrap_err().kind(),
            ConversionErrorKind::InvalidBinaryDigit
        );
    }

    #[test]
    fn structurally_empty_binary_is_invalid_format() {
        assert_eq!(binary_to_decimal("").unwrap_err().kind(), ConversionErrorKind::InvalidFormat);
        assert_eq!(binary_to_decimal(".1").unwrap_err().kind(), ConversionErrorKind::InvalidFormat);
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            decimal_to_binary("abc").unwrap_err().to_string(),
            "'abc' is not a valid non-negative number"
        );
        assert_eq!(
            binary_to_decimal("102").unwrap_err().to_string(),
            "'2' at position 2 is not a binary digit"
        );
    }

    #[test]
    fn integers_survive_decimal_binary_decimal() {
        let mut rng = rand::rng();
        for n in [0u64, 1, 2, 1023, 1024, u64::MAX].into_iter().chain((0..500).map(|_| rng.random())) {
            let decimal = n.to_string();
            let binary = decimal_to_binary(&decimal).unwrap();
            assert_eq!(binary_to_decimal(&binary).unwrap(), decimal);
        }
    }

    #[test]
    fn binary_strings_survive_binary_decimal_binary() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let len = rng.random_range(1..=96);
            let binary: String =
                (0..len).map(|_| if rng.random_bool(0.5) { '1' } else { '0' }).collect();
            let expected = match binary.trim_start_matches('0') {
                "" => "0",
                stripped => stripped,
            };
            let decimal = binary_to_decimal(&binary).unwrap();
            assert_eq!(decimal_to_binary(&decimal).unwrap(), expected);
        }
    }
}
