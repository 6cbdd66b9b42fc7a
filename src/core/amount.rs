//! Monetary amount parsing and display.
//!
//! Accepted grammar: an optional sign, digits with an optional `.` fraction,
//! and an optional exponent (`1500`, `1500.59`, `+0.5`, `1.5E+3`). Thousands
//! separators, a `,` decimal separator and surrounding whitespace are rejected.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::{FaturaError, Result};

/// Largest scale a `Decimal` can carry, and so the largest exponent magnitude.
const MAX_SCALE: u32 = 28;

/// Parse a decimal string exactly, without going through floating point.
///
/// Fails with [`FaturaError::InvalidAmount`] on anything outside the grammar
/// above, or on a value that cannot be held by a 96-bit decimal without rounding.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    // rust_decimal skips `_` digit separators
    if raw.contains('_') {
        return Err(FaturaError::InvalidAmount);
    }
    let Some((mantissa, exponent)) = raw.split_once(['e', 'E']) else {
        return Decimal::from_str_exact(raw).map_err(|_| FaturaError::InvalidAmount);
    };

    let mut value = Decimal::from_str_exact(mantissa).map_err(|_| FaturaError::InvalidAmount)?;
    let exponent: i32 = exponent.parse().map_err(|_| FaturaError::InvalidAmount)?;
    if exponent.unsigned_abs() > MAX_SCALE {
        return Err(FaturaError::InvalidAmount);
    }

    // Shifting the scale keeps the mantissa untouched, so nothing is rounded.
    let scale = value.scale();
    if exponent < 0 {
        value
            .set_scale(scale + exponent.unsigned_abs())
            .map_err(|_| FaturaError::InvalidAmount)?;
        Ok(value)
    } else if exponent.unsigned_abs() <= scale {
        value
            .set_scale(scale - exponent.unsigned_abs())
            .map_err(|_| FaturaError::InvalidAmount)?;
        Ok(value)
    } else {
        value
            .set_scale(0)
            .map_err(|_| FaturaError::InvalidAmount)?;
        let factor = Decimal::try_from_i128_with_scale(
            10i128.pow(exponent.unsigned_abs() - scale),
            0,
        )
        .map_err(|_| FaturaError::InvalidAmount)?;
        value.checked_mul(factor).ok_or(FaturaError::InvalidAmount)
    }
}

/// Validate an invoice amount: it must parse and be strictly positive.
///
/// ```
/// use fatura::core::validate_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(validate_amount(Some("1500.59")).unwrap(), dec!(1500.59));
/// assert!(validate_amount(Some("0")).is_err());
/// assert!(validate_amount(None).is_err());
/// ```
pub fn validate_amount(raw: Option<&str>) -> Result<Decimal> {
    let amount = parse_amount(raw.ok_or(FaturaError::InvalidAmount)?)?;
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(FaturaError::InvalidAmount)
    }
}

/// Format an amount as `#,##0.00`: comma grouping, dot decimal, two places,
/// half-even rounding.
pub fn format_amount(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn plain_decimals() {
        assert_eq!(parse_amount("1500"), Ok(dec!(1500)));
        assert_eq!(parse_amount("1000.59"), Ok(dec!(1000.59)));
        assert_eq!(parse_amount("+0.5"), Ok(dec!(0.5)));
        assert_eq!(parse_amount(".5"), Ok(dec!(0.5)));
        assert_eq!(parse_amount("5."), Ok(dec!(5)));
        assert_eq!(parse_amount("-5"), Ok(dec!(-5)));
    }

    #[test]
    fn scale_is_preserved() {
        assert_eq!(parse_amount("1500.50").unwrap().scale(), 2);
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(parse_amount("1E+3"), Ok(dec!(1000)));
        assert_eq!(parse_amount("1.5e3"), Ok(dec!(1500)));
        assert_eq!(parse_amount("15E-1"), Ok(dec!(1.5)));
        assert!(parse_amount("1E").is_err());
        assert!(parse_amount("1E+").is_err());
        assert!(parse_amount("E3").is_err());
        assert!(parse_amount("1E3E3").is_err());
    }

    #[test]
    fn exponent_never_rounds() {
        assert_eq!(parse_amount("1.25E+1"), Ok(dec!(12.5)));
        assert_eq!(parse_amount("125E-2"), Ok(dec!(1.25)));
        assert_eq!(parse_amount("1E-28"), Ok(dec!(0.0000000000000000000000000001)));
        assert!(parse_amount("1E-29").is_err());
        assert!(parse_amount("8E+28").is_err());
    }

    #[test]
    fn digit_separators_rejected() {
        // accepted by rust_decimal on its own
        for s in ["1_500", "1_500.00", "_1", "1_E3", "1E1_0"] {
            assert_eq!(parse_amount(s), Err(FaturaError::InvalidAmount), "{s:?}");
        }
    }

    #[test]
    fn excess_precision_is_not_rounded_away() {
        assert!(parse_amount("0.00000000000000000000000000001").is_err());
        assert!(parse_amount("1.00000000000000000000000000001").is_err());
        assert_eq!(
            parse_amount("79228162514264337593543950335"),
            Ok(Decimal::MAX)
        );
    }

    #[test]
    fn rejected_forms() {
        for s in [
            "", " ", "abc", "1,500.00", "1500,59", "1 500", " 1500", "1500 ", "1_500", "--5",
            "+", "-", ".", "1.2.3", "0x10", "NaN", "inf",
        ] {
            assert_eq!(parse_amount(s), Err(FaturaError::InvalidAmount), "{s:?}");
        }
    }

    #[test]
    fn out_of_range() {
        assert!(parse_amount("1E-40").is_err());
        assert!(parse_amount("99999999999999999999999999999999999").is_err());
        assert!(parse_amount("1E+9999").is_err());
    }

    #[test]
    fn strictly_positive() {
        assert_eq!(validate_amount(Some("1500")), Ok(dec!(1500)));
        assert_eq!(validate_amount(Some("0.01")), Ok(dec!(0.01)));
        for s in ["0", "0.00", "-0", "-5", "-0.01"] {
            assert_eq!(validate_amount(Some(s)), Err(FaturaError::InvalidAmount), "{s:?}");
        }
        assert_eq!(validate_amount(None), Err(FaturaError::InvalidAmount));
    }

    #[test]
    fn display_format() {
        assert_eq!(format_amount(&dec!(1500)), "1,500.00");
        assert_eq!(format_amount(&dec!(1000.59)), "1,000.59");
        assert_eq!(format_amount(&dec!(0.5)), "0.50");
        assert_eq!(format_amount(&dec!(999)), "999.00");
        assert_eq!(format_amount(&dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(&dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn display_rounds_half_even() {
        assert_eq!(format_amount(&dec!(0.125)), "0.12");
        assert_eq!(format_amount(&dec!(0.135)), "0.14");
        assert_eq!(format_amount(&dec!(-0.001)), "0.00");
    }
}
