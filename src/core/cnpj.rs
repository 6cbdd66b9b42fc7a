//! CNPJ (Cadastro Nacional da Pessoa Jurídica) checksum validation.
//!
//! A CNPJ has 14 digits: a 12-digit base followed by two mod-11 check digits.
//! Each check digit is computed over all digits before it, walking right to
//! left with weights 2, 3, …, 9, 2, 3, … and mapping the remainder
//! `r = sum % 11` to `0` when `r < 2`, else `11 - r`.

use super::error::{FaturaError, Result};

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

const BASE_LEN: usize = 12;

/// Weighted mod-11 check digit over `digits`.
fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (2 + (i as u32 % 8)))
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

fn to_digits(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Compute both check digits for a 12-digit CNPJ base.
///
/// Returns `None` if `base` is not exactly 12 ASCII digits.
///
/// ```
/// use fatura::core::cnpj_check_digits;
///
/// assert_eq!(cnpj_check_digits("711129170001"), Some([2, 6]));
/// assert_eq!(cnpj_check_digits("71112917000"), None);
/// ```
pub fn cnpj_check_digits(base: &str) -> Option<[u8; 2]> {
    if base.len() != BASE_LEN {
        return None;
    }
    let mut digits = to_digits(base)?;
    let first = check_digit(&digits);
    digits.push(first);
    let second = check_digit(&digits);
    Some([first, second])
}

/// Check whether `cnpj` is a valid, unformatted 14-digit CNPJ.
///
/// Repeated-digit sequences such as `"00000000000000"` pass the arithmetic
/// but are rejected.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    if cnpj.len() != CNPJ_LEN {
        return false;
    }
    let Some(digits) = to_digits(cnpj) else {
        return false;
    };
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    let base = &cnpj[..BASE_LEN];
    match cnpj_check_digits(base) {
        Some([first, second]) => digits[12] == first && digits[13] == second,
        None => false,
    }
}

/// Validate a CNPJ, returning it unchanged on success.
pub fn validate_cnpj(cnpj: &str) -> Result<&str> {
    if is_valid_cnpj(cnpj) {
        Ok(cnpj)
    } else {
        Err(FaturaError::InvalidTaxId)
    }
}

/// Render a valid CNPJ in its usual display form, `XX.XXX.XXX/XXXX-XX`.
///
/// Returns `None` when `cnpj` does not pass [`is_valid_cnpj`].
pub fn format_cnpj(cnpj: &str) -> Option<String> {
    if !is_valid_cnpj(cnpj) {
        return None;
    }
    Some(format!(
        "{}.{}.{}/{}-{}",
        &cnpj[0..2],
        &cnpj[2..5],
        &cnpj[5..8],
        &cnpj[8..12],
        &cnpj[12..14]
    ))
}

/// Strip the display punctuation (`.`, `/`, `-`) from a formatted CNPJ.
///
/// The result still has to pass [`is_valid_cnpj`]; this only undoes
/// [`format_cnpj`].
pub fn strip_cnpj_punctuation(formatted: &str) -> String {
    formatted
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cnpjs() {
        for cnpj in ["71112917000126", "11222333000181"] {
            assert!(is_valid_cnpj(cnpj), "{cnpj} should be valid");
        }
    }

    #[test]
    fn wrong_first_check_digit() {
        assert!(!is_valid_cnpj("71112917000136"));
    }

    #[test]
    fn wrong_second_check_digit() {
        assert!(!is_valid_cnpj("71112917000123"));
        assert!(!is_valid_cnpj("71112917000127"));
    }

    #[test]
    fn wrong_length() {
        assert!(!is_valid_cnpj("7111291700012"));
        assert!(!is_valid_cnpj("711129170001260"));
        assert!(!is_valid_cnpj(""));
    }

    #[test]
    fn repeated_digits_rejected() {
        for d in 0..=9 {
            let cnpj = d.to_string().repeat(CNPJ_LEN);
            assert!(!is_valid_cnpj(&cnpj), "{cnpj} should be rejected");
        }
    }

    #[test]
    fn non_digits_rejected() {
        assert!(!is_valid_cnpj("7111291700012a"));
        assert!(!is_valid_cnpj("71.112.917/0001-26"));
        // multi-byte char keeps byte length at 14
        assert!(!is_valid_cnpj("711129170001é"));
    }

    #[test]
    fn remainder_below_two_maps_to_zero() {
        // first check digit: sum 11, remainder 0
        assert_eq!(cnpj_check_digits("000000000031"), Some([0, 7]));
        assert!(is_valid_cnpj("00000000003107"));
        // second check digit: remainder 10 → 1
        assert!(is_valid_cnpj("11444777000161"));
        assert!(is_valid_cnpj("00000000000191"));
    }

    #[test]
    fn check_digits_for_base() {
        assert_eq!(cnpj_check_digits("112223330001"), Some([8, 1]));
        assert_eq!(cnpj_check_digits("11222333000a"), None);
    }

    #[test]
    fn validate_returns_input() {
        assert_eq!(validate_cnpj("71112917000126"), Ok("71112917000126"));
        assert_eq!(validate_cnpj("123"), Err(FaturaError::InvalidTaxId));
    }

    #[test]
    fn format_and_strip() {
        let formatted = format_cnpj("71112917000126").unwrap();
        assert_eq!(formatted, "71.112.917/0001-26");
        assert_eq!(strip_cnpj_punctuation(&formatted), "71112917000126");
        assert_eq!(format_cnpj("71112917000127"), None);
    }
}
