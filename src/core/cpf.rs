//! CPF checksum validation
//!
//! A CPF (Cadastro de Pessoas Físicas) is an 11-digit identifier whose last
//! two digits are check digits computed from the preceding ones with a
//! modulo-11 weighted sum.
//!
//! Everything here is pure: no I/O, no shared state, no allocation beyond the
//! normalized digit buffer.
//!
//! # Example
//!
//! ```rust
//! use cpf::core::cpf::{Cpf, is_valid_cpf};
//!
//! assert!(is_valid_cpf("529.982.247-25"));
//! assert!(!is_valid_cpf("123.456.789-00"));
//!
//! let cpf: Cpf = "52998224725".parse().unwrap();
//! assert_eq!(cpf.to_string(), "529.982.247-25");
//! ```

use crate::core::error::CpfError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of digits in a CPF, check digits included
pub const CPF_LENGTH: usize = 11;

/// Returns `true` when `input` encodes a CPF with both check digits correct
///
/// Non-digit characters are ignored, so masked (`529.982.247-25`) and bare
/// (`52998224725`) forms give the same answer.
pub fn is_valid_cpf(input: &str) -> bool {
    Cpf::parse(input).is_ok()
}

/// Strip every character that is not an ASCII decimal digit
pub fn normalize(input: &str) -> String {
    static NON_DIGITS: OnceLock<Regex> = OnceLock::new();
    let regex = NON_DIGITS.get_or_init(|| Regex::new(r"[^0-9]+").unwrap());
    regex.replace_all(input, "").into_owned()
}

/// Compute the check digit that follows `digits`
///
/// Weights run from `digits.len() + 1` down to 2. A result of 10 or more
/// collapses to 0.
pub fn check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top_weight - i as u32))
        .sum();

    let verifier = 11 - (sum % 11);
    if verifier >= 10 { 0 } else { verifier as u8 }
}

/// A CPF whose length and check digits have been verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf {
    digits: [u8; CPF_LENGTH],
}

impl Cpf {
    /// Parse and validate a candidate string
    pub fn parse(input: &str) -> Result<Self, CpfError> {
        let normalized = normalize(input);
        if normalized.len() != CPF_LENGTH {
            return Err(CpfError::InvalidLength {
                length: normalized.len(),
            });
        }

        let mut digits = [0u8; CPF_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(normalized.bytes()) {
            *slot = byte - b'0';
        }

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(CpfError::RepeatedDigits);
        }

        let first = check_digit(&digits[..9]);
        if first != digits[9] {
            return Err(CpfError::FirstCheckDigitMismatch {
                expected: first,
                found: digits[9],
            });
        }

        let second = check_digit(&digits[..10]);
        if second != digits[10] {
            return Err(CpfError::SecondCheckDigitMismatch {
                expected: second,
                found: digits[10],
            });
        }

        Ok(Self { digits })
    }

    /// The 11 digits without any mask
    pub fn digits(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.digits();
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === normalize() ===

    #[test]
    fn test_normalize_strips_mask() {
        assert_eq!(normalize("529.982.247-25"), "52998224725");
    }

    #[test]
    fn test_normalize_strips_letters_and_whitespace() {
        assert_eq!(normalize(" cpf: 529 982 247 25\n"), "52998224725");
    }

    #[test]
    fn test_normalize_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not 0-9
        assert_eq!(normalize("١٢٣45"), "45");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("...---"), "");
    }

    // === check_digit() ===

    #[test]
    fn test_check_digit_first_pass() {
        assert_eq!(check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), 2);
    }

    #[test]
    fn test_check_digit_second_pass() {
        assert_eq!(check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7, 2]), 5);
    }

    #[test]
    fn test_check_digit_ten_collapses_to_zero() {
        // sum = 210, 210 % 11 = 1, 11 - 1 = 10
        assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 0);
    }

    #[test]
    fn test_check_digit_eleven_collapses_to_zero() {
        // sum = 0, 11 - 0 = 11
        assert_eq!(check_digit(&[0; 9]), 0);
    }

    // === is_valid_cpf() ===

    #[test]
    fn test_known_valid_cpf() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("11144477735"));
    }

    #[test]
    fn test_checksum_failure() {
        assert!(!is_valid_cpf("12345678900"));
    }

    #[test]
    fn test_mask_is_ignored() {
        assert_eq!(is_valid_cpf("529.982.247-25"), is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let candidate = d.to_string().repeat(CPF_LENGTH);
            assert!(!is_valid_cpf(&candidate), "{candidate} should be invalid");
        }
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
    }

    #[test]
    fn test_sequential_run_not_special_cased() {
        // Only single repeated digits are rejected up front; this run
        // still goes through the checksum and fails there.
        assert_eq!(
            Cpf::parse("12345678900"),
            Err(CpfError::SecondCheckDigitMismatch {
                expected: 9,
                found: 0
            })
        );
    }

    #[test]
    fn test_idempotent() {
        for input in ["52998224725", "12345678900", "abc", ""] {
            assert_eq!(is_valid_cpf(input), is_valid_cpf(input));
        }
    }

    // === Cpf::parse() ===

    #[test]
    fn test_parse_reports_length() {
        assert_eq!(
            Cpf::parse("529.982"),
            Err(CpfError::InvalidLength { length: 6 })
        );
    }

    #[test]
    fn test_parse_reports_repeated_digits() {
        assert_eq!(Cpf::parse("111.111.111-11"), Err(CpfError::RepeatedDigits));
    }

    #[test]
    fn test_parse_reports_first_check_digit() {
        assert_eq!(
            Cpf::parse("52998224715"),
            Err(CpfError::FirstCheckDigitMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_parse_reports_second_check_digit() {
        assert_eq!(
            Cpf::parse("52998224726"),
            Err(CpfError::SecondCheckDigitMismatch {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn test_digits_and_display() {
        let cpf = Cpf::parse(" 529 982 247 25 ").expect("valid cpf");
        assert_eq!(cpf.digits(), "52998224725");
        assert_eq!(cpf.to_string(), "529.982.247-25");
    }

    #[test]
    fn test_from_str() {
        let cpf: Cpf = "111.444.777-35".parse().expect("valid cpf");
        assert_eq!(cpf.digits(), "11144477735");
        assert!("111.444.777-36".parse::<Cpf>().is_err());
    }
}
