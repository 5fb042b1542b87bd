mod nhs_check_digit;

pub use crate::secondary_validation::nhs_check_digit::NhsCheckDigit;
use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    NhsCheckDigit,
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::NhsCheckDigit => NhsCheckDigit.is_valid_match(regex_match),
        }
    }
}

const MODULO: u32 = 11;

/// Weighted sum of `digits` modulo 11. The scheme decides which check digit the
/// remainder stands for, or returns `None` if that remainder is not allowed.
pub(crate) fn mod11_check_digit(
    digits: &[u8],
    weights: &[u32],
    map_remainder: impl FnOnce(u32) -> Option<u32>,
) -> Option<u32> {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    map_remainder(sum % MODULO)
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_mod11_remainder() {
        // 4*10 + 0*9 + 1*8 + 2*7 + 3*6 + 4*5 + 5*4 + 6*3 + 7*2 = 152 = 13 * 11 + 9
        let remainder = mod11_check_digit(
            &[4, 0, 1, 2, 3, 4, 5, 6, 7],
            &[10, 9, 8, 7, 6, 5, 4, 3, 2],
            Some,
        );
        assert_eq!(remainder, Some(9));
    }

    #[test]
    fn test_mod11_rejecting_remainder() {
        assert_eq!(mod11_check_digit(&[1], &[1], |_| None), None);
    }

    #[test]
    fn test_secondary_validator_dispatch() {
        assert!(SecondaryValidator::NhsCheckDigit.is_valid_match("401 234 5672"));
        assert!(!SecondaryValidator::NhsCheckDigit.is_valid_match("401 234 5679"));
    }

    #[test]
    fn test_secondary_validator_serde() {
        assert_tokens(
            &SecondaryValidator::NhsCheckDigit,
            &[
                Token::Struct {
                    name: "SecondaryValidator",
                    len: 1,
                },
                Token::Str("type"),
                Token::Str("NhsCheckDigit"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_secondary_validator_from_json() {
        let validator: SecondaryValidator =
            serde_json::from_str(r#"{"type":"NhsCheckDigit"}"#).unwrap();
        assert_eq!(validator, SecondaryValidator::NhsCheckDigit);
        assert!(serde_json::from_str::<SecondaryValidator>(r#"{"type":"LuhnChecksum"}"#).is_err());
    }
}
