use crate::error::NhsNumberError;
use crate::secondary_validation::mod11_check_digit;
use std::fmt;
use std::str::FromStr;

pub const NHS_NUMBER_LENGTH: usize = 10;
const PREFIX_LENGTH: usize = NHS_NUMBER_LENGTH - 1;

// https://www.datadictionary.nhs.uk/attributes/nhs_number.html
const WEIGHTS: &[u32; PREFIX_LENGTH] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Returns true if `candidate` is a valid NHS number once spaces and hyphens are removed.
///
/// This never panics and never records metrics, see [crate::ObservedValidator] for that.
pub fn is_valid_nhs_number(candidate: &str) -> bool {
    NhsNumber::parse(candidate).is_ok()
}

/// Hyphens are turned into spaces, then every space is dropped.
pub fn normalize(candidate: &str) -> String {
    candidate
        .chars()
        .map(|c| if c == '-' { ' ' } else { c })
        .filter(|c| *c != ' ')
        .collect()
}

/// The 500 million block is reserved, everything below 400 million or from 800 million
/// onwards has not been allocated.
pub fn is_in_allocated_range(prefix: u32) -> bool {
    matches!(prefix, 400_000_000..=499_999_999 | 600_000_000..=799_999_999)
}

/// Computes the modulus 11 check digit of the first 9 digits.
/// Returns `None` when the computed value is 10, which no NHS number can carry.
pub fn compute_check_digit(prefix_digits: &[u8; PREFIX_LENGTH]) -> Option<u8> {
    mod11_check_digit(prefix_digits, WEIGHTS, |remainder| match remainder {
        0 => Some(0), // 11 - 0 = 11 → 0
        1 => None,    // 11 - 1 = 10 → invalid
        _ => Some(11 - remainder),
    })
    .map(|digit| digit as u8)
}

/// A validated NHS number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NhsNumber {
    digits: [u8; NHS_NUMBER_LENGTH],
}

impl NhsNumber {
    /// Runs the same checks as [is_valid_nhs_number], in the same order, and reports the
    /// first one that failed.
    pub fn parse(candidate: &str) -> Result<Self, NhsNumberError> {
        if candidate.is_empty() {
            return Err(NhsNumberError::Empty);
        }

        let normalized = normalize(candidate);

        let length = normalized.chars().count();
        if length != NHS_NUMBER_LENGTH {
            return Err(NhsNumberError::InvalidLength { length });
        }

        let mut digits = [0u8; NHS_NUMBER_LENGTH];
        for (position, (slot, character)) in digits.iter_mut().zip(normalized.chars()).enumerate()
        {
            match character.to_digit(10) {
                Some(digit) => *slot = digit as u8,
                None => {
                    return Err(NhsNumberError::NonDigit {
                        position,
                        character,
                    })
                }
            }
        }

        let prefix_digits: [u8; PREFIX_LENGTH] = std::array::from_fn(|i| digits[i]);
        let prefix = digits_to_u32(&prefix_digits);
        if !is_in_allocated_range(prefix) {
            return Err(NhsNumberError::PrefixOutOfRange { prefix });
        }

        let expected =
            compute_check_digit(&prefix_digits).ok_or(NhsNumberError::UndefinedCheckDigit)?;
        let provided = digits[PREFIX_LENGTH];
        if provided != expected {
            return Err(NhsNumberError::CheckDigitMismatch { expected, provided });
        }

        Ok(NhsNumber { digits })
    }

    /// The first 9 digits as an integer.
    pub fn prefix(&self) -> u32 {
        digits_to_u32(&self.digits[..PREFIX_LENGTH])
    }

    pub fn check_digit(&self) -> u8 {
        self.digits[PREFIX_LENGTH]
    }

    pub fn digits(&self) -> &[u8; NHS_NUMBER_LENGTH] {
        &self.digits
    }
}

fn digits_to_u32(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, digit| acc * 10 + u32::from(*digit))
}

impl FromStr for NhsNumber {
    type Err = NhsNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NhsNumber::parse(s)
    }
}

/// Formats as `NNN NNN NNNN`.
impl fmt::Display for NhsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i == 3 || i == 6 {
                f.write_str(" ")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
