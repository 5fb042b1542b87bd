use crate::nhs_number::is_valid_nhs_number;
use crate::secondary_validation::Validator;

pub struct NhsCheckDigit;

impl Validator for NhsCheckDigit {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        // https://www.datadictionary.nhs.uk/attributes/nhs_number.html
        // The NHS number is a 10-digit number in the format 123 456 7890.
        is_valid_nhs_number(regex_match)
    }
}
