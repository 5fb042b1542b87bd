// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod error;
mod nhs_number;
mod observability;
mod observed_validator;
mod secondary_validation;

#[cfg(any(test, feature = "testing", feature = "bench"))]
mod synthetic;

// This is the public API of the library
pub use error::NhsNumberError;
pub use nhs_number::{
    compute_check_digit, is_in_allocated_range, is_valid_nhs_number, normalize, NhsNumber,
    NHS_NUMBER_LENGTH,
};
pub use observability::labels::{Labels, NO_LABEL};
pub use observability::metrics::{REJECTIONS, VALID, VALIDATIONS};
pub use observed_validator::ObservedValidator;
pub use secondary_validation::{NhsCheckDigit, SecondaryValidator, Validator};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::synthetic::{dense_candidates, with_check_digit};
