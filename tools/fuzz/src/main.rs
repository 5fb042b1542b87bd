use afl::fuzz;
use nhs_number_check::{is_valid_nhs_number, normalize, NhsNumber, NhsNumberError};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let verdict = is_valid_nhs_number(input);
    let parsed = NhsNumber::parse(input);
    assert_eq!(verdict, parsed.is_ok());

    match parsed {
        Ok(nhs_number) => {
            assert_eq!(normalize(input).len(), 10);
            assert_eq!(NhsNumber::parse(&nhs_number.to_string()), Ok(nhs_number));
        }
        Err(NhsNumberError::Empty) => assert!(input.is_empty()),
        Err(NhsNumberError::InvalidLength { length }) => {
            assert_ne!(length, 10);
            assert_eq!(normalize(input).chars().count(), length);
        }
        Err(_) => {}
    }

    // Separators never change the verdict
    let spaced: String = input.chars().flat_map(|c| [c, ' ']).collect();
    let hyphenated: String = input.chars().flat_map(|c| ['-', c]).collect();
    if !input.is_empty() {
        assert_eq!(is_valid_nhs_number(&spaced), verdict);
        assert_eq!(is_valid_nhs_number(&hyphenated), verdict);
    }
}
