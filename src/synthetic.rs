use crate::nhs_number::compute_check_digit;

/// Every 10-digit string from `start` onwards, `count` of them, valid or not.
pub fn dense_candidates(start: u64, count: u64) -> impl Iterator<Item = String> {
    (start..start.saturating_add(count)).map(|value| format!("{:010}", value))
}

/// Appends the computed check digit to a 9-digit prefix, or `None` if the prefix has none.
pub fn with_check_digit(prefix: u32) -> Option<String> {
    let text = format!("{:09}", prefix);
    let mut digits = [0u8; 9];
    for (slot, c) in digits.iter_mut().zip(text.chars()) {
        *slot = c.to_digit(10)? as u8;
    }
    if text.len() != digits.len() {
        return None;
    }
    compute_check_digit(&digits).map(|check_digit| format!("{}{}", text, check_digit))
}
