//! Input validation for lookup requests.

/// Check that `value`, after trimming surrounding whitespace, consists
/// of exactly ten ASCII decimal digits.
pub fn is_ten_digit_number(value: &str) -> bool {
    let digits = value.trim();
    digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit())
}
