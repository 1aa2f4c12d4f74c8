//! Display-time masks for document and phone values.
//!
//! These format the digits of a stored value for presentation; the stored
//! value itself is never modified and validation always runs on what the
//! user typed.

/// CPF mask: 999.999.999-99. Partial input renders partially.
pub fn document(value: &str) -> String {
    let digits = digits_of(value);
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// Mobile mask: (99) 999999999. Partial input renders partially.
pub fn mobile_phone(value: &str) -> String {
    let digits = digits_of(value);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= 2 {
        return format!("({}", digits);
    }
    format!("({}) {}", &digits[..2], &digits[2..])
}

fn digits_of(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_full_mask() {
        assert_eq!(document("12345678900"), "123.456.789-00");
        // Already-masked input is normalized, not double-masked
        assert_eq!(document("123.456.789-00"), "123.456.789-00");
    }

    #[test]
    fn test_document_partial_mask() {
        assert_eq!(document(""), "");
        assert_eq!(document("123"), "123");
        assert_eq!(document("1234"), "123.4");
        assert_eq!(document("1234567"), "123.456.7");
        assert_eq!(document("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_mobile_phone_full_mask() {
        assert_eq!(mobile_phone("11987654321"), "(11) 987654321");
        assert_eq!(mobile_phone("(11) 987654321"), "(11) 987654321");
    }

    #[test]
    fn test_mobile_phone_partial_mask() {
        assert_eq!(mobile_phone(""), "");
        assert_eq!(mobile_phone("1"), "(1");
        assert_eq!(mobile_phone("11"), "(11");
        assert_eq!(mobile_phone("119"), "(11) 9");
    }

    #[test]
    fn test_extra_digits_are_dropped() {
        assert_eq!(document("123456789001234"), "123.456.789-00");
        assert_eq!(mobile_phone("119876543219999"), "(11) 987654321");
    }
}
