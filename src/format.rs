//! Input formatters for the editable card fields.
//!
//! Every function here is pure and total: given any raw input string it
//! returns a normalized display string. Malformed input is stripped, never
//! rejected, so there is no error path and no validation state anywhere in
//! the app. All three formatters are idempotent.

/// Maximum number of raw digits in a card number.
pub const NUMBER_MAX_DIGITS: usize = 16;

/// Maximum number of raw digits in an expiry (MMYY).
pub const EXPIRY_MAX_DIGITS: usize = 4;

/// Maximum number of raw digits in a CVV.
pub const CVV_MAX_DIGITS: usize = 4;

/// Normalize a card number: digits only, capped at 16, grouped in runs of 4
/// separated by single spaces, no trailing space.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(NUMBER_MAX_DIGITS)
        .collect();

    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*d);
    }
    out
}

/// Normalize an expiry: digits only, capped at 4, with `/` inserted after
/// the second digit once a third digit exists.
pub fn format_expiry(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(EXPIRY_MAX_DIGITS)
        .collect();

    if digits.len() <= 2 {
        return digits.into_iter().collect();
    }

    let mut out = String::with_capacity(digits.len() + 1);
    out.extend(&digits[..2]);
    out.push('/');
    out.extend(&digits[2..]);
    out
}

/// Normalize a CVV: digits only, capped at 4. No grouping.
pub fn format_cvv(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CVV_MAX_DIGITS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_grouping() {
        assert_eq!(format_card_number("4444333322221111"), "4444 3333 2222 1111");
        assert_eq!(format_card_number("4444333322221111x"), "4444 3333 2222 1111");
        assert_eq!(format_card_number("12345"), "1234 5");
        assert_eq!(format_card_number("1234"), "1234");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_number_strips_and_truncates() {
        // 17th+ digits dropped, letters stripped
        assert_eq!(
            format_card_number("abc4444dd33332222d1111zzzz9999"),
            "4444 3333 2222 1111"
        );
    }

    #[test]
    fn test_number_shape() {
        let out = format_card_number("99 88x77--66 5544 3322 11");
        assert!(out.chars().all(|c| c.is_ascii_digit() || c == ' '));
        assert!(!out.contains("  "));
        assert!(!out.ends_with(' '));
        let digit_count = out.chars().filter(char::is_ascii_digit).count();
        assert!(digit_count <= NUMBER_MAX_DIGITS);
        // Every group except possibly the last is exactly 4 digits
        let groups: Vec<&str> = out.split(' ').collect();
        for g in &groups[..groups.len().saturating_sub(1)] {
            assert_eq!(g.len(), 4);
        }
    }

    #[test]
    fn test_expiry() {
        assert_eq!(format_expiry("1234"), "12/34");
        assert_eq!(format_expiry("123"), "12/3");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry(""), "");
        assert_eq!(format_expiry("abcd56"), "56");
        assert_eq!(format_expiry("12345"), "12/34"); // 5th digit dropped
    }

    #[test]
    fn test_cvv() {
        assert_eq!(format_cvv("123"), "123");
        assert_eq!(format_cvv("12a3b456"), "1234");
        assert_eq!(format_cvv("xyz"), "");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "",
            "1",
            "12",
            "1234",
            "4444333322221111",
            "abc4444dd33332222d1111zzzz9999",
            "12/34",
            "4444 3333 2222 1111",
        ];
        for raw in inputs {
            let once = format_card_number(raw);
            assert_eq!(format_card_number(&once), once);
            let once = format_expiry(raw);
            assert_eq!(format_expiry(&once), once);
            let once = format_cvv(raw);
            assert_eq!(format_cvv(&once), once);
        }
    }
}
