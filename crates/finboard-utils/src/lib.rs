//! Utility functions and helpers

/// Insert `separator` between every group of three digits, counting from the right.
///
/// The input is expected to be the integer part of a number without a sign.
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", ","), "0");
        assert_eq!(group_thousands("999", ","), "999");
        assert_eq!(group_thousands("1200", ","), "1,200");
        assert_eq!(group_thousands("12450", ","), "12,450");
        assert_eq!(group_thousands("1234567", "."), "1.234.567");
        assert_eq!(group_thousands("1234567", ""), "1234567");
    }

    #[test]
    fn test_contains_lowercase() {
        assert!(contains_lowercase("Budget Alert", "budget"));
        assert!(contains_lowercase("Budget Alert", ""));
        assert!(!contains_lowercase("Budget Alert", "zzz"));
    }
}
