//! String utility functions for text processing

/// Remove every whitespace character from a string, not just at the ends
///
/// # Arguments
///
/// * `s` - The input string
///
/// # Returns
///
/// The string with all whitespace characters removed
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("  x = 1  "), "x=1");
        assert_eq!(strip_whitespace("a b\tc\r"), "abc");
        assert_eq!(strip_whitespace(""), "");
        assert_eq!(strip_whitespace("   "), "");
    }
}
