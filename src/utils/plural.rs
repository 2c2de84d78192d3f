//! Pluralization utilities.

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "stub")` -> `"0 stubs"`
/// - `plural_count(1, "stub")` -> `"1 stub"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "stub"), "0 stubs");
        assert_eq!(plural_count(1, "stub"), "1 stub");
        assert_eq!(plural_count(5, "stub"), "5 stubs");
    }
}
