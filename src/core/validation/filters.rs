//! Reusable field filters
//!
//! These filters normalize request fields before validation runs.

/// Filter: trim whitespace from a string
pub fn trim(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// Filter: trim an optional string, mapping blank text to `None`
pub fn trim_to_none(value: Option<String>) -> Option<String> {
    value.map(trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_removes_whitespace() {
        assert_eq!(trim("  hello  ".to_string()), "hello");
    }

    #[test]
    fn test_trim_no_whitespace_unchanged() {
        assert_eq!(trim("hello".to_string()), "hello");
    }

    #[test]
    fn test_trim_to_none() {
        assert_eq!(trim_to_none(Some("   ".to_string())), None);
        assert_eq!(trim_to_none(None), None);
        assert_eq!(
            trim_to_none(Some(" notes ".to_string())),
            Some("notes".to_string())
        );
    }
}
