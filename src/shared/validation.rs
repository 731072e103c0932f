use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating slug fields on categories and sub categories.
    /// Lowercase alphanumeric segments joined by single hyphens.
    /// - Valid: "electronics", "fresh-fruit", "spice-mix-2"
    /// - Invalid: "-fruit", "fruit-", "fresh--fruit", "Fruit", "fresh_fruit"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("electronics"));
        assert!(SLUG_REGEX.is_match("fresh-fruit"));
        assert!(SLUG_REGEX.is_match("spice-mix-2"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("2024"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-fruit")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("fruit-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("fresh--fruit")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Fruit")); // uppercase
        assert!(!SLUG_REGEX.is_match("fresh_fruit")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("fresh fruit")); // space
    }
}
