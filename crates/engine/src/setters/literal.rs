//! Literal values.

/// A literal is already in its string form.
pub(super) fn resolve(value: &str) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_returned_unchanged() {
        assert_eq!(resolve("12345"), "12345");
        assert_eq!(resolve(""), "");
    }
}
