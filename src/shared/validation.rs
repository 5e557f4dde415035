use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating category color tags
    /// Must be a 6-digit lowercase or uppercase hex color with leading '#'
    /// - Valid: "#aabbcc", "#3B82F6", "#000000"
    /// - Invalid: "aabbcc", "#abc", "#gggggg", "blue"
    pub static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

/// Rejects values that are empty or contain only whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_regex_valid() {
        assert!(HEX_COLOR_REGEX.is_match("#aabbcc"));
        assert!(HEX_COLOR_REGEX.is_match("#3B82F6"));
        assert!(HEX_COLOR_REGEX.is_match("#000000"));
        assert!(HEX_COLOR_REGEX.is_match("#FFFFFF"));
    }

    #[test]
    fn test_hex_color_regex_invalid() {
        assert!(!HEX_COLOR_REGEX.is_match("aabbcc")); // missing '#'
        assert!(!HEX_COLOR_REGEX.is_match("#abc")); // shorthand form
        assert!(!HEX_COLOR_REGEX.is_match("#gggggg")); // not hex digits
        assert!(!HEX_COLOR_REGEX.is_match("blue")); // named color
        assert!(!HEX_COLOR_REGEX.is_match("#aabbcc11")); // 8 digits
        assert!(!HEX_COLOR_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Printer jam").is_ok());
        assert!(not_blank(" x ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }
}
