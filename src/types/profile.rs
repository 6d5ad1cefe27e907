//! Output profiles for common HTML/CSS grid frameworks.
//!
//! A profile bundles the markup templates and class patterns a downstream
//! renderer needs for one framework, plus the class patterns the
//! preprocessor itself uses when expanding `span:offset` shorthand.
//! Class patterns use `{value}` as the substitution marker.

/// A named grid framework configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Profile name (unique identifier).
    pub name: String,
    /// Grid row opening markup.
    pub row_open: String,
    /// Grid row closing markup.
    pub row_close: String,
    /// Column opening markup; `{value}` is replaced with the column classes.
    pub col_open: String,
    /// Column closing markup.
    pub col_close: String,
    /// Span class pattern; `{value}` is replaced with the span width.
    pub col_span_class: String,
    /// Offset class pattern; `{value}` is replaced with the offset width.
    pub col_offset_class: String,
    /// Class assigned to columns that declare no style.
    pub default_col_class: String,
    /// Whether `span[:offset]` numeric shorthand is expanded for this profile.
    pub shorthand: bool,
}

impl Profile {
    /// Expand the span class pattern with a width value.
    pub fn span_class(&self, value: &str) -> String {
        self.col_span_class.replace("{value}", value)
    }

    /// Expand the offset class pattern with a width value.
    pub fn offset_class(&self, value: &str) -> String {
        self.col_offset_class.replace("{value}", value)
    }
}

/// Collection of builtin profiles.
pub struct BuiltinProfiles;

impl BuiltinProfiles {
    /// Name of the profile used when none is configured.
    pub const DEFAULT: &'static str = "bootstrap";

    /// The "bootstrap" profile: span/offset classes with numeric shorthand.
    fn bootstrap() -> Profile {
        Profile {
            name: "bootstrap".to_string(),
            row_open: "<div class=\"row\">".to_string(),
            row_close: "</div>".to_string(),
            col_open: "<div class=\"{value}\">".to_string(),
            col_close: "</div>".to_string(),
            col_span_class: "span{value}".to_string(),
            col_offset_class: "offset{value}".to_string(),
            default_col_class: "span1".to_string(),
            shorthand: true,
        }
    }

    /// The "skeleton" profile: verbatim classes, no shorthand.
    fn skeleton() -> Profile {
        Profile {
            name: "skeleton".to_string(),
            row_open: "<div class=\"\">".to_string(),
            row_close: "</div>".to_string(),
            col_open: "<div class=\"\">".to_string(),
            col_close: "</div>".to_string(),
            col_span_class: String::new(),
            col_offset_class: String::new(),
            default_col_class: String::new(),
            shorthand: false,
        }
    }

    /// The "960gs" profile: verbatim classes, no shorthand.
    fn gs960() -> Profile {
        Profile {
            name: "960gs".to_string(),
            row_open: "<div class=\"\">".to_string(),
            row_close: "</div>".to_string(),
            col_open: "<div class=\"\">".to_string(),
            col_close: "</div>".to_string(),
            col_span_class: String::new(),
            col_offset_class: String::new(),
            default_col_class: String::new(),
            shorthand: false,
        }
    }

    /// Get a builtin profile by name (case-insensitive).
    pub fn get(name: &str) -> Option<Profile> {
        match name.to_lowercase().as_str() {
            "bootstrap" => Some(Self::bootstrap()),
            "skeleton" => Some(Self::skeleton()),
            "960gs" => Some(Self::gs960()),
            _ => None,
        }
    }

    /// Get all builtin profiles.
    pub fn all() -> Vec<Profile> {
        vec![Self::bootstrap(), Self::skeleton(), Self::gs960()]
    }

    /// Names of all builtin profiles.
    pub fn names() -> Vec<&'static str> {
        vec!["bootstrap", "skeleton", "960gs"]
    }

    /// The profile used when none is configured.
    pub fn default_profile() -> Profile {
        Self::bootstrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bootstrap() {
        let profile = BuiltinProfiles::get("bootstrap").unwrap();
        assert_eq!(profile.name, "bootstrap");
        assert_eq!(profile.default_col_class, "span1");
        assert!(profile.shorthand);
    }

    #[test]
    fn test_builtin_skeleton() {
        let profile = BuiltinProfiles::get("skeleton").unwrap();
        assert_eq!(profile.name, "skeleton");
        assert_eq!(profile.default_col_class, "");
        assert!(!profile.shorthand);
    }

    #[test]
    fn test_builtin_960gs() {
        let profile = BuiltinProfiles::get("960gs").unwrap();
        assert_eq!(profile.name, "960gs");
        assert!(!profile.shorthand);
    }

    #[test]
    fn test_builtin_case_insensitive() {
        let profile = BuiltinProfiles::get("Bootstrap").unwrap();
        assert_eq!(profile.name, "bootstrap");
    }

    #[test]
    fn test_builtin_unknown() {
        assert!(BuiltinProfiles::get("foundation").is_none());
    }

    #[test]
    fn test_default_profile() {
        let profile = BuiltinProfiles::default_profile();
        assert_eq!(profile.name, BuiltinProfiles::DEFAULT);
    }

    #[test]
    fn test_span_class_expansion() {
        let profile = BuiltinProfiles::bootstrap();
        assert_eq!(profile.span_class("4"), "span4");
        assert_eq!(profile.offset_class("1"), "offset1");
    }

    #[test]
    fn test_span_class_keeps_digits_verbatim() {
        let profile = BuiltinProfiles::bootstrap();
        assert_eq!(profile.span_class("007"), "span007");
    }
}
