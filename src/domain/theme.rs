// Theme domain model - Named color tokens
use super::error::SiteError;
use std::collections::HashSet;

const FORBIDDEN_VALUE_CHARS: [char; 5] = [';', '{', '}', '<', '>'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken {
    pub name: String,
    pub value: String,
}

/// Design tokens consumed by the stylesheet. Names are unique and keep
/// their declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTokens {
    colors: Vec<ColorToken>,
    content: Vec<String>,
}

impl ThemeTokens {
    pub fn new(colors: Vec<(String, String)>, content: Vec<String>) -> Result<Self, SiteError> {
        let mut seen = HashSet::new();
        let mut tokens = Vec::with_capacity(colors.len());

        for (name, value) in colors {
            if name.trim().is_empty() {
                return Err(SiteError::EmptyThemeTokenName);
            }
            if !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(SiteError::InvalidThemeTokenName(name));
            }
            if value.trim().is_empty() {
                return Err(SiteError::EmptyThemeTokenValue(name));
            }
            if value.contains(FORBIDDEN_VALUE_CHARS) {
                return Err(SiteError::InvalidThemeTokenValue(name));
            }
            if !seen.insert(name.clone()) {
                return Err(SiteError::DuplicateThemeToken(name));
            }
            tokens.push(ColorToken { name, value });
        }

        Ok(Self {
            colors: tokens,
            content,
        })
    }

    pub fn colors(&self) -> &[ColorToken] {
        &self.colors
    }

    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }

    /// Source globs the style compiler scans for class usage.
    pub fn content(&self) -> &[String] {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_lookup_by_name() {
        let theme = ThemeTokens::new(
            vec![pair("slatebase", "#10192A"), pair("seafoam", "#7FE7C4")],
            vec![],
        )
        .unwrap();

        assert_eq!(theme.color("seafoam"), Some("#7FE7C4"));
        assert_eq!(theme.color("amberline"), None);
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let err = ThemeTokens::new(
            vec![pair("seafoam", "#7FE7C4"), pair("seafoam", "#000000")],
            vec![],
        )
        .unwrap_err();

        assert_eq!(err, SiteError::DuplicateThemeToken("seafoam".to_string()));
    }

    #[test]
    fn test_rejects_name_that_is_not_an_identifier() {
        let err = ThemeTokens::new(vec![pair("sea foam", "#7FE7C4")], vec![]).unwrap_err();
        assert_eq!(err, SiteError::InvalidThemeTokenName("sea foam".to_string()));
    }

    #[test]
    fn test_rejects_value_that_escapes_the_declaration() {
        let err = ThemeTokens::new(
            vec![pair("seafoam", "red; } body { display: none")],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, SiteError::InvalidThemeTokenValue("seafoam".to_string()));
    }

    #[test]
    fn test_accepts_functional_color_values() {
        let theme = ThemeTokens::new(
            vec![pair("amber_line-2", "rgb(255, 180, 84)")],
            vec![],
        )
        .unwrap();
        assert_eq!(theme.color("amber_line-2"), Some("rgb(255, 180, 84)"));
    }

    #[test]
    fn test_rejects_empty_value() {
        let err = ThemeTokens::new(vec![pair("amberline", " ")], vec![]).unwrap_err();
        assert_eq!(err, SiteError::EmptyThemeTokenValue("amberline".to_string()));
    }
}
