use crate::color::ColorName;
use serde::Deserialize;

/// Semantic role to color table.
///
/// Every field has a default, so a config `[theme]` table only needs the
/// roles it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: ColorName,
    pub secondary: ColorName,
    pub tertiary: ColorName,

    pub arrow: ColorName,
    pub dash: ColorName,
    pub pipe: ColorName,
    pub flup: ColorName,
    pub chunk: ColorName,

    pub dict_key: ColorName,
    pub dict_div: ColorName,
    pub list_div: ColorName,

    pub success: ColorName,
    pub warning: ColorName,
    pub error: ColorName,
    pub failure: ColorName,
    pub info: ColorName,
    pub debug: ColorName,
    pub label: ColorName,

    pub string: ColorName,
    pub number: ColorName,
    pub boolean: ColorName,
    pub none: ColorName,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: ColorName::Cyan,
            secondary: ColorName::Magenta,
            tertiary: ColorName::Blue,

            arrow: ColorName::Blue,
            dash: ColorName::Cyan,
            pipe: ColorName::BrightCyan,
            flup: ColorName::Magenta,
            chunk: ColorName::BrightCyan,

            dict_key: ColorName::BrightYellow,
            dict_div: ColorName::BrightRed,
            list_div: ColorName::BrightBlue,

            success: ColorName::Green,
            warning: ColorName::BrightYellow,
            error: ColorName::BrightRed,
            failure: ColorName::Red,
            info: ColorName::Cyan,
            debug: ColorName::BrightGreen,
            label: ColorName::BrightYellow,

            string: ColorName::BrightWhite,
            number: ColorName::BrightGreen,
            boolean: ColorName::Magenta,
            none: ColorName::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_table_keeps_defaults() {
        let theme: Theme = toml::from_str(
            r#"
string = "yellow"
dict_key = "bg_green"
"#,
        )
        .unwrap();
        assert_eq!(theme.string, ColorName::Yellow);
        assert_eq!(theme.dict_key, ColorName::Green);
        assert_eq!(theme.number, Theme::default().number);
    }

    #[test]
    fn test_unknown_roles_are_ignored() {
        let theme: Theme = toml::from_str("div = \"cyan\"\narrow = \"red\"\n").unwrap();
        assert_eq!(theme.arrow, ColorName::Red);
        assert_eq!(theme.primary, Theme::default().primary);
    }

    #[test]
    fn test_invalid_theme_color_is_rejected() {
        let result: Result<Theme, _> = toml::from_str(r#"string = "ultraviolet""#);
        assert!(result.is_err());
    }
}
