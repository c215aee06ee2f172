use owo_colors::AnsiColors;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn ANSI styling back on for every [`StyledText`](crate::StyledText) rendered from now on.
pub fn enable_color() {
    COLOR_ENABLED.store(true, Ordering::Relaxed);
}

/// Render all styled text as plain content from now on.
pub fn disable_color() {
    COLOR_ENABLED.store(false, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// The sixteen ANSI colors, named the way config files spell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

const NAMES: &[(&str, ColorName)] = &[
    ("black", ColorName::Black),
    ("red", ColorName::Red),
    ("green", ColorName::Green),
    ("yellow", ColorName::Yellow),
    ("blue", ColorName::Blue),
    ("magenta", ColorName::Magenta),
    ("cyan", ColorName::Cyan),
    ("white", ColorName::White),
    ("bright_black", ColorName::BrightBlack),
    ("bright_red", ColorName::BrightRed),
    ("bright_green", ColorName::BrightGreen),
    ("bright_yellow", ColorName::BrightYellow),
    ("bright_blue", ColorName::BrightBlue),
    ("bright_magenta", ColorName::BrightMagenta),
    ("bright_cyan", ColorName::BrightCyan),
    ("bright_white", ColorName::BrightWhite),
];

impl ColorName {
    pub fn as_str(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, c)| *c == self)
            .map(|(name, _)| *name)
            .unwrap_or("white")
    }

    /// Accepts `red`, `bright_red` and the background spelling `bg_red`.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let name = name.strip_prefix("bg_").unwrap_or(&name);
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }

    pub fn is_valid(name: &str) -> bool {
        Self::parse(name).is_some()
    }

    pub(crate) fn ansi(self) -> AnsiColors {
        match self {
            ColorName::Black => AnsiColors::Black,
            ColorName::Red => AnsiColors::Red,
            ColorName::Green => AnsiColors::Green,
            ColorName::Yellow => AnsiColors::Yellow,
            ColorName::Blue => AnsiColors::Blue,
            ColorName::Magenta => AnsiColors::Magenta,
            ColorName::Cyan => AnsiColors::Cyan,
            ColorName::White => AnsiColors::White,
            ColorName::BrightBlack => AnsiColors::BrightBlack,
            ColorName::BrightRed => AnsiColors::BrightRed,
            ColorName::BrightGreen => AnsiColors::BrightGreen,
            ColorName::BrightYellow => AnsiColors::BrightYellow,
            ColorName::BrightBlue => AnsiColors::BrightBlue,
            ColorName::BrightMagenta => AnsiColors::BrightMagenta,
            ColorName::BrightCyan => AnsiColors::BrightCyan,
            ColorName::BrightWhite => AnsiColors::BrightWhite,
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for a color name outside the ANSI table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown color: {}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for ColorName {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for ColorName {
    type Error = UnknownColor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_background_prefix() {
        assert_eq!(ColorName::parse("bg_red"), Some(ColorName::Red));
        assert_eq!(ColorName::parse("Bright_Cyan"), Some(ColorName::BrightCyan));
        assert_eq!(ColorName::parse("mauve"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for (name, color) in NAMES {
            assert_eq!(color.as_str(), *name);
            assert_eq!(name.parse::<ColorName>(), Ok(*color));
        }
    }

    #[test]
    fn test_unknown_color_error_message() {
        let err = "chartreuse".parse::<ColorName>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown color: chartreuse");
    }
}
