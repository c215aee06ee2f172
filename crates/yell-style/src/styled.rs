use crate::ansi;
use crate::color::{ColorName, color_enabled};
use owo_colors::OwoColorize;
use std::fmt;
use std::ops::Add;
use unicode_width::UnicodeWidthStr;

/// Text with an optional foreground and background color.
///
/// Style mutators consume and return the value, so a styled fragment is
/// never shared between unrelated render calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    content: String,
    fg: Option<ColorName>,
    bg: Option<ColorName>,
}

impl StyledText {
    pub fn new(content: impl Into<String>, fg: ColorName) -> Self {
        Self {
            content: content.into(),
            fg: Some(fg),
            bg: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            fg: None,
            bg: None,
        }
    }

    /// Style by color name. Unknown names degrade to unstyled text.
    pub fn colorize(name: &str, content: impl Into<String>, bg: Option<&str>) -> Self {
        let content = content.into();
        let Some(fg) = ColorName::parse(name) else {
            log::debug!("unknown color '{}', rendering unstyled", name);
            return Self::plain(content);
        };
        let bg = match bg {
            Some(bg_name) => match ColorName::parse(bg_name) {
                Some(c) => Some(c),
                None => {
                    log::debug!("unknown background '{}', ignoring", bg_name);
                    None
                }
            },
            None => None,
        };
        Self {
            content,
            fg: Some(fg),
            bg,
        }
    }

    pub fn fg(mut self, color: ColorName) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn on(mut self, color: ColorName) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn white(self) -> Self {
        self.fg(ColorName::White)
    }

    pub fn bright_white(self) -> Self {
        self.fg(ColorName::BrightWhite)
    }

    pub fn red(self) -> Self {
        self.fg(ColorName::Red)
    }

    /// Drop both colors.
    pub fn reset(mut self) -> Self {
        self.fg = None;
        self.bg = None;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn foreground(&self) -> Option<ColorName> {
        self.fg
    }

    pub fn background(&self) -> Option<ColorName> {
        self.bg
    }

    /// Same style, content repeated `n` times.
    pub fn repeat(&self, n: usize) -> Self {
        Self {
            content: self.content.repeat(n),
            fg: self.fg,
            bg: self.bg,
        }
    }

    pub fn visible_len(&self) -> usize {
        self.content.width()
    }

    /// Escape bytes this text adds when rendered in the current color mode.
    pub fn escape_overhead(&self) -> usize {
        ansi::escape_overhead(&self.render())
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !color_enabled() {
            return write!(f, "{}", self.content);
        }
        match (self.fg, self.bg) {
            (Some(fg), Some(bg)) => write!(
                f,
                "{}",
                self.content.as_str().color(fg.ansi()).on_color(bg.ansi())
            ),
            (Some(fg), None) => write!(f, "{}", self.content.as_str().color(fg.ansi())),
            (None, Some(bg)) => write!(f, "{}", self.content.as_str().on_color(bg.ansi())),
            (None, None) => write!(f, "{}", self.content),
        }
    }
}

impl<T: fmt::Display> Add<T> for StyledText {
    type Output = String;

    fn add(self, rhs: T) -> String {
        format!("{}{}", self, rhs)
    }
}
