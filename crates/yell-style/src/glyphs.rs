//! Glyph tables: box corners, arrows, guide fragments and the timestamp.

use crate::color::ColorName;
use crate::styled::StyledText;
use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "[%b %d | %H:%M:%S]";

/// Box corner sets, listed top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corners {
    #[default]
    Sharp,
    Round,
    Heavy,
    Double,
}

impl Corners {
    pub fn glyphs(self) -> [&'static str; 4] {
        match self {
            Corners::Sharp => ["┌", "┐", "┘", "└"],
            Corners::Round => ["╭", "╮", "╯", "╰"],
            Corners::Heavy => ["┏", "┓", "┛", "┗"],
            Corners::Double => ["╔", "╗", "╝", "╚"],
        }
    }

    /// Unknown names fall back to `Sharp`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "round" => Corners::Round,
            "heavy" => Corners::Heavy,
            "double" => Corners::Double,
            _ => Corners::Sharp,
        }
    }

    /// Corner by angle key (`tl`, `tr`, `br`, `bl`); unknown keys give top-left.
    pub fn corner(self, angle: &str) -> &'static str {
        let index = match angle.to_ascii_lowercase().as_str() {
            "tr" => 1,
            "br" => 2,
            "bl" => 3,
            _ => 0,
        };
        self.glyphs()[index]
    }

    pub fn top_left(self) -> &'static str {
        self.glyphs()[0]
    }

    pub fn top_right(self) -> &'static str {
        self.glyphs()[1]
    }

    pub fn bottom_right(self) -> &'static str {
        self.glyphs()[2]
    }

    pub fn bottom_left(self) -> &'static str {
        self.glyphs()[3]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowStyle {
    #[default]
    Pointer,
    Arrow,
    LongArrow,
}

impl ArrowStyle {
    /// Unknown names fall back to `Pointer`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "arrow" => ArrowStyle::Arrow,
            "long_arrow" => ArrowStyle::LongArrow,
            _ => ArrowStyle::Pointer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Accepts `<`, `left`, `>`, `right`; anything else points right.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "<" | "left" => Direction::Left,
            _ => Direction::Right,
        }
    }
}

pub fn arrow_glyph(direction: Direction, style: ArrowStyle) -> &'static str {
    match (style, direction) {
        (ArrowStyle::Pointer, Direction::Right) => "->",
        (ArrowStyle::Pointer, Direction::Left) => "<-",
        (ArrowStyle::Arrow, Direction::Right) => "=>",
        (ArrowStyle::Arrow, Direction::Left) => "<=",
        (ArrowStyle::LongArrow, Direction::Right) => "=====>",
        (ArrowStyle::LongArrow, Direction::Left) => "<=====",
    }
}

pub fn arrow(direction: Direction, style: ArrowStyle, color: ColorName) -> StyledText {
    StyledText::new(arrow_glyph(direction, style), color)
}

/// Arrow lookup by loose names, e.g. `arrow_named(">", "long_arrow", color)`.
pub fn arrow_named(direction: &str, style: &str, color: ColorName) -> StyledText {
    arrow(Direction::from_name(direction), ArrowStyle::from_name(style), color)
}

pub fn dash(color: ColorName) -> StyledText {
    StyledText::new("-", color)
}

pub fn pipe(color: ColorName) -> StyledText {
    StyledText::new("|", color)
}

/// Loop-mode indent marker.
pub fn flup(color: ColorName) -> StyledText {
    StyledText::new("--|", color)
}

pub fn chunk(color: ColorName) -> StyledText {
    StyledText::new("|---|", color)
}

/// A run of `length` dashes.
pub fn div(length: usize, color: ColorName) -> StyledText {
    dash(color).repeat(length)
}

pub fn timestamp() -> StyledText {
    timestamp_at(Local::now())
}

pub fn timestamp_at(at: DateTime<Local>) -> StyledText {
    StyledText::plain(at.format(TIMESTAMP_FORMAT).to_string()).red()
}
