use std::borrow::Cow;
use textwrap::Options;
use yell_style::{Theme, ansi, glyphs};

/// Marks wrapped continuation lines.
pub const CONTINUATION: &str = " ↪ ";
pub const ELLIPSIS: &str = "...";

/// How over-wide lines are shaped. Truncation and wrapping are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    Truncate,
    #[default]
    Wrap,
    /// Emit lines as they are and accept overflow.
    Overflow,
}

impl LineMode {
    /// Truncation wins when both flags are set.
    pub fn from_flags(truncate: bool, wrap: bool) -> Self {
        if truncate {
            LineMode::Truncate
        } else if wrap {
            LineMode::Wrap
        } else {
            LineMode::Overflow
        }
    }
}

/// Width-aware line shaping. All widths are visible columns; escape
/// sequences are measured out and carried through.
#[derive(Debug, Clone)]
pub struct LineFormatter<'a> {
    theme: &'a Theme,
    width: usize,
    indent: usize,
    mode: LineMode,
}

impl<'a> LineFormatter<'a> {
    pub fn new(theme: &'a Theme, width: usize, indent: usize, mode: LineMode) -> Self {
        Self {
            theme,
            width,
            indent,
            mode,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mode(&self) -> LineMode {
        self.mode
    }

    /// A line fits when it is no wider than `width` plus the indent allowance.
    pub fn fits(&self, text: &str, width: usize) -> bool {
        ansi::visible_len(text) <= width + self.indent
    }

    /// Cut an over-wide line to exactly `width` columns ending in `...`.
    /// A reset is appended when the line carried styling.
    pub fn truncate<'t>(&self, text: &'t str, width: usize) -> Cow<'t, str> {
        if self.fits(text, width) {
            return Cow::Borrowed(text);
        }
        let mut cut = ansi::take_visible(text, width.saturating_sub(ELLIPSIS.len()));
        cut.push_str(ELLIPSIS);
        if ansi::has_escapes(text) {
            cut.push_str(ansi::RESET);
        }
        Cow::Owned(cut)
    }

    pub fn wrap_to_lines(&self, text: &str, width: usize) -> Vec<String> {
        if self.fits(text, width) {
            return vec![text.to_string()];
        }
        let options = Options::new(width.max(1)).subsequent_indent(CONTINUATION);
        textwrap::wrap(text, options)
            .into_iter()
            .map(Cow::into_owned)
            .collect()
    }

    /// The wrap joined back into one string, without continuation markers.
    pub fn fill_text<'t>(&self, text: &'t str, width: usize) -> Cow<'t, str> {
        if self.fits(text, width) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(textwrap::fill(text, width.max(1)))
    }

    /// Split on embedded newlines, then wrap or truncate each over-wide
    /// segment according to the line mode. Overflow mode only splits.
    pub fn conform_width<I, T>(&self, values: I, width: usize) -> Vec<String>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut lines = Vec::new();
        for value in values {
            for segment in value.as_ref().split('\n') {
                if self.fits(segment, width) {
                    lines.push(segment.to_string());
                    continue;
                }
                match self.mode {
                    LineMode::Wrap => lines.extend(self.wrap_to_lines(segment, width)),
                    LineMode::Truncate => lines.push(self.truncate(segment, width).into_owned()),
                    LineMode::Overflow => lines.push(segment.to_string()),
                }
            }
        }
        lines
    }

    /// Level marker: `d|d|` where `d` is `level / 2` dashes.
    pub fn tracer(&self, level: usize) -> String {
        let d = glyphs::dash(self.theme.dash).repeat(level / 2);
        format!(
            "{d}{}{d}{}",
            glyphs::pipe(self.theme.pipe),
            glyphs::pipe(self.theme.primary)
        )
    }

    /// Apply the line mode, then prefix the tracer and `level` flups.
    /// A wrapped line yields one prefixed line per segment.
    pub fn shape(&self, line: &str, level: usize) -> Vec<String> {
        let prefix = format!(
            "{}{}",
            self.tracer(level),
            glyphs::flup(self.theme.flup).repeat(level)
        );
        let bodies = match self.mode {
            LineMode::Truncate => vec![self.truncate(line, self.width).into_owned()],
            LineMode::Wrap => self.wrap_to_lines(line, self.width),
            LineMode::Overflow => vec![line.to_string()],
        };
        bodies
            .into_iter()
            .map(|body| format!("{prefix}{body}"))
            .collect()
    }
}
