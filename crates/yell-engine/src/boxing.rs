use crate::layout::LineFormatter;
use yell_style::{ColorName, Corners, StyledText, ansi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    /// Format-spec symbols `<`, `>`, `^`; anything else aligns left.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            ">" | "right" => Align::Right,
            "^" | "center" => Align::Center,
            _ => Align::Left,
        }
    }

    /// Pad `text` to `width` visible columns. Wider text is left alone.
    pub fn pad(self, text: &str, width: usize) -> String {
        let gap = width.saturating_sub(ansi::visible_len(text));
        match self {
            Align::Left => format!("{}{}", text, " ".repeat(gap)),
            Align::Right => format!("{}{}", " ".repeat(gap), text),
            Align::Center => {
                let left = gap / 2;
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
            }
        }
    }
}

/// Frames lines in a border drawn in one color.
#[derive(Debug, Clone)]
pub struct BoxRenderer {
    width: usize,
    corners: Corners,
    color: ColorName,
    align: Align,
}

impl BoxRenderer {
    pub fn new(width: usize, corners: Corners, color: ColorName) -> Self {
        Self {
            width,
            corners,
            color,
            align: Align::Left,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    fn paint(&self, text: &str) -> String {
        StyledText::new(text, self.color).render()
    }

    /// Border plus padded content, not yet shaped.
    pub fn frame<T: AsRef<str>>(&self, lines: &[T]) -> Vec<String> {
        let rule = "-".repeat(self.width);
        let top = self.paint(&format!(
            "{}{}{}",
            self.corners.top_left(),
            rule,
            self.corners.top_right()
        ));
        let bottom = self.paint(&format!(
            "{}{}{}",
            self.corners.bottom_left(),
            rule,
            self.corners.bottom_right()
        ));
        let bar = self.paint("|");

        let mut framed = vec![top];
        framed.extend(
            lines
                .iter()
                .flat_map(|line| line.as_ref().split('\n'))
                .map(|line| format!("{bar}{}{bar}", self.align.pad(line, self.width))),
        );
        framed.push(bottom);
        framed
    }

    /// Framed lines passed through the level tracer.
    pub fn render<T: AsRef<str>>(
        &self,
        lines: &[T],
        formatter: &LineFormatter<'_>,
        level: usize,
    ) -> Vec<String> {
        self.frame(lines)
            .iter()
            .flat_map(|line| formatter.shape(line, level))
            .collect()
    }
}

/// `-LABEL-  stack: outer() => inner() =>  line #N`
pub fn call_chain(label: &StyledText, stack: &[String], line: Option<u32>) -> String {
    let white = |s: &str| StyledText::plain(s).white().render();
    let bright = |s: &str| StyledText::plain(s).bright_white().render();

    let line_no = match line {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    };
    let marker = format!(" {} {}{}", bright("line"), white("#"), bright(&line_no));

    let mut parts = vec![format!("-{}- ", label), white("stack:")];
    let total = stack.len() + 1;
    for (i, entry) in stack.iter().map(|e| bright(e)).chain([marker]).enumerate() {
        parts.push(entry);
        if i + 1 < total {
            parts.push(white("=>"));
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LineMode;
    use yell_style::Theme;

    fn strip_all(lines: &[String]) -> Vec<String> {
        lines.iter().map(|l| ansi::strip(l).into_owned()).collect()
    }

    #[test]
    fn test_frame_pads_to_width() {
        let boxed = BoxRenderer::new(6, Corners::Round, ColorName::Cyan).frame(&["hi"]);
        assert_eq!(strip_all(&boxed), vec!["╭------╮", "|hi    |", "╰------╯"]);
    }

    #[test]
    fn test_bottom_line_uses_bottom_left_then_bottom_right() {
        let boxed = BoxRenderer::new(2, Corners::Heavy, ColorName::Green).frame::<&str>(&[]);
        assert_eq!(strip_all(&boxed), vec!["┏--┓", "┗--┛"]);
    }

    #[test]
    fn test_styled_content_padded_by_visible_width() {
        let styled = StyledText::new("abc", ColorName::Red).render();
        let boxed = BoxRenderer::new(5, Corners::Sharp, ColorName::White).frame(&[styled]);
        assert_eq!(ansi::visible_len(&boxed[1]), 7);
        assert_eq!(ansi::strip(&boxed[1]), "|abc  |");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(Align::Right.pad("ab", 4), "  ab");
        assert_eq!(Align::Center.pad("a", 4), " a  ");
        assert_eq!(Align::from_symbol("^"), Align::Center);
        assert_eq!(Align::from_symbol("?"), Align::Left);
    }

    #[test]
    fn test_render_applies_tracer() {
        let theme = Theme::default();
        let formatter = LineFormatter::new(&theme, 20, 3, LineMode::Wrap);
        let boxed = BoxRenderer::new(4, Corners::Sharp, ColorName::Cyan).render(&["x"], &formatter, 1);
        assert_eq!(strip_all(&boxed), vec!["||--|┌----┐", "||--||x   |", "||--|└----┘"]);
    }

    #[test]
    fn test_call_chain_separators() {
        let label = StyledText::new("INFO", ColorName::Cyan);
        let stack = vec!["main()".to_string(), "run()".to_string()];
        let header = call_chain(&label, &stack, Some(12));
        assert_eq!(
            ansi::strip(&header),
            "-INFO-  stack: main() => run() =>  line #12"
        );
    }

    #[test]
    fn test_call_chain_without_stack() {
        let label = StyledText::new("DEBUG", ColorName::Green);
        let header = call_chain(&label, &[], None);
        assert_eq!(ansi::strip(&header), "-DEBUG-  stack:  line #?");
    }
}
