use crate::custom::{CustomClass, match_class};
use yell_style::{StyledText, Theme, ansi, glyphs};
use yell_types::Value;

/// Renders value trees into guide-indented, styled lines.
///
/// Each nesting level adds one guide fragment (indent + vertical bar). The
/// guide is handed to children by value, so sibling subtrees never see each
/// other's fragments.
#[derive(Debug, Clone)]
pub struct TreeRenderer<'a> {
    theme: &'a Theme,
    indent: usize,
    width: usize,
    custom_classes: &'a [CustomClass],
}

impl<'a> TreeRenderer<'a> {
    pub fn new(theme: &'a Theme, indent: usize, width: usize) -> Self {
        Self {
            theme,
            indent,
            width,
            custom_classes: &[],
        }
    }

    pub fn with_custom_classes(mut self, classes: &'a [CustomClass]) -> Self {
        self.custom_classes = classes;
        self
    }

    /// Render `values` in order. Loop mode prefixes every line with
    /// `level` flups instead of a single space.
    pub fn render(&self, values: &[Value], is_loop: bool, level: usize) -> Vec<String> {
        let prefix = if is_loop {
            format!("{} ", glyphs::flup(self.theme.flup).repeat(level))
        } else {
            " ".to_string()
        };

        values
            .iter()
            .flat_map(|value| self.render_value(value))
            .map(|line| format!("{prefix}{line}"))
            .collect()
    }

    fn render_value(&self, value: &Value) -> Vec<String> {
        match value {
            Value::Map(entries) => self.render_map(entries, Vec::new()),
            Value::Seq(items) => self.render_seq(items, Vec::new()),
            scalar => vec![self.scalar(scalar).render()],
        }
    }

    fn render_map(&self, entries: &[(String, Value)], mut guide: Vec<String>) -> Vec<String> {
        let div_color = self.theme.dict_div;
        guide.push(self.guide_fragment(glyphs::pipe(div_color)));
        let squib = format!("{}{}", guide.concat(), glyphs::dash(div_color));

        let mut lines = Vec::new();
        for (key, value) in entries {
            let key_text = StyledText::new(key.as_str(), self.theme.dict_key);
            match value {
                Value::Map(nested) if !nested.is_empty() => {
                    lines.push(format!("{squib} {key_text} :"));
                    lines.extend(self.render_map(nested, guide.clone()));
                }
                Value::Seq(nested) if !nested.is_empty() => {
                    lines.push(format!("{squib} {key_text} :"));
                    lines.extend(self.render_seq(nested, guide.clone()));
                }
                _ => lines.push(format!("{squib} {key_text}: {}", self.inline(value))),
            }
        }
        lines.push(self.divider(&squib, div_color));
        lines
    }

    fn render_seq(&self, items: &[Value], mut guide: Vec<String>) -> Vec<String> {
        let div_color = self.theme.list_div;
        guide.push(self.guide_fragment(glyphs::pipe(div_color)));
        let squib = guide.concat();
        let dash = glyphs::dash(div_color);

        let mut lines = Vec::new();
        for item in items {
            match item {
                Value::Seq(nested) if !nested.is_empty() => {
                    lines.extend(self.render_seq(nested, guide.clone()));
                }
                Value::Map(nested) if !nested.is_empty() => {
                    lines.extend(self.render_map(nested, guide.clone()));
                }
                _ => lines.push(format!("{squib}{dash} {}", self.inline(item))),
            }
        }
        lines.push(self.divider(&squib, div_color));
        lines
    }

    fn guide_fragment(&self, bar: StyledText) -> String {
        format!("{}{}", " ".repeat(self.indent), bar)
    }

    /// Closing rule sized so every level ends at the same column.
    fn divider(&self, squib: &str, color: yell_style::ColorName) -> String {
        let length = self
            .width
            .saturating_sub(ansi::visible_len(squib) + self.indent);
        format!("{squib}{}", glyphs::div(length, color))
    }

    /// Scalars and empty containers, rendered on the owning line.
    fn inline(&self, value: &Value) -> String {
        match value {
            Value::Map(entries) if entries.is_empty() => {
                StyledText::new("{}", self.theme.dict_div).render()
            }
            Value::Seq(items) if items.is_empty() => {
                StyledText::new("[]", self.theme.list_div).render()
            }
            other => self.scalar(other).render(),
        }
    }

    pub fn scalar(&self, value: &Value) -> StyledText {
        match value {
            Value::Str(s) => StyledText::new(s.as_str(), self.theme.string),
            Value::Bool(b) => StyledText::new(b.to_string(), self.theme.boolean),
            Value::Int(_) | Value::UInt(_) | Value::Float(_) => {
                StyledText::new(value.to_string(), self.theme.number)
            }
            Value::Null => StyledText::new("None", self.theme.none),
            Value::Custom(custom) => match match_class(self.custom_classes, custom) {
                Some(class) => StyledText::new(custom.text.as_str(), class.color),
                None => StyledText::plain(custom.text.as_str()),
            },
            Value::Seq(_) | Value::Map(_) => StyledText::plain(value.to_string()),
        }
    }
}
