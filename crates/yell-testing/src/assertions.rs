//! Layout assertions on rendered output.

use anyhow::Result;
use yell_style::ansi;

/// Assert that no line is wider than `limit` visible columns.
pub fn assert_max_width<S: AsRef<str>>(lines: &[S], limit: usize) -> Result<()> {
    for (i, line) in lines.iter().enumerate() {
        let width = ansi::visible_len(line.as_ref());
        if width > limit {
            anyhow::bail!(
                "Line {} is {} columns wide, limit is {}: {:?}",
                i,
                width,
                limit,
                ansi::strip(line.as_ref())
            );
        }
    }
    Ok(())
}

/// Assert that `needle` appears in exactly `expected` of the plain-text lines.
pub fn assert_line_count_containing<S: AsRef<str>>(
    lines: &[S],
    needle: &str,
    expected: usize,
) -> Result<()> {
    let found = lines
        .iter()
        .filter(|line| ansi::strip(line.as_ref()).contains(needle))
        .count();

    if found != expected {
        anyhow::bail!(
            "Expected {} lines containing {:?}, got {}",
            expected,
            needle,
            found
        );
    }
    Ok(())
}
