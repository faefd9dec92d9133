//! Line normalization.

/// Drops lines that are empty once surrounding whitespace is removed.
pub fn remove_whitespace_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Trims leading and trailing whitespace (line terminators included) from
/// every line. Keeps the line count.
pub fn strip_text_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines.iter().map(|line| line.trim()).collect()
}
