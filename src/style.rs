use colored::Color;

/// Wraps `text` in ANSI escapes for `color`.
///
/// The escapes are emitted whether or not stdout is a terminal.
pub(crate) fn paint(text: &str, color: Color, bold: bool) -> String {
    let weight = if bold { "1;" } else { "" };
    format!("\x1b[{}{}m{}\x1b[0m", weight, color.to_fg_str(), text)
}
