use crate::style;
use colored::Color;
use similar::{ChangeTag, TextDiff};
use std::fmt::Display;
use std::io::{self, Write};

struct LineNumber(Option<usize>);

impl Display for LineNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            None => write!(f, "    "),
            Some(idx) => write!(f, "{:<4}", idx + 1),
        }
    }
}

pub(crate) fn is_multiline(text: &str) -> bool {
    text.contains('\n')
}

/// Writes a line-numbered listing of `expected` against `actual`.
///
/// Lines only in `expected` are marked `-`, lines only in `actual` `+`.
pub(crate) fn write_diff<W: Write>(
    out: &mut W,
    expected: &str,
    actual: &str,
    color: bool,
) -> io::Result<()> {
    let diff = TextDiff::from_lines(expected, actual);

    for change in diff.iter_all_changes() {
        let (sign, paint) = match change.tag() {
            ChangeTag::Delete => ("-", Some(Color::Red)),
            ChangeTag::Insert => ("+", Some(Color::Green)),
            ChangeTag::Equal => (" ", None),
        };
        write!(
            out,
            "{} {} |",
            LineNumber(change.old_index()),
            LineNumber(change.new_index())
        )?;

        let line = format!("{}{}", sign, change);
        match paint {
            Some(c) if color => write!(out, "{}", style::paint(&line, c, false))?,
            _ => write!(out, "{}", line)?,
        }
        if change.missing_newline() {
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_changed_lines() {
        let expected = format!("{:#?}", vec![1, 2, 3]);
        let actual = format!("{:#?}", vec![1, 2, 4]);

        let mut out = Vec::new();
        write_diff(&mut out, &expected, &actual, false).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("|-    3,\n"));
        assert!(out.contains("|+    4,\n"));
        assert!(out.ends_with("| ]\n"));
    }

    #[test]
    fn colors_changed_lines_on_request() {
        let mut out = Vec::new();
        write_diff(&mut out, "a\nb\n", "a\nc\n", true).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("|\u{1b}[31m-b\n\u{1b}[0m"));
        assert!(out.contains("|\u{1b}[32m+c\n\u{1b}[0m"));
        assert!(out.contains("| a\n"));
    }

    #[test]
    fn single_line_values_are_not_multiline() {
        assert!(!is_multiline(&format!("{:#?}", 5)));
        assert!(is_multiline(&format!("{:#?}", (1, 2))));
    }
}
