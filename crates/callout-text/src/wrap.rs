//! Word wrapping by visible display columns.
//!
//! Breaks at whitespace when the current line contains any, hard-breaks at
//! the width otherwise. Style codes are carried per character and re-opened
//! on every line they span, so each output line is independently well-formed.

use crate::error::LayoutError;
use crate::styled::{char_width, Styled};

/// Wraps text into lines of at most `width` display columns, joined by `\n`.
///
/// When a character would overflow the current line, the line breaks at the
/// nearest preceding whitespace (that whitespace is dropped); a line with no
/// whitespace hard-breaks at exactly `width` columns. Embedded newlines force
/// a break. The output has no trailing newline.
///
/// A `width` of zero is an input error.
///
/// # Example
///
/// ```rust
/// use callout_text::wraptext;
///
/// assert_eq!(wraptext(2, "aabbc").unwrap(), "aa\nbb\nc");
/// assert_eq!(wraptext(11, "hello world foo bar").unwrap(), "hello world\nfoo bar");
/// ```
pub fn wraptext(width: usize, text: &str) -> Result<String, LayoutError> {
    Ok(split_lines(width, text)?.join("\n"))
}

/// Wraps text like [`wraptext`] but returns the lines individually.
///
/// Never produces a trailing empty line; empty input yields a single empty
/// line so that joining round-trips.
///
/// # Example
///
/// ```rust
/// use callout_text::split_lines;
///
/// assert_eq!(split_lines(4, "aaaa bbb").unwrap(), vec!["aaaa", "bbb"]);
/// ```
pub fn split_lines(width: usize, text: &str) -> Result<Vec<String>, LayoutError> {
    if width == 0 {
        return Err(LayoutError::InvalidWrapWidth);
    }

    let styled = Styled::parse(text);
    let chars: Vec<(&[String], char, usize)> = styled
        .chars()
        .map(|(codes, c)| (codes, c, char_width(c)))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    // Current line as indices into `chars`, so a whitespace break can carry
    // the word fragment after the break point onto the next line.
    let mut line: Vec<usize> = Vec::new();
    let mut line_width = 0usize;
    let mut last_ws: Option<usize> = None;

    for (i, &(_, c, cw)) in chars.iter().enumerate() {
        if c == '\n' {
            lines.push(render_line(&chars, &line));
            line.clear();
            line_width = 0;
            last_ws = None;
            continue;
        }

        if line_width + cw <= width {
            line.push(i);
            line_width += cw;
            if c.is_whitespace() {
                last_ws = Some(line.len() - 1);
            }
            continue;
        }

        // The character would overflow the current line.
        if c.is_whitespace() {
            // Break here; the whitespace itself is dropped.
            if !line.is_empty() {
                lines.push(render_line(&chars, &line));
                line.clear();
            }
            line_width = 0;
            last_ws = None;
        } else if let Some(ws) = last_ws {
            let carried = line.split_off(ws + 1);
            line.pop();
            if !line.is_empty() {
                lines.push(render_line(&chars, &line));
            }
            line = carried;
            line_width = line.iter().map(|&j| chars[j].2).sum();
            // The carried fragment plus a wide character can still overflow
            // (the dropped whitespace freed fewer columns than the character
            // needs); hard-break in that case.
            if line_width + cw > width {
                if !line.is_empty() {
                    lines.push(render_line(&chars, &line));
                    line.clear();
                }
                line_width = 0;
            }
            line.push(i);
            line_width += cw;
            last_ws = None;
        } else {
            if !line.is_empty() {
                lines.push(render_line(&chars, &line));
                line.clear();
            }
            line.push(i);
            line_width = cw;
            last_ws = None;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(render_line(&chars, &line));
    }
    Ok(lines)
}

fn render_line(chars: &[(&[String], char, usize)], indices: &[usize]) -> String {
    let mut out = Styled::new();
    for &i in indices {
        let (codes, c, _) = chars[i];
        out.push(codes, c);
    }
    out.ansi()
}
