//! Structured representation of ANSI-styled strings.
//!
//! Wrapping and padding must count visible characters only, and a line that
//! splits a styled run has to re-open that run's codes so the line renders
//! correctly on its own. Scanning for escape bytes at every call site gets
//! that wrong easily, so this module parses a styled string once into
//! [`Styled`]: a sequence of runs, each a chunk of visible text plus the SGR
//! parameter codes active for it. Layout code operates on runs and characters;
//! [`Styled::ansi`] round-trips back to escape-sequence form.

use std::fmt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A chunk of visible text with the SGR codes active for it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Run {
    codes: Vec<String>,
    text: String,
}

/// A string with zero or more SGR style sequences, parsed into styled runs.
///
/// Visible length is the length after stripping all escape sequences; codes
/// never count toward width but are preserved and re-emitted around the text
/// they styled.
///
/// # Example
///
/// ```rust
/// use callout_text::Styled;
///
/// let styled = Styled::parse("\x1b[1mbold\x1b[0m text");
/// assert_eq!(styled.plain(), "bold text");
/// assert_eq!(styled.width(), 9);
/// assert_eq!(styled.ansi(), "\x1b[1mbold\x1b[0m text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styled {
    runs: Vec<Run>,
}

impl Styled {
    /// Creates an empty styled string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a string containing SGR escape sequences.
    ///
    /// `ESC [ params m` sequences update the active style state: reset (`0`
    /// or empty) clears everything, the attribute-off family (`22`-`29`,
    /// `39`, `49`) clears the matching attributes, and any other parameter
    /// becomes active for the following text. Extended color sequences
    /// (`38;5;n`, `38;2;r;g;b` and the `48` equivalents) are kept as a
    /// single code. Non-SGR escape sequences are non-printing and carry no
    /// style state; they are dropped.
    pub fn parse(input: &str) -> Self {
        let mut runs: Vec<Run> = Vec::new();
        let mut active: Vec<String> = Vec::new();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\x1b' {
                if chars.peek() == Some(&'[') {
                    chars.next();
                    let mut params = String::new();
                    let mut terminator = None;
                    for c2 in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&c2) {
                            terminator = Some(c2);
                            break;
                        }
                        params.push(c2);
                    }
                    if terminator == Some('m') {
                        apply_sgr(&mut active, &params);
                    }
                } else {
                    // Non-CSI escape (charset designation, save/restore
                    // cursor, ...): intermediate bytes then one final byte.
                    while let Some(&c2) = chars.peek() {
                        chars.next();
                        if !('\x20'..='\x2f').contains(&c2) {
                            break;
                        }
                    }
                }
                continue;
            }
            push_run_char(&mut runs, &active, c);
        }

        Styled { runs }
    }

    /// Returns the visible text with all style codes removed.
    pub fn plain(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Returns the display width of the visible text in terminal columns.
    ///
    /// CJK characters count as two columns; style codes count as zero.
    pub fn width(&self) -> usize {
        self.runs.iter().map(|run| run.text.width()).sum()
    }

    /// Returns true if there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// Renders back to escape-sequence form.
    ///
    /// Each styled run is emitted as its codes, its text, then a reset, so
    /// any substring of runs (a wrapped line, say) is independently
    /// well-formed.
    pub fn ansi(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            for code in &run.codes {
                out.push_str("\x1b[");
                out.push_str(code);
                out.push('m');
            }
            out.push_str(&run.text);
            if !run.codes.is_empty() {
                out.push_str("\x1b[0m");
            }
        }
        out
    }

    /// Iterates visible characters with the codes active for each.
    pub(crate) fn chars(&self) -> impl Iterator<Item = (&[String], char)> + '_ {
        self.runs
            .iter()
            .flat_map(|run| run.text.chars().map(move |c| (run.codes.as_slice(), c)))
    }

    /// Appends one visible character under the given codes, merging into the
    /// last run when the codes match.
    pub(crate) fn push(&mut self, codes: &[String], c: char) {
        push_run_char(&mut self.runs, codes, c);
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ansi())
    }
}

/// Removes all style codes from a string, preserving every visible character.
///
/// Idempotent: stripping a stripped string is a no-op.
///
/// # Example
///
/// ```rust
/// use callout_text::uncolor;
///
/// assert_eq!(uncolor("\x1b[31mred\x1b[0m plain"), "red plain");
/// assert_eq!(uncolor("no codes"), "no codes");
/// ```
pub fn uncolor(s: &str) -> String {
    Styled::parse(s).plain()
}

/// Returns the display width of a string, ignoring style codes.
///
/// Wrapper around [`console::measure_text_width`] for callers that don't
/// need the parsed form.
pub fn display_width(s: &str) -> usize {
    console::measure_text_width(s)
}

fn push_run_char(runs: &mut Vec<Run>, active: &[String], c: char) {
    match runs.last_mut() {
        Some(run) if run.codes == active => run.text.push(c),
        _ => runs.push(Run {
            codes: active.to_vec(),
            text: String::from(c),
        }),
    }
}

/// Applies one SGR parameter list to the active code set.
fn apply_sgr(active: &mut Vec<String>, params: &str) {
    let mut parts = params.split(';').peekable();
    while let Some(code) = parts.next() {
        match code {
            "" | "0" => active.clear(),
            "22" => active.retain(|c| c != "1" && c != "2"),
            "23" => active.retain(|c| c != "3"),
            "24" => active.retain(|c| c != "4"),
            "25" => active.retain(|c| c != "5" && c != "6"),
            "27" => active.retain(|c| c != "7"),
            "28" => active.retain(|c| c != "8"),
            "29" => active.retain(|c| c != "9"),
            "39" => active.retain(|c| !is_foreground(c)),
            "49" => active.retain(|c| !is_background(c)),
            "38" | "48" => {
                // Extended color: consume the whole 5;n or 2;r;g;b tail.
                let mut ext = String::from(code);
                let take = match parts.peek() {
                    Some(&"5") => 2,
                    Some(&"2") => 4,
                    _ => 0,
                };
                for _ in 0..take {
                    if let Some(part) = parts.next() {
                        ext.push(';');
                        ext.push_str(part);
                    }
                }
                active.push(ext);
            }
            _ => active.push(code.to_string()),
        }
    }
}

fn is_foreground(code: &str) -> bool {
    code.starts_with("38") || matches!(code.parse::<u8>(), Ok(30..=37 | 90..=97))
}

fn is_background(code: &str) -> bool {
    code.starts_with("48") || matches!(code.parse::<u8>(), Ok(40..=47 | 100..=107))
}

// Make width available to wrap without importing the trait everywhere.
pub(crate) fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}
