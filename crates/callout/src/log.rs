//! The dual-mode logging facade.
//!
//! A [`Log`] is a cheap handle over shared state: the output sink, the
//! `muted` flag, the per-mode has-logged cells, and the failure counter.
//! [`Log::verbose`] and [`Log::notverbose`] return handles gated to one mode;
//! exactly one of the pair reaches the sink, depending on the `verbose`
//! option the root was built with. [`Log::always`] opts out of gating
//! inline, and [`Log::or`] flips a gated handle to its sibling:
//!
//! ```rust
//! use callout::{Log, LogOptions};
//!
//! let log = Log::new(LogOptions::new().verbose(true));
//! log.verbose()
//!     .writeln("resolving 14 targets")
//!     .unwrap()
//!     .or()
//!     .writeln("resolving...")
//!     .unwrap();
//! ```

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

use callout_text::{table, wraptext};
use console::{style, Term};

use crate::error::LogError;
use crate::message::Message;
use crate::options::LogOptions;
use crate::words::wordlist;

/// Wrap width for the `*lns` methods.
const WRAP_WIDTH: usize = 80;
/// Status prefix emitted by `warn`/`error`/`ok`.
const STATUS_PREFIX: &str = ">> ";
/// Status lines leave room for the prefix.
const STATUS_WRAP_WIDTH: usize = WRAP_WIDTH - 3;

/// Which facade a handle presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// The root: never gated; writes count as the configured mode.
    Always,
    /// Gated to verbose mode.
    Verbose,
    /// Gated to non-verbose mode.
    NotVerbose,
}

/// State shared by every handle of one facade.
struct Inner {
    debug: bool,
    verbose: bool,
    muted: Cell<bool>,
    logged_verbose: Cell<bool>,
    logged_notverbose: Cell<bool>,
    errors: Rc<Cell<usize>>,
    sink: RefCell<Box<dyn Write>>,
}

/// Console logging facade with verbose/non-verbose duality.
///
/// Formatting methods resolve their message, format it (prefixes, wrapping,
/// tables, color), and forward one final string to the sink unless the
/// handle is gated off or the facade is muted. All of them return
/// `Result<&Self, LogError>` so calls chain with `?`; sink errors propagate
/// unmodified.
///
/// Handles are cheap to clone and share all state; the facade is
/// single-threaded by construction (`!Send`).
#[derive(Clone)]
pub struct Log {
    inner: Rc<Inner>,
    mode: Mode,
}

impl Log {
    /// Builds a facade writing to the process terminal.
    pub fn new(options: LogOptions) -> Self {
        Self::with_sink(options, Term::stdout())
    }

    /// Builds a facade writing to an arbitrary sink.
    pub fn with_sink<W: Write + 'static>(options: LogOptions, sink: W) -> Self {
        let errors = options.error_count.unwrap_or_default();
        Log {
            inner: Rc::new(Inner {
                debug: options.debug,
                verbose: options.verbose,
                muted: Cell::new(options.muted),
                logged_verbose: Cell::new(false),
                logged_notverbose: Cell::new(false),
                errors,
                sink: RefCell::new(Box::new(sink)),
            }),
            mode: Mode::Always,
        }
    }

    /// Handle gated to verbose mode.
    pub fn verbose(&self) -> Log {
        self.retag(Mode::Verbose)
    }

    /// Handle gated to non-verbose mode.
    pub fn notverbose(&self) -> Log {
        self.retag(Mode::NotVerbose)
    }

    /// Ungated handle; writes regardless of mode.
    pub fn always(&self) -> Log {
        self.retag(Mode::Always)
    }

    /// The sibling of a gated handle; identity on an ungated one.
    pub fn or(&self) -> Log {
        match self.mode {
            Mode::Verbose => self.retag(Mode::NotVerbose),
            Mode::NotVerbose => self.retag(Mode::Verbose),
            Mode::Always => self.retag(Mode::Always),
        }
    }

    fn retag(&self, mode: Mode) -> Log {
        Log {
            inner: Rc::clone(&self.inner),
            mode,
        }
    }

    /// Whether the facade is muted. Shared across all handles.
    pub fn muted(&self) -> bool {
        self.inner.muted.get()
    }

    /// Mutes or unmutes the facade, for all handles at once.
    pub fn set_muted(&self, muted: bool) {
        self.inner.muted.set(muted);
    }

    /// Whether output has reached the sink under this handle's mode.
    ///
    /// A gated handle reports writes made under its own mode; the root
    /// reports writes made under either. False until the first write that
    /// actually reaches the sink; never reset.
    pub fn has_logged(&self) -> bool {
        match self.mode {
            Mode::Always => {
                self.inner.logged_verbose.get() || self.inner.logged_notverbose.get()
            }
            Mode::Verbose => self.inner.logged_verbose.get(),
            Mode::NotVerbose => self.inner.logged_notverbose.get(),
        }
    }

    /// Current value of the failure counter.
    pub fn error_count(&self) -> usize {
        self.inner.errors.get()
    }

    /// Writes the message verbatim, no trailing newline.
    pub fn write(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        self.emit(msg.as_str())
    }

    /// Writes the message followed by a newline; an empty message writes a
    /// bare newline.
    pub fn writeln(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        self.emit(&format!("{}\n", msg.as_str()))
    }

    /// Writes a red `>> `-prefixed warning line per message line; an empty
    /// message writes `ERROR`. Does not touch the failure counter.
    pub fn warn(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        self.emit(&status_text(msg.as_str(), Tone::Bad))
    }

    /// Same text as [`warn`](Log::warn), and increments the failure counter
    /// by one. The counter charges even when the handle is gated or muted:
    /// the error happened, only its text is suppressed.
    pub fn error(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        self.bump_errors();
        self.warn(msg)
    }

    /// Writes a green `>> `-prefixed line per message line; an empty message
    /// writes `OK`.
    pub fn ok(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        self.emit(&status_text(msg.as_str(), Tone::Good))
    }

    /// Writes the message in green, newline-terminated.
    pub fn success(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        if msg.is_empty() {
            return self.emit("\n");
        }
        self.emit(&format!("{}\n", style(msg.as_str()).green()))
    }

    /// Writes the message in red, newline-terminated.
    pub fn fail(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        if msg.is_empty() {
            return self.emit("\n");
        }
        self.emit(&format!("{}\n", style(msg.as_str()).red()))
    }

    /// Writes a blank line, then the message underlined; an empty message
    /// writes the blank line only. The blank line is unconditional, emitted
    /// even as the very first output.
    pub fn header(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        if msg.is_empty() {
            return self.emit("\n");
        }
        self.emit(&format!("\n{}\n", style(msg.as_str()).underlined()))
    }

    /// Writes a blank line, then the message in bold; an empty message
    /// writes the blank line only. As with [`header`](Log::header), the
    /// blank line is emitted even as the very first output.
    pub fn subhead(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        if msg.is_empty() {
            return self.emit("\n");
        }
        self.emit(&format!("\n{}\n", style(msg.as_str()).bold()))
    }

    /// Writes `[D] ` plus the message in magenta, but only when the facade
    /// was built with the `debug` option; otherwise a complete no-op that
    /// never touches the sink or the has-logged state.
    pub fn debug(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        if !self.inner.debug {
            return Ok(self);
        }
        let msg = msg.into();
        self.emit(&format!("[D] {}\n", style(msg.as_str()).magenta()))
    }

    /// Wraps the message to the status width, then writes it like
    /// [`error`](Log::error). The failure counter increments by exactly one
    /// per call, however many lines the wrap produces.
    pub fn errorlns(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        self.bump_errors();
        let msg = msg.into();
        let wrapped = wraptext(STATUS_WRAP_WIDTH, msg.as_str())?;
        self.emit(&status_text(&wrapped, Tone::Bad))
    }

    /// Wraps the message to the status width, then writes it like
    /// [`ok`](Log::ok).
    pub fn oklns(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        let wrapped = wraptext(STATUS_WRAP_WIDTH, msg.as_str())?;
        self.emit(&status_text(&wrapped, Tone::Good))
    }

    /// Wraps the message to the default width; every line, including the
    /// last, is newline-terminated.
    pub fn writelns(&self, msg: impl Into<Message>) -> Result<&Self, LogError> {
        let msg = msg.into();
        let wrapped = wraptext(WRAP_WIDTH, msg.as_str())?;
        self.emit(&format!("{}\n", wrapped))
    }

    /// Renders cells into fixed-width columns (see [`callout_text::table`])
    /// and writes the result, newline-terminated.
    pub fn writetableln<S: AsRef<str>>(
        &self,
        widths: &[usize],
        cells: &[S],
    ) -> Result<&Self, LogError> {
        let rendered = table(widths, cells)?;
        self.emit(&format!("{}\n", rendered))
    }

    /// Writes `prefix: ` plus the comma-joined word list; an empty list is a
    /// no-op.
    pub fn writeflags<S: AsRef<str>>(&self, flags: &[S], prefix: &str) -> Result<&Self, LogError> {
        if flags.is_empty() {
            return Ok(self);
        }
        self.emit(&format!("{}: {}\n", prefix, wordlist(flags)))
    }

    /// True when this handle's writes reach the sink.
    fn selected(&self) -> bool {
        match self.mode {
            Mode::Always => true,
            Mode::Verbose => self.inner.verbose,
            Mode::NotVerbose => !self.inner.verbose,
        }
    }

    /// The mode a write through this handle counts as.
    fn effective_verbose(&self) -> bool {
        match self.mode {
            Mode::Always => self.inner.verbose,
            Mode::Verbose => true,
            Mode::NotVerbose => false,
        }
    }

    fn bump_errors(&self) {
        self.inner.errors.set(self.inner.errors.get() + 1);
    }

    /// The single gated write path every formatting method funnels through.
    fn emit(&self, text: &str) -> Result<&Self, LogError> {
        if !self.selected() || self.inner.muted.get() {
            return Ok(self);
        }
        self.inner.sink.borrow_mut().write_all(text.as_bytes())?;
        if self.effective_verbose() {
            self.inner.logged_verbose.set(true);
        } else {
            self.inner.logged_notverbose.set(true);
        }
        Ok(self)
    }
}

/// Color family for status lines.
#[derive(Clone, Copy)]
enum Tone {
    Bad,
    Good,
}

impl Tone {
    fn fallback(self) -> &'static str {
        match self {
            Tone::Bad => "ERROR",
            Tone::Good => "OK",
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Tone::Bad => style(text).red().to_string(),
            Tone::Good => style(text).green().to_string(),
        }
    }
}

/// Formats a status message: `>> ` before every line of the trimmed body,
/// or the tone's fallback word when there is no message.
fn status_text(msg: &str, tone: Tone) -> String {
    if msg.is_empty() {
        return format!("{}\n", tone.paint(tone.fallback()));
    }
    let prefix = tone.paint(STATUS_PREFIX);
    let body = msg
        .trim()
        .split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Sink whose contents stay readable from the test after the facade
    /// takes ownership of its clone.
    #[derive(Clone, Default)]
    struct Capture(Rc<RefCell<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            callout_text::uncolor(&String::from_utf8_lossy(&self.0.borrow()))
        }
    }

    fn capture_log(options: LogOptions) -> (Log, Capture) {
        let capture = Capture::default();
        (Log::with_sink(options, capture.clone()), capture)
    }

    #[test]
    fn root_writes_regardless_of_mode() {
        let (log, out) = capture_log(LogOptions::new());
        log.write("foo").unwrap();
        assert_eq!(out.contents(), "foo");

        let (log, out) = capture_log(LogOptions::new().verbose(true));
        log.write("foo").unwrap();
        assert_eq!(out.contents(), "foo");
    }

    #[test]
    fn gating_selects_exactly_one_sibling() {
        let (log, out) = capture_log(LogOptions::new());
        log.verbose().writeln("loud").unwrap();
        log.notverbose().writeln("quiet").unwrap();
        assert_eq!(out.contents(), "quiet\n");

        let (log, out) = capture_log(LogOptions::new().verbose(true));
        log.verbose().writeln("loud").unwrap();
        log.notverbose().writeln("quiet").unwrap();
        assert_eq!(out.contents(), "loud\n");
    }

    #[test]
    fn or_flips_between_siblings() {
        let (log, out) = capture_log(LogOptions::new());
        log.verbose().writeln("loud").unwrap().or().writeln("quiet").unwrap();
        assert_eq!(out.contents(), "quiet\n");
    }

    #[test]
    fn always_bypasses_gating() {
        let (log, out) = capture_log(LogOptions::new());
        log.verbose().always().writeln("forced").unwrap();
        assert_eq!(out.contents(), "forced\n");
    }

    #[test]
    fn muted_is_shared_across_the_triangle() {
        let (log, out) = capture_log(LogOptions::new());
        assert!(!log.muted());
        assert!(!log.verbose().muted());
        assert!(!log.notverbose().muted());

        log.verbose().set_muted(true);
        assert!(log.muted());
        assert!(log.verbose().muted());
        assert!(log.notverbose().muted());

        log.writeln("dropped").unwrap();
        assert_eq!(out.contents(), "");
        assert!(!log.has_logged());

        log.notverbose().set_muted(false);
        assert!(!log.muted());
        log.writeln("kept").unwrap();
        assert_eq!(out.contents(), "kept\n");
    }

    #[test]
    fn has_logged_starts_false_everywhere() {
        let (log, _out) = capture_log(LogOptions::new());
        assert!(!log.has_logged());
        assert!(!log.verbose().has_logged());
        assert!(!log.notverbose().has_logged());
    }

    #[test]
    fn root_write_marks_its_configured_mode() {
        let (log, _out) = capture_log(LogOptions::new());
        log.write("").unwrap();
        assert!(log.has_logged());
        assert!(log.notverbose().has_logged());
        assert!(!log.verbose().has_logged());
    }

    #[test]
    fn matched_child_write_marks_child_and_root() {
        let (log, _out) = capture_log(LogOptions::new().verbose(true));
        log.verbose().write("").unwrap();
        assert!(log.has_logged());
        assert!(log.verbose().has_logged());
        assert!(!log.notverbose().has_logged());
    }

    #[test]
    fn mismatched_child_write_marks_nothing() {
        let (log, out) = capture_log(LogOptions::new());
        log.verbose().write("dropped").unwrap();
        assert_eq!(out.contents(), "");
        assert!(!log.has_logged());
        assert!(!log.verbose().has_logged());
        assert!(!log.notverbose().has_logged());
    }

    #[test]
    fn disabled_debug_never_marks_has_logged() {
        let (log, out) = capture_log(LogOptions::new());
        log.debug("foo").unwrap();
        assert_eq!(out.contents(), "");
        assert!(!log.has_logged());
    }

    #[test]
    fn enabled_debug_marks_has_logged() {
        let (log, _out) = capture_log(LogOptions::new().debug(true));
        log.debug("foo").unwrap();
        assert!(log.has_logged());
    }

    #[test]
    fn error_counts_even_when_gated_or_muted() {
        let (log, out) = capture_log(LogOptions::new().muted(true));
        log.error("boom").unwrap();
        log.verbose().error("unseen").unwrap();
        assert_eq!(out.contents(), "");
        assert_eq!(log.error_count(), 2);
    }

    #[test]
    fn caller_counter_is_shared() {
        let counter = Rc::new(Cell::new(5));
        let (log, _out) = capture_log(LogOptions::new().error_count(Rc::clone(&counter)));
        log.error("one").unwrap();
        log.errorlns("two").unwrap();
        assert_eq!(counter.get(), 7);
        assert_eq!(log.error_count(), 7);
    }

    #[test]
    fn methods_chain() {
        let (log, out) = capture_log(LogOptions::new());
        log.write("a").unwrap().writeln("b").unwrap().ok("c").unwrap();
        assert_eq!(out.contents(), "ab\n>> c\n");
    }

    #[test]
    fn sink_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let log = Log::with_sink(LogOptions::new(), Broken);
        assert!(matches!(log.write("x"), Err(LogError::Io(_))));
        // Nothing reached the sink, so nothing was logged.
        assert!(!log.has_logged());
    }

    #[test]
    fn writetableln_rejects_zero_width() {
        let (log, _out) = capture_log(LogOptions::new());
        assert!(matches!(
            log.writetableln(&[0], &["x"]),
            Err(LogError::Layout(_))
        ));
    }
}
