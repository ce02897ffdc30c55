//! # Callout - Dual-Mode Console Logging Facade
//!
//! `callout` renders log-level-tagged messages, colorized status lines,
//! word-wrapped text, and simple aligned tables to a terminal-like sink. It
//! tracks whether anything was written and splits output into a verbose /
//! non-verbose pair of facades that share their muted state.
//!
//! The layout layer (style-aware wrapping, measurement, tables) lives in
//! [`callout_text`] and is re-exported here.
//!
//! ## Quick Start
//!
//! ```rust
//! use callout::{Log, LogOptions};
//!
//! let log = Log::new(LogOptions::new());
//!
//! log.header("Building").unwrap();
//! log.ok("compiled 3 crates").unwrap();
//! log.writeflags(&["force", "no-color"], "Flags").unwrap();
//! ```
//!
//! ## Verbose / Non-Verbose Duality
//!
//! `log.verbose()` and `log.notverbose()` are gated views over the same
//! facade; exactly one of them reaches the sink, chosen by the `verbose`
//! option. `or()` flips to the sibling, so a call pair emits the detailed
//! form *or* the terse one, never both:
//!
//! ```rust
//! use callout::{Log, LogOptions};
//!
//! let log = Log::new(LogOptions::new());
//! log.verbose()
//!     .writeln("copying src/a.rs, src/b.rs, src/c.rs")
//!     .unwrap()
//!     .or()
//!     .writeln("copying 3 files")
//!     .unwrap();
//! ```
//!
//! ## Capturing Output
//!
//! The facade writes to the process terminal by default; anything
//! implementing `std::io::Write` can stand in:
//!
//! ```rust
//! use callout::{Log, LogOptions};
//!
//! let log = Log::with_sink(LogOptions::new(), Vec::new());
//! log.error("exploded").unwrap();
//! assert_eq!(log.error_count(), 1);
//! ```

mod error;
mod log;
mod message;
mod options;
mod words;

pub use error::LogError;
pub use log::Log;
pub use message::Message;
pub use options::LogOptions;
pub use words::{wordlist, wordlist_with};

// Layout layer re-exports.
pub use callout_text::{
    display_width, split_lines, table, uncolor, wraptext, LayoutError, Styled,
};
