//! # Callout Text - ANSI-Aware Terminal Text Layout
//!
//! `callout-text` provides the layout primitives behind the `callout` logging
//! facade: styled-string parsing, display-width measurement, word wrapping,
//! and fixed-width column tables. Every function treats ANSI escape codes as
//! zero-width: styling never changes where text wraps or how wide a padded
//! field ends up.
//!
//! ## Core Concepts
//!
//! - [`Styled`]: structured view of a string containing SGR escape sequences
//! - [`wraptext`] / [`split_lines`]: word wrapping by visible display columns
//! - [`table`]: row-packed column layout with per-column wrapping
//! - [`uncolor`] / [`display_width`]: stripping and measurement helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use callout_text::{table, uncolor, wraptext};
//!
//! // Wrapping counts visible columns only.
//! let wrapped = wraptext(11, "hello world foo bar").unwrap();
//! assert_eq!(wrapped, "hello world\nfoo bar");
//!
//! // Styled input makes the same break decisions.
//! let styled = wraptext(11, "\x1b[32mhello world foo bar\x1b[0m").unwrap();
//! assert_eq!(uncolor(&styled), "hello world\nfoo bar");
//!
//! // Cells wrap to their column and rows pack to the tallest cell.
//! let out = table(&[6, 4], &["hello world", "okay"]).unwrap();
//! assert_eq!(out, "hello |okay\nworld |    ");
//! ```

mod error;
mod styled;
mod table;
mod wrap;

pub use error::LayoutError;
pub use styled::{display_width, uncolor, Styled};
pub use table::table;
pub use wrap::{split_lines, wraptext};
