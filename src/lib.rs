//! # lib.rs - Core Library for rshowenv
//!
//! This library backs rshowenv (Rusty Showenv), a terminal utility that
//! prints the process environment sorted by name, with values rendered
//! through a fixed table of highlight rules.
//!
//! ## Architecture
//!
//! The library is organized into the following components:
//!
//! - **scan**: substring and IPv4 matching primitives
//! - **rules**: the static palette, highlight table, and field rule table
//! - **highlight**: the leftmost-match rendering loop for flat values
//! - **multiline**: structured `field: value` rendering for values with
//!   embedded newlines
//! - **report**: environment collection, sorting, and the report frame
//! - **style**: minimal ANSI style builder used by everything above
//!
//! ## Usage Example
//!
//! ```
//! use rshowenv::write_highlighted;
//!
//! let mut out = Vec::new();
//! write_highlighted(&mut out, "COLORTERM=truecolor").unwrap();
//! assert!(out.starts_with(b"COLORTERM="));
//! ```

pub mod highlight;
pub mod multiline;
pub mod report;
pub mod rules;
pub mod scan;
pub mod style;

pub use highlight::write_highlighted;
pub use multiline::write_multiline;
pub use report::{Entry, collect_entries, name_column_width, write_report};
pub use scan::{Span, find_ipv4, find_literal_ci, starts_with_ci};
pub use style::{Style, StyledText};
