//! # report.rs - Environment report driver
//!
//! Collects the process environment, sorts it by name, and renders the full
//! report: banner, one block per entry (flat values inline, values with
//! newlines through the multi-line formatter), and a closing blue rule.

use std::io::{self, Write};

use crate::highlight::write_highlighted;
use crate::multiline::write_multiline;
use crate::rules::{BANNER, BOLD_WHITE};
use crate::style::Style;

#[cfg(debug_assertions)]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        println!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
macro_rules! debug_println {
    ($($arg:tt)*) => {};
}

/// One name/value pair from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: String,
}

/// Read the process environment into entries sorted by name (byte order,
/// which ranks a strict prefix before its extensions). Names or values that
/// are not valid UTF-8 are decoded lossily and still shown.
pub fn collect_entries() -> Vec<Entry> {
    let mut entries: Vec<Entry> = std::env::vars_os()
        .map(|(name, value)| {
            let name = match name.into_string() {
                Ok(name) => name,
                Err(raw) => {
                    debug_println!("lossy decode of variable name {:?}", raw);
                    raw.to_string_lossy().into_owned()
                }
            };
            let value = match value.into_string() {
                Ok(value) => value,
                Err(raw) => {
                    debug_println!("lossy decode of value for {}", name);
                    raw.to_string_lossy().into_owned()
                }
            };
            Entry { name, value }
        })
        .collect();

    entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Widest entry name, in characters. Zero for an empty environment.
pub fn name_column_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Write the full report for `entries` (expected sorted; [`collect_entries`]
/// provides that). The frame is always produced, even for an empty slice.
pub fn write_report<W: Write + ?Sized>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    let width = name_column_width(entries);

    writeln!(out)?;
    writeln!(out, "{}", BANNER.apply_to("  Environment Variables"))?;

    for entry in entries {
        if entry.value.contains('\n') {
            write_multiline(out, &entry.name, &entry.value, width)?;
        } else {
            let padded = format!("{:>w$}", entry.name, w = width);
            write!(out, "{} = ", BOLD_WHITE.apply_to(&padded))?;
            write_highlighted(out, &entry.value)?;
            out.write_all(b"\n")?;
        }
    }

    // Erase-line under a blue background paints a full-width closing rule
    writeln!(out, "{}", Style::new().on_blue().apply_to("\x1b[2K"))?;

    Ok(())
}
