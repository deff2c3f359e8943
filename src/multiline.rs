//! # multiline.rs - Structured rendering of multi-line values
//!
//! A value containing newlines is treated as a block of `field: value`
//! records under a `name = ---` header. Lines without a colon are plain
//! structure (separators, continuation text) and are right-aligned without
//! color; lines with a colon get an uppercased, column-aligned field name
//! and a value rendered through the field rule table, falling back to the
//! general highlighter.

use std::io::{self, Write};

use crate::highlight::write_highlighted;
use crate::rules::{BRIGHT_WHITE, FieldAction, field_action};

/// Column width for the uppercased field name. Longer names overflow it
/// rather than being truncated.
const FIELD_CELL: usize = 11;

/// Extra columns past the name column for the body indent.
const BODY_INDENT: usize = 4;

/// Render one multi-line entry: header line, then one formatted line per
/// physical line of `value`.
///
/// The header prints `name` right-aligned in `name_width` columns in bright
/// white, followed by a plain ` = ---` marker. A trailing newline in the
/// value does not produce a final empty line; interior empty lines render
/// as bare indentation.
pub fn write_multiline<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    value: &str,
    name_width: usize,
) -> io::Result<()> {
    let padded = format!("{:>width$}", name, width = name_width);
    writeln!(out, "{} = ---", BRIGHT_WHITE.apply_to(&padded))?;

    if value.is_empty() {
        return Ok(());
    }

    let indent = name_width + BODY_INDENT;
    let body = value.strip_suffix('\n').unwrap_or(value);

    for line in body.split('\n') {
        match line.split_once(':') {
            None => writeln!(out, "{:>width$}", line, width = indent)?,
            Some((field, rest)) => {
                let field = field.to_ascii_uppercase();
                let remainder = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());

                // Field cell nested in the indent, then the separator
                let cell = format!("{:>width$}", field, width = FIELD_CELL);
                write!(out, "{:>width$} = ", cell, width = indent)?;

                match field_action(&field, remainder) {
                    Some(FieldAction::Solid(style)) => {
                        writeln!(out, "{}", style.apply_to(remainder))?;
                    }
                    Some(FieldAction::Replace(replacement, styles)) => {
                        let mut buf = [0u8; 4];
                        for (ch, style) in replacement.chars().zip(styles.iter()) {
                            write!(out, "{}", style.apply_to(ch.encode_utf8(&mut buf)))?;
                        }
                        out.write_all(b"\n")?;
                    }
                    None => {
                        write_highlighted(out, remainder)?;
                        out.write_all(b"\n")?;
                    }
                }
            }
        }
    }

    Ok(())
}
