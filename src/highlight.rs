//! # highlight.rs - Value highlighting engine
//!
//! Renders a flat value by repeatedly finding the earliest rule match in the
//! remaining text, writing the text before it verbatim, painting the match,
//! and continuing past it. Ties at the same offset go to the rule declared
//! first in [`HIGHLIGHT_RULES`](crate::rules::HIGHLIGHT_RULES).
//!
//! A fast path handles the common case where none of the literal tokens
//! occur anywhere in the value, leaving IPv4 as the only matcher worth
//! running. Both paths produce identical bytes; the unit tests compare them
//! over a mixed corpus to keep it that way.

use std::io::{self, Write};

use crate::rules::{HIGHLIGHT_RULES, HighlightRule, IPV4_PAINT, MatcherKind, Paint, RAINBOW};
use crate::scan::{Span, find_ipv4, find_literal_ci};

/// The earliest rule match in a piece of text.
struct RuleMatch {
    span: Span,
    rule: &'static HighlightRule,
}

/// Scan every rule against `text` and keep the match with the smallest
/// start offset. On equal offsets the earlier table row wins, so a later
/// rule only displaces the current best when it starts strictly sooner.
fn next_match(text: &str) -> Option<RuleMatch> {
    let mut best: Option<RuleMatch> = None;

    for rule in HIGHLIGHT_RULES {
        let found = match rule.matcher {
            MatcherKind::Ipv4 => find_ipv4(text),
            MatcherKind::Literal(literal) => find_literal_ci(text, literal),
        };
        let Some(span) = found else { continue };

        match &best {
            Some(current) if current.span.start <= span.start => {}
            _ => best = Some(RuleMatch { span, rule }),
        }
    }

    best
}

/// Write `value` to `out` with all rule matches painted.
///
/// Text outside matches is reproduced verbatim, in order; matched text keeps
/// its original casing and only gains color. Total for any input, including
/// the empty string. Errors are I/O errors from the sink only.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// rshowenv::write_highlighted(&mut out, "server 10.0.0.1 is up").unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "server \x1b[92m10.0.0.1\x1b[0m is up"
/// );
/// ```
pub fn write_highlighted<W: Write + ?Sized>(out: &mut W, value: &str) -> io::Result<()> {
    if !has_literal_trigger(value) {
        return write_ipv4_only(out, value);
    }
    write_general(out, value)
}

/// True when any literal rule occurs anywhere in `value`.
fn has_literal_trigger(value: &str) -> bool {
    HIGHLIGHT_RULES.iter().any(|rule| match rule.matcher {
        MatcherKind::Literal(literal) => find_literal_ci(value, literal).is_some(),
        MatcherKind::Ipv4 => false,
    })
}

/// Fast path: with no literal anywhere in the value, only the IPv4 matcher
/// can fire, so the per-iteration rule sweep collapses to one search.
fn write_ipv4_only<W: Write + ?Sized>(out: &mut W, value: &str) -> io::Result<()> {
    let mut rest = value;
    while let Some(span) = find_ipv4(rest) {
        out.write_all(rest[..span.start].as_bytes())?;
        write_paint(out, &rest[span.start..span.end], &IPV4_PAINT)?;
        rest = &rest[span.end..];
    }
    out.write_all(rest.as_bytes())
}

/// General path: full rule sweep per iteration.
fn write_general<W: Write + ?Sized>(out: &mut W, value: &str) -> io::Result<()> {
    let mut rest = value;
    while !rest.is_empty() {
        let Some(m) = next_match(rest) else {
            out.write_all(rest.as_bytes())?;
            break;
        };

        out.write_all(rest[..m.span.start].as_bytes())?;
        write_paint(out, &rest[m.span.start..m.span.end], &m.rule.paint)?;
        rest = &rest[m.span.end..];
    }
    Ok(())
}

/// Paint one matched substring: a single styled span, or one styled span
/// per character cycling through the rainbow.
fn write_paint<W: Write + ?Sized>(out: &mut W, text: &str, paint: &Paint) -> io::Result<()> {
    match paint {
        Paint::Solid(style) => write!(out, "{}", style.apply_to(text)),
        Paint::Rainbow => {
            let mut buf = [0u8; 4];
            for (ch, style) in text.chars().zip(RAINBOW.iter().cycle()) {
                write!(out, "{}", style.apply_to(ch.encode_utf8(&mut buf)))?;
            }
            Ok(())
        }
    }
}
