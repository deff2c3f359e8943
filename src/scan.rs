//! # scan.rs - Substring and IPv4 scanning primitives
//!
//! The matchers here are the leaf layer of the highlighter: a structural
//! IPv4 recognizer and ASCII-case-insensitive literal searches. They are
//! total functions; "not found" is `None`, never an error.
//!
//! All needles are ASCII, so every reported span falls on UTF-8 character
//! boundaries and can be sliced out of the haystack directly.

/// Half-open byte range `[start, end)` of a match within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Length of the matched text in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the first IPv4 literal in `text`.
///
/// A candidate is a maximal run of digits and dots starting at a digit. It
/// matches when it contains exactly three dots and splits into exactly four
/// non-empty tokens, each a valid octet under lenient `atoi`-style parsing.
/// A rejected candidate is skipped in full, so no match is ever reported
/// from the tail of an invalid run (`5.1.2.3.4` yields nothing).
pub fn find_ipv4(text: &str) -> Option<Span> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        // Maximal [0-9.] run anchored at this digit
        let mut j = i;
        while j < bytes.len() && (bytes[j].is_ascii_digit() || bytes[j] == b'.') {
            j += 1;
        }

        let dots = bytes[i..j].iter().filter(|&&b| b == b'.').count();
        if dots == 3 && is_dotted_quad(&text[i..j]) {
            return Some(Span { start: i, end: j });
        }

        // Skip the whole rejected run, not just its first byte
        i = j;
    }

    None
}

/// Validate a three-dot run as four in-range octets.
fn is_dotted_quad(run: &str) -> bool {
    let mut tokens = 0;
    for token in run.split('.').filter(|t| !t.is_empty()) {
        if lenient_octet(token).is_none() {
            return false;
        }
        tokens += 1;
    }
    tokens == 4
}

/// Parse an octet the way `atoi` would: take the leading digits, ignore the
/// rest, and treat a missing digit prefix as 0. Rejects values above 255.
/// The looseness is part of the observable contract and stays.
fn lenient_octet(token: &str) -> Option<u8> {
    let mut value: u32 = 0;
    for b in token.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + u32::from(b - b'0');
        if value > 255 {
            return None;
        }
    }
    Some(value as u8)
}

/// Find the first ASCII-case-insensitive occurrence of `literal` in `text`.
/// An empty literal matches at offset 0.
pub fn find_literal_ci(text: &str, literal: &str) -> Option<Span> {
    if literal.is_empty() {
        return Some(Span { start: 0, end: 0 });
    }

    let haystack = text.as_bytes();
    let needle = literal.as_bytes();
    if needle.len() > haystack.len() {
        return None;
    }

    for start in 0..=haystack.len() - needle.len() {
        if haystack[start..start + needle.len()].eq_ignore_ascii_case(needle) {
            return Some(Span {
                start,
                end: start + needle.len(),
            });
        }
    }

    None
}

/// ASCII-case-insensitive prefix test.
pub fn starts_with_ci(text: &str, prefix: &str) -> bool {
    let needle = prefix.as_bytes();
    let haystack = text.as_bytes();
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}
