//! # rules.rs - Fixed colorization rule tables
//!
//! All coloring decisions live here as static data: a named palette, the
//! highlight rule table the value scanner walks in declaration order, and
//! the field rule table for `field: value` lines of multi-line records.
//! The tables are compiled in and never change at runtime, which is what
//! gives the leftmost/first-declared match semantics a stable meaning.

use crate::scan::starts_with_ci;
use crate::style::Style;

// Named palette, shared by the rule tables and the report frame.
pub const BRIGHT_WHITE: Style = Style::new().white().bright();
pub const BOLD_WHITE: Style = Style::new().white().bold();
pub const BRIGHT_GREEN: Style = Style::new().green().bright();
pub const GREEN: Style = Style::new().green();
pub const BOLD_RED: Style = Style::new().red().bold();
pub const BOLD_BRIGHT_BLUE: Style = Style::new().blue().bright().bold();
pub const BRIGHT_YELLOW: Style = Style::new().yellow().bright();
pub const BRIGHT_RED: Style = Style::new().red().bright();
pub const BRIGHT_CYAN: Style = Style::new().cyan().bright();
pub const ORANGE: Style = Style::new().fixed(202);
pub const BANNER: Style = Style::new().white().bright().on_blue();

/// How a highlight rule locates its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    /// Structural IPv4 recognizer
    Ipv4,
    /// ASCII-case-insensitive literal substring
    Literal(&'static str),
}

/// How a matched substring is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// One style across the whole match
    Solid(Style),
    /// One style per character, cycling through [`RAINBOW`]
    Rainbow,
}

/// One row of the highlight table.
#[derive(Debug, Clone, Copy)]
pub struct HighlightRule {
    pub matcher: MatcherKind,
    pub paint: Paint,
}

/// Paint of the IPv4 rule, shared with the highlighter's IPv4-only fast
/// path so the two stay in agreement.
pub const IPV4_PAINT: Paint = Paint::Solid(BRIGHT_GREEN);

/// The highlight table. Order is the tie-break: when two rules match at the
/// same offset, the row declared first wins.
pub static HIGHLIGHT_RULES: &[HighlightRule] = &[
    HighlightRule {
        matcher: MatcherKind::Ipv4,
        paint: IPV4_PAINT,
    },
    HighlightRule {
        matcher: MatcherKind::Literal("truecolor"),
        paint: Paint::Rainbow,
    },
    HighlightRule {
        matcher: MatcherKind::Literal("256color"),
        paint: Paint::Rainbow,
    },
    HighlightRule {
        matcher: MatcherKind::Literal("ubuntu"),
        paint: Paint::Solid(ORANGE),
    },
    HighlightRule {
        matcher: MatcherKind::Literal("redhat"),
        paint: Paint::Solid(BRIGHT_RED),
    },
    HighlightRule {
        matcher: MatcherKind::Literal("fedora"),
        paint: Paint::Solid(BRIGHT_CYAN),
    },
    HighlightRule {
        matcher: MatcherKind::Literal("mint"),
        paint: Paint::Solid(BRIGHT_GREEN),
    },
    HighlightRule {
        matcher: MatcherKind::Literal("zorin"),
        paint: Paint::Solid(BOLD_WHITE),
    },
    HighlightRule {
        matcher: MatcherKind::Literal("wayland"),
        paint: Paint::Solid(BRIGHT_YELLOW),
    },
];

/// Per-character cycle used by [`Paint::Rainbow`]. Nine styles: "truecolor"
/// consumes all nine, "256color" the first eight.
pub static RAINBOW: [Style; 9] = [
    Style::new().red(),
    Style::new().green(),
    Style::new().yellow(),
    Style::new().cyan(),
    Style::new().blue().bright(),
    Style::new().magenta(),
    Style::new().green().bright(),
    Style::new().cyan().bright(),
    Style::new().green(),
];

/// Predicate of a field rule, evaluated against the uppercased field name
/// and the leading-whitespace-trimmed remainder of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPredicate {
    /// Uppercased field name equals this exactly
    FieldIs(&'static str),
    /// Remainder begins with this, case-insensitive
    ValueStartsWith(&'static str),
}

impl FieldPredicate {
    pub fn matches(&self, field: &str, remainder: &str) -> bool {
        match self {
            FieldPredicate::FieldIs(name) => field == *name,
            FieldPredicate::ValueStartsWith(prefix) => starts_with_ci(remainder, prefix),
        }
    }
}

/// Action of a field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    /// Paint the remainder with one style
    Solid(Style),
    /// Discard the remainder and emit fixed text, one style per character
    Replace(&'static str, &'static [Style]),
}

/// One row of the field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub predicate: FieldPredicate,
    pub action: FieldAction,
}

/// Styling of the fixed "USA" replacement: one style per letter.
pub static USA_STYLES: [Style; 3] = [BOLD_RED, BOLD_WHITE, BOLD_BRIGHT_BLUE];

/// The field table for `field: value` lines, in dispatch priority order.
/// Lines matching no row fall back to the value highlighter.
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        predicate: FieldPredicate::FieldIs("IP"),
        action: FieldAction::Solid(BRIGHT_GREEN),
    },
    FieldRule {
        predicate: FieldPredicate::FieldIs("ISP"),
        action: FieldAction::Solid(BOLD_WHITE),
    },
    FieldRule {
        predicate: FieldPredicate::ValueStartsWith("ok"),
        action: FieldAction::Solid(GREEN),
    },
    FieldRule {
        predicate: FieldPredicate::ValueStartsWith("us"),
        action: FieldAction::Replace("USA", &USA_STYLES),
    },
];

/// Look up the action for a field line, or `None` for the highlighter
/// fallback. `field` must already be uppercased.
pub fn field_action(field: &str, remainder: &str) -> Option<&'static FieldAction> {
    FIELD_RULES
        .iter()
        .find(|rule| rule.predicate.matches(field, remainder))
        .map(|rule| &rule.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_table_order() {
        // precedence order is part of the observable contract
        let kinds: Vec<MatcherKind> = HIGHLIGHT_RULES.iter().map(|r| r.matcher).collect();
        assert_eq!(
            kinds,
            vec![
                MatcherKind::Ipv4,
                MatcherKind::Literal("truecolor"),
                MatcherKind::Literal("256color"),
                MatcherKind::Literal("ubuntu"),
                MatcherKind::Literal("redhat"),
                MatcherKind::Literal("fedora"),
                MatcherKind::Literal("mint"),
                MatcherKind::Literal("zorin"),
                MatcherKind::Literal("wayland"),
            ]
        );
    }

    #[test]
    fn test_rainbow_codes() {
        let rendered: String = RAINBOW
            .iter()
            .map(|style| format!("{}", style.apply_to("x")))
            .collect();
        assert_eq!(
            rendered,
            "\x1b[31mx\x1b[0m\x1b[32mx\x1b[0m\x1b[33mx\x1b[0m\x1b[36mx\x1b[0m\
             \x1b[94mx\x1b[0m\x1b[35mx\x1b[0m\x1b[92mx\x1b[0m\x1b[96mx\x1b[0m\
             \x1b[32mx\x1b[0m"
        );
    }

    #[test]
    fn test_palette_codes() {
        assert_eq!(format!("{}", ORANGE.apply_to("u")), "\x1b[38;5;202mu\x1b[0m");
        assert_eq!(format!("{}", BOLD_WHITE.apply_to("z")), "\x1b[1;37mz\x1b[0m");
        assert_eq!(format!("{}", BANNER.apply_to("b")), "\x1b[97;44mb\x1b[0m");
    }

    #[test]
    fn test_field_action_exact_names() {
        assert_eq!(
            field_action("IP", "10.0.0.1"),
            Some(&FieldAction::Solid(BRIGHT_GREEN))
        );
        assert_eq!(
            field_action("ISP", "Example Networks"),
            Some(&FieldAction::Solid(BOLD_WHITE))
        );
        // dispatch sees uppercased names only; anything else is no match
        assert_eq!(field_action("Ip", "10.0.0.1"), None);
    }

    #[test]
    fn test_field_action_value_prefixes() {
        assert_eq!(
            field_action("STATUS", "OK, reachable"),
            Some(&FieldAction::Solid(GREEN))
        );
        assert_eq!(
            field_action("REGION", "us-east-1"),
            Some(&FieldAction::Replace("USA", &USA_STYLES))
        );
        assert_eq!(field_action("REGION", "eu-west-2"), None);
    }

    #[test]
    fn test_field_name_outranks_value_prefix() {
        // an IP field whose value happens to start with "us" stays an IP field
        assert_eq!(
            field_action("IP", "usable"),
            Some(&FieldAction::Solid(BRIGHT_GREEN))
        );
    }
}
