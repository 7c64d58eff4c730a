//! Result formatting.
//!
//! Applies the display filters to search results and pairs each survivor
//! with its status symbol. Styling is left to the presentation layer; a
//! `DisplayLine` knows whether its name should be highlighted.

use crate::types::{DomainResult, Filters};
use std::fmt;

/// Suffixes accepted by the top-level-domain filter.
pub const TOP_LEVEL_SUFFIXES: [&str; 3] = [".com", ".net", ".org"];

/// Status symbol shown before a domain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Positive,
    Negative,
}

impl Symbol {
    /// The glyph for this symbol: `✓`/`✗`, or `A`/`X` in ASCII mode.
    pub fn glyph(self, ascii_only: bool) -> &'static str {
        match (self, ascii_only) {
            (Symbol::Positive, false) => "\u{2713}",
            (Symbol::Positive, true) => "A",
            (Symbol::Negative, false) => "\u{2717}",
            (Symbol::Negative, true) => "X",
        }
    }
}

/// One surviving search result, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub symbol: Symbol,
    /// Resolved glyph (respects ASCII mode)
    pub glyph: &'static str,
    /// Raw domain name
    pub name: String,
    /// Whether the name gets highlighted (available entries only)
    pub highlighted: bool,
}

impl DisplayLine {
    fn for_result(result: &DomainResult, ascii_only: bool) -> Self {
        let symbol = if result.availability.is_available() {
            Symbol::Positive
        } else {
            Symbol::Negative
        };

        Self {
            symbol,
            glyph: symbol.glyph(ascii_only),
            name: result.domain.clone(),
            highlighted: symbol == Symbol::Positive,
        }
    }
}

/// Unstyled `"<symbol>  <name>"`.
impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.glyph, self.name)
    }
}

/// Whether `domain` ends in `.com`, `.net` or `.org` (case-sensitive).
pub fn is_top_level(domain: &str) -> bool {
    TOP_LEVEL_SUFFIXES
        .iter()
        .any(|suffix| domain.ends_with(suffix))
}

/// Filter and annotate search results, preserving their order.
///
/// Each entry is classified first, then checked against the
/// available-only filter and the top-level filter independently; an entry
/// survives only if it passes every active filter. The TLD check looks at
/// the raw domain string.
pub fn format_results(results: &[DomainResult], filters: Filters) -> Vec<DisplayLine> {
    results
        .iter()
        .filter_map(|result| {
            let line = DisplayLine::for_result(result, filters.ascii_only);

            let passes_availability = !filters.available_only || line.symbol == Symbol::Positive;
            let passes_tld = !filters.tld_only || is_top_level(&result.domain);

            (passes_availability && passes_tld).then_some(line)
        })
        .collect()
}
