//! Display logic for the domainr CLI.
//!
//! Colors the formatter's lines, applies the empty-result fallback and
//! renders Info records. Uses only the `console` crate.

use console::style;
use domainr_lib::{format_results, DisplayLine, DomainrError, Filters, ResultPayload, Symbol};

/// Printed instead of an empty result list.
pub const NO_RESULTS: &str = "No results found\n";

/// Render a successful payload as the text to print.
pub fn render_payload(payload: &ResultPayload, filters: Filters) -> Result<String, DomainrError> {
    match payload {
        ResultPayload::Search(results) => Ok(render_lines(&format_results(results, filters))),
        ResultPayload::Info(record) => Ok(serde_json::to_string_pretty(record)?),
    }
}

/// Join styled lines with newlines, or fall back to [`NO_RESULTS`].
pub fn render_lines(lines: &[DisplayLine]) -> String {
    if lines.is_empty() {
        return NO_RESULTS.to_string();
    }

    lines.iter().map(render_line).collect::<Vec<_>>().join("\n")
}

/// `"<symbol>  <name>"` with green/red symbols and a bold blue name for
/// available domains.
fn render_line(line: &DisplayLine) -> String {
    let symbol = match line.symbol {
        Symbol::Positive => style(line.glyph).green(),
        Symbol::Negative => style(line.glyph).red(),
    };

    if line.highlighted {
        format!("{}  {}", symbol, style(&line.name).blue().bold())
    } else {
        format!("{}  {}", symbol, line.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use domainr_lib::{Availability, DomainResult};

    fn results() -> Vec<DomainResult> {
        vec![
            DomainResult::new("foo.com", Availability::Available),
            DomainResult::new("bar.io", Availability::Other("taken".to_string())),
        ]
    }

    #[test]
    fn test_render_search_lines() {
        let output = render_payload(&ResultPayload::Search(results()), Filters::default()).unwrap();
        assert_eq!(strip_ansi_codes(&output), "\u{2713}  foo.com\n\u{2717}  bar.io");
    }

    #[test]
    fn test_render_ascii() {
        let output = render_payload(
            &ResultPayload::Search(results()),
            Filters::default().with_ascii(true),
        )
        .unwrap();
        assert_eq!(strip_ansi_codes(&output), "A  foo.com\nX  bar.io");
    }

    #[test]
    fn test_empty_survivors_fall_back() {
        let output = render_payload(
            &ResultPayload::Search(vec![DomainResult::new(
                "bar.io",
                Availability::Other("taken".to_string()),
            )]),
            Filters::default().with_available_only(true),
        )
        .unwrap();
        assert_eq!(output, "No results found\n");

        let output = render_payload(&ResultPayload::Search(vec![]), Filters::default()).unwrap();
        assert_eq!(output, NO_RESULTS);
    }

    #[test]
    fn test_render_info_record() {
        let record = serde_json::json!({"domain": "foo.com", "availability": "taken"});
        let output = render_payload(
            &ResultPayload::Info(record.clone()),
            Filters::default().with_available_only(true),
        )
        .unwrap();

        let reparsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(reparsed, record);
    }
}
