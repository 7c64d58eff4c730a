// domainr-lib/tests/integration.rs

//! Integration tests for the request/response pipeline through the public API

use domainr_lib::{
    build_request, format_results, interpret, resolve_credential, ConfiguredCredentials,
    Credential, DomainrError, Filters, Mode, QueryIntent, ResultPayload, MASHAPE_BASE_URL,
};

fn intent(terms: &[&str], mode: Mode, filters: Filters) -> QueryIntent {
    QueryIntent::new(terms.iter().map(|t| t.to_string()).collect(), mode, filters)
}

/// Run interpret + format and render lines the way the CLI does (unstyled).
fn search_lines(body: &[u8], filters: Filters) -> Vec<String> {
    let intent = intent(&["foo"], Mode::Search, filters);
    match interpret(200, body, &intent).unwrap() {
        ResultPayload::Search(results) => format_results(&results, intent.filters())
            .iter()
            .map(|line| line.to_string())
            .collect(),
        other => panic!("expected search payload, got {:?}", other),
    }
}

const FOO_BAR: &[u8] = br#"{"results":[
    {"domain":"foo.com","availability":"available"},
    {"domain":"bar.io","availability":"taken"}
]}"#;

#[test]
fn test_q_is_space_joined_terms() {
    let credential = Credential::ClientId("id".to_string());
    for terms in [vec!["one"], vec!["one", "two"], vec!["c", "b", "a", "b"]] {
        let request = build_request(&intent(&terms, Mode::Search, Filters::default()), &credential);
        assert_eq!(request.param("q"), Some(terms.join(" ").as_str()));
    }
}

#[test]
fn test_both_credentials_configured_targets_mashape_only() {
    let configured = ConfiguredCredentials {
        mashape_key: Some("key".to_string()),
        client_id: Some("id".to_string()),
        source: "domainr.toml".to_string(),
    };
    let credential = resolve_credential(&configured).unwrap();
    let request = build_request(&intent(&["foo"], Mode::Search, Filters::default()), &credential);

    assert_eq!(request.base_url, MASHAPE_BASE_URL);
    assert_eq!(request.param("mashape-key"), Some("key"));
    assert!(request.param("client_id").is_none());
    assert!(!request.url().unwrap().as_str().contains("client_id"));
}

#[test]
fn test_no_filters_output() {
    let lines = search_lines(FOO_BAR, Filters::default());
    assert_eq!(lines, vec!["\u{2713}  foo.com", "\u{2717}  bar.io"]);
}

#[test]
fn test_available_only_output() {
    let lines = search_lines(FOO_BAR, Filters::default().with_available_only(true));
    assert_eq!(lines, vec!["\u{2713}  foo.com"]);
    assert!(lines.iter().all(|line| !line.contains("bar.io")));
}

#[test]
fn test_tld_only_output() {
    let body = br#"{"results":[
        {"domain":"foo.com","availability":"available"},
        {"domain":"foo.io","availability":"available"}
    ]}"#;
    let lines = search_lines(body, Filters::default().with_tld_only(true));
    assert_eq!(lines, vec!["\u{2713}  foo.com"]);
}

#[test]
fn test_ascii_output() {
    let lines = search_lines(FOO_BAR, Filters::default().with_ascii(true));
    assert_eq!(lines, vec!["A  foo.com", "X  bar.io"]);
}

#[test]
fn test_error_status_message() {
    let err = interpret(
        404,
        b"not found",
        &intent(&["foo"], Mode::Search, Filters::default()),
    )
    .unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "Error: Status 404; Response: not found");
}

#[test]
fn test_all_filtered_out_is_empty() {
    let body = br#"{"results":[{"domain":"bar.io","availability":"taken"}]}"#;
    let lines = search_lines(body, Filters::default().with_available_only(true));
    assert!(lines.is_empty());
}

#[test]
fn test_info_mode_ignores_filters() {
    let body = br#"{"domain":"bar.io","availability":"taken","register_url":"https://example.test"}"#;
    let filters = Filters::default()
        .with_ascii(true)
        .with_available_only(true)
        .with_tld_only(true);

    let payload = interpret(200, body, &intent(&["bar.io"], Mode::Info, filters)).unwrap();
    let expected: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(payload, ResultPayload::Info(expected));
}

#[test]
fn test_missing_credentials() {
    let err = resolve_credential(&ConfiguredCredentials {
        mashape_key: Some(String::new()),
        client_id: None,
        source: "/home/me/.domainr.toml".to_string(),
    })
    .unwrap_err();

    assert!(!err.is_recoverable());
    assert!(matches!(err, DomainrError::NoCredentialConfigured { .. }));
    assert!(err.to_string().contains("/home/me/.domainr.toml"));
}
