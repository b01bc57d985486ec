use catalog_search::{
    prepare_search, prepare_selection_search, CanonicalError, CatalogSearchConfig,
    ConfigLoadError, EndpointError, PipelineError, QueryConfig, SearchEndpoint, SelectionError,
};

#[test]
fn blank_typed_query_is_rejected() {
    let result = prepare_search(
        "\u{00A0}\u{2003}\n",
        &QueryConfig::default(),
        &SearchEndpoint::default(),
    );
    assert_eq!(result, Err(PipelineError::EmptyQuery));
}

#[test]
fn blank_selection_is_rejected_before_classification() {
    let result =
        prepare_selection_search("\t\t", &QueryConfig::default(), &SearchEndpoint::default());
    assert_eq!(result, Err(PipelineError::Selection(SelectionError::Empty)));
}

#[test]
fn punctuation_only_input_is_still_a_search() {
    // Only whitespace counts as empty; punctuation is a legitimate query.
    let request = prepare_search(" -- ", &QueryConfig::default(), &SearchEndpoint::default())
        .expect("punctuation is searchable");
    assert_eq!(request.query.value, "--");
}

#[test]
fn pipeline_errors_have_messages() {
    assert_eq!(
        PipelineError::EmptyQuery.to_string(),
        "search text is empty after normalization"
    );
    assert_eq!(
        PipelineError::from(SelectionError::Empty).to_string(),
        "selection rejected: selected text is empty"
    );
}

#[test]
fn endpoint_errors_surface_through_config() {
    let yaml = r#"
version: "1.0"
endpoint:
  base_url: "https://catalog.example.org/search"
  query_param: ""
"#;
    let result = CatalogSearchConfig::from_yaml(yaml);
    assert!(matches!(
        result,
        Err(ConfigLoadError::Endpoint(EndpointError::EmptyQueryParam))
    ));
}

#[test]
fn limit_errors_surface_through_config() {
    let yaml = r#"
version: "1.0"
limits:
  max_query_chars: 300
  max_selection_chars: 200
"#;
    let result = CatalogSearchConfig::from_yaml(yaml);
    assert!(matches!(
        result,
        Err(ConfigLoadError::Limits(CanonicalError::InvalidConfig(_)))
    ));
}

#[test]
fn relative_base_url_is_invalid() {
    let result = SearchEndpoint::new("/search.jsp", "Ntt");
    assert!(matches!(result, Err(EndpointError::InvalidUrl { .. })));
}
