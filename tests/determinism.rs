use std::thread;

use catalog_search::{
    classify, prepare_search, to_query, IdentifierKind, QueryConfig, SearchEndpoint,
    MAX_QUERY_CHARS,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn request_url_round_trips_query_value(s in any::<String>()) {
        let endpoint = SearchEndpoint::default();
        if let Ok(request) = prepare_search(&s, &QueryConfig::default(), &endpoint) {
            let decoded: Vec<(String, String)> = request
                .url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            prop_assert_eq!(decoded, vec![("Ntt".to_string(), request.query.value.clone())]);
            prop_assert!(request.url.fragment().is_none());
        }
    }

    #[test]
    fn prepared_values_respect_cap(s in any::<String>()) {
        if let Ok(request) = prepare_search(&s, &QueryConfig::default(), &SearchEndpoint::default()) {
            prop_assert!(request.query.value.chars().count() <= MAX_QUERY_CHARS);
            prop_assert!(!request.query.value.is_empty());
        }
    }

    #[test]
    fn query_kind_is_the_classification_kind(s in "[0-9Xx -]{0,16}") {
        let q = to_query(&s, MAX_QUERY_CHARS);
        prop_assert_eq!(q.kind, classify(&s).kind());
        if q.kind != IdentifierKind::Free {
            prop_assert!(q.value.len() <= 13);
        }
    }
}

#[test]
fn concurrent_calls_agree() {
    let inputs = [
        "978-0-13-235088-4",
        "012345678X",
        "X123456789",
        "  The   Great Gatsby  ",
        "123456789",
    ];
    let expected: Vec<_> = inputs.iter().map(|s| to_query(s, MAX_QUERY_CHARS)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(move || {
                inputs
                    .iter()
                    .map(|s| to_query(s, MAX_QUERY_CHARS))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let got = handle.join().expect("worker thread");
        assert_eq!(got, expected);
    }
}
