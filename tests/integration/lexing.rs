//! Integration tests for the library entry points

use minifilter::util::config::LexerConfig;
use minifilter::{lex_file, lex_source, tokenize, SymbolClass};
use std::fs;
use tempfile::TempDir;

const ORDERS_QUERY: &str = r#"
# Finds high-value, non-test orders from North
# America that are either flagged for review
# or have been returned.

SELECT
    order_id,
    customer_email,
    total_amount,
    order_status
FROM
    all_orders
WHERE
    (shipping_country == "USA" OR shipping_country == "Canada")
    AND
    (is_flagged_for_review == true OR order_status == "RETURNED")
    AND
    total_amount >= 1500.00
    AND
    is_test_order != false
    AND
    order_timestamp >= 1727740800;
"#;

fn with_comments() -> LexerConfig {
    LexerConfig {
        line_comments: true,
    }
}

#[test]
fn test_orders_query_with_comments() {
    let analysis = lex_source(ORDERS_QUERY.to_string(), &with_comments());
    let (pif, symbols) = analysis.result.unwrap();

    assert_eq!(pif.entries()[0].as_pair(), ("SELECT", -1));
    assert_eq!(pif.entries().last().unwrap().as_pair(), ("SEMICOLON", -1));

    let expected = [
        (SymbolClass::Identifier, "order_id"),
        (SymbolClass::Identifier, "customer_email"),
        (SymbolClass::Identifier, "total_amount"),
        (SymbolClass::Identifier, "order_status"),
        (SymbolClass::Identifier, "all_orders"),
        (SymbolClass::Identifier, "shipping_country"),
        (SymbolClass::String, "\"USA\""),
        (SymbolClass::String, "\"Canada\""),
        (SymbolClass::Identifier, "is_flagged_for_review"),
        (SymbolClass::String, "\"RETURNED\""),
        (SymbolClass::Number, "1500.00"),
        (SymbolClass::Identifier, "is_test_order"),
        (SymbolClass::Identifier, "order_timestamp"),
        (SymbolClass::Number, "1727740800"),
    ];
    assert_eq!(symbols.len(), expected.len());
    for (index, (class, text)) in expected.iter().enumerate() {
        assert_eq!(
            symbols.id_of(*class, text).map(|id| id.index()),
            Some(index),
            "{text}"
        );
    }
}

#[test]
fn test_orders_query_without_comments_fails_on_hash() {
    let err = tokenize(ORDERS_QUERY).unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 1);
}

#[test]
fn test_lex_file_reads_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("query.mf");
    fs::write(&path, "SELECT x FROM t;").unwrap();

    let analysis = lex_file(&path, &LexerConfig::default()).unwrap();
    assert_eq!(analysis.source, "SELECT x FROM t;");
    let (pif, _) = analysis.result.unwrap();
    assert_eq!(pif.len(), 5);
}

#[test]
fn test_lex_file_keeps_lexical_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.mf");
    fs::write(&path, "SELECT @").unwrap();

    let analysis = lex_file(&path, &LexerConfig::default()).unwrap();
    assert_eq!(analysis.result.unwrap_err().position, 7);
}

#[test]
fn test_lex_file_missing() {
    let dir = TempDir::new().unwrap();
    let err = lex_file(&dir.path().join("missing.mf"), &LexerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
