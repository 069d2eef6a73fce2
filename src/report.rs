//! Rendering of lexer results for the command line
//!
//! Text layout follows the classic PIF / ST / errors report; JSON output is
//! a single document `{ "pif": [...], "symbols": [...] }`.

use crate::frontend::lexer::{LexicalError, Pif, SymbolTable};
use serde::Serialize;
use std::fmt::Write as _;

const RULE: &str = "==============================";

#[derive(Serialize)]
struct JsonReport<'a> {
    pif: &'a Pif,
    symbols: &'a SymbolTable,
}

/// PIF, symbol table and an empty error section as text tables
pub fn render_table(
    pif: &Pif,
    symbols: &SymbolTable,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{pif}");
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "{symbols}");
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "--- Lexical Errors ---");
    let _ = writeln!(out, "<No errors found>");
    let _ = writeln!(out, "{RULE}");
    out
}

/// PIF and symbol table as pretty-printed JSON
pub fn render_json(
    pif: &Pif,
    symbols: &SymbolTable,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { pif, symbols })
}

/// A lexical error with the offending source line and a caret under it
pub fn render_error(
    source: &str,
    err: &LexicalError,
) -> String {
    let mut out = format!(
        "Lexical Error: {} at line {}, col {}\n",
        err.reason, err.line, err.column
    );
    if let Some(line) = source.lines().nth(err.line.saturating_sub(1)) {
        let gutter = err.line.to_string();
        let _ = writeln!(out, "{gutter} | {line}");
        let _ = writeln!(
            out,
            "{} | {}^",
            " ".repeat(gutter.len()),
            " ".repeat(err.column.saturating_sub(1))
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::tokenize;

    #[test]
    fn test_table_contains_all_sections() {
        let (pif, symbols) = tokenize("SELECT total FROM orders;").unwrap();
        let text = render_table(&pif, &symbols);
        assert!(text.contains("--- Program Internal Form (PIF) ---"));
        assert!(text.contains("SELECT        | -1"));
        assert!(text.contains("ID            | 1"));
        assert!(text.contains("--- Symbol Table ---"));
        assert!(text.contains("1   | orders"));
        assert!(text.contains("<No errors found>"));
    }

    #[test]
    fn test_json_document() {
        let (pif, symbols) = tokenize("x == \"USA\"").unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&pif, &symbols).unwrap()).unwrap();
        assert_eq!(json["pif"][1]["kind"], "OP_EQ");
        assert_eq!(json["pif"][1]["reference"], -1);
        assert_eq!(json["pif"][2]["reference"], 1);
        assert_eq!(json["symbols"][1]["text"], "\"USA\"");
    }

    #[test]
    fn test_error_points_at_column() {
        let source = "SELECT a\nFROM t $ x";
        let err = tokenize(source).unwrap_err();
        let text = render_error(source, &err);
        assert!(text.starts_with("Lexical Error: Unexpected character '$' at line 2, col 8"));
        assert!(text.contains("2 | FROM t $ x"));
        assert!(text.contains("  |        ^"));
    }
}
