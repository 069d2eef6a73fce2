//! MiniFilter lexical analyzer
//!
//! Scans MiniFilter queries into the Program Internal Form (PIF): one
//! `(token kind, reference)` pair per token, where identifiers and constants
//! reference entries of a symbol table built during the same run.
//!
//! # Example
//!
//! ```
//! use minifilter::tokenize;
//!
//! let (pif, symbols) = tokenize("SELECT order_id FROM orders").unwrap();
//! assert_eq!(
//!     pif.to_pairs(),
//!     vec![("SELECT", -1), ("ID", 0), ("FROM", -1), ("ID", 1)]
//! );
//! assert_eq!(symbols.len(), 2);
//! ```

#![doc(html_root_url = "https://docs.rs/minifilter")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod report;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::lexer::{
    tokenize, tokenize_with, LexicalError, Pif, PifEntry, SymbolClass, SymbolId, SymbolTable,
    TokenKind,
};

use std::fs;
use std::path::Path;
use tracing::debug;
use util::config::LexerConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "MiniFilter";

/// Source text together with its lexing outcome
#[derive(Debug)]
pub struct Analysis {
    pub source: String,
    pub result: std::result::Result<(Pif, SymbolTable), LexicalError>,
}

/// Read a file and tokenize it
///
/// I/O failures are returned as `Err`; a lexical error is part of the
/// returned [`Analysis`] so that the caller can render it against the source.
pub fn lex_file(
    path: &Path,
    config: &LexerConfig,
) -> Result<Analysis> {
    debug!(path = %path.display(), "reading source file");
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(lex_source(source, config))
}

/// Tokenize source text already in memory
pub fn lex_source(
    source: String,
    config: &LexerConfig,
) -> Analysis {
    let result = tokenize_with(&source, config);
    Analysis { source, result }
}
