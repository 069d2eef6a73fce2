//! Lexer module
//!
//! Turns MiniFilter source text into the Program Internal Form (PIF) plus
//! the symbol table interning every identifier and constant it references.

pub mod pif;
pub mod rules;
pub mod symbols;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use pif::{Pif, PifEntry, NO_SYMBOL};
pub use symbols::{Symbol, SymbolId, SymbolTable};
pub use tokenizer::Lexer;
pub use tokens::{LexErrorReason, Lexeme, LexicalError, SymbolClass, TokenKind};

use crate::util::config::LexerConfig;

/// Tokenize source code with the default lexer configuration
pub fn tokenize(source: &str) -> Result<(Pif, SymbolTable), LexicalError> {
    tokenize_with(source, &LexerConfig::default())
}

/// Tokenize source code
///
/// Each call starts from a fresh symbol table. Fails on the first character
/// no rule accepts; nothing built up to that point is returned.
pub fn tokenize_with(
    source: &str,
    config: &LexerConfig,
) -> Result<(Pif, SymbolTable), LexicalError> {
    tracing::debug!(
        bytes = source.len(),
        line_comments = config.line_comments,
        "lexing started"
    );

    let mut pif = Pif::new();
    let mut symbols = SymbolTable::new();

    for lexeme in Lexer::new(source, config) {
        let lexeme = lexeme.inspect_err(|err| {
            tracing::debug!(offset = err.position, "lexing failed: {}", err.reason);
        })?;
        let entry = match lexeme.kind.symbol_class() {
            Some(class) => {
                PifEntry::symbolic(lexeme.kind, symbols.lookup_or_insert(class, lexeme.text))
            }
            None => PifEntry::fixed(lexeme.kind),
        };
        log_token(&lexeme, &entry);
        pif.push(entry);
    }

    tracing::debug!(
        tokens = pif.len(),
        symbols = symbols.len(),
        "lexing complete"
    );
    Ok((pif, symbols))
}

/// Log a token for debugging
fn log_token(
    lexeme: &Lexeme<'_>,
    entry: &PifEntry,
) {
    tracing::trace!(
        kind = lexeme.kind.name(),
        reference = entry.reference(),
        at = %lexeme.span.start,
        "token {}",
        lexeme.text
    );
}
