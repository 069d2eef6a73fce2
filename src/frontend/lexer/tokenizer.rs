//! Tokenizer implementation
//! Rule-driven scanner producing lexemes with source spans

use super::rules::{RuleAction, RuleSet};
use crate::frontend::lexer::tokens::{Lexeme, LexicalError};
use crate::util::config::LexerConfig;
use crate::util::span::{Position, Span};

/// Main lexer structure
///
/// Yields one `Ok(Lexeme)` per token. On the first position no rule matches
/// it yields a single `Err` and then ends.
pub struct Lexer<'a> {
    source: &'a str,
    rules: &'static RuleSet,
    position: Position,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(
        source: &'a str,
        config: &LexerConfig,
    ) -> Self {
        Self {
            source,
            rules: RuleSet::for_config(config),
            position: Position::start(),
            failed: false,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Unscanned input
    fn rest(&self) -> &'a str {
        &self.source[self.position.offset..]
    }

    /// Generate next token
    pub fn next_lexeme(&mut self) -> Option<Result<Lexeme<'a>, LexicalError>> {
        if self.failed {
            return None;
        }

        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }

            let Some((action, len)) = self.rules.longest_match(rest) else {
                self.failed = true;
                return Some(Err(LexicalError::at(self.position, rest)));
            };

            let text = &rest[..len];
            let start = self.position;
            self.position.advance_over(text);

            match action {
                RuleAction::Skip => continue,
                RuleAction::Emit(kind) => {
                    return Some(Ok(Lexeme {
                        kind,
                        text,
                        span: Span::new(start, self.position),
                    }));
                }
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Lexeme<'a>, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
