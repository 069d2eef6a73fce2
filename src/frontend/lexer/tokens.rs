//! Token types

use crate::util::span::{Position, Span};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why no lexical rule matched at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorReason {
    /// A character outside the MiniFilter alphabet
    UnexpectedChar(char),
    /// A `"` with no closing quote before end of input
    UnterminatedString,
}

impl fmt::Display for LexErrorReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            LexErrorReason::UnexpectedChar(ch) => write!(f, "Unexpected character '{}'", ch),
            LexErrorReason::UnterminatedString => write!(f, "Unterminated string constant"),
        }
    }
}

/// Lexer error
///
/// Raised at the first position where no rule matches. Tokenization stops
/// there; no partial output is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at line {line}, col {column} (offset {position}): `{context}`")]
pub struct LexicalError {
    /// Byte offset of the offending character
    pub position: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Remaining text of the line starting at `position`, truncated
    pub context: String,
    pub reason: LexErrorReason,
}

/// Longest snippet kept in [`LexicalError::context`], in characters
const CONTEXT_CHARS: usize = 24;

impl LexicalError {
    /// Build the error for a failed match at `at`, where `rest` is the unscanned input
    pub(crate) fn at(
        at: Position,
        rest: &str,
    ) -> Self {
        let reason = match rest.chars().next() {
            Some('"') => LexErrorReason::UnterminatedString,
            Some(ch) => LexErrorReason::UnexpectedChar(ch),
            None => LexErrorReason::UnexpectedChar('\0'),
        };
        let line_rest = rest.split('\n').next().unwrap_or(rest);
        let context = line_rest
            .trim_end_matches('\r')
            .chars()
            .take(CONTEXT_CHARS)
            .collect();

        Self {
            position: at.offset,
            line: at.line,
            column: at.column,
            context,
            reason,
        }
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Select,
    From,
    Where,
    And,
    Or,
    True,
    False,

    // Constants
    Number,
    String,

    // Identifiers
    Id,

    // Operators
    OpEq,
    OpNeq,
    OpGte,
    OpLte,
    OpGt,
    OpLt,
    OpMul,

    // Delimiters
    Comma,
    LParen,
    RParen,
    Semicolon,
}

impl TokenKind {
    /// Every token kind, in rule priority order
    pub const ALL: [TokenKind; 21] = [
        TokenKind::Select,
        TokenKind::From,
        TokenKind::Where,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::True,
        TokenKind::False,
        TokenKind::OpEq,
        TokenKind::OpNeq,
        TokenKind::OpGte,
        TokenKind::OpLte,
        TokenKind::OpGt,
        TokenKind::OpLt,
        TokenKind::OpMul,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Id,
        TokenKind::Comma,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Semicolon,
    ];

    /// Name used in the Program Internal Form
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Id => "ID",
            TokenKind::OpEq => "OP_EQ",
            TokenKind::OpNeq => "OP_NEQ",
            TokenKind::OpGte => "OP_GTE",
            TokenKind::OpLte => "OP_LTE",
            TokenKind::OpGt => "OP_GT",
            TokenKind::OpLt => "OP_LT",
            TokenKind::OpMul => "OP_MUL",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }

    /// Symbol class for kinds whose lexeme is interned in the symbol table
    pub fn symbol_class(self) -> Option<SymbolClass> {
        match self {
            TokenKind::Id => Some(SymbolClass::Identifier),
            TokenKind::Number => Some(SymbolClass::Number),
            TokenKind::String => Some(SymbolClass::String),
            _ => None,
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Select
                | TokenKind::From
                | TokenKind::Where
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::True
                | TokenKind::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Class of an interned symbol
///
/// Part of the symbol table key, so that numeric and string constants never
/// share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolClass {
    Identifier,
    Number,
    String,
}

/// A lexeme recognized by the scanner, before symbol interning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: TokenKind,
    /// Exact source text, quotes included for strings
    pub text: &'a str,
    pub span: Span,
}
