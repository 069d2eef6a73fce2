//! Program Internal Form
//! Ordered (token kind, symbol reference) pairs produced by tokenization

use crate::frontend::lexer::symbols::SymbolId;
use crate::frontend::lexer::tokens::TokenKind;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Reference code written for entries with no symbol table id
pub const NO_SYMBOL: i64 = -1;

/// One PIF entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PifEntry {
    pub kind: TokenKind,
    /// Symbol table id for `ID`, `NUMBER` and `STRING`; `None` otherwise
    pub symbol: Option<SymbolId>,
}

impl PifEntry {
    /// Entry for a keyword, operator or delimiter
    pub fn fixed(kind: TokenKind) -> Self {
        Self { kind, symbol: None }
    }

    pub fn symbolic(
        kind: TokenKind,
        id: SymbolId,
    ) -> Self {
        Self {
            kind,
            symbol: Some(id),
        }
    }

    /// Reference as written in the PIF: the symbol id, or [`NO_SYMBOL`]
    pub fn reference(&self) -> i64 {
        self.symbol.map_or(NO_SYMBOL, |id| id.index() as i64)
    }

    /// `(kind name, reference)`
    pub fn as_pair(&self) -> (&'static str, i64) {
        (self.kind.name(), self.reference())
    }
}

impl fmt::Display for PifEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.reference())
    }
}

impl Serialize for PifEntry {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("PifEntry", 2)?;
        entry.serialize_field("kind", &self.kind)?;
        entry.serialize_field("reference", &self.reference())?;
        entry.end()
    }
}

/// Program Internal Form: entries in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Pif {
    entries: Vec<PifEntry>,
}

impl Pif {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(
        &mut self,
        entry: PifEntry,
    ) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PifEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PifEntry> {
        self.entries.iter()
    }

    /// All entries as `(kind name, reference)` pairs
    pub fn to_pairs(&self) -> Vec<(&'static str, i64)> {
        self.entries.iter().map(PifEntry::as_pair).collect()
    }
}

impl<'a> IntoIterator for &'a Pif {
    type Item = &'a PifEntry;
    type IntoIter = std::slice::Iter<'a, PifEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Pif {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "--- Program Internal Form (PIF) ---")?;
        writeln!(f, "Token Type    | ST ID")?;
        write!(f, "--------------|-------")?;
        for entry in &self.entries {
            write!(f, "\n{:<13} | {}", entry.kind.name(), entry.reference())?;
        }
        Ok(())
    }
}
