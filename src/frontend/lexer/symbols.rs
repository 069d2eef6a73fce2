//! Symbol table management
//! Interns identifiers and constants to stable, sequential ids

use crate::frontend::lexer::tokens::SymbolClass;
use indexmap::{Equivalent, IndexSet};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Id of an interned symbol, assigned in first-seen order from 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbol table entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub class: SymbolClass,
    /// Literal source text; string constants keep their quotes
    pub text: String,
}

/// Borrowed lookup key, hashed identically to [`Symbol`]
#[derive(Hash)]
struct SymbolKey<'a> {
    class: SymbolClass,
    text: &'a str,
}

impl Equivalent<Symbol> for SymbolKey<'_> {
    fn equivalent(
        &self,
        key: &Symbol,
    ) -> bool {
        self.class == key.class && self.text == key.text
    }
}

/// Symbol table for identifiers and constants
///
/// An entry's position in the insertion-ordered set is its id, so the next
/// id is always the current length and ids never change once assigned.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: IndexSet<Symbol>,
}

impl SymbolTable {
    /// Create new empty symbol table
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the symbol, inserting it first if it is new
    pub fn lookup_or_insert(
        &mut self,
        class: SymbolClass,
        text: &str,
    ) -> SymbolId {
        if let Some(index) = self.symbols.get_index_of(&SymbolKey { class, text }) {
            return SymbolId::new(index);
        }
        let (index, _) = self.symbols.insert_full(Symbol {
            class,
            text: text.to_string(),
        });
        SymbolId::new(index)
    }

    /// Id of an already interned symbol
    pub fn id_of(
        &self,
        class: SymbolClass,
        text: &str,
    ) -> Option<SymbolId> {
        self.symbols
            .get_index_of(&SymbolKey { class, text })
            .map(SymbolId::new)
    }

    /// Reverse lookup
    pub fn get(
        &self,
        id: SymbolId,
    ) -> Option<&Symbol> {
        self.symbols.get_index(id.index())
    }

    pub fn contains(
        &self,
        class: SymbolClass,
        text: &str,
    ) -> bool {
        self.id_of(class, text).is_some()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (SymbolId::new(index), symbol))
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<Empty Symbol Table>");
        }
        writeln!(f, "--- Symbol Table ---")?;
        writeln!(f, "ID  | Symbol")?;
        write!(f, "----|-----------------")?;
        for (id, symbol) in self.iter() {
            write!(f, "\n{:<3} | {}", id.to_string(), symbol.text)?;
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SymbolRow<'a> {
    id: SymbolId,
    class: SymbolClass,
    text: &'a str,
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (id, symbol) in self.iter() {
            seq.serialize_element(&SymbolRow {
                id,
                class: symbol.class,
                text: &symbol.text,
            })?;
        }
        seq.end()
    }
}
