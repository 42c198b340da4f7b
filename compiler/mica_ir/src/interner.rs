//! String interning.

use crate::{Name, Seq};

/// Deduplicating string table.
///
/// Interning the same text twice yields the same [`Name`], so callers
/// compare identifiers by handle instead of by content. Lookups scan
/// the table linearly with a length check before any byte comparison,
/// which is plenty for the front-end's working set and keeps the table
/// a single flat allocation.
///
/// Interned strings live until the interner is dropped. Handles index
/// insertion order and are never invalidated by later interning.
#[derive(Debug, Default)]
pub struct Interner {
    entries: Seq<Box<str>>,
}

impl Interner {
    /// Create an empty interner. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Interner {
            entries: Seq::new(),
        }
    }

    /// Intern `text`, returning the handle of the existing entry if the
    /// same text was interned before.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(existing) = self.find(text) {
            return existing;
        }
        self.insert(Box::from(text))
    }

    /// Intern an owned string without copying it on first insertion.
    pub fn intern_owned(&mut self, text: String) -> Name {
        if let Some(existing) = self.find(&text) {
            return existing;
        }
        self.insert(text.into_boxed_str())
    }

    /// The text behind a handle.
    ///
    /// # Panics
    /// Panics if `name` did not come from this interner.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        &self.entries[name.index()]
    }

    /// Number of distinct strings interned.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been interned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, text: &str) -> Option<Name> {
        self.entries
            .iter()
            .position(|entry| entry.len() == text.len() && entry.as_bytes() == text.as_bytes())
            .map(name_at)
    }

    fn insert(&mut self, owned: Box<str>) -> Name {
        let name = name_at(self.entries.len());
        self.entries.push(owned);
        name
    }
}

fn name_at(index: usize) -> Name {
    match u32::try_from(index) {
        Ok(raw) => Name::from_raw(raw),
        Err(_) => panic!("interner table exceeded u32::MAX entries"),
    }
}
