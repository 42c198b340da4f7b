//! Interned string handles.

use std::fmt;

/// Handle to a string held by an [`Interner`](crate::Interner).
///
/// A `Name` is a plain index into the interner that produced it, so
/// equality and hashing are O(1) and never touch string data. Handles
/// from different interners must not be mixed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create a name from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// The raw index of this name.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The raw index as a `usize`, for direct table indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

// Size assertion to prevent accidental regressions
crate::static_assert_size!(Name, 4);
