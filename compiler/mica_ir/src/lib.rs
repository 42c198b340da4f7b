//! Shared value types for the Mica compiler front-end.
//!
//! Everything the lexer and later phases pass between each other lives
//! here: byte spans, interned names, token definitions, and the growable
//! [`Seq`] container the interner is built on.
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.
//! Types that contain strings use interned [`Name`] for O(1) equality.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod seq;
mod span;
mod token;

pub use interner::Interner;
pub use name::Name;
pub use seq::Seq;
pub use span::Span;
pub use token::{AssignOp, Token, TokenKind};
