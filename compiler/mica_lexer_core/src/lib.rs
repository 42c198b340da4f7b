//! Scanning primitives for the Mica lexer.
//!
//! [`SourceBuffer`] copies source text into a zero-padded buffer with a
//! `0x00` sentinel after the content, and [`Cursor`] walks that buffer
//! byte by byte. The sentinel lets every scanning loop stop on a byte
//! test instead of a bounds check, and the cursor being [`Copy`] makes
//! lookahead a matter of saving and restoring a 24-byte value.
//!
//! This crate knows nothing about tokens. Token semantics live in
//! `mica_lexer`, which drives these primitives.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
