//! Lexical analysis for the Mica language.
//!
//! The scanner is pull-based: [`Scanner::next_token`] produces one
//! token per call and [`Scanner::expect_next`] layers a kind check on
//! top for callers that know what must come next. [`tokenize`] drives
//! the scanner to end of input for callers that want the whole stream
//! at once.
//!
//! Errors never abort scanning. Bad literals read as zero values, the
//! error is recorded with its span, and the stream always ends with an
//! [`TokenKind::Eof`] token. See [`LexError`] for the error catalog.
//!
//! # Example
//!
//! ```
//! use mica_ir::{Interner, TokenKind};
//! use mica_lexer::tokenize;
//!
//! let mut interner = Interner::new();
//! let (tokens, errors) = tokenize("answer + 42", &mut interner);
//! assert!(errors.is_empty());
//! assert_eq!(tokens.len(), 4); // ident, +, int, eof
//! assert_eq!(tokens[2].kind, TokenKind::Int(42));
//! ```

mod lex_error;
mod scanner;

pub use lex_error::{ExpectError, LexError, LexErrorKind};
pub use scanner::Scanner;

// The types every lexer caller needs alongside the scanner.
pub use mica_ir::{AssignOp, Interner, Name, Span, Token, TokenKind};
pub use mica_lexer_core::SourceBuffer;

/// Scan `source` to end of input.
///
/// Returns every token including the final [`TokenKind::Eof`], plus all
/// recorded errors in source order. Identifier and string payloads are
/// interned into `interner`.
pub fn tokenize(source: &str, interner: &mut Interner) -> (Vec<Token>, Vec<LexError>) {
    let buffer = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buffer);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token(interner);
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, scanner.take_errors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn tokenize_ends_with_eof() {
        let mut interner = Interner::new();
        let (tokens, errors) = tokenize("x = 1", &mut interner);
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn tokenize_empty_source() {
        let mut interner = Interner::new();
        let (tokens, errors) = tokenize("", &mut interner);
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].span, Span::DUMMY);
    }

    #[test]
    fn tokenize_reports_errors_in_source_order() {
        let mut interner = Interner::new();
        let (tokens, errors) = tokenize("0b2 \"open", &mut interner);
        assert_eq!(tokens.len(), 3);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].span.start < errors[1].span.start);
    }

    proptest! {
        #[test]
        fn scanning_always_terminates_with_eof(source in ".*") {
            let mut interner = Interner::new();
            let (tokens, _errors) = tokenize(&source, &mut interner);
            prop_assert!(!tokens.is_empty());
            prop_assert_eq!(tokens[tokens.len() - 1].kind, TokenKind::Eof);
        }

        #[test]
        fn spans_are_monotone_and_bounded(source in ".*") {
            let mut interner = Interner::new();
            let (tokens, _errors) = tokenize(&source, &mut interner);
            let mut prev_end = 0u32;
            for token in &tokens {
                prop_assert!(token.span.start <= token.span.end);
                prop_assert!(token.span.start >= prev_end);
                prev_end = token.span.end;
            }
            prop_assert!(prev_end as usize <= source.len());
        }

        #[test]
        fn lone_identifier_round_trips(source in "[a-z_][a-zA-Z0-9_]{0,12}") {
            let mut interner = Interner::new();
            let (tokens, errors) = tokenize(&source, &mut interner);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert!(
                matches!(tokens[0].kind, TokenKind::Ident(_)),
                "not an ident: {:?}",
                tokens[0]
            );
            if let TokenKind::Ident(name) = tokens[0].kind {
                prop_assert_eq!(interner.lookup(name), source.as_str());
            }
        }
    }
}
