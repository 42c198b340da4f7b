//! Lexer error types.
//!
//! Every error carries WHERE (`span`) and WHAT (`kind`). The scanner
//! records errors and keeps going, substituting a zero value for
//! whatever it could not read, so one bad literal never hides the rest
//! of the file.
//!
//! All types derive `Clone, Eq, PartialEq, Hash, Debug` so errors can
//! be collected, deduplicated, and compared in tests.

use std::fmt;

use mica_ir::{Span, Token, TokenKind};

/// A lexical error at a known source location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === String/Char Errors ===
    /// Missing closing `"` for string literal.
    UnterminatedString,
    /// Escape with no translation (e.g., `\q`). The literal reads as NUL.
    InvalidEscape { escape: u8 },
    /// Char literal whose value came out as NUL (bad escape, whitespace,
    /// or end of input where a character was expected).
    CharLiteralValue { byte: u8 },
    /// Missing closing `'` for char literal.
    ExpectedCloseQuote { found: u8 },

    // === Numeric Errors ===
    /// Integer literal exceeded the representable range.
    IntOverflow,
    /// Digit not valid in the literal's base (e.g., `0b2`).
    DigitOutOfRange { digit: u8, base: u64 },
    /// Float exponent with no digits (e.g., `1.5e`).
    EmptyExponent { found: u8 },
    /// Float literal could not be parsed; the token reads as `0.0`.
    FloatParse,
    /// Float literal rounded to infinity.
    FloatOverflow,
}

impl LexError {
    /// Create an unterminated string error.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Create an invalid escape error.
    #[cold]
    pub fn invalid_escape(span: Span, escape: u8) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidEscape { escape },
        }
    }

    /// Create a bad char literal value error.
    #[cold]
    pub fn char_literal_value(span: Span, byte: u8) -> Self {
        Self {
            span,
            kind: LexErrorKind::CharLiteralValue { byte },
        }
    }

    /// Create a missing close quote error.
    #[cold]
    pub fn expected_close_quote(span: Span, found: u8) -> Self {
        Self {
            span,
            kind: LexErrorKind::ExpectedCloseQuote { found },
        }
    }

    /// Create an integer overflow error.
    #[cold]
    pub fn int_overflow(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::IntOverflow,
        }
    }

    /// Create a digit-out-of-range error.
    #[cold]
    pub fn digit_out_of_range(span: Span, digit: u8, base: u64) -> Self {
        Self {
            span,
            kind: LexErrorKind::DigitOutOfRange { digit, base },
        }
    }

    /// Create an empty exponent error.
    #[cold]
    pub fn empty_exponent(span: Span, found: u8) -> Self {
        Self {
            span,
            kind: LexErrorKind::EmptyExponent { found },
        }
    }

    /// Create a float parse error.
    #[cold]
    pub fn float_parse(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::FloatParse,
        }
    }

    /// Create a float overflow error.
    #[cold]
    pub fn float_overflow(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::FloatOverflow,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.span)?;
        match &self.kind {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::InvalidEscape { escape } if escape.is_ascii_graphic() => {
                write!(f, "invalid escape `\\{}` in literal", char::from(*escape))
            }
            LexErrorKind::InvalidEscape { escape } => {
                write!(f, "invalid escape before {} in literal", printable(*escape))
            }
            LexErrorKind::CharLiteralValue { byte } => {
                write!(f, "unexpected {} in char literal", printable(*byte))
            }
            LexErrorKind::ExpectedCloseQuote { found } => {
                write!(f, "expected closing `'`, found {}", printable(*found))
            }
            LexErrorKind::IntOverflow => write!(f, "integer literal out of range"),
            LexErrorKind::DigitOutOfRange { digit, base } => {
                write!(f, "digit {} out of range for base {base}", printable(*digit))
            }
            LexErrorKind::EmptyExponent { found } => {
                write!(f, "expected exponent digit, found {}", printable(*found))
            }
            LexErrorKind::FloatParse => write!(f, "malformed float literal"),
            LexErrorKind::FloatOverflow => write!(f, "float literal out of range"),
        }
    }
}

impl std::error::Error for LexError {}

/// Render a byte for an error message: the character itself when
/// printable, the end-of-input name for NUL, the hex value otherwise.
fn printable(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("`{}`", char::from(byte))
    } else if byte == 0 {
        String::from("end of input")
    } else {
        format!("byte 0x{byte:02X}")
    }
}

/// A token of the wrong kind where a specific kind was required.
///
/// Returned by [`Scanner::expect_next`](crate::Scanner::expect_next).
/// The offending token is carried so callers can resynchronize on it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ExpectError {
    pub expected: TokenKind,
    pub found: Token,
}

impl fmt::Display for ExpectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.found.span,
            self.expected.describe(),
            self.found.kind.describe()
        )
    }
}

impl std::error::Error for ExpectError {}
