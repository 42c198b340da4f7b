//! Single-pass token scanner.
//!
//! The scanner walks a sentinel-terminated [`SourceBuffer`] byte by
//! byte and produces one [`Token`] per call. It never stops on a bad
//! literal: every syntax error is recorded and the affected value is
//! replaced with zero, so the caller always gets a token stream that
//! runs to [`TokenKind::Eof`].
//!
//! Number scanning needs one unbounded lookahead (digits then `.` means
//! float). The cursor is `Copy`, so the lookahead is a snapshot of the
//! cursor value and a restore, never a second buffer.

use mica_ir::{AssignOp, Interner, Seq, Span, Token, TokenKind};
use mica_lexer_core::{Cursor, SourceBuffer};

use crate::lex_error::{ExpectError, LexError};

/// Largest integer literal value accepted before the scanner reports
/// overflow and zeroes the accumulator. Matches `i32::MAX`.
const INT_LITERAL_MAX: u64 = 0x7FFF_FFFF;

/// Pull-based lexical scanner.
///
/// Borrows the source buffer for its whole life, so tokens can carry
/// spans that index straight into the original text. Errors accumulate
/// on the scanner; drain them with [`take_errors`](Scanner::take_errors)
/// once the stream is consumed.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    errors: Vec<LexError>,
    /// Scratch space for decoded string literal bytes, reused across
    /// string tokens.
    strbuf: Seq<u8>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `buffer`.
    pub fn new(buffer: &'src SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            errors: Vec::new(),
            strbuf: Seq::new(),
        }
    }

    /// Current byte offset in the source.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Errors recorded so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Take ownership of the recorded errors, leaving none behind.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    /// Scan the next token.
    ///
    /// Skips leading whitespace, then reads exactly one token. At end
    /// of input this returns an empty-span [`TokenKind::Eof`] token,
    /// forever.
    pub fn next_token(&mut self, interner: &mut Interner) -> Token {
        self.cursor.eat_while(is_space);
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            0 => TokenKind::Eof,
            b'<' => self.shift_or_compare(b'<', TokenKind::Shl, AssignOp::Shl, TokenKind::LtEq),
            b'>' => self.shift_or_compare(b'>', TokenKind::Shr, AssignOp::Shr, TokenKind::GtEq),
            b'=' => self.equal(),
            b'!' => self.bang(),
            b'&' => self.double_or_assign(b'&', TokenKind::AmpAmp, AssignOp::And),
            b'|' => self.double_or_assign(b'|', TokenKind::PipePipe, AssignOp::Or),
            b'+' => self.double_or_assign(b'+', TokenKind::PlusPlus, AssignOp::Add),
            b'-' => self.double_or_assign(b'-', TokenKind::MinusMinus, AssignOp::Sub),
            b'*' => self.assign_or_punct(b'*', AssignOp::Mul),
            b'/' => self.assign_or_punct(b'/', AssignOp::Div),
            b'"' => self.string(start, interner),
            b'\'' => self.char_literal(),
            b'.' => self.float(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.ident(interner),
            other => {
                self.cursor.advance();
                TokenKind::Punct(other)
            }
        };
        Token::new(kind, Span::new(start, self.cursor.pos()))
    }

    /// Scan the next token and require it to be of `expected`'s kind.
    ///
    /// Kinds match ignoring payloads, see [`TokenKind::same_kind`]. On
    /// mismatch the offending token is returned inside the error so the
    /// caller can resynchronize.
    pub fn expect_next(
        &mut self,
        interner: &mut Interner,
        expected: &TokenKind,
    ) -> Result<Token, ExpectError> {
        let token = self.next_token(interner);
        if token.kind.same_kind(expected) {
            Ok(token)
        } else {
            Err(ExpectError {
                expected: *expected,
                found: token,
            })
        }
    }

    fn error(&mut self, err: LexError) {
        self.errors.push(err);
    }

    /// Span of the byte at the cursor, collapsing to a point at end of
    /// input so error spans stay indexable into the source.
    fn byte_span(&self) -> Span {
        let pos = self.cursor.pos();
        if self.cursor.is_eof() {
            Span::point(pos)
        } else {
            Span::new(pos, pos + 1)
        }
    }

    /// `<` family and `>` family: `X`, `X=`, `XX`, `XX=`.
    fn shift_or_compare(
        &mut self,
        first: u8,
        shifted: TokenKind,
        shift_assign: AssignOp,
        compare_eq: TokenKind,
    ) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == first {
            self.cursor.advance();
            if self.cursor.current() == b'=' {
                self.cursor.advance();
                TokenKind::Assign(shift_assign)
            } else {
                shifted
            }
        } else if self.cursor.current() == b'=' {
            self.cursor.advance();
            compare_eq
        } else {
            TokenKind::Punct(first)
        }
    }

    /// `&`, `|`, `+`, `-` family: `X`, `XX`, `X=`.
    fn double_or_assign(&mut self, first: u8, doubled: TokenKind, assign: AssignOp) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == first {
            self.cursor.advance();
            doubled
        } else if self.cursor.current() == b'=' {
            self.cursor.advance();
            TokenKind::Assign(assign)
        } else {
            TokenKind::Punct(first)
        }
    }

    /// `*` and `/` family: `X`, `X=`.
    fn assign_or_punct(&mut self, first: u8, assign: AssignOp) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            TokenKind::Assign(assign)
        } else {
            TokenKind::Punct(first)
        }
    }

    fn equal(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            TokenKind::EqEq
        } else {
            TokenKind::Assign(AssignOp::Plain)
        }
    }

    fn bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            TokenKind::NotEq
        } else {
            TokenKind::Punct(b'!')
        }
    }

    /// Dispatch a leading digit to the int or float scanner.
    ///
    /// Floats are recognized by a digit run followed by `.`, found via
    /// a cursor snapshot that is thrown away before the real scan.
    fn number(&mut self) -> TokenKind {
        let saved = self.cursor;
        self.cursor.eat_while(|b| b.is_ascii_digit());
        let is_float = self.cursor.current() == b'.';
        self.cursor = saved;
        if is_float {
            self.float()
        } else {
            self.int()
        }
    }

    /// Scan an integer literal in base 2, 8, 10, or 16.
    ///
    /// A leading `0x`/`0X` selects hex, `0b`/`0B` binary, `0` followed
    /// by a digit octal. A bare `0` is plain decimal zero.
    ///
    /// Both kinds of digit error recover by zeroing: an out-of-range
    /// digit counts as zero and an overflowing accumulator restarts at
    /// zero, so scanning always consumes the whole digit run.
    fn int(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        let mut base: u64 = 10;
        if self.cursor.current() == b'0' {
            self.cursor.advance();
            match self.cursor.current() {
                b'x' | b'X' => {
                    base = 16;
                    self.cursor.advance();
                }
                b'b' | b'B' => {
                    base = 2;
                    self.cursor.advance();
                }
                b if b.is_ascii_digit() => base = 8,
                _ => {}
            }
        }
        let mut value: u64 = 0;
        loop {
            let Some(digit) = digit_value(self.cursor.current()) else {
                break;
            };
            let mut digit = u64::from(digit);
            // Checked before the base test, against the raw digit, so a
            // stray hex digit in a decimal literal still bounds the
            // accumulator the same way.
            if value > (INT_LITERAL_MAX - digit) / 10 {
                self.error(LexError::int_overflow(Span::new(
                    start,
                    self.cursor.pos() + 1,
                )));
                value = 0;
            }
            if digit >= base {
                self.error(LexError::digit_out_of_range(
                    Span::new(self.cursor.pos(), self.cursor.pos() + 1),
                    self.cursor.current(),
                    base,
                ));
                digit = 0;
            }
            value = value * base + digit;
            self.cursor.advance();
        }
        TokenKind::Int(value)
    }

    /// Scan a float literal: digits, `.`, digits, optional exponent.
    ///
    /// Called with the cursor on the first byte of the literal, which
    /// is either a digit or the `.` itself; both dispatch paths
    /// guarantee a `.` terminates the leading digit run. A malformed
    /// literal reads as `0.0` after reporting, an infinite one keeps
    /// its sign and reports overflow.
    fn float(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        debug_assert_eq!(
            self.cursor.current(),
            b'.',
            "float scan entered off a decimal point"
        );
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if !self.cursor.current().is_ascii_digit() {
                self.error(LexError::empty_exponent(
                    Span::point(self.cursor.pos()),
                    self.cursor.current(),
                ));
            }
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        let span = Span::new(start, self.cursor.pos());
        let value = match self.cursor.slice_from(start).parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                self.error(LexError::float_parse(span));
                0.0
            }
        };
        if value.is_infinite() {
            self.error(LexError::float_overflow(span));
        }
        TokenKind::float(value)
    }

    /// Scan a char literal: one byte or one escape between `'` quotes.
    ///
    /// Whatever went wrong, the literal reads as some byte (NUL for the
    /// error cases) and the closing quote position is consumed, so the
    /// scanner is aligned for the next token.
    fn char_literal(&mut self) -> TokenKind {
        self.cursor.advance();
        let value = if self.cursor.current() == b'\\' {
            self.cursor.advance();
            escape_byte(self.cursor.current()).unwrap_or(0)
        } else {
            let byte = self.cursor.current();
            if is_space(byte) { 0 } else { byte }
        };
        if value == 0 {
            self.error(LexError::char_literal_value(
                self.byte_span(),
                self.cursor.current(),
            ));
        }
        if !self.cursor.is_eof() {
            self.cursor.advance();
        }
        if self.cursor.current() == b'\'' {
            self.cursor.advance();
        } else {
            self.error(LexError::expected_close_quote(
                Span::point(self.cursor.pos()),
                self.cursor.current(),
            ));
            if !self.cursor.is_eof() {
                self.cursor.advance();
            }
        }
        TokenKind::Char(value)
    }

    /// Scan a string literal into the scratch buffer and intern it.
    ///
    /// Plain runs between escapes are located with `memchr` and copied
    /// wholesale. An untranslatable escape reads as NUL and scanning
    /// continues, end of input before the closing quote reports the
    /// string as unterminated and keeps what was read.
    fn string(&mut self, start: u32, interner: &mut Interner) -> TokenKind {
        self.cursor.advance();
        self.strbuf.clear();
        loop {
            let run_start = self.cursor.pos();
            let delim = self.cursor.skip_to_string_delim();
            if self.cursor.pos() > run_start {
                let run = self.cursor.slice(run_start, self.cursor.pos());
                self.strbuf.extend_from_slice(run.as_bytes());
            }
            match delim {
                0 => {
                    self.error(LexError::unterminated_string(Span::new(
                        start,
                        self.cursor.pos(),
                    )));
                    break;
                }
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                _ => {
                    let escape_start = self.cursor.pos();
                    self.cursor.advance();
                    let escape = self.cursor.current();
                    match escape_byte(escape) {
                        Some(byte) => self.strbuf.push(byte),
                        None => {
                            self.error(LexError::invalid_escape(
                                Span::new(escape_start, self.byte_span().end),
                                escape,
                            ));
                            self.strbuf.push(0);
                        }
                    }
                    if !self.cursor.is_eof() {
                        self.cursor.advance();
                    }
                }
            }
        }
        let text = String::from_utf8_lossy(&self.strbuf).into_owned();
        TokenKind::Str(interner.intern_owned(text))
    }

    fn ident(&mut self, interner: &mut Interner) -> TokenKind {
        let start = self.cursor.pos();
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        TokenKind::Ident(interner.intern(self.cursor.slice_from(start)))
    }
}

/// Whitespace skipped between tokens: space, tab, newline, carriage
/// return, vertical tab, form feed.
const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Value of an ASCII digit in any base up to 16, or `None`.
///
/// Deliberately accepts hex letters regardless of the caller's base.
/// The base check happens in the scanner so that `12a3` reads as one
/// malformed literal instead of a number followed by an identifier.
const fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Translate the byte after a backslash, or `None` when the escape has
/// no meaning.
const fn escape_byte(byte: u8) -> Option<u8> {
    match byte {
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        b'f' => Some(0x0C),
        _ => None,
    }
}
