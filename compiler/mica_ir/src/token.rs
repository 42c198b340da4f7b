//! Token definitions shared by the lexer and the parser.

use std::fmt;

use crate::{Name, Span};

/// Operator written in front of `=` in a compound assignment.
///
/// `Plain` is bare `=`. The remaining variants carry the arithmetic or
/// bitwise operation applied before the store, and `Colon` is the `:=`
/// declaration form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AssignOp {
    Plain,
    Colon,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Shl,
    Shr,
}

impl AssignOp {
    /// Source text of the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            AssignOp::Plain => "=",
            AssignOp::Colon => ":=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Mod => "%=",
            AssignOp::And => "&=",
            AssignOp::Or => "|=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
        }
    }
}

/// What a token is, plus its value when it has one.
///
/// Floats are stored as `f64` bits so the kind stays `Eq` and `Hash`.
/// Identifier and string payloads are interned [`Name`]s. Single-byte
/// punctuation that needs no lexing of its own is carried verbatim in
/// [`Punct`](TokenKind::Punct).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// End of input. Produced forever once the scanner runs out.
    Eof,
    Ident(Name),
    Int(u64),
    /// `f64` bits; see [`TokenKind::float`] and [`TokenKind::as_float`].
    Float(u64),
    Char(u8),
    Str(Name),
    /// Any single byte with no multi-byte reading, kept as itself.
    Punct(u8),
    Shl,
    Shr,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    AmpAmp,
    PipePipe,
    PlusPlus,
    MinusMinus,
    Assign(AssignOp),
}

impl TokenKind {
    /// Build a float token from its value.
    #[inline]
    pub fn float(value: f64) -> TokenKind {
        TokenKind::Float(value.to_bits())
    }

    /// The float value, if this is a float token.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TokenKind::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Check if two kinds agree ignoring payloads.
    ///
    /// `Ident("a")` matches `Ident("b")`, and any `Assign` matches any
    /// other `Assign`. Callers that care about the payload compare it
    /// after matching.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Human-readable description for diagnostics.
    ///
    /// Value-carrying kinds describe their class, fixed operators print
    /// their source text.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eof => String::from("end of input"),
            TokenKind::Ident(_) => String::from("identifier"),
            TokenKind::Int(_) => String::from("integer"),
            TokenKind::Float(_) => String::from("float"),
            TokenKind::Char(_) => String::from("character"),
            TokenKind::Str(_) => String::from("string"),
            TokenKind::Punct(byte) => describe_byte(*byte),
            TokenKind::Shl => String::from("<<"),
            TokenKind::Shr => String::from(">>"),
            TokenKind::EqEq => String::from("=="),
            TokenKind::NotEq => String::from("!="),
            TokenKind::LtEq => String::from("<="),
            TokenKind::GtEq => String::from(">="),
            TokenKind::AmpAmp => String::from("&&"),
            TokenKind::PipePipe => String::from("||"),
            TokenKind::PlusPlus => String::from("++"),
            TokenKind::MinusMinus => String::from("--"),
            TokenKind::Assign(op) => String::from(op.symbol()),
        }
    }
}

fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        String::from(char::from(byte))
    } else {
        format!("byte 0x{byte:02X}")
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "Eof"),
            TokenKind::Ident(name) => write!(f, "Ident({name:?})"),
            TokenKind::Int(value) => write!(f, "Int({value})"),
            TokenKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            TokenKind::Char(byte) => write!(f, "Char(0x{byte:02X})"),
            TokenKind::Str(name) => write!(f, "Str({name:?})"),
            TokenKind::Punct(byte) => write!(f, "Punct({})", describe_byte(*byte)),
            TokenKind::Shl => write!(f, "Shl"),
            TokenKind::Shr => write!(f, "Shr"),
            TokenKind::EqEq => write!(f, "EqEq"),
            TokenKind::NotEq => write!(f, "NotEq"),
            TokenKind::LtEq => write!(f, "LtEq"),
            TokenKind::GtEq => write!(f, "GtEq"),
            TokenKind::AmpAmp => write!(f, "AmpAmp"),
            TokenKind::PipePipe => write!(f, "PipePipe"),
            TokenKind::PlusPlus => write!(f, "PlusPlus"),
            TokenKind::MinusMinus => write!(f, "MinusMinus"),
            TokenKind::Assign(op) => write!(f, "Assign({op:?})"),
        }
    }
}

/// One lexed token: its kind and the source bytes it covers.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

// Size assertions to prevent accidental regressions
crate::static_assert_size!(TokenKind, 16);
crate::static_assert_size!(Token, 24);
