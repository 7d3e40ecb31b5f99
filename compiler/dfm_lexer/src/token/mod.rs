//! Token kinds and positioned tokens.
//!
//! [`TokenKind`] is a `#[repr(u8)]` enum. Each symbol kind's discriminant is
//! the ASCII byte of the symbol itself, so a parser can match on `+` or `{`
//! directly and convert back with [`TokenKind::symbol()`]. The eight
//! structural kinds live at `0x80` and above, outside the printable range,
//! so the two spaces can never collide.

use std::fmt;

/// Lexical class of a [`Token`].
///
/// # Discriminant Layout
///
/// | Range | Category |
/// |-------|----------|
/// | `0x20..=0x7E` | Symbols (discriminant = the symbol's ASCII byte) |
/// | `0x80..=0x8F` | Words & literals |
/// | `0x90..=0x9F` | Trivia |
/// | `0xF0..=0xFE` | Errors |
/// | `0xFF` | End of input |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Symbols ===
    /// `+`
    Plus = b'+',
    /// `-`
    Minus = b'-',
    /// `[`
    LeftBracket = b'[',
    /// `]`
    RightBracket = b']',
    /// `(`
    LeftParen = b'(',
    /// `)`
    RightParen = b')',
    /// `{`
    LeftBrace = b'{',
    /// `}`
    RightBrace = b'}',
    /// `<`
    Less = b'<',
    /// `>`
    Greater = b'>',
    /// `=`
    Equal = b'=',
    /// `:`
    Colon = b':',
    /// `.`
    Dot = b'.',
    /// `,`
    Comma = b',',

    // === Words & Literals ===
    /// Identifier or keyword: `object`, `Caption`, `TForm1`, `True`.
    Word = 0x80,
    /// Decimal integer: `42`.
    Integer = 0x81,
    /// Decimal with a `.` and/or an exponent: `1.5`, `2e10`, `123.`.
    Float = 0x82,
    /// Quoted string, quotes and `''` escapes included verbatim.
    String = 0x83,
    /// Character code: `#13`, or a bare `#`.
    Character = 0x84,

    // === Trivia ===
    /// Maximal run of Unicode whitespace, newlines included.
    Whitespace = 0x90,

    // === Errors ===
    /// A single character that starts no token.
    Illegal = 0xF0,

    // === Control ===
    /// End of input. Zero-length; returned forever once reached.
    Eof = 0xFF,
}

impl TokenKind {
    /// Every symbol kind, in the order the format lists them.
    pub const SYMBOLS: [TokenKind; 14] = [
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Equal,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Comma,
    ];

    /// Kind for a one-character symbol, or `None` if `c` is not a symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        let kind = match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            '<' => Self::Less,
            '>' => Self::Greater,
            '=' => Self::Equal,
            ':' => Self::Colon,
            '.' => Self::Dot,
            ',' => Self::Comma,
            _ => return None,
        };
        Some(kind)
    }

    /// The symbol character this kind stands for, or `None` for structural kinds.
    pub fn symbol(self) -> Option<char> {
        let byte = self as u8;
        byte.is_ascii().then_some(char::from(byte))
    }

    /// Returns `true` for the one-character symbol kinds.
    pub fn is_symbol(self) -> bool {
        (self as u8).is_ascii()
    }

    /// Returns `true` for kinds a parser normally skips.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns `true` for the numeric literal kinds.
    pub fn is_number(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Fixed source text for symbol kinds; `None` when the text varies.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::Eof => "",
            Self::Word
            | Self::Integer
            | Self::Float
            | Self::String
            | Self::Character
            | Self::Whitespace
            | Self::Illegal => return None,
        };
        Some(text)
    }

    /// Human-readable name for diagnostics: `` `{` ``, `word`, `end of input`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::Equal => "`=`",
            Self::Colon => "`:`",
            Self::Dot => "`.`",
            Self::Comma => "`,`",
            Self::Word => "word",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Character => "character code",
            Self::Whitespace => "whitespace",
            Self::Illegal => "illegal character",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the input with its starting position.
///
/// `text` borrows from the [`SourceBuffer`](crate::SourceBuffer) and is the
/// exact input, never unescaped or normalized. Concatenating the text of
/// every token up to `Eof` reproduces the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Lexical class.
    pub kind: TokenKind,
    /// Verbatim source text; empty only for `Eof`.
    pub text: &'a str,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character, counted in characters.
    pub col: u32,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl Token<'_> {
    /// Returns `true` if this token has kind `kind`.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns `true` for whitespace.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Byte offset just past the last character.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }
}
