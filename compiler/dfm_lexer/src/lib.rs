//! Lossless tokenizer for Delphi form (DFM) text files.
//!
//! A DFM text file describes a tree of objects and their properties:
//!
//! ```text
//! object Form1: TForm1
//!   Caption = 'It''s a form'
//!   Font.Style = [fsBold]
//!   Glyph.Data = {
//!     36050000424D3605}
//! end
//! ```
//!
//! This crate turns such text into [`Token`]s, each carrying its verbatim
//! text and 1-based line/column. Every input character belongs to exactly one
//! token, whitespace and illegal characters included, so concatenating the
//! token texts gives back the input.
//!
//! # Usage
//!
//! ```
//! use dfm_lexer::{SourceBuffer, TokenKind, Tokenizer};
//!
//! let source = SourceBuffer::new("Data = {0A0B\n0C}");
//! let mut tokens = Tokenizer::new(&source);
//! assert_eq!(tokens.next_token().text, "Data");
//! # tokens.next_token();
//! # tokens.next_token();
//! # tokens.next_token();
//! assert_eq!(tokens.next_token().kind, TokenKind::LeftBrace);
//! assert_eq!(tokens.skip_to_closing_brace(), Some("0A0B\n0C"));
//! let close = tokens.next_token();
//! assert_eq!((close.kind, close.line, close.col), (TokenKind::RightBrace, 2, 3));
//! ```
//!
//! Parsing the object tree, unescaping strings and converting numbers are
//! left to the consumer.

mod cursor;
mod source_buffer;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
