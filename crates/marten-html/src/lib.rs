//! HTML tokenizer for the Marten project.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data and tag states
//!   - Attribute parsing (double-quoted, single-quoted, unquoted values)
//!   - DOCTYPE names
//!   - Parse error reporting with continued tokenization
//!
//! # Not Yet Implemented
//!
//! - Comment, RCDATA, RAWTEXT, script data and CDATA states
//! - Character references
//! - DOCTYPE public and system identifiers
//! - Tree construction
//!
//! # Example
//!
//! ```
//! use marten_html::{HTMLTokenizer, Token};
//!
//! let mut tokenizer = HTMLTokenizer::new("<a href=\"/\">x</a>");
//! let token = tokenizer.next_token();
//! assert_eq!(token.as_tag().map(|tag| tag.name.as_str()), Some("a"));
//! ```

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Attribute, Doctype, DuplicateAttributePolicy, HTMLTokenizer, ParseError, ParseErrorKind, Tag,
    Token, TokenKind, TokenizerConfig, TokenizerState,
};
