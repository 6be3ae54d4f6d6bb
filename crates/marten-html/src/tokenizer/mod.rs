//! HTML tokenizer module.
//!
//! Implements the tag and DOCTYPE subset of
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Tokenizer configuration.
pub mod config;
/// Parse errors reported alongside the token stream.
pub mod error;
/// Character classification and helper methods for state transitions.
pub mod helpers;
/// HTML tokenizer state machine implementation.
pub mod state_machine;
/// Token types produced by the tokenizer.
pub mod token;

pub use config::{DuplicateAttributePolicy, TokenizerConfig};
pub use error::{ParseError, ParseErrorKind};
pub use helpers::{is_ascii_alpha, is_whitespace_char};
pub use state_machine::{HTMLTokenizer, TokenizerState};
pub use token::{Attribute, Doctype, Tag, Token, TokenKind};
