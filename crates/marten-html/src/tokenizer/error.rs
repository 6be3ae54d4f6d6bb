//! Parse errors reported alongside the token stream.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "This specification defines the parsing rules for HTML documents... Certain
//! points in the parsing algorithm are said to be parse errors." Parse errors
//! never stop tokenization; the tokenizer records them and keeps going.

use thiserror::Error;

/// The kind of a parse error. `Display` prints the WHATWG error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// "eof-before-tag-name"
    #[error("eof-before-tag-name")]
    EofBeforeTagName,
    /// "eof-in-doctype"
    #[error("eof-in-doctype")]
    EofInDoctype,
    /// "eof-in-tag"
    #[error("eof-in-tag")]
    EofInTag,
    /// "invalid-first-character-of-tag-name"
    #[error("invalid-first-character-of-tag-name")]
    InvalidFirstCharacterOfTagName,
    /// "missing-end-tag-name"
    #[error("missing-end-tag-name")]
    MissingEndTagName,
    /// "incorrectly-opened-comment"
    #[error("incorrectly-opened-comment")]
    IncorrectlyOpenedComment,
    /// "missing-whitespace-before-doctype-name"
    #[error("missing-whitespace-before-doctype-name")]
    MissingWhitespaceBeforeDoctypeName,
    /// "missing-doctype-name"
    #[error("missing-doctype-name")]
    MissingDoctypeName,
    /// "invalid-character-sequence-after-doctype-name"
    #[error("invalid-character-sequence-after-doctype-name")]
    InvalidCharacterSequenceAfterDoctypeName,
    /// "unexpected-equals-sign-before-attribute-name"
    #[error("unexpected-equals-sign-before-attribute-name")]
    UnexpectedEqualsSignBeforeAttributeName,
    /// "unexpected-character-in-attribute-name"
    #[error("unexpected-character-in-attribute-name")]
    UnexpectedCharacterInAttributeName,
    /// "unexpected-character-in-unquoted-attribute-value"
    #[error("unexpected-character-in-unquoted-attribute-value")]
    UnexpectedCharacterInUnquotedAttributeValue,
    /// "missing-attribute-value"
    #[error("missing-attribute-value")]
    MissingAttributeValue,
    /// "missing-whitespace-between-attributes"
    #[error("missing-whitespace-between-attributes")]
    MissingWhitespaceBetweenAttributes,
    /// "unexpected-solidus-in-tag"
    #[error("unexpected-solidus-in-tag")]
    UnexpectedSolidusInTag,
    /// "duplicate-attribute"
    #[error("duplicate-attribute")]
    DuplicateAttribute,
    /// "end-tag-with-attributes"
    #[error("end-tag-with-attributes")]
    EndTagWithAttributes,
    /// "end-tag-with-trailing-solidus"
    #[error("end-tag-with-trailing-solidus")]
    EndTagWithTrailingSolidus,
}

/// A parse error and where the tokenizer was when it hit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset of the input cursor when the error was detected.
    pub position: usize,
}

impl ParseError {
    /// Create a parse error of `kind` at byte offset `position`.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}
