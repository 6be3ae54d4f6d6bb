//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - Character classification (whitespace, ASCII alpha)
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - Attribute helpers for duplicate detection

use marten_common::warning::warn_once;

use super::config::DuplicateAttributePolicy;
use super::error::{ParseError, ParseErrorKind};
use super::state_machine::{HTMLTokenizer, TokenizerState};
use super::token::{Doctype, Tag, Token};

// =============================================================================
// Character Classification
// =============================================================================

/// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
///
/// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF),
/// U+000C FORM FEED (FF), U+0020 SPACE"
///
/// NOTE: U+000D CARRIAGE RETURN is not in this set. Input is not
/// newline-normalized, so a CR reaches the states as an ordinary character.
#[must_use]
pub const fn is_whitespace_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | ' ')
}

/// [ASCII alpha](https://infra.spec.whatwg.org/#ascii-alpha)
///
/// "An ASCII alpha is an ASCII upper alpha or ASCII lower alpha."
#[must_use]
pub const fn is_ascii_alpha(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z')
}

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next step of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns None once the cursor has moved past the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at a codepoint `offset` characters past the cursor without consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    ///
    /// Case-sensitive; running out of input is a mismatch.
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// Consume `target` from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }
}

// =============================================================================
// Current Token Access
// =============================================================================

impl HTMLTokenizer {
    /// The tag under construction, if the current token is a tag.
    pub(super) const fn current_tag(&mut self) -> Option<&mut Tag> {
        self.current_token.as_tag_mut()
    }

    /// The DOCTYPE under construction, if the current token is a DOCTYPE.
    pub(super) const fn current_doctype(&mut self) -> Option<&mut Doctype> {
        self.current_token.as_doctype_mut()
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Emit the current token"
    ///
    /// Moves the finished token into the output queue and leaves the
    /// placeholder behind.
    pub(super) fn emit_current_token(&mut self) {
        self.finish_attribute();
        let token = std::mem::take(&mut self.current_token);

        // [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
        // "When an end tag token is emitted with attributes, that is an
        // end-tag-with-attributes parse error. When an end tag token is emitted
        // with its self-closing flag set, that is an end-tag-with-trailing-solidus
        // parse error."
        if let Token::EndTag(tag) = &token {
            if !tag.attributes.is_empty() {
                self.log_parse_error(ParseErrorKind::EndTagWithAttributes);
            }
            if tag.self_closing {
                self.log_parse_error(ParseErrorKind::EndTagWithTrailingSolidus);
            }
        }

        if token.is_valid() {
            self.pending.push_back(token);
        }
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.pending.push_back(Token::new_character(c));
    }

    /// "Emit an end-of-file token."
    ///
    /// Anything still under construction is dropped and the machine stops.
    pub(super) fn emit_eof_token(&mut self) {
        self.current_token = Token::default();
        self.pending.push_back(Token::new_eof());
        self.at_eof = true;
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Start a new attribute in the current tag token."
    pub(super) fn start_new_attribute(&mut self) {
        self.finish_attribute();
        if let Some(tag) = self.current_tag() {
            tag.start_new_attribute();
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state (and before emitting the
    /// tag token, if appropriate), the complete attribute's name must be compared to
    /// the other attributes on the same token; if there is already an attribute on
    /// the token with the exact same name, then this is a duplicate-attribute parse
    /// error and the new attribute must be removed from the token."
    ///
    /// Under [`DuplicateAttributePolicy::DropLater`] the duplicate stays in place
    /// until its value has been read, so the value does not leak into the
    /// earlier attribute. [`Self::finish_attribute`] removes it.
    pub(super) fn check_duplicate_attribute(&mut self) {
        let is_duplicate = self
            .current_token
            .as_tag()
            .is_some_and(Tag::current_attribute_name_is_duplicate);

        if is_duplicate {
            self.log_parse_error(ParseErrorKind::DuplicateAttribute);
            if self.config.duplicate_attributes == DuplicateAttributePolicy::DropLater {
                self.drop_current_attribute = true;
            }
        }
    }

    /// Close out the current attribute, removing it if it was marked as a
    /// dropped duplicate.
    pub(super) fn finish_attribute(&mut self) {
        if std::mem::take(&mut self.drop_current_attribute) {
            if let Some(tag) = self.current_tag() {
                tag.remove_current_attribute();
            }
        }
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records a parse error and, if enabled, reports it through the
    /// marten-common warning system. Parse errors are never fatal.
    pub(super) fn log_parse_error(&mut self, kind: ParseErrorKind) {
        let error = ParseError::new(kind, self.current_pos);
        if self.config.report_warnings {
            let _ = warn_once("HTML Tokenizer", &error.to_string());
        }
        self.errors.push(error);
    }
}
