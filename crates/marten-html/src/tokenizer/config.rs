//! Tokenizer configuration.

/// What to do when a tag carries two attributes with the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateAttributePolicy {
    /// Keep every attribute in source order. A duplicate-attribute parse
    /// error is still recorded.
    #[default]
    Keep,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "if there is already an attribute on the token with the exact same
    /// name, then this is a duplicate-attribute parse error and the new
    /// attribute must be removed from the token."
    DropLater,
}

/// Knobs for [`HTMLTokenizer`](super::HTMLTokenizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Duplicate attribute handling.
    pub duplicate_attributes: DuplicateAttributePolicy,
    /// Also print parse errors through `marten_common::warning::warn_once`.
    pub report_warnings: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            duplicate_attributes: DuplicateAttributePolicy::default(),
            report_warnings: true,
        }
    }
}

impl TokenizerConfig {
    /// Set the duplicate attribute policy.
    #[must_use]
    pub const fn with_duplicate_attributes(mut self, policy: DuplicateAttributePolicy) -> Self {
        self.duplicate_attributes = policy;
        self
    }

    /// Enable or disable stderr warnings for parse errors.
    #[must_use]
    pub const fn with_warnings(mut self, report_warnings: bool) -> Self {
        self.report_warnings = report_warnings;
        self
    }
}
