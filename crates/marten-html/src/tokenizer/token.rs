use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

/// "DOCTYPE tokens have a name, a public identifier, a system identifier,
/// and a force-quirks flag. When a DOCTYPE token is created, its name,
/// public identifier, and system identifier must be marked as missing
/// (which is a distinct state from the empty string), and the force-quirks
/// flag must be set to off (its other state is on)."
///
/// Missing is `None`; present-but-empty is `Some(String::new())`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Doctype {
    /// "a name"
    pub name: Option<String>,
    /// "a public identifier"
    pub public_identifier: Option<String>,
    /// "a system identifier"
    pub system_identifier: Option<String>,
    /// "a force-quirks flag"
    pub force_quirks: bool,
}

impl Doctype {
    /// A DOCTYPE with every identifier missing and force-quirks off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            public_identifier: None,
            system_identifier: None,
            force_quirks: false,
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    ///
    /// "Append the current input character to the current DOCTYPE token's name."
    ///
    /// The first append marks the name as present.
    pub fn append_to_name(&mut self, c: char) {
        self.name.get_or_insert_with(String::new).push(c);
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub const fn set_force_quirks(&mut self) {
        self.force_quirks = true;
    }
}

/// "Start and end tag tokens have a tag name, a self-closing flag, and a
/// list of attributes, each of which has a name and a value. When a start
/// or end tag token is created, its self-closing flag must be unset (its
/// other state is that it be set), and its attributes list must be empty."
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// "a tag name"
    pub name: String,
    /// "a list of attributes", in source order
    pub attributes: Vec<Attribute>,
    /// "a self-closing flag"
    pub self_closing: bool,
    /// Set by a consumer once it has honored the self-closing flag.
    pub self_closing_acknowledged: bool,
}

impl Tag {
    /// An empty tag: no name, no attributes, flags unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            attributes: Vec::new(),
            self_closing: false,
            self_closing_acknowledged: false,
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    ///
    /// "Append the current input character to the current tag token's tag name."
    pub fn append_to_tag_name(&mut self, c: char) {
        self.name.push(c);
    }

    /// Append an attribute to the end of the attribute list.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    ///
    /// "Start a new attribute in the current tag token."
    pub fn start_new_attribute(&mut self) {
        self.add_attribute(Attribute::default());
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "Append the current input character to the current attribute's name."
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.name.push(c);
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    ///
    /// "Append the current input character to the current attribute's value."
    pub fn append_to_current_attribute_value(&mut self, c: char) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.value.push(c);
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token."
    pub const fn set_self_closing(&mut self) {
        self.self_closing = true;
    }

    /// "if there is already an attribute on the token with the exact same
    /// name, then this is a duplicate-attribute parse error"
    #[must_use]
    pub fn current_attribute_name_is_duplicate(&self) -> bool {
        self.attributes.split_last().is_some_and(|(current, earlier)| {
            earlier.iter().any(|attr| attr.name == current.name)
        })
    }

    /// Remove the current (last) attribute. Only used for duplicate names.
    pub fn remove_current_attribute(&mut self) {
        let _ = self.attributes.pop();
    }

    /// Value of the first attribute with the given name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

/// The kind tag of a [`Token`], fixed when the token is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TokenKind {
    /// Placeholder for "no token yet".
    Invalid,
    /// A DOCTYPE declaration.
    #[strum(serialize = "DOCTYPE")]
    Doctype,
    /// A start tag.
    StartTag,
    /// An end tag.
    EndTag,
    /// A character.
    Character,
    /// End of input.
    EndOfFile,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// Comment tokens are not produced by this tokenizer. `Invalid` is the
/// placeholder left behind when a finished token is handed to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Token {
    /// No token under construction. Never emitted.
    #[default]
    Invalid,

    /// A DOCTYPE token.
    #[serde(rename = "DOCTYPE")]
    Doctype(Doctype),

    /// A start tag token.
    StartTag(Tag),

    /// An end tag token. Shares the start tag shape.
    EndTag(Tag),

    /// "Comment and character tokens have data."
    Character {
        /// "data"
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Create a DOCTYPE token with every identifier missing.
    #[must_use]
    pub const fn new_doctype() -> Self {
        Self::Doctype(Doctype::new())
    }

    /// Create a start tag token with an empty name.
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag(Tag::new())
    }

    /// Create an end tag token with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag(Tag::new())
    }

    /// Create a character token holding `c`.
    #[must_use]
    pub fn new_character(c: char) -> Self {
        Self::Character {
            data: String::from(c),
        }
    }

    /// Create an end-of-file token.
    #[must_use]
    pub const fn new_eof() -> Self {
        Self::EndOfFile
    }

    /// The kind tag of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Invalid => TokenKind::Invalid,
            Self::Doctype(_) => TokenKind::Doctype,
            Self::StartTag(_) => TokenKind::StartTag,
            Self::EndTag(_) => TokenKind::EndTag,
            Self::Character { .. } => TokenKind::Character,
            Self::EndOfFile => TokenKind::EndOfFile,
        }
    }

    /// Returns false only for the placeholder.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// The tag of a start or end tag token.
    #[must_use]
    pub const fn as_tag(&self) -> Option<&Tag> {
        match self {
            Self::StartTag(tag) | Self::EndTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Mutable access to the tag of a start or end tag token.
    pub const fn as_tag_mut(&mut self) -> Option<&mut Tag> {
        match self {
            Self::StartTag(tag) | Self::EndTag(tag) => Some(tag),
            _ => None,
        }
    }

    /// The DOCTYPE payload, if this is a DOCTYPE token.
    #[must_use]
    pub const fn as_doctype(&self) -> Option<&Doctype> {
        match self {
            Self::Doctype(doctype) => Some(doctype),
            _ => None,
        }
    }

    /// Mutable access to the DOCTYPE payload.
    pub const fn as_doctype_mut(&mut self) -> Option<&mut Doctype> {
        match self {
            Self::Doctype(doctype) => Some(doctype),
            _ => None,
        }
    }

    /// "Append the current input character to the token's data."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-character token, indicating a tokenizer bug.
    pub fn append_to_data(&mut self, c: char) {
        match self {
            Self::Character { data } => data.push(c),
            _ => panic!("append_to_data called on non-character token"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "Invalid"),
            Self::Doctype(doctype) => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = &doctype.name {
                    write!(f, " {n}")?;
                }
                if let Some(pub_id) = &doctype.public_identifier {
                    write!(f, " PUBLIC \"{pub_id}\"")?;
                }
                if let Some(sys_id) = &doctype.system_identifier {
                    write!(f, " SYSTEM \"{sys_id}\"")?;
                }
                if doctype.force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag(tag) => {
                write!(f, "<{}", tag.name)?;
                for attr in &tag.attributes {
                    write!(f, " {attr}")?;
                }
                if tag.self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag(tag) => write!(f, "</{}>", tag.name),
            // Show whitespace characters explicitly
            Self::Character { data } => match data.as_str() {
                "\n" => write!(f, "Character(\\n)"),
                "\r" => write!(f, "Character(\\r)"),
                "\t" => write!(f, "Character(\\t)"),
                " " => write!(f, "Character(SPACE)"),
                other => write!(f, "Character({other})"),
            },
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
