use crate::union::typed_union;
use crate::validate::{Problem, Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::{MRKDWN, PLAIN_TEXT};

/// A `plain_text` text object.
#[block_model(kind = PLAIN_TEXT)]
#[derive(Eq)]
pub struct PlainText {
    #[serde(rename = "type")]
    kind: Tag<PlainText>,
    text: String,
    /// Whether emoji colon shortcodes are rendered as emoji.
    emoji: Option<bool>,
}

impl PlainText {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { kind: Tag::new(), text: text.into(), emoji: None }
    }

    /// Sets the `emoji` flag.
    #[must_use]
    pub fn with_emoji(mut self, emoji: bool) -> Self {
        self.emoji = Some(emoji);
        self
    }

    /// Number of characters as the API counts them.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A `mrkdwn` text object.
#[block_model(kind = MRKDWN)]
#[derive(Eq)]
pub struct Markdown {
    #[serde(rename = "type")]
    kind: Tag<Markdown>,
    text: String,
    /// Disables automatic parsing of URLs, channel names and mentions.
    verbatim: Option<bool>,
}

impl Markdown {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { kind: Tag::new(), text: text.into(), verbatim: None }
    }

    #[must_use]
    pub fn with_verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = Some(verbatim);
        self
    }
}

typed_union! {
    /// Either kind of text object.
    pub enum TextObject {
        Plain(PlainText),
        Markdown(Markdown),
    }
}

impl TextObject {
    /// Returns the raw text body regardless of its kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(plain) => plain.text(),
            Self::Markdown(markdown) => markdown.text(),
        }
    }

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

impl Eq for TextObject {}

// --- Conversions ---

impl From<&str> for PlainText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PlainText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Bare strings become plain text, which is what most fields default to.
impl From<&str> for TextObject {
    fn from(text: &str) -> Self {
        Self::Plain(PlainText::new(text))
    }
}

impl From<String> for TextObject {
    fn from(text: String) -> Self {
        Self::Plain(PlainText::new(text))
    }
}

// --- Capabilities ---

impl Element for PlainText {
    const CONTAINERS: Containers = Containers::CONTEXT;
}

impl Element for Markdown {
    const CONTAINERS: Containers = Containers::CONTEXT;
}

// --- Validation ---

impl Validate for PlainText {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        if self.text.is_empty() {
            validator.report_at("text", Problem::Empty);
        }
    }
}

impl Validate for Markdown {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        if self.text.is_empty() {
            validator.report_at("text", Problem::Empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_flags_are_omitted() {
        let value = serde_json::to_value(PlainText::new("Hi")).expect("serialize");
        assert_eq!(value, json!({ "type": "plain_text", "text": "Hi" }));

        let value = serde_json::to_value(Markdown::new("*Hi*").with_verbatim(true)).expect("serialize");
        assert_eq!(value, json!({ "type": "mrkdwn", "text": "*Hi*", "verbatim": true }));
    }

    #[test]
    fn text_object_dispatches_on_type() {
        let text: TextObject =
            serde_json::from_value(json!({ "type": "mrkdwn", "text": "_a_" })).expect("decode");
        assert_eq!(text, TextObject::Markdown(Markdown::new("_a_")));
        assert_eq!(text.type_name(), "mrkdwn");
        assert_eq!(text.text(), "_a_");

        let err = serde_json::from_value::<TextObject>(json!({ "type": "html", "text": "x" }))
            .expect_err("unknown type");
        assert!(err.to_string().contains("expected `plain_text` or `mrkdwn`"), "{err}");
    }

    #[test]
    fn char_len_counts_characters() {
        assert_eq!(PlainText::new("héllo").char_len(), 5);
    }
}
