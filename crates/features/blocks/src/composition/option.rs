use super::text::{PlainText, TextObject};
use crate::validate::{Validate, Validator};
use bkit_derive::block_model;

/// A selectable choice inside radio buttons, checkboxes and menus.
#[block_model]
#[derive(Eq)]
pub struct OptionObject {
    /// Label shown to the user.
    text: TextObject,
    /// Value sent back in the interaction payload.
    value: String,
    description: Option<PlainText>,
    /// Only honoured inside overflow menus.
    url: Option<String>,
}

impl OptionObject {
    #[must_use]
    pub fn new(text: impl Into<TextObject>, value: impl Into<String>) -> Self {
        Self { text: text.into(), value: value.into(), description: None, url: None }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<PlainText>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Validate for OptionObject {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.field("text", &self.text);
        validator.check_len("text", self.text.text(), limits.option_text);
        validator.check_len("value", &self.value, limits.option_value);
        if let Some(description) = &self.description {
            validator.check_len("description", description.text(), limits.option_description);
        }
        if let Some(url) = &self.url {
            validator.check_len("url", url, limits.url);
        }
    }
}
