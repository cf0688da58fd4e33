use crate::composition::PlainText;
use crate::validate::{Validate, Validator};
use crate::Tag;
use bkit_derive::block_model;
use bkit_domain::constants::HEADER;

/// Large bold heading text.
#[block_model(kind = HEADER)]
#[derive(Eq)]
pub struct HeaderBlock {
    #[serde(rename = "type")]
    kind: Tag<HeaderBlock>,
    text: PlainText,
    block_id: Option<String>,
}

impl HeaderBlock {
    #[must_use]
    pub fn new(text: impl Into<PlainText>) -> Self {
        Self { kind: Tag::new(), text: text.into(), block_id: None }
    }

    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

impl Validate for HeaderBlock {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_block_id(self.block_id.as_deref());
        validator.field("text", &self.text);
        validator.check_len("text", self.text.text(), limits.header_text);
    }
}
