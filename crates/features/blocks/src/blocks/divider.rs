use crate::validate::{Validate, Validator};
use crate::Tag;
use bkit_derive::block_model;
use bkit_domain::constants::DIVIDER;

#[block_model(kind = DIVIDER)]
#[derive(Eq, Default)]
pub struct DividerBlock {
    #[serde(rename = "type")]
    kind: Tag<DividerBlock>,
    block_id: Option<String>,
}

impl DividerBlock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

impl Validate for DividerBlock {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        validator.check_block_id(self.block_id.as_deref());
    }
}
