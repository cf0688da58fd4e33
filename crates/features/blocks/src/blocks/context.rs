use crate::elements::ContextElement;
use crate::validate::{Problem, Validate, Validator};
use crate::Tag;
use bkit_derive::block_model;
use bkit_domain::constants::CONTEXT;

/// Small, muted text and images.
#[block_model(kind = CONTEXT)]
pub struct ContextBlock {
    #[serde(rename = "type")]
    kind: Tag<ContextBlock>,
    elements: Vec<ContextElement>,
    block_id: Option<String>,
}

impl ContextBlock {
    #[must_use]
    pub fn new(elements: impl IntoIterator<Item = impl Into<ContextElement>>) -> Self {
        Self {
            kind: Tag::new(),
            elements: elements.into_iter().map(Into::into).collect(),
            block_id: None,
        }
    }

    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

impl Validate for ContextBlock {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_block_id(self.block_id.as_deref());
        if self.elements.is_empty() {
            validator.report_at("elements", Problem::Empty);
        }
        validator.check_count("elements", self.elements.len(), limits.context_elements);
        validator.each("elements", &self.elements, |validator, element| {
            element.validate_into(validator);
        });
    }
}
