use crate::elements::ActionsElement;
use crate::validate::{Problem, Validate, Validator};
use crate::Tag;
use bkit_derive::block_model;
use bkit_domain::constants::ACTIONS;
use fxhash::FxHashSet;

/// A row of interactive elements.
#[block_model(kind = ACTIONS)]
pub struct ActionsBlock {
    #[serde(rename = "type")]
    kind: Tag<ActionsBlock>,
    elements: Vec<ActionsElement>,
    block_id: Option<String>,
}

impl ActionsBlock {
    #[must_use]
    pub fn new(elements: impl IntoIterator<Item = impl Into<ActionsElement>>) -> Self {
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

impl Validate for ActionsBlock {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_block_id(self.block_id.as_deref());
        if self.elements.is_empty() {
            validator.report_at("elements", Problem::Empty);
        }
        validator.check_count("elements", self.elements.len(), limits.actions_elements);

        let mut seen = FxHashSet::default();
        validator.each("elements", &self.elements, |validator, element| {
            if !seen.insert(element.action_id()) {
                let action_id = element.action_id().to_owned();
                validator.report_at("action_id", Problem::DuplicateActionId { action_id });
            }
            element.validate_into(validator);
        });
    }
}
