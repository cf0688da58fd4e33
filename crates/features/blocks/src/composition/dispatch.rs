use crate::validate::{Problem, Validate, Validator};
use bkit_derive::block_model;
use serde::{Deserialize, Serialize};

/// Interaction that makes a text input dispatch a `block_actions` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    OnEnterPressed,
    OnCharacterEntered,
}

/// Determines when a plain-text input dispatches its value.
#[block_model]
#[derive(Eq)]
pub struct DispatchActionConfig {
    trigger_actions_on: Vec<TriggerAction>,
}

impl DispatchActionConfig {
    #[must_use]
    pub fn new(triggers: impl IntoIterator<Item = TriggerAction>) -> Self {
        Self { trigger_actions_on: triggers.into_iter().collect() }
    }
}

impl From<TriggerAction> for DispatchActionConfig {
    fn from(trigger: TriggerAction) -> Self {
        Self::new([trigger])
    }
}

impl Validate for DispatchActionConfig {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        if self.trigger_actions_on.is_empty() {
            validator.report_at("trigger_actions_on", Problem::Empty);
        }
    }
}
