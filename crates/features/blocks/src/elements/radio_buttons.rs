use crate::composition::{Confirm, OptionObject};
use crate::validate::{Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::RADIO_BUTTONS;
use typed_builder::TypedBuilder;

/// A single-choice group of options.
#[block_model(kind = RADIO_BUTTONS)]
#[derive(Eq, TypedBuilder)]
pub struct RadioButtons {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<RadioButtons>,
    #[builder(setter(into))]
    action_id: String,
    /// Choices in display order.
    #[builder(setter(into))]
    options: Vec<OptionObject>,
    /// Preselected choice; must equal one of `options`.
    #[builder(default, setter(strip_option))]
    initial_option: Option<OptionObject>,
    #[builder(default, setter(strip_option))]
    confirm: Option<Confirm>,
    #[builder(default, setter(strip_option))]
    focus_on_load: Option<bool>,
}

impl Element for RadioButtons {
    const CONTAINERS: Containers = Containers::INTERACTIVE;
}

impl Validate for RadioButtons {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_action_id(&self.action_id);
        validator.check_options("options", &self.options, limits.radio_options);
        if let Some(initial) = &self.initial_option {
            validator.check_initial_option("initial_option", initial, &self.options);
        }
        if let Some(confirm) = &self.confirm {
            validator.field("confirm", confirm);
        }
        validator.check_focus(self.focus_on_load);
    }
}
