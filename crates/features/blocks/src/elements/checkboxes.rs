use crate::composition::{Confirm, OptionObject};
use crate::validate::{Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::CHECKBOXES;
use typed_builder::TypedBuilder;

/// A multiple-choice group of options.
#[block_model(kind = CHECKBOXES)]
#[derive(Eq, TypedBuilder)]
pub struct Checkboxes {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<Checkboxes>,
    #[builder(setter(into))]
    action_id: String,
    #[builder(setter(into))]
    options: Vec<OptionObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into))]
    initial_options: Vec<OptionObject>,
    #[builder(default, setter(strip_option))]
    confirm: Option<Confirm>,
    #[builder(default, setter(strip_option))]
    focus_on_load: Option<bool>,
}

impl Element for Checkboxes {
    const CONTAINERS: Containers = Containers::INTERACTIVE;
}

impl Validate for Checkboxes {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_action_id(&self.action_id);
        validator.check_options("options", &self.options, limits.checkbox_options);
        validator.each("initial_options", &self.initial_options, |validator, initial| {
            validator.check_initial_option("", initial, &self.options);
        });
        if let Some(confirm) = &self.confirm {
            validator.field("confirm", confirm);
        }
        validator.check_focus(self.focus_on_load);
    }
}
