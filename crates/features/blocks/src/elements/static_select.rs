use crate::composition::{Confirm, OptionObject, PlainText};
use crate::validate::{Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::STATIC_SELECT;
use typed_builder::TypedBuilder;

/// A single-select menu over a fixed list of options.
#[block_model(kind = STATIC_SELECT)]
#[derive(Eq, TypedBuilder)]
pub struct StaticSelect {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<StaticSelect>,
    #[builder(setter(into))]
    action_id: String,
    #[builder(setter(into))]
    options: Vec<OptionObject>,
    #[builder(default, setter(strip_option, into))]
    placeholder: Option<PlainText>,
    #[builder(default, setter(strip_option))]
    initial_option: Option<OptionObject>,
    #[builder(default, setter(strip_option))]
    confirm: Option<Confirm>,
    #[builder(default, setter(strip_option))]
    focus_on_load: Option<bool>,
}

impl Element for StaticSelect {
    const CONTAINERS: Containers = Containers::INTERACTIVE;
}

impl Validate for StaticSelect {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_action_id(&self.action_id);
        validator.check_options("options", &self.options, limits.select_options);
        if let Some(placeholder) = &self.placeholder {
            validator.field("placeholder", placeholder);
            validator.check_len("placeholder", placeholder.text(), limits.placeholder);
        }
        if let Some(initial) = &self.initial_option {
            validator.check_initial_option("initial_option", initial, &self.options);
        }
        if let Some(confirm) = &self.confirm {
            validator.field("confirm", confirm);
        }
        validator.check_focus(self.focus_on_load);
    }
}
