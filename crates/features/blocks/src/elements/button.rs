use crate::composition::{ButtonStyle, Confirm, PlainText};
use crate::validate::{Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::BUTTON;
use typed_builder::TypedBuilder;

/// An interactive button, optionally acting as a link.
#[block_model(kind = BUTTON)]
#[derive(Eq, TypedBuilder)]
pub struct Button {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<Button>,
    #[builder(setter(into))]
    text: PlainText,
    #[builder(setter(into))]
    action_id: String,
    #[builder(default, setter(strip_option, into))]
    url: Option<String>,
    #[builder(default, setter(strip_option, into))]
    value: Option<String>,
    #[builder(default, setter(strip_option))]
    style: Option<ButtonStyle>,
    #[builder(default, setter(strip_option))]
    confirm: Option<Confirm>,
    /// Read by screen readers instead of `text`.
    #[builder(default, setter(strip_option, into))]
    accessibility_label: Option<String>,
}

impl Element for Button {
    const CONTAINERS: Containers = Containers::SECTION.union(Containers::ACTIONS);
}

impl Validate for Button {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.field("text", &self.text);
        validator.check_len("text", self.text.text(), limits.button_text);
        validator.check_action_id(&self.action_id);
        if let Some(url) = &self.url {
            validator.check_len("url", url, limits.url);
        }
        if let Some(value) = &self.value {
            validator.check_len("value", value, limits.button_value);
        }
        if let Some(confirm) = &self.confirm {
            validator.field("confirm", confirm);
        }
        if let Some(label) = &self.accessibility_label {
            validator.check_len("accessibility_label", label, limits.accessibility_label);
        }
    }
}
