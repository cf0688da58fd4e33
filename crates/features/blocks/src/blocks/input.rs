use crate::composition::PlainText;
use crate::elements::InputElement;
use crate::validate::{Validate, Validator};
use crate::Tag;
use bkit_derive::block_model;
use bkit_domain::constants::INPUT;
use typed_builder::TypedBuilder;

/// A labelled form field holding exactly one input element.
#[block_model(kind = INPUT)]
#[derive(TypedBuilder)]
pub struct InputBlock {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<InputBlock>,
    #[builder(setter(into))]
    label: PlainText,
    #[builder(setter(into))]
    element: InputElement,
    /// Makes the element dispatch `block_actions` like an actions block would.
    #[builder(default, setter(strip_option))]
    dispatch_action: Option<bool>,
    #[builder(default, setter(strip_option, into))]
    hint: Option<PlainText>,
    /// Lets the view be submitted with this field empty.
    #[builder(default, setter(strip_option))]
    optional: Option<bool>,
    #[builder(default, setter(strip_option, into))]
    block_id: Option<String>,
}

impl InputBlock {
    #[must_use]
    pub fn new(label: impl Into<PlainText>, element: impl Into<InputElement>) -> Self {
        Self::builder().label(label).element(element).build()
    }
}

impl Validate for InputBlock {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_block_id(self.block_id.as_deref());
        validator.field("label", &self.label);
        validator.check_len("label", self.label.text(), limits.input_label);
        if let Some(hint) = &self.hint {
            validator.field("hint", hint);
            validator.check_len("hint", hint.text(), limits.input_hint);
        }
        validator.field("element", &self.element);
    }
}
