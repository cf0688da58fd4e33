use crate::composition::{DispatchActionConfig, PlainText};
use crate::validate::{Problem, Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::PLAIN_TEXT_INPUT;
use typed_builder::TypedBuilder;

/// A free-form text field. Only valid inside input blocks.
///
/// ```
/// use bkit_blocks::elements::PlainTextInput;
///
/// let input = PlainTextInput::builder()
///     .action_id("a1")
///     .placeholder("Enter value")
///     .build();
///
/// assert_eq!(
///     bkit_blocks::to_json(&input).unwrap(),
///     r#"{"type":"plain_text_input","action_id":"a1","placeholder":{"type":"plain_text","text":"Enter value"}}"#,
/// );
/// ```
#[block_model(kind = PLAIN_TEXT_INPUT)]
#[derive(Eq, TypedBuilder)]
pub struct PlainTextInput {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<PlainTextInput>,
    #[builder(setter(into))]
    action_id: String,
    #[builder(default, setter(strip_option, into))]
    placeholder: Option<PlainText>,
    #[builder(default, setter(strip_option, into))]
    initial_value: Option<String>,
    #[builder(default, setter(strip_option))]
    multiline: Option<bool>,
    #[builder(default, setter(strip_option))]
    min_length: Option<u32>,
    #[builder(default, setter(strip_option))]
    max_length: Option<u32>,
    #[builder(default, setter(strip_option, into))]
    dispatch_action_config: Option<DispatchActionConfig>,
    #[builder(default, setter(strip_option))]
    focus_on_load: Option<bool>,
}

impl Element for PlainTextInput {
    const CONTAINERS: Containers = Containers::INPUT;
}

impl Validate for PlainTextInput {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_action_id(&self.action_id);
        if let Some(placeholder) = &self.placeholder {
            validator.field("placeholder", placeholder);
            validator.check_len("placeholder", placeholder.text(), limits.placeholder);
        }

        for (name, bound) in [("min_length", self.min_length), ("max_length", self.max_length)] {
            if let Some(value) = bound.filter(|value| *value > limits.input_length) {
                validator.report_at(name, Problem::OutOfRange { value, max: limits.input_length });
            }
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length)
            && min > max
        {
            validator.report_at("min_length", Problem::Inverted { min, max });
        }

        if let (Some(initial), Some(max)) = (&self.initial_value, self.max_length) {
            validator.check_len("initial_value", initial, usize::try_from(max).unwrap_or(usize::MAX));
        }
        if let Some(config) = &self.dispatch_action_config {
            validator.field("dispatch_action_config", config);
        }
        validator.check_focus(self.focus_on_load);
    }
}
