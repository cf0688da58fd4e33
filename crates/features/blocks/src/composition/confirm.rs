use super::text::{PlainText, TextObject};
use crate::validate::{Validate, Validator};
use bkit_derive::block_model;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Colour scheme of a button or of the confirm button of a dialog.
///
/// Leaving the style unset selects the API default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// A confirmation dialog shown before an interactive element fires.
///
/// ```
/// use bkit_blocks::composition::{ButtonStyle, Confirm};
///
/// let confirm = Confirm::builder()
///     .title("Delete?")
///     .text("This cannot be undone.")
///     .confirm("Delete")
///     .deny("Keep")
///     .style(ButtonStyle::Danger)
///     .build();
///
/// assert_eq!(confirm.style(), Some(&ButtonStyle::Danger));
/// ```
#[block_model]
#[derive(Eq, TypedBuilder)]
pub struct Confirm {
    #[builder(setter(into))]
    title: PlainText,
    #[builder(setter(into))]
    text: TextObject,
    /// Label of the accepting button.
    #[builder(setter(into))]
    confirm: PlainText,
    /// Label of the cancelling button.
    #[builder(setter(into))]
    deny: PlainText,
    #[builder(default, setter(strip_option))]
    style: Option<ButtonStyle>,
}

impl Validate for Confirm {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.field("title", &self.title);
        validator.check_len("title", self.title.text(), limits.confirm_title);
        validator.field("text", &self.text);
        validator.check_len("text", self.text.text(), limits.confirm_text);
        validator.field("confirm", &self.confirm);
        validator.check_len("confirm", self.confirm.text(), limits.confirm_button);
        validator.field("deny", &self.deny);
        validator.check_len("deny", self.deny.text(), limits.confirm_button);
    }
}
