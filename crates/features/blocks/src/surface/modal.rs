use crate::Tag;
use crate::blocks::Block;
use crate::composition::PlainText;
use crate::validate::{Problem, Validate, Validator};
use bkit_derive::block_model;
use bkit_domain::constants::MODAL;
use typed_builder::TypedBuilder;

/// A modal view, as passed to `views.open` and friends.
#[block_model(kind = MODAL)]
#[derive(TypedBuilder)]
pub struct Modal {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<Modal>,
    #[builder(setter(into))]
    title: PlainText,
    #[builder(default, setter(into))]
    blocks: Vec<Block>,
    #[builder(default, setter(strip_option, into))]
    close: Option<PlainText>,
    #[builder(default, setter(strip_option, into))]
    submit: Option<PlainText>,
    /// Opaque string echoed back in interaction payloads.
    #[builder(default, setter(strip_option, into))]
    private_metadata: Option<String>,
    #[builder(default, setter(strip_option, into))]
    callback_id: Option<String>,
    /// Closes the whole view stack when this view is closed.
    #[builder(default, setter(strip_option))]
    clear_on_close: Option<bool>,
    /// Sends a `view_closed` event when the user dismisses the view.
    #[builder(default, setter(strip_option))]
    notify_on_close: Option<bool>,
    #[builder(default, setter(strip_option, into))]
    external_id: Option<String>,
}

impl Validate for Modal {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.field("title", &self.title);
        validator.check_len("title", self.title.text(), limits.modal_title);
        for (name, button) in [("close", &self.close), ("submit", &self.submit)] {
            if let Some(button) = button {
                validator.field(name, button);
                validator.check_len(name, button.text(), limits.modal_button);
            }
        }
        if self.submit.is_none() && self.blocks.iter().any(Block::is_input) {
            validator.report_at("submit", Problem::MissingSubmit);
        }
        if let Some(metadata) = &self.private_metadata {
            validator.check_len("private_metadata", metadata, limits.private_metadata);
        }
        if let Some(callback_id) = &self.callback_id {
            validator.check_len("callback_id", callback_id, limits.callback_id);
        }

        validator.check_count("blocks", self.blocks.len(), limits.modal_blocks);
        validator.field("blocks", &self.blocks);
    }
}
