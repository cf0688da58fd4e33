use crate::blocks::Block;
use crate::validate::{Problem, Validate, Validator};
use bkit_derive::block_model;
use typed_builder::TypedBuilder;

/// The body of a `chat.postMessage` call, minus transport fields like `channel`.
///
/// `text` doubles as the notification fallback when `blocks` are present.
#[block_model]
#[derive(Default, TypedBuilder)]
pub struct Message {
    #[builder(default, setter(strip_option, into))]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into))]
    blocks: Vec<Block>,
    /// Posts the message as a reply in this thread.
    #[builder(default, setter(strip_option, into))]
    thread_ts: Option<String>,
    /// Set to `false` to disable markdown parsing of `text`.
    #[builder(default, setter(strip_option))]
    mrkdwn: Option<bool>,
}

impl Message {
    /// A message made of `blocks`, with no fallback text.
    #[must_use]
    pub fn from_blocks(blocks: impl IntoIterator<Item = impl Into<Block>>) -> Self {
        Self { blocks: blocks.into_iter().map(Into::into).collect(), ..Self::default() }
    }
}

impl Validate for Message {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        if self.blocks.is_empty() && self.text.as_deref().is_none_or(str::is_empty) {
            validator.report_at("text", Problem::Empty);
        }
        validator.check_count("blocks", self.blocks.len(), limits.message_blocks);
        validator.field("blocks", &self.blocks);
    }
}
