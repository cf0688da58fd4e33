//! Top-level surfaces: messages, modals and bare block lists.

mod message;
mod modal;

pub use message::Message;
pub use modal::Modal;

use crate::Typed;
use crate::blocks::Block;
use crate::validate::{Validate, Validator};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Anything the API accepts as a complete payload.
///
/// Decoding picks the variant from the JSON shape: an array is a bare block
/// list, an object typed `modal` is a modal, any other object is a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Message(Message),
    Modal(Modal),
    Blocks(Vec<Block>),
}

impl Payload {
    /// Short name of the surface kind, for logs and reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Modal(_) => Modal::TYPE,
            Self::Blocks(_) => "blocks",
        }
    }

    /// The blocks of the payload, whatever its surface.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        match self {
            Self::Message(message) => message.blocks(),
            Self::Modal(modal) => modal.blocks(),
            Self::Blocks(blocks) => blocks,
        }
    }
}

impl From<Message> for Payload {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

impl From<Modal> for Payload {
    fn from(modal: Modal) -> Self {
        Self::Modal(modal)
    }
}

impl From<Vec<Block>> for Payload {
    fn from(blocks: Vec<Block>) -> Self {
        Self::Blocks(blocks)
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let decoded = if value.is_array() {
            serde_json::from_value(value).map(Self::Blocks)
        } else if value.get("type").and_then(Value::as_str) == Some(Modal::TYPE) {
            serde_json::from_value(value).map(Self::Modal)
        } else if value.is_object() {
            serde_json::from_value(value).map(Self::Message)
        } else {
            return Err(D::Error::invalid_type(
                unexpected(&value),
                &"a message object, a modal view or an array of blocks",
            ));
        };
        decoded.map_err(D::Error::custom)
    }
}

fn unexpected(value: &Value) -> serde::de::Unexpected<'_> {
    use serde::de::Unexpected;

    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(flag) => Unexpected::Bool(*flag),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(text) => Unexpected::Str(text),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

impl Validate for Payload {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        match self {
            Self::Message(message) => message.validate_into(validator),
            Self::Modal(modal) => modal.validate_into(validator),
            Self::Blocks(blocks) => {
                let limits = validator.limits();
                validator.check_count("", blocks.len(), limits.message_blocks);
                blocks.validate_into(validator);
            },
        }
    }
}
