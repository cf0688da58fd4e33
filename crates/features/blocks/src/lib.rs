//! # Block Kit Model
//!
//! A typed object model for composing Slack Block Kit payloads: composition
//! objects, elements, layout blocks and the surfaces that carry them.
//!
//! ## Design
//!
//! * **Absent, not null**: every optional field left unset is omitted from the
//!   encoded JSON.
//! * **Fixed discriminants**: each typed model carries its `type` as a zero-sized
//!   [`Tag`]. Callers cannot set it, and decoding a different discriminant fails.
//! * **Capability typing**: each container kind has its own closed union
//!   ([`elements::ActionsElement`], [`elements::InputElement`], ...), so an
//!   element can only be placed where the API allows it. Misplacements are
//!   compile errors.
//! * **Opt-in validation**: construction accepts anything. Documented limits are
//!   checked only when [`Validate::validate`] is called.
//!
//! ## Example
//!
//! ```rust
//! use bkit_blocks::prelude::*;
//!
//! # fn main() -> Result<(), BlockError> {
//! let choice = |label: &str| OptionObject::new(label, label.to_lowercase());
//!
//! let actions = ActionsBuilder::new()
//!     .add_element(
//!         RadioButtons::builder()
//!             .action_id("size")
//!             .options(vec![choice("Small"), choice("Large")])
//!             .build(),
//!     )
//!     .add_element(Button::builder().text("Order").action_id("order").build());
//!
//! let message = Message::builder()
//!     .text("Pick a size")
//!     .blocks(vec![
//!         SectionBlock::text_only(Markdown::new("*Coffee order*")).into(),
//!         Block::from(ActionsBlock::from(actions)),
//!     ])
//!     .build();
//!
//! message.validate()?;
//! let json = bkit_blocks::to_json(&message)?;
//! assert!(json.contains(r#""type":"radio_buttons""#));
//! # Ok(())
//! # }
//! ```

extern crate self as bkit_blocks;

mod builder;
mod codec;
mod error;
mod tag;
mod union;

pub mod blocks;
pub mod composition;
pub mod elements;
pub mod surface;
pub mod validate;

pub use builder::{
    ActionsBuilder, BlocksBuilder, ContextBuilder, ElementsBuilder, FieldsBuilder,
};
pub use codec::{from_json, to_json, to_json_pretty, to_value};
pub use error::{BlockError, BlockErrorExt};
pub use tag::{Element, Tag, Typed};

pub mod prelude {
    pub use crate::blocks::{
        ActionsBlock, Block, ContextBlock, DividerBlock, HeaderBlock, InputBlock, SectionBlock,
    };
    pub use crate::composition::{
        ButtonStyle, Confirm, DispatchActionConfig, Markdown, OptionObject, PlainText,
        TextObject, TriggerAction,
    };
    pub use crate::elements::{
        ActionsElement, Button, Checkboxes, ContextElement, DatePicker, Image, InputElement,
        PlainTextInput, RadioButtons, SectionAccessory, StaticSelect,
    };
    pub use crate::surface::{Message, Modal, Payload};
    pub use crate::validate::Validate;
    pub use crate::{
        ActionsBuilder, BlockError, BlocksBuilder, ContextBuilder, ElementsBuilder,
        FieldsBuilder,
    };
}
