//! Reusable value fragments embedded in elements and blocks.

mod confirm;
mod dispatch;
mod option;
mod text;

pub use confirm::{ButtonStyle, Confirm};
pub use dispatch::{DispatchActionConfig, TriggerAction};
pub use option::OptionObject;
pub use text::{Markdown, PlainText, TextObject};
