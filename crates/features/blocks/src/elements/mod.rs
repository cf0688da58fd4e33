//! Typed elements and the per-container unions that hold them.
//!
//! Each container has its own closed union. An element converts into a union
//! only when it may legally appear in that container, so misplaced elements are
//! rejected by the compiler:
//!
//! ```compile_fail
//! use bkit_blocks::ActionsBuilder;
//! use bkit_blocks::elements::PlainTextInput;
//!
//! // Text inputs belong in input blocks only.
//! let actions = ActionsBuilder::new()
//!     .add_element(PlainTextInput::builder().action_id("a1").build());
//! ```
//!
//! ```compile_fail
//! use bkit_blocks::blocks::InputBlock;
//! use bkit_blocks::elements::Button;
//!
//! let input = InputBlock::new("Label", Button::builder().text("Go").action_id("go").build());
//! ```

mod button;
mod checkboxes;
mod datepicker;
mod image;
mod plain_text_input;
mod radio_buttons;
mod static_select;

pub use button::Button;
pub use checkboxes::Checkboxes;
pub use datepicker::{DATE_FORMAT, DatePicker, format_date, parse_date};
pub use image::Image;
pub use plain_text_input::PlainTextInput;
pub use radio_buttons::RadioButtons;
pub use static_select::StaticSelect;

use crate::composition::{Markdown, PlainText};
use crate::union::typed_union;
use bkit_domain::capability::Containers;

typed_union! {
    /// Elements allowed in the `accessory` slot of a section block.
    pub enum SectionAccessory in Containers::SECTION {
        Button(Button),
        Checkboxes(Checkboxes),
        DatePicker(DatePicker),
        Image(Image),
        RadioButtons(RadioButtons),
        StaticSelect(StaticSelect),
    }
}

typed_union! {
    /// Elements allowed in an actions block.
    pub enum ActionsElement in Containers::ACTIONS {
        Button(Button),
        Checkboxes(Checkboxes),
        DatePicker(DatePicker),
        RadioButtons(RadioButtons),
        StaticSelect(StaticSelect),
    }
}

typed_union! {
    /// Elements allowed in the `element` slot of an input block.
    pub enum InputElement in Containers::INPUT {
        Checkboxes(Checkboxes),
        DatePicker(DatePicker),
        PlainTextInput(PlainTextInput),
        RadioButtons(RadioButtons),
        StaticSelect(StaticSelect),
    }
}

typed_union! {
    /// Elements allowed in a context block.
    pub enum ContextElement in Containers::CONTEXT {
        PlainText(PlainText),
        Markdown(Markdown),
        Image(Image),
    }
}

impl ActionsElement {
    /// The `action_id` every interactive element carries.
    #[must_use]
    pub fn action_id(&self) -> &str {
        match self {
            Self::Button(element) => element.action_id(),
            Self::Checkboxes(element) => element.action_id(),
            Self::DatePicker(element) => element.action_id(),
            Self::RadioButtons(element) => element.action_id(),
            Self::StaticSelect(element) => element.action_id(),
        }
    }
}

/// One row of the element catalogue: a `type` and where it may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementKind {
    pub name: &'static str,
    pub containers: Containers,
}

impl ElementKind {
    const fn of<E: crate::Element>() -> Self {
        Self { name: E::TYPE, containers: E::CONTAINERS }
    }
}

/// Every element type known to the model, in alphabetical order.
pub const ELEMENT_KINDS: &[ElementKind] = &[
    ElementKind::of::<Button>(),
    ElementKind::of::<Checkboxes>(),
    ElementKind::of::<DatePicker>(),
    ElementKind::of::<Image>(),
    ElementKind::of::<Markdown>(),
    ElementKind::of::<PlainText>(),
    ElementKind::of::<PlainTextInput>(),
    ElementKind::of::<RadioButtons>(),
    ElementKind::of::<StaticSelect>(),
];
