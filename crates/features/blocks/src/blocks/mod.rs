//! Layout blocks, the top-level units of every surface.

mod actions;
mod context;
mod divider;
mod header;
mod input;
mod section;

pub use actions::ActionsBlock;
pub use context::ContextBlock;
pub use divider::DividerBlock;
pub use header::HeaderBlock;
pub use input::InputBlock;
pub use section::SectionBlock;

use crate::union::typed_union;

typed_union! {
    /// Any layout block.
    pub enum Block {
        Actions(ActionsBlock),
        Context(ContextBlock),
        Divider(DividerBlock),
        Header(HeaderBlock),
        Input(InputBlock),
        Section(SectionBlock),
    }
}

impl Block {
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Self::Actions(block) => block.block_id(),
            Self::Context(block) => block.block_id(),
            Self::Divider(block) => block.block_id(),
            Self::Header(block) => block.block_id(),
            Self::Input(block) => block.block_id(),
            Self::Section(block) => block.block_id(),
        }
    }

    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
