//! Accumulators for element lists.
//!
//! An [`ElementsBuilder`] is parameterised by a container union, so it only
//! accepts elements that may appear in that container. [`build`](ElementsBuilder::build)
//! hands out an owned snapshot and leaves the builder usable: later additions
//! never show up in earlier snapshots.

use crate::blocks::{ActionsBlock, Block, ContextBlock};
use crate::composition::TextObject;
use crate::elements::{ActionsElement, ContextElement};
use tracing::trace;

/// Ordered list of container elements under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementsBuilder<E> {
    elements: Vec<E>,
}

/// Elements of an actions block.
pub type ActionsBuilder = ElementsBuilder<ActionsElement>;
/// Elements of a context block.
pub type ContextBuilder = ElementsBuilder<ContextElement>;
/// The `fields` of a section block.
pub type FieldsBuilder = ElementsBuilder<TextObject>;
/// Blocks of a message or view.
pub type BlocksBuilder = ElementsBuilder<Block>;

impl<E> Default for ElementsBuilder<E> {
    fn default() -> Self {
        Self { elements: Vec::new() }
    }
}

impl<E> ElementsBuilder<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { elements: Vec::with_capacity(capacity) }
    }

    /// Appends an element, consuming and returning the builder for chaining.
    ///
    /// No upper bound is enforced here; see [`crate::validate`].
    #[must_use]
    pub fn add_element(mut self, element: impl Into<E>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Appends an element in place, for use in loops.
    pub fn push(&mut self, element: impl Into<E>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements added so far, without copying.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Consumes the builder, returning its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<E> {
        self.elements
    }
}

impl<E: Clone> ElementsBuilder<E> {
    /// Returns an independent, ordered copy of the elements added so far.
    ///
    /// Calling it twice without adding anything in between yields equal lists.
    #[must_use]
    pub fn build(&self) -> Vec<E> {
        trace!(count = self.elements.len(), "building element list snapshot");
        self.elements.clone()
    }
}

impl<E, T: Into<E>> Extend<T> for ElementsBuilder<E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl<E, T: Into<E>> FromIterator<T> for ElementsBuilder<E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { elements: iter.into_iter().map(Into::into).collect() }
    }
}

impl From<ActionsBuilder> for ActionsBlock {
    fn from(builder: ActionsBuilder) -> Self {
        Self::new(builder.into_elements())
    }
}

impl From<ContextBuilder> for ContextBlock {
    fn from(builder: ContextBuilder) -> Self {
        Self::new(builder.into_elements())
    }
}
