use std::fmt;

/// What is wrong at a given location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("must not be empty")]
    Empty,

    #[error("is {len} characters long, the limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("has {count} items, the limit is {max}")]
    TooMany { count: usize, max: usize },

    #[error("{value} exceeds the maximum of {max}")]
    OutOfRange { value: u32, max: u32 },

    #[error("minimum {min} is greater than maximum {max}")]
    Inverted { min: u32, max: u32 },

    #[error("initial option `{value}` is not one of the options")]
    UnknownInitialOption { value: String },

    #[error("action_id `{action_id}` is already used in this block")]
    DuplicateActionId { action_id: String },

    #[error("block_id `{block_id}` is already used")]
    DuplicateBlockId { block_id: String },

    #[error("only one element may set focus_on_load, `{first}` already does")]
    MultipleFocus { first: String },

    #[error("`{value}` is not a YYYY-MM-DD date")]
    InvalidDate { value: String },

    #[error("views with input blocks need a submit button")]
    MissingSubmit,
}

/// A [`Problem`] and the JSON path it was found at, e.g. `blocks[2].elements[0].text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub problem: Problem,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.path, self.problem)
        }
    }
}

/// Every violation found in one validation pass, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Returns the first problem reported at exactly `path`.
    #[must_use]
    pub fn at(&self, path: &str) -> Option<&Problem> {
        self.0.iter().find(|violation| violation.path == path).map(|violation| &violation.problem)
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
