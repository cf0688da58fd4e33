use super::{Problem, Validate, Violation, Violations};
use crate::composition::OptionObject;
use bkit_domain::limits::Limits;
use fxhash::FxHashSet;
use std::fmt::Write as _;

/// Walks a payload and collects [`Violation`]s.
///
/// Tracks the current JSON path, plus the state that spans a whole surface:
/// which element already claimed `focus_on_load` and which `block_id`s are taken.
#[derive(Debug)]
pub struct Validator<'a> {
    limits: &'a Limits,
    path: String,
    violations: Vec<Violation>,
    focus: Option<String>,
    block_ids: FxHashSet<String>,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(limits: &'a Limits) -> Self {
        Self {
            limits,
            path: String::new(),
            violations: Vec::new(),
            focus: None,
            block_ids: FxHashSet::default(),
        }
    }

    /// The limits in force. The reference outlives the validator borrow, so
    /// rules may hold it across mutating calls.
    #[must_use]
    pub const fn limits(&self) -> &'a Limits {
        self.limits
    }

    /// Current location, e.g. `blocks[0].accessory`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Consumes the validator, returning what it found.
    #[must_use]
    pub fn finish(self) -> Violations {
        self.violations.into()
    }

    // --- Traversal ---

    /// Validates `value` under the field `name`.
    pub fn field<T: Validate + ?Sized>(&mut self, name: &str, value: &T) {
        self.scoped(name, |validator| value.validate_into(validator));
    }

    /// Runs `check` for every item of a list field, under `name[index]`.
    pub fn each<'t, T>(
        &mut self,
        name: &str,
        items: &'t [T],
        mut check: impl FnMut(&mut Self, &'t T),
    ) {
        self.scoped(name, |validator| {
            for (index, item) in items.iter().enumerate() {
                let mark = validator.path.len();
                let _ = write!(validator.path, "[{index}]");
                check(validator, item);
                validator.path.truncate(mark);
            }
        });
    }

    fn scoped(&mut self, name: &str, run: impl FnOnce(&mut Self)) {
        let mark = self.path.len();
        if !name.is_empty() {
            if !self.path.is_empty() {
                self.path.push('.');
            }
            self.path.push_str(name);
        }
        run(self);
        self.path.truncate(mark);
    }

    // --- Reporting ---

    pub fn report(&mut self, problem: Problem) {
        self.violations.push(Violation { path: self.path.clone(), problem });
    }

    pub fn report_at(&mut self, name: &str, problem: Problem) {
        self.scoped(name, |validator| validator.report(problem));
    }

    // --- Shared rules ---

    /// Length in characters, not bytes.
    pub fn check_len(&mut self, name: &str, text: &str, max: usize) {
        let len = text.chars().count();
        if len > max {
            self.report_at(name, Problem::TooLong { len, max });
        }
    }

    pub fn check_count(&mut self, name: &str, count: usize, max: usize) {
        if count > max {
            self.report_at(name, Problem::TooMany { count, max });
        }
    }

    pub fn check_action_id(&mut self, action_id: &str) {
        if action_id.is_empty() {
            self.report_at("action_id", Problem::Empty);
        }
        self.check_len("action_id", action_id, self.limits.action_id);
    }

    /// Checks length and uniqueness across the surface.
    pub fn check_block_id(&mut self, block_id: Option<&str>) {
        let Some(block_id) = block_id else { return };

        self.check_len("block_id", block_id, self.limits.block_id);
        if !self.block_ids.insert(block_id.to_owned()) {
            self.report_at("block_id", Problem::DuplicateBlockId { block_id: block_id.to_owned() });
        }
    }

    pub fn check_options(&mut self, name: &str, options: &[OptionObject], max: usize) {
        if options.is_empty() {
            self.report_at(name, Problem::Empty);
        }
        self.check_count(name, options.len(), max);
        self.each(name, options, |validator, option| option.validate_into(validator));
    }

    /// An initial selection must equal one of `options` field for field, text
    /// kind and description included.
    pub fn check_initial_option(
        &mut self,
        name: &str,
        initial: &OptionObject,
        options: &[OptionObject],
    ) {
        if !options.contains(initial) {
            let value = initial.value().to_owned();
            self.report_at(name, Problem::UnknownInitialOption { value });
        }
    }

    /// At most one element per surface may request focus.
    pub fn check_focus(&mut self, focus_on_load: Option<bool>) {
        if focus_on_load != Some(true) {
            return;
        }
        self.scoped("focus_on_load", |validator| {
            if let Some(first) = validator.focus.clone() {
                validator.report(Problem::MultipleFocus { first });
            } else {
                validator.focus = Some(validator.path.clone());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_nest_and_unwind() {
        let limits = Limits::default();
        let mut validator = Validator::new(&limits);

        validator.scoped("blocks", |validator| {
            let items = [1, 2];
            validator.each("elements", &items, |validator, _| {
                validator.report_at("text", Problem::Empty);
            });
            assert_eq!(validator.path(), "blocks");
        });
        validator.report_at("text", Problem::Empty);

        let paths: Vec<_> = validator.finish().into_iter().map(|v| v.path).collect();
        assert_eq!(paths, ["blocks.elements[0].text", "blocks.elements[1].text", "text"]);
    }

    #[test]
    fn length_counts_characters() {
        let limits = Limits::default();
        let mut validator = Validator::new(&limits);

        validator.check_len("text", "ééé", 3);
        validator.check_len("text", "éééé", 3);

        let violations = validator.finish();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.at("text"), Some(&Problem::TooLong { len: 4, max: 3 }));
    }

    #[test]
    fn second_focus_points_at_first() {
        let limits = Limits::default();
        let mut validator = Validator::new(&limits);

        validator.scoped("a", |validator| validator.check_focus(Some(true)));
        validator.scoped("b", |validator| validator.check_focus(Some(false)));
        validator.scoped("c", |validator| validator.check_focus(Some(true)));

        let violations = validator.finish();
        assert_eq!(
            violations.at("c.focus_on_load"),
            Some(&Problem::MultipleFocus { first: "a.focus_on_load".into() })
        );
        assert_eq!(violations.len(), 1);
    }
}
