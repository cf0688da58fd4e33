use crate::composition::{Confirm, PlainText};
use crate::validate::{Problem, Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::DATEPICKER;
use chrono::NaiveDate;
use typed_builder::TypedBuilder;

/// Wire format of `initial_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date picker.
#[block_model(kind = DATEPICKER)]
#[derive(Eq, TypedBuilder)]
pub struct DatePicker {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<DatePicker>,
    #[builder(setter(into))]
    action_id: String,
    #[builder(default, setter(strip_option, into))]
    placeholder: Option<PlainText>,
    /// `YYYY-MM-DD`.
    #[builder(default, setter(strip_option, into))]
    initial_date: Option<String>,
    #[builder(default, setter(strip_option))]
    confirm: Option<Confirm>,
    #[builder(default, setter(strip_option))]
    focus_on_load: Option<bool>,
}

impl DatePicker {
    /// Parses `initial_date`.
    ///
    /// Returns `None` when the date is unset or not a strict `YYYY-MM-DD` value.
    #[must_use]
    pub fn parsed_initial_date(&self) -> Option<NaiveDate> {
        self.initial_date.as_deref().and_then(parse_date)
    }
}

impl Element for DatePicker {
    const CONTAINERS: Containers = Containers::INTERACTIVE;
}

impl Validate for DatePicker {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_action_id(&self.action_id);
        if let Some(placeholder) = &self.placeholder {
            validator.field("placeholder", placeholder);
            validator.check_len("placeholder", placeholder.text(), limits.placeholder);
        }
        let malformed = self.initial_date.as_deref().filter(|value| parse_date(value).is_none());
        if let Some(value) = malformed {
            validator.report_at("initial_date", Problem::InvalidDate { value: value.to_owned() });
        }
        if let Some(confirm) = &self.confirm {
            validator.field("confirm", confirm);
        }
        validator.check_focus(self.focus_on_load);
    }
}

/// Parses a date in the exact wire shape: four-digit year, then zero-padded
/// month and day.
///
/// `chrono` alone also accepts `2024-2-3` or `+2024-02-03`, which the API rejects.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok().filter(|date| format_date(*date) == value)
}

/// Formats a date the way `initial_date` expects it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
