use crate::composition::TextObject;
use crate::elements::SectionAccessory;
use crate::validate::{Problem, Validate, Validator};
use crate::Tag;
use bkit_derive::block_model;
use bkit_domain::constants::SECTION;
use typed_builder::TypedBuilder;

/// Text, optional two-column fields and one optional accessory element.
#[block_model(kind = SECTION)]
#[derive(TypedBuilder)]
pub struct SectionBlock {
    #[serde(rename = "type")]
    #[builder(default, setter(skip))]
    kind: Tag<SectionBlock>,
    #[builder(default, setter(strip_option, into))]
    text: Option<TextObject>,
    /// Rendered in two columns; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into))]
    fields: Vec<TextObject>,
    #[builder(default, setter(strip_option, into))]
    accessory: Option<SectionAccessory>,
    #[builder(default, setter(strip_option, into))]
    block_id: Option<String>,
}

impl SectionBlock {
    /// A section holding only `text`.
    #[must_use]
    pub fn text_only(text: impl Into<TextObject>) -> Self {
        Self::builder().text(text).build()
    }
}

impl Validate for SectionBlock {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_block_id(self.block_id.as_deref());
        match &self.text {
            Some(text) => {
                validator.field("text", text);
                validator.check_len("text", text.text(), limits.section_text);
            },
            None if self.fields.is_empty() => validator.report_at("text", Problem::Empty),
            None => {},
        }

        validator.check_count("fields", self.fields.len(), limits.section_fields);
        validator.each("fields", &self.fields, |validator, field| {
            validator.check_len("text", field.text(), limits.section_field_text);
            field.validate_into(validator);
        });

        if let Some(accessory) = &self.accessory {
            validator.field("accessory", accessory);
        }
    }
}
