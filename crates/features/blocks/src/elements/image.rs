use crate::validate::{Validate, Validator};
use crate::{Element, Tag};
use bkit_derive::block_model;
use bkit_domain::capability::Containers;
use bkit_domain::constants::IMAGE;

/// A non-interactive image.
#[block_model(kind = IMAGE)]
#[derive(Eq)]
pub struct Image {
    #[serde(rename = "type")]
    kind: Tag<Image>,
    image_url: String,
    alt_text: String,
}

impl Image {
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self { kind: Tag::new(), image_url: image_url.into(), alt_text: alt_text.into() }
    }
}

impl Element for Image {
    const CONTAINERS: Containers = Containers::SECTION.union(Containers::CONTEXT);
}

impl Validate for Image {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        let limits = validator.limits();

        validator.check_len("image_url", &self.image_url, limits.url);
        validator.check_len("alt_text", &self.alt_text, limits.image_alt_text);
    }
}
