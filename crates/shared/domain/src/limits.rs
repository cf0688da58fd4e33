use serde::{Deserialize, Serialize};

/// Documented Block Kit limits.
///
/// Text limits count characters, not bytes. Nothing in the model enforces these on
/// construction; they only feed the opt-in validation pass, so callers can tighten
/// or relax them through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    // --- Identifiers ---
    pub action_id: usize,
    pub block_id: usize,

    // --- Composition objects ---
    pub confirm_title: usize,
    pub confirm_text: usize,
    pub confirm_button: usize,
    pub option_text: usize,
    pub option_value: usize,
    pub option_description: usize,
    pub url: usize,

    // --- Elements ---
    pub placeholder: usize,
    pub button_text: usize,
    pub button_value: usize,
    pub accessibility_label: usize,
    pub radio_options: usize,
    pub checkbox_options: usize,
    pub select_options: usize,
    /// Largest value accepted for `min_length` and `max_length` of a text input.
    pub input_length: u32,
    pub image_alt_text: usize,

    // --- Blocks ---
    pub section_text: usize,
    pub section_fields: usize,
    pub section_field_text: usize,
    pub header_text: usize,
    pub actions_elements: usize,
    pub context_elements: usize,
    pub input_label: usize,
    pub input_hint: usize,

    // --- Surfaces ---
    pub message_blocks: usize,
    pub modal_blocks: usize,
    pub modal_title: usize,
    pub modal_button: usize,
    pub private_metadata: usize,
    pub callback_id: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            action_id: 255,
            block_id: 255,

            confirm_title: 100,
            confirm_text: 300,
            confirm_button: 30,
            option_text: 75,
            option_value: 75,
            option_description: 75,
            url: 3000,

            placeholder: 150,
            button_text: 75,
            button_value: 2000,
            accessibility_label: 75,
            radio_options: 10,
            checkbox_options: 10,
            select_options: 100,
            input_length: 3000,
            image_alt_text: 2000,

            section_text: 3000,
            section_fields: 10,
            section_field_text: 2000,
            header_text: 150,
            actions_elements: 5,
            context_elements: 10,
            input_label: 2000,
            input_hint: 2000,

            message_blocks: 50,
            modal_blocks: 100,
            modal_title: 24,
            modal_button: 24,
            private_metadata: 3000,
            callback_id: 255,
        }
    }
}
