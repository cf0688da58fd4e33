//! Wire discriminants of the Block Kit grammar.
//!
//! Every typed model serializes one of these under its `type` key.

// --- Composition objects ---

pub const PLAIN_TEXT: &str = "plain_text";
pub const MRKDWN: &str = "mrkdwn";

// --- Elements ---

pub const BUTTON: &str = "button";
pub const CHECKBOXES: &str = "checkboxes";
pub const DATEPICKER: &str = "datepicker";
pub const IMAGE: &str = "image";
pub const PLAIN_TEXT_INPUT: &str = "plain_text_input";
pub const RADIO_BUTTONS: &str = "radio_buttons";
pub const STATIC_SELECT: &str = "static_select";

// --- Blocks ---

pub const ACTIONS: &str = "actions";
pub const CONTEXT: &str = "context";
pub const DIVIDER: &str = "divider";
pub const HEADER: &str = "header";
pub const INPUT: &str = "input";
pub const SECTION: &str = "section";

// --- Surfaces ---

pub const MODAL: &str = "modal";
