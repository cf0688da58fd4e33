use bkit_domain::capability::Containers;
use bkit_domain::constants::{BUTTON, MRKDWN, PLAIN_TEXT, PLAIN_TEXT_INPUT, RADIO_BUTTONS};

#[test]
fn constants_match_wire_strings() {
    assert_eq!(PLAIN_TEXT, "plain_text");
    assert_eq!(MRKDWN, "mrkdwn");
    assert_eq!(BUTTON, "button");
    assert_eq!(PLAIN_TEXT_INPUT, "plain_text_input");
    assert_eq!(RADIO_BUTTONS, "radio_buttons");
}

#[test]
fn interactive_covers_section_actions_and_input() {
    let interactive = Containers::INTERACTIVE;
    assert!(interactive.contains(Containers::SECTION));
    assert!(interactive.contains(Containers::ACTIONS));
    assert!(interactive.contains(Containers::INPUT));
    assert!(!interactive.contains(Containers::CONTEXT));
}

#[test]
fn names_are_listed_in_declaration_order() {
    let set = Containers::CONTEXT | Containers::SECTION;
    assert_eq!(set.names(), ["section", "context"]);
    assert_eq!(set.to_string(), "section, context");
    assert_eq!(Containers::empty().to_string(), "");
}

#[test]
fn serializes_as_name_list() {
    let set = Containers::SECTION | Containers::ACTIONS;
    let json = serde_json::to_string(&set).expect("serialize");
    assert_eq!(json, r#"["section","actions"]"#);

    let back: Containers = serde_json::from_str(r#"["actions","section","actions"]"#).expect("decode");
    assert_eq!(back, set);

    let err = serde_json::from_str::<Containers>(r#"["modal"]"#).expect_err("unknown container");
    assert!(err.to_string().contains("unknown variant `modal`"), "{err}");
    assert_eq!(Containers::from_name("input"), Some(Containers::INPUT));
}
