use bkit_blocks::prelude::*;
use serde_json::json;

#[test]
fn plain_text_emoji_flag() {
    assert_eq!(
        bkit_blocks::to_value(&PlainText::new("Hi :wave:").with_emoji(true)).expect("encode"),
        json!({ "type": "plain_text", "text": "Hi :wave:", "emoji": true })
    );
}

#[test]
fn option_fields() {
    let option = OptionObject::new(Markdown::new("*Gold*"), "gold")
        .with_description("Best tier")
        .with_url("https://example.com/gold");

    assert_eq!(
        bkit_blocks::to_value(&option).expect("encode"),
        json!({
            "text": { "type": "mrkdwn", "text": "*Gold*" },
            "value": "gold",
            "description": { "type": "plain_text", "text": "Best tier" },
            "url": "https://example.com/gold"
        })
    );
    assert_eq!(option.description().map(PlainText::text), Some("Best tier"));
}

#[test]
fn confirm_without_style_omits_it() {
    let confirm = Confirm::builder().title("Sure?").text("Really?").confirm("Yes").deny("No").build();
    let value = bkit_blocks::to_value(&confirm).expect("encode");

    assert!(value.get("style").is_none());
    assert_eq!(value["text"], json!({ "type": "plain_text", "text": "Really?" }));
    assert_eq!(confirm.style(), None);
}

#[test]
fn button_style_is_lowercase() {
    assert_eq!(serde_json::to_string(&ButtonStyle::Danger).expect("encode"), r#""danger""#);
    assert!(serde_json::from_str::<ButtonStyle>(r#""default""#).is_err());
}

#[test]
fn dispatch_config_accepts_several_triggers() {
    let config = DispatchActionConfig::new([TriggerAction::OnEnterPressed, TriggerAction::OnCharacterEntered]);
    assert_eq!(
        bkit_blocks::to_value(&config).expect("encode"),
        json!({ "trigger_actions_on": ["on_enter_pressed", "on_character_entered"] })
    );
}

#[test]
fn text_object_decoding_requires_type() {
    assert!(bkit_blocks::from_json::<TextObject>(r#"{"text":"no type"}"#).is_err());
    let text: TextObject = bkit_blocks::from_json(r#"{"type":"plain_text","text":"ok"}"#).expect("decode");
    assert_eq!(text, TextObject::from("ok"));
}
