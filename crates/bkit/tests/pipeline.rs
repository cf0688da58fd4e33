use bkit::blocks::prelude::*;
use bkit::blocks::validate::Problem;
use bkit::domain::config::BkitConfig;

fn oversized() -> Payload {
    Payload::from(vec![Block::from(HeaderBlock::new("h".repeat(200)))])
}

#[test]
fn check_reports_violations_with_context() {
    let err = bkit::check(&oversized(), &BkitConfig::default()).expect_err("header too long");

    assert!(err.to_string().starts_with("Validation failed (Payload check): [0].text"), "{err}");
    let violations = err.violations().expect("validation error");
    assert_eq!(violations.at("[0].text"), Some(&Problem::TooLong { len: 200, max: 150 }));
}

#[test]
fn disabled_validation_bypasses_checks() {
    let mut config = BkitConfig::default();
    config.validation.enabled = false;

    assert!(bkit::check(&oversized(), &config).is_ok());
    assert!(bkit::violations(&oversized(), &config).is_empty());
}

#[test]
fn render_follows_output_style() {
    let payload = Payload::from(Message::builder().text("hi").build());
    let mut config = BkitConfig::default();

    assert_eq!(bkit::render(&payload, &config).expect("pretty"), "{\n  \"text\": \"hi\"\n}");

    config.output.pretty = false;
    assert_eq!(bkit::render(&payload, &config).expect("compact"), r#"{"text":"hi"}"#);
}
