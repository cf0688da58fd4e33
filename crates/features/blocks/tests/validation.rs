use bkit_blocks::prelude::*;
use bkit_blocks::validate::Problem;
use bkit_domain::limits::Limits;

fn radio(action_id: &str, count: usize) -> RadioButtons {
    let options = (0..count).map(|index| OptionObject::new(format!("Option {index}"), index.to_string()));
    RadioButtons::builder().action_id(action_id).options(options.collect::<Vec<_>>()).build()
}

#[test]
fn valid_payload_passes() {
    let message = Message::builder()
        .text("Choose")
        .blocks(vec![
            Block::from(SectionBlock::text_only("Pick one")),
            Block::from(ActionsBlock::from(ActionsBuilder::new().add_element(radio("r", 3)))),
        ])
        .build();

    assert!(message.validate().is_ok());
}

#[test]
fn oversized_values_are_accepted_until_validated() {
    let long = "x".repeat(4000);
    let input = PlainTextInput::builder().action_id(long.as_str()).min_length(5000).build();

    // Construction and encoding never check limits.
    let json = bkit_blocks::to_json(&input).expect("encode");
    assert!(json.contains(r#""min_length":5000"#));

    let violations = input.violations(&Limits::default());
    assert_eq!(violations.at("action_id"), Some(&Problem::TooLong { len: 4000, max: 255 }));
    assert_eq!(violations.at("min_length"), Some(&Problem::OutOfRange { value: 5000, max: 3000 }));
}

#[test]
fn actions_blocks_are_capped_at_five_elements() {
    let block: ActionsBlock =
        (0..6).map(|index| radio(&format!("r{index}"), 2)).collect::<ActionsBuilder>().into();

    let err = block.validate().expect_err("six elements");
    let violations = err.violations().expect("validation error");
    assert_eq!(violations.at("elements"), Some(&Problem::TooMany { count: 6, max: 5 }));
    assert!(err.to_string().starts_with("Validation failed: elements: has 6 items"), "{err}");
}

#[test]
fn limits_are_configurable() {
    let block: ActionsBlock =
        (0..6).map(|index| radio(&format!("r{index}"), 2)).collect::<ActionsBuilder>().into();

    let limits = Limits { actions_elements: 10, ..Limits::default() };
    assert!(block.validate_with(&limits).is_ok());
}

#[test]
fn reports_nested_paths() {
    let initial = OptionObject::new("Missing", "missing").with_description("not listed");
    let radio = RadioButtons::builder()
        .action_id("r")
        .options(vec![OptionObject::new("A", "a"), OptionObject::new("x".repeat(80), "b")])
        .initial_option(initial)
        .build();
    let message = Message::from_blocks([
        Block::from(HeaderBlock::new("Title")),
        Block::from(ActionsBlock::new([radio])),
    ]);

    let violations = message.violations(&Limits::default());
    assert_eq!(
        violations.at("blocks[1].elements[0].options[1].text"),
        Some(&Problem::TooLong { len: 80, max: 75 })
    );
    assert_eq!(
        violations.at("blocks[1].elements[0].initial_option"),
        Some(&Problem::UnknownInitialOption { value: "missing".into() })
    );
    assert_eq!(violations.len(), 2);
}

#[test]
fn min_length_above_max_length() {
    let input = PlainTextInput::builder().action_id("a").min_length(10).max_length(5).build();
    let violations = input.violations(&Limits::default());
    assert_eq!(violations.at("min_length"), Some(&Problem::Inverted { min: 10, max: 5 }));
}

#[test]
fn duplicate_ids_and_focus() {
    let first = PlainTextInput::builder().action_id("a").focus_on_load(true).build();
    let second = StaticSelect::builder()
        .action_id("b")
        .options(vec![OptionObject::new("One", "1")])
        .focus_on_load(true)
        .build();
    let button = |id: &str| Button::builder().text("Go").action_id(id).build();

    let modal = Modal::builder()
        .title("Form")
        .submit("Save")
        .blocks(vec![
            Block::from(InputBlock::builder().label("A").element(first).block_id("same").build()),
            Block::from(InputBlock::builder().label("B").element(second).block_id("same").build()),
            Block::from(ActionsBlock::new([button("go"), button("go")])),
        ])
        .build();

    let violations = modal.violations(&Limits::default());
    assert_eq!(
        violations.at("blocks[1].block_id"),
        Some(&Problem::DuplicateBlockId { block_id: "same".into() })
    );
    assert_eq!(
        violations.at("blocks[1].element.focus_on_load"),
        Some(&Problem::MultipleFocus { first: "blocks[0].element.focus_on_load".into() })
    );
    assert_eq!(
        violations.at("blocks[2].elements[1].action_id"),
        Some(&Problem::DuplicateActionId { action_id: "go".into() })
    );
    assert_eq!(violations.len(), 3);
}

#[test]
fn modal_with_inputs_needs_submit() {
    let modal = Modal::builder()
        .title("Form")
        .blocks(vec![Block::from(InputBlock::new(
            "Name",
            PlainTextInput::builder().action_id("name").build(),
        ))])
        .build();

    let violations = modal.violations(&Limits::default());
    assert_eq!(violations.at("submit"), Some(&Problem::MissingSubmit));
}

#[test]
fn invalid_date_and_empty_text() {
    let picker = DatePicker::builder().action_id("d").initial_date("2024-13-01").build();
    let section = SectionBlock::builder().accessory(picker).build();

    let violations = section.violations(&Limits::default());
    assert_eq!(
        violations.at("accessory.initial_date"),
        Some(&Problem::InvalidDate { value: "2024-13-01".into() })
    );
    assert_eq!(violations.at("text"), Some(&Problem::Empty));

    for loose in ["2024-2-3", "+2024-02-03", "24-02-03"] {
        let picker = DatePicker::builder().action_id("d").initial_date(loose).build();
        assert_eq!(
            picker.violations(&Limits::default()).at("initial_date"),
            Some(&Problem::InvalidDate { value: loose.into() }),
            "{loose}"
        );
    }

    let picker = DatePicker::builder().action_id("d").initial_date("2024-02-03").build();
    assert!(picker.violations(&Limits::default()).is_empty());
}

#[test]
fn initial_options_must_match_exactly() {
    let listed = OptionObject::new("A", "a");
    let restyled = OptionObject::new(Markdown::new("A"), "a");
    let described = OptionObject::new("A", "a").with_description("different");

    let radio = RadioButtons::builder()
        .action_id("r")
        .options(vec![listed.clone()])
        .initial_option(restyled)
        .build();
    assert_eq!(
        radio.violations(&Limits::default()).at("initial_option"),
        Some(&Problem::UnknownInitialOption { value: "a".into() })
    );

    let boxes = Checkboxes::builder()
        .action_id("c")
        .options(vec![listed.clone(), OptionObject::new("B", "b")])
        .initial_options(vec![listed.clone(), described])
        .build();
    let violations = boxes.violations(&Limits::default());
    assert_eq!(
        violations.at("initial_options[1]"),
        Some(&Problem::UnknownInitialOption { value: "a".into() })
    );
    assert_eq!(violations.len(), 1);

    let exact = RadioButtons::builder()
        .action_id("r")
        .options(vec![listed.clone()])
        .initial_option(listed)
        .build();
    assert!(exact.violations(&Limits::default()).is_empty());
}
