use bkit_blocks::prelude::*;

fn radio(action_id: &str) -> RadioButtons {
    RadioButtons::builder()
        .action_id(action_id)
        .options(vec![OptionObject::new("Yes", "y"), OptionObject::new("No", "n")])
        .build()
}

#[test]
fn actions_builder_keeps_insertion_order() {
    let first = radio("first");
    let second = radio("second");

    let elements = ActionsBuilder::new().add_element(first.clone()).add_element(second.clone()).build();

    assert_eq!(elements, vec![ActionsElement::from(first), ActionsElement::from(second)]);
}

#[test]
fn build_twice_yields_equal_sequences() {
    let builder = ActionsBuilder::new()
        .add_element(radio("a"))
        .add_element(Button::builder().text("Go").action_id("go").build());

    assert_eq!(builder.build(), builder.build());
}

#[test]
fn snapshots_are_isolated_from_later_additions() {
    let mut builder = ActionsBuilder::new().add_element(radio("a"));
    let before = builder.build();

    builder.push(radio("b"));
    let after = builder.build();

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
}

#[test]
fn no_upper_bound_while_building() {
    let builder: ActionsBuilder = (0..8).map(|index| radio(&format!("r{index}"))).collect();
    assert_eq!(builder.len(), 8);

    let block = ActionsBlock::from(builder);
    assert_eq!(block.elements().len(), 8);
}

#[test]
fn builders_feed_blocks() {
    let context = ContextBuilder::new()
        .add_element(Image::new("https://example.com/logo.png", "logo"))
        .add_element(Markdown::new("Posted by *bot*"));
    let block = ContextBlock::from(context);
    assert_eq!(block.elements()[1].type_name(), "mrkdwn");

    let fields = FieldsBuilder::new().add_element("Left").add_element(Markdown::new("*Right*"));
    let section = SectionBlock::builder().fields(fields.build()).build();
    assert_eq!(section.fields().len(), 2);

    let mut blocks = BlocksBuilder::new();
    blocks.push(HeaderBlock::new("Title")).push(DividerBlock::new()).push(section).push(block);
    let types: Vec<_> = blocks.build().iter().map(Block::type_name).collect();
    assert_eq!(types, ["header", "divider", "section", "context"]);
}
