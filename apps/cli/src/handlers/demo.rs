use anyhow::Result;
use bkit::blocks::prelude::*;
use bkit::domain::config::BkitConfig;
use tracing::info;

/// Prints a sample message or modal built with the element-list builders.
///
/// # Errors
/// Returns an error if the sample fails validation or cannot be encoded.
pub fn print_demo(modal: bool, config: &BkitConfig) -> Result<()> {
    let payload = if modal { demo_modal() } else { demo_message() };
    info!(kind = payload.kind(), "Built demo payload");

    bkit::check(&payload, config)?;
    println!("{}", bkit::render(&payload, config)?);
    Ok(())
}

fn size(label: &str) -> OptionObject {
    OptionObject::new(label, label.to_lowercase())
}

fn demo_message() -> Payload {
    let actions = ActionsBuilder::new()
        .add_element(
            RadioButtons::builder()
                .action_id("size")
                .options(vec![size("Small"), size("Medium"), size("Large")])
                .initial_option(size("Medium"))
                .build(),
        )
        .add_element(
            Button::builder()
                .text("Order")
                .action_id("order")
                .style(ButtonStyle::Primary)
                .confirm(
                    Confirm::builder()
                        .title("Place order?")
                        .text(Markdown::new("Your coffee will be ready in *5 minutes*."))
                        .confirm("Order")
                        .deny("Cancel")
                        .build(),
                )
                .build(),
        );

    let context = ContextBuilder::new().add_element(Markdown::new("Orders close at _noon_"));

    let blocks = BlocksBuilder::new()
        .add_element(HeaderBlock::new("Coffee order"))
        .add_element(SectionBlock::text_only(Markdown::new("Pick a size and press *Order*.")))
        .add_element(ActionsBlock::from(actions).with_block_id("order_actions"))
        .add_element(DividerBlock::new())
        .add_element(ContextBlock::from(context));

    Message::builder().text("Coffee order").blocks(blocks.build()).build().into()
}

fn demo_modal() -> Payload {
    let blocks = BlocksBuilder::new()
        .add_element(InputBlock::new(
            "Feedback",
            PlainTextInput::builder()
                .action_id("feedback")
                .placeholder("What could be better?")
                .multiline(true)
                .max_length(500)
                .focus_on_load(true)
                .build(),
        ))
        .add_element(
            InputBlock::builder()
                .label("Follow up on")
                .element(DatePicker::builder().action_id("follow_up").build())
                .optional(true)
                .build(),
        );

    Modal::builder()
        .title("Feedback")
        .submit("Send")
        .close("Cancel")
        .callback_id("feedback_modal")
        .blocks(blocks.into_elements())
        .build()
        .into()
}
