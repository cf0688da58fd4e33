use bkit_derive::block_model;

#[block_model(deny_unknown_fields = true)]
pub struct Choice {
    text: String,
    value: String,
    description: Option<String>,
    pub url: Option<String>,
}

#[block_model(rename_all = "camelCase")]
pub struct Counter {
    max_count: u32,
    hidden: Option<bool>,
    labels: Vec<String>,
}

fn main() {
    let option = Choice { text: "a".to_owned(), value: "b".to_owned(), description: None, url: None };
    let _: &str = option.text();
    let _: Option<&str> = option.description();

    let counter = Counter { max_count: 3, hidden: Some(true), labels: Vec::new() };
    let _: u32 = counter.max_count();
    let _: Option<bool> = counter.hidden();
    let _: &[String] = counter.labels();
}
