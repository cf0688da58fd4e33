use bkit_derive::bkit_error;
use std::borrow::Cow;

#[bkit_error]
pub enum DemoError {
    #[error("IO error{}: {source}", fmt_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", fmt_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", fmt_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), DemoError> {
    std::fs::metadata("/definitely/missing").map(|_| ()).context("reading metadata")
}

fn main() {
    let _ = open();
    let _: DemoError = "boom".into();
}
