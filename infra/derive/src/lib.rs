#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`macro@block_model`] applies the wire policy every Block Kit model follows.
//! * [`macro@bkit_error`] turns an enum into a `thiserror` error with `.context()` support.
//!
//! Examples are `ignore`d here because they depend on crates this one cannot link.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for Block Kit data models.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `PartialEq`, `Serialize`, `Deserialize` when missing.
/// * **Absent, not null**: every `Option<T>` field gets
///   `#[serde(default, skip_serializing_if = "Option::is_none")]` unless it already
///   declares `skip_serializing_if`.
/// * **Accessors**: every private field gets a read-only getter of the same name.
///   `String` fields borrow as `&str`, `Vec<T>` as `&[T]`, primitive integers and
///   `bool` are returned by value, `Option` fields are returned through `as_ref`.
///   Fields typed `Tag<..>` are skipped.
/// * **Discriminant**: `kind = "..."` implements `bkit_blocks::Typed` for the struct.
///
/// # Arguments
///
/// * `kind = "plain_text_input"` - The constant `type` value of the element; any
///   `&'static str` expression is accepted, e.g. a path to a constant.
/// * `rename_all = "..."` - Forwarded to serde.
/// * `deny_unknown_fields = true` - Forwarded to serde (off by default, the API
///   echoes back extra fields such as `block_id`).
///
/// # Example
///
/// ```rust,ignore
/// use bkit_blocks::Tag;
///
/// #[bkit_derive::block_model(kind = "divider")]
/// pub struct DividerBlock {
///     #[serde(rename = "type")]
///     kind: Tag<Self>,
///     block_id: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn block_model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::model::expand_block_model(args.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Derives**: `Debug` and `thiserror::Error` when missing.
/// * **Context**: generates `<Name>Ext` with `.context(...)` for `Result<T, Name>`
///   and for `Result<T, Source>` of every wrapped source type.
/// * **Conversions**: `From<Source>` for variants with a `source` field (or one marked
///   `#[source]`/`#[from]`), and `From<&'static str>`/`From<String>` into an
///   `Internal { message, context }` variant when one exists.
/// * **Formatting**: a private `fmt_context(&context)` helper for `#[error]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant wrapping a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[bkit_derive::bkit_error]
/// pub enum CodecError {
///     #[error("JSON error{}: {source}", fmt_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", fmt_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn decode(raw: &str) -> Result<serde_json::Value, CodecError> {
///     serde_json::from_str(raw).context("decoding payload")
/// }
/// ```
#[proc_macro_attribute]
pub fn bkit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
