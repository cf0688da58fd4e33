use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type};

/// Parsed shape of one error variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a syn::Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "bkit_error variants must use named fields",
            ));
        };

        let mut has_context = false;
        let mut source = None;

        for field in &fields.named {
            let Some(ident) = field.ident.as_ref() else { continue };
            if ident == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "`context` must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if ident == "source" || has_attr(field, "source") || has_attr(field, "from") {
                source = Some((ident, &field.ty));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variants wrapping a source also need `context: Option<Cow<'static, str>>`",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context,
            cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "bkit_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = missing_derives(&input.attrs);
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impl(name, &ext, v));
    let internal_impls = variants.iter().find(|v| v.is_internal()).map(|v| internal_impl(name, v));

    quote! {
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn fmt_context(context: &Option<std::borrow::Cow<'static, str>>) -> String {
            context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default()
        }
    }
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                present.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    let mut tokens = Vec::new();
    if !present.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !present.contains("Error") {
        tokens.push(quote! { ::thiserror::Error });
    }
    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;
        quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        /// Attaches a human-readable context string to a failing result.
        pub trait #ext<T> {
            /// Sets the context on the error, replacing any previous one.
            ///
            /// # Errors
            /// Returns the original error with its context populated.
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#arms)*
                        _ => {},
                    }
                    err
                })
            }
        }
    }
}

fn source_impl(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> Option<TokenStream> {
    if v.is_internal() {
        return None;
    }
    let (field, ty) = v.source?;
    let ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#ident { #field, context: None }
            }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impl(name: &Ident, v: &ErrorVariant<'_>) -> TokenStream {
    let cfg_attrs = &v.cfg_attrs;
    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a PathArguments> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    (segment.ident == wrapper).then_some(&segment.arguments)
}

/// Matches `Option<Cow<'static, str>>`, with or without path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let Some(PathArguments::AngleBracketed(option_args)) = single_generic(ty, "Option") else {
        return false;
    };
    let Some(GenericArgument::Type(cow)) = option_args.args.first() else {
        return false;
    };
    let Some(PathArguments::AngleBracketed(cow_args)) = single_generic(cow, "Cow") else {
        return false;
    };

    let mut args = cow_args.args.iter();
    let static_lifetime =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_type = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p))) if p.path.is_ident("str")
    );

    static_lifetime && str_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse_first(input: &DeriveInput) -> syn::Result<ErrorVariant<'_>> {
        let Data::Enum(data) = &input.data else { panic!("test input must be an enum") };
        ErrorVariant::parse(&data.variants[0])
    }

    fn rejection(input: &DeriveInput) -> String {
        parse_first(input).err().map(|err| err.to_string()).unwrap_or_default()
    }

    #[test]
    fn tuple_variants_are_rejected() {
        let input: DeriveInput = parse_quote! {
            pub enum DemoError {
                #[error("IO error: {0}")]
                Io(std::io::Error),
            }
        };
        assert_eq!(rejection(&input), "bkit_error variants must use named fields");
    }

    #[test]
    fn source_without_context_is_rejected() {
        let input: DeriveInput = parse_quote! {
            pub enum DemoError {
                #[error("IO error: {source}")]
                Io { #[source] source: std::io::Error },
            }
        };
        assert_eq!(
            rejection(&input),
            "variants wrapping a source also need `context: Option<Cow<'static, str>>`"
        );
    }

    #[test]
    fn context_must_be_optional_static_cow() {
        let input: DeriveInput = parse_quote! {
            pub enum DemoError {
                #[error("IO error: {source}")]
                Io { source: std::io::Error, context: Option<String> },
            }
        };
        assert_eq!(rejection(&input), "`context` must be Option<Cow<'static, str>>");
    }

    #[test]
    fn recognises_source_and_context() {
        let input: DeriveInput = parse_quote! {
            pub enum DemoError {
                #[error("JSON error{}: {source}", fmt_context(.context))]
                Json { source: serde_json::Error, context: Option<std::borrow::Cow<'static, str>> },
            }
        };
        let variant = parse_first(&input).ok().expect("valid variant");
        assert!(variant.has_context);
        assert!(!variant.is_internal());
        assert_eq!(variant.source.map(|(field, _)| field.to_string()).as_deref(), Some("source"));
    }

    #[test]
    fn structs_expand_to_a_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub struct NotAnEnum { message: String }
        };
        let expanded = expand_derive(input).to_string();
        assert!(expanded.contains("compile_error"), "{expanded}");
        assert!(expanded.contains("bkit_error can only be applied to enums"), "{expanded}");
    }
}
