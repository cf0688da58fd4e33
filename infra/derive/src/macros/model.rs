use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{
    Attribute, Field, Fields, GenericArgument, ItemStruct, Lit, LitStr, Meta, PathArguments, Type,
    Visibility, parse_quote,
};

const COPY_PRIMITIVES: &[&str] =
    &["bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize"];

/// Expands the `#[block_model]` attribute macro.
///
/// Injects the shared derives, omits unset `Option` fields from the wire form,
/// generates read-only accessors for private fields and, when `kind` is given,
/// binds the struct to its Block Kit `type` discriminant.
pub fn expand_block_model(args: TokenStream, mut input: ItemStruct) -> TokenStream {
    let ModelArgs { kind, rename_all, deny_unknown_fields } = match parse_model_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };

    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(&input.ident, "block_model requires a struct with named fields")
            .to_compile_error();
    };

    for field in &mut fields.named {
        if option_inner(&field.ty).is_some() && !has_serde_key(&field.attrs, "skip_serializing_if") {
            field.attrs.push(parse_quote! {
                #[serde(default, skip_serializing_if = "Option::is_none")]
            });
        }
    }

    let accessors: Vec<TokenStream> = fields
        .named
        .iter()
        .filter(|field| !matches!(field.vis, Visibility::Public(_)) && !is_tag(&field.ty))
        .filter_map(accessor)
        .collect();

    let derive_attr = derive_attr(&derived_trait_names(&input.attrs));
    let serde_attr = match container_serde_attr(rename_all, deny_unknown_fields, &input.attrs) {
        Ok(attr) => attr,
        Err(err) => return err,
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let kind_impl = kind.map(|kind| {
        quote! {
            #[automatically_derived]
            impl #impl_generics ::bkit_blocks::Typed for #name #ty_generics #where_clause {
                const TYPE: &'static str = #kind;
            }
        }
    });

    let accessor_impl = if accessors.is_empty() {
        quote! {}
    } else {
        quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                #(#accessors)*
            }
        }
    };

    quote! {
        #derive_attr
        #serde_attr
        #input

        #accessor_impl
        #kind_impl
    }
}

struct ModelArgs {
    kind: Option<syn::Expr>,
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

fn parse_model_args(args: TokenStream) -> Result<ModelArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut parsed = ModelArgs { kind: None, rename_all: None, deny_unknown_fields: false };
    let mut seen = FxHashSet::default();

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(meta, "expected `name = value` arguments")
                .to_compile_error());
        };
        let key = name_value.path.get_ident().map(ToString::to_string).unwrap_or_default();
        if !seen.insert(key.clone()) {
            return Err(
                syn::Error::new_spanned(&name_value, "duplicate argument").to_compile_error()
            );
        }

        if key == "kind" {
            parsed.kind = Some(name_value.value);
            continue;
        }

        let syn::Expr::Lit(expr) = &name_value.value else {
            return Err(syn::Error::new_spanned(&name_value.value, "expected a literal")
                .to_compile_error());
        };

        match (key.as_str(), &expr.lit) {
            ("rename_all", Lit::Str(lit)) => parsed.rename_all = Some(lit.clone()),
            ("deny_unknown_fields", Lit::Bool(lit)) => parsed.deny_unknown_fields = lit.value,
            ("rename_all" | "deny_unknown_fields", _) => {
                return Err(syn::Error::new_spanned(
                    &expr.lit,
                    format!("unexpected literal type for `{key}`"),
                )
                .to_compile_error());
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &name_value.path,
                    "unsupported argument; expected kind, rename_all or deny_unknown_fields",
                )
                .to_compile_error());
            },
        }
    }

    Ok(parsed)
}

fn accessor(field: &Field) -> Option<TokenStream> {
    let ident = field.ident.as_ref()?;
    let docs = field.attrs.iter().filter(|attr| attr.path().is_ident("doc"));
    let ty = &field.ty;

    let body = if let Some(inner) = option_inner(ty) {
        if is_copy_primitive(inner) {
            quote! { pub const fn #ident(&self) -> Option<#inner> { self.#ident } }
        } else if is_named(inner, "String") {
            quote! { pub fn #ident(&self) -> Option<&str> { self.#ident.as_deref() } }
        } else if let Some(item) = vec_inner(inner) {
            quote! { pub fn #ident(&self) -> Option<&[#item]> { self.#ident.as_deref() } }
        } else {
            quote! { pub const fn #ident(&self) -> Option<&#inner> { self.#ident.as_ref() } }
        }
    } else if is_copy_primitive(ty) {
        quote! { pub const fn #ident(&self) -> #ty { self.#ident } }
    } else if is_named(ty, "String") {
        quote! { pub fn #ident(&self) -> &str { &self.#ident } }
    } else if let Some(item) = vec_inner(ty) {
        quote! { pub fn #ident(&self) -> &[#item] { &self.#ident } }
    } else {
        quote! { pub const fn #ident(&self) -> &#ty { &self.#ident } }
    };

    Some(quote! {
        #(#docs)*
        #[must_use]
        #[inline]
        #body
    })
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let wanted = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("PartialEq", quote! { PartialEq }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ];
    let tokens: Vec<&TokenStream> = wanted
        .iter()
        .filter(|(name, _)| !derives.contains(*name))
        .map(|(_, tokens)| tokens)
        .collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn container_serde_attr(
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
    attrs: &[Attribute],
) -> Result<TokenStream, TokenStream> {
    let mut tokens = Vec::new();

    if let Some(rename_all) = rename_all {
        if has_serde_key(attrs, "rename_all") {
            return Err(syn::Error::new_spanned(
                rename_all,
                "rename_all is already set via serde; remove one of them",
            )
            .to_compile_error());
        }
        tokens.push(quote! { #[serde(rename_all = #rename_all)] });
    }

    if deny_unknown_fields && !has_serde_key(attrs, "deny_unknown_fields") {
        tokens.push(quote! { #[serde(deny_unknown_fields)] });
    }

    Ok(quote! { #(#tokens)* })
}

fn has_serde_key(attrs: &[Attribute], key: &str) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }
    found
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }
    traits
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    path.path.segments.last()
}

fn is_named(ty: &Type, name: &str) -> bool {
    last_segment(ty).is_some_and(|segment| segment.ident == name)
}

fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let segment = last_segment(ty)?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    generic_inner(ty, "Option")
}

fn vec_inner(ty: &Type) -> Option<&Type> {
    generic_inner(ty, "Vec")
}

fn is_tag(ty: &Type) -> bool {
    is_named(ty, "Tag")
}

fn is_copy_primitive(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|segment| {
        segment.arguments.is_none() && COPY_PRIMITIVES.contains(&segment.ident.to_string().as_str())
    })
}
