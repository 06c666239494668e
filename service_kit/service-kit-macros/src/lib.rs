extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, LitStr};

/// Turns a struct into a wire DTO.
///
/// Adds `Debug`, `Clone`, `PartialEq`, `serde::Serialize`, `serde::Deserialize`
/// and `utoipa::ToSchema`, plus `#[serde(rename_all = ...)]` (camelCase unless
/// overridden).
///
/// Arguments:
/// - `rename_all = "PascalCase"`: any casing serde accepts.
/// - `serialize_only`: skip the `Deserialize` derive, for types that parse
///   through a hand-written deserializer elsewhere.
#[proc_macro_attribute]
pub fn api_dto(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut rename_all: Option<LitStr> = None;
    let mut serialize_only = false;
    let args_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("rename_all") {
            rename_all = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("serialize_only") {
            serialize_only = true;
            Ok(())
        } else {
            Err(meta.error("unsupported api_dto argument, expected `rename_all` or `serialize_only`"))
        }
    });
    parse_macro_input!(args with args_parser);

    let item = parse_macro_input!(input as DeriveInput);
    let rename_all = rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let deserialize = if serialize_only {
        quote! {}
    } else {
        quote! { ::serde::Deserialize, }
    };

    let output = quote! {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, #deserialize ::utoipa::ToSchema)]
        #[serde(rename_all = #rename_all)]
        #item
    };
    output.into()
}
