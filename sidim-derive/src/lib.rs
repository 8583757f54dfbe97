//! Derive macro implementation used by `sidim-core`.
//!
//! `sidim-derive` is an implementation detail of this workspace. The `Scale` derive expands in terms of
//! `crate::Scale` and `crate::ratio::reduce`, so it is intended to be used by `sidim-core` (or by crates that
//! expose an identical crate-root API).
//!
//! Most users should depend on `sidim` instead and use the predefined scales.
//!
//! # Generated impls
//!
//! For a scale marker type `MyScale`, the derive implements `crate::Scale for MyScale`, with `NUM`/`DEN`
//! reduced to lowest terms at compile time.
//!
//! # Attributes
//!
//! The derive reads a required `#[scale(...)]` attribute:
//!
//! - `num = 60`: numerator of the multiple of the coherent SI unit
//! - `den = 1`: denominator (optional, defaults to `1`)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitInt, Token,
};

/// Derive `crate::Scale` for a marker type.
///
/// The derive must be paired with a `#[scale(...)]` attribute providing `num` and optionally `den`.
///
/// This macro is intended for use by `sidim-core`.
#[proc_macro_derive(Scale, attributes(scale))]
pub fn derive_scale(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_scale_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_scale_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "scale markers cannot be generic",
        ));
    }

    let scale_attr = parse_scale_attribute(&input.attrs)?;

    let num = scale_attr.num;
    let den = scale_attr.den;

    let expanded = quote! {
        impl crate::Scale for #name {
            const NUM: u64 = crate::ratio::reduce(#num, #den).0;
            const DEN: u64 = crate::ratio::reduce(#num, #den).1;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[scale(...)]` attribute.
struct ScaleAttribute {
    num: u64,
    den: u64,
}

impl Parse for ScaleAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut num: Option<u64> = None;
        let mut den: Option<u64> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "num" => {
                    num = Some(parse_term(input)?);
                }
                "den" => {
                    den = Some(parse_term(input)?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let num =
            num.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `num`"))?;

        Ok(ScaleAttribute {
            num,
            den: den.unwrap_or(1),
        })
    }
}

/// A positive integer literal that fits `u64`.
fn parse_term(input: ParseStream) -> syn::Result<u64> {
    let lit: LitInt = input.parse()?;
    let value = lit.base10_parse::<u64>()?;
    if value == 0 {
        return Err(syn::Error::new(
            lit.span(),
            "scale ratio terms must be non-zero",
        ));
    }
    Ok(value)
}

fn parse_scale_attribute(attrs: &[Attribute]) -> syn::Result<ScaleAttribute> {
    for attr in attrs {
        if attr.path().is_ident("scale") {
            return attr.parse_args::<ScaleAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[scale(...)] attribute",
    ))
}
