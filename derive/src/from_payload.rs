use std::collections::HashMap;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, ExprClosure, Field, Fields, Ident, LitInt, Pat, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

pub(crate) fn expand_from_payload(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromPayload` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromPayload` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .collect::<Result<Vec<_>>>()?;

    let mut offsets: HashMap<usize, Ident> = HashMap::new();

    for field in &fields {
        let offset = field.offset.base10_parse::<usize>()?;

        if offsets.insert(offset, field.name.clone()).is_some() {
            Err(Error::new(
                field.offset.span(),
                "Field offsets must be unique.",
            ))?
        }
    }

    let assignments = fields.iter().map(|field| {
        let FieldMetadata {
            name,
            primitive,
            offset,
            handler,
        } = field;

        let read = quote! { payload.read::<#primitive>(#offset) };

        if let Some(handler) = handler {
            quote! { #name: (#handler)(#read) }
        } else {
            quote! { #name: #read }
        }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl FromPayload for #name {
            fn from_payload(payload: &Payload<'_>) -> Self {
                Self {
                    #(#assignments,)*
                }
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    primitive: Type,
    offset: LitInt,
    handler: Option<ExprClosure>,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Self> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            Err(Error::new_spanned(
                field,
                "Every field must have a `field(offset)` attribute.",
            ))?
        };

        let FieldAttribute { offset, handler } = attr.meta.require_list()?.parse_args()?;

        let primitive = if let Some(handler) = &handler {
            if handler.inputs.len() != 1 {
                Err(Error::new_spanned(
                    handler,
                    "Handler closure must have exactly one parameter.",
                ))?
            }

            let parameter = &handler.inputs[0];

            let Pat::Type(pat_type) = parameter else {
                Err(Error::new_spanned(
                    parameter,
                    "Handler closure's parameter must be annotated with the wire type to read.",
                ))?
            };

            (*pat_type.ty).clone()
        } else {
            field.ty.clone()
        };

        Ok(Self {
            name,
            primitive,
            offset,
            handler,
        })
    }
}

#[derive(Debug)]
struct FieldAttribute {
    offset: LitInt,
    handler: Option<ExprClosure>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let offset = input.parse::<LitInt>()?;

        let handler = if !input.is_empty() {
            input.parse::<Token![,]>()?;
            Some(input.parse::<ExprClosure>()?)
        } else {
            None
        };

        Ok(Self { offset, handler })
    }
}
