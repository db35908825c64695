// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::util::to_lower_camel_case;

mod attrs;

pub fn derive_coding_keys(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let data_enum = match &ast.data {
        Data::Enum(data_enum) => data_enum,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "CodingKeys can only be derived for enums",
            ))
        }
    };

    let family = attrs::parse_family_meta(ast)?;
    let family_name = family.name().ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "missing #[coding_keys(isa = \"...\")] or #[coding_keys(family = \"...\")]",
        )
    })?;

    let mut variant_idents = Vec::with_capacity(data_enum.variants.len());
    let mut wire_names = Vec::with_capacity(data_enum.variants.len());
    let mut coders = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "coding keys must be fieldless variants",
            ));
        }
        let meta = attrs::parse_key_meta(variant)?;
        let coder = meta.coder.ok_or_else(|| {
            syn::Error::new_spanned(variant, "missing #[coding_key(coder = ...)]")
        })?;
        let wire_name = meta
            .rename
            .unwrap_or_else(|| to_lower_camel_case(&variant.ident.to_string()));
        if wire_name == "isa" {
            return Err(syn::Error::new_spanned(
                variant,
                "`isa` is shared by every family and cannot be redeclared",
            ));
        }
        variant_idents.push(&variant.ident);
        wire_names.push(wire_name);
        coders.push(coder);
    }

    let (isa_const, isa_key) = match &family.isa {
        Some(isa) => (
            quote! { ::core::option::Option::Some(#isa) },
            quote! { ::xcode_pbx_core::key::CodingKey::ISA, },
        ),
        None => (quote! { ::core::option::Option::None }, quote! {}),
    };

    Ok(quote! {
        impl ::xcode_pbx_core::key::CodingKeys for #name {
            const FAMILY: &'static str = #family_name;
            const ISA: ::core::option::Option<&'static str> = #isa_const;
            const KEYS: &'static [::xcode_pbx_core::key::CodingKey] = &[
                #isa_key
                #( ::xcode_pbx_core::key::CodingKey::new(#family_name, #wire_names), )*
            ];
            const VARIANTS: &'static [Self] = &[ #( Self::#variant_idents, )* ];

            fn coding_key(self) -> ::xcode_pbx_core::key::CodingKey {
                match self {
                    #( Self::#variant_idents => ::xcode_pbx_core::key::CodingKey::new(#family_name, #wire_names), )*
                }
            }

            fn coder(self) -> &'static dyn ::xcode_pbx_core::coder::ValueCoder {
                match self {
                    #( Self::#variant_idents => &#coders, )*
                }
            }
        }

        impl ::core::convert::From<#name> for ::xcode_pbx_core::key::CodingKey {
            fn from(key: #name) -> Self {
                ::xcode_pbx_core::key::CodingKeys::coding_key(key)
            }
        }
    })
}
