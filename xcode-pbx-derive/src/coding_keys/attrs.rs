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

//! Parsing for `#[coding_keys(...)]` and `#[coding_key(...)]` attributes.

use syn::{DeriveInput, Expr, LitStr, Variant};

/// Parsed `#[coding_keys(...)]` container attribute.
#[derive(Debug, Clone, Default)]
pub struct FamilyMeta {
    /// Object type tag; present for top-level graph objects only.
    pub isa: Option<LitStr>,
    /// Family name for nested objects.
    pub family: Option<LitStr>,
}

impl FamilyMeta {
    /// The family name: the isa when present, otherwise the explicit family.
    pub fn name(&self) -> Option<String> {
        self.isa
            .as_ref()
            .or(self.family.as_ref())
            .map(LitStr::value)
    }
}

/// Parsed `#[coding_key(...)]` variant attribute.
#[derive(Debug, Clone, Default)]
pub struct KeyMeta {
    pub rename: Option<String>,
    pub coder: Option<Expr>,
}

pub fn parse_family_meta(ast: &DeriveInput) -> syn::Result<FamilyMeta> {
    let mut meta = FamilyMeta::default();

    for attr in &ast.attrs {
        if !attr.path().is_ident("coding_keys") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("isa") {
                meta.isa = Some(nested.value()?.parse()?);
            } else if nested.path.is_ident("family") {
                meta.family = Some(nested.value()?.parse()?);
            } else {
                return Err(nested.error("expected `isa` or `family`"));
            }
            Ok(())
        })?;
    }

    if meta.isa.is_some() && meta.family.is_some() {
        return Err(syn::Error::new_spanned(
            &ast.ident,
            "`isa` and `family` are mutually exclusive",
        ));
    }
    Ok(meta)
}

pub fn parse_key_meta(variant: &Variant) -> syn::Result<KeyMeta> {
    let mut meta = KeyMeta::default();

    for attr in &variant.attrs {
        if !attr.path().is_ident("coding_key") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                let lit: LitStr = nested.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "wire name must not be empty"));
                }
                meta.rename = Some(lit.value());
            } else if nested.path.is_ident("coder") {
                meta.coder = Some(nested.value()?.parse()?);
            } else {
                return Err(nested.error("expected `rename` or `coder`"));
            }
            Ok(())
        })?;
    }

    Ok(meta)
}
