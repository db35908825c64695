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

//! # Xcode PBX Derive Macros
//!
//! This crate provides the procedural macros used to declare the closed set of
//! fields of every PBX object type.
//!
//! ## Available Macros
//!
//! ### `#[derive(CodingKeys)]`
//!
//! Turns a fieldless enum into a coding-key family. Each variant becomes one
//! wire field of the family, bound to the value coder that converts it.
//!
//! **Container attribute** `#[coding_keys(...)]`:
//! - `isa = "PBXBuildFile"`: the family describes a top-level graph object. The
//!   shared `isa` key is prepended to the family's key list.
//! - `family = "ProjectReference"`: the family describes a nested object that
//!   carries no `isa`.
//!
//! **Variant attribute** `#[coding_key(...)]`:
//! - `coder = <expr>`: the static value coder used for the field (required).
//! - `rename = "ProjectRef"`: the wire name, when it is not the lower camel case
//!   spelling of the variant.
//!
//! **Example:**
//! ```rust,ignore
//! use xcode_pbx_core::coder;
//! use xcode_pbx_derive::CodingKeys;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
//! #[coding_keys(isa = "PBXBuildFile")]
//! pub enum PBXBuildFileKey {
//!     #[coding_key(coder = coder::OBJECT_REF)]
//!     FileRef,
//!     #[coding_key(coder = coder::DICTIONARY)]
//!     Settings,
//! }
//! ```
//!
//! ## Generated Code
//!
//! - `CodingKeys` trait implementation with the family name, optional isa, the
//!   ordered key list and the per-variant coder binding
//! - `From<Enum> for CodingKey`

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod coding_keys;
mod util;

/// Derive macro declaring a coding-key family.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
/// #[coding_keys(family = "ProjectReference")]
/// pub enum ProjectReferenceKey {
///     #[coding_key(rename = "ProjectRef", coder = coder::OBJECT_REF)]
///     ProjectRef,
///     #[coding_key(rename = "ProductGroup", coder = coder::OBJECT_REF)]
///     ProductGroup,
/// }
/// ```
#[proc_macro_derive(CodingKeys, attributes(coding_keys, coding_key))]
pub fn proc_macro_derive_coding_keys(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    coding_keys::derive_coding_keys(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
