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

//! Coding keys: the named, typed fields of an object family.
//!
//! Each object family is a closed enum deriving [`CodingKeys`]; the derive
//! assigns every variant its wire name and binds it to a [`ValueCoder`].
//!
//! ```ignore
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
//! #[coding_keys(isa = "PBXBuildFile")]
//! pub enum PBXBuildFileKey {
//!     #[coding_key(coder = crate::coder::OBJECT_REF)]
//!     FileRef,
//!     #[coding_key(coder = crate::coder::DICTIONARY)]
//!     Settings,
//! }
//! ```

use std::fmt;

use crate::coder::ValueCoder;

/// A field identifier: wire name plus the family that owns it.
///
/// Keys of different families never compare equal even when their wire names
/// match, except for [`CodingKey::ISA`] which every family shares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodingKey {
    family: &'static str,
    name: &'static str,
}

impl CodingKey {
    /// The type tag present on every graph object.
    pub const ISA: CodingKey = CodingKey::new("", "isa");

    pub const fn new(family: &'static str, name: &'static str) -> CodingKey {
        CodingKey { family, name }
    }

    /// Wire spelling of the field.
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn family(&self) -> &'static str {
        self.family
    }
}

impl fmt::Debug for CodingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for CodingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.family.is_empty() {
            f.write_str(self.name)
        } else {
            write!(f, "{}.{}", self.family, self.name)
        }
    }
}

/// A closed set of coding keys for one object family.
///
/// Implemented by `#[derive(CodingKeys)]`; hand-written implementations
/// must list [`CodingKey::ISA`] first in `KEYS` when `ISA` is set.
pub trait CodingKeys: Copy + 'static {
    /// Family name; the isa for graph objects.
    const FAMILY: &'static str;
    /// Type tag for graph objects, `None` for nested families.
    const ISA: Option<&'static str>;
    /// Every key of the family in declaration order.
    const KEYS: &'static [CodingKey];
    const VARIANTS: &'static [Self];

    fn coding_key(self) -> CodingKey;

    fn coder(self) -> &'static dyn ValueCoder;
}
