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

//! The `CodingKeyCoders` registry: which coder handles which field.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tracing::trace;

use crate::codeable::keys;
use crate::coder::{ValueCoder, STRING};
use crate::error::Error;
use crate::key::{CodingKey, CodingKeys};

const ISA_ONLY: &[CodingKey] = &[CodingKey::ISA];

static DEFAULT_CODERS: LazyLock<Arc<CodingKeyCoders>> =
    LazyLock::new(|| Arc::new(CodingKeyCoders::with_defaults()));

/// Registry mapping every [`CodingKey`] to its [`ValueCoder`], plus the key
/// set of each registered family.
///
/// The registry is immutable once shared; build a custom one with
/// [`CodingKeyCoders::register`] before handing it to a graph or codec.
#[derive(Debug, Clone)]
pub struct CodingKeyCoders {
    coders: HashMap<CodingKey, &'static dyn ValueCoder>,
    families: HashMap<&'static str, &'static [CodingKey]>,
}

impl Default for CodingKeyCoders {
    /// An empty registry knowing only the shared `isa` key.
    fn default() -> Self {
        let mut coders: HashMap<CodingKey, &'static dyn ValueCoder> = HashMap::new();
        coders.insert(CodingKey::ISA, &STRING);
        CodingKeyCoders {
            coders,
            families: HashMap::new(),
        }
    }
}

impl CodingKeyCoders {
    /// A registry with every family of the PBX object schema.
    pub fn with_defaults() -> CodingKeyCoders {
        let mut coders = CodingKeyCoders::default();
        keys::register_all(&mut coders);
        coders
    }

    /// The process-wide schema registry.
    pub fn shared() -> Arc<CodingKeyCoders> {
        Arc::clone(&DEFAULT_CODERS)
    }

    /// Registers every key of `K`, replacing earlier registrations of the
    /// same family.
    pub fn register<K: CodingKeys>(&mut self) -> &mut Self {
        trace!(family = K::FAMILY, keys = K::VARIANTS.len(), "registering coding keys");
        for key in K::VARIANTS {
            self.coders.insert(key.coding_key(), key.coder());
        }
        self.families.insert(K::FAMILY, K::KEYS);
        self
    }

    /// Coder bound to `key`.
    pub fn get(&self, key: CodingKey) -> Result<&'static dyn ValueCoder, Error> {
        self.coders
            .get(&key)
            .copied()
            .ok_or_else(|| Error::coder_mismatch(format!("no coder registered for {key}")))
    }

    /// Keys of a registered family; `isa` is first for graph objects.
    pub fn keys_of(&self, family: &str) -> Option<&'static [CodingKey]> {
        self.families.get(family).copied()
    }

    /// Keys written for an object of `isa`. Unregistered types only carry
    /// their `isa`; everything else about them is kept in wire form.
    pub fn known_keys(&self, isa: &str) -> &'static [CodingKey] {
        self.keys_of(isa).unwrap_or(ISA_ONLY)
    }

    pub fn is_registered(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }
}
