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

use tracing::debug;

use crate::coder::Value;
use crate::error::Error;
use crate::key::CodingKey;
use crate::object::{DefaultKeyedObject, KeyedObject};
use crate::plist::PlistValue;
use crate::resolver::context::{DecodeContext, EncodeContext};
use crate::types::GlobalId;

/// Encodes exactly the keys meaningful for the object's isa, skipping absent
/// ones. Wire fields outside that set are appended verbatim when the encode
/// context preserves unknown keys.
#[derive(Debug, PartialEq)]
pub struct RecodeableKeyedObject<D> {
    delegate: D,
    known: &'static [CodingKey],
}

impl<D: KeyedObject> RecodeableKeyedObject<D> {
    pub fn new(delegate: D, known: &'static [CodingKey]) -> RecodeableKeyedObject<D> {
        RecodeableKeyedObject { delegate, known }
    }

    pub fn known_keys(&self) -> &'static [CodingKey] {
        self.known
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }
}

impl<D: KeyedObject> KeyedObject for RecodeableKeyedObject<D> {
    fn isa(&self) -> &str {
        self.delegate.isa()
    }

    fn global_id(&self) -> Option<&GlobalId> {
        self.delegate.global_id()
    }

    fn age(&self) -> u64 {
        self.delegate.age()
    }

    fn try_decode(&self, key: CodingKey, context: &DecodeContext) -> Result<Option<Value>, Error> {
        self.delegate.try_decode(key, context)
    }

    fn encode(&self, context: &mut EncodeContext) -> Result<(), Error> {
        let decoder = context.decoder();
        for key in self.known {
            if let Some(value) = self.delegate.try_decode(*key, &decoder)? {
                context.try_encode(*key, &value)?;
            }
        }
        if context.is_preserve_unknown_keys() {
            for (name, wire) in self.delegate.unknown_fields(self.known) {
                debug!(isa = self.delegate.isa(), key = %name, "preserving unknown key");
                context.encode_raw(&name, wire);
            }
        }
        Ok(())
    }

    fn unknown_fields(&self, known: &[CodingKey]) -> Vec<(String, PlistValue)> {
        self.delegate.unknown_fields(known)
    }

    fn base(&self) -> &DefaultKeyedObject {
        self.delegate.base()
    }
}
