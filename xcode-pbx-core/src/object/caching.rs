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

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::trace;

use crate::coder::Value;
use crate::error::Error;
use crate::key::CodingKey;
use crate::object::{DefaultKeyedObject, KeyedObject};
use crate::plist::PlistValue;
use crate::resolver::context::{DecodeContext, EncodeContext};
use crate::types::GlobalId;

#[derive(Debug, Default)]
struct DecodeCache {
    age: u64,
    values: HashMap<CodingKey, Option<Value>>,
}

/// Memoizes [`try_decode`](KeyedObject::try_decode) per key.
///
/// Absent results are cached as well. The cache is dropped whenever the
/// delegate reports a different age; errors are never cached.
#[derive(Debug)]
pub struct CachingKeyedObject<D> {
    delegate: D,
    cache: RefCell<DecodeCache>,
}

impl<D: KeyedObject> CachingKeyedObject<D> {
    pub fn new(delegate: D) -> CachingKeyedObject<D> {
        let age = delegate.age();
        CachingKeyedObject {
            delegate,
            cache: RefCell::new(DecodeCache {
                age,
                values: HashMap::new(),
            }),
        }
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn into_inner(self) -> D {
        self.delegate
    }
}

impl<D: PartialEq> PartialEq for CachingKeyedObject<D> {
    fn eq(&self, other: &Self) -> bool {
        self.delegate == other.delegate
    }
}

impl<D: KeyedObject> KeyedObject for CachingKeyedObject<D> {
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
        {
            let mut cache = self.cache.borrow_mut();
            let age = self.delegate.age();
            if cache.age != age {
                cache.age = age;
                cache.values.clear();
            }
            if let Some(value) = cache.values.get(&key) {
                trace!(isa = self.delegate.isa(), key = %key, "decode cache hit");
                return Ok(value.clone());
            }
        }
        // The borrow is released first: decoding a nested object may come back
        // through this cache for another key.
        let value = self.delegate.try_decode(key, context)?;
        self.cache.borrow_mut().values.insert(key, value.clone());
        Ok(value)
    }

    fn encode(&self, context: &mut EncodeContext) -> Result<(), Error> {
        self.delegate.encode(context)
    }

    fn unknown_fields(&self, known: &[CodingKey]) -> Vec<(String, PlistValue)> {
        self.delegate.unknown_fields(known)
    }

    fn base(&self) -> &DefaultKeyedObject {
        self.delegate.base()
    }
}
