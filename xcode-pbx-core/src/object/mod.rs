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

//! The keyed-object storage model and its decorators.

use std::fmt::Debug;

use crate::coder::Value;
use crate::error::Error;
use crate::key::CodingKey;
use crate::plist::PlistValue;
use crate::resolver::context::{DecodeContext, EncodeContext};
use crate::types::GlobalId;

mod caching;
mod default;
mod recodeable;

pub use caching::CachingKeyedObject;
pub use default::{DefaultKeyedObject, DefaultKeyedObjectBuilder, Field};
pub use recodeable::RecodeableKeyedObject;

/// Storage of one object, addressed by [`CodingKey`].
pub trait KeyedObject: Debug {
    /// Type tag, or the family name for nested objects.
    fn isa(&self) -> &str;

    /// `None` for objects built in memory and not yet written.
    fn global_id(&self) -> Option<&GlobalId>;

    /// Mutation counter; a replacement object always has a higher age.
    fn age(&self) -> u64;

    /// Decodes the field for `key`. An absent field is `Ok(None)`; only a
    /// coder failure on malformed wire data is an error.
    fn try_decode(&self, key: CodingKey, context: &DecodeContext) -> Result<Option<Value>, Error>;

    fn encode(&self, context: &mut EncodeContext) -> Result<(), Error>;

    /// Wire fields whose names are not among `known`.
    fn unknown_fields(&self, _known: &[CodingKey]) -> Vec<(String, PlistValue)> {
        Vec::new()
    }

    /// The underlying field store.
    fn base(&self) -> &DefaultKeyedObject;
}
