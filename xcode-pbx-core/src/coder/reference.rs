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

use crate::coder::{Value, ValueCoder};
use crate::error::Error;
use crate::mismatch;
use crate::plist::PlistValue;
use crate::resolver::context::{DecodeContext, EncodeContext};

/// Reference to another graph object by global ID.
///
/// Decoding looks the ID up in the graph being read; encoding writes the
/// target's global ID, allocating one if the target was built in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectRefCoder;

impl ValueCoder for ObjectRefCoder {
    fn decode(&self, wire: &PlistValue, context: &DecodeContext) -> Result<Value, Error> {
        let Some(global_id) = wire.as_str() else {
            mismatch!("expected global ID, found {}", wire.kind());
        };
        context.resolve(global_id).map(Value::Reference)
    }

    fn encode(&self, value: &Value, context: &mut EncodeContext) -> Result<PlistValue, Error> {
        let Value::Reference(id) = value else {
            mismatch!("reference coder cannot encode {}", value.kind());
        };
        let global_id = context.global_id_of(*id)?;
        Ok(PlistValue::String(global_id.as_str().to_owned()))
    }
}
