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

#[derive(Debug, Clone, Copy, Default)]
pub struct StringCoder;

impl ValueCoder for StringCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        match wire {
            PlistValue::String(s) => Ok(Value::String(s.clone())),
            other => mismatch!("expected string, found {}", other.kind()),
        }
    }

    fn encode(&self, value: &Value, _context: &mut EncodeContext) -> Result<PlistValue, Error> {
        match value {
            Value::String(s) => Ok(PlistValue::String(s.clone())),
            other => mismatch!("string coder cannot encode {}", other.kind()),
        }
    }
}
