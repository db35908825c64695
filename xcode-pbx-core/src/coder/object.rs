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

use std::rc::Rc;

use crate::coder::{Value, ValueCoder};
use crate::error::Error;
use crate::mismatch;
use crate::object::{DefaultKeyedObject, KeyedObject};
use crate::plist::PlistValue;
use crate::resolver::context::{DecodeContext, EncodeContext};

/// Object nested inline in its parent, such as a project reference entry or a
/// package version requirement.
///
/// Fields of the nested object stay in wire form and are decoded on access
/// with the keys of `family`.
#[derive(Debug, Clone, Copy)]
pub struct ObjectCoder {
    family: &'static str,
}

impl ObjectCoder {
    pub const fn new(family: &'static str) -> ObjectCoder {
        ObjectCoder { family }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }
}

impl ValueCoder for ObjectCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        match wire {
            PlistValue::Dictionary(dict) => Ok(Value::Object(Rc::new(
                DefaultKeyedObject::from_wire(self.family, None, dict.clone()),
            ))),
            other => mismatch!(
                "expected dictionary for {}, found {}",
                self.family,
                other.kind()
            ),
        }
    }

    fn encode(&self, value: &Value, context: &mut EncodeContext) -> Result<PlistValue, Error> {
        let Value::Object(object) = value else {
            mismatch!("{} coder cannot encode {}", self.family, value.kind());
        };
        let mut nested = context.child();
        object.encode(&mut nested)?;
        Ok(PlistValue::Dictionary(nested.into_output()))
    }
}
