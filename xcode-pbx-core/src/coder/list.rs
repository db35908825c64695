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

/// Array of values sharing one element coder.
#[derive(Debug, Clone, Copy)]
pub struct ListCoder {
    element: &'static dyn ValueCoder,
}

impl ListCoder {
    pub const fn new(element: &'static dyn ValueCoder) -> ListCoder {
        ListCoder { element }
    }
}

impl ValueCoder for ListCoder {
    fn decode(&self, wire: &PlistValue, context: &DecodeContext) -> Result<Value, Error> {
        let Some(elements) = wire.as_array() else {
            mismatch!("expected array, found {}", wire.kind());
        };
        elements
            .iter()
            .map(|element| self.element.decode(element, context))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }

    fn encode(&self, value: &Value, context: &mut EncodeContext) -> Result<PlistValue, Error> {
        let Value::List(values) = value else {
            mismatch!("list coder cannot encode {}", value.kind());
        };
        let mut elements = Vec::with_capacity(values.len());
        for value in values {
            elements.push(self.element.encode(value, context)?);
        }
        Ok(PlistValue::Array(elements))
    }
}
