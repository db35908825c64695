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

//! Xcode's ASCII property-list dialect.
//!
//! The model is deliberately small: every scalar in a `.pbxproj` is a string
//! (numbers and booleans included), so a value is a string, an array, an
//! ordered dictionary or a `<hex>` data blob.

use indexmap::IndexMap;

use crate::error::Error;

pub mod reader;
pub mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Header line Xcode writes at the top of every project file.
pub const UTF8_HEADER: &str = "// !$*UTF8*$!";

/// Ordered dictionary; insertion order is the order keys appear in the file.
pub type Dictionary = IndexMap<String, PlistValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlistValue {
    String(String),
    Array(Vec<PlistValue>),
    Dictionary(Dictionary),
    Data(Vec<u8>),
}

impl PlistValue {
    /// Short name of the value's shape, used in mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PlistValue::String(_) => "string",
            PlistValue::Array(_) => "array",
            PlistValue::Dictionary(_) => "dictionary",
            PlistValue::Data(_) => "data",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            PlistValue::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            PlistValue::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn into_dictionary(self) -> Option<Dictionary> {
        match self {
            PlistValue::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<&str> for PlistValue {
    fn from(value: &str) -> Self {
        PlistValue::String(value.to_owned())
    }
}

impl From<String> for PlistValue {
    fn from(value: String) -> Self {
        PlistValue::String(value)
    }
}

impl From<Vec<PlistValue>> for PlistValue {
    fn from(values: Vec<PlistValue>) -> Self {
        PlistValue::Array(values)
    }
}

impl From<Dictionary> for PlistValue {
    fn from(dict: Dictionary) -> Self {
        PlistValue::Dictionary(dict)
    }
}

/// Parses a complete document.
pub fn from_str(input: &str) -> Result<PlistValue, Error> {
    Reader::new(input).read_document()
}

/// Serializes a complete document, header included.
pub fn to_string(value: &PlistValue, pretty: bool) -> String {
    let mut writer = Writer::new(pretty);
    writer.write_document(value);
    writer.dump()
}
