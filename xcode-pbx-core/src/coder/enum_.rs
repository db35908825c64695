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

//! Table-driven coders for the enum-like fields.

use crate::coder::{Value, ValueCoder};
use crate::error::Error;
use crate::mismatch;
use crate::plist::PlistValue;
use crate::resolver::context::{DecodeContext, EncodeContext};
use crate::types::{ProductType, ProxyType, SourceTree, SubFolder, VersionRequirementKind};

fn expect_str<'w>(wire: &'w PlistValue, what: &str) -> Result<&'w str, Error> {
    match wire.as_str() {
        Some(s) => Ok(s),
        None => mismatch!("expected {}, found {}", what, wire.kind()),
    }
}

fn expect_code(wire: &PlistValue, what: &str) -> Result<u8, Error> {
    let s = expect_str(wire, what)?;
    s.parse::<u8>()
        .map_err(|_| Error::coder_mismatch(format!("expected numeric {what}, found `{s}`")))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductTypeCoder;

impl ValueCoder for ProductTypeCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        let identifier = expect_str(wire, "product type")?;
        Ok(Value::ProductType(ProductType::of(identifier)))
    }

    fn encode(&self, value: &Value, _context: &mut EncodeContext) -> Result<PlistValue, Error> {
        match value {
            Value::ProductType(product_type) => Ok(PlistValue::String(product_type.identifier())),
            other => mismatch!("product type coder cannot encode {}", other.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProxyTypeCoder;

impl ValueCoder for ProxyTypeCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        let code = expect_code(wire, "proxy type")?;
        ProxyType::try_from(code)
            .map(Value::ProxyType)
            .map_err(|_| Error::coder_mismatch(format!("unknown proxy type `{code}`")))
    }

    fn encode(&self, value: &Value, _context: &mut EncodeContext) -> Result<PlistValue, Error> {
        match value {
            Value::ProxyType(proxy_type) => Ok(PlistValue::String(u8::from(*proxy_type).to_string())),
            other => mismatch!("proxy type coder cannot encode {}", other.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SourceTreeCoder;

impl ValueCoder for SourceTreeCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        let tree = expect_str(wire, "source tree")?;
        Ok(Value::SourceTree(SourceTree::of(tree)))
    }

    fn encode(&self, value: &Value, _context: &mut EncodeContext) -> Result<PlistValue, Error> {
        match value {
            Value::SourceTree(tree) => Ok(PlistValue::from(tree.as_str())),
            other => mismatch!("source tree coder cannot encode {}", other.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubFolderCoder;

impl ValueCoder for SubFolderCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        let code = expect_code(wire, "subfolder spec")?;
        SubFolder::try_from(code)
            .map(Value::SubFolder)
            .map_err(|_| Error::coder_mismatch(format!("unknown subfolder spec `{code}`")))
    }

    fn encode(&self, value: &Value, _context: &mut EncodeContext) -> Result<PlistValue, Error> {
        match value {
            Value::SubFolder(folder) => Ok(PlistValue::String(u8::from(*folder).to_string())),
            other => mismatch!("subfolder coder cannot encode {}", other.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VersionRequirementKindCoder;

impl ValueCoder for VersionRequirementKindCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        let kind = expect_str(wire, "version requirement kind")?;
        match VersionRequirementKind::of(kind) {
            Some(kind) => Ok(Value::VersionRequirementKind(kind)),
            None => mismatch!("unknown version requirement kind `{}`", kind),
        }
    }

    fn encode(&self, value: &Value, _context: &mut EncodeContext) -> Result<PlistValue, Error> {
        match value {
            Value::VersionRequirementKind(kind) => Ok(PlistValue::from(kind.as_str())),
            other => mismatch!("version requirement kind coder cannot encode {}", other.kind()),
        }
    }
}
