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

//! Value coders: bidirectional transforms between plist wire values and the
//! typed [`Value`]s exposed by the object model.

use std::fmt::Debug;
use std::rc::Rc;

use crate::error::Error;
use crate::object::DefaultKeyedObject;
use crate::plist::{Dictionary, PlistValue};
use crate::resolver::context::{DecodeContext, EncodeContext};
use crate::types::{ObjectId, ProductType, ProxyType, SourceTree, SubFolder, VersionRequirementKind};

mod boolean;
mod build_settings;
mod enum_;
mod list;
mod map;
mod object;
mod reference;
mod string;

pub use boolean::ZeroOneBooleanCoder;
pub use build_settings::{BuildSetting, BuildSettings, BuildSettingsCoder};
pub use enum_::{
    ProductTypeCoder, ProxyTypeCoder, SourceTreeCoder, SubFolderCoder,
    VersionRequirementKindCoder,
};
pub use list::ListCoder;
pub use map::DictionaryCoder;
pub use object::ObjectCoder;
pub use reference::ObjectRefCoder;
pub use string::StringCoder;

/// Transforms one field between its wire and semantic representations.
///
/// Coders are stateless and shared as `&'static` instances. An absent wire
/// value never reaches a coder; absence is handled by the keyed object.
pub trait ValueCoder: Send + Sync + Debug {
    fn decode(&self, wire: &PlistValue, context: &DecodeContext) -> Result<Value, Error>;

    fn encode(&self, value: &Value, context: &mut EncodeContext) -> Result<PlistValue, Error>;
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    List(Vec<Value>),
    /// Opaque dictionary, kept in wire form.
    Dictionary(Dictionary),
    /// Nested object stored inline, not by reference.
    Object(Rc<DefaultKeyedObject>),
    /// Handle of another object in the same graph.
    Reference(ObjectId),
    ProductType(ProductType),
    ProxyType(ProxyType),
    SourceTree(SourceTree),
    SubFolder(SubFolder),
    VersionRequirementKind(VersionRequirementKind),
    BuildSettings(BuildSettings),
}

impl Value {
    /// Short name of the variant, used in mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Dictionary(_) => "dictionary",
            Value::Object(_) => "object",
            Value::Reference(_) => "reference",
            Value::ProductType(_) => "product type",
            Value::ProxyType(_) => "proxy type",
            Value::SourceTree(_) => "source tree",
            Value::SubFolder(_) => "subfolder",
            Value::VersionRequirementKind(_) => "version requirement kind",
            Value::BuildSettings(_) => "build settings",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Reference(id)
    }
}

impl From<Vec<ObjectId>> for Value {
    fn from(ids: Vec<ObjectId>) -> Self {
        Value::List(ids.into_iter().map(Value::Reference).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values.into_iter().map(Value::String).collect())
    }
}

impl From<ProductType> for Value {
    fn from(value: ProductType) -> Self {
        Value::ProductType(value)
    }
}

impl From<ProxyType> for Value {
    fn from(value: ProxyType) -> Self {
        Value::ProxyType(value)
    }
}

impl From<SourceTree> for Value {
    fn from(value: SourceTree) -> Self {
        Value::SourceTree(value)
    }
}

impl From<SubFolder> for Value {
    fn from(value: SubFolder) -> Self {
        Value::SubFolder(value)
    }
}

impl From<VersionRequirementKind> for Value {
    fn from(value: VersionRequirementKind) -> Self {
        Value::VersionRequirementKind(value)
    }
}

impl From<BuildSettings> for Value {
    fn from(value: BuildSettings) -> Self {
        Value::BuildSettings(value)
    }
}

impl From<Dictionary> for Value {
    fn from(value: Dictionary) -> Self {
        Value::Dictionary(value)
    }
}

impl From<DefaultKeyedObject> for Value {
    fn from(value: DefaultKeyedObject) -> Self {
        Value::Object(Rc::new(value))
    }
}

pub static STRING: StringCoder = StringCoder;
pub static BOOLEAN: ZeroOneBooleanCoder = ZeroOneBooleanCoder;
pub static STRING_LIST: ListCoder = ListCoder::new(&STRING);
pub static DICTIONARY: DictionaryCoder = DictionaryCoder;
pub static OBJECT_REF: ObjectRefCoder = ObjectRefCoder;
pub static OBJECT_REF_LIST: ListCoder = ListCoder::new(&OBJECT_REF);
pub static PRODUCT_TYPE: ProductTypeCoder = ProductTypeCoder;
pub static PROXY_TYPE: ProxyTypeCoder = ProxyTypeCoder;
pub static SOURCE_TREE: SourceTreeCoder = SourceTreeCoder;
pub static SUB_FOLDER: SubFolderCoder = SubFolderCoder;
pub static VERSION_REQUIREMENT_KIND: VersionRequirementKindCoder = VersionRequirementKindCoder;
pub static BUILD_SETTINGS: BuildSettingsCoder = BuildSettingsCoder;
pub static PROJECT_REFERENCE: ObjectCoder = ObjectCoder::new("ProjectReference");
pub static PROJECT_REFERENCE_LIST: ListCoder = ListCoder::new(&PROJECT_REFERENCE);
pub static VERSION_REQUIREMENT: ObjectCoder = ObjectCoder::new("XCSwiftPackageVersionRequirement");
