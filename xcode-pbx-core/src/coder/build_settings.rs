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

use indexmap::IndexMap;

use crate::coder::{Value, ValueCoder};
use crate::error::Error;
use crate::mismatch;
use crate::plist::{Dictionary, PlistValue};
use crate::resolver::context::{DecodeContext, EncodeContext};

/// A single build setting; values are opaque and `$(VAR)` is not expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildSetting {
    String(String),
    List(Vec<String>),
}

impl From<&str> for BuildSetting {
    fn from(value: &str) -> Self {
        BuildSetting::String(value.to_owned())
    }
}

impl From<String> for BuildSetting {
    fn from(value: String) -> Self {
        BuildSetting::String(value)
    }
}

impl From<Vec<String>> for BuildSetting {
    fn from(values: Vec<String>) -> Self {
        BuildSetting::List(values)
    }
}

/// Ordered build settings of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings(IndexMap<String, BuildSetting>);

impl BuildSettings {
    pub fn new() -> BuildSettings {
        BuildSettings::default()
    }

    pub fn get(&self, name: &str) -> Option<&BuildSetting> {
        self.0.get(name)
    }

    /// Value of a scalar setting; `None` for absent or list settings.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(BuildSetting::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn insert<K: Into<String>, V: Into<BuildSetting>>(&mut self, name: K, value: V) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with<K: Into<String>, V: Into<BuildSetting>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BuildSetting)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildSettingsCoder;

impl ValueCoder for BuildSettingsCoder {
    fn decode(&self, wire: &PlistValue, _context: &DecodeContext) -> Result<Value, Error> {
        let Some(dict) = wire.as_dictionary() else {
            mismatch!("expected build settings dictionary, found {}", wire.kind());
        };
        let mut settings = BuildSettings::new();
        for (name, value) in dict {
            let setting = match value {
                PlistValue::String(s) => BuildSetting::String(s.clone()),
                PlistValue::Array(values) => BuildSetting::List(
                    values
                        .iter()
                        .map(|v| match v.as_str() {
                            Some(s) => Ok(s.to_owned()),
                            None => Err(Error::coder_mismatch(format!(
                                "build setting `{name}` holds a non-string {}",
                                v.kind()
                            ))),
                        })
                        .collect::<Result<_, _>>()?,
                ),
                other => mismatch!("build setting `{}` is a {}", name, other.kind()),
            };
            settings.insert(name.clone(), setting);
        }
        Ok(Value::BuildSettings(settings))
    }

    fn encode(&self, value: &Value, _context: &mut EncodeContext) -> Result<PlistValue, Error> {
        let Value::BuildSettings(settings) = value else {
            mismatch!("build settings coder cannot encode {}", value.kind());
        };
        let mut dict = Dictionary::with_capacity(settings.len());
        for (name, setting) in settings.iter() {
            let wire = match setting {
                BuildSetting::String(s) => PlistValue::from(s.as_str()),
                BuildSetting::List(values) => PlistValue::Array(
                    values.iter().map(|v| PlistValue::from(v.as_str())).collect(),
                ),
            };
            dict.insert(name.to_owned(), wire);
        }
        Ok(PlistValue::Dictionary(dict))
    }
}
