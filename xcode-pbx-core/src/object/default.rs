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
use tracing::trace;

use crate::coder::Value;
use crate::error::Error;
use crate::key::CodingKey;
use crate::object::KeyedObject;
use crate::plist::{Dictionary, PlistValue};
use crate::resolver::context::{DecodeContext, EncodeContext};
use crate::types::GlobalId;

/// One stored field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// As read from the file; decoded on access.
    Wire(PlistValue),
    /// Set in memory through a coding key.
    Value(CodingKey, Value),
}

/// The plain field store every other keyed object decorates.
///
/// Objects are immutable; [`with`](Self::with) and [`without`](Self::without)
/// return a modified copy whose age is one higher.
#[derive(Debug, Clone)]
pub struct DefaultKeyedObject {
    isa: String,
    global_id: Option<GlobalId>,
    age: u64,
    fields: IndexMap<String, Field>,
}

impl DefaultKeyedObject {
    /// Wraps an object dictionary read from a file. A top-level object keeps
    /// its `isa` entry among the fields.
    pub fn from_wire(isa: &str, global_id: Option<GlobalId>, dict: Dictionary) -> DefaultKeyedObject {
        DefaultKeyedObject {
            isa: isa.to_owned(),
            global_id,
            age: 0,
            fields: dict
                .into_iter()
                .map(|(name, wire)| (name, Field::Wire(wire)))
                .collect(),
        }
    }

    /// Builder for a graph object of type `isa`.
    pub fn builder(isa: &str) -> DefaultKeyedObjectBuilder {
        let mut builder = DefaultKeyedObjectBuilder::new(isa);
        builder.put(CodingKey::ISA, Value::String(isa.to_owned()));
        builder
    }

    /// Builder for an object nested inline in another, which has no `isa`.
    pub fn nested(family: &str) -> DefaultKeyedObjectBuilder {
        DefaultKeyedObjectBuilder::new(family)
    }

    /// Copy with `key` set to `value`.
    pub fn with<K: Into<CodingKey>, V: Into<Value>>(&self, key: K, value: V) -> DefaultKeyedObject {
        let key = key.into();
        let mut copy = self.next_age();
        copy.fields
            .insert(key.name().to_owned(), Field::Value(key, value.into()));
        copy
    }

    /// Copy with `key` removed.
    pub fn without<K: Into<CodingKey>>(&self, key: K) -> DefaultKeyedObject {
        let mut copy = self.next_age();
        copy.fields.shift_remove(key.into().name());
        copy
    }

    pub fn with_global_id<G: Into<GlobalId>>(mut self, global_id: G) -> DefaultKeyedObject {
        self.global_id = Some(global_id.into());
        self
    }

    fn next_age(&self) -> DefaultKeyedObject {
        DefaultKeyedObject {
            isa: self.isa.clone(),
            global_id: self.global_id.clone(),
            age: self.age + 1,
            fields: self.fields.clone(),
        }
    }

    pub fn contains<K: Into<CodingKey>>(&self, key: K) -> bool {
        self.fields.contains_key(key.into().name())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field as a plain string, whether read from a file or set in memory.
    pub fn raw_str(&self, name: &str) -> Option<&str> {
        match self.fields.get(name)? {
            Field::Wire(PlistValue::String(s)) => Some(s),
            Field::Value(_, Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

/// Field-for-field equality; age is ignored.
impl PartialEq for DefaultKeyedObject {
    fn eq(&self, other: &Self) -> bool {
        self.isa == other.isa && self.global_id == other.global_id && self.fields == other.fields
    }
}

impl KeyedObject for DefaultKeyedObject {
    fn isa(&self) -> &str {
        &self.isa
    }

    fn global_id(&self) -> Option<&GlobalId> {
        self.global_id.as_ref()
    }

    fn age(&self) -> u64 {
        self.age
    }

    fn try_decode(&self, key: CodingKey, context: &DecodeContext) -> Result<Option<Value>, Error> {
        match self.fields.get(key.name()) {
            None => Ok(None),
            Some(Field::Value(_, value)) => Ok(Some(value.clone())),
            Some(Field::Wire(wire)) => {
                trace!(isa = %self.isa, key = %key, "decoding field");
                let coder = context.coder(key)?;
                coder
                    .decode(wire, context)
                    .map(Some)
                    .map_err(|e| e.with_field(key.family(), key.name()))
            }
        }
    }

    fn encode(&self, context: &mut EncodeContext) -> Result<(), Error> {
        for (name, field) in &self.fields {
            match field {
                Field::Wire(wire) => context.encode_raw(name, wire.clone()),
                Field::Value(key, value) => context.try_encode(*key, value)?,
            }
        }
        Ok(())
    }

    fn unknown_fields(&self, known: &[CodingKey]) -> Vec<(String, PlistValue)> {
        self.fields
            .iter()
            .filter(|(name, _)| !known.iter().any(|key| key.name() == name.as_str()))
            .filter_map(|(name, field)| match field {
                Field::Wire(wire) => Some((name.clone(), wire.clone())),
                Field::Value(..) => None,
            })
            .collect()
    }

    fn base(&self) -> &DefaultKeyedObject {
        self
    }
}

/// Collects the fields of a new object and checks the required ones.
#[derive(Debug, Clone)]
pub struct DefaultKeyedObjectBuilder {
    isa: String,
    global_id: Option<GlobalId>,
    fields: IndexMap<String, Field>,
    required: Vec<CodingKey>,
    lenient: bool,
}

impl DefaultKeyedObjectBuilder {
    fn new(isa: &str) -> DefaultKeyedObjectBuilder {
        DefaultKeyedObjectBuilder {
            isa: isa.to_owned(),
            global_id: None,
            fields: IndexMap::new(),
            required: Vec::new(),
            lenient: false,
        }
    }

    pub fn global_id<G: Into<GlobalId>>(&mut self, global_id: G) -> &mut Self {
        self.global_id = Some(global_id.into());
        self
    }

    pub fn put<K: Into<CodingKey>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.into();
        self.fields
            .insert(key.name().to_owned(), Field::Value(key, value.into()));
        self
    }

    /// Sets `key` only when it has no value yet.
    pub fn put_if_absent<K: Into<CodingKey>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.into();
        if !self.fields.contains_key(key.name()) {
            self.put(key, value);
        }
        self
    }

    /// Appends to the list stored under `key`, creating it when absent.
    pub fn add<K: Into<CodingKey>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.into();
        let entry = self
            .fields
            .entry(key.name().to_owned())
            .or_insert_with(|| Field::Value(key, Value::List(Vec::new())));
        match entry {
            Field::Value(_, Value::List(values)) => values.push(value.into()),
            other => *other = Field::Value(key, Value::List(vec![value.into()])),
        }
        self
    }

    pub fn contains<K: Into<CodingKey>>(&self, key: K) -> bool {
        self.fields.contains_key(key.into().name())
    }

    /// Marks `key` as required for [`build`](Self::build) to succeed.
    pub fn requires<K: Into<CodingKey>>(&mut self, key: K) -> &mut Self {
        self.required.push(key.into());
        self
    }

    /// Skips required-key validation.
    pub fn lenient(&mut self) -> &mut Self {
        self.lenient = true;
        self
    }

    pub fn build(&self) -> Result<DefaultKeyedObject, Error> {
        if !self.lenient {
            if let Some(missing) = self
                .required
                .iter()
                .find(|key| !self.fields.contains_key(key.name()))
            {
                return Err(Error::invalid_object(format!(
                    "{} requires `{}`",
                    self.isa,
                    missing.name()
                )));
            }
        }
        Ok(self.finish())
    }

    /// Builds without checking required keys.
    pub fn finish(&self) -> DefaultKeyedObject {
        DefaultKeyedObject {
            isa: self.isa.clone(),
            global_id: self.global_id.clone(),
            age: 0,
            fields: self.fields.clone(),
        }
    }
}
