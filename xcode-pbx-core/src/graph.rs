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

//! The object graph: an arena of keyed objects indexed by global ID.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::trace;

use crate::codeable::{FromValue, PBXProject};
use crate::coder::Value;
use crate::error::Error;
use crate::object::{CachingKeyedObject, DefaultKeyedObject, KeyedObject, RecodeableKeyedObject};
use crate::plist::Dictionary;
use crate::resolver::coder_resolver::CodingKeyCoders;
use crate::types::{GlobalId, ObjectId};

/// Every object of one project file.
///
/// Objects live in a flat arena and refer to each other by [`ObjectId`], so
/// reference cycles are plain data. Global IDs map to arena slots; an object
/// built in memory has no global ID until it is written.
///
/// The graph uses single-threaded interior mutability for its decode caches
/// and is neither `Send` nor `Sync`.
pub struct ProjectGraph {
    objects: Vec<Rc<dyn KeyedObject>>,
    index: HashMap<GlobalId, ObjectId>,
    root: Option<ObjectId>,
    archive_version: Option<String>,
    object_version: Option<String>,
    classes: Dictionary,
    coders: Arc<CodingKeyCoders>,
}

impl Default for ProjectGraph {
    fn default() -> Self {
        ProjectGraph::with_coders(CodingKeyCoders::shared())
    }
}

impl ProjectGraph {
    pub fn new() -> ProjectGraph {
        ProjectGraph::default()
    }

    /// An empty graph decoding through a custom coder registry.
    pub fn with_coders(coders: Arc<CodingKeyCoders>) -> ProjectGraph {
        ProjectGraph {
            objects: Vec::new(),
            index: HashMap::new(),
            root: None,
            archive_version: None,
            object_version: None,
            classes: Dictionary::new(),
            coders,
        }
    }

    #[inline(always)]
    pub fn coders(&self) -> &CodingKeyCoders {
        &self.coders
    }

    /// Adds an object, wrapped so that it decodes through a cache and writes
    /// only the keys of its isa.
    pub fn add(&mut self, object: DefaultKeyedObject) -> Result<ObjectId, Error> {
        let known = self.coders.known_keys(object.isa());
        let object = CachingKeyedObject::new(RecodeableKeyedObject::new(object, known));
        self.add_keyed(Rc::new(object))
    }

    /// Adds an object as is; fails when its global ID is already taken.
    pub fn add_keyed(&mut self, object: Rc<dyn KeyedObject>) -> Result<ObjectId, Error> {
        let id = ObjectId(self.objects.len());
        if let Some(global_id) = object.global_id() {
            if self.index.contains_key(global_id) {
                return Err(Error::invalid_object(format!(
                    "duplicate global ID '{global_id}'"
                )));
            }
            self.index.insert(global_id.clone(), id);
        }
        trace!(object = %id, isa = object.isa(), "added object");
        self.objects.push(object);
        Ok(id)
    }

    /// Replaces the object at `id` with a modified copy, typically made with
    /// [`DefaultKeyedObject::with`]. The slot keeps its global ID.
    pub fn replace(&mut self, id: ObjectId, object: DefaultKeyedObject) -> Result<(), Error> {
        let current = self.object(id)?;
        let object = match current.global_id() {
            Some(global_id) => object.with_global_id(global_id.clone()),
            None => object,
        };
        let known = self.coders.known_keys(object.isa());
        self.objects[id.0] = Rc::new(CachingKeyedObject::new(RecodeableKeyedObject::new(
            object, known,
        )));
        trace!(object = %id, "replaced object");
        Ok(())
    }

    /// Arena slot of the object with `global_id`.
    pub fn resolve(&self, global_id: &str) -> Result<ObjectId, Error> {
        self.index
            .get(global_id)
            .copied()
            .ok_or_else(|| Error::referential_integrity(global_id.to_owned()))
    }

    pub fn object(&self, id: ObjectId) -> Result<&Rc<dyn KeyedObject>, Error> {
        self.objects
            .get(id.0)
            .ok_or_else(|| Error::referential_integrity(id.to_string()))
    }

    /// Typed view of the object at `id`.
    pub fn get<'g, T: FromValue<'g>>(&'g self, id: ObjectId) -> Result<T, Error> {
        T::from_value(Value::Reference(id), self)
    }

    /// Typed view of the object with `global_id`.
    pub fn get_by_global_id<'g, T: FromValue<'g>>(&'g self, global_id: &str) -> Result<T, Error> {
        self.get(self.resolve(global_id)?)
    }

    pub fn root(&self) -> Option<ObjectId> {
        self.root
    }

    pub fn set_root(&mut self, id: ObjectId) -> Result<(), Error> {
        self.object(id)?;
        self.root = Some(id);
        Ok(())
    }

    /// The root `PBXProject`.
    pub fn root_project(&self) -> Result<PBXProject<'_>, Error> {
        match self.root {
            Some(id) => self.get(id),
            None => Err(Error::malformed_project("graph has no root object")),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Rc<dyn KeyedObject>)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    /// Objects of type `isa`, in arena order.
    pub fn by_isa<'a>(&'a self, isa: &'a str) -> impl Iterator<Item = ObjectId> + 'a {
        self.iter()
            .filter(move |(_, object)| object.isa() == isa)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn archive_version(&self) -> Option<&str> {
        self.archive_version.as_deref()
    }

    pub fn set_archive_version<S: Into<String>>(&mut self, version: S) {
        self.archive_version = Some(version.into());
    }

    pub fn object_version(&self) -> Option<&str> {
        self.object_version.as_deref()
    }

    pub fn set_object_version<S: Into<String>>(&mut self, version: S) {
        self.object_version = Some(version.into());
    }

    /// The top-level `classes` dictionary, empty in every file Xcode writes.
    pub fn classes(&self) -> &Dictionary {
        &self.classes
    }

    pub fn set_classes(&mut self, classes: Dictionary) {
        self.classes = classes;
    }
}

/// Graphs are equal when they hold field-for-field equal objects under the
/// same global IDs and agree on the root. Objects without a global ID are
/// compared by arena position.
impl PartialEq for ProjectGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let root_id = |graph: &ProjectGraph| {
            graph
                .root
                .and_then(|id| graph.objects.get(id.0))
                .and_then(|object| object.global_id().cloned())
        };
        if root_id(self) != root_id(other) {
            return false;
        }
        self.iter().all(|(id, object)| {
            let counterpart = match object.global_id() {
                Some(global_id) => other.index.get(global_id).map(|id| &other.objects[id.0]),
                None => other.objects.get(id.0),
            };
            counterpart.is_some_and(|counterpart| counterpart.base() == object.base())
        })
    }
}

impl fmt::Debug for ProjectGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectGraph")
            .field("objects", &self.objects.len())
            .field("root", &self.root)
            .field("archive_version", &self.archive_version)
            .field("object_version", &self.object_version)
            .finish()
    }
}
