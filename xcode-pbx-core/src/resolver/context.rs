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

use tracing::trace;

use crate::coder::{Value, ValueCoder};
use crate::error::Error;
use crate::graph::ProjectGraph;
use crate::key::CodingKey;
use crate::plist::{Dictionary, PlistValue};
use crate::resolver::ref_resolver::GlobalIdResolver;
use crate::types::{GlobalId, ObjectId};
use crate::util::ENABLE_PBX_DEBUG_OUTPUT;

/// Everything a coder needs to decode a field: the graph references resolve
/// against and, through it, the coder registry.
#[derive(Clone, Copy)]
pub struct DecodeContext<'g> {
    graph: &'g ProjectGraph,
}

impl<'g> DecodeContext<'g> {
    pub fn new(graph: &'g ProjectGraph) -> DecodeContext<'g> {
        DecodeContext { graph }
    }

    #[inline(always)]
    pub fn graph(&self) -> &'g ProjectGraph {
        self.graph
    }

    pub fn coder(&self, key: CodingKey) -> Result<&'static dyn ValueCoder, Error> {
        self.graph.coders().get(key)
    }

    pub fn resolve(&self, global_id: &str) -> Result<ObjectId, Error> {
        self.graph.resolve(global_id)
    }
}

/// Accumulates the wire dictionary of one object being written.
pub struct EncodeContext<'a> {
    graph: &'a ProjectGraph,
    ids: &'a mut GlobalIdResolver,
    output: Dictionary,
    preserve_unknown_keys: bool,
}

impl<'a> EncodeContext<'a> {
    pub fn new(
        graph: &'a ProjectGraph,
        ids: &'a mut GlobalIdResolver,
        preserve_unknown_keys: bool,
    ) -> EncodeContext<'a> {
        EncodeContext {
            graph,
            ids,
            output: Dictionary::new(),
            preserve_unknown_keys,
        }
    }

    /// Context for an object nested inside the current one.
    pub fn child(&mut self) -> EncodeContext<'_> {
        EncodeContext {
            graph: self.graph,
            ids: &mut *self.ids,
            output: Dictionary::new(),
            preserve_unknown_keys: self.preserve_unknown_keys,
        }
    }

    pub fn decoder(&self) -> DecodeContext<'a> {
        DecodeContext::new(self.graph)
    }

    /// Encodes `value` with the coder registered for `key` and stores it
    /// under the key's wire name.
    pub fn try_encode(&mut self, key: CodingKey, value: &Value) -> Result<(), Error> {
        let coder = self.graph.coders().get(key)?;
        let wire = coder
            .encode(value, self)
            .map_err(|e| e.with_field(key.family(), key.name()))?;
        if ENABLE_PBX_DEBUG_OUTPUT {
            trace!(key = %key, wire = wire.kind(), "encoded field");
        }
        self.output.insert(key.name().to_owned(), wire);
        Ok(())
    }

    /// Stores a field that is already in wire form.
    pub fn encode_raw(&mut self, name: &str, wire: PlistValue) {
        self.output.insert(name.to_owned(), wire);
    }

    /// Global ID of the object at `id`, allocating one for objects built in
    /// memory.
    pub fn global_id_of(&mut self, id: ObjectId) -> Result<GlobalId, Error> {
        self.ids.global_id_of(self.graph, id)
    }

    #[inline(always)]
    pub fn is_preserve_unknown_keys(&self) -> bool {
        self.preserve_unknown_keys
    }

    pub fn output(&self) -> &Dictionary {
        &self.output
    }

    pub fn into_output(self) -> Dictionary {
        self.output
    }
}
