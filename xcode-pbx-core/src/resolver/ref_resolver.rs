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

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::Error;
use crate::graph::ProjectGraph;
use crate::types::{GlobalId, ObjectId};
use crate::util::murmurhash3_x64_128;

const GLOBAL_ID_SEED: u64 = 47;

/// Wire fields tried, in order, for a stable per-object hash input.
const HINT_FIELDS: &[&str] = &["name", "path", "remoteGlobalIDString", "repositoryURL"];

/// Allocates global IDs for objects built in memory.
///
/// IDs are 24 uppercase hex digits derived from a 128-bit hash of the
/// object's isa, a stable hint and a counter, so writing the same graph twice
/// yields the same IDs. An allocated ID never collides with one already in
/// the graph or allocated earlier.
///
/// ```rust
/// use xcode_pbx_core::graph::ProjectGraph;
/// use xcode_pbx_core::resolver::ref_resolver::GlobalIdResolver;
///
/// let graph = ProjectGraph::new();
/// let mut ids = GlobalIdResolver::new(&graph);
/// let a = ids.allocate("PBXGroup", "Sources");
/// let b = ids.allocate("PBXGroup", "Sources");
/// assert_eq!(a.as_str().len(), 24);
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Default)]
pub struct GlobalIdResolver {
    assigned: HashMap<ObjectId, GlobalId>,
    taken: HashSet<GlobalId>,
    counter: u64,
}

impl GlobalIdResolver {
    pub fn new(graph: &ProjectGraph) -> GlobalIdResolver {
        let taken = graph
            .iter()
            .filter_map(|(_, object)| object.global_id().cloned())
            .collect();
        GlobalIdResolver {
            assigned: HashMap::new(),
            taken,
            counter: 0,
        }
    }

    /// Global ID of the object at `id`: its own when it has one, otherwise
    /// one allocated on first request and reused afterwards.
    pub fn global_id_of(&mut self, graph: &ProjectGraph, id: ObjectId) -> Result<GlobalId, Error> {
        let object = graph.object(id)?;
        if let Some(global_id) = object.global_id() {
            return Ok(global_id.clone());
        }
        if let Some(global_id) = self.assigned.get(&id) {
            return Ok(global_id.clone());
        }
        let base = object.base();
        let hint = HINT_FIELDS
            .iter()
            .find_map(|name| base.raw_str(name))
            .unwrap_or_default()
            .to_owned();
        let global_id = self.allocate(object.isa(), &hint);
        trace!(object = %id, global_id = %global_id, "allocated global ID");
        self.assigned.insert(id, global_id.clone());
        Ok(global_id)
    }

    pub fn allocate(&mut self, isa: &str, hint: &str) -> GlobalId {
        loop {
            self.counter += 1;
            let seed = format!("{isa}\0{hint}\0{}", self.counter);
            let (h1, h2) = murmurhash3_x64_128(seed.as_bytes(), GLOBAL_ID_SEED);
            let global_id = GlobalId::new(format!("{h1:016X}{:08X}", h2 >> 32));
            if self.taken.insert(global_id.clone()) {
                return global_id;
            }
        }
    }
}
