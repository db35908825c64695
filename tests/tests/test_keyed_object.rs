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

//! Caching and re-encoding decorators over the plain field store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use xcode_pbx::{
    Codeable, CodingKeys, DefaultKeyedObject, Error, KeyedObject, PBXGroup, ProjectCodec,
    ProjectGraph, Value, ValueCoder,
};
use xcode_pbx_core::coder::{OBJECT_REF_LIST, SOURCE_TREE, STRING};
use xcode_pbx_core::object::{CachingKeyedObject, RecodeableKeyedObject};
use xcode_pbx_core::plist::PlistValue;
use xcode_pbx_core::resolver::coder_resolver::CodingKeyCoders;
use xcode_pbx_core::resolver::context::{DecodeContext, EncodeContext};
use xcode_pbx_core::resolver::ref_resolver::GlobalIdResolver;

/// Decodes strings and counts how often it was asked to.
#[derive(Debug, Default)]
struct CountingCoder {
    decodes: AtomicUsize,
}

impl CountingCoder {
    const fn new() -> CountingCoder {
        CountingCoder {
            decodes: AtomicUsize::new(0),
        }
    }

    fn decodes(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }
}

impl ValueCoder for CountingCoder {
    fn decode(&self, wire: &PlistValue, context: &DecodeContext) -> Result<Value, Error> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        STRING.decode(wire, context)
    }

    fn encode(&self, value: &Value, context: &mut EncodeContext) -> Result<PlistValue, Error> {
        STRING.encode(value, context)
    }
}

static COUNTED_NAME: CountingCoder = CountingCoder::new();
static COUNTED_PATH: CountingCoder = CountingCoder::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXGroup")]
enum CountedGroupKey {
    #[coding_key(coder = OBJECT_REF_LIST)]
    Children,
    #[coding_key(coder = COUNTED_NAME)]
    Name,
    #[coding_key(coder = COUNTED_PATH)]
    Path,
    #[coding_key(coder = SOURCE_TREE)]
    SourceTree,
}

const GROUPS: &str = "
objects = {
    P = { isa = PBXProject; mainGroup = G; targets = (); };
    G = { isa = PBXGroup; children = (); name = Sources; path = (broken); sourceTree = \"<group>\"; };
};
rootObject = P;
";

fn read_counted() -> ProjectGraph {
    let mut coders = CodingKeyCoders::with_defaults();
    coders.register::<CountedGroupKey>();
    ProjectCodec::default()
        .coders(Arc::new(coders))
        .read_str(GROUPS)
        .unwrap()
}

#[test]
fn test_derived_keys() {
    assert_eq!(CountedGroupKey::FAMILY, "PBXGroup");
    assert_eq!(CountedGroupKey::ISA, Some("PBXGroup"));
    let names: Vec<&str> = CountedGroupKey::KEYS.iter().map(|key| key.name()).collect();
    assert_eq!(names, ["isa", "children", "name", "path", "sourceTree"]);
    assert_eq!(CountedGroupKey::Name.coding_key().to_string(), "PBXGroup.name");
}

#[test]
fn test_cache_invokes_coder_once() {
    let graph = read_counted();
    let group: PBXGroup = graph.get_by_global_id("G").unwrap();

    let before = COUNTED_NAME.decodes();
    let first = group.name().unwrap();
    let second = group.name().unwrap();
    assert_eq!(first.as_deref(), Some("Sources"));
    assert_eq!(first, second);
    assert_eq!(COUNTED_NAME.decodes() - before, 1);

    // The plain store bypasses the cache and agrees with it.
    let plain = graph
        .object(group.id().unwrap())
        .unwrap()
        .base()
        .try_decode(CountedGroupKey::Name.coding_key(), &DecodeContext::new(&graph))
        .unwrap();
    assert_eq!(plain, Some(Value::String("Sources".to_owned())));
    assert_eq!(COUNTED_NAME.decodes() - before, 2);
}

#[test]
fn test_errors_are_not_cached() {
    let graph = read_counted();
    let group: PBXGroup = graph.get_by_global_id("G").unwrap();

    let before = COUNTED_PATH.decodes();
    for _ in 0..2 {
        assert!(matches!(group.path(), Err(Error::CoderMismatch(_))));
    }
    assert_eq!(COUNTED_PATH.decodes() - before, 2);
}

#[test]
fn test_absent_values_are_cached() {
    let graph = ProjectGraph::new();
    let object = CachingKeyedObject::new(DefaultKeyedObject::builder(PBXGroup::ISA).finish());
    let context = DecodeContext::new(&graph);
    let key = CountedGroupKey::Name.coding_key();
    assert_eq!(object.try_decode(key, &context).unwrap(), None);
    assert_eq!(object.try_decode(key, &context).unwrap(), None);
    assert_eq!(object.age(), 0);
}

#[test]
fn test_mismatch_names_the_field() {
    let graph = ProjectCodec::default().read_str(GROUPS).unwrap();
    let group: PBXGroup = graph.get_by_global_id("G").unwrap();
    let message = group.path().unwrap_err().to_string();
    assert!(message.contains("PBXGroup.path"), "{message}");
}

fn encode_one(graph: &ProjectGraph, object: &dyn KeyedObject, preserve: bool) -> Vec<String> {
    let mut ids = GlobalIdResolver::new(graph);
    let mut context = EncodeContext::new(graph, &mut ids, preserve);
    object.encode(&mut context).unwrap();
    context.into_output().keys().cloned().collect()
}

#[test]
fn test_recodeable_writes_known_keys_then_unknown() {
    let graph = ProjectCodec::default()
        .read_str(
            "objects = {
                P = { isa = PBXProject; targets = (); };
                G = { isa = PBXGroup; indentWidth = 2; children = (); name = Sources; };
            };
            rootObject = P;",
        )
        .unwrap();
    let id = graph.resolve("G").unwrap();
    let stored = graph.object(id).unwrap().base().clone();
    let recodeable = RecodeableKeyedObject::new(
        stored.clone(),
        graph.coders().known_keys(PBXGroup::ISA),
    );

    assert_eq!(
        encode_one(&graph, &recodeable, true),
        ["isa", "children", "name", "indentWidth"]
    );
    assert_eq!(
        encode_one(&graph, &recodeable, false),
        ["isa", "children", "name"]
    );
    // The plain store writes every field in its original order.
    assert_eq!(
        encode_one(&graph, &stored, false),
        ["isa", "indentWidth", "children", "name"]
    );
}

#[test]
fn test_with_and_without_bump_age() {
    let group = DefaultKeyedObject::builder(PBXGroup::ISA).finish();
    let named = group.with(CountedGroupKey::Name, "Sources");
    assert_eq!(named.age(), group.age() + 1);
    assert!(named.contains(CountedGroupKey::Name));

    let unnamed = named.without(CountedGroupKey::Name);
    assert_eq!(unnamed.age(), named.age() + 1);
    assert!(!unnamed.contains(CountedGroupKey::Name));
    assert_eq!(unnamed, group);
}
