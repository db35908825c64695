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

//! Global ID resolution, cycles and graph queries.

use xcode_pbx::{
    Codeable, DefaultKeyedObject, Error, KeyedObject, PBXContainerItemProxy, PBXGroup,
    PBXNativeTarget, PBXObject, PBXTargetDependency, ProjectCodec, ProjectGraph,
};
use xcode_pbx_core::codeable::keys::PBXGroupKey;

const CYCLIC: &str = "
objects = {
    P = { isa = PBXProject; mainGroup = G; targets = (T); };
    G = { isa = PBXGroup; children = (); sourceTree = \"<group>\"; };
    T = { isa = PBXNativeTarget; name = App; dependencies = (D); buildPhases = (); };
    D = { isa = PBXTargetDependency; target = T; targetProxy = X; };
    X = { isa = PBXContainerItemProxy; containerPortal = P; proxyType = 1; remoteGlobalIDString = T; remoteInfo = App; };
};
rootObject = P;
";

#[test]
fn test_present_ids_resolve() {
    let graph = ProjectCodec::default().read_str(CYCLIC).unwrap();
    for global_id in ["P", "G", "T", "D", "X"] {
        let id = graph.resolve(global_id).unwrap();
        let object = graph.object(id).unwrap();
        assert_eq!(object.global_id().unwrap().as_str(), global_id);
    }
}

#[test]
fn test_absent_ids_fail_deterministically() {
    let graph = ProjectCodec::default().read_str(CYCLIC).unwrap();
    for _ in 0..3 {
        match graph.resolve("MISSING") {
            Err(Error::ReferentialIntegrity(global_id)) => assert_eq!(global_id, "MISSING"),
            other => panic!("expected referential integrity error, got {other:?}"),
        }
    }
    // Global IDs are compared exactly.
    assert!(graph.resolve("p").is_err());
    assert!(graph.resolve(" P").is_err());
}

#[test]
fn test_cycle_through_dependency_and_proxy() {
    let graph = ProjectCodec::default().read_str(CYCLIC).unwrap();
    let target: PBXNativeTarget = graph.get_by_global_id("T").unwrap();

    let dependencies = target.dependencies().unwrap();
    assert_eq!(dependencies.len(), 1);
    let dependency: &PBXTargetDependency = &dependencies[0];
    let back = dependency.target().unwrap().unwrap();
    assert_eq!(back.id(), target.id());
    assert_eq!(back.name().unwrap().as_deref(), Some("App"));

    let proxy: PBXContainerItemProxy = dependency.target_proxy().unwrap().unwrap();
    match proxy.container_portal().unwrap().unwrap() {
        PBXObject::Project(project) => assert_eq!(project.id(), graph.root()),
        other => panic!("unexpected portal {other}"),
    }
    assert_eq!(
        proxy.remote_global_id_string().unwrap().as_deref(),
        Some("T")
    );
}

#[test]
fn test_dangling_reference_fails_lazily() {
    let graph = ProjectCodec::default()
        .read_str(
            "objects = {
                1 = { isa = PBXProject; mainGroup = 404; targets = (); };
            };
            rootObject = 1;",
        )
        .unwrap();
    let project = graph.root_project().unwrap();
    assert!(project.targets().unwrap().is_empty());
    assert!(matches!(
        project.main_group(),
        Err(Error::ReferentialIntegrity(_))
    ));
    assert!(matches!(
        xcode_pbx::to_string(&graph),
        Err(Error::ReferentialIntegrity(_))
    ));
}

#[test]
fn test_queries() {
    let graph = ProjectCodec::default().read_str(CYCLIC).unwrap();
    assert_eq!(graph.len(), 5);
    assert!(!graph.is_empty());
    assert_eq!(graph.by_isa(PBXGroup::ISA).count(), 1);
    assert_eq!(graph.by_isa("PBXBuildRule").count(), 0);
    assert_eq!(graph.iter().count(), graph.len());
}

#[test]
fn test_replace_keeps_global_id() {
    let mut graph = ProjectCodec::default().read_str(CYCLIC).unwrap();
    let id = graph.resolve("G").unwrap();
    let renamed = graph.object(id).unwrap().base().with(PBXGroupKey::Name, "Sources");
    assert!(renamed.age() > graph.object(id).unwrap().age());
    graph.replace(id, renamed).unwrap();

    let group: PBXGroup = graph.get(id).unwrap();
    assert_eq!(group.global_id().unwrap().as_str(), "G");
    assert_eq!(group.name().unwrap().as_deref(), Some("Sources"));
    assert_eq!(graph.resolve("G").unwrap(), id);
}

#[test]
fn test_duplicate_global_id_rejected() {
    let mut graph = ProjectGraph::new();
    let group = DefaultKeyedObject::builder(PBXGroup::ISA)
        .global_id("AAAA")
        .finish();
    graph.add(group.clone()).unwrap();
    assert!(matches!(graph.add(group), Err(Error::InvalidObject(_))));
}

#[test]
fn test_root_must_exist() {
    let result = ProjectCodec::default()
        .read_str("objects = { 1 = { isa = PBXProject; }; }; rootObject = 2;");
    assert!(matches!(result, Err(Error::ReferentialIntegrity(_))));
}
