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

//! Read, write, read: the graph survives unchanged.

use pretty_assertions::assert_eq;
use xcode_pbx::{
    Codeable, PBXGroup, PBXNativeTarget, PBXProject, ProductType, ProjectCodec, ProjectGraph,
};

const APP: &str = include_str!("fixtures/App.pbxproj");

#[test]
fn test_fixture_round_trip() {
    let codec = ProjectCodec::default();
    let graph = codec.read_str(APP).unwrap();
    assert_eq!(graph.len(), 25);
    assert_eq!(graph.archive_version(), Some("1"));
    assert_eq!(graph.object_version(), Some("56"));

    let written = codec.write_string(&graph).unwrap();
    let reread = codec.read_str(&written).unwrap();
    assert!(graph == reread, "graphs differ after round trip");

    // Writing is idempotent.
    assert_eq!(codec.write_string(&reread).unwrap(), written);
}

#[test]
fn test_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.pbxproj");

    let graph = xcode_pbx::from_str(APP).unwrap();
    xcode_pbx::write(&graph, &path).unwrap();
    let reread = xcode_pbx::read(&path).unwrap();
    assert!(graph == reread);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("// !$*UTF8*$!\n{\n\tarchiveVersion = 1;\n"));
    assert!(text.contains("\"DEBUG=1\",\n"));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = xcode_pbx::read(dir.path().join("missing.pbxproj"));
    assert!(matches!(result, Err(xcode_pbx::Error::Io { .. })));
}

#[test]
fn test_unknown_keys() {
    let graph = xcode_pbx::from_str(APP).unwrap();
    let preserved = ProjectCodec::default().write_string(&graph).unwrap();
    assert!(preserved.contains("indentWidth = 4;"));

    let dropped = ProjectCodec::default()
        .preserve_unknown_keys(false)
        .write_string(&graph)
        .unwrap();
    assert!(!dropped.contains("indentWidth"));
    assert!(dropped.contains("sourceTree = \"<group>\";"));
}

#[test]
fn test_decoded_fixture() {
    let graph = xcode_pbx::from_str(APP).unwrap();
    let project: PBXProject = graph.root_project().unwrap();
    assert_eq!(project.compatibility_version().unwrap().as_deref(), Some("Xcode 14.0"));
    assert_eq!(project.known_regions().unwrap(), ["en", "Base"]);
    assert!(!project.has_scanned_for_encodings().unwrap());
    assert_eq!(project.project_dir_path().unwrap().as_deref(), Some(""));

    let main_group: PBXGroup = project.main_group().unwrap().unwrap();
    let names: Vec<Option<String>> = main_group
        .children()
        .unwrap()
        .iter()
        .map(|child| child.name().unwrap())
        .collect();
    assert_eq!(names, [None, Some("Products".to_owned())]);

    let targets = project.targets().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(
        targets[1].product_type().unwrap(),
        Some(ProductType::UnitTestBundle)
    );
    let app: PBXNativeTarget = graph.get(targets[0].id().unwrap()).unwrap();
    assert!(app.build_rules().unwrap().is_empty());
    assert_eq!(app.product_reference().unwrap().unwrap().path().unwrap().as_deref(), Some("App.app"));

    let tests = &targets[1];
    let dependencies = tests.dependencies().unwrap();
    let dependency = &dependencies[0];
    let proxy = dependency.target_proxy().unwrap().unwrap();
    assert_eq!(
        proxy.remote_global_id_string().unwrap(),
        app.global_id().map(|id| id.to_string())
    );
}

#[test]
fn test_built_graph_round_trip() {
    let build = || {
        let mut graph = ProjectGraph::new();
        let file = xcode_pbx::PBXFileReference::builder()
            .path("main.m")
            .add_to(&mut graph)
            .unwrap();
        let group = PBXGroup::builder()
            .name("Sources")
            .child(file)
            .add_to(&mut graph)
            .unwrap();
        PBXProject::builder()
            .main_group(group)
            .add_to(&mut graph)
            .unwrap();
        graph
    };

    let codec = ProjectCodec::default();
    let first = codec.write_string(&build()).unwrap();
    let second = codec.write_string(&build()).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("objectVersion = 46;"));

    let reread = codec.read_str(&first).unwrap();
    assert_eq!(reread.len(), 3);
    for (_, object) in reread.iter() {
        let global_id = object.global_id().unwrap().as_str();
        assert_eq!(global_id.len(), 24);
        assert!(global_id.bytes().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
    let project = reread.root_project().unwrap();
    let group = project.main_group().unwrap().unwrap();
    assert_eq!(group.name().unwrap().as_deref(), Some("Sources"));
    assert_eq!(group.children().unwrap().len(), 1);
}

#[test]
fn test_compact_output() {
    let graph = ProjectCodec::default()
        .read_str("objects = { 1 = { targets = (); isa = PBXProject; }; }; rootObject = 1;")
        .unwrap();
    let text = ProjectCodec::default()
        .pretty(false)
        .archive_version(1)
        .object_version(50)
        .write_string(&graph)
        .unwrap();
    assert_eq!(
        text,
        "// !$*UTF8*$!\n{ archiveVersion = 1; classes = {}; objectVersion = 50; objects = { 1 = { isa = PBXProject; targets = (); }; }; rootObject = 1; }\n"
    );
}
