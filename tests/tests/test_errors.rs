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

//! The three failure families and where each surfaces.

use xcode_pbx::{
    Error, PBXBuildFile, PBXFileReference, PBXGroup, PBXNativeTarget, PBXObject, ProjectCodec,
};

#[test]
fn test_missing_envelope_fields_are_malformed() {
    let codec = ProjectCodec::default();
    for input in [
        "rootObject = 1;",
        "objects = { 1 = { isa = PBXProject; }; };",
        "objects = (); rootObject = 1;",
        "objects = { 1 = { isa = PBXProject; }; }; rootObject = (1);",
        "objects = { 1 = { targets = (); }; }; rootObject = 1;",
        "( not, a, dictionary )",
        "objects = { 1 = { isa = PBXProject; } }; rootObject = 1;",
    ] {
        match codec.read_str(input) {
            Err(Error::MalformedProject(_)) => {}
            other => panic!("{input:?} read as {other:?}"),
        }
    }
}

#[test]
fn test_malformed_message_has_position() {
    let err = ProjectCodec::default()
        .read_str("{\n  objects = {\n    1 = { isa = PBXProject }\n  };\n}")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed project: expected ';' at line 3, column 28"
    );
}

#[test]
fn test_wrong_shape_is_coder_mismatch() {
    let graph = ProjectCodec::default()
        .read_str(
            "objects = {
                P = { isa = PBXProject; targets = T; };
                T = { isa = PBXNativeTarget; name = (App); productType = (); buildPhases = (G); };
                G = { isa = PBXGroup; children = (); };
                B = { isa = PBXBuildFile; fileRef = T; settings = flat; };
            };
            rootObject = P;",
        )
        .unwrap();

    let project = graph.root_project().unwrap();
    assert!(matches!(project.targets(), Err(Error::CoderMismatch(_))));

    let target: PBXNativeTarget = graph.get_by_global_id("T").unwrap();
    assert!(matches!(target.name(), Err(Error::CoderMismatch(_))));
    assert!(matches!(target.product_type(), Err(Error::CoderMismatch(_))));
    // A group listed as a build phase has the wrong isa for the sum type.
    assert!(matches!(target.build_phases(), Err(Error::CoderMismatch(_))));

    let build_file: PBXBuildFile = graph.get_by_global_id("B").unwrap();
    assert!(matches!(build_file.settings(), Err(Error::CoderMismatch(_))));
    assert!(matches!(build_file.file_ref(), Err(Error::CoderMismatch(_))));

    // Asking for the wrong adapter type is a mismatch as well.
    assert!(matches!(
        graph.get_by_global_id::<PBXFileReference>("G"),
        Err(Error::CoderMismatch(_))
    ));
    assert!(graph.get_by_global_id::<PBXGroup>("G").is_ok());
}

#[test]
fn test_unknown_isa_is_kept_opaque() {
    let codec = ProjectCodec::default();
    let graph = codec
        .read_str(
            "objects = {
                P = { isa = PBXProject; targets = (); };
                R = { isa = PBXBuildRule; compilerSpec = com.apple.compilers.proxy.script; };
            };
            rootObject = P;",
        )
        .unwrap();
    assert!(matches!(
        graph.get_by_global_id::<PBXObject>("R"),
        Err(Error::CoderMismatch(_))
    ));
    let text = codec.write_string(&graph).unwrap();
    assert!(text.contains("compilerSpec = com.apple.compilers.proxy.script;"));
}

#[test]
fn test_absent_fields_are_not_errors() {
    let graph = ProjectCodec::default()
        .read_str("objects = { P = { isa = PBXProject; }; }; rootObject = P;")
        .unwrap();
    let project = graph.root_project().unwrap();
    assert!(project.main_group().unwrap().is_none());
    assert!(project.targets().unwrap().is_empty());
    assert!(project.known_regions().unwrap().is_empty());
    assert!(!project.has_scanned_for_encodings().unwrap());
    assert!(project.attributes().unwrap().is_none());
}

#[test]
fn test_root_must_be_a_project() {
    let codec = ProjectCodec::default();
    match codec.read_str("{ objects = { 1 = { isa = PBXGroup; children = (); }; }; rootObject = 1; }") {
        Err(Error::MalformedProject(message)) => {
            assert!(message.contains("PBXProject"), "{message}");
            assert!(message.contains("PBXGroup"), "{message}");
        }
        other => panic!("group root read as {other:?}"),
    }
    assert!(matches!(
        codec.read_str("{ objects = { 1 = { isa = PBXProject; }; }; rootObject = 2; }"),
        Err(Error::ReferentialIntegrity(_))
    ));
}

#[test]
fn test_deeply_nested_project_is_malformed() {
    let depth = 200_000;
    let input = format!(
        "objects = {{ 1 = {{ isa = PBXProject; targets = (); attributes = {{ deep = {}{}; }}; }}; }}; rootObject = 1;",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    assert!(matches!(
        ProjectCodec::default().read_str(&input),
        Err(Error::MalformedProject(_))
    ));
}
