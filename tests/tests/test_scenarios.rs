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

//! End-to-end reads of small documents.

use xcode_pbx::{
    Codeable, PBXBuildFile, PBXProject, PBXReference, ProjectCodec, VersionRequirement,
    XCRemoteSwiftPackageReference,
};

#[test]
fn test_read_minimal_project() {
    let graph = ProjectCodec::default()
        .read_str("objects={1={isa=PBXProject;targets=();};};rootObject=1")
        .unwrap();

    assert_eq!(graph.len(), 1);
    let project = graph.root_project().unwrap();
    assert_eq!(project.isa(), PBXProject::ISA);
    assert_eq!(project.global_id().unwrap().as_str(), "1");
    assert!(project.targets().unwrap().is_empty());
    assert!(project.main_group().unwrap().is_none());
}

#[test]
fn test_build_file_defaults_and_reference() {
    let graph = ProjectCodec::default()
        .read_str(
            "{
                objects = {
                    1 = { isa = PBXProject; targets = (); };
                    2 = { isa = PBXFileReference; path = main.m; sourceTree = \"<group>\"; };
                    3 = { isa = PBXBuildFile; fileRef = 2; };
                };
                rootObject = 1;
            }",
        )
        .unwrap();

    let build_file: PBXBuildFile = graph.get_by_global_id("3").unwrap();
    assert!(build_file.settings().unwrap().is_empty());
    assert!(build_file.product_ref().unwrap().is_none());

    let file_ref = build_file.file_ref().unwrap().unwrap();
    assert_eq!(file_ref.global_id().unwrap().as_str(), "2");
    assert_eq!(file_ref.id(), Some(graph.resolve("2").unwrap()));
    match file_ref {
        PBXReference::FileReference(file) => {
            assert_eq!(file.path().unwrap().as_deref(), Some("main.m"));
        }
        other => panic!("unexpected reference {other:?}"),
    }
}

#[test]
fn test_revision_requirement_display() {
    let graph = ProjectCodec::default()
        .read_str(
            "objects = {
                1 = { isa = PBXProject; packageReferences = (2); targets = (); };
                2 = {
                    isa = XCRemoteSwiftPackageReference;
                    repositoryURL = \"https://github.com/apple/swift-argument-parser\";
                    requirement = { kind = revision; revision = dab2835d2d5a33e4ef2bcb0dcf8a3ec8f1ebd5d1; };
                };
            };
            rootObject = 1;",
        )
        .unwrap();

    let packages = graph.root_project().unwrap().package_references().unwrap();
    assert_eq!(packages.len(), 1);
    let package: &XCRemoteSwiftPackageReference = &packages[0];
    let requirement = package.requirement().unwrap().unwrap();
    assert!(matches!(requirement, VersionRequirement::Revision(_)));
    assert_eq!(
        requirement.to_string(),
        "require revision 'dab2835d2d5a33e4ef2bcb0dcf8a3ec8f1ebd5d1'"
    );
}
