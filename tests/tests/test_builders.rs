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

//! Builders: required keys, defaults and the construction invariant.

use xcode_pbx::{
    BuildSettings, Codeable, Error, KeyedObject, PBXBuildFile, PBXFileReference, PBXGroup,
    PBXNativeTarget, PBXProject, PBXShellScriptBuildPhase, PBXCopyFilesBuildPhase,
    ProductType, ProjectGraph, SourceTree, SubFolder, VersionRequirement,
    XCBuildConfiguration, XCConfigurationList, XCRemoteSwiftPackageReference,
    XCSwiftPackageProductDependency,
};
use xcode_pbx_core::resolver::context::EncodeContext;
use xcode_pbx_core::resolver::ref_resolver::GlobalIdResolver;

fn encoded_keys(graph: &ProjectGraph, object: &dyn KeyedObject) -> Vec<String> {
    let mut ids = GlobalIdResolver::new(graph);
    let mut context = EncodeContext::new(graph, &mut ids, true);
    object.encode(&mut context).unwrap();
    let mut keys: Vec<String> = context.into_output().keys().cloned().collect();
    keys.sort();
    keys
}

#[test]
fn test_fresh_object_encodes_isa_and_set_keys() {
    let mut graph = ProjectGraph::new();
    let id = PBXGroup::builder()
        .name("Sources")
        .source_tree(SourceTree::Group)
        .add_to(&mut graph)
        .unwrap();
    let object = graph.object(id).unwrap();
    assert_eq!(encoded_keys(&graph, object.as_ref()), ["isa", "name", "sourceTree"]);

    let group: PBXGroup = graph.get(id).unwrap();
    assert!(group.path().unwrap().is_none());
    assert!(group.children().unwrap().is_empty());
    assert!(group.global_id().is_none());
}

#[test]
fn test_required_keys() {
    match PBXFileReference::builder().name("main.m").build() {
        Err(Error::InvalidObject(message)) => assert!(message.contains("`path`"), "{message}"),
        other => panic!("expected invalid object, got {other:?}"),
    }
    assert!(PBXFileReference::builder().name("main.m").lenient().build().is_ok());
    assert!(PBXNativeTarget::builder().build().is_err());
    assert!(XCBuildConfiguration::builder().build().is_err());
    assert!(PBXCopyFilesBuildPhase::builder().build().is_err());
    assert!(PBXShellScriptBuildPhase::builder().build().is_err());
    assert!(XCRemoteSwiftPackageReference::builder().build().is_err());
    assert!(XCSwiftPackageProductDependency::builder().build().is_err());
}

#[test]
fn test_file_reference_defaults() {
    let mut graph = ProjectGraph::new();
    let source = PBXFileReference::builder()
        .path("Sources/AppDelegate.m")
        .add_to(&mut graph)
        .unwrap();
    let product = PBXFileReference::builder()
        .path("App.app")
        .source_tree(SourceTree::BuiltProductsDir)
        .add_to(&mut graph)
        .unwrap();
    let typed = PBXFileReference::builder()
        .path("notes.txt")
        .last_known_file_type("text.plain")
        .add_to(&mut graph)
        .unwrap();
    let storyboard = PBXFileReference::builder()
        .path("Main.storyboard")
        .add_to(&mut graph)
        .unwrap();
    let unknown = PBXFileReference::builder()
        .path("data.unknownext")
        .add_to(&mut graph)
        .unwrap();

    let source: PBXFileReference = graph.get(source).unwrap();
    assert_eq!(source.source_tree().unwrap(), Some(SourceTree::Group));
    assert_eq!(source.last_known_file_type().unwrap().as_deref(), Some("sourcecode.c.objc"));
    assert!(source.explicit_file_type().unwrap().is_none());

    let product: PBXFileReference = graph.get(product).unwrap();
    assert_eq!(product.source_tree().unwrap(), Some(SourceTree::BuiltProductsDir));
    assert_eq!(product.explicit_file_type().unwrap().as_deref(), Some("wrapper.application"));
    assert!(product.last_known_file_type().unwrap().is_none());

    let typed: PBXFileReference = graph.get(typed).unwrap();
    assert_eq!(typed.file_type().unwrap().as_deref(), Some("text.plain"));

    let storyboard: PBXFileReference = graph.get(storyboard).unwrap();
    assert_eq!(
        storyboard.last_known_file_type().unwrap().as_deref(),
        Some("file.storyboard")
    );

    let unknown: PBXFileReference = graph.get(unknown).unwrap();
    assert!(unknown.file_type().unwrap().is_none());
}

#[test]
fn test_shell_script_defaults() {
    let mut graph = ProjectGraph::new();
    let id = PBXShellScriptBuildPhase::builder()
        .name("Lint")
        .shell_script("swiftlint\n")
        .add_to(&mut graph)
        .unwrap();
    let phase: PBXShellScriptBuildPhase = graph.get(id).unwrap();
    assert_eq!(phase.shell_path().unwrap().as_deref(), Some("/bin/sh"));
    assert_eq!(phase.shell_script().unwrap().as_deref(), Some("swiftlint\n"));
    assert!(phase.input_paths().unwrap().is_empty());
    assert!(!phase.show_env_vars_in_log().unwrap());
    assert!(phase.files().unwrap().is_empty());
}

#[test]
fn test_project_synthesizes_main_group() {
    let mut graph = ProjectGraph::new();
    let id = PBXProject::builder()
        .compatibility_version("Xcode 14.0")
        .add_to(&mut graph)
        .unwrap();
    assert_eq!(graph.root(), Some(id));
    assert_eq!(graph.len(), 2);

    let project = graph.root_project().unwrap();
    let main_group = project.main_group().unwrap().unwrap();
    assert!(main_group.children().unwrap().is_empty());
    assert_eq!(main_group.source_tree().unwrap(), Some(SourceTree::Group));

    let second = PBXProject::builder().add_to(&mut graph).unwrap();
    assert_ne!(second, id);
    assert_eq!(graph.root(), Some(id));
}

#[test]
fn test_full_target_wiring() {
    let mut graph = ProjectGraph::new();
    let file = PBXFileReference::builder().path("main.m").add_to(&mut graph).unwrap();
    let build_file = PBXBuildFile::builder().file_ref(file).add_to(&mut graph).unwrap();
    let phase = xcode_pbx::PBXSourcesBuildPhase::builder()
        .file(build_file)
        .add_to(&mut graph)
        .unwrap();
    let copy = PBXCopyFilesBuildPhase::builder()
        .dst_subfolder_spec(SubFolder::Frameworks)
        .add_to(&mut graph)
        .unwrap();
    let debug = XCBuildConfiguration::builder()
        .name("Debug")
        .build_settings(BuildSettings::new().with("PRODUCT_NAME", "App"))
        .add_to(&mut graph)
        .unwrap();
    let list = XCConfigurationList::builder()
        .build_configuration(debug)
        .default_configuration_name("Debug")
        .add_to(&mut graph)
        .unwrap();
    let package = XCRemoteSwiftPackageReference::builder()
        .repository_url("https://github.com/apple/swift-log")
        .requirement(VersionRequirement::up_to_next_major_version("1.5.0"))
        .add_to(&mut graph)
        .unwrap();
    let product = XCSwiftPackageProductDependency::builder()
        .product_name("Logging")
        .package(package)
        .add_to(&mut graph)
        .unwrap();
    let target = PBXNativeTarget::builder()
        .name("App")
        .product_type(ProductType::Application)
        .build_phase(phase)
        .build_phase(copy)
        .build_configuration_list(list)
        .package_product_dependency(product)
        .add_to(&mut graph)
        .unwrap();
    PBXProject::builder().target(target).add_to(&mut graph).unwrap();

    let project = graph.root_project().unwrap();
    let targets = project.targets().unwrap();
    assert_eq!(targets.len(), 1);
    let target = &targets[0];
    assert_eq!(target.name().unwrap().as_deref(), Some("App"));
    assert_eq!(target.product_type().unwrap(), Some(ProductType::Application));

    let phases = target.build_phases().unwrap();
    assert_eq!(phases.len(), 2);
    let files = phases[0].files().unwrap();
    assert_eq!(files.len(), 1);
    let file_ref = files[0].file_ref().unwrap().unwrap();
    assert_eq!(file_ref.path().unwrap().as_deref(), Some("main.m"));

    let list = target.build_configuration_list().unwrap().unwrap();
    let debug = list.configuration("Debug").unwrap().unwrap();
    assert_eq!(debug.build_settings().unwrap().get_str("PRODUCT_NAME"), Some("App"));
    assert!(list.configuration("Release").unwrap().is_none());

    let native: PBXNativeTarget = graph.get(target.id().unwrap()).unwrap();
    let products = native.package_product_dependencies().unwrap();
    let package = products[0].package().unwrap().unwrap();
    assert_eq!(
        package.requirement().unwrap().unwrap().to_string(),
        "require up to next major version from '1.5.0'"
    );
}
