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

//! Visitor dispatch over build phases and version requirements.

use xcode_pbx::{
    BuildPhaseVisitor, PBXCopyFilesBuildPhase, PBXFrameworksBuildPhase,
    PBXHeadersBuildPhase, PBXResourcesBuildPhase, PBXShellScriptBuildPhase,
    PBXSourcesBuildPhase, ProjectCodec, SubFolder, VersionRequirement,
    VersionRequirementBranch, VersionRequirementExact, VersionRequirementKind,
    VersionRequirementRange, VersionRequirementRevision,
    VersionRequirementUpToNextMajorVersion, VersionRequirementUpToNextMinorVersion,
    VersionRequirementVisitor, XCRemoteSwiftPackageReference,
};

const PHASES: &str = "
objects = {
    P = { isa = PBXProject; targets = (T); };
    T = { isa = PBXNativeTarget; name = App; buildPhases = (H, R, F, S, C, X); };
    H = { isa = PBXHeadersBuildPhase; files = (); };
    R = { isa = PBXResourcesBuildPhase; files = (); };
    F = { isa = PBXFrameworksBuildPhase; files = (); };
    S = { isa = PBXSourcesBuildPhase; buildActionMask = 2147483647; files = (); runOnlyForDeploymentPostprocessing = 0; };
    C = { isa = PBXCopyFilesBuildPhase; dstPath = \"\"; dstSubfolderSpec = 10; files = (); name = Embed; };
    X = { isa = PBXShellScriptBuildPhase; shellPath = /bin/sh; shellScript = \"make\"; };
};
rootObject = P;
";

/// Records which visit method ran.
#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
}

impl Recorder {
    fn record(&mut self, name: &'static str) -> &'static str {
        self.calls.push(name);
        name
    }
}

impl<'g> BuildPhaseVisitor<'g> for Recorder {
    type Output = &'static str;

    fn visit_headers(&mut self, _phase: &PBXHeadersBuildPhase<'g>) -> Self::Output {
        self.record("headers")
    }

    fn visit_resources(&mut self, _phase: &PBXResourcesBuildPhase<'g>) -> Self::Output {
        self.record("resources")
    }

    fn visit_frameworks(&mut self, _phase: &PBXFrameworksBuildPhase<'g>) -> Self::Output {
        self.record("frameworks")
    }

    fn visit_sources(&mut self, _phase: &PBXSourcesBuildPhase<'g>) -> Self::Output {
        self.record("sources")
    }

    fn visit_copy_files(&mut self, _phase: &PBXCopyFilesBuildPhase<'g>) -> Self::Output {
        self.record("copy files")
    }

    fn visit_shell_script(&mut self, _phase: &PBXShellScriptBuildPhase<'g>) -> Self::Output {
        self.record("shell script")
    }
}

#[test]
fn test_build_phase_dispatch() {
    let graph = ProjectCodec::default().read_str(PHASES).unwrap();
    let targets = graph.root_project().unwrap().targets().unwrap();
    let target = &targets[0];
    let phases = target.build_phases().unwrap();

    let mut recorder = Recorder::default();
    let outputs: Vec<&str> = phases.iter().map(|phase| phase.accept(&mut recorder)).collect();
    let expected = [
        "headers",
        "resources",
        "frameworks",
        "sources",
        "copy files",
        "shell script",
    ];
    assert_eq!(outputs, expected);
    assert_eq!(recorder.calls, expected);
}

/// Visitor returning data decoded from the visited phase.
struct DestinationOf;

impl<'g> BuildPhaseVisitor<'g> for DestinationOf {
    type Output = Option<SubFolder>;

    fn visit_headers(&mut self, _phase: &PBXHeadersBuildPhase<'g>) -> Self::Output {
        None
    }

    fn visit_resources(&mut self, _phase: &PBXResourcesBuildPhase<'g>) -> Self::Output {
        Some(SubFolder::Resources)
    }

    fn visit_frameworks(&mut self, _phase: &PBXFrameworksBuildPhase<'g>) -> Self::Output {
        None
    }

    fn visit_sources(&mut self, _phase: &PBXSourcesBuildPhase<'g>) -> Self::Output {
        None
    }

    fn visit_copy_files(&mut self, phase: &PBXCopyFilesBuildPhase<'g>) -> Self::Output {
        phase.dst_subfolder_spec().unwrap()
    }

    fn visit_shell_script(&mut self, _phase: &PBXShellScriptBuildPhase<'g>) -> Self::Output {
        None
    }
}

#[test]
fn test_visitor_output_comes_from_phase() {
    let graph = ProjectCodec::default().read_str(PHASES).unwrap();
    let targets = graph.root_project().unwrap().targets().unwrap();
    let target = &targets[0];
    let destinations: Vec<Option<SubFolder>> = target
        .build_phases()
        .unwrap()
        .iter()
        .map(|phase| phase.accept(&mut DestinationOf))
        .collect();
    assert_eq!(
        destinations,
        [None, Some(SubFolder::Resources), None, None, Some(SubFolder::Frameworks), None]
    );
}

#[test]
fn test_build_phase_getters() {
    let graph = ProjectCodec::default().read_str(PHASES).unwrap();
    let sources: PBXSourcesBuildPhase = graph.get_by_global_id("S").unwrap();
    assert_eq!(sources.build_action_mask().unwrap().as_deref(), Some("2147483647"));
    assert!(!sources.run_only_for_deployment_postprocessing().unwrap());

    let copy: PBXCopyFilesBuildPhase = graph.get_by_global_id("C").unwrap();
    assert_eq!(copy.name().unwrap().as_deref(), Some("Embed"));
    assert_eq!(copy.dst_path().unwrap().as_deref(), Some(""));

    let script: PBXShellScriptBuildPhase = graph.get_by_global_id("X").unwrap();
    assert_eq!(script.shell_script().unwrap().as_deref(), Some("make"));
    assert!(script.files().unwrap().is_empty());
    assert!(script.output_paths().unwrap().is_empty());
}

/// Returns the kind each visit method stands for.
struct KindOf;

impl<'g> VersionRequirementVisitor<'g> for KindOf {
    type Output = VersionRequirementKind;

    fn visit_branch(&mut self, _r: &VersionRequirementBranch<'g>) -> Self::Output {
        VersionRequirementKind::Branch
    }

    fn visit_exact(&mut self, _r: &VersionRequirementExact<'g>) -> Self::Output {
        VersionRequirementKind::Exact
    }

    fn visit_range(&mut self, _r: &VersionRequirementRange<'g>) -> Self::Output {
        VersionRequirementKind::Range
    }

    fn visit_revision(&mut self, _r: &VersionRequirementRevision<'g>) -> Self::Output {
        VersionRequirementKind::Revision
    }

    fn visit_up_to_next_major_version(
        &mut self,
        _r: &VersionRequirementUpToNextMajorVersion<'g>,
    ) -> Self::Output {
        VersionRequirementKind::UpToNextMajorVersion
    }

    fn visit_up_to_next_minor_version(
        &mut self,
        _r: &VersionRequirementUpToNextMinorVersion<'g>,
    ) -> Self::Output {
        VersionRequirementKind::UpToNextMinorVersion
    }
}

#[test]
fn test_version_requirements() {
    let cases = [
        (VersionRequirement::branch("main"), "require branch 'main'"),
        (VersionRequirement::exact("1.2.3"), "require version '1.2.3'"),
        (
            VersionRequirement::range("1.0.0", "2.0.0"),
            "require version range '1.0.0' to '2.0.0'",
        ),
        (
            VersionRequirement::revision("dab2835d2d5a33e4ef2bcb0dcf8a3ec8f1ebd5d1"),
            "require revision 'dab2835d2d5a33e4ef2bcb0dcf8a3ec8f1ebd5d1'",
        ),
        (
            VersionRequirement::up_to_next_major_version("1.0.0"),
            "require up to next major version from '1.0.0'",
        ),
        (
            VersionRequirement::up_to_next_minor_version("1.4.0"),
            "require up to next minor version from '1.4.0'",
        ),
    ];

    let mut graph = xcode_pbx::ProjectGraph::new();
    for (requirement, text) in cases {
        let id = XCRemoteSwiftPackageReference::builder()
            .repository_url("https://example.com/package.git")
            .requirement(requirement)
            .add_to(&mut graph)
            .unwrap();
        let package: XCRemoteSwiftPackageReference = graph.get(id).unwrap();
        let requirement = package.requirement().unwrap().unwrap();
        assert_eq!(requirement.to_string(), text);
        assert_eq!(requirement.accept(&mut KindOf), requirement.kind());
    }
}
