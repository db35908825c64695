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

//! Coding keys of every PBX object family, with the coder bound to each.
//!
//! Wire names default to the lower camel case of the variant.

use xcode_pbx_derive::CodingKeys;

use crate::coder::{
    BOOLEAN, BUILD_SETTINGS, DICTIONARY, OBJECT_REF, OBJECT_REF_LIST, PRODUCT_TYPE,
    PROJECT_REFERENCE_LIST, PROXY_TYPE, SOURCE_TREE, STRING, STRING_LIST, SUB_FOLDER,
    VERSION_REQUIREMENT, VERSION_REQUIREMENT_KIND,
};
use crate::resolver::coder_resolver::CodingKeyCoders;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXProject")]
pub enum PBXProjectKey {
    #[coding_key(coder = DICTIONARY)]
    Attributes,
    #[coding_key(coder = OBJECT_REF)]
    BuildConfigurationList,
    #[coding_key(coder = STRING)]
    CompatibilityVersion,
    #[coding_key(coder = STRING)]
    DevelopmentRegion,
    #[coding_key(coder = BOOLEAN)]
    HasScannedForEncodings,
    #[coding_key(coder = STRING_LIST)]
    KnownRegions,
    #[coding_key(coder = OBJECT_REF)]
    MainGroup,
    #[coding_key(coder = OBJECT_REF_LIST)]
    PackageReferences,
    #[coding_key(coder = OBJECT_REF)]
    ProductRefGroup,
    #[coding_key(coder = STRING)]
    ProjectDirPath,
    #[coding_key(coder = PROJECT_REFERENCE_LIST)]
    ProjectReferences,
    #[coding_key(coder = STRING)]
    ProjectRoot,
    #[coding_key(coder = OBJECT_REF_LIST)]
    Targets,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(family = "ProjectReference")]
pub enum ProjectReferenceKey {
    #[coding_key(rename = "ProductGroup", coder = OBJECT_REF)]
    ProductGroup,
    #[coding_key(rename = "ProjectRef", coder = OBJECT_REF)]
    ProjectRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXGroup")]
pub enum PBXGroupKey {
    #[coding_key(coder = OBJECT_REF_LIST)]
    Children,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = STRING)]
    Path,
    #[coding_key(coder = SOURCE_TREE)]
    SourceTree,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXVariantGroup")]
pub enum PBXVariantGroupKey {
    #[coding_key(coder = OBJECT_REF_LIST)]
    Children,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = STRING)]
    Path,
    #[coding_key(coder = SOURCE_TREE)]
    SourceTree,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "XCVersionGroup")]
pub enum XCVersionGroupKey {
    #[coding_key(coder = OBJECT_REF_LIST)]
    Children,
    #[coding_key(coder = OBJECT_REF)]
    CurrentVersion,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = STRING)]
    Path,
    #[coding_key(coder = SOURCE_TREE)]
    SourceTree,
    #[coding_key(coder = STRING)]
    VersionGroupType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXFileReference")]
pub enum PBXFileReferenceKey {
    #[coding_key(coder = STRING)]
    ExplicitFileType,
    #[coding_key(coder = STRING)]
    FileEncoding,
    #[coding_key(coder = BOOLEAN)]
    IncludeInIndex,
    #[coding_key(coder = STRING)]
    LastKnownFileType,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = STRING)]
    Path,
    #[coding_key(coder = SOURCE_TREE)]
    SourceTree,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXReferenceProxy")]
pub enum PBXReferenceProxyKey {
    #[coding_key(coder = STRING)]
    FileType,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = STRING)]
    Path,
    #[coding_key(coder = OBJECT_REF)]
    RemoteRef,
    #[coding_key(coder = SOURCE_TREE)]
    SourceTree,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXBuildFile")]
pub enum PBXBuildFileKey {
    #[coding_key(coder = OBJECT_REF)]
    FileRef,
    #[coding_key(coder = STRING)]
    PlatformFilter,
    #[coding_key(coder = OBJECT_REF)]
    ProductRef,
    #[coding_key(coder = DICTIONARY)]
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXContainerItemProxy")]
pub enum PBXContainerItemProxyKey {
    #[coding_key(coder = OBJECT_REF)]
    ContainerPortal,
    #[coding_key(coder = PROXY_TYPE)]
    ProxyType,
    #[coding_key(rename = "remoteGlobalIDString", coder = STRING)]
    RemoteGlobalIdString,
    #[coding_key(coder = STRING)]
    RemoteInfo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXTargetDependency")]
pub enum PBXTargetDependencyKey {
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = OBJECT_REF)]
    Target,
    #[coding_key(coder = OBJECT_REF)]
    TargetProxy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXNativeTarget")]
pub enum PBXNativeTargetKey {
    #[coding_key(coder = OBJECT_REF)]
    BuildConfigurationList,
    #[coding_key(coder = OBJECT_REF_LIST)]
    BuildPhases,
    #[coding_key(coder = OBJECT_REF_LIST)]
    BuildRules,
    #[coding_key(coder = OBJECT_REF_LIST)]
    Dependencies,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = OBJECT_REF_LIST)]
    PackageProductDependencies,
    #[coding_key(coder = STRING)]
    ProductInstallPath,
    #[coding_key(coder = STRING)]
    ProductName,
    #[coding_key(coder = OBJECT_REF)]
    ProductReference,
    #[coding_key(coder = PRODUCT_TYPE)]
    ProductType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXAggregateTarget")]
pub enum PBXAggregateTargetKey {
    #[coding_key(coder = OBJECT_REF)]
    BuildConfigurationList,
    #[coding_key(coder = OBJECT_REF_LIST)]
    BuildPhases,
    #[coding_key(coder = OBJECT_REF_LIST)]
    Dependencies,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = STRING)]
    ProductName,
    #[coding_key(coder = OBJECT_REF)]
    ProductReference,
    #[coding_key(coder = PRODUCT_TYPE)]
    ProductType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXLegacyTarget")]
pub enum PBXLegacyTargetKey {
    #[coding_key(coder = STRING)]
    BuildArgumentsString,
    #[coding_key(coder = OBJECT_REF)]
    BuildConfigurationList,
    #[coding_key(coder = OBJECT_REF_LIST)]
    BuildPhases,
    #[coding_key(coder = STRING)]
    BuildToolPath,
    #[coding_key(coder = STRING)]
    BuildWorkingDirectory,
    #[coding_key(coder = OBJECT_REF_LIST)]
    Dependencies,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = BOOLEAN)]
    PassBuildSettingsInEnvironment,
    #[coding_key(coder = STRING)]
    ProductName,
    #[coding_key(coder = OBJECT_REF)]
    ProductReference,
    #[coding_key(coder = PRODUCT_TYPE)]
    ProductType,
}

/// Keys of the four phases that only carry files.
macro_rules! file_phase_keys {
    ($($name:ident => $isa:literal),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
            #[coding_keys(isa = $isa)]
            pub enum $name {
                #[coding_key(coder = STRING)]
                BuildActionMask,
                #[coding_key(coder = OBJECT_REF_LIST)]
                Files,
                #[coding_key(coder = BOOLEAN)]
                RunOnlyForDeploymentPostprocessing,
            }
        )*
    };
}

file_phase_keys! {
    PBXHeadersBuildPhaseKey => "PBXHeadersBuildPhase",
    PBXResourcesBuildPhaseKey => "PBXResourcesBuildPhase",
    PBXFrameworksBuildPhaseKey => "PBXFrameworksBuildPhase",
    PBXSourcesBuildPhaseKey => "PBXSourcesBuildPhase",
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXCopyFilesBuildPhase")]
pub enum PBXCopyFilesBuildPhaseKey {
    #[coding_key(coder = STRING)]
    BuildActionMask,
    #[coding_key(coder = STRING)]
    DstPath,
    #[coding_key(coder = SUB_FOLDER)]
    DstSubfolderSpec,
    #[coding_key(coder = OBJECT_REF_LIST)]
    Files,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = BOOLEAN)]
    RunOnlyForDeploymentPostprocessing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "PBXShellScriptBuildPhase")]
pub enum PBXShellScriptBuildPhaseKey {
    #[coding_key(coder = BOOLEAN)]
    AlwaysOutOfDate,
    #[coding_key(coder = STRING)]
    BuildActionMask,
    #[coding_key(coder = OBJECT_REF_LIST)]
    Files,
    #[coding_key(coder = STRING_LIST)]
    InputFileListPaths,
    #[coding_key(coder = STRING_LIST)]
    InputPaths,
    #[coding_key(coder = STRING)]
    Name,
    #[coding_key(coder = STRING_LIST)]
    OutputFileListPaths,
    #[coding_key(coder = STRING_LIST)]
    OutputPaths,
    #[coding_key(coder = BOOLEAN)]
    RunOnlyForDeploymentPostprocessing,
    #[coding_key(coder = STRING)]
    ShellPath,
    #[coding_key(coder = STRING)]
    ShellScript,
    #[coding_key(coder = BOOLEAN)]
    ShowEnvVarsInLog,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "XCBuildConfiguration")]
pub enum XCBuildConfigurationKey {
    #[coding_key(coder = OBJECT_REF)]
    BaseConfigurationReference,
    #[coding_key(coder = BUILD_SETTINGS)]
    BuildSettings,
    #[coding_key(coder = STRING)]
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "XCConfigurationList")]
pub enum XCConfigurationListKey {
    #[coding_key(coder = OBJECT_REF_LIST)]
    BuildConfigurations,
    #[coding_key(coder = BOOLEAN)]
    DefaultConfigurationIsVisible,
    #[coding_key(coder = STRING)]
    DefaultConfigurationName,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "XCRemoteSwiftPackageReference")]
pub enum XCRemoteSwiftPackageReferenceKey {
    #[coding_key(rename = "repositoryURL", coder = STRING)]
    RepositoryUrl,
    #[coding_key(coder = VERSION_REQUIREMENT)]
    Requirement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(isa = "XCSwiftPackageProductDependency")]
pub enum XCSwiftPackageProductDependencyKey {
    #[coding_key(coder = OBJECT_REF)]
    Package,
    #[coding_key(coder = STRING)]
    ProductName,
}

/// Fields of a package version requirement; `kind` selects which of the
/// others are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CodingKeys)]
#[coding_keys(family = "XCSwiftPackageVersionRequirement")]
pub enum VersionRequirementKey {
    #[coding_key(coder = STRING)]
    Branch,
    #[coding_key(coder = VERSION_REQUIREMENT_KIND)]
    Kind,
    #[coding_key(coder = STRING)]
    MaximumVersion,
    #[coding_key(coder = STRING)]
    MinimumVersion,
    #[coding_key(coder = STRING)]
    Revision,
    #[coding_key(coder = STRING)]
    Version,
}

pub(crate) fn register_all(coders: &mut CodingKeyCoders) {
    coders
        .register::<PBXProjectKey>()
        .register::<ProjectReferenceKey>()
        .register::<PBXGroupKey>()
        .register::<PBXVariantGroupKey>()
        .register::<XCVersionGroupKey>()
        .register::<PBXFileReferenceKey>()
        .register::<PBXReferenceProxyKey>()
        .register::<PBXBuildFileKey>()
        .register::<PBXContainerItemProxyKey>()
        .register::<PBXTargetDependencyKey>()
        .register::<PBXNativeTargetKey>()
        .register::<PBXAggregateTargetKey>()
        .register::<PBXLegacyTargetKey>()
        .register::<PBXHeadersBuildPhaseKey>()
        .register::<PBXResourcesBuildPhaseKey>()
        .register::<PBXFrameworksBuildPhaseKey>()
        .register::<PBXSourcesBuildPhaseKey>()
        .register::<PBXCopyFilesBuildPhaseKey>()
        .register::<PBXShellScriptBuildPhaseKey>()
        .register::<XCBuildConfigurationKey>()
        .register::<XCConfigurationListKey>()
        .register::<XCRemoteSwiftPackageReferenceKey>()
        .register::<XCSwiftPackageProductDependencyKey>()
        .register::<VersionRequirementKey>();
}
