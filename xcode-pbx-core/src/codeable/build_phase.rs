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

//! Build phases and their visitor.

use crate::codeable::keys::{
    PBXCopyFilesBuildPhaseKey, PBXFrameworksBuildPhaseKey, PBXHeadersBuildPhaseKey,
    PBXResourcesBuildPhaseKey, PBXShellScriptBuildPhaseKey, PBXSourcesBuildPhaseKey,
};
use crate::codeable::{builder, codeable, codeable_sum, Codeable, PBXBuildFile};
use crate::error::Error;
use crate::object::DefaultKeyedObject;
use crate::types::{ObjectId, SubFolder};

const DEFAULT_SHELL_PATH: &str = "/bin/sh";

/// Getters and builder setters every phase has.
macro_rules! build_phase {
    ($name:ident, $builder:ident, $keys:ident) => {
        impl<'g> $name<'g> {
            pub fn files(&self) -> Result<Vec<PBXBuildFile<'g>>, Error> {
                self.try_decode($keys::Files).map(Option::unwrap_or_default)
            }

            pub fn build_action_mask(&self) -> Result<Option<String>, Error> {
                self.try_decode($keys::BuildActionMask)
            }

            pub fn run_only_for_deployment_postprocessing(&self) -> Result<bool, Error> {
                self.try_decode($keys::RunOnlyForDeploymentPostprocessing)
                    .map(|flag| flag.unwrap_or(false))
            }
        }

        impl $builder {
            pub fn file(mut self, file: ObjectId) -> Self {
                self.inner.add($keys::Files, file);
                self
            }

            pub fn files(mut self, files: Vec<ObjectId>) -> Self {
                self.inner.put($keys::Files, files);
                self
            }

            pub fn build_action_mask<S: Into<String>>(mut self, mask: S) -> Self {
                self.inner.put($keys::BuildActionMask, mask.into());
                self
            }

            pub fn run_only_for_deployment_postprocessing(mut self, flag: bool) -> Self {
                self.inner
                    .put($keys::RunOnlyForDeploymentPostprocessing, flag);
                self
            }
        }
    };
}

/// A phase that only lists files.
macro_rules! file_build_phase {
    ($(#[$meta:meta])* $name:ident, $builder:ident, $keys:ident) => {
        codeable! {
            $(#[$meta])*
            $name => $keys
        }

        builder!($builder for $name);

        impl $builder {
            fn new() -> $builder {
                $builder {
                    inner: DefaultKeyedObject::builder($name::ISA),
                }
            }
        }

        build_phase!($name, $builder, $keys);
    };
}

file_build_phase!(
    /// Headers copied into a framework or library product.
    PBXHeadersBuildPhase,
    PBXHeadersBuildPhaseBuilder,
    PBXHeadersBuildPhaseKey
);
file_build_phase!(
    /// Resources copied into the product bundle.
    PBXResourcesBuildPhase,
    PBXResourcesBuildPhaseBuilder,
    PBXResourcesBuildPhaseKey
);
file_build_phase!(
    /// Frameworks and libraries the product links against.
    PBXFrameworksBuildPhase,
    PBXFrameworksBuildPhaseBuilder,
    PBXFrameworksBuildPhaseKey
);
file_build_phase!(
    /// Sources compiled into the product.
    PBXSourcesBuildPhase,
    PBXSourcesBuildPhaseBuilder,
    PBXSourcesBuildPhaseKey
);

codeable! {
    /// Copies files to a location inside or outside the product.
    PBXCopyFilesBuildPhase => PBXCopyFilesBuildPhaseKey
}

builder!(PBXCopyFilesBuildPhaseBuilder for PBXCopyFilesBuildPhase);
build_phase!(
    PBXCopyFilesBuildPhase,
    PBXCopyFilesBuildPhaseBuilder,
    PBXCopyFilesBuildPhaseKey
);

impl<'g> PBXCopyFilesBuildPhase<'g> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXCopyFilesBuildPhaseKey::Name)
    }

    pub fn dst_path(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXCopyFilesBuildPhaseKey::DstPath)
    }

    pub fn dst_subfolder_spec(&self) -> Result<Option<SubFolder>, Error> {
        self.try_decode(PBXCopyFilesBuildPhaseKey::DstSubfolderSpec)
    }
}

impl PBXCopyFilesBuildPhaseBuilder {
    fn new() -> PBXCopyFilesBuildPhaseBuilder {
        let mut inner = DefaultKeyedObject::builder(PBXCopyFilesBuildPhase::ISA);
        inner.requires(PBXCopyFilesBuildPhaseKey::DstSubfolderSpec);
        PBXCopyFilesBuildPhaseBuilder { inner }
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner.put(PBXCopyFilesBuildPhaseKey::Name, name.into());
        self
    }

    pub fn dst_path<S: Into<String>>(mut self, path: S) -> Self {
        self.inner
            .put(PBXCopyFilesBuildPhaseKey::DstPath, path.into());
        self
    }

    pub fn dst_subfolder_spec(mut self, folder: SubFolder) -> Self {
        self.inner
            .put(PBXCopyFilesBuildPhaseKey::DstSubfolderSpec, folder);
        self
    }
}

codeable! {
    /// Runs a shell script.
    PBXShellScriptBuildPhase => PBXShellScriptBuildPhaseKey
}

builder!(PBXShellScriptBuildPhaseBuilder for PBXShellScriptBuildPhase);
build_phase!(
    PBXShellScriptBuildPhase,
    PBXShellScriptBuildPhaseBuilder,
    PBXShellScriptBuildPhaseKey
);

impl<'g> PBXShellScriptBuildPhase<'g> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::Name)
    }

    pub fn shell_path(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::ShellPath)
    }

    pub fn shell_script(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::ShellScript)
    }

    pub fn input_paths(&self) -> Result<Vec<String>, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::InputPaths)
            .map(Option::unwrap_or_default)
    }

    pub fn input_file_list_paths(&self) -> Result<Vec<String>, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::InputFileListPaths)
            .map(Option::unwrap_or_default)
    }

    pub fn output_paths(&self) -> Result<Vec<String>, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::OutputPaths)
            .map(Option::unwrap_or_default)
    }

    pub fn output_file_list_paths(&self) -> Result<Vec<String>, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::OutputFileListPaths)
            .map(Option::unwrap_or_default)
    }

    pub fn show_env_vars_in_log(&self) -> Result<bool, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::ShowEnvVarsInLog)
            .map(|flag| flag.unwrap_or(false))
    }

    pub fn always_out_of_date(&self) -> Result<bool, Error> {
        self.try_decode(PBXShellScriptBuildPhaseKey::AlwaysOutOfDate)
            .map(|flag| flag.unwrap_or(false))
    }
}

impl PBXShellScriptBuildPhaseBuilder {
    fn new() -> PBXShellScriptBuildPhaseBuilder {
        let mut inner = DefaultKeyedObject::builder(PBXShellScriptBuildPhase::ISA);
        inner.put(PBXShellScriptBuildPhaseKey::ShellPath, DEFAULT_SHELL_PATH);
        inner.requires(PBXShellScriptBuildPhaseKey::ShellScript);
        PBXShellScriptBuildPhaseBuilder { inner }
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::Name, name.into());
        self
    }

    pub fn shell_path<S: Into<String>>(mut self, path: S) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::ShellPath, path.into());
        self
    }

    pub fn shell_script<S: Into<String>>(mut self, script: S) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::ShellScript, script.into());
        self
    }

    pub fn input_paths(mut self, paths: Vec<String>) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::InputPaths, paths);
        self
    }

    pub fn input_file_list_paths(mut self, paths: Vec<String>) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::InputFileListPaths, paths);
        self
    }

    pub fn output_paths(mut self, paths: Vec<String>) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::OutputPaths, paths);
        self
    }

    pub fn output_file_list_paths(mut self, paths: Vec<String>) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::OutputFileListPaths, paths);
        self
    }

    pub fn show_env_vars_in_log(mut self, flag: bool) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::ShowEnvVarsInLog, flag);
        self
    }

    pub fn always_out_of_date(mut self, flag: bool) -> Self {
        self.inner
            .put(PBXShellScriptBuildPhaseKey::AlwaysOutOfDate, flag);
        self
    }
}

codeable_sum! {
    /// Any build phase.
    PBXBuildPhase {
        Headers(PBXHeadersBuildPhase),
        Resources(PBXResourcesBuildPhase),
        Frameworks(PBXFrameworksBuildPhase),
        Sources(PBXSourcesBuildPhase),
        CopyFiles(PBXCopyFilesBuildPhase),
        ShellScript(PBXShellScriptBuildPhase),
    }
}

/// One method per build phase; [`PBXBuildPhase::accept`] calls exactly one.
pub trait BuildPhaseVisitor<'g> {
    type Output;

    fn visit_headers(&mut self, phase: &PBXHeadersBuildPhase<'g>) -> Self::Output;

    fn visit_resources(&mut self, phase: &PBXResourcesBuildPhase<'g>) -> Self::Output;

    fn visit_frameworks(&mut self, phase: &PBXFrameworksBuildPhase<'g>) -> Self::Output;

    fn visit_sources(&mut self, phase: &PBXSourcesBuildPhase<'g>) -> Self::Output;

    fn visit_copy_files(&mut self, phase: &PBXCopyFilesBuildPhase<'g>) -> Self::Output;

    fn visit_shell_script(&mut self, phase: &PBXShellScriptBuildPhase<'g>) -> Self::Output;
}

impl<'g> PBXBuildPhase<'g> {
    pub fn accept<V: BuildPhaseVisitor<'g>>(&self, visitor: &mut V) -> V::Output {
        match self {
            PBXBuildPhase::Headers(phase) => visitor.visit_headers(phase),
            PBXBuildPhase::Resources(phase) => visitor.visit_resources(phase),
            PBXBuildPhase::Frameworks(phase) => visitor.visit_frameworks(phase),
            PBXBuildPhase::Sources(phase) => visitor.visit_sources(phase),
            PBXBuildPhase::CopyFiles(phase) => visitor.visit_copy_files(phase),
            PBXBuildPhase::ShellScript(phase) => visitor.visit_shell_script(phase),
        }
    }

    pub fn files(&self) -> Result<Vec<PBXBuildFile<'g>>, Error> {
        match self {
            PBXBuildPhase::Headers(phase) => phase.files(),
            PBXBuildPhase::Resources(phase) => phase.files(),
            PBXBuildPhase::Frameworks(phase) => phase.files(),
            PBXBuildPhase::Sources(phase) => phase.files(),
            PBXBuildPhase::CopyFiles(phase) => phase.files(),
            PBXBuildPhase::ShellScript(phase) => phase.files(),
        }
    }
}
