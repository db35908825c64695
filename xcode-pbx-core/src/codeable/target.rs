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

use crate::codeable::keys::{PBXAggregateTargetKey, PBXLegacyTargetKey, PBXNativeTargetKey};
use crate::codeable::{
    builder, codeable, codeable_sum, Codeable, PBXBuildPhase, PBXFileReference,
    PBXTargetDependency, XCConfigurationList, XCSwiftPackageProductDependency,
};
use crate::error::Error;
use crate::object::DefaultKeyedObject;
use crate::types::{ObjectId, ProductType};

/// Getters and builder setters every target flavour has.
macro_rules! target {
    ($name:ident, $builder:ident, $keys:ident) => {
        impl<'g> $name<'g> {
            pub fn name(&self) -> Result<Option<String>, Error> {
                self.try_decode($keys::Name)
            }

            pub fn product_name(&self) -> Result<Option<String>, Error> {
                self.try_decode($keys::ProductName)
            }

            pub fn product_type(&self) -> Result<Option<ProductType>, Error> {
                self.try_decode($keys::ProductType)
            }

            pub fn product_reference(&self) -> Result<Option<PBXFileReference<'g>>, Error> {
                self.try_decode($keys::ProductReference)
            }

            pub fn build_phases(&self) -> Result<Vec<PBXBuildPhase<'g>>, Error> {
                self.try_decode($keys::BuildPhases)
                    .map(Option::unwrap_or_default)
            }

            pub fn build_configuration_list(
                &self,
            ) -> Result<Option<XCConfigurationList<'g>>, Error> {
                self.try_decode($keys::BuildConfigurationList)
            }

            pub fn dependencies(&self) -> Result<Vec<PBXTargetDependency<'g>>, Error> {
                self.try_decode($keys::Dependencies)
                    .map(Option::unwrap_or_default)
            }
        }

        builder!($builder for $name);

        impl $builder {
            fn new() -> $builder {
                let mut inner = DefaultKeyedObject::builder($name::ISA);
                inner.requires($keys::Name);
                $builder { inner }
            }

            pub fn name<S: Into<String>>(mut self, name: S) -> Self {
                self.inner.put($keys::Name, name.into());
                self
            }

            pub fn product_name<S: Into<String>>(mut self, name: S) -> Self {
                self.inner.put($keys::ProductName, name.into());
                self
            }

            pub fn product_type(mut self, product_type: ProductType) -> Self {
                self.inner.put($keys::ProductType, product_type);
                self
            }

            pub fn product_reference(mut self, product: ObjectId) -> Self {
                self.inner.put($keys::ProductReference, product);
                self
            }

            pub fn build_phase(mut self, phase: ObjectId) -> Self {
                self.inner.add($keys::BuildPhases, phase);
                self
            }

            pub fn build_phases(mut self, phases: Vec<ObjectId>) -> Self {
                self.inner.put($keys::BuildPhases, phases);
                self
            }

            pub fn build_configuration_list(mut self, list: ObjectId) -> Self {
                self.inner.put($keys::BuildConfigurationList, list);
                self
            }

            pub fn dependency(mut self, dependency: ObjectId) -> Self {
                self.inner.add($keys::Dependencies, dependency);
                self
            }

            pub fn dependencies(mut self, dependencies: Vec<ObjectId>) -> Self {
                self.inner.put($keys::Dependencies, dependencies);
                self
            }
        }
    };
}

codeable! {
    /// A target Xcode builds from sources.
    PBXNativeTarget => PBXNativeTargetKey
}
target!(PBXNativeTarget, PBXNativeTargetBuilder, PBXNativeTargetKey);

impl<'g> PBXNativeTarget<'g> {
    pub fn package_product_dependencies(
        &self,
    ) -> Result<Vec<XCSwiftPackageProductDependency<'g>>, Error> {
        self.try_decode(PBXNativeTargetKey::PackageProductDependencies)
            .map(Option::unwrap_or_default)
    }

    /// Handles of the target's `PBXBuildRule`s.
    pub fn build_rules(&self) -> Result<Vec<ObjectId>, Error> {
        self.try_decode(PBXNativeTargetKey::BuildRules)
            .map(Option::unwrap_or_default)
    }

    pub fn product_install_path(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXNativeTargetKey::ProductInstallPath)
    }
}

impl PBXNativeTargetBuilder {
    pub fn package_product_dependency(mut self, product: ObjectId) -> Self {
        self.inner
            .add(PBXNativeTargetKey::PackageProductDependencies, product);
        self
    }

    pub fn build_rule(mut self, rule: ObjectId) -> Self {
        self.inner.add(PBXNativeTargetKey::BuildRules, rule);
        self
    }

    pub fn product_install_path<S: Into<String>>(mut self, path: S) -> Self {
        self.inner
            .put(PBXNativeTargetKey::ProductInstallPath, path.into());
        self
    }
}

codeable! {
    /// A target that only groups dependencies and script phases.
    PBXAggregateTarget => PBXAggregateTargetKey
}
target!(PBXAggregateTarget, PBXAggregateTargetBuilder, PBXAggregateTargetKey);

codeable! {
    /// A target driven by an external build tool such as `make`.
    PBXLegacyTarget => PBXLegacyTargetKey
}
target!(PBXLegacyTarget, PBXLegacyTargetBuilder, PBXLegacyTargetKey);

impl<'g> PBXLegacyTarget<'g> {
    pub fn build_arguments_string(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXLegacyTargetKey::BuildArgumentsString)
    }

    pub fn build_tool_path(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXLegacyTargetKey::BuildToolPath)
    }

    pub fn build_working_directory(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXLegacyTargetKey::BuildWorkingDirectory)
    }

    pub fn pass_build_settings_in_environment(&self) -> Result<bool, Error> {
        self.try_decode(PBXLegacyTargetKey::PassBuildSettingsInEnvironment)
            .map(|flag| flag.unwrap_or(false))
    }
}

impl PBXLegacyTargetBuilder {
    pub fn build_arguments_string<S: Into<String>>(mut self, arguments: S) -> Self {
        self.inner
            .put(PBXLegacyTargetKey::BuildArgumentsString, arguments.into());
        self
    }

    pub fn build_tool_path<S: Into<String>>(mut self, path: S) -> Self {
        self.inner
            .put(PBXLegacyTargetKey::BuildToolPath, path.into());
        self
    }

    pub fn build_working_directory<S: Into<String>>(mut self, directory: S) -> Self {
        self.inner
            .put(PBXLegacyTargetKey::BuildWorkingDirectory, directory.into());
        self
    }

    pub fn pass_build_settings_in_environment(mut self, flag: bool) -> Self {
        self.inner
            .put(PBXLegacyTargetKey::PassBuildSettingsInEnvironment, flag);
        self
    }
}

codeable_sum! {
    /// Any build target.
    PBXTarget {
        Native(PBXNativeTarget),
        Aggregate(PBXAggregateTarget),
        Legacy(PBXLegacyTarget),
    }
}

impl<'g> PBXTarget<'g> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        match self {
            PBXTarget::Native(target) => target.name(),
            PBXTarget::Aggregate(target) => target.name(),
            PBXTarget::Legacy(target) => target.name(),
        }
    }

    pub fn product_type(&self) -> Result<Option<ProductType>, Error> {
        match self {
            PBXTarget::Native(target) => target.product_type(),
            PBXTarget::Aggregate(target) => target.product_type(),
            PBXTarget::Legacy(target) => target.product_type(),
        }
    }

    pub fn build_phases(&self) -> Result<Vec<PBXBuildPhase<'g>>, Error> {
        match self {
            PBXTarget::Native(target) => target.build_phases(),
            PBXTarget::Aggregate(target) => target.build_phases(),
            PBXTarget::Legacy(target) => target.build_phases(),
        }
    }

    pub fn dependencies(&self) -> Result<Vec<PBXTargetDependency<'g>>, Error> {
        match self {
            PBXTarget::Native(target) => target.dependencies(),
            PBXTarget::Aggregate(target) => target.dependencies(),
            PBXTarget::Legacy(target) => target.dependencies(),
        }
    }

    pub fn build_configuration_list(&self) -> Result<Option<XCConfigurationList<'g>>, Error> {
        match self {
            PBXTarget::Native(target) => target.build_configuration_list(),
            PBXTarget::Aggregate(target) => target.build_configuration_list(),
            PBXTarget::Legacy(target) => target.build_configuration_list(),
        }
    }
}
