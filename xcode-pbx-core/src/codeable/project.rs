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

use tracing::debug;

use crate::codeable::keys::{PBXProjectKey, ProjectReferenceKey};
use crate::codeable::{
    builder, codeable, Codeable, PBXFileReference, PBXGroup, PBXTarget, XCConfigurationList,
    XCRemoteSwiftPackageReference,
};
use crate::coder::Value;
use crate::error::Error;
use crate::graph::ProjectGraph;
use crate::object::DefaultKeyedObject;
use crate::plist::Dictionary;
use crate::types::{ObjectId, SourceTree};

codeable! {
    /// The root object of a project file.
    PBXProject => PBXProjectKey
}

impl<'g> PBXProject<'g> {
    pub fn main_group(&self) -> Result<Option<PBXGroup<'g>>, Error> {
        self.try_decode(PBXProjectKey::MainGroup)
    }

    pub fn targets(&self) -> Result<Vec<PBXTarget<'g>>, Error> {
        self.try_decode(PBXProjectKey::Targets)
            .map(Option::unwrap_or_default)
    }

    pub fn build_configuration_list(&self) -> Result<Option<XCConfigurationList<'g>>, Error> {
        self.try_decode(PBXProjectKey::BuildConfigurationList)
    }

    pub fn compatibility_version(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXProjectKey::CompatibilityVersion)
    }

    pub fn project_references(&self) -> Result<Vec<ProjectReference<'g>>, Error> {
        self.try_decode(PBXProjectKey::ProjectReferences)
            .map(Option::unwrap_or_default)
    }

    pub fn package_references(&self) -> Result<Vec<XCRemoteSwiftPackageReference<'g>>, Error> {
        self.try_decode(PBXProjectKey::PackageReferences)
            .map(Option::unwrap_or_default)
    }

    /// Project attributes such as `LastUpgradeCheck`, kept in wire form.
    pub fn attributes(&self) -> Result<Option<Dictionary>, Error> {
        self.try_decode(PBXProjectKey::Attributes)
    }

    pub fn development_region(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXProjectKey::DevelopmentRegion)
    }

    pub fn has_scanned_for_encodings(&self) -> Result<bool, Error> {
        self.try_decode(PBXProjectKey::HasScannedForEncodings)
            .map(|flag| flag.unwrap_or(false))
    }

    pub fn known_regions(&self) -> Result<Vec<String>, Error> {
        self.try_decode(PBXProjectKey::KnownRegions)
            .map(Option::unwrap_or_default)
    }

    pub fn product_ref_group(&self) -> Result<Option<PBXGroup<'g>>, Error> {
        self.try_decode(PBXProjectKey::ProductRefGroup)
    }

    pub fn project_dir_path(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXProjectKey::ProjectDirPath)
    }

    pub fn project_root(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXProjectKey::ProjectRoot)
    }
}

builder!(@common PBXProjectBuilder for PBXProject);

impl PBXProjectBuilder {
    fn new() -> PBXProjectBuilder {
        PBXProjectBuilder {
            inner: DefaultKeyedObject::builder(PBXProject::ISA),
        }
    }

    pub fn main_group(mut self, group: ObjectId) -> Self {
        self.inner.put(PBXProjectKey::MainGroup, group);
        self
    }

    pub fn target(mut self, target: ObjectId) -> Self {
        self.inner.add(PBXProjectKey::Targets, target);
        self
    }

    pub fn targets<I: IntoIterator<Item = ObjectId>>(mut self, targets: I) -> Self {
        self.inner.put(
            PBXProjectKey::Targets,
            targets.into_iter().collect::<Vec<_>>(),
        );
        self
    }

    pub fn build_configuration_list(mut self, list: ObjectId) -> Self {
        self.inner.put(PBXProjectKey::BuildConfigurationList, list);
        self
    }

    pub fn compatibility_version<S: Into<String>>(mut self, version: S) -> Self {
        self.inner
            .put(PBXProjectKey::CompatibilityVersion, version.into());
        self
    }

    /// Appends a nested `{ ProductGroup; ProjectRef; }` entry.
    pub fn project_reference(mut self, reference: DefaultKeyedObject) -> Self {
        self.inner.add(PBXProjectKey::ProjectReferences, reference);
        self
    }

    pub fn package_reference(mut self, package: ObjectId) -> Self {
        self.inner.add(PBXProjectKey::PackageReferences, package);
        self
    }

    pub fn attributes(mut self, attributes: Dictionary) -> Self {
        self.inner.put(PBXProjectKey::Attributes, attributes);
        self
    }

    pub fn development_region<S: Into<String>>(mut self, region: S) -> Self {
        self.inner
            .put(PBXProjectKey::DevelopmentRegion, region.into());
        self
    }

    pub fn has_scanned_for_encodings(mut self, flag: bool) -> Self {
        self.inner.put(PBXProjectKey::HasScannedForEncodings, flag);
        self
    }

    pub fn known_region<S: Into<String>>(mut self, region: S) -> Self {
        self.inner
            .add(PBXProjectKey::KnownRegions, Value::String(region.into()));
        self
    }

    pub fn product_ref_group(mut self, group: ObjectId) -> Self {
        self.inner.put(PBXProjectKey::ProductRefGroup, group);
        self
    }

    pub fn project_dir_path<S: Into<String>>(mut self, path: S) -> Self {
        self.inner.put(PBXProjectKey::ProjectDirPath, path.into());
        self
    }

    pub fn project_root<S: Into<String>>(mut self, root: S) -> Self {
        self.inner.put(PBXProjectKey::ProjectRoot, root.into());
        self
    }

    /// Builds the project and adds it to `graph`, creating an empty main
    /// group when none was set. The project becomes the graph's root object
    /// unless the graph already has one.
    pub fn add_to(mut self, graph: &mut ProjectGraph) -> Result<ObjectId, Error> {
        if !self.inner.contains(PBXProjectKey::MainGroup) {
            let id = PBXGroup::builder()
                .children(Vec::new())
                .source_tree(SourceTree::Group)
                .add_to(graph)?;
            debug!(main_group = %id, "synthesized main group");
            self = self.main_group(id);
        }
        let id = graph.add(self.build()?)?;
        if graph.root().is_none() {
            graph.set_root(id)?;
        }
        Ok(id)
    }
}

codeable! {
    /// Entry of `projectReferences`, nested inline in the project.
    ProjectReference => ProjectReferenceKey
}

impl<'g> ProjectReference<'g> {
    pub fn product_group(&self) -> Result<Option<PBXGroup<'g>>, Error> {
        self.try_decode(ProjectReferenceKey::ProductGroup)
    }

    pub fn project_ref(&self) -> Result<Option<PBXFileReference<'g>>, Error> {
        self.try_decode(ProjectReferenceKey::ProjectRef)
    }
}

builder!(nested ProjectReferenceBuilder for ProjectReference);

impl ProjectReferenceBuilder {
    fn new() -> ProjectReferenceBuilder {
        let mut inner = DefaultKeyedObject::nested(ProjectReference::ISA);
        inner
            .requires(ProjectReferenceKey::ProductGroup)
            .requires(ProjectReferenceKey::ProjectRef);
        ProjectReferenceBuilder { inner }
    }

    pub fn product_group(mut self, group: ObjectId) -> Self {
        self.inner.put(ProjectReferenceKey::ProductGroup, group);
        self
    }

    pub fn project_ref(mut self, file: ObjectId) -> Self {
        self.inner.put(ProjectReferenceKey::ProjectRef, file);
        self
    }
}
