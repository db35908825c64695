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

use tracing::trace;

use crate::codeable::keys::{
    PBXBuildFileKey, PBXContainerItemProxyKey, PBXFileReferenceKey, PBXReferenceProxyKey,
    PBXTargetDependencyKey,
};
use crate::codeable::{
    builder, codeable, Codeable, PBXObject, PBXReference, PBXTarget,
    XCSwiftPackageProductDependency,
};
use crate::error::Error;
use crate::graph::ProjectGraph;
use crate::object::{DefaultKeyedObject, DefaultKeyedObjectBuilder};
use crate::plist::Dictionary;
use crate::types::{GlobalId, ObjectId, ProxyType, SourceTree};
use crate::util::{infer_file_type, FileTypeField};

codeable! {
    /// A file on disk, or a build product.
    PBXFileReference => PBXFileReferenceKey
}

impl<'g> PBXFileReference<'g> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXFileReferenceKey::Name)
    }

    pub fn path(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXFileReferenceKey::Path)
    }

    pub fn source_tree(&self) -> Result<Option<SourceTree>, Error> {
        self.try_decode(PBXFileReferenceKey::SourceTree)
    }

    pub fn last_known_file_type(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXFileReferenceKey::LastKnownFileType)
    }

    pub fn explicit_file_type(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXFileReferenceKey::ExplicitFileType)
    }

    /// Xcode's file type, explicit when set and last known otherwise.
    pub fn file_type(&self) -> Result<Option<String>, Error> {
        match self.explicit_file_type()? {
            Some(file_type) => Ok(Some(file_type)),
            None => self.last_known_file_type(),
        }
    }

    pub fn file_encoding(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXFileReferenceKey::FileEncoding)
    }

    pub fn include_in_index(&self) -> Result<bool, Error> {
        self.try_decode(PBXFileReferenceKey::IncludeInIndex)
            .map(|flag| flag.unwrap_or(false))
    }
}

/// Builder for [`PBXFileReference`].
///
/// `path` is required. `sourceTree` defaults to `<group>`, and when no file
/// type is given one is inferred from the path (or name) extension.
#[derive(Debug, Clone)]
pub struct PBXFileReferenceBuilder {
    inner: DefaultKeyedObjectBuilder,
    path: Option<String>,
    name: Option<String>,
}

impl PBXFileReference<'_> {
    pub fn builder() -> PBXFileReferenceBuilder {
        let mut inner = DefaultKeyedObject::builder(PBXFileReference::ISA);
        inner.requires(PBXFileReferenceKey::Path);
        PBXFileReferenceBuilder {
            inner,
            path: None,
            name: None,
        }
    }
}

impl PBXFileReferenceBuilder {
    pub fn global_id<G: Into<GlobalId>>(mut self, global_id: G) -> Self {
        self.inner.global_id(global_id);
        self
    }

    pub fn lenient(mut self) -> Self {
        self.inner.lenient();
        self
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        let name = name.into();
        self.inner.put(PBXFileReferenceKey::Name, name.clone());
        self.name = Some(name);
        self
    }

    pub fn path<S: Into<String>>(mut self, path: S) -> Self {
        let path = path.into();
        self.inner.put(PBXFileReferenceKey::Path, path.clone());
        self.path = Some(path);
        self
    }

    pub fn source_tree(mut self, source_tree: SourceTree) -> Self {
        self.inner.put(PBXFileReferenceKey::SourceTree, source_tree);
        self
    }

    pub fn last_known_file_type<S: Into<String>>(mut self, file_type: S) -> Self {
        self.inner
            .put(PBXFileReferenceKey::LastKnownFileType, file_type.into());
        self
    }

    pub fn explicit_file_type<S: Into<String>>(mut self, file_type: S) -> Self {
        self.inner
            .put(PBXFileReferenceKey::ExplicitFileType, file_type.into());
        self
    }

    pub fn file_encoding<S: Into<String>>(mut self, encoding: S) -> Self {
        self.inner
            .put(PBXFileReferenceKey::FileEncoding, encoding.into());
        self
    }

    pub fn include_in_index(mut self, flag: bool) -> Self {
        self.inner.put(PBXFileReferenceKey::IncludeInIndex, flag);
        self
    }

    pub fn build(&self) -> Result<DefaultKeyedObject, Error> {
        let mut inner = self.inner.clone();
        inner.put_if_absent(PBXFileReferenceKey::SourceTree, SourceTree::Group);
        let has_file_type = inner.contains(PBXFileReferenceKey::LastKnownFileType)
            || inner.contains(PBXFileReferenceKey::ExplicitFileType);
        if !has_file_type {
            let inferred = self
                .path
                .as_deref()
                .or(self.name.as_deref())
                .and_then(infer_file_type);
            if let Some((field, file_type)) = inferred {
                trace!(file_type, "inferred file type");
                let key = match field {
                    FileTypeField::LastKnown => PBXFileReferenceKey::LastKnownFileType,
                    FileTypeField::Explicit => PBXFileReferenceKey::ExplicitFileType,
                };
                inner.put(key, file_type);
            }
        }
        inner.build()
    }

    pub fn add_to(&self, graph: &mut ProjectGraph) -> Result<ObjectId, Error> {
        graph.add(self.build()?)
    }
}

codeable! {
    /// Stand-in for a product of another project.
    PBXReferenceProxy => PBXReferenceProxyKey
}

impl<'g> PBXReferenceProxy<'g> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXReferenceProxyKey::Name)
    }

    pub fn path(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXReferenceProxyKey::Path)
    }

    pub fn source_tree(&self) -> Result<Option<SourceTree>, Error> {
        self.try_decode(PBXReferenceProxyKey::SourceTree)
    }

    pub fn file_type(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXReferenceProxyKey::FileType)
    }

    pub fn remote_ref(&self) -> Result<Option<PBXContainerItemProxy<'g>>, Error> {
        self.try_decode(PBXReferenceProxyKey::RemoteRef)
    }
}

builder!(PBXReferenceProxyBuilder for PBXReferenceProxy);

impl PBXReferenceProxyBuilder {
    fn new() -> PBXReferenceProxyBuilder {
        let mut inner = DefaultKeyedObject::builder(PBXReferenceProxy::ISA);
        inner.requires(PBXReferenceProxyKey::RemoteRef);
        PBXReferenceProxyBuilder { inner }
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner.put(PBXReferenceProxyKey::Name, name.into());
        self
    }

    pub fn path<S: Into<String>>(mut self, path: S) -> Self {
        self.inner.put(PBXReferenceProxyKey::Path, path.into());
        self
    }

    pub fn source_tree(mut self, source_tree: SourceTree) -> Self {
        self.inner.put(PBXReferenceProxyKey::SourceTree, source_tree);
        self
    }

    pub fn file_type<S: Into<String>>(mut self, file_type: S) -> Self {
        self.inner
            .put(PBXReferenceProxyKey::FileType, file_type.into());
        self
    }

    pub fn remote_ref(mut self, proxy: ObjectId) -> Self {
        self.inner.put(PBXReferenceProxyKey::RemoteRef, proxy);
        self
    }
}

codeable! {
    /// Membership of a file or package product in a build phase.
    PBXBuildFile => PBXBuildFileKey
}

impl<'g> PBXBuildFile<'g> {
    pub fn file_ref(&self) -> Result<Option<PBXReference<'g>>, Error> {
        self.try_decode(PBXBuildFileKey::FileRef)
    }

    pub fn product_ref(&self) -> Result<Option<XCSwiftPackageProductDependency<'g>>, Error> {
        self.try_decode(PBXBuildFileKey::ProductRef)
    }

    /// Per-file settings such as `COMPILER_FLAGS`; empty when absent.
    pub fn settings(&self) -> Result<Dictionary, Error> {
        self.try_decode(PBXBuildFileKey::Settings)
            .map(Option::unwrap_or_default)
    }

    pub fn platform_filter(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXBuildFileKey::PlatformFilter)
    }
}

builder!(PBXBuildFileBuilder for PBXBuildFile);

impl PBXBuildFileBuilder {
    fn new() -> PBXBuildFileBuilder {
        PBXBuildFileBuilder {
            inner: DefaultKeyedObject::builder(PBXBuildFile::ISA),
        }
    }

    pub fn file_ref(mut self, file: ObjectId) -> Self {
        self.inner.put(PBXBuildFileKey::FileRef, file);
        self
    }

    pub fn product_ref(mut self, product: ObjectId) -> Self {
        self.inner.put(PBXBuildFileKey::ProductRef, product);
        self
    }

    pub fn settings(mut self, settings: Dictionary) -> Self {
        self.inner.put(PBXBuildFileKey::Settings, settings);
        self
    }

    pub fn platform_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.inner
            .put(PBXBuildFileKey::PlatformFilter, filter.into());
        self
    }
}

codeable! {
    /// Points at an object in this or another project, for dependencies
    /// and reference proxies.
    PBXContainerItemProxy => PBXContainerItemProxyKey
}

impl<'g> PBXContainerItemProxy<'g> {
    /// The project (or project file reference) that holds the remote object.
    pub fn container_portal(&self) -> Result<Option<PBXObject<'g>>, Error> {
        self.try_decode(PBXContainerItemProxyKey::ContainerPortal)
    }

    pub fn proxy_type(&self) -> Result<Option<ProxyType>, Error> {
        self.try_decode(PBXContainerItemProxyKey::ProxyType)
    }

    /// Global ID in the container; not resolved against this graph.
    pub fn remote_global_id_string(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXContainerItemProxyKey::RemoteGlobalIdString)
    }

    pub fn remote_info(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXContainerItemProxyKey::RemoteInfo)
    }
}

builder!(PBXContainerItemProxyBuilder for PBXContainerItemProxy);

impl PBXContainerItemProxyBuilder {
    fn new() -> PBXContainerItemProxyBuilder {
        let mut inner = DefaultKeyedObject::builder(PBXContainerItemProxy::ISA);
        inner.requires(PBXContainerItemProxyKey::ContainerPortal);
        PBXContainerItemProxyBuilder { inner }
    }

    pub fn container_portal(mut self, portal: ObjectId) -> Self {
        self.inner
            .put(PBXContainerItemProxyKey::ContainerPortal, portal);
        self
    }

    pub fn proxy_type(mut self, proxy_type: ProxyType) -> Self {
        self.inner.put(PBXContainerItemProxyKey::ProxyType, proxy_type);
        self
    }

    pub fn remote_global_id_string<S: Into<String>>(mut self, global_id: S) -> Self {
        self.inner
            .put(PBXContainerItemProxyKey::RemoteGlobalIdString, global_id.into());
        self
    }

    pub fn remote_info<S: Into<String>>(mut self, info: S) -> Self {
        self.inner
            .put(PBXContainerItemProxyKey::RemoteInfo, info.into());
        self
    }
}

codeable! {
    /// A target's dependency on another target.
    PBXTargetDependency => PBXTargetDependencyKey
}

impl<'g> PBXTargetDependency<'g> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        self.try_decode(PBXTargetDependencyKey::Name)
    }

    pub fn target(&self) -> Result<Option<PBXTarget<'g>>, Error> {
        self.try_decode(PBXTargetDependencyKey::Target)
    }

    pub fn target_proxy(&self) -> Result<Option<PBXContainerItemProxy<'g>>, Error> {
        self.try_decode(PBXTargetDependencyKey::TargetProxy)
    }
}

builder!(PBXTargetDependencyBuilder for PBXTargetDependency);

impl PBXTargetDependencyBuilder {
    fn new() -> PBXTargetDependencyBuilder {
        PBXTargetDependencyBuilder {
            inner: DefaultKeyedObject::builder(PBXTargetDependency::ISA),
        }
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner.put(PBXTargetDependencyKey::Name, name.into());
        self
    }

    pub fn target(mut self, target: ObjectId) -> Self {
        self.inner.put(PBXTargetDependencyKey::Target, target);
        self
    }

    pub fn target_proxy(mut self, proxy: ObjectId) -> Self {
        self.inner.put(PBXTargetDependencyKey::TargetProxy, proxy);
        self
    }
}
