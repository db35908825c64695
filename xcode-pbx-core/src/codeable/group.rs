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

use crate::codeable::keys::{PBXGroupKey, PBXVariantGroupKey, XCVersionGroupKey};
use crate::codeable::{
    builder, codeable, codeable_sum, Codeable, PBXFileReference, PBXReferenceProxy,
};
use crate::error::Error;
use crate::object::DefaultKeyedObject;
use crate::types::{ObjectId, SourceTree};

/// Getters and builder setters shared by the three group flavours.
macro_rules! group {
    ($name:ident, $builder:ident, $keys:ident) => {
        impl<'g> $name<'g> {
            pub fn name(&self) -> Result<Option<String>, Error> {
                self.try_decode($keys::Name)
            }

            pub fn path(&self) -> Result<Option<String>, Error> {
                self.try_decode($keys::Path)
            }

            pub fn source_tree(&self) -> Result<Option<SourceTree>, Error> {
                self.try_decode($keys::SourceTree)
            }

            pub fn children(&self) -> Result<Vec<PBXReference<'g>>, Error> {
                self.try_decode($keys::Children)
                    .map(Option::unwrap_or_default)
            }
        }

        builder!($builder for $name);

        impl $builder {
            fn new() -> $builder {
                $builder {
                    inner: DefaultKeyedObject::builder($name::ISA),
                }
            }

            pub fn name<S: Into<String>>(mut self, name: S) -> Self {
                self.inner.put($keys::Name, name.into());
                self
            }

            pub fn path<S: Into<String>>(mut self, path: S) -> Self {
                self.inner.put($keys::Path, path.into());
                self
            }

            pub fn source_tree(mut self, source_tree: SourceTree) -> Self {
                self.inner.put($keys::SourceTree, source_tree);
                self
            }

            pub fn child(mut self, child: ObjectId) -> Self {
                self.inner.add($keys::Children, child);
                self
            }

            pub fn children(mut self, children: Vec<ObjectId>) -> Self {
                self.inner.put($keys::Children, children);
                self
            }
        }
    };
}

codeable! {
    /// A folder in the project navigator.
    PBXGroup => PBXGroupKey
}
group!(PBXGroup, PBXGroupBuilder, PBXGroupKey);

codeable! {
    /// Localized variants of one file.
    PBXVariantGroup => PBXVariantGroupKey
}
group!(PBXVariantGroup, PBXVariantGroupBuilder, PBXVariantGroupKey);

codeable! {
    /// Versioned bundle such as a Core Data model.
    XCVersionGroup => XCVersionGroupKey
}
group!(XCVersionGroup, XCVersionGroupBuilder, XCVersionGroupKey);

impl<'g> XCVersionGroup<'g> {
    pub fn current_version(&self) -> Result<Option<PBXFileReference<'g>>, Error> {
        self.try_decode(XCVersionGroupKey::CurrentVersion)
    }

    pub fn version_group_type(&self) -> Result<Option<String>, Error> {
        self.try_decode(XCVersionGroupKey::VersionGroupType)
    }
}

impl XCVersionGroupBuilder {
    pub fn current_version(mut self, file: ObjectId) -> Self {
        self.inner.put(XCVersionGroupKey::CurrentVersion, file);
        self
    }

    pub fn version_group_type<S: Into<String>>(mut self, group_type: S) -> Self {
        self.inner
            .put(XCVersionGroupKey::VersionGroupType, group_type.into());
        self
    }
}

codeable_sum! {
    /// Anything a group may list as a child or a build file may point at.
    PBXReference {
        FileReference(PBXFileReference),
        Group(PBXGroup),
        VariantGroup(PBXVariantGroup),
        VersionGroup(XCVersionGroup),
        ReferenceProxy(PBXReferenceProxy),
    }
}

impl PBXReference<'_> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        match self {
            PBXReference::FileReference(file) => file.name(),
            PBXReference::Group(group) => group.name(),
            PBXReference::VariantGroup(group) => group.name(),
            PBXReference::VersionGroup(group) => group.name(),
            PBXReference::ReferenceProxy(proxy) => proxy.name(),
        }
    }

    pub fn path(&self) -> Result<Option<String>, Error> {
        match self {
            PBXReference::FileReference(file) => file.path(),
            PBXReference::Group(group) => group.path(),
            PBXReference::VariantGroup(group) => group.path(),
            PBXReference::VersionGroup(group) => group.path(),
            PBXReference::ReferenceProxy(proxy) => proxy.path(),
        }
    }
}
