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

//! Swift package references and their version requirements.

use std::fmt;

use crate::codeable::keys::{
    VersionRequirementKey, XCRemoteSwiftPackageReferenceKey, XCSwiftPackageProductDependencyKey,
};
use crate::codeable::{builder, codeable, Codeable, FromValue};
use crate::coder::Value;
use crate::error::Error;
use crate::graph::ProjectGraph;
use crate::key::CodingKeys;
use crate::object::{DefaultKeyedObject, DefaultKeyedObjectBuilder};
use crate::types::{ObjectId, VersionRequirementKind};

codeable! {
    /// A Swift package fetched from a repository.
    XCRemoteSwiftPackageReference => XCRemoteSwiftPackageReferenceKey
}

impl<'g> XCRemoteSwiftPackageReference<'g> {
    pub fn repository_url(&self) -> Result<Option<String>, Error> {
        self.try_decode(XCRemoteSwiftPackageReferenceKey::RepositoryUrl)
    }

    pub fn requirement(&self) -> Result<Option<VersionRequirement<'g>>, Error> {
        self.try_decode(XCRemoteSwiftPackageReferenceKey::Requirement)
    }
}

builder!(XCRemoteSwiftPackageReferenceBuilder for XCRemoteSwiftPackageReference);

impl XCRemoteSwiftPackageReferenceBuilder {
    fn new() -> XCRemoteSwiftPackageReferenceBuilder {
        let mut inner = DefaultKeyedObject::builder(XCRemoteSwiftPackageReference::ISA);
        inner.requires(XCRemoteSwiftPackageReferenceKey::RepositoryUrl);
        XCRemoteSwiftPackageReferenceBuilder { inner }
    }

    pub fn repository_url<S: Into<String>>(mut self, url: S) -> Self {
        self.inner
            .put(XCRemoteSwiftPackageReferenceKey::RepositoryUrl, url.into());
        self
    }

    /// Sets the requirement, built with one of the [`VersionRequirement`]
    /// constructors.
    pub fn requirement(mut self, requirement: DefaultKeyedObject) -> Self {
        self.inner
            .put(XCRemoteSwiftPackageReferenceKey::Requirement, requirement);
        self
    }
}

codeable! {
    /// A product of a Swift package that targets link against.
    XCSwiftPackageProductDependency => XCSwiftPackageProductDependencyKey
}

impl<'g> XCSwiftPackageProductDependency<'g> {
    pub fn product_name(&self) -> Result<Option<String>, Error> {
        self.try_decode(XCSwiftPackageProductDependencyKey::ProductName)
    }

    pub fn package(&self) -> Result<Option<XCRemoteSwiftPackageReference<'g>>, Error> {
        self.try_decode(XCSwiftPackageProductDependencyKey::Package)
    }
}

builder!(XCSwiftPackageProductDependencyBuilder for XCSwiftPackageProductDependency);

impl XCSwiftPackageProductDependencyBuilder {
    fn new() -> XCSwiftPackageProductDependencyBuilder {
        let mut inner = DefaultKeyedObject::builder(XCSwiftPackageProductDependency::ISA);
        inner.requires(XCSwiftPackageProductDependencyKey::ProductName);
        XCSwiftPackageProductDependencyBuilder { inner }
    }

    pub fn product_name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner
            .put(XCSwiftPackageProductDependencyKey::ProductName, name.into());
        self
    }

    pub fn package(mut self, package: ObjectId) -> Self {
        self.inner
            .put(XCSwiftPackageProductDependencyKey::Package, package);
        self
    }
}

codeable! {
    /// `kind = branch`.
    VersionRequirementBranch => VersionRequirementKey
}

impl VersionRequirementBranch<'_> {
    pub fn branch(&self) -> Result<Option<String>, Error> {
        self.try_decode(VersionRequirementKey::Branch)
    }
}

codeable! {
    /// `kind = exactVersion`.
    VersionRequirementExact => VersionRequirementKey
}

impl VersionRequirementExact<'_> {
    pub fn version(&self) -> Result<Option<String>, Error> {
        self.try_decode(VersionRequirementKey::Version)
    }
}

codeable! {
    /// `kind = versionRange`.
    VersionRequirementRange => VersionRequirementKey
}

impl VersionRequirementRange<'_> {
    pub fn minimum_version(&self) -> Result<Option<String>, Error> {
        self.try_decode(VersionRequirementKey::MinimumVersion)
    }

    pub fn maximum_version(&self) -> Result<Option<String>, Error> {
        self.try_decode(VersionRequirementKey::MaximumVersion)
    }
}

codeable! {
    /// `kind = revision`.
    VersionRequirementRevision => VersionRequirementKey
}

impl VersionRequirementRevision<'_> {
    pub fn revision(&self) -> Result<Option<String>, Error> {
        self.try_decode(VersionRequirementKey::Revision)
    }
}

codeable! {
    /// `kind = upToNextMajorVersion`.
    VersionRequirementUpToNextMajorVersion => VersionRequirementKey
}

impl VersionRequirementUpToNextMajorVersion<'_> {
    pub fn minimum_version(&self) -> Result<Option<String>, Error> {
        self.try_decode(VersionRequirementKey::MinimumVersion)
    }
}

codeable! {
    /// `kind = upToNextMinorVersion`.
    VersionRequirementUpToNextMinorVersion => VersionRequirementKey
}

impl VersionRequirementUpToNextMinorVersion<'_> {
    pub fn minimum_version(&self) -> Result<Option<String>, Error> {
        self.try_decode(VersionRequirementKey::MinimumVersion)
    }
}

/// A package version requirement, selected by its `kind` field.
#[derive(Clone, Debug, PartialEq)]
pub enum VersionRequirement<'g> {
    Branch(VersionRequirementBranch<'g>),
    Exact(VersionRequirementExact<'g>),
    Range(VersionRequirementRange<'g>),
    Revision(VersionRequirementRevision<'g>),
    UpToNextMajorVersion(VersionRequirementUpToNextMajorVersion<'g>),
    UpToNextMinorVersion(VersionRequirementUpToNextMinorVersion<'g>),
}

/// One method per requirement kind; [`VersionRequirement::accept`] calls
/// exactly one.
pub trait VersionRequirementVisitor<'g> {
    type Output;

    fn visit_branch(&mut self, requirement: &VersionRequirementBranch<'g>) -> Self::Output;

    fn visit_exact(&mut self, requirement: &VersionRequirementExact<'g>) -> Self::Output;

    fn visit_range(&mut self, requirement: &VersionRequirementRange<'g>) -> Self::Output;

    fn visit_revision(&mut self, requirement: &VersionRequirementRevision<'g>) -> Self::Output;

    fn visit_up_to_next_major_version(
        &mut self,
        requirement: &VersionRequirementUpToNextMajorVersion<'g>,
    ) -> Self::Output;

    fn visit_up_to_next_minor_version(
        &mut self,
        requirement: &VersionRequirementUpToNextMinorVersion<'g>,
    ) -> Self::Output;
}

fn requirement(kind: VersionRequirementKind) -> DefaultKeyedObjectBuilder {
    let mut builder = DefaultKeyedObject::nested(VersionRequirementKey::FAMILY);
    builder.put(VersionRequirementKey::Kind, kind);
    builder
}

impl<'g> VersionRequirement<'g> {
    pub fn branch<S: Into<String>>(branch: S) -> DefaultKeyedObject {
        let mut builder = requirement(VersionRequirementKind::Branch);
        builder.put(VersionRequirementKey::Branch, branch.into());
        builder.finish()
    }

    pub fn exact<S: Into<String>>(version: S) -> DefaultKeyedObject {
        let mut builder = requirement(VersionRequirementKind::Exact);
        builder.put(VersionRequirementKey::Version, version.into());
        builder.finish()
    }

    pub fn range<S: Into<String>, T: Into<String>>(minimum: S, maximum: T) -> DefaultKeyedObject {
        let mut builder = requirement(VersionRequirementKind::Range);
        builder
            .put(VersionRequirementKey::MinimumVersion, minimum.into())
            .put(VersionRequirementKey::MaximumVersion, maximum.into());
        builder.finish()
    }

    pub fn revision<S: Into<String>>(revision: S) -> DefaultKeyedObject {
        let mut builder = requirement(VersionRequirementKind::Revision);
        builder.put(VersionRequirementKey::Revision, revision.into());
        builder.finish()
    }

    pub fn up_to_next_major_version<S: Into<String>>(minimum: S) -> DefaultKeyedObject {
        let mut builder = requirement(VersionRequirementKind::UpToNextMajorVersion);
        builder.put(VersionRequirementKey::MinimumVersion, minimum.into());
        builder.finish()
    }

    pub fn up_to_next_minor_version<S: Into<String>>(minimum: S) -> DefaultKeyedObject {
        let mut builder = requirement(VersionRequirementKind::UpToNextMinorVersion);
        builder.put(VersionRequirementKey::MinimumVersion, minimum.into());
        builder.finish()
    }

    pub fn kind(&self) -> VersionRequirementKind {
        match self {
            VersionRequirement::Branch(_) => VersionRequirementKind::Branch,
            VersionRequirement::Exact(_) => VersionRequirementKind::Exact,
            VersionRequirement::Range(_) => VersionRequirementKind::Range,
            VersionRequirement::Revision(_) => VersionRequirementKind::Revision,
            VersionRequirement::UpToNextMajorVersion(_) => {
                VersionRequirementKind::UpToNextMajorVersion
            }
            VersionRequirement::UpToNextMinorVersion(_) => {
                VersionRequirementKind::UpToNextMinorVersion
            }
        }
    }

    pub fn accept<V: VersionRequirementVisitor<'g>>(&self, visitor: &mut V) -> V::Output {
        match self {
            VersionRequirement::Branch(r) => visitor.visit_branch(r),
            VersionRequirement::Exact(r) => visitor.visit_exact(r),
            VersionRequirement::Range(r) => visitor.visit_range(r),
            VersionRequirement::Revision(r) => visitor.visit_revision(r),
            VersionRequirement::UpToNextMajorVersion(r) => visitor.visit_up_to_next_major_version(r),
            VersionRequirement::UpToNextMinorVersion(r) => visitor.visit_up_to_next_minor_version(r),
        }
    }
}

impl<'g> FromValue<'g> for VersionRequirement<'g> {
    fn from_value(value: Value, graph: &'g ProjectGraph) -> Result<Self, Error> {
        // Any of the variant views can read `kind`.
        let probe = VersionRequirementBranch::from_value(value, graph)?;
        let kind = probe
            .try_decode::<VersionRequirementKind>(VersionRequirementKey::Kind)?
            .ok_or_else(|| Error::coder_mismatch("version requirement without `kind`"))?;
        let VersionRequirementBranch { object, id, graph } = probe;
        Ok(match kind {
            VersionRequirementKind::Branch => {
                VersionRequirement::Branch(VersionRequirementBranch { object, id, graph })
            }
            VersionRequirementKind::Exact => {
                VersionRequirement::Exact(VersionRequirementExact { object, id, graph })
            }
            VersionRequirementKind::Range => {
                VersionRequirement::Range(VersionRequirementRange { object, id, graph })
            }
            VersionRequirementKind::Revision => {
                VersionRequirement::Revision(VersionRequirementRevision { object, id, graph })
            }
            VersionRequirementKind::UpToNextMajorVersion => VersionRequirement::UpToNextMajorVersion(
                VersionRequirementUpToNextMajorVersion { object, id, graph },
            ),
            VersionRequirementKind::UpToNextMinorVersion => VersionRequirement::UpToNextMinorVersion(
                VersionRequirementUpToNextMinorVersion { object, id, graph },
            ),
        })
    }
}

fn text(field: Result<Option<String>, Error>) -> String {
    field.ok().flatten().unwrap_or_default()
}

struct Describe;

impl<'g> VersionRequirementVisitor<'g> for Describe {
    type Output = String;

    fn visit_branch(&mut self, r: &VersionRequirementBranch<'g>) -> String {
        format!("require branch '{}'", text(r.branch()))
    }

    fn visit_exact(&mut self, r: &VersionRequirementExact<'g>) -> String {
        format!("require version '{}'", text(r.version()))
    }

    fn visit_range(&mut self, r: &VersionRequirementRange<'g>) -> String {
        format!(
            "require version range '{}' to '{}'",
            text(r.minimum_version()),
            text(r.maximum_version())
        )
    }

    fn visit_revision(&mut self, r: &VersionRequirementRevision<'g>) -> String {
        format!("require revision '{}'", text(r.revision()))
    }

    fn visit_up_to_next_major_version(
        &mut self,
        r: &VersionRequirementUpToNextMajorVersion<'g>,
    ) -> String {
        format!(
            "require up to next major version from '{}'",
            text(r.minimum_version())
        )
    }

    fn visit_up_to_next_minor_version(
        &mut self,
        r: &VersionRequirementUpToNextMinorVersion<'g>,
    ) -> String {
        format!(
            "require up to next minor version from '{}'",
            text(r.minimum_version())
        )
    }
}

/// Undecodable fields display as empty strings.
impl fmt::Display for VersionRequirement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.accept(&mut Describe))
    }
}
