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

//! Typed facades over keyed objects, one per PBX `isa`.
//!
//! An adapter holds its object's storage and the graph it belongs to; every
//! getter decodes through [`KeyedObject::try_decode`] and never caches state
//! of its own. Getters of optional fields return `Option`, lists default to
//! empty and `0`/`1` flags to `false`.

use std::fmt;
use std::rc::Rc;

use crate::coder::{BuildSettings, Value};
use crate::error::Error;
use crate::graph::ProjectGraph;
use crate::key::CodingKeys;
use crate::mismatch;
use crate::object::KeyedObject;
use crate::plist::Dictionary;
use crate::resolver::context::{DecodeContext, EncodeContext};
use crate::types::{
    GlobalId, ObjectId, ProductType, ProxyType, SourceTree, SubFolder, VersionRequirementKind,
};

pub mod build_phase;
pub mod configuration;
pub mod file;
pub mod group;
pub mod keys;
pub mod package;
pub mod project;
pub mod target;

pub use build_phase::{
    BuildPhaseVisitor, PBXBuildPhase, PBXCopyFilesBuildPhase, PBXFrameworksBuildPhase,
    PBXHeadersBuildPhase, PBXResourcesBuildPhase, PBXShellScriptBuildPhase,
    PBXSourcesBuildPhase,
};
pub use configuration::{XCBuildConfiguration, XCConfigurationList};
pub use file::{
    PBXBuildFile, PBXContainerItemProxy, PBXFileReference, PBXReferenceProxy,
    PBXTargetDependency,
};
pub use group::{PBXGroup, PBXReference, PBXVariantGroup, XCVersionGroup};
pub use package::{
    VersionRequirement, VersionRequirementBranch, VersionRequirementExact,
    VersionRequirementRange, VersionRequirementRevision, VersionRequirementUpToNextMajorVersion,
    VersionRequirementUpToNextMinorVersion, VersionRequirementVisitor,
    XCRemoteSwiftPackageReference, XCSwiftPackageProductDependency,
};
pub use project::{PBXProject, ProjectReference};
pub use target::{PBXAggregateTarget, PBXLegacyTarget, PBXNativeTarget, PBXTarget};

/// Conversion from a decoded [`Value`] into a typed getter result.
pub trait FromValue<'g>: Sized {
    fn from_value(value: Value, graph: &'g ProjectGraph) -> Result<Self, Error>;
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'g> FromValue<'g> for $ty {
                fn from_value(value: Value, _graph: &'g ProjectGraph) -> Result<Self, Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(Error::coder_mismatch(format!(
                            "expected {}, found {}",
                            stringify!($variant),
                            other.kind()
                        ))),
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    String => String,
    bool => Bool,
    Dictionary => Dictionary,
    ObjectId => Reference,
    ProductType => ProductType,
    ProxyType => ProxyType,
    SourceTree => SourceTree,
    SubFolder => SubFolder,
    VersionRequirementKind => VersionRequirementKind,
    BuildSettings => BuildSettings,
}

impl<'g, T: FromValue<'g>> FromValue<'g> for Vec<T> {
    fn from_value(value: Value, graph: &'g ProjectGraph) -> Result<Self, Error> {
        match value {
            Value::List(values) => values
                .into_iter()
                .map(|value| T::from_value(value, graph))
                .collect(),
            other => mismatch!("expected list, found {}", other.kind()),
        }
    }
}

/// Storage behind a reference or nested object value.
pub(crate) fn object_of(
    value: Value,
    graph: &ProjectGraph,
) -> Result<(Rc<dyn KeyedObject>, Option<ObjectId>), Error> {
    match value {
        Value::Reference(id) => Ok((Rc::clone(graph.object(id)?), Some(id))),
        Value::Object(object) => Ok((object as Rc<dyn KeyedObject>, None)),
        other => mismatch!("expected object, found {}", other.kind()),
    }
}

/// Typed view of one keyed object.
pub trait Codeable<'g>: Sized {
    type Keys: CodingKeys;

    fn delegate(&self) -> &Rc<dyn KeyedObject>;

    fn graph(&self) -> &'g ProjectGraph;

    /// Arena index, `None` for nested objects.
    fn id(&self) -> Option<ObjectId>;

    fn isa(&self) -> &str {
        self.delegate().isa()
    }

    fn global_id(&self) -> Option<&GlobalId> {
        self.delegate().global_id()
    }

    fn encode(&self, context: &mut EncodeContext) -> Result<(), Error> {
        self.delegate().encode(context)
    }

    /// Decodes `key` and converts it to `T`; `Ok(None)` when absent.
    fn try_decode<T: FromValue<'g>>(&self, key: Self::Keys) -> Result<Option<T>, Error> {
        let graph = self.graph();
        match self
            .delegate()
            .try_decode(key.coding_key(), &DecodeContext::new(graph))?
        {
            Some(value) => T::from_value(value, graph).map(Some),
            None => Ok(None),
        }
    }
}

/// Declares an adapter struct with its `Codeable`, `FromValue`, `Debug` and
/// `PartialEq` implementations.
macro_rules! codeable {
    ($(#[$meta:meta])* $name:ident => $keys:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<'g> {
            object: ::std::rc::Rc<dyn $crate::object::KeyedObject>,
            id: ::core::option::Option<$crate::types::ObjectId>,
            graph: &'g $crate::graph::ProjectGraph,
        }

        impl<'g> $name<'g> {
            pub const ISA: &'static str = <$keys as $crate::key::CodingKeys>::FAMILY;
        }

        impl<'g> $crate::codeable::Codeable<'g> for $name<'g> {
            type Keys = $keys;

            fn delegate(&self) -> &::std::rc::Rc<dyn $crate::object::KeyedObject> {
                &self.object
            }

            fn graph(&self) -> &'g $crate::graph::ProjectGraph {
                self.graph
            }

            fn id(&self) -> ::core::option::Option<$crate::types::ObjectId> {
                self.id
            }
        }

        impl<'g> $crate::codeable::FromValue<'g> for $name<'g> {
            fn from_value(
                value: $crate::coder::Value,
                graph: &'g $crate::graph::ProjectGraph,
            ) -> Result<Self, $crate::error::Error> {
                let (object, id) = $crate::codeable::object_of(value, graph)?;
                if object.isa() != Self::ISA {
                    return Err($crate::error::Error::coder_mismatch(format!(
                        "expected {}, found {}",
                        Self::ISA,
                        object.isa()
                    )));
                }
                Ok($name { object, id, graph })
            }
        }

        impl ::std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("global_id", &$crate::codeable::Codeable::global_id(self))
                    .field("object", &self.object)
                    .finish()
            }
        }

        /// Equal when the underlying objects are field-for-field equal.
        impl PartialEq for $name<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.object.base() == other.object.base()
            }
        }
    };
}

pub(crate) use codeable;

/// Declares a closed sum over adapters, dispatching on `isa`.
macro_rules! codeable_sum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($ty:ident)),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name<'g> {
            $($variant($ty<'g>),)*
        }

        impl<'g> $name<'g> {
            /// Type tags this sum accepts.
            pub const ISAS: &'static [&'static str] = &[$($ty::ISA,)*];

            pub fn isa(&self) -> &str {
                match self {
                    $($name::$variant(inner) => $crate::codeable::Codeable::isa(inner),)*
                }
            }

            pub fn global_id(&self) -> Option<&$crate::types::GlobalId> {
                match self {
                    $($name::$variant(inner) => $crate::codeable::Codeable::global_id(inner),)*
                }
            }

            pub fn id(&self) -> Option<$crate::types::ObjectId> {
                match self {
                    $($name::$variant(inner) => $crate::codeable::Codeable::id(inner),)*
                }
            }

            pub fn encode(
                &self,
                context: &mut $crate::resolver::context::EncodeContext,
            ) -> Result<(), $crate::error::Error> {
                match self {
                    $($name::$variant(inner) => $crate::codeable::Codeable::encode(inner, context),)*
                }
            }
        }

        impl<'g> $crate::codeable::FromValue<'g> for $name<'g> {
            fn from_value(
                value: $crate::coder::Value,
                graph: &'g $crate::graph::ProjectGraph,
            ) -> Result<Self, $crate::error::Error> {
                let (object, _) = $crate::codeable::object_of(value.clone(), graph)?;
                let isa = object.isa();
                $(
                    if isa == $ty::ISA {
                        return <$ty<'g> as $crate::codeable::FromValue<'g>>::from_value(value, graph)
                            .map($name::$variant);
                    }
                )*
                Err($crate::error::Error::coder_mismatch(format!(
                    concat!("expected ", stringify!($name), ", found {}"),
                    isa
                )))
            }
        }

        $(
            impl<'g> From<$ty<'g>> for $name<'g> {
                fn from(inner: $ty<'g>) -> Self {
                    $name::$variant(inner)
                }
            }
        )*
    };
}

pub(crate) use codeable_sum;

codeable_sum! {
    /// Any graph object of a known isa.
    PBXObject {
        Project(PBXProject),
        Group(PBXGroup),
        VariantGroup(PBXVariantGroup),
        VersionGroup(XCVersionGroup),
        FileReference(PBXFileReference),
        ReferenceProxy(PBXReferenceProxy),
        BuildFile(PBXBuildFile),
        ContainerItemProxy(PBXContainerItemProxy),
        TargetDependency(PBXTargetDependency),
        NativeTarget(PBXNativeTarget),
        AggregateTarget(PBXAggregateTarget),
        LegacyTarget(PBXLegacyTarget),
        HeadersBuildPhase(PBXHeadersBuildPhase),
        ResourcesBuildPhase(PBXResourcesBuildPhase),
        FrameworksBuildPhase(PBXFrameworksBuildPhase),
        SourcesBuildPhase(PBXSourcesBuildPhase),
        CopyFilesBuildPhase(PBXCopyFilesBuildPhase),
        ShellScriptBuildPhase(PBXShellScriptBuildPhase),
        BuildConfiguration(XCBuildConfiguration),
        ConfigurationList(XCConfigurationList),
        RemoteSwiftPackageReference(XCRemoteSwiftPackageReference),
        SwiftPackageProductDependency(XCSwiftPackageProductDependency),
    }
}

impl fmt::Display for PBXObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.global_id() {
            Some(global_id) => write!(f, "{} {}", self.isa(), global_id),
            None => f.write_str(self.isa()),
        }
    }
}

/// Declares a by-value builder wrapping [`DefaultKeyedObjectBuilder`].
///
/// [`DefaultKeyedObjectBuilder`]: crate::object::DefaultKeyedObjectBuilder
macro_rules! builder {
    (@common $builder:ident for $name:ident) => {
        #[derive(Debug, Clone)]
        pub struct $builder {
            inner: $crate::object::DefaultKeyedObjectBuilder,
        }

        impl $builder {
            pub fn global_id<G: Into<$crate::types::GlobalId>>(mut self, global_id: G) -> Self {
                self.inner.global_id(global_id);
                self
            }

            /// Skips required-key validation.
            pub fn lenient(mut self) -> Self {
                self.inner.lenient();
                self
            }

            pub fn build(&self) -> Result<$crate::object::DefaultKeyedObject, $crate::error::Error> {
                self.inner.build()
            }
        }

        impl $name<'_> {
            pub fn builder() -> $builder {
                $builder::new()
            }
        }
    };
    ($builder:ident for $name:ident) => {
        $crate::codeable::builder!(@common $builder for $name);

        impl $builder {
            /// Builds the object and adds it to `graph`.
            pub fn add_to(
                &self,
                graph: &mut $crate::graph::ProjectGraph,
            ) -> Result<$crate::types::ObjectId, $crate::error::Error> {
                graph.add(self.build()?)
            }
        }
    };
    (nested $builder:ident for $name:ident) => {
        $crate::codeable::builder!(@common $builder for $name);
    };
}

pub(crate) use builder;
