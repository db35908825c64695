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

//! Identity handles and the enum-like value types carried by PBX fields.

use std::borrow::Borrow;
use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Stable string token identifying an object within a project file.
///
/// Equality and hashing are exact string comparisons; no case folding or
/// other normalization is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalId(String);

impl GlobalId {
    pub fn new<S: Into<String>>(id: S) -> GlobalId {
        GlobalId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GlobalId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GlobalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GlobalId {
    fn from(id: &str) -> Self {
        GlobalId(id.to_owned())
    }
}

impl From<String> for GlobalId {
    fn from(id: String) -> Self {
        GlobalId(id)
    }
}

/// Index of an object in a [`ProjectGraph`](crate::graph::ProjectGraph) arena.
///
/// References between objects are stored as `ObjectId`s, so resolving one is
/// an index lookup and cycles need no special handling. An id is only
/// meaningful for the graph that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

const PRODUCT_TYPE_PREFIX: &str = "com.apple.product-type.";

macro_rules! product_types {
    ($($variant:ident => ($suffix:literal, $extension:expr)),* $(,)?) => {
        /// Product type of a target, spelled `com.apple.product-type.*` on the wire.
        ///
        /// Identifiers outside the known table are kept verbatim in
        /// [`ProductType::Other`] so they round-trip unchanged.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum ProductType {
            $($variant,)*
            Other(String),
        }

        impl ProductType {
            /// Every known product type, in table order.
            pub const KNOWN: &'static [ProductType] = &[$(ProductType::$variant,)*];

            pub fn of(identifier: &str) -> ProductType {
                match identifier.strip_prefix(PRODUCT_TYPE_PREFIX) {
                    $(Some($suffix) => ProductType::$variant,)*
                    _ => ProductType::Other(identifier.to_owned()),
                }
            }

            pub fn identifier(&self) -> String {
                match self {
                    $(ProductType::$variant => concat!("com.apple.product-type.", $suffix).to_owned(),)*
                    ProductType::Other(identifier) => identifier.clone(),
                }
            }

            /// Wrapper extension of the built product, `None` for tools and
            /// unknown types.
            pub fn file_extension(&self) -> Option<&'static str> {
                match self {
                    $(ProductType::$variant => $extension,)*
                    ProductType::Other(_) => None,
                }
            }
        }
    };
}

product_types! {
    Application => ("application", Some("app")),
    Framework => ("framework", Some("framework")),
    StaticFramework => ("framework.static", Some("framework")),
    XcFramework => ("xcframework", Some("xcframework")),
    DynamicLibrary => ("library.dynamic", Some("dylib")),
    StaticLibrary => ("library.static", Some("a")),
    Bundle => ("bundle", Some("bundle")),
    UnitTestBundle => ("bundle.unit-test", Some("xctest")),
    UiTestBundle => ("bundle.ui-testing", Some("xctest")),
    AppExtension => ("app-extension", Some("appex")),
    CommandLineTool => ("tool", None),
    WatchApp => ("application.watchapp", Some("app")),
    Watch2App => ("application.watchapp2", Some("app")),
    Watch2AppContainer => ("application.watchapp2-container", Some("app")),
    WatchExtension => ("watchkit-extension", Some("appex")),
    Watch2Extension => ("watchkit2-extension", Some("appex")),
    TvExtension => ("tv-app-extension", Some("appex")),
    MessagesApplication => ("application.messages", Some("app")),
    MessagesExtension => ("app-extension.messages", Some("appex")),
    StickerPack => ("app-extension.messages-sticker-pack", Some("appex")),
    XpcService => ("xpc-service", Some("xpc")),
    OcUnitTestBundle => ("bundle.ocunit-test", Some("octest")),
    XcodeExtension => ("xcode-extension", Some("appex")),
    InstrumentsPackage => ("instruments-package", Some("instrpkg")),
    IntentsServiceExtension => ("app-extension.intents-service", Some("appex")),
    OnDemandInstallCapableApplication => ("application.on-demand-install-capable", Some("app")),
    MetalLibrary => ("metal-library", Some("metallib")),
    DriverExtension => ("driver-extension", Some("dext")),
    SystemExtension => ("system-extension", Some("systemextension")),
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

/// Anchor a file element's path is relative to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceTree {
    Absolute,
    Group,
    SourceRoot,
    BuiltProductsDir,
    SdkRoot,
    DeveloperDir,
    /// Any other build setting, e.g. `PLATFORM_DIR`.
    BuildSetting(String),
}

impl SourceTree {
    pub fn of(value: &str) -> SourceTree {
        match value {
            "<absolute>" => SourceTree::Absolute,
            "<group>" => SourceTree::Group,
            "SOURCE_ROOT" => SourceTree::SourceRoot,
            "BUILT_PRODUCTS_DIR" => SourceTree::BuiltProductsDir,
            "SDKROOT" => SourceTree::SdkRoot,
            "DEVELOPER_DIR" => SourceTree::DeveloperDir,
            other => SourceTree::BuildSetting(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SourceTree::Absolute => "<absolute>",
            SourceTree::Group => "<group>",
            SourceTree::SourceRoot => "SOURCE_ROOT",
            SourceTree::BuiltProductsDir => "BUILT_PRODUCTS_DIR",
            SourceTree::SdkRoot => "SDKROOT",
            SourceTree::DeveloperDir => "DEVELOPER_DIR",
            SourceTree::BuildSetting(name) => name,
        }
    }
}

impl fmt::Display for SourceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `proxyType` of a `PBXContainerItemProxy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ProxyType {
    TargetReference = 1,
    Reference = 2,
}

/// `dstSubfolderSpec` of a `PBXCopyFilesBuildPhase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum SubFolder {
    AbsolutePath = 0,
    Wrapper = 1,
    Executables = 6,
    Resources = 7,
    Frameworks = 10,
    SharedFrameworks = 11,
    SharedSupport = 12,
    PlugIns = 13,
    JavaResources = 15,
    ProductsDirectory = 16,
}

/// Discriminant of a Swift package version requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VersionRequirementKind {
    Branch,
    Exact,
    Range,
    Revision,
    UpToNextMajorVersion,
    UpToNextMinorVersion,
}

impl VersionRequirementKind {
    pub const ALL: [VersionRequirementKind; 6] = [
        VersionRequirementKind::Branch,
        VersionRequirementKind::Exact,
        VersionRequirementKind::Range,
        VersionRequirementKind::Revision,
        VersionRequirementKind::UpToNextMajorVersion,
        VersionRequirementKind::UpToNextMinorVersion,
    ];

    pub fn of(value: &str) -> Option<VersionRequirementKind> {
        match value {
            "branch" => Some(VersionRequirementKind::Branch),
            "exactVersion" => Some(VersionRequirementKind::Exact),
            "versionRange" => Some(VersionRequirementKind::Range),
            "revision" => Some(VersionRequirementKind::Revision),
            "upToNextMajorVersion" => Some(VersionRequirementKind::UpToNextMajorVersion),
            "upToNextMinorVersion" => Some(VersionRequirementKind::UpToNextMinorVersion),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VersionRequirementKind::Branch => "branch",
            VersionRequirementKind::Exact => "exactVersion",
            VersionRequirementKind::Range => "versionRange",
            VersionRequirementKind::Revision => "revision",
            VersionRequirementKind::UpToNextMajorVersion => "upToNextMajorVersion",
            VersionRequirementKind::UpToNextMinorVersion => "upToNextMinorVersion",
        }
    }
}

impl fmt::Display for VersionRequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
