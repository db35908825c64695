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

//! # Xcode PBX Core
//!
//! This is the core implementation of the `.pbxproj` codec. It reads Xcode's
//! ASCII property-list project files into an object graph, exposes typed
//! views over every object and writes the graph back out.
//!
//! ## Architecture
//!
//! - **`project`**: [`ProjectCodec`], the read/write entry point
//! - **`plist`**: the ASCII plist reader and writer
//! - **`graph`**: [`ProjectGraph`], an arena of objects indexed by global ID
//! - **`object`**: keyed-object storage and its caching and re-encoding decorators
//! - **`key`**: [`CodingKey`] and the [`CodingKeys`] trait behind `#[derive(CodingKeys)]`
//! - **`coder`**: value coders translating wire values to typed [`Value`]s
//! - **`codeable`**: typed adapters (`PBXProject`, `PBXNativeTarget`, ...) and builders
//! - **`resolver`**: the coder registry, global ID allocation and coding contexts
//! - **`types`**: identifiers and enumerations of the object model
//! - **`error`**: the [`Error`] type
//!
//! ## Decoding is lazy
//!
//! Reading only parses the plist and checks the envelope. Each object keeps
//! its fields in wire form, and a getter decodes a field through the coder
//! registered for its key the first time it is asked for, caching the
//! result until the object is replaced. References therefore resolve no
//! matter in which order objects appear, and a dangling reference is only an
//! error when that field is read or written.
//!
//! ```rust
//! use xcode_pbx_core::{from_str, Codeable};
//!
//! let graph = from_str(
//!     "objects = {
//!         1 = { isa = PBXProject; mainGroup = 2; targets = (); };
//!         2 = { isa = PBXGroup; children = (); sourceTree = \"<group>\"; };
//!     };
//!     rootObject = 1;",
//! )
//! .unwrap();
//! let project = graph.root_project().unwrap();
//! let main_group = project.main_group().unwrap().unwrap();
//! assert_eq!(main_group.global_id().unwrap().as_str(), "2");
//! ```

extern crate self as xcode_pbx_core;

pub mod codeable;
pub mod coder;
pub mod config;
pub mod error;
pub mod graph;
pub mod key;
pub mod object;
pub mod plist;
pub mod project;
pub mod resolver;
pub mod types;
pub mod util;

pub use codeable::*;
pub use coder::{BuildSetting, BuildSettings, Value, ValueCoder};
pub use config::Config;
pub use error::Error;
pub use graph::ProjectGraph;
pub use key::{CodingKey, CodingKeys};
pub use object::{DefaultKeyedObject, KeyedObject};
pub use project::{from_str, read, to_string, write, ProjectCodec};
pub use types::{
    GlobalId, ObjectId, ProductType, ProxyType, SourceTree, SubFolder, VersionRequirementKind,
};
