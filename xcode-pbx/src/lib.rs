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

//! # Xcode PBX
//!
//! Read, query, build and write Xcode `.pbxproj` project files.
//!
//! A project file is an ASCII property list holding a flat table of objects
//! keyed by 24-digit global IDs, with a `rootObject` naming the
//! `PBXProject`. This crate parses that table into a [`ProjectGraph`], gives
//! every object type a typed view with one getter per field, and writes the
//! graph back in Xcode's own layout.
//!
//! ## Reading
//!
//! ```rust
//! use xcode_pbx::ProjectCodec;
//!
//! let graph = ProjectCodec::default()
//!     .read_str("objects = { 1 = { isa = PBXProject; targets = (); }; }; rootObject = 1;")
//!     .unwrap();
//! let project = graph.root_project().unwrap();
//! assert!(project.targets().unwrap().is_empty());
//! ```
//!
//! ## Building
//!
//! Builders validate required keys and can add the object straight to a
//! graph. Objects built in memory get their global IDs when written.
//!
//! ```rust
//! use xcode_pbx::{PBXFileReference, PBXProject, ProjectGraph};
//!
//! let mut graph = ProjectGraph::new();
//! let project = PBXProject::builder().add_to(&mut graph).unwrap();
//! let main = PBXFileReference::builder().path("main.m").add_to(&mut graph).unwrap();
//!
//! let file: PBXFileReference = graph.get(main).unwrap();
//! assert_eq!(file.last_known_file_type().unwrap().as_deref(), Some("sourcecode.c.objc"));
//! assert_eq!(graph.root(), Some(project));
//!
//! let text = xcode_pbx::to_string(&graph).unwrap();
//! assert!(text.starts_with("// !$*UTF8*$!"));
//! ```
//!
//! ## Declaring keys
//!
//! `#[derive(CodingKeys)]` declares a key family for an object type the
//! crate does not know. The generated code refers to `xcode_pbx_core`, so a
//! crate deriving keys depends on it directly.
//!
//! ## Errors
//!
//! Every fallible operation returns [`Error`]. A broken file is
//! `MalformedProject`, a reference to a missing object is
//! `ReferentialIntegrity`, a field of the wrong shape is `CoderMismatch`.

pub use xcode_pbx_core::*;
pub use xcode_pbx_derive::CodingKeys;
