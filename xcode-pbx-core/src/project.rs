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

//! Reading and writing whole project files.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::codeable::PBXProject;
use crate::config::Config;
use crate::error::Error;
use crate::graph::ProjectGraph;
use crate::object::DefaultKeyedObject;
use crate::plist::{self, Dictionary, PlistValue, Writer};
use crate::resolver::coder_resolver::CodingKeyCoders;
use crate::resolver::context::EncodeContext;
use crate::resolver::ref_resolver::GlobalIdResolver;
use crate::types::GlobalId;
use crate::{bail, ensure};

/// The main entry point for reading and writing `.pbxproj` files.
///
/// `ProjectCodec` pairs a [`Config`] with the coder registry graphs it reads
/// decode through. It is cheap to clone and can be reused for any number of
/// files.
///
/// # Examples
///
/// ```rust
/// use xcode_pbx_core::ProjectCodec;
///
/// let codec = ProjectCodec::default().pretty(false);
/// let graph = codec
///     .read_str("{ objects = { 1 = { isa = PBXProject; targets = (); }; }; rootObject = 1; }")
///     .unwrap();
/// let project = graph.root_project().unwrap();
/// assert!(project.targets().unwrap().is_empty());
///
/// let text = codec.write_string(&graph).unwrap();
/// assert!(text.contains("rootObject = 1;"));
/// ```
#[derive(Clone, Debug)]
pub struct ProjectCodec {
    config: Config,
    coders: Arc<CodingKeyCoders>,
}

impl Default for ProjectCodec {
    fn default() -> Self {
        ProjectCodec {
            config: Config::default(),
            coders: CodingKeyCoders::shared(),
        }
    }
}

impl ProjectCodec {
    /// Sets whether output uses Xcode's multi-line layout.
    ///
    /// Defaults to `true`. Compact output puts the whole document on one
    /// line, which is mostly useful in tests and logs.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Sets the archive version written for graphs that do not carry one.
    pub fn archive_version(mut self, version: u32) -> Self {
        self.config.archive_version = version;
        self
    }

    /// Sets the object version written for graphs that do not carry one.
    pub fn object_version(mut self, version: u32) -> Self {
        self.config.object_version = version;
        self
    }

    /// Sets whether wire fields no coding key describes are written back.
    ///
    /// Defaults to `true`. When disabled, only the keys of each object's
    /// isa survive a read/write cycle.
    pub fn preserve_unknown_keys(mut self, preserve: bool) -> Self {
        self.config.preserve_unknown_keys = preserve;
        self
    }

    /// Sets whether a non-dictionary entry in `objects` fails the read.
    ///
    /// Defaults to `true`. When disabled such entries are skipped with a
    /// warning.
    pub fn strict_objects(mut self, strict: bool) -> Self {
        self.config.strict_objects = strict;
        self
    }

    /// Uses a custom coder registry for graphs read by this codec.
    pub fn coders(mut self, coders: Arc<CodingKeyCoders>) -> Self {
        self.coders = coders;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads the project file at `path`.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<ProjectGraph, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;
        self.read_str(&text)
    }

    /// Parses project text into a graph.
    ///
    /// Only the envelope is validated here: `objects` and `rootObject` must be
    /// present, every object needs an `isa`, and the root must resolve to a
    /// `PBXProject`. Object fields stay in wire form until a getter decodes
    /// them, so a dangling reference surfaces when that field is read.
    pub fn read_str(&self, input: &str) -> Result<ProjectGraph, Error> {
        let mut envelope = match plist::from_str(input)? {
            PlistValue::Dictionary(dict) => dict,
            other => bail!("expected a dictionary document, found {}", other.kind()),
        };
        let objects = match envelope.shift_remove("objects") {
            Some(PlistValue::Dictionary(objects)) => objects,
            Some(other) => bail!("`objects` must be a dictionary, found {}", other.kind()),
            None => bail!("missing `objects`"),
        };
        let root = match envelope.shift_remove("rootObject") {
            Some(PlistValue::String(root)) => root,
            Some(other) => bail!("`rootObject` must be a string, found {}", other.kind()),
            None => bail!("missing `rootObject`"),
        };

        let mut graph = ProjectGraph::with_coders(Arc::clone(&self.coders));
        if let Some(version) = envelope.get("archiveVersion").and_then(PlistValue::as_str) {
            graph.set_archive_version(version);
        }
        if let Some(version) = envelope.get("objectVersion").and_then(PlistValue::as_str) {
            graph.set_object_version(version);
        }
        if let Some(PlistValue::Dictionary(classes)) = envelope.shift_remove("classes") {
            graph.set_classes(classes);
        }

        for (global_id, entry) in objects {
            let fields = match entry {
                PlistValue::Dictionary(fields) => fields,
                other => {
                    ensure!(
                        !self.config.is_strict_objects(),
                        "object '{}' must be a dictionary, found {}",
                        global_id,
                        other.kind()
                    );
                    warn!(global_id = %global_id, kind = other.kind(), "skipping non-dictionary object");
                    continue;
                }
            };
            let isa = match fields.get("isa").and_then(PlistValue::as_str) {
                Some(isa) => isa.to_owned(),
                None => bail!("object '{}' has no isa", global_id),
            };
            graph.add(DefaultKeyedObject::from_wire(
                &isa,
                Some(GlobalId::new(global_id)),
                fields,
            ))?;
        }

        let root = graph.resolve(&root)?;
        let root_isa = graph.object(root)?.isa();
        ensure!(
            root_isa == PBXProject::ISA,
            "`rootObject` must be a {}, found {}",
            PBXProject::ISA,
            root_isa
        );
        graph.set_root(root)?;
        debug!(
            objects = graph.len(),
            archive_version = graph.archive_version(),
            object_version = graph.object_version(),
            "read project"
        );
        Ok(graph)
    }

    /// Writes `graph` to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(&self, graph: &ProjectGraph, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let text = self.write_string(graph)?;
        fs::write(path, text)
            .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))
    }

    /// Serializes `graph` to project text.
    ///
    /// Objects built in memory get global IDs allocated in arena order
    /// before anything is encoded, so the output is deterministic. Objects
    /// are written sorted by isa and then global ID, keys with `isa` first
    /// and the rest alphabetically.
    ///
    /// The envelope always carries `archiveVersion`, `classes` and
    /// `objectVersion`, even when the graph was read from a file without
    /// them. Versions missing from the graph come from [`Config`] and missing
    /// classes are written as an empty dictionary, so output for such a file
    /// differs from its input in those three fields.
    pub fn write_string(&self, graph: &ProjectGraph) -> Result<String, Error> {
        let root = graph
            .root()
            .ok_or_else(|| Error::malformed_project("graph has no root object"))?;

        let mut ids = GlobalIdResolver::new(graph);
        for (id, _) in graph.iter() {
            ids.global_id_of(graph, id)?;
        }

        let mut entries = Vec::with_capacity(graph.len());
        for (id, object) in graph.iter() {
            let global_id = ids.global_id_of(graph, id)?;
            let mut context =
                EncodeContext::new(graph, &mut ids, self.config.is_preserve_unknown_keys());
            object.encode(&mut context)?;
            let mut fields = context.into_output();
            if !fields.contains_key("isa") {
                fields.insert("isa".to_owned(), PlistValue::from(object.isa()));
            }
            fields.sort_by(|a, _, b, _| compare_keys(a, b));
            entries.push((object.isa().to_owned(), global_id, fields));
        }
        entries.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

        let mut objects = Dictionary::with_capacity(entries.len());
        for (_, global_id, fields) in entries {
            objects.insert(global_id.to_string(), PlistValue::Dictionary(fields));
        }

        let archive_version = graph
            .archive_version()
            .map(str::to_owned)
            .unwrap_or_else(|| self.config.archive_version().to_string());
        let object_version = graph
            .object_version()
            .map(str::to_owned)
            .unwrap_or_else(|| self.config.object_version().to_string());

        let mut envelope = Dictionary::new();
        envelope.insert("archiveVersion".to_owned(), archive_version.into());
        envelope.insert("classes".to_owned(), graph.classes().clone().into());
        envelope.insert("objectVersion".to_owned(), object_version.into());
        envelope.insert("objects".to_owned(), objects.into());
        envelope.insert(
            "rootObject".to_owned(),
            ids.global_id_of(graph, root)?.to_string().into(),
        );

        let mut writer = Writer::new(self.config.is_pretty());
        writer.write_document(&PlistValue::Dictionary(envelope));
        debug!(objects = graph.len(), bytes = writer.len(), "wrote project");
        Ok(writer.dump())
    }
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a == "isa", b == "isa") {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Reads the project file at `path` with default settings.
pub fn read<P: AsRef<Path>>(path: P) -> Result<ProjectGraph, Error> {
    ProjectCodec::default().read(path)
}

/// Writes `graph` to `path` with default settings.
pub fn write<P: AsRef<Path>>(graph: &ProjectGraph, path: P) -> Result<(), Error> {
    ProjectCodec::default().write(graph, path)
}

/// Parses project text with default settings.
pub fn from_str(input: &str) -> Result<ProjectGraph, Error> {
    ProjectCodec::default().read_str(input)
}

/// Serializes `graph` with default settings.
pub fn to_string(graph: &ProjectGraph) -> Result<String, Error> {
    ProjectCodec::default().write_string(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isa_sorts_first() {
        let mut keys = vec!["name", "children", "isa", "sourceTree"];
        keys.sort_by(|a, b| compare_keys(a, b));
        assert_eq!(keys, ["isa", "children", "name", "sourceTree"]);
    }

    #[test]
    fn missing_envelope_fields() {
        let codec = ProjectCodec::default();
        assert!(matches!(
            codec.read_str("{ rootObject = 1; }"),
            Err(Error::MalformedProject(_))
        ));
        assert!(matches!(
            codec.read_str("{ objects = {}; }"),
            Err(Error::MalformedProject(_))
        ));
    }

    #[test]
    fn root_must_be_a_project() {
        let err = ProjectCodec::default()
            .read_str("{ objects = { 1 = { isa = PBXGroup; children = (); }; }; rootObject = 1; }")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedProject(_)));
        assert!(err.to_string().contains("found PBXGroup"), "{err}");
    }

    #[test]
    fn lenient_objects_skip_scalars() {
        let text = "{ objects = { 1 = { isa = PBXProject; }; 2 = junk; }; rootObject = 1; }";
        assert!(ProjectCodec::default().read_str(text).is_err());
        let graph = ProjectCodec::default()
            .strict_objects(false)
            .read_str(text)
            .unwrap();
        assert_eq!(graph.len(), 1);
    }
}
