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

/// Archive version written when the graph was not read from a file carrying one.
pub const DEFAULT_ARCHIVE_VERSION: u32 = 1;

/// Object version written when the graph was not read from a file carrying one.
pub const DEFAULT_OBJECT_VERSION: u32 = 46;

/// Configuration for reading and writing project files.
///
/// This struct is owned by [`ProjectCodec`](crate::project::ProjectCodec) and
/// shared with the reader and writer so both sides agree on the options.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether output uses Xcode's multi-line, tab-indented layout.
    pub pretty: bool,
    /// Archive version emitted when the graph does not carry one.
    pub archive_version: u32,
    /// Object version emitted when the graph does not carry one.
    pub object_version: u32,
    /// Whether wire fields with no coding key are written back verbatim.
    pub preserve_unknown_keys: bool,
    /// Whether a non-dictionary entry in `objects` is a malformed project.
    /// When disabled such entries are skipped with a warning.
    pub strict_objects: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pretty: true,
            archive_version: DEFAULT_ARCHIVE_VERSION,
            object_version: DEFAULT_OBJECT_VERSION,
            preserve_unknown_keys: true,
            strict_objects: true,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if pretty output is enabled.
    #[inline(always)]
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Get the fallback archive version.
    #[inline(always)]
    pub fn archive_version(&self) -> u32 {
        self.archive_version
    }

    /// Get the fallback object version.
    #[inline(always)]
    pub fn object_version(&self) -> u32 {
        self.object_version
    }

    /// Check if unknown wire fields are preserved on write.
    #[inline(always)]
    pub fn is_preserve_unknown_keys(&self) -> bool {
        self.preserve_unknown_keys
    }

    /// Check if malformed `objects` entries abort the read.
    #[inline(always)]
    pub fn is_strict_objects(&self) -> bool {
        self.strict_objects
    }
}
