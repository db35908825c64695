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

mod file_types;
mod hash;

pub use file_types::{
    identifier_for_extension, infer_file_type, FileTypeField,
    EXPLICIT_FILE_TYPE_BROKEN_IDENTIFIERS, MODIFIABLE_FILE_TYPE_IDENTIFIERS,
};
pub use hash::murmurhash3_x64_128;

/// Global flag set when `ENABLE_PBX_DEBUG_OUTPUT` is present at compile time.
/// Enables extra per-field tracing in the decode and encode paths.
pub const ENABLE_PBX_DEBUG_OUTPUT: bool = option_env!("ENABLE_PBX_DEBUG_OUTPUT").is_some();
