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

//! Error type shared by every layer of the codec.
//!
//! Three failure families are distinguished so callers can tell "the file is
//! broken" from "the file references something that does not exist" from
//! "a field was read with the wrong coder":
//!
//! - [`Error::MalformedProject`]: unparseable plist syntax or a missing envelope
//!   field (`objects`, `rootObject`). Aborts the read.
//! - [`Error::ReferentialIntegrity`]: a reference names a global ID that is not
//!   in the graph. Raised lazily, when the field is decoded or encoded.
//! - [`Error::CoderMismatch`]: no coder is registered for a key, or the wire
//!   value does not have the shape the coder expects.
//!
//! Absent optional fields are never errors.

use std::borrow::Cow;
use std::io;

use thiserror::Error;

/// Compile-time switch, set `PBX_PANIC_ON_ERROR=1` when building to panic where
/// an error is created instead of returning it.
pub const PANIC_ON_ERROR: bool = option_env!("PBX_PANIC_ON_ERROR").is_some();

/// Check if PBX_PANIC_ON_ERROR was set at compile time.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for reading, decoding, encoding and writing project files.
///
/// # IMPORTANT: Always Use Static Constructor Functions
///
/// Do not construct variants directly; use the constructor functions, which
/// accept anything convertible into `Cow<'static, str>` and honour
/// `PBX_PANIC_ON_ERROR`.
///
/// ```rust
/// use xcode_pbx_core::error::Error;
///
/// let err = Error::malformed_project("missing `rootObject`");
/// let err = Error::referential_integrity("0A1B2C");
/// let err = Error::coder_mismatch(format!("expected {}, found {}", "string", "list"));
/// ```
///
/// ## Debug Mode: PBX_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 PBX_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Structural parse failure.
    ///
    /// Do not construct this variant directly; use [`Error::malformed_project`] instead.
    #[error("malformed project: {0}")]
    MalformedProject(Cow<'static, str>),

    /// A reference names a global ID absent from the graph.
    ///
    /// Do not construct this variant directly; use [`Error::referential_integrity`] instead.
    #[error("referential integrity: no object with global ID '{0}'")]
    ReferentialIntegrity(Cow<'static, str>),

    /// Missing coder, or wire value of the wrong shape for its coder.
    ///
    /// Do not construct this variant directly; use [`Error::coder_mismatch`] instead.
    #[error("coder mismatch: {0}")]
    CoderMismatch(Cow<'static, str>),

    /// A builder was asked to build an object missing a required key.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_object`] instead.
    #[error("invalid object: {0}")]
    InvalidObject(Cow<'static, str>),

    /// Reading or writing the project file failed.
    ///
    /// Do not construct this variant directly; use [`Error::io`] instead.
    #[error("{context}: {source}")]
    Io {
        context: Cow<'static, str>,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Creates a new [`Error::MalformedProject`].
    ///
    /// # Example
    /// ```
    /// use xcode_pbx_core::error::Error;
    ///
    /// let err = Error::malformed_project("unexpected `}` at line 3, column 1");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn malformed_project<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::MalformedProject(s.into());
        if PANIC_ON_ERROR {
            panic!("PBX_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::ReferentialIntegrity`] for the dangling global ID.
    ///
    /// # Example
    /// ```
    /// use xcode_pbx_core::error::Error;
    ///
    /// let err = Error::referential_integrity("E4B69B4C0A3A1720003C02F2");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn referential_integrity<S: Into<Cow<'static, str>>>(global_id: S) -> Self {
        let err = Error::ReferentialIntegrity(global_id.into());
        if PANIC_ON_ERROR {
            panic!("PBX_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::CoderMismatch`].
    ///
    /// # Example
    /// ```
    /// use xcode_pbx_core::error::Error;
    ///
    /// let err = Error::coder_mismatch("no coder registered for PBXBuildFile.fileRef");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn coder_mismatch<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::CoderMismatch(s.into());
        if PANIC_ON_ERROR {
            panic!("PBX_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidObject`].
    ///
    /// # Example
    /// ```
    /// use xcode_pbx_core::error::Error;
    ///
    /// let err = Error::invalid_object("PBXFileReference requires `path`");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_object<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidObject(s.into());
        if PANIC_ON_ERROR {
            panic!("PBX_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Io`], naming what was being done.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn io<S: Into<Cow<'static, str>>>(context: S, source: io::Error) -> Self {
        let err = Error::Io {
            context: context.into(),
            source,
        };
        if PANIC_ON_ERROR {
            panic!("PBX_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Appends the field that was being processed to a coder mismatch message.
    ///
    /// Other variants are returned unchanged.
    #[inline(never)]
    pub fn with_field(self, family: &str, name: &str) -> Error {
        match self {
            Error::CoderMismatch(s) => {
                Error::CoderMismatch(format!("{s} (field: {family}.{name})").into())
            }
            err => err,
        }
    }
}

/// Ensures a condition is true; otherwise returns a [`Error::MalformedProject`]
/// or the given error.
///
/// # Examples
/// ```
/// use xcode_pbx_core::ensure;
/// use xcode_pbx_core::error::Error;
///
/// fn check_version(v: u32) -> Result<(), Error> {
///     ensure!(v > 0, "archive version must be positive");
///     ensure!(v < 10, "archive version {} too large", v);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::malformed_project($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::malformed_project(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with a [`Error::MalformedProject`].
///
/// # Examples
/// ```
/// use xcode_pbx_core::bail;
/// use xcode_pbx_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("missing `objects`");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::malformed_project($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::malformed_project(format!($fmt, $($arg)*)))
    };
}

/// Returns early with a [`Error::CoderMismatch`].
///
/// # Examples
/// ```
/// use xcode_pbx_core::mismatch;
/// use xcode_pbx_core::error::Error;
///
/// fn expect_string(kind: &str) -> Result<(), Error> {
///     mismatch!("expected string, found {}", kind);
/// }
/// ```
#[macro_export]
macro_rules! mismatch {
    ($err:expr) => {
        return Err($crate::error::Error::coder_mismatch($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::coder_mismatch(format!($fmt, $($arg)*)))
    };
}
