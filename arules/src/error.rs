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

//! Error type for the mining pipeline.
//!
//! All three error kinds are terminal for the current invocation: they are
//! deterministic functions of the input and configuration, so nothing is
//! retried internally and a partial [`Report`](crate::report::Report) is
//! never returned alongside one.

/// Category of a mining failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A configuration value is outside its valid range.
    InvalidThreshold,
    /// No usable transactions or items remain after encoding.
    EmptyInput,
    /// The run was cancelled by the caller's cancellation signal.
    Cancelled,
}

/// Error returned by the mining pipeline.
///
/// Carries a distinguishable [`ErrorKind`] plus a human-readable detail
/// string. Translating these into user-facing messages is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable detail string.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn invalid_threshold(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidThreshold,
            message: message.into(),
        }
    }

    pub(crate) fn empty_input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::EmptyInput,
            message: message.into(),
        }
    }

    pub(crate) fn cancelled() -> Self {
        Self {
            kind: ErrorKind::Cancelled,
            message: "mining cancelled before completion".to_string(),
        }
    }
}
