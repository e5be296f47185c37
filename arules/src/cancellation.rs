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

//! Cooperative cancellation.
//!
//! The miner checks for cancellation between search levels and aborts with
//! [`ErrorKind::Cancelled`](crate::error::ErrorKind::Cancelled) rather than
//! returning a partial report. The crate defines no cancellation transport
//! of its own; callers flip the token from wherever their deadline or
//! user-abort signal lives.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation signal honored by long-running mining stages.
pub trait Cancellable {
    /// Check whether cancellation has been requested.
    fn is_cancelled(&self) -> bool;

    /// Request cancellation.
    fn cancel(&self);
}

/// Default [`Cancellable`] implementation wrapping an `AtomicBool`.
///
/// Clones share the underlying flag, so one handle can be kept by the
/// caller while another travels into the mining run.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token in the not-cancelled state.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
