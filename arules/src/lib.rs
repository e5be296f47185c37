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

//! Association rule mining over transactional data.
//!
//! # Overview
//!
//! Given a sequence of `(transaction key, item label)` pairs, this crate
//! discovers item combinations that occur together often enough to be
//! interesting (frequent itemsets, via the Apriori level-wise search) and
//! turns them into directional "if A then B" rules scored by support,
//! confidence, lift, and conviction. Results come back as an immutable,
//! deterministically ordered [`Report`]: identical input and configuration
//! reproduce the identical report.
//!
//! The crate is the computational core only. Reading spreadsheets or
//! delimited files, guessing which columns hold transaction and item
//! identifiers, rendering reports into workbooks, and any transport are
//! left to callers.
//!
//! # Examples
//!
//! ```
//! use arules::MiningConfig;
//!
//! let pairs = [
//!     ("t1", "milk"),
//!     ("t1", "bread"),
//!     ("t2", "milk"),
//!     ("t2", "bread"),
//!     ("t3", "milk"),
//! ];
//! let config = MiningConfig {
//!     min_support: 0.5,
//!     min_confidence: 0.5,
//!     ..MiningConfig::default()
//! };
//! let report = arules::mine(pairs, &config)?;
//! assert_eq!(report.transaction_count, 3);
//! assert_eq!(report.itemset_count, 3); // {milk}, {bread}, {milk, bread}
//! # Ok::<(), arules::Error>(())
//! ```
//!
//! # Cancellation
//!
//! Long runs can be aborted cooperatively between search levels:
//!
//! ```
//! use arules::MiningConfig;
//! use arules::cancellation::{Cancellable, CancellationToken};
//! use arules::error::ErrorKind;
//!
//! let token = CancellationToken::new();
//! token.cancel();
//! let result = arules::mine_cancellable(
//!     [("t1", "milk"), ("t2", "milk")],
//!     &MiningConfig::default(),
//!     &token,
//! );
//! assert_eq!(result.unwrap_err().kind(), ErrorKind::Cancelled);
//! ```

pub mod apriori;
pub mod cancellation;
pub mod config;
pub mod encoder;
pub mod error;
pub mod itemset;
pub mod pipeline;
pub mod report;
pub mod rules;

pub use self::config::MiningConfig;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::pipeline::mine;
pub use self::pipeline::mine_cancellable;
pub use self::report::Report;
