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

//! Transaction encoding.
//!
//! Converts a raw sequence of `(transaction key, item label)` string pairs
//! into the two structures the miner consumes: a [`Vocabulary`] mapping
//! labels to dense [`ItemId`](crate::itemset::ItemId) indices in first-seen
//! order, and a [`TransactionSet`] holding each transaction's item set.
//!
//! Input rows are tolerated, not trusted: every incoming cell is treated as
//! an opaque label, and rows with an empty or whitespace-only key or label
//! are discarded as invalid rather than failing the run. Duplicate items
//! within a transaction collapse to a single occurrence; presence is what
//! matters, not count. Only when nothing usable remains does encoding fail,
//! with [`ErrorKind::EmptyInput`](crate::error::ErrorKind::EmptyInput).
//!
//! # Examples
//!
//! ```
//! # use arules::encoder;
//! let pairs = [("t1", "milk"), ("t1", "bread"), ("t2", "milk")];
//! let (transactions, vocabulary) = encoder::encode(pairs)?;
//! assert_eq!(transactions.len(), 2);
//! assert_eq!(vocabulary.len(), 2);
//! assert_eq!(vocabulary.label(0), "milk");
//! # Ok::<(), arules::Error>(())
//! ```

mod transactions;
pub use self::transactions::TransactionSet;
pub use self::transactions::encode;

mod vocabulary;
pub use self::vocabulary::Vocabulary;
