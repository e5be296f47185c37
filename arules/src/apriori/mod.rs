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

//! Frequent itemset mining.
//!
//! # Overview
//!
//! This module implements the classic level-wise (breadth-first) frequent
//! itemset search from ["Fast Algorithms for Mining Association
//! Rules"](https://www.vldb.org/conf/1994/P487.PDF) by Rakesh Agrawal and
//! Ramakrishnan Srikant, VLDB 1994, commonly known as Apriori.
//!
//! The search exploits the anti-monotonicity of support: the support of an
//! itemset is never larger than the support of any of its subsets, so once
//! an itemset falls below the minimum support, every superset can be
//! pruned without counting. Level `k + 1` candidates are generated only by
//! joining level-`k` frequent itemsets that share a common prefix in
//! canonical order, and a candidate is counted only after every one of its
//! immediate subsets has been verified frequent.
//!
//! Support counting goes through an [`InvertedIndex`] (item id to the
//! sorted list of transactions containing it), built once per run and then
//! read-only: a candidate's support is the size of the intersection of its
//! items' transaction lists. Candidates within a level are independent, so
//! their counting is fanned out across threads.
//!
//! # Determinism
//!
//! Candidates are generated in ascending canonical item-index order and
//! results are emitted level by level in that order, so identical input
//! and configuration reproduce the identical itemset sequence.
//!
//! # Examples
//!
//! ```
//! # use arules::apriori;
//! # use arules::cancellation::CancellationToken;
//! # use arules::encoder;
//! let pairs = [("t1", "milk"), ("t1", "bread"), ("t2", "milk"), ("t2", "bread"), ("t3", "milk")];
//! let (transactions, vocabulary) = encoder::encode(pairs)?;
//! let frequent = apriori::mine_frequent_itemsets(
//!     &transactions,
//!     vocabulary.len(),
//!     0.5,
//!     None,
//!     &CancellationToken::new(),
//! )?;
//! assert_eq!(frequent.len(), 3); // {milk}, {bread}, {milk, bread}
//! # Ok::<(), arules::Error>(())
//! ```

mod inverted_index;
pub use self::inverted_index::InvertedIndex;

mod miner;
pub use self::miner::FrequentItemset;
pub use self::miner::mine_frequent_itemsets;
