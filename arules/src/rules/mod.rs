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

//! Rule derivation and strength-of-association metrics.
//!
//! Every frequent itemset of size two or more is split into every ordered
//! pair of a non-empty antecedent and its complement, and the split is
//! kept as a [`Rule`] when its confidence clears the configured minimum.
//! The four metrics attached to a rule:
//!
//! * **support**: fraction of transactions containing antecedent and
//!   consequent together;
//! * **confidence**: `support(A ∪ C) / support(A)`, the conditional
//!   frequency of the consequent given the antecedent;
//! * **lift**: `confidence / support(C)`, observed co-occurrence against
//!   the expectation under independence (above 1 means positive
//!   association);
//! * **conviction**: `(1 - support(C)) / (1 - confidence)`, undefined at
//!   confidence 1 and represented by a sentinel rather than a division.
//!
//! All arithmetic is double precision with no intermediate rounding, so
//! ranking downstream sees full-precision values. Supports are looked up
//! from the miner's results, never recounted here.

mod generator;
pub use self::generator::Rule;
pub use self::generator::generate_rules;

mod metrics;
pub use self::metrics::Conviction;
pub use self::metrics::confidence;
pub use self::metrics::conviction;
pub use self::metrics::lift;
