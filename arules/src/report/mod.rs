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

//! Result ranking and assembly.
//!
//! The final stage deduplicates, orders, and packages everything the
//! earlier stages produced into an immutable [`Report`]. Nothing is
//! computed here beyond ordering and label resolution; in particular,
//! metrics are never recomputed.
//!
//! Rules are ordered by lift descending, then confidence descending, then
//! support descending, then antecedent canonical form, then consequent
//! canonical form. The last key makes the order total (one antecedent can
//! produce several consequents with identical metrics), so ranks are
//! reproducible: identical input and configuration yield a byte-identical
//! serialized report. Itemsets are ordered by support descending, then
//! canonical form.

mod ranking;
pub use self::ranking::assemble_report;

mod types;
pub use self::types::ItemsetRow;
pub use self::types::Report;
pub use self::types::RuleRow;
