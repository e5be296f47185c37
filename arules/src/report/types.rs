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

use serde::Serialize;

use crate::rules::Conviction;

/// A frequent itemset row, with item labels resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsetRow {
    /// Item labels in canonical (index) order.
    pub items: Vec<String>,
    /// Number of items.
    pub size: usize,
    /// Fraction of transactions containing the itemset.
    pub support: f64,
}

/// A ranked rule row, with item labels resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRow {
    /// 1-based position in the report's total order.
    pub rank: usize,
    /// Antecedent labels in canonical order.
    pub antecedent: Vec<String>,
    /// Consequent labels in canonical order.
    pub consequent: Vec<String>,
    /// Support of antecedent and consequent together.
    pub support: f64,
    /// Conditional frequency of the consequent given the antecedent.
    pub confidence: f64,
    /// Observed over expected co-occurrence.
    pub lift: f64,
    /// Directional strength; serializes as a float or `"undefined"`.
    pub conviction: Conviction,
}

/// The immutable result bundle of one mining run.
///
/// Consumable as-is by an external exporter; the crate defines the field
/// set, not any file layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of transactions mined.
    pub transaction_count: usize,
    /// Number of distinct items.
    pub item_count: usize,
    /// Number of frequent itemsets found.
    pub itemset_count: usize,
    /// Number of rules emitted.
    pub rule_count: usize,
    /// Frequent itemsets, support descending then canonical form.
    pub itemsets: Vec<ItemsetRow>,
    /// Rules in rank order.
    pub rules: Vec<RuleRow>,
    /// The single-item-antecedent subset of `rules`, ranks preserved.
    /// Present only when requested in the configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_item_rules: Option<Vec<RuleRow>>,
}
