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

use std::cmp::Ordering;

use crate::apriori::FrequentItemset;
use crate::encoder::Vocabulary;
use crate::itemset::ItemSet;
use crate::report::{ItemsetRow, Report, RuleRow};
use crate::rules::Rule;

/// Total order over rules: lift, confidence, support descending, then
/// antecedent and consequent canonical form ascending.
fn compare_rules(a: &Rule, b: &Rule) -> Ordering {
    b.lift()
        .total_cmp(&a.lift())
        .then_with(|| b.confidence().total_cmp(&a.confidence()))
        .then_with(|| b.support().total_cmp(&a.support()))
        .then_with(|| a.antecedent().cmp(b.antecedent()))
        .then_with(|| a.consequent().cmp(b.consequent()))
}

/// Total order over itemsets: support descending, then canonical form.
fn compare_itemsets(a: &FrequentItemset, b: &FrequentItemset) -> Ordering {
    b.support()
        .total_cmp(&a.support())
        .then_with(|| a.items().cmp(b.items()))
}

fn resolve_labels(items: &ItemSet, vocabulary: &Vocabulary) -> Vec<String> {
    items
        .items()
        .iter()
        .map(|&item| vocabulary.label(item).to_string())
        .collect()
}

/// Deduplicates, orders, and packages the mining results.
///
/// Pure assembly: metrics and supports are taken as-is from the inputs.
/// Each rule receives a 1-based rank reflecting the total order, and the
/// optional single-item view is a filtered clone of the ranked rows with
/// ranks preserved.
pub fn assemble_report(
    frequent: &[FrequentItemset],
    rules: Vec<Rule>,
    vocabulary: &Vocabulary,
    transaction_count: usize,
    include_single_item_rules: bool,
) -> Report {
    let mut itemsets: Vec<&FrequentItemset> = frequent.iter().collect();
    itemsets.sort_by(|a, b| compare_itemsets(a, b));
    itemsets.dedup_by(|a, b| a.items() == b.items());

    let itemset_rows: Vec<ItemsetRow> = itemsets
        .iter()
        .map(|itemset| ItemsetRow {
            items: resolve_labels(itemset.items(), vocabulary),
            size: itemset.items().len(),
            support: itemset.support(),
        })
        .collect();

    let mut rules = rules;
    rules.sort_by(compare_rules);
    // Duplicate pairs carry identical metrics, so they sort adjacent.
    rules.dedup_by(|a, b| a.antecedent() == b.antecedent() && a.consequent() == b.consequent());

    let rule_rows: Vec<RuleRow> = rules
        .iter()
        .enumerate()
        .map(|(position, rule)| RuleRow {
            rank: position + 1,
            antecedent: resolve_labels(rule.antecedent(), vocabulary),
            consequent: resolve_labels(rule.consequent(), vocabulary),
            support: rule.support(),
            confidence: rule.confidence(),
            lift: rule.lift(),
            conviction: rule.conviction(),
        })
        .collect();

    let single_item_rules = include_single_item_rules.then(|| {
        rules
            .iter()
            .zip(&rule_rows)
            .filter(|(rule, _)| rule.antecedent().len() == 1)
            .map(|(_, row)| row.clone())
            .collect()
    });

    Report {
        transaction_count,
        item_count: vocabulary.len(),
        itemset_count: itemset_rows.len(),
        rule_count: rule_rows.len(),
        itemsets: itemset_rows,
        rules: rule_rows,
        single_item_rules,
    }
}
