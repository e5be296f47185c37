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

mod common;

use arules::apriori::{FrequentItemset, mine_frequent_itemsets};
use arules::cancellation::CancellationToken;
use arules::encoder;
use arules::error::ErrorKind;
use arules::itemset::ItemSet;
use arules::rules::{Rule, generate_rules};
use common::{market_pairs, pairs};
use googletest::prelude::*;

fn market_frequent() -> Vec<FrequentItemset> {
    let (transactions, vocabulary) = encoder::encode(market_pairs()).unwrap();
    mine_frequent_itemsets(
        &transactions,
        vocabulary.len(),
        0.5,
        None,
        &CancellationToken::new(),
    )
    .unwrap()
}

fn find<'a>(rules: &'a [Rule], antecedent: &ItemSet, consequent: &ItemSet) -> &'a Rule {
    rules
        .iter()
        .find(|rule| rule.antecedent() == antecedent && rule.consequent() == consequent)
        .expect("expected rule not generated")
}

#[gtest]
fn both_directions_of_a_pair_are_distinct_rules() {
    let rules = generate_rules(&market_frequent(), 0.5, None).unwrap();
    expect_that!(rules, len(eq(2)));

    // milk = 0, bread = 1 in first-seen order.
    let milk_bread = find(&rules, &ItemSet::single(0), &ItemSet::single(1));
    expect_that!(milk_bread.confidence(), near(2.0 / 3.0, 1e-12));
    expect_that!(milk_bread.lift(), near(1.0, 1e-12));
    expect_that!(milk_bread.support(), near(2.0 / 3.0, 1e-12));
    expect_that!(milk_bread.conviction().as_f64().unwrap(), near(1.0, 1e-12));

    let bread_milk = find(&rules, &ItemSet::single(1), &ItemSet::single(0));
    expect_that!(bread_milk.confidence(), eq(1.0));
    assert!(bread_milk.conviction().is_undefined());
}

#[gtest]
fn min_confidence_filters_the_pool() {
    let rules = generate_rules(&market_frequent(), 0.8, None).unwrap();
    // Only bread => milk at confidence 1.0 survives.
    expect_that!(rules, len(eq(1)));
    expect_that!(rules[0].antecedent(), eq(&ItemSet::single(1)));

    let rules = generate_rules(&market_frequent(), 0.0, None).unwrap();
    expect_that!(rules, len(eq(2)));
}

#[gtest]
fn min_lift_filters_negatively_associated_rules() {
    // a: 3/4, b: 3/4, {a, b}: 1/2; lift 8/9 in both directions.
    let (transactions, vocabulary) = encoder::encode(pairs(&[
        ("T1", "a"),
        ("T1", "b"),
        ("T2", "a"),
        ("T3", "b"),
        ("T4", "a"),
        ("T4", "b"),
    ]))
    .unwrap();
    let frequent = mine_frequent_itemsets(
        &transactions,
        vocabulary.len(),
        0.5,
        None,
        &CancellationToken::new(),
    )
    .unwrap();

    let unfiltered = generate_rules(&frequent, 0.5, None).unwrap();
    expect_that!(unfiltered, len(eq(2)));
    expect_that!(unfiltered[0].lift(), near(8.0 / 9.0, 1e-12));

    let filtered = generate_rules(&frequent, 0.5, Some(1.0)).unwrap();
    expect_that!(filtered, len(eq(0)));
}

#[test]
fn every_split_of_larger_itemsets_is_enumerated() {
    let (transactions, vocabulary) = encoder::encode(pairs(&[
        ("T1", "a"),
        ("T1", "b"),
        ("T1", "c"),
        ("T2", "a"),
        ("T2", "b"),
        ("T2", "c"),
    ]))
    .unwrap();
    let frequent = mine_frequent_itemsets(
        &transactions,
        vocabulary.len(),
        0.5,
        None,
        &CancellationToken::new(),
    )
    .unwrap();
    let rules = generate_rules(&frequent, 0.0, None).unwrap();

    // Each pair gives 2 splits, the triple gives 6: 3 * 2 + 6 = 12.
    assert_eq!(rules.len(), 12);
    for rule in &rules {
        assert!(!rule.antecedent().is_empty());
        assert!(!rule.consequent().is_empty());
        assert!(rule.antecedent().difference(rule.consequent()) == *rule.antecedent());
        assert_eq!(rule.confidence(), 1.0);
        assert!(rule.conviction().is_undefined());
    }

    // A two-item antecedent from the triple.
    let rule = find(
        &rules,
        &ItemSet::new(vec![0, 1]),
        &ItemSet::single(2),
    );
    assert_eq!(rule.support(), 1.0);
    assert_eq!(rule.lift(), 1.0);
}

#[test]
fn rejects_out_of_range_thresholds() {
    let frequent = market_frequent();
    for min_confidence in [-0.1, 1.5] {
        let err = generate_rules(&frequent, min_confidence, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidThreshold);
    }
    let err = generate_rules(&frequent, 0.5, Some(-1.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidThreshold);
}

#[test]
fn no_itemsets_means_no_rules() {
    assert!(generate_rules(&[], 0.5, None).unwrap().is_empty());
}
