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

use serde::{Serialize, Serializer};

/// Conviction of a rule.
///
/// A rule with confidence 1 has no counter-examples; its conviction is
/// unbounded and carried as [`Conviction::Undefined`] instead of a
/// division by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conviction {
    /// Finite conviction value, >= 0.
    Finite(f64),
    /// Conviction is infinite (confidence = 1).
    Undefined,
}

impl Conviction {
    /// Returns the finite value, or `None` when undefined.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(*value),
            Self::Undefined => None,
        }
    }

    /// Returns true for the undefined sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

// The report schema carries conviction as a float or the string
// "undefined".
impl Serialize for Conviction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(value) => serializer.serialize_f64(*value),
            Self::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

/// Confidence: `support(A ∪ C) / support(A)`.
///
/// The caller guarantees `antecedent_support > 0`.
pub fn confidence(union_support: f64, antecedent_support: f64) -> f64 {
    union_support / antecedent_support
}

/// Lift: `confidence / support(C)`.
///
/// The caller guarantees `consequent_support > 0`.
pub fn lift(confidence: f64, consequent_support: f64) -> f64 {
    confidence / consequent_support
}

/// Conviction: `(1 - support(C)) / (1 - confidence)`.
pub fn conviction(confidence: f64, consequent_support: f64) -> Conviction {
    if confidence >= 1.0 {
        Conviction::Undefined
    } else {
        Conviction::Finite((1.0 - consequent_support) / (1.0 - confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_a_support_ratio() {
        assert_eq!(confidence(0.5, 1.0), 0.5);
        assert_eq!(confidence(0.25, 0.5), 0.5);
    }

    #[test]
    fn lift_one_means_independence() {
        let conf = confidence(0.25, 0.5);
        assert_eq!(lift(conf, 0.5), 1.0);
        assert!(lift(0.9, 0.5) > 1.0);
    }

    #[test]
    fn conviction_at_full_confidence_is_undefined() {
        assert!(conviction(1.0, 0.5).is_undefined());
        assert_eq!(conviction(1.0, 0.5).as_f64(), None);
    }

    #[test]
    fn conviction_is_finite_below_full_confidence() {
        // (1 - 0.4) / (1 - 0.8) = 3.0
        let conviction = conviction(0.8, 0.4);
        let value = conviction.as_f64().unwrap();
        assert!((value - 3.0).abs() < 1e-12);
    }

    #[test]
    fn conviction_with_universal_consequent_is_zero() {
        assert_eq!(conviction(0.5, 1.0), Conviction::Finite(0.0));
    }

    #[test]
    fn conviction_serializes_as_float_or_sentinel() {
        assert_eq!(
            serde_json::to_string(&Conviction::Finite(2.5)).unwrap(),
            "2.5"
        );
        assert_eq!(
            serde_json::to_string(&Conviction::Undefined).unwrap(),
            "\"undefined\""
        );
    }
}
