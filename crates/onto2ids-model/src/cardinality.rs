// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property cardinality and its two IDS encodings
//!
//! The ontology states an optional minimum and maximum count per property.
//! IDS 0.9.6 only knows `minOccurs` plus a `maxOccurs` of either `0` or
//! `unbounded`; IDS 1.0 collapses everything into
//! `prohibited`/`optional`/`required`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinality bounds as stated by the ontology
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cardinality {
    pub min: Option<u32>,
    /// `None` means unbounded
    pub max: Option<u32>,
}

impl Cardinality {
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Whether the property must not occur at all
    pub fn is_prohibited(&self) -> bool {
        self.max == Some(0)
    }

    /// IDS 1.0 encoding
    pub fn status(&self) -> CardinalityStatus {
        if self.is_prohibited() {
            CardinalityStatus::Prohibited
        } else if self.min.unwrap_or(0) == 0 {
            CardinalityStatus::Optional
        } else {
            CardinalityStatus::Required
        }
    }

    /// IDS 0.9.6 encoding
    ///
    /// Any maximum other than zero is written as `unbounded`, the only other
    /// value that schema allows.
    pub fn occurs(&self) -> Occurs {
        Occurs {
            min: self.min.unwrap_or(0),
            max: if self.is_prohibited() {
                MaxOccurs::Zero
            } else {
                MaxOccurs::Unbounded
            },
        }
    }
}

/// Categorical cardinality of IDS 1.0 facets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalityStatus {
    Prohibited,
    Optional,
    Required,
}

impl CardinalityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardinalityStatus::Prohibited => "prohibited",
            CardinalityStatus::Optional => "optional",
            CardinalityStatus::Required => "required",
        }
    }
}

impl fmt::Display for CardinalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound of IDS 0.9.6 occurs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaxOccurs {
    Zero,
    Unbounded,
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxOccurs::Zero => f.write_str("0"),
            MaxOccurs::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Numeric occurs of IDS 0.9.6 facets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurs {
    pub min: u32,
    pub max: MaxOccurs,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: [Option<u32>; 3] = [None, Some(0), Some(2)];

    #[test]
    fn test_status_table() {
        for min in BOUNDS {
            for max in BOUNDS {
                let expected = match (min, max) {
                    (_, Some(0)) => CardinalityStatus::Prohibited,
                    (None | Some(0), _) => CardinalityStatus::Optional,
                    _ => CardinalityStatus::Required,
                };
                assert_eq!(
                    Cardinality::new(min, max).status(),
                    expected,
                    "min={min:?} max={max:?}"
                );
            }
        }
    }

    #[test]
    fn test_zero_max_always_prohibited() {
        for min in [None, Some(0), Some(1), Some(7)] {
            assert_eq!(
                Cardinality::new(min, Some(0)).status(),
                CardinalityStatus::Prohibited
            );
        }
    }

    #[test]
    fn test_occurs_max_is_lossy() {
        let occurs = Cardinality::new(Some(1), Some(3)).occurs();
        assert_eq!(occurs.min, 1);
        assert_eq!(occurs.max, MaxOccurs::Unbounded);

        let occurs = Cardinality::new(None, None).occurs();
        assert_eq!(occurs.min, 0);
        assert_eq!(occurs.max.to_string(), "unbounded");
    }

    #[test]
    fn test_occurs_keeps_min_when_prohibited() {
        let occurs = Cardinality::new(Some(1), Some(0)).occurs();
        assert_eq!(occurs.min, 1);
        assert_eq!(occurs.max.to_string(), "0");
    }
}
