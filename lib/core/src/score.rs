use serde::{Deserialize, Serialize};

/// An unordered pair of ingredient names
///
/// Names are stored in ascending order so `(a, b)` and `(b, a)` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IngredientPair {
    first: String,
    second: String,
}

impl IngredientPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.first == ingredient || self.second == ingredient
    }
}

#[derive(Deserialize)]
struct PairRepr {
    first: String,
    second: String,
}

impl<'de> Deserialize<'de> for IngredientPair {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = PairRepr::deserialize(deserializer)?;
        Ok(IngredientPair::new(repr.first, repr.second))
    }
}

/// Tanimoto score for one ingredient pair, with the counts behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub pair: IngredientPair,
    /// Always within [0.0, 1.0]
    pub score: f32,
    /// Compound ids present in both profiles, ascending
    pub shared_compounds: Vec<String>,
    pub intersection_size: usize,
    pub union_size: usize,
}
