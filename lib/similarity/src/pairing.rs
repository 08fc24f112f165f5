//! Pairing ranker
//!
//! Scores candidate ingredients against a base ingredient and orders them
//! by compound overlap, best pairing first.

use crate::tanimoto::score_pair;
use aromacraft_core::{MolecularProfile, SimilarityResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A candidate ingredient with its score against the base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPairing {
    pub ingredient: String,
    pub score: f32,
    pub shared_compounds: Vec<String>,
}

impl RankedPairing {
    fn from_result(candidate: &str, result: SimilarityResult) -> Self {
        Self {
            ingredient: candidate.to_string(),
            score: result.score,
            shared_compounds: result.shared_compounds,
        }
    }
}

/// Ranks pairing candidates by Tanimoto score
#[derive(Debug, Clone, Default)]
pub struct PairingRanker {
    min_score: f32,
}

impl PairingRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop candidates scoring below `min_score`
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score.clamp(0.0, 1.0);
        self
    }

    pub fn min_score(&self) -> f32 {
        self.min_score
    }

    /// Rank candidates against the base profile
    ///
    /// # Arguments
    /// * `base` - The ingredient to pair with
    /// * `candidates` - Profiles to score; the base ingredient itself is skipped
    /// * `limit` - Keep at most this many results
    ///
    /// # Returns
    /// Pairings sorted by score descending, ties broken by ingredient name
    pub fn rank(
        &self,
        base: &MolecularProfile,
        candidates: &[MolecularProfile],
        limit: usize,
    ) -> Vec<RankedPairing> {
        let mut results: Vec<RankedPairing> = candidates
            .iter()
            .filter(|candidate| candidate.ingredient() != base.ingredient())
            .map(|candidate| {
                RankedPairing::from_result(candidate.ingredient(), score_pair(base, candidate))
            })
            .filter(|pairing| pairing.score >= self.min_score)
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.ingredient.cmp(&b.ingredient))
        });
        results.truncate(limit);

        results
    }
}
