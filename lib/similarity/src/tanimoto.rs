//! Tanimoto (Jaccard) coefficient over compound sets
//!
//! All functions return a similarity score in range [0.0, 1.0] where 1.0 means
//! both ingredients share exactly the same compounds.

use aromacraft_core::{IngredientPair, MolecularProfile, SimilarityResult};
use rayon::prelude::*;

/// Calculate the Tanimoto coefficient between two profiles
///
/// `|A ∩ B| / |A ∪ B|` over compound ids. Two empty profiles score 0.0.
///
/// # Returns
/// Similarity score in [0.0, 1.0]
pub fn tanimoto(a: &MolecularProfile, b: &MolecularProfile) -> f32 {
    let (intersection, union) = overlap_counts(a, b);
    ratio(intersection, union)
}

/// Calculate the Tanimoto coefficient along with the shared compounds
pub fn score_pair(a: &MolecularProfile, b: &MolecularProfile) -> SimilarityResult {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared_compounds: Vec<String> = small
        .compound_ids()
        .filter(|id| large.contains(id))
        .map(str::to_string)
        .collect();

    let intersection_size = shared_compounds.len();
    let union_size = a.len() + b.len() - intersection_size;

    SimilarityResult {
        pair: IngredientPair::new(a.ingredient(), b.ingredient()),
        score: ratio(intersection_size, union_size),
        shared_compounds,
        intersection_size,
        union_size,
    }
}

/// Symmetric matrix of pairwise scores, rows computed in parallel
///
/// `matrix[i][j]` is the score between `profiles[i]` and `profiles[j]`.
pub fn similarity_matrix(profiles: &[MolecularProfile]) -> Vec<Vec<f32>> {
    profiles
        .par_iter()
        .map(|row| profiles.iter().map(|col| tanimoto(row, col)).collect())
        .collect()
}

/// (|A ∩ B|, |A ∪ B|)
fn overlap_counts(a: &MolecularProfile, b: &MolecularProfile) -> (usize, usize) {
    // Probe the smaller set against the larger one
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.compound_ids().filter(|id| large.contains(id)).count();
    (intersection, a.len() + b.len() - intersection)
}

#[inline]
fn ratio(intersection: usize, union: usize) -> f32 {
    if union == 0 {
        0.0
    } else {
        intersection as f32 / union as f32
    }
}
