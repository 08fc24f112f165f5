//! # AromaCraft Similarity
//!
//! Flavor-pairing scores over ingredient compound sets.
//!
//! Two ingredients pair well when they share aroma compounds. The score is
//! the Tanimoto (Jaccard) coefficient of their compound-id sets.
//!
//! ## Features
//!
//! - **Tanimoto score**: `|A ∩ B| / |A ∪ B|`, defined as 0.0 for two empty sets
//! - **Explained scores**: shared compounds plus intersection/union sizes
//! - **Pairing ranking**: best partners for a base ingredient
//! - **Similarity matrix**: all-pairs scores, rows computed in parallel
//!
//! ## Example
//!
//! ```rust
//! use aromacraft_core::MolecularProfile;
//! use aromacraft_similarity::{tanimoto, PairingRanker};
//!
//! let basil = MolecularProfile::from_ids("basil", ["Linalool", "Eugenol", "Limonene"]);
//! let lemon = MolecularProfile::from_ids("lemon", ["Linalool", "Limonene"]);
//!
//! let score = tanimoto(&basil, &lemon);
//! assert!((score - 2.0 / 3.0).abs() < 1e-6);
//!
//! let ranked = PairingRanker::new().rank(&basil, &[lemon], 5);
//! assert_eq!(ranked[0].ingredient, "lemon");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Profile A  │────>│  Tanimoto   │────>│  Similarity │
//! │  Profile B  │     │ |A∩B|/|A∪B| │     │   Result    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                     ┌─────────────┐
//!                     │   Pairing   │
//!                     │   Ranker    │
//!                     └─────────────┘
//! ```

pub mod tanimoto;
pub mod pairing;

// Re-export main types for convenience
pub use tanimoto::{tanimoto, score_pair, similarity_matrix};
pub use pairing::{PairingRanker, RankedPairing};
