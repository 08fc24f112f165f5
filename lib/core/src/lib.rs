//! # AromaCraft Core
//!
//! Core types for the AromaCraft flavor-pairing toolkit.
//!
//! - [`Compound`] - A flavor compound with family/odor metadata
//! - [`MolecularProfile`] - The compound set of one ingredient
//! - [`SimilarityResult`] - Tanimoto score for an unordered ingredient pair
//! - [`RecipeSummary`] / [`RecipeDetail`] - Recipe data
//! - [`SensoryProfile`] / [`HistoryEntry`] - User data
//! - [`screen`] - Typed demo screen transitions
//!
//! ## Example
//!
//! ```rust
//! use aromacraft_core::{Compound, MolecularProfile};
//!
//! let basil = MolecularProfile::new("basil", vec![
//!     Compound::new("mol_001", "Linalool", "Terpenes", "Floral, Sweet"),
//!     Compound::new("mol_003", "Limonene", "Terpenes", "Citrus, Fresh"),
//! ]);
//! assert_eq!(basil.len(), 2);
//! assert!(basil.contains("mol_001"));
//! ```

pub mod error;
pub mod profile;
pub mod recipe;
pub mod score;
pub mod screen;
pub mod user;

pub use error::{Error, Result, require_name};
pub use profile::{Compound, MolecularProfile};
pub use recipe::{Difficulty, Instruction, MeasuredIngredient, RecipeDetail, RecipeSummary};
pub use score::{IngredientPair, SimilarityResult};
pub use screen::{Control, Navigator, Screen};
pub use user::{HistoryEntry, SensoryProfile, TastePreferences, TexturePreferences, MAX_PREFERENCE};
