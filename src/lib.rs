//! # AromaCraft
//!
//! Molecular food pairing: which ingredients share flavor compounds, and
//! which recipes use them.
//!
//! Ingredient compound profiles come from FlavorDB, recipes from RecipeDB
//! and user data from Foodoscope. Ingredients are compared with the Tanimoto
//! coefficient over their compound id sets. When an upstream is unreachable
//! the default `fallback` mode answers from fixed sample data instead.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install aromacraft
//! aromacraft serve --http-port 7070
//! ```
//!
//! ### From the Command Line
//!
//! ```bash
//! aromacraft --mode sample similarity basil lemon
//! aromacraft pairings basil tomato lemon clove --limit 2
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use aromacraft::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let service = AromaService::from_config(&SourcesConfig::from_env()?)?;
//!
//! let result = service.similarity_between("basil", "tomato").await?;
//! println!("{} shared compounds, score {:.3}", result.shared_compounds.len(), result.score);
//!
//! let recipes = service.search_recipes(&["tomato".into(), "basil".into()]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`aromacraft-core`](https://docs.rs/aromacraft-core) - Data model, errors, screen transitions
//! - [`aromacraft-similarity`](https://docs.rs/aromacraft-similarity) - Tanimoto scoring and pairing ranker
//! - [`aromacraft-sources`](https://docs.rs/aromacraft-sources) - Upstream clients, sample data, service facade
//! - [`aromacraft-api`](https://docs.rs/aromacraft-api) - REST API

// Re-export core types
pub use aromacraft_core::{
    Compound, MolecularProfile,
    IngredientPair, SimilarityResult,
    Difficulty, RecipeSummary, RecipeDetail, MeasuredIngredient, Instruction,
    SensoryProfile, TastePreferences, TexturePreferences, HistoryEntry,
    Control, Navigator, Screen,
    Error, Result,
};

// Re-export scoring
pub use aromacraft_similarity::{tanimoto, score_pair, similarity_matrix, PairingRanker, RankedPairing};

// Re-export sources
pub use aromacraft_sources::{AromaService, SourceMode, SourcesConfig, Endpoint};

// Re-export API
pub use aromacraft_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Compound, MolecularProfile, SimilarityResult,
        RecipeSummary, RecipeDetail,
        SensoryProfile, HistoryEntry,
        Error, Result,
        tanimoto, score_pair, PairingRanker, RankedPairing,
        AromaService, SourceMode, SourcesConfig,
        RestApi,
    };
}

/// Screen navigation for the demo front end
pub mod screen {
    pub use aromacraft_core::screen::{transition, Control, Navigator, Screen};
}
