//! Data source seams
//!
//! Each upstream is reached through one of these traits. Live HTTP clients,
//! fixed sample tables and the fallback policy all implement them, and the
//! service only ever sees `Arc<dyn ...>`.

use aromacraft_core::{
    Compound, HistoryEntry, MolecularProfile, RecipeDetail, RecipeSummary, Result, SensoryProfile,
};
use async_trait::async_trait;

/// Ingredient compound data (FlavorDB)
#[async_trait]
pub trait MolecularSource: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Compounds for an ingredient; an ingredient with no data yields an empty profile
    async fn fetch_profile(&self, ingredient: &str) -> Result<MolecularProfile>;

    async fn fetch_compound(&self, compound_id: &str) -> Result<Option<Compound>>;
}

/// Recipe search and lookup (RecipeDB)
#[async_trait]
pub trait RecipeSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search_recipes_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<RecipeSummary>>;

    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<RecipeDetail>>;
}

/// User sensory profiles and cooking history (Foodoscope)
#[async_trait]
pub trait UserSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn save_user_profile(&self, user_id: &str, profile: &SensoryProfile) -> Result<()>;

    async fn get_cooking_history(&self, user_id: &str) -> Result<Vec<HistoryEntry>>;
}
