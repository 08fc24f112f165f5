//! Mock-fallback policy
//!
//! Wraps a live source and a sample source. Upstream failures from the live
//! side are logged and answered from the sample side; every other error
//! (invalid input, configuration) passes through untouched.

use crate::source::{MolecularSource, RecipeSource, UserSource};
use aromacraft_core::{
    Compound, Error, HistoryEntry, MolecularProfile, RecipeDetail, RecipeSummary, Result,
    SensoryProfile,
};
use async_trait::async_trait;
use tracing::warn;

pub struct Fallback<L, S> {
    live: L,
    sample: S,
}

impl<L, S> Fallback<L, S> {
    pub fn new(live: L, sample: S) -> Self {
        Self { live, sample }
    }

    pub fn live(&self) -> &L {
        &self.live
    }

    pub fn sample(&self) -> &S {
        &self.sample
    }
}

/// True when `result` failed upstream and sample data should be used instead
fn recoverable<T>(source: &str, operation: &str, result: &Result<T>) -> bool {
    match result {
        Err(err @ Error::Upstream { .. }) => {
            warn!("{} {} failed, using sample data: {}", source, operation, err);
            true
        }
        _ => false,
    }
}

#[async_trait]
impl<L: MolecularSource, S: MolecularSource> MolecularSource for Fallback<L, S> {
    fn name(&self) -> &'static str {
        self.live.name()
    }

    async fn fetch_profile(&self, ingredient: &str) -> Result<MolecularProfile> {
        let result = self.live.fetch_profile(ingredient).await;
        if recoverable(self.live.name(), "profile lookup", &result) {
            return self.sample.fetch_profile(ingredient).await;
        }
        result
    }

    async fn fetch_compound(&self, compound_id: &str) -> Result<Option<Compound>> {
        let result = self.live.fetch_compound(compound_id).await;
        if recoverable(self.live.name(), "compound lookup", &result) {
            return self.sample.fetch_compound(compound_id).await;
        }
        result
    }
}

#[async_trait]
impl<L: RecipeSource, S: RecipeSource> RecipeSource for Fallback<L, S> {
    fn name(&self) -> &'static str {
        self.live.name()
    }

    async fn search_recipes_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<RecipeSummary>> {
        let result = self.live.search_recipes_by_ingredients(ingredients).await;
        if recoverable(self.live.name(), "recipe search", &result) {
            return self.sample.search_recipes_by_ingredients(ingredients).await;
        }
        result
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<RecipeDetail>> {
        let result = self.live.get_recipe(recipe_id).await;
        if recoverable(self.live.name(), "recipe lookup", &result) {
            return self.sample.get_recipe(recipe_id).await;
        }
        result
    }
}

#[async_trait]
impl<L: UserSource, S: UserSource> UserSource for Fallback<L, S> {
    fn name(&self) -> &'static str {
        self.live.name()
    }

    async fn save_user_profile(&self, user_id: &str, profile: &SensoryProfile) -> Result<()> {
        let result = self.live.save_user_profile(user_id, profile).await;
        if recoverable(self.live.name(), "profile save", &result) {
            return self.sample.save_user_profile(user_id, profile).await;
        }
        result
    }

    async fn get_cooking_history(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        let result = self.live.get_cooking_history(user_id).await;
        if recoverable(self.live.name(), "history lookup", &result) {
            return self.sample.get_cooking_history(user_id).await;
        }
        result
    }
}
