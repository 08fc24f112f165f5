use crate::config::{SourceMode, SourcesConfig};
use crate::fallback::Fallback;
use crate::live::{LiveMolecularSource, LiveRecipeSource, LiveUserSource};
use crate::sample::{SampleMolecularSource, SampleRecipeSource, SampleUserSource};
use crate::source::{MolecularSource, RecipeSource, UserSource};
use aromacraft_core::{
    require_name, Compound, Error, HistoryEntry, MolecularProfile, RecipeDetail, RecipeSummary,
    Result, SensoryProfile, SimilarityResult,
};
use aromacraft_similarity::{score_pair, PairingRanker, RankedPairing};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point for every AromaCraft operation
///
/// Owns one source per upstream. Which implementation sits behind each one
/// is decided once, at construction, from the [`SourceMode`].
pub struct AromaService {
    mode: SourceMode,
    molecular: Arc<dyn MolecularSource>,
    recipes: Arc<dyn RecipeSource>,
    users: Arc<dyn UserSource>,
    ranker: PairingRanker,
}

impl AromaService {
    pub fn new(
        mode: SourceMode,
        molecular: Arc<dyn MolecularSource>,
        recipes: Arc<dyn RecipeSource>,
        users: Arc<dyn UserSource>,
    ) -> Self {
        Self {
            mode,
            molecular,
            recipes,
            users,
            ranker: PairingRanker::new(),
        }
    }

    /// Service backed by fixed sample data only
    pub fn sample() -> Self {
        Self::new(
            SourceMode::Sample,
            Arc::new(SampleMolecularSource::new()),
            Arc::new(SampleRecipeSource::new()),
            Arc::new(SampleUserSource::new()),
        )
    }

    pub fn from_config(config: &SourcesConfig) -> Result<Self> {
        info!("Wiring data sources in {} mode", config.mode);

        if config.mode == SourceMode::Sample {
            return Ok(Self::sample());
        }

        let molecular = LiveMolecularSource::new(&config.flavordb, config.timeout)?;
        let recipes = LiveRecipeSource::new(&config.recipedb, config.timeout)?;
        let users = LiveUserSource::new(&config.foodoscope, config.timeout)?;

        let service = match config.mode {
            SourceMode::Strict => Self::new(
                SourceMode::Strict,
                Arc::new(molecular),
                Arc::new(recipes),
                Arc::new(users),
            ),
            _ => Self::new(
                SourceMode::Fallback,
                Arc::new(Fallback::new(molecular, SampleMolecularSource::new())),
                Arc::new(Fallback::new(recipes, SampleRecipeSource::new())),
                Arc::new(Fallback::new(users, SampleUserSource::new())),
            ),
        };
        Ok(service)
    }

    pub fn with_ranker(mut self, ranker: PairingRanker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Compound profile for one ingredient
    pub async fn profile(&self, ingredient: &str) -> Result<MolecularProfile> {
        require_name("ingredient name", ingredient)?;
        self.molecular.fetch_profile(ingredient).await
    }

    pub async fn compound(&self, compound_id: &str) -> Result<Option<Compound>> {
        require_name("compound id", compound_id)?;
        self.molecular.fetch_compound(compound_id).await
    }

    /// Fetch both profiles concurrently and score them
    pub async fn similarity_between(&self, a: &str, b: &str) -> Result<SimilarityResult> {
        require_name("ingredient name", a)?;
        require_name("ingredient name", b)?;

        let (profile_a, profile_b) = tokio::join!(
            self.molecular.fetch_profile(a),
            self.molecular.fetch_profile(b),
        );
        let result = score_pair(&profile_a?, &profile_b?);
        debug!("similarity {} / {} = {:.3}", a, b, result.score);
        Ok(result)
    }

    /// Rank candidates as pairing partners for `base`
    pub async fn pairings(
        &self,
        base: &str,
        candidates: &[String],
        limit: usize,
    ) -> Result<Vec<RankedPairing>> {
        require_name("ingredient name", base)?;
        if candidates.is_empty() {
            return Err(Error::InvalidInput("candidate list must not be empty".to_string()));
        }
        for candidate in candidates {
            require_name("ingredient name", candidate)?;
        }

        let (base_profile, candidate_profiles) = tokio::join!(
            self.molecular.fetch_profile(base),
            join_all(candidates.iter().map(|c| self.molecular.fetch_profile(c))),
        );
        let candidate_profiles = candidate_profiles.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(self.ranker.rank(&base_profile?, &candidate_profiles, limit))
    }

    pub async fn search_recipes(&self, ingredients: &[String]) -> Result<Vec<RecipeSummary>> {
        if ingredients.is_empty() {
            return Err(Error::InvalidInput("ingredient list must not be empty".to_string()));
        }
        for ingredient in ingredients {
            require_name("ingredient name", ingredient)?;
        }
        self.recipes.search_recipes_by_ingredients(ingredients).await
    }

    pub async fn recipe(&self, recipe_id: &str) -> Result<Option<RecipeDetail>> {
        require_name("recipe id", recipe_id)?;
        self.recipes.get_recipe(recipe_id).await
    }

    pub async fn save_user_profile(&self, user_id: &str, profile: &SensoryProfile) -> Result<()> {
        require_name("user id", user_id)?;
        profile.validate()?;
        self.users.save_user_profile(user_id, profile).await
    }

    pub async fn cooking_history(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        require_name("user id", user_id)?;
        self.users.get_cooking_history(user_id).await
    }
}
