//! Fixed sample data
//!
//! Deterministic stand-ins for the three upstreams. Used directly in
//! `sample` mode and as the substitute data in `fallback` mode.

use crate::source::{MolecularSource, RecipeSource, UserSource};
use ahash::AHashMap;
use aromacraft_core::{
    Compound, Difficulty, HistoryEntry, MeasuredIngredient, MolecularProfile, RecipeDetail,
    RecipeSummary, Result, SensoryProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

/// Id of the single recipe returned by a sample search
pub const SAMPLE_RECIPE_ID: &str = "recipe_001";

// (id, name, family, odor)
const COMPOUNDS: &[(&str, &str, &str, &str)] = &[
    ("mol_001", "Linalool", "Terpenes", "Floral, Sweet"),
    ("mol_002", "Eugenol", "Phenylpropanoids", "Spicy, Clove-like"),
    ("mol_003", "Limonene", "Terpenes", "Citrus, Fresh"),
    ("mol_004", "Carvacrol", "Phenols", "Herbal, Warm"),
    ("mol_005", "Thymol", "Phenols", "Herbal, Medicinal"),
    ("mol_006", "beta-Caryophyllene", "Sesquiterpenes", "Woody, Spicy"),
    ("mol_007", "Allicin", "Organosulfur", "Pungent, Garlic"),
    ("mol_008", "Diallyl disulfide", "Organosulfur", "Garlic, Sulfurous"),
    ("mol_009", "(Z)-3-Hexenal", "Aldehydes", "Green, Grassy"),
    ("mol_010", "beta-Ionone", "Norisoprenoids", "Violet, Woody"),
    ("mol_011", "2-Isobutylthiazole", "Thiazoles", "Green, Tomato leaf"),
    ("mol_012", "Hexanal", "Aldehydes", "Green, Fatty"),
    ("mol_013", "Citral", "Aldehydes", "Lemon, Sharp"),
];

// Keys are matched exactly as supplied
const INGREDIENTS: &[(&str, &[&str])] = &[
    ("basil", &["mol_001", "mol_002", "mol_003"]),
    ("tomato", &["mol_001", "mol_009", "mol_010", "mol_011"]),
    ("oregano", &["mol_001", "mol_004", "mol_005", "mol_006"]),
    ("garlic", &["mol_007", "mol_008"]),
    ("olive oil", &["mol_009", "mol_012"]),
    ("lemon", &["mol_001", "mol_003", "mol_013"]),
    ("clove", &["mol_002", "mol_006"]),
];

/// Compound table keyed by ingredient name
#[derive(Debug, Clone)]
pub struct SampleMolecularSource {
    compounds: AHashMap<&'static str, Compound>,
    ingredients: AHashMap<&'static str, &'static [&'static str]>,
}

impl Default for SampleMolecularSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleMolecularSource {
    pub fn new() -> Self {
        let compounds = COMPOUNDS
            .iter()
            .map(|&(id, name, family, odor)| (id, Compound::new(id, name, family, odor)))
            .collect();
        let ingredients = INGREDIENTS.iter().copied().collect();
        Self { compounds, ingredients }
    }

    /// Ingredient names with sample data, sorted
    pub fn ingredients(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.ingredients.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Profile from the table; unknown ingredients get an empty profile
    pub fn profile(&self, ingredient: &str) -> MolecularProfile {
        let ids = self.ingredients.get(ingredient).copied().unwrap_or(&[]);
        MolecularProfile::new(
            ingredient,
            ids.iter().filter_map(|id| self.compounds.get(id).cloned()),
        )
    }

    pub fn compound(&self, compound_id: &str) -> Option<Compound> {
        self.compounds.get(compound_id).cloned()
    }
}

#[async_trait]
impl MolecularSource for SampleMolecularSource {
    fn name(&self) -> &'static str {
        "sample-flavordb"
    }

    async fn fetch_profile(&self, ingredient: &str) -> Result<MolecularProfile> {
        Ok(self.profile(ingredient))
    }

    async fn fetch_compound(&self, compound_id: &str) -> Result<Option<Compound>> {
        Ok(self.compound(compound_id))
    }
}

fn summary(
    id: &str,
    name: &str,
    ingredients: &[&str],
    cooking_time: u32,
    difficulty: Difficulty,
    description: &str,
) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cooking_time,
        difficulty,
        description: description.to_string(),
    }
}

fn recipe_catalog() -> Vec<RecipeDetail> {
    let soup_ingredients = [
        MeasuredIngredient::new("Heirloom Tomato", "400g", None),
        MeasuredIngredient::new("Fresh Basil", "14g", Some("OAV adjusted")),
        MeasuredIngredient::new("Chicken Stock", "500ml", None),
        MeasuredIngredient::new("Flour", "120g", Some("Viscosity adjusted")),
        MeasuredIngredient::new("Olive Oil", "30ml", Some("Aroma enhanced")),
    ];
    let soup_steps = [
        "Dice tomatoes into 2cm cubes for optimal surface area exposure.",
        "Simmer the sauce for an additional 5 minutes at low heat to thicken.",
        "Add basil during the final 2 minutes to retain volatile compounds.",
        "Blend until smooth, then strain through fine mesh.",
    ];

    vec![
        RecipeDetail {
            summary: summary(
                SAMPLE_RECIPE_ID,
                "Molecular Basil Tomato Soup",
                &["tomato", "basil", "olive oil"],
                45,
                Difficulty::Medium,
                "A scientifically optimized soup with enhanced aroma compounds",
            ),
            measured_ingredients: soup_ingredients.to_vec(),
            instructions: Vec::new(),
        }
        .with_steps(&soup_steps),
        RecipeDetail {
            summary: summary(
                "basil-tomato-soup",
                "Viscosity-Optimized Basil Tomato Soup",
                &["tomato", "basil", "chicken stock", "flour", "olive oil"],
                45,
                Difficulty::Medium,
                "Tomato soup thickened to a target viscosity",
            ),
            measured_ingredients: soup_ingredients.to_vec(),
            instructions: Vec::new(),
        }
        .with_steps(&soup_steps),
        RecipeDetail {
            summary: summary(
                "crispy-chicken",
                "Texture-Enhanced Crispy Chicken",
                &["chicken", "flour", "garlic"],
                35,
                Difficulty::Easy,
                "Double-dredged chicken tuned for crunch",
            ),
            measured_ingredients: vec![
                MeasuredIngredient::new("Chicken Thigh", "600g", None),
                MeasuredIngredient::new("Flour", "150g", Some("Texture adjusted")),
                MeasuredIngredient::new("Garlic", "3 cloves", None),
            ],
            instructions: Vec::new(),
        }
        .with_steps(&[
            "Season chicken with crushed garlic and salt.",
            "Dredge twice in seasoned flour.",
            "Fry at 175C until golden and crisp.",
        ]),
        RecipeDetail {
            summary: summary(
                "creamy-pasta",
                "Rheological Cream Pasta",
                &["pasta", "cream", "parmesan"],
                25,
                Difficulty::Easy,
                "Cream sauce reduced to a coating consistency",
            ),
            measured_ingredients: vec![
                MeasuredIngredient::new("Pasta", "300g", None),
                MeasuredIngredient::new("Cream", "200ml", Some("Viscosity adjusted")),
                MeasuredIngredient::new("Parmesan", "60g", None),
            ],
            instructions: Vec::new(),
        }
        .with_steps(&[
            "Cook pasta until just shy of al dente.",
            "Reduce cream by a third, then whisk in parmesan.",
            "Toss pasta in the sauce with a splash of cooking water.",
        ]),
    ]
}

/// Fixed recipe catalog
#[derive(Debug, Clone)]
pub struct SampleRecipeSource {
    catalog: AHashMap<String, RecipeDetail>,
}

impl Default for SampleRecipeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleRecipeSource {
    pub fn new() -> Self {
        let catalog = recipe_catalog()
            .into_iter()
            .map(|detail| (detail.id().to_string(), detail))
            .collect();
        Self { catalog }
    }

    /// The one canned search result; its ingredient list echoes the query
    pub fn search(&self, ingredients: &[String]) -> Vec<RecipeSummary> {
        self.catalog
            .get(SAMPLE_RECIPE_ID)
            .map(|detail| RecipeSummary {
                ingredients: ingredients.to_vec(),
                ..detail.summary.clone()
            })
            .into_iter()
            .collect()
    }

    pub fn recipe(&self, recipe_id: &str) -> Option<RecipeDetail> {
        self.catalog.get(recipe_id).cloned()
    }
}

#[async_trait]
impl RecipeSource for SampleRecipeSource {
    fn name(&self) -> &'static str {
        "sample-recipedb"
    }

    async fn search_recipes_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<RecipeSummary>> {
        Ok(self.search(ingredients))
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<RecipeDetail>> {
        Ok(self.recipe(recipe_id))
    }
}

/// In-memory user store with a fixed cooking history
///
/// Saved profiles live only as long as the source.
#[derive(Debug, Default)]
pub struct SampleUserSource {
    profiles: RwLock<AHashMap<String, SensoryProfile>>,
}

impl SampleUserSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_profile(&self, user_id: &str) -> Option<SensoryProfile> {
        self.profiles.read().get(user_id).copied()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        const HISTORY: &[(&str, &str, (i32, u32, u32), u8)] = &[
            ("basil-tomato-soup", "Viscosity-Optimized Basil Tomato Soup", (2025, 11, 18), 5),
            ("crispy-chicken", "Texture-Enhanced Crispy Chicken", (2025, 11, 15), 4),
            ("creamy-pasta", "Rheological Cream Pasta", (2025, 11, 12), 5),
            ("paired-salmon", "Molecular-Paired Salmon", (2025, 11, 10), 4),
            ("aroma-stir-fry", "Aroma-Optimized Stir Fry", (2025, 11, 8), 5),
        ];

        HISTORY
            .iter()
            .filter_map(|&(recipe_id, name, (y, m, d), rating)| {
                Some(HistoryEntry {
                    recipe_id: recipe_id.to_string(),
                    name: name.to_string(),
                    cooked_on: NaiveDate::from_ymd_opt(y, m, d)?,
                    rating,
                })
            })
            .collect()
    }
}

#[async_trait]
impl UserSource for SampleUserSource {
    fn name(&self) -> &'static str {
        "sample-foodoscope"
    }

    async fn save_user_profile(&self, user_id: &str, profile: &SensoryProfile) -> Result<()> {
        profile.validate()?;
        self.profiles.write().insert(user_id.to_string(), *profile);
        Ok(())
    }

    async fn get_cooking_history(&self, _user_id: &str) -> Result<Vec<HistoryEntry>> {
        Ok(self.history())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basil_profile_is_fixed() {
        let profile = SampleMolecularSource::new().profile("basil");
        let compounds: Vec<(&str, &str, &str)> = profile
            .compounds()
            .map(|c| (c.id.as_str(), c.name.as_str(), c.family.as_str()))
            .collect();

        assert_eq!(
            compounds,
            vec![
                ("mol_001", "Linalool", "Terpenes"),
                ("mol_002", "Eugenol", "Phenylpropanoids"),
                ("mol_003", "Limonene", "Terpenes"),
            ]
        );
    }

    #[test]
    fn test_unknown_ingredient_is_empty() {
        let source = SampleMolecularSource::new();
        let profile = source.profile("dragonfruit");
        assert!(profile.is_empty());
        assert_eq!(profile.ingredient(), "dragonfruit");

        // exact match only
        assert!(source.profile("Basil").is_empty());
    }

    #[test]
    fn test_every_table_id_resolves() {
        let source = SampleMolecularSource::new();
        for (ingredient, ids) in INGREDIENTS {
            assert_eq!(source.profile(ingredient).len(), ids.len(), "{}", ingredient);
        }
        assert_eq!(source.ingredients().len(), INGREDIENTS.len());
    }

    #[test]
    fn test_compound_lookup() {
        let source = SampleMolecularSource::new();
        assert_eq!(source.compound("mol_002").unwrap().name, "Eugenol");
        assert!(source.compound("mol_999").is_none());
    }

    #[test]
    fn test_search_echoes_ingredients() {
        let query = vec!["tomato".to_string(), "basil".to_string(), "garlic".to_string()];
        let results = SampleRecipeSource::new().search(&query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, SAMPLE_RECIPE_ID);
        assert_eq!(results[0].ingredients, query);
        assert_eq!(results[0].cooking_time, 45);
        assert_eq!(results[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_recipe_catalog() {
        let source = SampleRecipeSource::new();
        for id in [SAMPLE_RECIPE_ID, "basil-tomato-soup", "crispy-chicken", "creamy-pasta"] {
            let detail = source.recipe(id).unwrap();
            assert_eq!(detail.id(), id);
            assert!(!detail.instructions.is_empty());
        }
        assert!(source.recipe("recipe_404").is_none());
    }

    #[tokio::test]
    async fn test_user_profile_saved_in_memory() {
        let source = SampleUserSource::new();
        assert!(source.saved_profile("user_123").is_none());

        let profile = SensoryProfile::default();
        source.save_user_profile("user_123", &profile).await.unwrap();
        assert_eq!(source.saved_profile("user_123"), Some(profile));

        let mut bad = profile;
        bad.taste.umami = 42;
        assert!(source.save_user_profile("user_123", &bad).await.is_err());
        assert_eq!(source.saved_profile("user_123"), Some(profile));
    }

    #[tokio::test]
    async fn test_fixed_history() {
        let history = SampleUserSource::new().get_cooking_history("anyone").await.unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].name, "Viscosity-Optimized Basil Tomato Soup");
        assert!(history.iter().all(|entry| (1..=5).contains(&entry.rating)));
    }
}
