//! # AromaCraft Sources
//!
//! Clients for the three upstream data services and the service facade
//! that the REST API and CLI call into.
//!
//! | Upstream   | Trait               | Live client            | Sample stand-in          |
//! |------------|---------------------|------------------------|--------------------------|
//! | FlavorDB   | [`MolecularSource`] | [`LiveMolecularSource`]| [`SampleMolecularSource`]|
//! | RecipeDB   | [`RecipeSource`]    | [`LiveRecipeSource`]   | [`SampleRecipeSource`]   |
//! | Foodoscope | [`UserSource`]      | [`LiveUserSource`]     | [`SampleUserSource`]     |
//!
//! [`SourceMode`] picks which of these back an [`AromaService`]:
//! sample data only, live with sample fallback on outages, or live only.
//!
//! ## Example
//!
//! ```
//! use aromacraft_sources::AromaService;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let service = AromaService::sample();
//! let result = service.similarity_between("basil", "lemon").await.unwrap();
//! assert_eq!(result.shared_compounds, vec!["mol_001", "mol_003"]);
//! # });
//! ```

pub mod config;
pub mod fallback;
pub mod live;
pub mod sample;
pub mod service;
pub mod source;

pub use config::{Endpoint, SourceMode, SourcesConfig};
pub use fallback::Fallback;
pub use live::{HttpUpstream, LiveMolecularSource, LiveRecipeSource, LiveUserSource};
pub use sample::{SampleMolecularSource, SampleRecipeSource, SampleUserSource, SAMPLE_RECIPE_ID};
pub use service::AromaService;
pub use source::{MolecularSource, RecipeSource, UserSource};
