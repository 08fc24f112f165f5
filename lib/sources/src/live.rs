//! Live upstream clients
//!
//! Thin reqwest wrappers over the FlavorDB, RecipeDB and Foodoscope REST
//! APIs. Every failure (transport, timeout, status, payload) comes back as
//! `Error::Upstream`; deciding what to do about it is the caller's job.

use crate::config::Endpoint;
use crate::source::{MolecularSource, RecipeSource, UserSource};
use aromacraft_core::{
    Compound, Error, HistoryEntry, MolecularProfile, RecipeDetail, RecipeSummary, Result,
    SensoryProfile,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Authenticated JSON client for one upstream
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    name: &'static str,
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpUpstream {
    pub fn new(name: &'static str, endpoint: &Endpoint, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(&endpoint.base_url).map_err(|e| {
            Error::InvalidConfig(format!("{} base URL '{}': {}", name, endpoint.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "{} base URL '{}' cannot carry a path",
                name, endpoint.base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("{} HTTP client: {}", name, e)))?;

        Ok(Self {
            name,
            client,
            base_url,
            api_key: endpoint.api_key.clone(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Base URL with each segment appended and percent-encoded
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidConfig(format!("{} base URL cannot carry a path", self.name)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {} {}", self.name, method, url);
        self.client.request(method, url).bearer_auth(&self.api_key)
    }

    /// Send and return the response, or `None` on 404
    async fn send(&self, request: RequestBuilder) -> Result<Option<reqwest::Response>> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::upstream(self.name, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::upstream(self.name, format!("HTTP {}", status)));
        }
        Ok(Some(response))
    }

    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| Error::upstream(self.name, format!("malformed payload: {}", e)))
    }

    /// GET a JSON document; `None` when the upstream answers 404
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let request = self.request(Method::GET, self.url(segments)?).query(query);
        match self.send(request).await? {
            Some(response) => self.decode(response).await.map(Some),
            None => Ok(None),
        }
    }

    /// GET a JSON document that must exist; 404 is an upstream failure like any other status
    pub async fn get_required<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T> {
        match self.get_json(segments, query).await? {
            Some(value) => Ok(value),
            None => Err(Error::upstream(self.name, "HTTP 404 Not Found")),
        }
    }

    /// Send a JSON body and decode the JSON reply; 404 is an error here
    pub async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method, self.url(segments)?).json(body);
        match self.send(request).await? {
            Some(response) => self.decode(response).await,
            None => Err(Error::upstream(self.name, "HTTP 404 Not Found")),
        }
    }

    /// Send a JSON body, ignoring any reply body
    pub async fn send_unit<B>(&self, method: Method, segments: &[&str], body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(method, self.url(segments)?).json(body);
        match self.send(request).await? {
            Some(_) => Ok(()),
            None => Err(Error::upstream(self.name, "HTTP 404 Not Found")),
        }
    }
}

/// `GET /entities?name=` payload
#[derive(Debug, Deserialize)]
struct EntityPayload {
    #[serde(default)]
    molecules: Option<Vec<Compound>>,
}

pub struct LiveMolecularSource {
    http: HttpUpstream,
}

impl LiveMolecularSource {
    pub fn new(endpoint: &Endpoint, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: HttpUpstream::new("flavordb", endpoint, timeout)?,
        })
    }
}

#[async_trait]
impl MolecularSource for LiveMolecularSource {
    fn name(&self) -> &'static str {
        self.http.name()
    }

    async fn fetch_profile(&self, ingredient: &str) -> Result<MolecularProfile> {
        let payload: EntityPayload = self
            .http
            .get_required(&["entities"], &[("name", ingredient)])
            .await?;

        // The requested name stays the profile key, whatever the upstream calls it
        let molecules = payload.molecules.unwrap_or_default();
        Ok(MolecularProfile::new(ingredient, molecules))
    }

    async fn fetch_compound(&self, compound_id: &str) -> Result<Option<Compound>> {
        self.http.get_json(&["molecules", compound_id], &[]).await
    }
}

#[derive(Serialize)]
struct RecipeSearchRequest<'a> {
    ingredients: &'a [String],
}

pub struct LiveRecipeSource {
    http: HttpUpstream,
}

impl LiveRecipeSource {
    pub fn new(endpoint: &Endpoint, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: HttpUpstream::new("recipedb", endpoint, timeout)?,
        })
    }
}

#[async_trait]
impl RecipeSource for LiveRecipeSource {
    fn name(&self) -> &'static str {
        self.http.name()
    }

    async fn search_recipes_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<RecipeSummary>> {
        self.http
            .send_json(Method::POST, &["recipes", "search"], &RecipeSearchRequest { ingredients })
            .await
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Option<RecipeDetail>> {
        self.http.get_json(&["recipes", recipe_id], &[]).await
    }
}

pub struct LiveUserSource {
    http: HttpUpstream,
}

impl LiveUserSource {
    pub fn new(endpoint: &Endpoint, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: HttpUpstream::new("foodoscope", endpoint, timeout)?,
        })
    }
}

#[async_trait]
impl UserSource for LiveUserSource {
    fn name(&self) -> &'static str {
        self.http.name()
    }

    async fn save_user_profile(&self, user_id: &str, profile: &SensoryProfile) -> Result<()> {
        self.http
            .send_unit(Method::PUT, &["users", user_id, "sensory-profile"], profile)
            .await
    }

    async fn get_cooking_history(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        self.http.get_required(&["users", user_id, "history"], &[]).await
    }
}
