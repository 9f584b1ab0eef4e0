use crate::config::OnlineConfig;
use crate::online::{
    models::{ComplexSearchResponse, RecipeInformation},
    OnlineRecipe, ONLINE_RESULT_LIMIT,
};
use crate::{Error, Result};
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, warn};

/// Spoonacular API client.
///
/// Public operations never fail: an unreachable or misbehaving API yields
/// no results, and the cause is logged.
#[derive(Clone)]
pub struct OnlineClient {
    client: Client,
    config: OnlineConfig,
}

impl OnlineClient {
    /// Create a new client
    pub fn new(config: OnlineConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config("Spoonacular API key not set".to_string()))
    }

    /// Make a GET request to the API
    async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let api_key = self.api_key()?;
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!("Spoonacular API request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", api_key)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!("HTTP {status} from {path}")));
        }

        Ok(response.json::<T>().await?)
    }

    /// Search recipes; any failure yields an empty list
    pub async fn search(&self, query: &str) -> Vec<OnlineRecipe> {
        match self.try_search(query).await {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!("Online search for {:?} failed: {}", query, e.log_safe());
                Vec::new()
            }
        }
    }

    pub async fn try_search(&self, query: &str) -> Result<Vec<OnlineRecipe>> {
        let params = [
            ("query", query.to_string()),
            ("number", ONLINE_RESULT_LIMIT.to_string()),
            ("addRecipeInformation", "false".to_string()),
            ("fillIngredients", "false".to_string()),
        ];

        let response: ComplexSearchResponse = self.get("/recipes/complexSearch", &params).await?;
        debug!(
            "Online search returned {} hits (total available: {:?})",
            response.results.len(),
            response.total_results
        );

        Ok(response
            .results
            .into_iter()
            .take(ONLINE_RESULT_LIMIT)
            .map(OnlineRecipe::from_search_hit)
            .collect())
    }

    /// Fetch full details; any failure yields `None`
    pub async fn fetch_detail(&self, online_id: &str) -> Option<OnlineRecipe> {
        match self.try_fetch_detail(online_id).await {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!(
                    "Fetching online recipe {:?} failed: {}",
                    online_id,
                    e.log_safe()
                );
                None
            }
        }
    }

    pub async fn try_fetch_detail(&self, online_id: &str) -> Result<OnlineRecipe> {
        let online_id = online_id.trim();
        if online_id.is_empty() {
            return Err(Error::Validation("Online recipe id is empty".to_string()));
        }

        let path = format!("/recipes/{}/information", urlencoding::encode(online_id));
        let params = [("includeNutrition", "false".to_string())];

        let info: RecipeInformation = self.get(&path, &params).await?;
        Ok(OnlineRecipe::from_information(online_id, info))
    }
}
