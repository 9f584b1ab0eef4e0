use crate::recipe::DisplayRecipe;
use serde::{Deserialize, Serialize};

/// Which field a load-more request pages through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBy {
    #[default]
    Ingredient,
    Cuisine,
}

impl SearchBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchBy::Ingredient => "ingredient",
            SearchBy::Cuisine => "cuisine",
        }
    }
}

/// POST /load_more form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoadMoreForm {
    #[serde(default)]
    pub ingredient: String,
    #[serde(default)]
    pub data_source: String,
    #[serde(default)]
    pub start_index: usize,
    #[serde(default)]
    pub search_by: SearchBy,
}

/// Load-more response
#[derive(Debug, Clone, Serialize)]
pub struct LoadMoreResponse {
    pub recipes: Vec<DisplayRecipe>,
    pub next_start: Option<usize>,
    pub total_count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub offline_recipes: usize,
    pub online_enabled: bool,
}
