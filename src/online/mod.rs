pub mod client;
pub mod models;

use serde::Serialize;

pub use client::OnlineClient;

/// Cuisine label shown for search hits, which carry no cuisine information
pub const ONLINE_CUISINE_LABEL: &str = "Global (API)";

/// Maximum number of hits requested from the search endpoint
pub const ONLINE_RESULT_LIMIT: usize = 15;

/// A recipe from the online source.
///
/// Search hits only carry name, id and image; ingredients, instructions
/// and the vegetarian flag stay unknown until a detail fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnlineRecipe {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub image_url: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
}

impl OnlineRecipe {
    pub fn from_search_hit(hit: models::SearchHit) -> Self {
        Self {
            id: hit.id.to_string(),
            name: hit.title.unwrap_or_else(|| "No Name".to_string()),
            cuisine: ONLINE_CUISINE_LABEL.to_string(),
            image_url: hit.image,
            is_vegetarian: None,
            ingredients: None,
            instructions: None,
            ready_in_minutes: None,
            servings: None,
            source_url: None,
        }
    }

    pub fn from_information(id: &str, info: models::RecipeInformation) -> Self {
        let ingredients = info
            .extended_ingredients
            .unwrap_or_default()
            .iter()
            .map(models::ExtendedIngredient::line)
            .collect::<Vec<_>>()
            .join(", ");

        // Empty instruction text falls through to the summary
        let raw_instructions = info
            .instructions
            .filter(|s| !s.trim().is_empty())
            .or(info.summary)
            .unwrap_or_else(|| "No instructions found.".to_string());

        Self {
            id: info.id.map(|id| id.to_string()).unwrap_or_else(|| id.to_string()),
            name: info.title.unwrap_or_else(|| "No Name".to_string()),
            cuisine: info.cuisines.unwrap_or_default().join(", "),
            image_url: info.image,
            is_vegetarian: Some(info.vegetarian.unwrap_or(false)),
            ingredients: Some(ingredients),
            instructions: Some(crate::utils::sanitize::clean_instructions(&raw_instructions)),
            ready_in_minutes: info.ready_in_minutes,
            servings: info.servings,
            source_url: info.source_url,
        }
    }
}
