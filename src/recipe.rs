//! The two record shapes and their shared display projection.
//!
//! Offline and online records are never merged into one table. Whatever
//! renders or serializes a record goes through [`DisplayRecipe`].

use crate::dataset::OfflineRecipe;
use crate::online::OnlineRecipe;
use serde::{Deserialize, Serialize};

/// Which backing store a request addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Offline,
    Online,
}

impl DataSource {
    /// "online" selects the online source; anything else is offline
    pub fn from_form(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("online") {
            DataSource::Online
        } else {
            DataSource::Offline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Offline => "offline",
            DataSource::Online => "online",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Offline(OfflineRecipe),
    Online(OnlineRecipe),
}

/// Table position for offline records, external id for online ones.
///
/// Serializes as a bare number or string respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecipeId {
    Offline(usize),
    Online(String),
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeId::Offline(position) => write!(f, "{position}"),
            RecipeId::Online(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

/// Source-independent view of a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecipe {
    pub id: RecipeId,
    pub source: DataSource,
    pub name: String,
    pub cuisine: String,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub diet_label: String,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub detail_path: String,
    pub facts: Vec<Fact>,
}

fn minutes(value: u32) -> String {
    format!("{value} min")
}

impl Recipe {
    pub fn source(&self) -> DataSource {
        match self {
            Recipe::Offline(_) => DataSource::Offline,
            Recipe::Online(_) => DataSource::Online,
        }
    }

    pub fn display(&self) -> DisplayRecipe {
        match self {
            Recipe::Offline(r) => {
                let facts = [
                    ("Course", r.course.clone()),
                    ("Diet", r.diet.clone()),
                    ("Prep time", r.prep_time_minutes.map(minutes)),
                    ("Cook time", r.cook_time_minutes.map(minutes)),
                    ("Total time", r.total_time_minutes.map(minutes)),
                    ("Servings", r.servings.map(|s| s.to_string())),
                ]
                .into_iter()
                .filter_map(|(label, value)| value.map(|value| Fact { label, value }))
                .collect();

                DisplayRecipe {
                    id: RecipeId::Offline(r.id),
                    source: DataSource::Offline,
                    name: r.name.clone().unwrap_or_else(|| "Untitled Recipe".to_string()),
                    cuisine: r.cuisine.clone().unwrap_or_default(),
                    ingredients: r.ingredients.clone(),
                    instructions: r.instructions.clone(),
                    is_vegetarian: Some(r.is_vegetarian),
                    diet_label: diet_label(Some(r.is_vegetarian)).to_string(),
                    image_url: None,
                    source_url: r.source_url.clone(),
                    detail_path: format!("/recipe/offline/{}", r.id),
                    facts,
                }
            }
            Recipe::Online(r) => {
                let facts = [
                    ("Ready in", r.ready_in_minutes.map(minutes)),
                    ("Servings", r.servings.map(|s| s.to_string())),
                ]
                .into_iter()
                .filter_map(|(label, value)| value.map(|value| Fact { label, value }))
                .collect();

                DisplayRecipe {
                    id: RecipeId::Online(r.id.clone()),
                    source: DataSource::Online,
                    name: r.name.clone(),
                    cuisine: r.cuisine.clone(),
                    ingredients: r.ingredients.clone(),
                    instructions: r.instructions.clone(),
                    is_vegetarian: r.is_vegetarian,
                    diet_label: diet_label(r.is_vegetarian).to_string(),
                    image_url: r.image_url.clone(),
                    source_url: r.source_url.clone(),
                    detail_path: format!("/recipe/online/{}", urlencoding::encode(&r.id)),
                    facts,
                }
            }
        }
    }
}

pub fn diet_label(is_vegetarian: Option<bool>) -> &'static str {
    match is_vegetarian {
        Some(true) => "Vegetarian",
        Some(false) => "Non-Vegetarian",
        None => "Diet unknown",
    }
}
