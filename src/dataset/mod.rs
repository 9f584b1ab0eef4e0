//! In-memory offline recipe store.
//!
//! The table is loaded once at startup and never mutated afterwards. A
//! record's id is its row position in the source file, so ids stay stable
//! for every query run against the same table.

pub mod loader;

use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// A single row of the offline dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfflineRecipe {
    pub id: usize,
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub cuisine: Option<String>,
    pub course: Option<String>,
    pub diet: Option<String>,
    pub is_vegetarian: bool,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub total_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
}

/// Text columns the matcher can search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Ingredients,
    Cuisine,
}

impl OfflineRecipe {
    pub fn field(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Ingredients => self.ingredients.as_deref(),
            SearchField::Cuisine => self.cuisine.as_deref(),
        }
    }
}

/// Unknown diet counts as non-vegetarian.
pub fn is_vegetarian(diet: Option<&str>) -> bool {
    // The reference dataset spells it "Non Vegeterian"
    const MARKERS: [&str; 2] = ["non vegetarian", "non vegeterian"];

    match diet {
        Some(diet) => {
            let diet = diet.to_lowercase();
            !MARKERS.iter().any(|m| diet.contains(m))
        }
        None => false,
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecipeTable {
    recipes: Vec<OfflineRecipe>,
}

impl RecipeTable {
    pub fn new(recipes: Vec<OfflineRecipe>) -> Self {
        Self { recipes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the dataset, degrading to an empty table on any failure
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match loader::load_file(path) {
            Ok(table) => {
                info!("Dataset loaded from {:?}: {} recipes", path, table.len());
                table
            }
            Err(e) => {
                warn!(
                    "Failed to load dataset from {:?}: {}. Only online search will work.",
                    path, e
                );
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&OfflineRecipe> {
        self.recipes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OfflineRecipe> {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_vegetarian() {
        assert!(is_vegetarian(Some("Vegetarian")));
        assert!(is_vegetarian(Some("High Protein Vegetarian")));
        assert!(is_vegetarian(Some("Eggetarian")));
        assert!(!is_vegetarian(Some("Non Vegeterian")));
        assert!(!is_vegetarian(Some("NON VEGETARIAN")));
        assert!(!is_vegetarian(None));
    }

    #[test]
    fn test_load_missing_file_yields_empty_table() {
        let table = RecipeTable::load_or_empty("/definitely/not/here.csv");
        assert!(table.is_empty());
        assert!(table.get(0).is_none());
    }
}
