use super::{is_vegetarian, OfflineRecipe, RecipeTable};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Columns every dataset file must provide
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "TranslatedRecipeName",
    "TranslatedIngredients",
    "TranslatedInstructions",
    "Cuisine",
    "Diet",
];

#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "TranslatedRecipeName")]
    name: Option<String>,
    #[serde(rename = "TranslatedIngredients")]
    ingredients: Option<String>,
    #[serde(rename = "TranslatedInstructions")]
    instructions: Option<String>,
    #[serde(rename = "Cuisine")]
    cuisine: Option<String>,
    #[serde(rename = "Diet")]
    diet: Option<String>,
    #[serde(rename = "Course", default)]
    course: Option<String>,
    #[serde(rename = "PrepTimeInMins", default, deserialize_with = "csv::invalid_option")]
    prep_time: Option<u32>,
    #[serde(rename = "CookTimeInMins", default, deserialize_with = "csv::invalid_option")]
    cook_time: Option<u32>,
    #[serde(rename = "TotalTimeInMins", default, deserialize_with = "csv::invalid_option")]
    total_time: Option<u32>,
    #[serde(rename = "Servings", default, deserialize_with = "csv::invalid_option")]
    servings: Option<u32>,
    #[serde(rename = "URL", default)]
    url: Option<String>,
}

/// Blank cells are missing values
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl DatasetRow {
    fn into_recipe(self, id: usize) -> OfflineRecipe {
        let diet = non_blank(self.diet);
        OfflineRecipe {
            id,
            name: non_blank(self.name),
            ingredients: non_blank(self.ingredients),
            instructions: non_blank(self.instructions),
            cuisine: non_blank(self.cuisine),
            course: non_blank(self.course),
            is_vegetarian: is_vegetarian(diet.as_deref()),
            diet,
            prep_time_minutes: self.prep_time,
            cook_time_minutes: self.cook_time,
            total_time_minutes: self.total_time,
            servings: self.servings,
            source_url: non_blank(self.url),
        }
    }
}

/// Load a dataset file from disk
pub fn load_file(path: &Path) -> Result<RecipeTable> {
    let file = File::open(path)?;
    load_reader(file)
}

/// Parse a dataset from any CSV source
pub fn load_reader<R: Read>(reader: R) -> Result<RecipeTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::Dataset(format!("Missing required column: {column}")));
        }
    }

    let mut recipes = Vec::new();
    for (id, row) in reader.deserialize::<DatasetRow>().enumerate() {
        recipes.push(row?.into_recipe(id));
    }

    debug!("Parsed {} dataset rows", recipes.len());
    Ok(RecipeTable::new(recipes))
}
