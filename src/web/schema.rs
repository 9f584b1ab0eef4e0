//! Schema.org JSON-LD generation for recipe detail pages

use crate::recipe::DisplayRecipe;
use serde_json::{json, Value};

/// Extract first number from a string like "30 min" -> 30
fn extract_number(s: &str) -> Option<u32> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Convert a minutes fact to ISO 8601 duration format
/// "30 min" -> "PT30M", "90 min" -> "PT1H30M"
fn format_iso_duration(time_str: &str) -> Option<String> {
    let minutes = extract_number(time_str)?;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    Some(match (hours, minutes) {
        (0, m) => format!("PT{m}M"),
        (h, 0) => format!("PT{h}H"),
        (h, m) => format!("PT{h}H{m}M"),
    })
}

fn fact<'a>(recipe: &'a DisplayRecipe, label: &str) -> Option<&'a str> {
    recipe
        .facts
        .iter()
        .find(|f| f.label == label)
        .map(|f| f.value.as_str())
}

/// Convert a DisplayRecipe to Schema.org Recipe JSON-LD
pub fn recipe_to_schema_json(recipe: &DisplayRecipe) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": recipe.name,
    });

    if !recipe.cuisine.is_empty() {
        schema["recipeCuisine"] = json!(recipe.cuisine);
    }

    if let Some(image) = &recipe.image_url {
        schema["image"] = json!(image);
    }

    if let Some(url) = &recipe.source_url {
        schema["url"] = json!(url);
    }

    // Ingredients are stored as one comma-separated line
    if let Some(ingredients) = &recipe.ingredients {
        let items: Vec<&str> = ingredients
            .split(',')
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .collect();
        if !items.is_empty() {
            schema["recipeIngredient"] = json!(items);
        }
    }

    if let Some(instructions) = &recipe.instructions {
        schema["recipeInstructions"] = json!(instructions);
    }

    if recipe.is_vegetarian == Some(true) {
        schema["suitableForDiet"] = json!("https://schema.org/VegetarianDiet");
    }

    for (label, key) in [
        ("Prep time", "prepTime"),
        ("Cook time", "cookTime"),
        ("Total time", "totalTime"),
        ("Ready in", "totalTime"),
    ] {
        if let Some(duration) = fact(recipe, label).and_then(format_iso_duration) {
            schema[key] = json!(duration);
        }
    }

    if let Some(servings) = fact(recipe, "Servings") {
        schema["recipeYield"] = json!(servings);
    }

    schema
}

/// Serialize JSON-LD for embedding inside a `<script>` element
pub fn to_script_json(schema: &Value) -> String {
    serde_json::to_string_pretty(schema)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/")
}
