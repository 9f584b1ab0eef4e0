use serde::Deserialize;

/// Response of `GET /recipes/complexSearch`
#[derive(Debug, Clone, Deserialize)]
pub struct ComplexSearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    pub title: Option<String>,
    pub image: Option<String>,
}

/// Response of `GET /recipes/{id}/information`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub cuisines: Option<Vec<String>>,
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
    pub instructions: Option<String>,
    pub summary: Option<String>,
    pub vegetarian: Option<bool>,
    pub image: Option<String>,
    pub source_url: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedIngredient {
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub name: Option<String>,
}

impl ExtendedIngredient {
    /// "2 cups flour"; missing parts are skipped
    pub fn line(&self) -> String {
        let amount = self.amount.map(|a| a.to_string());
        [amount.as_deref(), self.unit.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_line() {
        let ingredient = ExtendedIngredient {
            amount: Some(2.0),
            unit: Some("cups".to_string()),
            name: Some("flour".to_string()),
        };
        assert_eq!(ingredient.line(), "2 cups flour");

        let ingredient = ExtendedIngredient {
            amount: Some(0.5),
            unit: Some("".to_string()),
            name: Some("onion".to_string()),
        };
        assert_eq!(ingredient.line(), "0.5 onion");

        let ingredient = ExtendedIngredient {
            amount: None,
            unit: None,
            name: None,
        };
        assert_eq!(ingredient.line(), "");
    }

    #[test]
    fn test_decode_information() {
        let info: RecipeInformation = serde_json::from_str(
            r#"{
                "id": 716429,
                "title": "Pasta with Garlic",
                "cuisines": ["Italian", "Mediterranean"],
                "extendedIngredients": [{"amount": 1.0, "unit": "tbsp", "name": "butter"}],
                "instructions": null,
                "vegetarian": true,
                "readyInMinutes": 45
            }"#,
        )
        .unwrap();

        assert_eq!(info.cuisines.unwrap().len(), 2);
        assert_eq!(info.extended_ingredients.unwrap()[0].line(), "1 tbsp butter");
        assert_eq!(info.instructions, None);
        assert_eq!(info.vegetarian, Some(true));
        assert_eq!(info.ready_in_minutes, Some(45));
    }
}
