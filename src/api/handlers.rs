use axum::{extract::State, Form, Json};
use tracing::debug;

use crate::{
    api::models::*,
    recipe::{DataSource, Recipe},
    search::RecipeService,
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: RecipeService,
    pub settings: crate::config::Settings,
}

/// POST /load_more - Next page of a search as JSON
pub async fn load_more(
    State(state): State<AppState>,
    Form(form): Form<LoadMoreForm>,
) -> Result<Json<LoadMoreResponse>> {
    debug!("Load more request: {:?}", form);

    let page = match form.search_by {
        SearchBy::Cuisine => state
            .service
            .search_cuisine(&form.ingredient, form.start_index)?,
        SearchBy::Ingredient => {
            let source = DataSource::from_form(&form.data_source);
            state
                .service
                .load_more(&form.ingredient, source, form.start_index)
                .await?
        }
    };

    Ok(Json(LoadMoreResponse {
        recipes: page.recipes.iter().map(Recipe::display).collect(),
        next_start: page.next_cursor,
        total_count: page.total_count,
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        offline_recipes: state.service.table().len(),
        online_enabled: state.service.online_enabled(),
    }))
}

