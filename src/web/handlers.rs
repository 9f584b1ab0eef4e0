use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    api::{handlers::AppState, models::SearchBy},
    error::Error,
    recipe::{DataSource, DisplayRecipe, Recipe},
    search::SearchPage,
    Result,
};

fn render<T: Template>(template: &T) -> Result<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|e| Error::Internal(format!("Template render failed: {e}")))
}

/// Home page template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    error: Option<String>,
    online_enabled: bool,
}

/// Search results template
#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    heading: String,
    query: String,
    data_source: String,
    search_by: String,
    recipes: Vec<DisplayRecipe>,
    total_count: usize,
    next_start: Option<usize>,
}

impl ResultsTemplate {
    fn new(heading: String, query: String, source: DataSource, search_by: SearchBy, page: SearchPage) -> Self {
        Self {
            heading,
            query,
            data_source: source.to_string(),
            search_by: search_by.as_str().to_string(),
            recipes: page.recipes.iter().map(Recipe::display).collect(),
            total_count: page.total_count,
            next_start: page.next_cursor,
        }
    }
}

/// Recipe detail template
#[derive(Template)]
#[template(path = "details.html")]
struct DetailsTemplate {
    recipe: Option<DisplayRecipe>,
    schema_json: String,
}

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    ingredient: String,
    #[serde(default)]
    data_source: String,
}

/// GET / - Home page
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render(&IndexTemplate {
        error: None,
        online_enabled: state.service.online_enabled(),
    })
}

/// POST /search - Search by ingredient
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response> {
    let source = DataSource::from_form(&form.data_source);

    let page = match state.service.search(&form.ingredient, source, 0).await {
        Ok(page) => page,
        Err(Error::Validation(message)) => {
            let html = render(&IndexTemplate {
                error: Some(message),
                online_enabled: state.service.online_enabled(),
            })?;
            return Ok(html.into_response());
        }
        Err(e) => return Err(e),
    };

    let query = form.ingredient.trim().to_lowercase();
    let template = ResultsTemplate::new(
        format!("Recipes with \u{201c}{query}\u{201d}"),
        query,
        source,
        SearchBy::Ingredient,
        page,
    );

    Ok(render(&template)?.into_response())
}

/// GET /cuisine/:cuisine_name - Search by cuisine
pub async fn search_by_cuisine(
    State(state): State<AppState>,
    Path(cuisine_name): Path<String>,
) -> Result<impl IntoResponse> {
    let page = state.service.search_cuisine(&cuisine_name, 0)?;

    let template = ResultsTemplate::new(
        format!("{} cuisine", cuisine_name.trim()),
        cuisine_name.trim().to_string(),
        DataSource::Offline,
        SearchBy::Cuisine,
        page,
    );

    render(&template)
}

fn details_page(recipe: Option<Recipe>) -> Result<Response> {
    let recipe = recipe.as_ref().map(Recipe::display);
    let status = if recipe.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    let schema_json = recipe
        .as_ref()
        .map(|r| super::schema::to_script_json(&super::schema::recipe_to_schema_json(r)))
        .unwrap_or_default();

    let html = render(&DetailsTemplate {
        recipe,
        schema_json,
    })?;

    Ok((status, html).into_response())
}

/// GET /recipe/offline/:recipe_id - Offline recipe detail page
pub async fn recipe_details_offline(
    State(state): State<AppState>,
    Path(recipe_id): Path<usize>,
) -> Result<Response> {
    details_page(state.service.offline_detail(recipe_id))
}

/// GET /recipe/online/:online_id - Online recipe detail page
pub async fn recipe_details_online(
    State(state): State<AppState>,
    Path(online_id): Path<String>,
) -> Result<Response> {
    details_page(state.service.online_detail(&online_id).await)
}
