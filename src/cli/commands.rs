use crate::recipe::{DataSource, DisplayRecipe, Recipe};
use crate::search::{RecipeService, SearchPage};
use crate::utils::sanitize::truncate;
use crate::{Error, Result};
use std::fmt::Write as _;

/// Run a search and print one page
pub async fn search(
    service: &RecipeService,
    query: &str,
    source: DataSource,
    cuisine: bool,
    start: usize,
) -> Result<()> {
    let page = if cuisine {
        if source == DataSource::Online {
            return Err(Error::Validation(
                "Cuisine search is only available offline".to_string(),
            ));
        }
        service.search_cuisine(query, start)?
    } else {
        service.search(query, source, start).await?
    };

    print!("{}", format_page(&page, start));
    Ok(())
}

/// Print the details of one recipe
pub async fn show(service: &RecipeService, id: &str, online: bool) -> Result<()> {
    let recipe = if online {
        service.online_detail(id).await
    } else {
        let row: usize = id
            .trim()
            .parse()
            .map_err(|_| Error::Validation(format!("Invalid offline recipe id: {id}")))?;
        service.offline_detail(row)
    };

    let recipe = recipe.ok_or_else(|| Error::NotFound(format!("Recipe {id}")))?;
    print!("{}", format_details(&recipe.display()));
    Ok(())
}

pub fn format_page(page: &SearchPage, start: usize) -> String {
    let mut out = String::new();

    if page.recipes.is_empty() {
        let _ = writeln!(out, "No recipes found ({} total)", page.total_count);
        return out;
    }

    let _ = writeln!(
        out,
        "Showing {}-{} of {} recipes:\n",
        start + 1,
        start + page.recipes.len(),
        page.total_count
    );

    for recipe in page.recipes.iter().map(Recipe::display) {
        let _ = writeln!(out, "  [{}] {}", recipe.id, recipe.name);
        let _ = writeln!(out, "      {} | {}", recipe.cuisine, recipe.diet_label);
        if let Some(ingredients) = &recipe.ingredients {
            let _ = writeln!(out, "      {}", truncate(ingredients, 80));
        }
    }

    match page.next_cursor {
        Some(next) => {
            let _ = writeln!(out, "\nMore results: use --start {next}");
        }
        None => {
            let _ = writeln!(out, "\nNo more results");
        }
    }

    out
}

pub fn format_details(recipe: &DisplayRecipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.name);
    let _ = writeln!(out, "{}", "=".repeat(recipe.name.chars().count()));
    if !recipe.cuisine.is_empty() {
        let _ = writeln!(out, "Cuisine: {}", recipe.cuisine);
    }
    let _ = writeln!(out, "Diet: {}", recipe.diet_label);
    for fact in &recipe.facts {
        let _ = writeln!(out, "{}: {}", fact.label, fact.value);
    }

    let _ = writeln!(
        out,
        "\nIngredients:\n  {}",
        recipe.ingredients.as_deref().unwrap_or("(none listed)")
    );
    let _ = writeln!(
        out,
        "\nInstructions:\n  {}",
        recipe.instructions.as_deref().unwrap_or("No instructions found.")
    );

    if let Some(url) = &recipe.source_url {
        let _ = writeln!(out, "\nSource: {url}");
    }

    out
}
