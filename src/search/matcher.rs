use crate::dataset::{OfflineRecipe, RecipeTable, SearchField};
use crate::error::Result;
use crate::search::expander::SearchTerms;
use tracing::debug;

/// Every record whose `field` contains any of `terms`, case-insensitively.
///
/// Matching is plain substring search: "rice" also matches "licorice".
/// Records with no value in `field` never match. Results keep table order.
pub fn find_matches<'a>(
    table: &'a RecipeTable,
    field: SearchField,
    terms: &SearchTerms,
) -> Result<Vec<&'a OfflineRecipe>> {
    if table.is_empty() || terms.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = terms.pattern()?;
    let matches: Vec<&OfflineRecipe> = table
        .iter()
        .filter(|recipe| recipe.field(field).is_some_and(|text| pattern.is_match(text)))
        .collect();

    debug!(
        "Matched {} of {} recipes on {:?} ({} terms)",
        matches.len(),
        table.len(),
        field,
        terms.len()
    );

    Ok(matches)
}
