pub mod expander;
pub mod matcher;
pub mod pagination;
pub mod service;

use crate::recipe::Recipe;

pub use expander::{KeywordExpander, SearchTerms};
pub use pagination::{next_cursor, PAGE_SIZE};
pub use service::RecipeService;

/// One page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub recipes: Vec<Recipe>,
    pub total_count: usize,
    pub next_cursor: Option<usize>,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self {
            recipes: Vec::new(),
            total_count: 0,
            next_cursor: None,
        }
    }
}
