use crate::config::{KeywordMap, Settings};
use crate::dataset::{RecipeTable, SearchField};
use crate::online::OnlineClient;
use crate::recipe::{DataSource, Recipe};
use crate::search::{
    expander::{KeywordExpander, SearchTerms},
    matcher, pagination, SearchPage, PAGE_SIZE,
};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Shown when a search is submitted without a query
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter an ingredient to search.";

/// Read-only recipe lookups shared by every request.
///
/// Constructed once at startup. Load-more requests carry only the query,
/// source and offset, so every page is recomputed from scratch against the
/// same table.
#[derive(Clone)]
pub struct RecipeService {
    table: Arc<RecipeTable>,
    expander: KeywordExpander,
    online: OnlineClient,
}

impl RecipeService {
    pub fn new(table: RecipeTable, expander: KeywordExpander, online: OnlineClient) -> Self {
        info!(
            "Recipe service ready: {} offline recipes, online search {}",
            table.len(),
            if online.is_enabled() { "enabled" } else { "disabled" }
        );

        Self {
            table: Arc::new(table),
            expander,
            online,
        }
    }

    /// Build the service described by `settings` around a loaded table
    pub fn from_settings(settings: &Settings, table: RecipeTable) -> Result<Self> {
        let keywords = KeywordMap::load_or_default(settings.dataset.keywords_path.as_deref());
        let online = OnlineClient::new(settings.online.clone())?;
        Ok(Self::new(table, KeywordExpander::new(keywords), online))
    }

    pub fn table(&self) -> &RecipeTable {
        &self.table
    }

    pub fn online_enabled(&self) -> bool {
        self.online.is_enabled()
    }

    /// Trim and lower-case a raw query, rejecting empty input
    pub fn normalize_query(raw: &str) -> Result<String> {
        let query = raw.trim().to_lowercase();
        if query.is_empty() {
            return Err(Error::Validation(EMPTY_QUERY_MESSAGE.to_string()));
        }
        Ok(query)
    }

    /// Ingredient search against the selected source
    pub async fn search(
        &self,
        raw_query: &str,
        source: DataSource,
        offset: usize,
    ) -> Result<SearchPage> {
        let query = Self::normalize_query(raw_query)?;
        debug!("Search {:?} on {} from offset {}", query, source, offset);

        match source {
            DataSource::Offline => self.search_offline(&query, SearchField::Ingredients, offset),
            // The first page already holds every online hit
            DataSource::Online if offset > 0 => Ok(SearchPage::empty()),
            DataSource::Online => Ok(self.search_online(&query).await),
        }
    }

    /// Follow-up page for "load more".
    ///
    /// Online results never have a second page: the first page already holds
    /// every hit, so the API is not called again whatever the offset.
    pub async fn load_more(
        &self,
        raw_query: &str,
        source: DataSource,
        offset: usize,
    ) -> Result<SearchPage> {
        match source {
            DataSource::Offline => self.search(raw_query, source, offset).await,
            DataSource::Online => {
                Self::normalize_query(raw_query)?;
                Ok(SearchPage::empty())
            }
        }
    }

    /// Cuisine search; offline only and without synonym expansion
    pub fn search_cuisine(&self, raw_cuisine: &str, offset: usize) -> Result<SearchPage> {
        let cuisine = Self::normalize_query(raw_cuisine)?;
        debug!("Cuisine search {:?} from offset {}", cuisine, offset);
        self.search_offline(&cuisine, SearchField::Cuisine, offset)
    }

    fn search_offline(&self, query: &str, field: SearchField, offset: usize) -> Result<SearchPage> {
        let terms = match field {
            SearchField::Ingredients => self.expander.expand(query),
            SearchField::Cuisine => SearchTerms::single(query),
        };

        let matches = matcher::find_matches(&self.table, field, &terms)?;
        let total_count = matches.len();

        let recipes = pagination::page(&matches, offset, PAGE_SIZE)
            .iter()
            .map(|r| Recipe::Offline((*r).clone()))
            .collect();

        Ok(SearchPage {
            recipes,
            total_count,
            next_cursor: pagination::next_cursor(total_count, offset, PAGE_SIZE),
        })
    }

    async fn search_online(&self, query: &str) -> SearchPage {
        let hits = self.online.search(query).await;
        let total_count = hits.len();

        let recipes = hits
            .into_iter()
            .take(PAGE_SIZE)
            .map(Recipe::Online)
            .collect();

        SearchPage {
            recipes,
            total_count,
            next_cursor: pagination::next_cursor(total_count, 0, PAGE_SIZE),
        }
    }

    /// Offline record by table position
    pub fn offline_detail(&self, id: usize) -> Option<Recipe> {
        self.table.get(id).cloned().map(Recipe::Offline)
    }

    /// Online record by external id
    pub async fn online_detail(&self, online_id: &str) -> Option<Recipe> {
        self.online.fetch_detail(online_id).await.map(Recipe::Online)
    }
}
