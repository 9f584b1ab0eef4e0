use recipe_search::config::{KeywordMap, OnlineConfig};
use recipe_search::dataset::{loader, RecipeTable};
use recipe_search::online::OnlineClient;
use recipe_search::recipe::{DataSource, Recipe};
use recipe_search::search::{KeywordExpander, RecipeService, SearchPage, PAGE_SIZE};
use recipe_search::Error;
use std::io::Write;
use std::path::Path;

const FIXTURE: &str = "tests/fixtures/indian_food_sample.csv";

fn offline_client() -> OnlineClient {
    OnlineClient::new(OnlineConfig {
        api_key: None,
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 1,
        user_agent: "test".to_string(),
    })
    .unwrap()
}

fn service(table: RecipeTable) -> RecipeService {
    RecipeService::new(
        table,
        KeywordExpander::new(KeywordMap::default()),
        offline_client(),
    )
}

fn fixture_service() -> RecipeService {
    service(RecipeTable::load_or_empty(FIXTURE))
}

/// 30 rows, 20 of which match "rice" through one synonym or another
fn rice_table() -> RecipeTable {
    let mut csv = String::from(
        "TranslatedRecipeName,TranslatedIngredients,TranslatedInstructions,Cuisine,Diet\n",
    );
    let synonyms = ["Basmati rice", "chawal", "veg pulao", "brown RICE"];
    for i in 0..30 {
        let ingredients = if i % 3 == 2 {
            "wheat flour, ghee".to_string()
        } else {
            format!("{}, salt", synonyms[i % synonyms.len()])
        };
        csv.push_str(&format!("Dish {i},\"{ingredients}\",Cook.,Indian,Vegetarian\n"));
    }
    loader::load_reader(csv.as_bytes()).unwrap()
}

fn ids(page: &SearchPage) -> Vec<String> {
    page.recipes.iter().map(|r| r.display().id.to_string()).collect()
}

#[test]
fn test_fixture_loads_with_row_ids() {
    let service = fixture_service();
    assert_eq!(service.table().len(), 5);

    let Some(Recipe::Offline(recipe)) = service.offline_detail(3) else {
        panic!("expected offline recipe 3");
    };
    assert_eq!(recipe.name.as_deref(), Some("Chicken Pulao"));
    assert_eq!(recipe.total_time_minutes, Some(60));
    assert!(!recipe.is_vegetarian);

    let Some(Recipe::Offline(recipe)) = service.offline_detail(4) else {
        panic!("expected offline recipe 4");
    };
    assert_eq!(recipe.diet, None);
    assert!(!recipe.is_vegetarian);

    assert!(service.offline_detail(5).is_none());
}

#[tokio::test]
async fn test_rice_pages_of_fifteen() {
    let service = service(rice_table());

    let first = service.search("rice", DataSource::Offline, 0).await.unwrap();
    assert_eq!(first.total_count, 20);
    assert_eq!(first.recipes.len(), PAGE_SIZE);
    assert_eq!(first.next_cursor, Some(15));

    let second = service.search("rice", DataSource::Offline, 15).await.unwrap();
    assert_eq!(second.total_count, 20);
    assert_eq!(second.recipes.len(), 5);
    assert_eq!(second.next_cursor, None);
}

#[tokio::test]
async fn test_pages_reconstruct_match_set() {
    let service = service(rice_table());

    let mut collected = Vec::new();
    let mut page = service.search("rice", DataSource::Offline, 0).await.unwrap();
    collected.extend(ids(&page));

    while let Some(next) = page.next_cursor {
        page = service.search("rice", DataSource::Offline, next).await.unwrap();
        collected.extend(ids(&page));
    }

    let expected: Vec<String> = (0..30)
        .filter(|i| i % 3 != 2)
        .map(|i| i.to_string())
        .collect();
    assert_eq!(collected, expected);
}

#[tokio::test]
async fn test_offset_past_end_is_empty() {
    let service = service(rice_table());
    let page = service.search("rice", DataSource::Offline, 45).await.unwrap();
    assert!(page.recipes.is_empty());
    assert_eq!(page.total_count, 20);
    assert_eq!(page.next_cursor, None);
}

#[tokio::test]
async fn test_ids_are_stable_across_queries() {
    let service = fixture_service();

    let by_rice = service.search("rice", DataSource::Offline, 0).await.unwrap();
    let by_onion = service.search("onion", DataSource::Offline, 0).await.unwrap();

    assert_eq!(ids(&by_rice), vec!["1", "3"]);
    assert_eq!(ids(&by_onion), vec!["0", "2", "3", "4"]);

    let pulao_from_rice = by_rice.recipes[1].display();
    let pulao_from_onion = by_onion.recipes[2].display();
    assert_eq!(pulao_from_rice, pulao_from_onion);
}

#[tokio::test]
async fn test_potato_synonyms() {
    let service = fixture_service();

    // "aloo" only in row 2, "potato" only in row 4
    let potato = service.search("Potato", DataSource::Offline, 0).await.unwrap();
    assert_eq!(ids(&potato), vec!["2", "4"]);

    let aloo = service.search("aloo", DataSource::Offline, 0).await.unwrap();
    assert_eq!(ids(&aloo), vec!["2"]);
}

#[tokio::test]
async fn test_zero_matches() {
    let service = fixture_service();
    let page = service
        .search("dragonfruit", DataSource::Offline, 0)
        .await
        .unwrap();
    assert_eq!(page.total_count, 0);
    assert_eq!(page.next_cursor, None);
    assert!(page.recipes.is_empty());
}

#[tokio::test]
async fn test_empty_query_is_rejected() {
    let service = fixture_service();
    let err = service
        .search("   ", DataSource::Offline, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_cuisine_search() {
    let service = fixture_service();
    let page = service.search_cuisine("North Indian", 0).unwrap();
    assert_eq!(ids(&page), vec!["2", "4"]);
    assert_eq!(page.next_cursor, None);

    // No synonym expansion on cuisine
    let page = service.search_cuisine("potato", 0).unwrap();
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn test_missing_dataset_yields_zero_matches() {
    let service = service(RecipeTable::load_or_empty(Path::new("no/such/dataset.csv")));

    for query in ["rice", "potato", "a"] {
        let page = service.search(query, DataSource::Offline, 0).await.unwrap();
        assert_eq!(page.total_count, 0);
        assert_eq!(page.next_cursor, None);
    }
    assert_eq!(service.search_cuisine("indian", 0).unwrap().total_count, 0);
    assert!(service.offline_detail(0).is_none());
}

#[tokio::test]
async fn test_malformed_dataset_yields_zero_matches() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,stuff\nrice pudding,milk").unwrap();

    let service = service(RecipeTable::load_or_empty(file.path()));
    let page = service.search("rice", DataSource::Offline, 0).await.unwrap();
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn test_online_load_more_is_empty() {
    let service = fixture_service();
    let page = service.search("rice", DataSource::Online, 15).await.unwrap();
    assert_eq!(page, SearchPage::empty());

    for offset in [0, 15] {
        let page = service.load_more("rice", DataSource::Online, offset).await.unwrap();
        assert_eq!(page, SearchPage::empty());
    }
    assert!(matches!(
        service.load_more(" ", DataSource::Online, 0).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn test_offline_load_more_matches_search() {
    let service = service(rice_table());
    let page = service.load_more("rice", DataSource::Offline, 15).await.unwrap();
    assert_eq!(page.recipes.len(), 5);
    assert_eq!(page.total_count, 20);
}
