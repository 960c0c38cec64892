use std::sync::Mutex;

use async_trait::async_trait;
use reelshelf_core::api::{
    ApiResult, CatalogService, CreditsOptions, MediaAssetOptions, TitlesQuery,
};
use reelshelf_core::model::{
    Credit, CreditsPage, ImagesPage, SearchResults, Title, TitleId,
    TitleImage, TitlePage,
};
use reelshelf_core::{Applied, LoadState, SearchViewModel, load_title_detail};

#[derive(Debug, Default)]
struct FakeCatalog {
    searches: Mutex<Vec<(String, u32)>>,
    asset_page_sizes: Mutex<Vec<u32>>,
    fail_images: bool,
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn list_titles(&self, _: &TitlesQuery) -> ApiResult<TitlePage> {
        ApiResult::Failure("unexpected listing".into())
    }

    async fn get_title(&self, id: &TitleId) -> ApiResult<Title> {
        if id.as_str() == "tt404" {
            return ApiResult::Failure("API Error: 404 Not Found".into());
        }
        ApiResult::Success(Title::new(id.clone(), "Heat"))
    }

    async fn search_titles(
        &self,
        query: &str,
        limit: u32,
    ) -> ApiResult<SearchResults> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        ApiResult::Success(SearchResults {
            titles: vec![Title::new("tt0113277", query)],
        })
    }

    async fn get_title_credits(
        &self,
        _: &TitleId,
        options: &CreditsOptions,
    ) -> ApiResult<CreditsPage> {
        self.asset_page_sizes.lock().unwrap().push(options.page_size);
        ApiResult::Success(CreditsPage {
            credits: vec![Credit {
                category: Some("director".into()),
                ..Credit::default()
            }],
            ..CreditsPage::default()
        })
    }

    async fn get_title_images(
        &self,
        _: &TitleId,
        options: &MediaAssetOptions,
    ) -> ApiResult<ImagesPage> {
        self.asset_page_sizes.lock().unwrap().push(options.page_size);
        if self.fail_images {
            return ApiResult::Failure("Network error: timed out".into());
        }
        ApiResult::Success(ImagesPage {
            images: vec![TitleImage {
                url: "https://img.example/still.jpg".into(),
                ..TitleImage::default()
            }],
            ..ImagesPage::default()
        })
    }
}

#[tokio::test]
async fn search_trims_query_and_loads_results() {
    let mut vm = SearchViewModel::new(FakeCatalog::default());

    let applied = vm.search("  heat ").await;
    assert_eq!(applied, Some(Applied::Replaced { count: 1 }));
    assert_eq!(vm.query(), "heat");
    assert_eq!(vm.state(), &LoadState::Loaded);
}

#[tokio::test]
async fn blank_search_clears_without_a_request() {
    let catalog = std::sync::Arc::new(FakeCatalog::default());
    let mut vm = SearchViewModel::new(catalog.clone());

    vm.search("heat").await;
    assert_eq!(vm.results().len(), 1);

    assert_eq!(vm.search("   ").await, None);
    assert!(vm.results().is_empty());
    assert_eq!(vm.state(), &LoadState::Idle);
    assert_eq!(
        catalog.searches.lock().unwrap().as_slice(),
        &[("heat".to_string(), 50)]
    );
}

#[test]
fn stale_search_response_is_ignored() {
    let mut vm = SearchViewModel::new(FakeCatalog::default());

    let first = vm.begin_search("hea").unwrap();
    let second = vm.begin_search("heat").unwrap();

    let found = |name: &str| {
        ApiResult::Success(SearchResults {
            titles: vec![Title::new("tt1", name)],
        })
    };
    assert_eq!(
        vm.apply(second, found("heat")),
        Applied::Replaced { count: 1 }
    );
    assert_eq!(vm.apply(first, found("hea")), Applied::Stale);
    assert_eq!(vm.results()[0].display_title(), "heat");
}

#[tokio::test]
async fn detail_loads_title_images_and_credits() {
    let catalog = FakeCatalog::default();

    let detail = load_title_detail(&catalog, &TitleId::new("tt0113277"))
        .await
        .into_result()
        .unwrap();

    assert_eq!(detail.title.display_title(), "Heat");
    assert_eq!(detail.images.len(), 1);
    assert_eq!(detail.credits.len(), 1);

    let mut sizes = catalog.asset_page_sizes.lock().unwrap().clone();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![10, 20]);
}

#[tokio::test]
async fn detail_tolerates_missing_images() {
    let catalog = FakeCatalog {
        fail_images: true,
        ..FakeCatalog::default()
    };

    let detail = load_title_detail(&catalog, &TitleId::new("tt0113277"))
        .await
        .into_result()
        .unwrap();
    assert!(detail.images.is_empty());
    assert_eq!(detail.credits.len(), 1);
}

#[tokio::test]
async fn detail_fails_when_title_fails() {
    let catalog = FakeCatalog::default();

    let result = load_title_detail(&catalog, &TitleId::new("tt404")).await;
    assert_eq!(result.error(), Some("API Error: 404 Not Found"));
    assert!(catalog.asset_page_sizes.lock().unwrap().is_empty());
}
