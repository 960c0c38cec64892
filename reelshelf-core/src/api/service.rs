//! Catalog service trait
//!
//! View models talk to the remote catalog only through this seam, so tests
//! can drive them with scripted responses.

use std::fmt::Debug;

use async_trait::async_trait;
use reelshelf_model::{
    CreditsPage, ImagesPage, SearchResults, Title, TitleId, TitlePage,
};

use super::client::CatalogClient;
use super::options::{CreditsOptions, MediaAssetOptions, TitlesQuery};
use super::result::ApiResult;

/// Remote operations the view models depend on
#[async_trait]
pub trait CatalogService: Send + Sync + Debug {
    async fn list_titles(&self, query: &TitlesQuery) -> ApiResult<TitlePage>;

    async fn get_title(&self, id: &TitleId) -> ApiResult<Title>;

    async fn search_titles(
        &self,
        query: &str,
        limit: u32,
    ) -> ApiResult<SearchResults>;

    async fn get_title_credits(
        &self,
        id: &TitleId,
        options: &CreditsOptions,
    ) -> ApiResult<CreditsPage>;

    async fn get_title_images(
        &self,
        id: &TitleId,
        options: &MediaAssetOptions,
    ) -> ApiResult<ImagesPage>;
}

#[async_trait]
impl CatalogService for CatalogClient {
    async fn list_titles(&self, query: &TitlesQuery) -> ApiResult<TitlePage> {
        CatalogClient::list_titles(self, query).await
    }

    async fn get_title(&self, id: &TitleId) -> ApiResult<Title> {
        CatalogClient::get_title(self, id).await
    }

    async fn search_titles(
        &self,
        query: &str,
        limit: u32,
    ) -> ApiResult<SearchResults> {
        CatalogClient::search_titles(self, query, limit).await
    }

    async fn get_title_credits(
        &self,
        id: &TitleId,
        options: &CreditsOptions,
    ) -> ApiResult<CreditsPage> {
        CatalogClient::get_title_credits(self, id, options).await
    }

    async fn get_title_images(
        &self,
        id: &TitleId,
        options: &MediaAssetOptions,
    ) -> ApiResult<ImagesPage> {
        CatalogClient::get_title_images(self, id, options).await
    }
}

#[async_trait]
impl<S: CatalogService + ?Sized> CatalogService for std::sync::Arc<S> {
    async fn list_titles(&self, query: &TitlesQuery) -> ApiResult<TitlePage> {
        (**self).list_titles(query).await
    }

    async fn get_title(&self, id: &TitleId) -> ApiResult<Title> {
        (**self).get_title(id).await
    }

    async fn search_titles(
        &self,
        query: &str,
        limit: u32,
    ) -> ApiResult<SearchResults> {
        (**self).search_titles(query, limit).await
    }

    async fn get_title_credits(
        &self,
        id: &TitleId,
        options: &CreditsOptions,
    ) -> ApiResult<CreditsPage> {
        (**self).get_title_credits(id, options).await
    }

    async fn get_title_images(
        &self,
        id: &TitleId,
        options: &MediaAssetOptions,
    ) -> ApiResult<ImagesPage> {
        (**self).get_title_images(id, options).await
    }
}
