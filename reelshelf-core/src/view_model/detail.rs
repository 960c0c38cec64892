use reelshelf_model::{Credit, Title, TitleId, TitleImage};
use serde::Serialize;
use tracing::debug;

use crate::api::{ApiResult, CatalogService, CreditsOptions, MediaAssetOptions};

pub const DETAIL_IMAGES_PAGE_SIZE: u32 = 20;
pub const DETAIL_CREDITS_PAGE_SIZE: u32 = 10;

/// Everything the detail page shows for one title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleDetail {
    pub title: Title,
    pub images: Vec<TitleImage>,
    pub credits: Vec<Credit>,
}

/// Fetch a title plus its first images and credits.
///
/// Only the title itself is required; failed image or credit lookups leave
/// those lists empty.
pub async fn load_title_detail<S: CatalogService + ?Sized>(
    service: &S,
    id: &TitleId,
) -> ApiResult<TitleDetail> {
    let title = match service.get_title(id).await {
        ApiResult::Success(title) => title,
        ApiResult::Failure(message) => return ApiResult::Failure(message),
    };

    let image_options = MediaAssetOptions::with_page_size(DETAIL_IMAGES_PAGE_SIZE);
    let credit_options = CreditsOptions::with_page_size(DETAIL_CREDITS_PAGE_SIZE);
    let (images, credits) = tokio::join!(
        service.get_title_images(id, &image_options),
        service.get_title_credits(id, &credit_options),
    );

    if let Some(err) = images.error() {
        debug!(id = %id, error = %err, "Images unavailable");
    }
    if let Some(err) = credits.error() {
        debug!(id = %id, error = %err, "Credits unavailable");
    }

    ApiResult::Success(TitleDetail {
        title,
        images: images.map(|page| page.images).unwrap_or(Vec::new()),
        credits: credits.map(|page| page.credits).unwrap_or(Vec::new()),
    })
}
