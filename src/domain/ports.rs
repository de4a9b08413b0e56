use crate::core::page_source::ResponseOrdering;
use crate::domain::model::Artwork;
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// 分頁作品資料來源
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> std::result::Result<Vec<Artwork>, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn page_size(&self) -> Option<u32>;
    fn start_page(&self) -> i64;
    fn response_ordering(&self) -> ResponseOrdering;
    fn verbose(&self) -> bool;
}
