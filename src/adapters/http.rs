use crate::domain::model::{Artwork, ArtworkListResponse};
use crate::domain::ports::{ArtworkSource, ConfigProvider};
use crate::utils::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;

/// Art Institute of Chicago 作品列表 API 的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct ArticClient {
    client: Client,
    endpoint: String,
    page_size: Option<u32>,
}

impl ArticClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            page_size: None,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.api_endpoint()).with_page_size(config.page_size())
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ArtworkSource for ArticClient {
    async fn fetch_page(&self, page: u32) -> std::result::Result<Vec<Artwork>, FetchError> {
        let mut query = vec![("page", page.to_string())];
        if let Some(limit) = self.page_size {
            query.push(("limit", limit.to_string()));
        }

        tracing::debug!("Making API request to: {} (page {})", self.endpoint, page);
        let response = self.client.get(&self.endpoint).query(&query).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // 先取原始位元組，解析失敗時才能歸類為 Decode
        let body = response.bytes().await?;
        let parsed: ArtworkListResponse = serde_json::from_slice(&body)?;

        Ok(parsed.data)
    }
}
