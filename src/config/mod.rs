#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::page_source::ResponseOrdering;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// 上游 API 單頁筆數上限
pub const MAX_PAGE_SIZE: u32 = 100;

/// 合併後的最終設定：預設值 < TOML 檔 < 命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub page_size: Option<u32>,
    pub start_page: i64,
    pub response_ordering: ResponseOrdering,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            page_size: None,
            start_page: 1,
            response_ordering: ResponseOrdering::default(),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn with_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(endpoint) = &file.source.endpoint {
            self.api_endpoint = endpoint.clone();
        }
        if file.source.page_size.is_some() {
            self.page_size = file.source.page_size;
        }
        if let Some(start_page) = file.table.start_page {
            self.start_page = start_page;
        }
        if let Some(discard) = file.table.discard_stale_responses {
            self.response_ordering = if discard {
                ResponseOrdering::LatestRequestWins
            } else {
                ResponseOrdering::LastArrivalWins
            };
        }
        if let Some(verbose) = file.logging.verbose {
            self.verbose = verbose;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn with_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(endpoint) = &cli.api_endpoint {
            self.api_endpoint = endpoint.clone();
        }
        if cli.page_size.is_some() {
            self.page_size = cli.page_size;
        }
        if let Some(start_page) = cli.start_page {
            self.start_page = start_page;
        }
        if cli.allow_stale_responses {
            self.response_ordering = ResponseOrdering::LastArrivalWins;
        }
        self.verbose |= cli.verbose;
        self
    }

    /// 讀取 `--config` 指定的檔案（若有），再套上命令列參數
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = &cli.config {
            tracing::debug!("Loading configuration from: {}", path);
            settings = settings.with_toml(&TomlConfig::from_file(path)?);
        }
        Ok(settings.with_cli(cli))
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    fn start_page(&self) -> i64 {
        self.start_page
    }

    fn response_ordering(&self) -> ResponseOrdering {
        self.response_ordering
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.api_endpoint)?;
        if let Some(page_size) = self.page_size {
            validate_range("source.page_size", page_size, 1, MAX_PAGE_SIZE)?;
        }
        validate_positive_number("table.start_page", self.start_page, 1)?;
        Ok(())
    }
}
