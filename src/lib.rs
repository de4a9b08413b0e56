pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::ArticClient;
pub use app::Session;
pub use config::{Settings, TomlConfig};
pub use crate::core::page_source::{FetchOutcome, PageDataSource, ResponseOrdering};
pub use crate::core::selection::SelectionController;
pub use crate::core::table::ArtworkTable;
pub use domain::model::Artwork;
pub use utils::error::{AppError, FetchError, Result};
