pub mod page_source;
pub mod selection;
pub mod table;

pub use crate::domain::model::{Artwork, ArtworkId};
pub use crate::domain::ports::{ArtworkSource, ConfigProvider};
pub use crate::utils::error::Result;
