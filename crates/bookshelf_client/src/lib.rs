//! Bookshelf client: typed access to the remote volumes catalog.
mod client;
mod error;
mod types;

pub use client::{CatalogSource, ClientSettings, ReqwestCatalog};
pub use error::ClientError;
pub use types::{ImageLinks, Volume, VolumeInfo, VolumePage, PAGE_SIZE};
