pub mod catalog_service;
pub mod lookup;
pub mod snapshot_service;

pub use catalog_service::{ArtistProjection, CatalogService};
pub use snapshot_service::{RefreshReport, SnapshotService};
