pub mod catalog_source;
pub mod fetcher;
pub mod snapshot;

pub use catalog_source::{CatalogSource, SourceError};
pub use fetcher::{CatalogFetcher, FetchError};
pub use snapshot::{SnapshotWriter, WriteError};
