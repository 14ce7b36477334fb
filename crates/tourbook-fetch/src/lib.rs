pub mod adapter;
pub mod client;
pub mod config;

pub use adapter::HttpCatalogFetcher;
pub use client::{ClientError, UpstreamClient};
pub use config::FetchConfig;
