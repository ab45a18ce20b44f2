//! Release metadata retrieval over HTTP.

mod client;

#[cfg(test)]
pub use client::MockFetchMetadata;
pub use client::{FetchMetadata, Fetched, MetadataFetcher, TransportError};
