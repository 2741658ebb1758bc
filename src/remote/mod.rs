pub mod fetch;
pub mod resolve;

pub use fetch::{HttpFetcher, SourceFetcher, StatusPolicy, fetch_first_available};
pub use resolve::PathResolver;
