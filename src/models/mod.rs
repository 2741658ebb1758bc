//! Data types passed between the resolver, fetcher and projectors.
//!
//! - `dialect`: Dialect, the source languages the gateway knows about
//! - `target`: RequestPath, ResolvedTarget, CandidateUrl (resolver output)
//! - `stub`: FetchResult, TypeStub (fetcher and projector output)

pub mod dialect;
pub mod stub;
pub mod target;

pub use dialect::*;
pub use stub::*;
pub use target::*;
