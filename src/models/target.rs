//! Resolver DTOs.
//!
//! - `RequestPath`: the request split into author/repository/branch/file
//! - `ResolvedTarget`: stem, extensions and the ordered candidate URLs
//! - `CandidateUrl`: one guessed raw-content URL for one dialect
//!
//! Serialized as the body of dry-run requests.

use serde::Serialize;

use crate::models::Dialect;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPath {
    pub author: String,
    pub repository: String,
    pub branch: String,
    pub file_fragments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateUrl {
    pub dialect: Dialect,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub request: RequestPath,
    /// File path below the branch with the last extension removed
    pub stem: String,
    pub source_extensions: Vec<&'static str>,
    pub target_extension: String,
    /// Tried in order; first hit wins
    pub candidates: Vec<CandidateUrl>,
}
