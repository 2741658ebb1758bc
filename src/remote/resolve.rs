//! Request path → candidate raw-content URLs.
//!
//! A request path `<author>/<repository>/<branch>/path/to/file` is turned
//! into one URL per known dialect:
//!
//! `<host>/<author>/<repository>/<branch>/raw/path/to/file<ext>`
//!
//! The extension the caller supplies only picks the target extension; the
//! source dialect is always probed through `Dialect::CANDIDATES`.

use crate::error::{AppError, Result};
use crate::models::{CandidateUrl, Dialect, RequestPath, ResolvedTarget, TYPESCRIPT_EXT};

pub const DEFAULT_REMOTE_HOST: &str = "https://github.com";

/// Substituted when the path stops at the branch.
pub const DEFAULT_FILENAME: &str = "__fart.go";

const RAW_SEGMENT: &str = "raw";

#[derive(Debug, Clone)]
pub struct PathResolver {
    host: String,
}

impl PathResolver {
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, path: &str) -> Result<ResolvedTarget> {
        let request = parse_request_path(path)?;
        let (stem, ext) = split_extension(&request.file_fragments);

        let target_extension = if ext.is_empty() {
            TYPESCRIPT_EXT.to_string()
        } else {
            ext.to_string()
        };

        let candidates = Dialect::CANDIDATES
            .iter()
            .map(|&dialect| CandidateUrl {
                dialect,
                url: [
                    self.host.as_str(),
                    request.author.as_str(),
                    request.repository.as_str(),
                    request.branch.as_str(),
                    RAW_SEGMENT,
                    format!("{}{}", stem, dialect.extension()).as_str(),
                ]
                .join("/"),
            })
            .collect();

        Ok(ResolvedTarget {
            request,
            stem,
            source_extensions: Dialect::CANDIDATES.iter().map(|d| d.extension()).collect(),
            target_extension,
            candidates,
        })
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE_HOST)
    }
}

/// Splits on `/` without dropping empty fragments.
fn parse_request_path(path: &str) -> Result<RequestPath> {
    let fragments: Vec<&str> = path.split('/').collect();
    if fragments.len() < 3 {
        return Err(AppError::MalformedPath);
    }

    let mut file_fragments: Vec<String> = fragments[3..].iter().map(|s| s.to_string()).collect();
    if file_fragments.is_empty() {
        file_fragments.push(DEFAULT_FILENAME.to_string());
    }

    Ok(RequestPath {
        author: fragments[0].to_string(),
        repository: fragments[1].to_string(),
        branch: fragments[2].to_string(),
        file_fragments,
    })
}

/// Returns the joined path without the last fragment's extension, and that
/// extension including its leading dot. Leading-dot names are not special:
/// `.gitignore` has an empty stem.
fn split_extension(fragments: &[String]) -> (String, &str) {
    let Some((last, dirs)) = fragments.split_last() else {
        return (String::new(), "");
    };

    let (name, ext) = match last.rfind('.') {
        Some(idx) => last.split_at(idx),
        None => (last.as_str(), ""),
    };

    let mut parts: Vec<&str> = dirs.iter().map(String::as_str).collect();
    parts.push(name);
    (parts.join("/"), ext)
}
