//! Fetcher and projector output.

use std::fmt;

use crate::models::Dialect;

/// First candidate the remote host answered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub url: String,
    pub dialect: Dialect,
    pub content: String,
}

/// A named type found in the source, rendered as an empty interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStub {
    pub name: String,
}

impl TypeStub {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for TypeStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "export interface {} {{}}", self.name)
    }
}

/// Concatenates stubs in the order given.
pub fn render_stubs(stubs: &[TypeStub]) -> String {
    stubs.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_empty_interface_per_stub() {
        let stubs = [TypeStub::new("User"), TypeStub::new("Order")];
        assert_eq!(
            render_stubs(&stubs),
            "export interface User {}\nexport interface Order {}\n"
        );
    }

    #[test]
    fn renders_nothing_without_stubs() {
        assert_eq!(render_stubs(&[]), "");
    }
}
