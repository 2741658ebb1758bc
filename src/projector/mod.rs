//! Source text → TypeScript interface stubs.
//!
//! Each dialect with a projector implements `Projector`. The
//! `ProjectorRegistry` maps dialects to projectors; it is built once in
//! `main` and shared read-only by every request.

pub mod go;

use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::{Dialect, TypeStub, render_stubs};

pub use go::GoProjector;

/// Which type declarations become stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationScope {
    /// Every named type, including ones declared inside function bodies.
    #[default]
    All,
    /// Only types declared directly in the source file.
    TopLevel,
}

pub trait Projector: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Parse `content` and collect one stub per type declaration, in
    /// source order. `source_id` only appears in diagnostics.
    fn extract(&self, source_id: &str, content: &str) -> Result<Vec<TypeStub>>;
}

#[derive(Default)]
pub struct ProjectorRegistry {
    projectors: HashMap<Dialect, Box<dyn Projector>>,
}

impl ProjectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in projector.
    pub fn with_builtin(scope: DeclarationScope) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GoProjector::new(scope)));
        registry
    }

    /// Replaces any projector already registered for the same dialect.
    pub fn register(&mut self, projector: Box<dyn Projector>) {
        self.projectors.insert(projector.dialect(), projector);
    }

    pub fn get(&self, dialect: Dialect) -> Option<&dyn Projector> {
        self.projectors.get(&dialect).map(|p| p.as_ref())
    }

    pub fn project(&self, dialect: Dialect, source_id: &str, content: &str) -> Result<String> {
        let projector = self
            .get(dialect)
            .ok_or(AppError::UnsupportedDialect(dialect))?;

        let stubs = projector.extract(source_id, content)?;
        tracing::debug!("{}: {} type declarations", source_id, stubs.len());
        Ok(render_stubs(&stubs))
    }
}
