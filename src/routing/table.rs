//! Route table construction.
//!
//! # Responsibilities
//! - Collect the base catalog and any appended extensions, in order
//! - Validate and compile everything once, failing fast
//! - Freeze the result as an immutable [`RouteTable`]
//!
//! # Design Decisions
//! - Base entries always precede appended entries
//! - Appends happen only on the builder; a built table never changes
//! - All validation problems are reported together

use std::collections::HashMap;

use thiserror::Error;

use crate::config::validation::{compile_definitions, join_errors, ValidationError};
use crate::routing::route::{RouteDefinition, RouteEntry};

/// The table could not be built.
#[derive(Debug, Error)]
#[error("route table is invalid: {}", join_errors(.errors))]
pub struct TableError {
    errors: Vec<ValidationError>,
}

impl TableError {
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Accumulates route definitions before validation.
#[derive(Debug, Clone, Default)]
pub struct RouteTableBuilder {
    definitions: Vec<RouteDefinition>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the base list.
    pub fn with_base(base: impl IntoIterator<Item = RouteDefinition>) -> Self {
        Self {
            definitions: base.into_iter().collect(),
        }
    }

    /// Append entries after everything added so far.
    pub fn extend(mut self, routes: impl IntoIterator<Item = RouteDefinition>) -> Self {
        self.definitions.extend(routes);
        self
    }

    /// Append entries only when `enabled`.
    pub fn extend_if(self, enabled: bool, routes: impl IntoIterator<Item = RouteDefinition>) -> Self {
        if enabled {
            self.extend(routes)
        } else {
            self
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validate, compile and freeze.
    pub fn build(self) -> Result<RouteTable, TableError> {
        let entries = compile_definitions(self.definitions).map_err(|errors| {
            for error in &errors {
                tracing::error!(error = %error, "Invalid route");
            }
            TableError { errors }
        })?;

        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.name().to_string(), index))
            .collect();

        tracing::debug!(count = entries.len(), "Route table built");
        Ok(RouteTable { entries, by_name })
    }
}

/// Ordered, immutable list of validated routes.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in resolution order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&RouteEntry> {
        self.entries.get(index)
    }

    /// Look a route up by name.
    pub fn find(&self, name: &str) -> Option<&RouteEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Position of a route in resolution order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
