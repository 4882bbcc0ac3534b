//! Route validation.
//!
//! # Responsibilities
//! - Turn flat route rows into typed definitions (page xor redirect)
//! - Reject repeated route names across the whole table
//! - Compile every pattern, rejecting malformed expressions
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the rows/definitions
//! - Runs before a table is accepted; there is no runtime fallback

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RouteConfig;
use crate::routing::pattern::RoutePattern;
use crate::routing::route::{PageRoute, RedirectRoute, RouteDefinition, RouteEntry, RouteKind};

/// A configuration-integrity problem found while building the table.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route `{name}` appears at positions {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("route `{name}` has an invalid pattern: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("route `{name}` declares both page fields and a redirect")]
    PageAndRedirect { name: String },

    #[error("route `{name}` declares neither page fields nor a redirect")]
    NoAction { name: String },

    #[error("route `{name}` is a page without a `{missing}`")]
    IncompletePage { name: String, missing: &'static str },
}

pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert one row, enforcing exactly one of page or redirect.
pub fn validate_row(row: RouteConfig) -> Result<RouteDefinition, ValidationError> {
    let RouteConfig {
        name,
        pattern,
        route_alias,
        view,
        title,
        intl_name,
        viewport_width,
        dynamic_meta_tags,
        redirect,
    } = row;

    let has_page_fields = view.is_some()
        || title.is_some()
        || intl_name.is_some()
        || viewport_width.is_some()
        || dynamic_meta_tags.is_some();

    let kind = match (has_page_fields, redirect) {
        (true, Some(_)) => return Err(ValidationError::PageAndRedirect { name }),
        (false, None) => return Err(ValidationError::NoAction { name }),
        (false, Some(target)) => RouteKind::Redirect(RedirectRoute { target }),
        (true, None) => {
            let Some(view) = view else {
                return Err(ValidationError::IncompletePage { name, missing: "view" });
            };
            let Some(title) = title else {
                return Err(ValidationError::IncompletePage { name, missing: "title" });
            };
            RouteKind::Page(PageRoute {
                view,
                title,
                intl_name,
                viewport_width,
                dynamic_meta_tags: dynamic_meta_tags.unwrap_or(false),
            })
        }
    };

    Ok(RouteDefinition {
        name,
        pattern,
        route_alias,
        kind,
    })
}

/// Convert a batch of rows, collecting every failure.
pub fn validate_rows(rows: Vec<RouteConfig>) -> Result<Vec<RouteDefinition>, Vec<ValidationError>> {
    let mut definitions = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for row in rows {
        match validate_row(row) {
            Ok(definition) => definitions.push(definition),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(definitions)
    } else {
        Err(errors)
    }
}

/// Check names and compile patterns for the final ordered list.
///
/// Order is preserved: entry `i` of the result is definition `i`.
pub fn compile_definitions(
    definitions: Vec<RouteDefinition>,
) -> Result<Vec<RouteEntry>, Vec<ValidationError>> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(definitions.len());
    let mut entries = Vec::with_capacity(definitions.len());
    let mut errors = Vec::new();

    for (index, definition) in definitions.into_iter().enumerate() {
        if definition.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if let Some(&first) = seen.get(&definition.name) {
            errors.push(ValidationError::DuplicateName {
                name: definition.name.clone(),
                first,
                second: index,
            });
        } else {
            seen.insert(definition.name.clone(), index);
        }

        match RoutePattern::compile(&definition.pattern) {
            Ok(pattern) => entries.push(RouteEntry::new(definition, pattern)),
            Err(e) => errors.push(ValidationError::InvalidPattern {
                name: definition.name,
                source: Box::new(e),
            }),
        }
    }

    if errors.is_empty() {
        Ok(entries)
    } else {
        Err(errors)
    }
}
