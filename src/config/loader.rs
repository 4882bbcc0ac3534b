//! Route file loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RouteFile;
use crate::config::validation::{join_errors, validate_rows, ValidationError};
use crate::routing::route::RouteDefinition;

/// Error type for route file loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Typed routes loaded from a route file, in file order.
#[derive(Debug, Clone, Default)]
pub struct LoadedRoutes {
    pub routes: Vec<RouteDefinition>,
    pub development_routes: Vec<RouteDefinition>,
}

/// Parse route file contents and validate each row.
pub fn parse_route_file(content: &str) -> Result<LoadedRoutes, ConfigError> {
    let file: RouteFile = toml::from_str(content)?;

    let routes = validate_rows(file.routes);
    let development_routes = validate_rows(file.development_routes);

    match (routes, development_routes) {
        (Ok(routes), Ok(development_routes)) => Ok(LoadedRoutes {
            routes,
            development_routes,
        }),
        (routes, development_routes) => {
            let errors = routes
                .err()
                .into_iter()
                .chain(development_routes.err())
                .flatten()
                .collect();
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Load and validate a TOML route file.
pub fn load_route_file(path: &Path) -> Result<LoadedRoutes, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loaded = parse_route_file(&content)?;
    tracing::debug!(
        path = %path.display(),
        routes = loaded.routes.len(),
        development_routes = loaded.development_routes.len(),
        "Route file loaded"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FILE: &str = r#"
[[routes]]
name = "bird-redirect"
pattern = "^/bird/?$"
redirect = "/ideas"

[[routes]]
name = "camp"
pattern = "^/camp/?$"
routeAlias = "/camp/?$"
view = "camp/camp"
title = "Down Deep"

[[development_routes]]
name = "playground"
pattern = "^/playground/?$"
view = "playground/playground"
title = "Playground"
"#;

    #[test]
    fn test_parse_route_file() {
        let loaded = parse_route_file(FILE).unwrap();
        let names: Vec<_> = loaded.routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["bird-redirect", "camp"]);
        assert_eq!(loaded.development_routes.len(), 1);
    }

    #[test]
    fn test_parse_collects_errors_from_both_sections() {
        let content = r#"
[[routes]]
name = "nothing"
pattern = "^/nothing$"

[[development_routes]]
name = "both"
pattern = "^/both$"
view = "v"
title = "t"
redirect = "/"
"#;
        match parse_route_file(content) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_route_file("[[routes]]\nname = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FILE.as_bytes()).unwrap();

        let loaded = load_route_file(file.path()).unwrap();
        assert_eq!(loaded.routes.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_route_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
