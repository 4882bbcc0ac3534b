//! Startup with a route file, then publication.

use std::io::Write;

use site_routes::config::{ConfigError, Environment, RoutesConfig};
use site_routes::lifecycle::{startup, StartupError};

const EXTRA_ROUTES: &str = r#"
[[routes]]
name = "legacy-profile"
pattern = "^/users/:username/?$"
redirect = "/people/:username"

[[development_routes]]
name = "style-guide"
pattern = "^/style-guide/?$"
view = "style-guide/style-guide"
title = "Style Guide"
viewportWidth = "device-width"
"#;

fn route_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn config(environment: Environment, file: &tempfile::NamedTempFile) -> RoutesConfig {
    RoutesConfig {
        environment,
        route_file: Some(file.path().to_path_buf()),
        ..RoutesConfig::default()
    }
}

#[test]
fn test_route_file_extends_catalog() {
    let file = route_file(EXTRA_ROUTES);

    let production = startup::build_table(&config(Environment::Production, &file)).unwrap();
    let base_len = site_routes::catalog::base_routes().len();
    assert_eq!(production.len(), base_len + 1);
    assert_eq!(production.position("legacy-profile"), Some(base_len));
    assert!(production.find("style-guide").is_none());

    let development = startup::build_table(&config(Environment::Development, &file)).unwrap();
    let order: Vec<_> = development.iter().skip(base_len).map(|e| e.name()).collect();
    assert_eq!(order, ["components", "legacy-profile", "style-guide"]);
}

#[test]
fn test_route_file_cannot_redefine_catalog_route() {
    let file = route_file(
        r#"
[[routes]]
name = "about"
pattern = "^/about-us/?$"
redirect = "/about"
"#,
    );

    match startup::build_table(&config(Environment::Production, &file)) {
        Err(StartupError::Table(e)) => assert_eq!(e.errors().len(), 1),
        other => panic!("expected a table error, got {other:?}"),
    }
}

#[test]
fn test_route_file_rows_are_validated() {
    let file = route_file(
        r#"
[[routes]]
name = "half-page"
pattern = "^/half/?$"
title = "Half"
"#,
    );

    assert!(matches!(
        startup::build_table(&config(Environment::Production, &file)),
        Err(StartupError::Config(ConfigError::Validation(_)))
    ));
}

#[test]
fn test_start_publishes_and_resolves() {
    let file = route_file(EXTRA_ROUTES);

    let router = startup::start(&config(Environment::Production, &file)).unwrap();
    let published = startup::published().expect("table should be published");
    assert_eq!(published.len(), router.table().len());

    let m = router.resolve("/users/scratchcat").into_match().unwrap();
    assert_eq!(m.redirect_location().as_deref(), Some("/people/scratchcat"));

    assert!(matches!(
        startup::start(&config(Environment::Production, &file)),
        Err(StartupError::AlreadyPublished)
    ));
}
