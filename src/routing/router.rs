//! Route lookup.
//!
//! # Responsibilities
//! - Hold the built route table
//! - Find the first route whose pattern matches a request path
//! - Return the matched route with its captures, or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; the first match wins, no specificity ranking
//! - Explicit NotFound rather than a silent default
//! - Paths arrive already URL-decoded

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::Serialize;

use crate::observability::metrics;
use crate::routing::pattern::Captures;
use crate::routing::route::{PageRoute, RouteEntry, RouteKind};
use crate::routing::table::RouteTable;

/// Resolves request paths against a route table.
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable>,
}

impl Router {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a path against the table, first match wins.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        for (index, entry) in self.table.iter().enumerate() {
            if let Some(captures) = entry.pattern().captures(path) {
                tracing::trace!(path = %path, route = %entry.name(), "Route matched");
                metrics::record_resolution(entry.name(), entry.kind().label());
                return Resolution::Match(RouteMatch {
                    entry,
                    index,
                    captures,
                });
            }
        }

        tracing::debug!(path = %path, "No route matched");
        metrics::record_not_found();
        Resolution::NotFound
    }

    /// Resolve a path with its query string re-attached.
    ///
    /// Several patterns accept a trailing `?query`, so it is matched as
    /// part of the path. An empty query is ignored.
    pub fn resolve_with_query(&self, path: &str, query: Option<&str>) -> Resolution<'_> {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => self.resolve(&format!("{path}?{query}")),
            None => self.resolve(path),
        }
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution<'a> {
    Match(RouteMatch<'a>),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }

    pub fn matched(&self) -> Option<&RouteMatch<'a>> {
        match self {
            Resolution::Match(m) => Some(m),
            Resolution::NotFound => None,
        }
    }

    pub fn into_match(self) -> Option<RouteMatch<'a>> {
        match self {
            Resolution::Match(m) => Some(m),
            Resolution::NotFound => None,
        }
    }
}

/// A route matched against a path, with its captures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch<'a> {
    #[serde(flatten)]
    entry: &'a RouteEntry,
    #[serde(skip)]
    index: usize,
    captures: Captures,
}

impl<'a> RouteMatch<'a> {
    pub fn entry(&self) -> &'a RouteEntry {
        self.entry
    }

    /// Position of the matched route in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn name(&self) -> &'a str {
        self.entry.name()
    }

    pub fn route_alias(&self) -> Option<&'a str> {
        self.entry.route_alias()
    }

    pub fn is_redirect(&self) -> bool {
        self.entry.is_redirect()
    }

    pub fn is_page(&self) -> bool {
        !self.is_redirect()
    }

    pub fn page(&self) -> Option<&'a PageRoute> {
        self.entry.page()
    }

    /// Redirect target as declared, placeholders included.
    pub fn target(&self) -> Option<&'a str> {
        self.entry.target()
    }

    pub fn view(&self) -> Option<&'a str> {
        self.page().map(|page| page.view.as_str())
    }

    pub fn title(&self) -> Option<&'a str> {
        self.page().map(|page| page.title.as_str())
    }

    pub fn intl_name(&self) -> Option<&'a str> {
        self.page()?.intl_name.as_deref()
    }

    pub fn viewport_width(&self) -> Option<&'a str> {
        self.page()?.viewport_width.as_deref()
    }

    /// False for redirects.
    pub fn dynamic_meta_tags(&self) -> bool {
        self.page().is_some_and(|page| page.dynamic_meta_tags)
    }

    /// Redirect target with `:ident` placeholders filled from named
    /// captures. Placeholders without a capture are kept verbatim.
    ///
    /// Only the path, query and fragment are filled. A leading
    /// `scheme:` and `//host:port` are copied as written.
    pub fn redirect_location(&self) -> Option<String> {
        let RouteKind::Redirect(redirect) = self.entry.kind() else {
            return None;
        };

        let (origin, rest) = redirect.target.split_at(origin_len(&redirect.target));
        let filled = placeholder_re().replace_all(rest, |caps: &regex::Captures<'_>| {
            self.captures
                .name(&caps[1])
                .unwrap_or(&caps[0])
                .to_string()
        });
        Some(format!("{origin}{filled}"))
    }
}

/// Byte length of a leading `scheme:` plus `//authority`, if present.
fn origin_len(target: &str) -> usize {
    let scheme = target
        .find(':')
        .filter(|&colon| {
            let name = &target[..colon];
            name.starts_with(|c: char| c.is_ascii_alphabetic())
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        })
        .map_or(0, |colon| colon + 1);

    match target[scheme..].strip_prefix("//") {
        Some(rest) => {
            let authority = rest
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(rest.len());
            scheme + 2 + authority
        }
        None => scheme,
    }
}

/// Free-standing form of [`RouteMatch::is_redirect`].
pub fn is_redirect(m: &RouteMatch<'_>) -> bool {
    m.is_redirect()
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::RouteDefinition;
    use crate::routing::table::RouteTableBuilder;

    fn router(routes: Vec<RouteDefinition>) -> Router {
        Router::new(Arc::new(RouteTableBuilder::with_base(routes).build().unwrap()))
    }

    #[test]
    fn test_first_match_wins() {
        let router = router(vec![
            RouteDefinition::page("specific", "^/items/new/?$", "items/new", "New Item"),
            RouteDefinition::page("generic", "^/items/:id/?$", "items/item", "Item"),
        ]);

        let m = router.resolve("/items/new").into_match().unwrap();
        assert_eq!(m.name(), "specific");
        assert_eq!(m.index(), 0);

        let m = router.resolve("/items/42").into_match().unwrap();
        assert_eq!(m.name(), "generic");
        assert_eq!(m.captures().name("id"), Some("42"));
    }

    #[test]
    fn test_reordering_changes_the_winner() {
        let router = router(vec![
            RouteDefinition::page("generic", "^/items/:id/?$", "items/item", "Item"),
            RouteDefinition::page("specific", "^/items/new/?$", "items/new", "New Item"),
        ]);

        let m = router.resolve("/items/new").into_match().unwrap();
        assert_eq!(m.name(), "generic");
        assert_eq!(m.captures().name("id"), Some("new"));
    }

    #[test]
    fn test_not_found() {
        let router = router(vec![RouteDefinition::redirect("a", "^/a$", "/b")]);
        let resolution = router.resolve("/nope");
        assert!(resolution.is_not_found());
        assert!(resolution.matched().is_none());
    }

    #[test]
    fn test_query_is_reattached() {
        let router = router(vec![
            RouteDefinition::page("faq", r"^/faq/?(\?.*)?$", "faq/faq", "FAQ"),
            RouteDefinition::page("camp", "^/camp/?$", "camp/camp", "Down Deep"),
        ]);

        assert_eq!(
            router
                .resolve_with_query("/faq", Some("lang=fr"))
                .matched()
                .and_then(|m| m.captures().get(1)),
            Some("?lang=fr")
        );
        assert!(router.resolve_with_query("/camp", Some("x=1")).is_not_found());
        assert!(!router.resolve_with_query("/camp", Some("")).is_not_found());
        assert!(!router.resolve_with_query("/camp", None).is_not_found());
    }

    #[test]
    fn test_page_accessors() {
        let router = router(vec![RouteDefinition::with_page(
            "annual-report",
            r"^/annual-report/?(\?.*)?$",
            PageRoute::new("annual-report/2021/annual-report", "Annual Report 2021")
                .intl_name("annual-report-2021")
                .viewport_width("device-width"),
        )]);

        let m = router.resolve("/annual-report/").into_match().unwrap();
        assert!(m.is_page());
        assert!(!is_redirect(&m));
        assert_eq!(m.view(), Some("annual-report/2021/annual-report"));
        assert_eq!(m.title(), Some("Annual Report 2021"));
        assert_eq!(m.intl_name(), Some("annual-report-2021"));
        assert_eq!(m.viewport_width(), Some("device-width"));
        assert!(!m.dynamic_meta_tags());
        assert_eq!(m.target(), None);
        assert_eq!(m.redirect_location(), None);
    }

    #[test]
    fn test_redirect_location_interpolates_captures() {
        let router = router(vec![
            RouteDefinition::redirect("old-user", "^/users/:username/?$", "/people/:username#:tab"),
            RouteDefinition::redirect("external", "^/store/?$", "https://shop.example:443/"),
        ]);

        let m = router.resolve("/users/griffpatch").into_match().unwrap();
        assert!(m.is_redirect());
        assert_eq!(m.view(), None);
        assert!(!m.dynamic_meta_tags());
        assert_eq!(m.target(), Some("/people/:username#:tab"));
        assert_eq!(m.redirect_location().as_deref(), Some("/people/griffpatch#:tab"));

        let m = router.resolve("/store").into_match().unwrap();
        assert_eq!(m.redirect_location().as_deref(), Some("https://shop.example:443/"));
    }

    #[test]
    fn test_redirect_location_leaves_scheme_and_authority() {
        let router = router(vec![
            RouteDefinition::redirect("mail", "^/mail/:user/?$", "mailto:user@example.org"),
            RouteDefinition::redirect("port", "^/port/:port/?$", "https://shop.example:port/item/:port"),
            RouteDefinition::redirect("relative", "^/rel/:host/?$", "//:host/x/:host"),
        ]);

        let location = |path: &str| router.resolve(path).into_match().unwrap().redirect_location();

        assert_eq!(location("/mail/ann").as_deref(), Some("mailto:user@example.org"));
        assert_eq!(
            location("/port/42").as_deref(),
            Some("https://shop.example:port/item/42")
        );
        assert_eq!(location("/rel/cdn").as_deref(), Some("//:host/x/cdn"));
    }

    #[test]
    fn test_origin_len() {
        assert_eq!(origin_len("/people/:username"), 0);
        assert_eq!(origin_len("mailto:user"), "mailto:".len());
        assert_eq!(origin_len("https://shop.example:443/a"), "https://shop.example:443".len());
        assert_eq!(origin_len("https://shop.example"), "https://shop.example".len());
        assert_eq!(origin_len("//cdn.example?x=1"), "//cdn.example".len());
        assert_eq!(origin_len("/a:b"), 0);
    }

    #[test]
    fn test_resolution_serializes() {
        let router = router(vec![RouteDefinition::redirect("sec", "^/sec/?$", "https://sip.example/sec")]);

        let json = serde_json::to_value(router.resolve("/sec")).unwrap();
        assert_eq!(json["outcome"], "match");
        assert_eq!(json["name"], "sec");
        assert_eq!(json["redirect"], "https://sip.example/sec");
        assert_eq!(json["captures"]["positional"][0], "/sec");

        let json = serde_json::to_value(router.resolve("/x")).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "not_found" }));
    }
}
