//! Route entry types.
//!
//! A route is either a page rendered by the view pipeline or a redirect
//! issued at the edge. [`RouteDefinition`] is the uncompiled form written
//! in the catalog or loaded from a route file; [`RouteEntry`] is what the
//! table holds after validation.

use serde::Serialize;

use crate::routing::pattern::RoutePattern;

/// Rendering metadata for a page route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRoute {
    /// View bundle to render (a path under the site's views).
    pub view: String,

    /// Page title.
    pub title: String,

    /// Override for the localization resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intl_name: Option<String>,

    /// Viewport width hint (e.g. `device-width`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<String>,

    /// Suppress default title/meta-tag injection when rendering.
    pub dynamic_meta_tags: bool,
}

impl PageRoute {
    pub fn new(view: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            title: title.into(),
            intl_name: None,
            viewport_width: None,
            dynamic_meta_tags: false,
        }
    }

    pub fn intl_name(mut self, intl_name: impl Into<String>) -> Self {
        self.intl_name = Some(intl_name.into());
        self
    }

    pub fn viewport_width(mut self, width: impl Into<String>) -> Self {
        self.viewport_width = Some(width.into());
        self
    }

    pub fn dynamic_meta_tags(mut self) -> Self {
        self.dynamic_meta_tags = true;
        self
    }
}

/// Target of a redirect route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectRoute {
    /// Absolute URL or site path, possibly with a query or fragment.
    #[serde(rename = "redirect")]
    pub target: String,
}

/// What a matching route does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RouteKind {
    Page(PageRoute),
    Redirect(RedirectRoute),
}

impl RouteKind {
    /// Short label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            RouteKind::Page(_) => "page",
            RouteKind::Redirect(_) => "redirect",
        }
    }
}

/// An uncompiled route, as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub name: String,
    pub pattern: String,
    pub route_alias: Option<String>,
    pub kind: RouteKind,
}

impl RouteDefinition {
    /// Declare a page route with default rendering options.
    pub fn page(
        name: impl Into<String>,
        pattern: impl Into<String>,
        view: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self::with_page(name, pattern, PageRoute::new(view, title))
    }

    /// Declare a page route from fully built page metadata.
    ///
    /// Page-only options live on [`PageRoute`], so they cannot be set on
    /// a redirect.
    pub fn with_page(name: impl Into<String>, pattern: impl Into<String>, page: PageRoute) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            route_alias: None,
            kind: RouteKind::Page(page),
        }
    }

    /// Declare a redirect route.
    pub fn redirect(
        name: impl Into<String>,
        pattern: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            route_alias: None,
            kind: RouteKind::Redirect(RedirectRoute {
                target: target.into(),
            }),
        }
    }

    /// Attach the edge alias pattern.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.route_alias = Some(alias.into());
        self
    }
}

/// A validated route held by the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    name: String,
    pattern: RoutePattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    route_alias: Option<String>,
    #[serde(flatten)]
    kind: RouteKind,
}

impl RouteEntry {
    /// Assemble an entry from a definition and its compiled pattern.
    pub(crate) fn new(definition: RouteDefinition, pattern: RoutePattern) -> Self {
        Self {
            name: definition.name,
            pattern,
            route_alias: definition.route_alias,
            kind: definition.kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Edge alias, verbatim. Never interpreted here.
    pub fn route_alias(&self) -> Option<&str> {
        self.route_alias.as_deref()
    }

    pub fn kind(&self) -> &RouteKind {
        &self.kind
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.kind, RouteKind::Redirect(_))
    }

    pub fn page(&self) -> Option<&PageRoute> {
        match &self.kind {
            RouteKind::Page(page) => Some(page),
            RouteKind::Redirect(_) => None,
        }
    }

    /// Redirect target as declared.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            RouteKind::Redirect(redirect) => Some(&redirect.target),
            RouteKind::Page(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_options() {
        let def = RouteDefinition::with_page(
            "studio",
            r"^/studios/\d+/?$",
            PageRoute::new("studio/studio", "Scratch Studio")
                .intl_name("studio")
                .viewport_width("device-width")
                .dynamic_meta_tags(),
        )
        .alias("/studios/?$");

        assert_eq!(def.route_alias.as_deref(), Some("/studios/?$"));
        let RouteKind::Page(page) = &def.kind else {
            panic!("expected a page");
        };
        assert_eq!(page.intl_name.as_deref(), Some("studio"));
        assert_eq!(page.viewport_width.as_deref(), Some("device-width"));
        assert!(page.dynamic_meta_tags);
    }

    #[test]
    fn test_plain_page_has_default_options() {
        let def = RouteDefinition::page("about", "^/about/?$", "about/about", "About");
        assert_eq!(def.kind, RouteKind::Page(PageRoute::new("about/about", "About")));
    }

    #[test]
    fn test_redirect_carries_only_a_target() {
        let def = RouteDefinition::redirect("store", "^/store/?$", "https://shop.example")
            .alias("/store/?$");

        assert_eq!(def.route_alias.as_deref(), Some("/store/?$"));
        assert_eq!(
            def.kind,
            RouteKind::Redirect(RedirectRoute {
                target: "https://shop.example".into()
            })
        );
    }

    #[test]
    fn test_entry_serializes_flat() {
        let def = RouteDefinition::redirect("help", "^/help/?$", "/ideas").alias("/help");
        let pattern = RoutePattern::compile(&def.pattern).unwrap();
        let entry = RouteEntry::new(def, pattern);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "help",
                "pattern": "^/help/?$",
                "routeAlias": "/help",
                "kind": "redirect",
                "redirect": "/ideas",
            })
        );
    }
}
