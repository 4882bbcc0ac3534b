//! Alias export for the edge/CDN configuration generator.
//!
//! `routeAlias` strings are opaque here. Several routes may share one
//! alias; how the edge layer picks among them is its own business, so
//! groups simply list member routes in table order.

use serde::Serialize;

use crate::routing::{RouteEntry, RouteTable};

/// Routes sharing one alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasGroup {
    pub alias: String,
    pub routes: Vec<String>,
}

/// Distinct aliases in order of first appearance, with their routes.
///
/// Routes without an alias are left out.
pub fn alias_groups(table: &RouteTable) -> Vec<AliasGroup> {
    let mut groups: Vec<AliasGroup> = Vec::new();

    for entry in table {
        let Some(alias) = entry.route_alias() else {
            continue;
        };
        match groups.iter_mut().find(|group| group.alias == alias) {
            Some(group) => group.routes.push(entry.name().to_string()),
            None => groups.push(AliasGroup {
                alias: alias.to_string(),
                routes: vec![entry.name().to_string()],
            }),
        }
    }

    groups
}

/// Routes the edge layer never sees through an alias.
pub fn unaliased(table: &RouteTable) -> Vec<&RouteEntry> {
    table.iter().filter(|entry| entry.route_alias().is_none()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{RouteDefinition, RouteTableBuilder};

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let table = RouteTableBuilder::with_base([
            RouteDefinition::redirect("fly", "^/fly/?$", "/x").alias("/(makeit)?fly/?$"),
            RouteDefinition::redirect("bird", "^/bird/?$", "/ideas"),
            RouteDefinition::page("explore", "^/explore/:kind/:all/?$", "explore/explore", "Explore")
                .alias("/explore(?!/ajax)"),
            RouteDefinition::redirect("makeitfly", "^/makeitfly/?$", "/x").alias("/(makeit)?fly/?$"),
            RouteDefinition::redirect("explore-redirect", "^/explore/?$", "/explore/projects/all")
                .alias("/explore(?!/ajax)"),
        ])
        .build()
        .unwrap();

        let groups = alias_groups(&table);
        assert_eq!(
            groups,
            vec![
                AliasGroup {
                    alias: "/(makeit)?fly/?$".into(),
                    routes: vec!["fly".into(), "makeitfly".into()],
                },
                AliasGroup {
                    alias: "/explore(?!/ajax)".into(),
                    routes: vec!["explore".into(), "explore-redirect".into()],
                },
            ]
        );

        let bare: Vec<_> = unaliased(&table).into_iter().map(RouteEntry::name).collect();
        assert_eq!(bare, ["bird"]);
    }
}
