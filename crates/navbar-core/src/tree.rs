//! Lookups over a navigation configuration
//!
//! Pure traversal helpers: depth-first over areas, then sections, then
//! items, in configured order. When several items match the same path,
//! the first one encountered under this order wins.

use serde::{Deserialize, Serialize};

use crate::config::{MenuItem, NavbarConfiguration, NavigationItem};
use crate::path::{matches_navigation_item, strip_route_prefix};

/// Rail entry derived from an area: its title and icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailItem {
    /// Area title
    pub title: String,
    /// Area icon name
    pub icon: String,
}

/// Title of the area that is active by default.
///
/// Priority: the explicit `default_active_area` override, then the
/// first area flagged `default_active`, then the first configured
/// area, then the empty string when no areas exist.
pub fn default_active_area(config: &NavbarConfiguration) -> String {
    if let Some(title) = &config.default_active_area {
        return title.clone();
    }

    if let Some(area) = config.areas.iter().find(|area| area.default_active) {
        return area.title.clone();
    }

    config
        .areas
        .first()
        .map(|area| area.title.clone())
        .unwrap_or_default()
}

/// One rail entry per configured area, in rail order.
pub fn area_rail_items(config: &NavbarConfiguration) -> Vec<RailItem> {
    config
        .areas
        .iter()
        .map(|area| RailItem {
            title: area.title.clone(),
            icon: area.icon.clone(),
        })
        .collect()
}

/// Find the first item selected by `path`, configuration order deciding
/// ties.
///
/// The route prefix is stripped before matching. Expandable items match
/// through their children: the returned reference is always a regular
/// item, possibly a child.
pub fn find_item_by_path<'a>(
    config: &'a NavbarConfiguration,
    path: &str,
) -> Option<&'a NavigationItem> {
    let stripped = strip_route_prefix(path, config.route_prefix.as_deref());

    for area in &config.areas {
        for section in &area.sections {
            for item in &section.items {
                match item {
                    MenuItem::Regular(regular) => {
                        if matches_navigation_item(&stripped, regular) {
                            return Some(regular);
                        }
                    }
                    MenuItem::Expandable(expandable) => {
                        for child in &expandable.children {
                            if matches_navigation_item(&stripped, child) {
                                return Some(child);
                            }
                        }
                    }
                }
            }
        }
    }

    None
}

/// Title of the expandable item whose child is selected by
/// `child_path`, or `None` when no child matches.
pub fn find_expandable_parent_by_child_path<'a>(
    config: &'a NavbarConfiguration,
    child_path: &str,
) -> Option<&'a str> {
    let stripped = strip_route_prefix(child_path, config.route_prefix.as_deref());

    for area in &config.areas {
        for section in &area.sections {
            for item in &section.items {
                if let MenuItem::Expandable(expandable) = item {
                    if expandable
                        .children
                        .iter()
                        .any(|child| matches_navigation_item(&stripped, child))
                    {
                        return Some(&expandable.title);
                    }
                }
            }
        }
    }

    None
}

/// Every configured `path`, including expandable items' children, in
/// traversal order. Items without a path are omitted.
pub fn all_navigation_paths(config: &NavbarConfiguration) -> Vec<&str> {
    let mut paths = Vec::new();

    for area in &config.areas {
        for section in &area.sections {
            for item in &section.items {
                match item {
                    MenuItem::Regular(regular) => {
                        if let Some(path) = &regular.path {
                            paths.push(path.as_str());
                        }
                    }
                    MenuItem::Expandable(expandable) => {
                        for child in &expandable.children {
                            if let Some(path) = &child.path {
                                paths.push(path.as_str());
                            }
                        }
                    }
                }
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpandableItem, MenuSection, NavigationArea};

    fn config() -> NavbarConfiguration {
        NavbarConfiguration::new()
            .with_area(
                NavigationArea::new("Home", "home").with_section(
                    MenuSection::new("Main")
                        .with_item(NavigationItem::new("Dashboard").with_path("/dashboard"))
                        .with_item(NavigationItem::new("Orders").with_path_pattern("/orders/:id")),
                ),
            )
            .with_area(
                NavigationArea::new("Reports", "chart").with_section(
                    MenuSection::new("Reporting").with_item(
                        ExpandableItem::new("Finance")
                            .with_child(
                                NavigationItem::new("Invoices").with_path("/reports/finance/invoices"),
                            )
                            .with_child(
                                NavigationItem::new("Expenses").with_path("/reports/finance/expenses"),
                            ),
                    ),
                ),
            )
    }

    #[test]
    fn test_default_area_priority() {
        let mut cfg = config();
        assert_eq!(default_active_area(&cfg), "Home");

        cfg.areas[1].default_active = true;
        assert_eq!(default_active_area(&cfg), "Reports");

        cfg.default_active_area = Some("Home".to_string());
        assert_eq!(default_active_area(&cfg), "Home");

        assert_eq!(default_active_area(&NavbarConfiguration::new()), "");
    }

    #[test]
    fn test_rail_items_preserve_order() {
        let rail = area_rail_items(&config());
        let titles: Vec<&str> = rail.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, ["Home", "Reports"]);
        assert_eq!(rail[0].icon, "home");
    }

    #[test]
    fn test_find_item_exact() {
        let cfg = config();
        let item = find_item_by_path(&cfg, "/dashboard").unwrap();
        assert_eq!(item.title, "Dashboard");
    }

    #[test]
    fn test_find_item_through_expandable_child() {
        let cfg = config();
        let item = find_item_by_path(&cfg, "/reports/finance/invoices").unwrap();
        assert_eq!(item.title, "Invoices");
    }

    #[test]
    fn test_find_item_by_pattern() {
        let cfg = config();
        let item = find_item_by_path(&cfg, "/orders/42").unwrap();
        assert_eq!(item.title, "Orders");
    }

    #[test]
    fn test_find_item_strips_route_prefix() {
        let mut cfg = config();
        cfg.route_prefix = Some("/app".to_string());
        let item = find_item_by_path(&cfg, "/app/dashboard").unwrap();
        assert_eq!(item.title, "Dashboard");
    }

    #[test]
    fn test_find_item_none_for_unknown_path() {
        assert!(find_item_by_path(&config(), "/does/not/exist").is_none());
    }

    #[test]
    fn test_first_match_wins_in_configured_order() {
        let cfg = NavbarConfiguration::new().with_area(
            NavigationArea::new("Home", "home").with_section(
                MenuSection::new("Main")
                    .with_item(NavigationItem::new("First").with_path_pattern("/items/*"))
                    .with_item(NavigationItem::new("Second").with_path("/items/special")),
            ),
        );
        let item = find_item_by_path(&cfg, "/items/special").unwrap();
        assert_eq!(item.title, "First");
    }

    #[test]
    fn test_expandable_parent_lookup() {
        let cfg = config();
        assert_eq!(
            find_expandable_parent_by_child_path(&cfg, "/reports/finance/invoices"),
            Some("Finance")
        );
        assert_eq!(find_expandable_parent_by_child_path(&cfg, "/dashboard"), None);
    }

    #[test]
    fn test_all_paths_in_traversal_order() {
        let cfg = config();
        let paths = all_navigation_paths(&cfg);
        assert_eq!(
            paths,
            [
                "/dashboard",
                "/reports/finance/invoices",
                "/reports/finance/expenses"
            ]
        );
    }
}
