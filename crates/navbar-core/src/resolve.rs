//! Active state resolution
//!
//! Derives which area and item should be highlighted from the current
//! browser path. Resolution is a pure function of the configuration and
//! the path: calling it twice with the same inputs yields the same
//! answer, and a path that matches nothing resolves to the default
//! area with no active item — that is steady-state for routes outside
//! the navigation (a 404 page, say), not a fault.

use serde::{Deserialize, Serialize};

use crate::config::{MenuItem, NavbarConfiguration};
use crate::tree::{default_active_area, find_item_by_path};

/// Resolved highlight state for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStates {
    /// Title of the area owning the matched item, or the default area
    pub active_area: String,
    /// Title of the matched item, or `None` when nothing matched
    pub active_item: Option<String>,
}

/// Resolve `{active_area, active_item}` for `pathname`.
///
/// The owning area is found by re-traversing the configuration and
/// comparing by identity against the matched item, so an item that
/// happens to equal another structurally still resolves to its own
/// area. When the matched item cannot be located in any section (which
/// traversal symmetry rules out in practice) the default area is
/// returned with no active item.
pub fn active_states_from_path(config: &NavbarConfiguration, pathname: &str) -> ActiveStates {
    let default_area = default_active_area(config);

    let Some(found) = find_item_by_path(config, pathname) else {
        return ActiveStates {
            active_area: default_area,
            active_item: None,
        };
    };

    for area in &config.areas {
        for section in &area.sections {
            let contains_found = section.items.iter().any(|item| match item {
                MenuItem::Regular(regular) => std::ptr::eq(regular, found),
                MenuItem::Expandable(expandable) => expandable
                    .children
                    .iter()
                    .any(|child| std::ptr::eq(child, found)),
            });

            if contains_found {
                tracing::debug!(
                    pathname,
                    area = %area.title,
                    item = %found.title,
                    "resolved active state from path"
                );
                return ActiveStates {
                    active_area: area.title.clone(),
                    active_item: Some(found.title.clone()),
                };
            }
        }
    }

    ActiveStates {
        active_area: default_area,
        active_item: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpandableItem, MenuSection, NavigationArea, NavigationItem};

    fn config() -> NavbarConfiguration {
        NavbarConfiguration::new()
            .with_area(
                NavigationArea::new("Home", "home").with_section(
                    MenuSection::new("Main")
                        .with_item(NavigationItem::new("Dashboard").with_path("/dashboard")),
                ),
            )
            .with_area(
                NavigationArea::new("Reports", "chart").with_section(
                    MenuSection::new("Reporting").with_item(
                        ExpandableItem::new("Finance").with_child(
                            NavigationItem::new("Invoices").with_path("/reports/finance/invoices"),
                        ),
                    ),
                ),
            )
    }

    #[test]
    fn test_resolves_regular_item() {
        let states = active_states_from_path(&config(), "/dashboard");
        assert_eq!(states.active_area, "Home");
        assert_eq!(states.active_item.as_deref(), Some("Dashboard"));
    }

    #[test]
    fn test_resolves_expandable_child_to_owning_area() {
        let states = active_states_from_path(&config(), "/reports/finance/invoices");
        assert_eq!(states.active_area, "Reports");
        assert_eq!(states.active_item.as_deref(), Some("Invoices"));
    }

    #[test]
    fn test_unknown_path_falls_back_to_default() {
        let states = active_states_from_path(&config(), "/does/not/exist");
        assert_eq!(states.active_area, "Home");
        assert_eq!(states.active_item, None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let cfg = config();
        let first = active_states_from_path(&cfg, "/reports/finance/invoices");
        let second = active_states_from_path(&cfg, "/reports/finance/invoices");
        assert_eq!(first, second);
    }

    #[test]
    fn test_active_area_is_always_a_configured_title() {
        let cfg = config();
        for path in ["/dashboard", "/reports/finance/invoices", "/nope", "/"] {
            let states = active_states_from_path(&cfg, path);
            assert!(cfg.areas.iter().any(|area| area.title == states.active_area));
        }
    }

    #[test]
    fn test_identical_items_resolve_to_first_in_order() {
        // Two areas carrying structurally equal items: identity-based
        // containment still attributes the match to the first area the
        // item lookup walked.
        let item = NavigationItem::new("Shared").with_path("/shared");
        let cfg = NavbarConfiguration::new()
            .with_area(
                NavigationArea::new("A", "a")
                    .with_section(MenuSection::new("S").with_item(item.clone())),
            )
            .with_area(
                NavigationArea::new("B", "b")
                    .with_section(MenuSection::new("S").with_item(item)),
            );
        let states = active_states_from_path(&cfg, "/shared");
        assert_eq!(states.active_area, "A");
    }
}
