//! Navbar view-model assembly
//!
//! Turns `(configuration, state, collapsed)` into a plain serializable
//! tree the rendering layer can walk without touching the configuration
//! or the store. Only the active area's sections appear; expandable
//! entries are omitted entirely while the sidebar is collapsed, and
//! their children are included only while disclosed.

use serde::{Deserialize, Serialize};

use navbar_core::{
    default_active_area, ExpandableItem, MenuItem, NavbarConfiguration, NavigationItem,
};
use navbar_state::NavbarState;

/// Organization block at the top of the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    /// Organization name
    pub name: String,
    /// Small line above the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// One area on the primary rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailEntryView {
    /// Area title
    pub title: String,
    /// Area icon name
    pub icon: String,
    /// Whether this area is highlighted
    pub active: bool,
}

/// A leaf entry ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// Item title
    pub title: String,
    /// Icon name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether this item is highlighted
    pub active: bool,
    /// Whether this item is inert
    pub disabled: bool,
    /// Badge text, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// An expandable entry ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandableView {
    /// Item title
    pub title: String,
    /// Icon name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether this item is inert
    pub disabled: bool,
    /// Whether the children are disclosed
    pub expanded: bool,
    /// Disclosed children; empty while collapsed
    pub children: Vec<ItemView>,
}

/// A section entry: either a leaf or an expandable parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryView {
    /// Leaf entry
    Item(ItemView),
    /// Expandable entry
    Expandable(ExpandableView),
}

/// A labeled section of the active area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    /// Section heading
    pub label: String,
    /// Entries in configured order
    pub entries: Vec<EntryView>,
}

/// The general area rendered outside any navigation area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralView {
    /// Heading above the general items
    pub title: String,
    /// Items in configured order
    pub items: Vec<ItemView>,
}

/// User block in the navbar footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// Display name
    pub name: String,
    /// Email shown under the name
    pub email: String,
    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Initials rendered when no avatar is set
    pub initials: String,
}

/// Version/copyright line in the navbar footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLineView {
    /// Application version string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Copyright notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// The complete headless navbar, one render pass worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarView {
    /// Whether the sidebar is collapsed to its icon rail
    pub collapsed: bool,
    /// Organization header, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderView>,
    /// Rail entries in configured order
    pub rail: Vec<RailEntryView>,
    /// Sections of the active area
    pub sections: Vec<SectionView>,
    /// General area, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<GeneralView>,
    /// Footer user block, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserView>,
    /// Footer version/copyright line, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterLineView>,
}

fn item_view(item: &NavigationItem, active_item: Option<&str>) -> ItemView {
    ItemView {
        title: item.title.clone(),
        icon: item.icon.clone(),
        active: active_item == Some(item.title.as_str()),
        disabled: item.disabled,
        badge: item.badge.as_ref().map(ToString::to_string),
    }
}

fn expandable_view(item: &ExpandableItem, state: &NavbarState, active_item: Option<&str>) -> ExpandableView {
    let expanded = state.is_expanded(&item.title);
    ExpandableView {
        title: item.title.clone(),
        icon: item.icon.clone(),
        disabled: item.disabled,
        expanded,
        children: if expanded {
            item.children
                .iter()
                .map(|child| item_view(child, active_item))
                .collect()
        } else {
            Vec::new()
        },
    }
}

/// Build the view-model for one render pass.
pub(crate) fn build_view(
    config: &NavbarConfiguration,
    state: &NavbarState,
    collapsed: bool,
) -> NavbarView {
    // An empty stored area falls back to the configured default, so a
    // freshly mounted navbar highlights something sensible.
    let active_area = if state.active_area.is_empty() {
        default_active_area(config)
    } else {
        state.active_area.clone()
    };
    let active_item = state.active_item.as_deref();

    let rail = config
        .areas
        .iter()
        .map(|area| RailEntryView {
            title: area.title.clone(),
            icon: area.icon.clone(),
            active: area.title == active_area,
        })
        .collect();

    let sections = config
        .areas
        .iter()
        .find(|area| area.title == active_area)
        .map(|area| {
            area.sections
                .iter()
                .map(|section| SectionView {
                    label: section.label.clone(),
                    entries: section
                        .items
                        .iter()
                        .filter_map(|item| match item {
                            MenuItem::Regular(regular) => {
                                Some(EntryView::Item(item_view(regular, active_item)))
                            }
                            // Parent rows have no icon-rail representation.
                            MenuItem::Expandable(_) if collapsed => None,
                            MenuItem::Expandable(expandable) => Some(EntryView::Expandable(
                                expandable_view(expandable, state, active_item),
                            )),
                        })
                        .collect(),
                })
                .collect()
        })
        .unwrap_or_default();

    let general = config.general_area.as_ref().map(|general| GeneralView {
        title: general.title.clone(),
        items: general
            .items
            .iter()
            .map(|item| item_view(item, active_item))
            .collect(),
    });

    NavbarView {
        collapsed,
        header: config.organization.as_ref().map(|org| HeaderView {
            name: org.name.clone(),
            subtitle: org.subtitle.clone(),
        }),
        rail,
        sections,
        general,
        user: config.user.as_ref().map(|user| UserView {
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            initials: user.display_initials(),
        }),
        footer: config.footer.as_ref().map(|footer| FooterLineView {
            version: footer.version.clone(),
            copyright: footer.copyright.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navbar_core::{
        BadgeValue, GeneralArea, MenuSection, NavbarFooter, NavbarUser, NavigationArea,
        Organization,
    };

    fn config() -> NavbarConfiguration {
        NavbarConfiguration::new()
            .with_organization(Organization {
                name: "Acme".to_string(),
                subtitle: Some("Operations".to_string()),
            })
            .with_area(
                NavigationArea::new("Home", "home").with_section(
                    MenuSection::new("Main")
                        .with_item(
                            NavigationItem::new("Dashboard")
                                .with_path("/dashboard")
                                .with_badge(BadgeValue::Count(3)),
                        )
                        .with_item(
                            ExpandableItem::new("Reports")
                                .with_child(NavigationItem::new("Weekly").with_path("/reports/weekly")),
                        ),
                ),
            )
            .with_area(NavigationArea::new("Admin", "shield"))
            .with_general_area(
                GeneralArea::new("General")
                    .with_item(NavigationItem::new("Logout").with_on_click("logout")),
            )
            .with_user(NavbarUser {
                name: "Ada Lovelace".to_string(),
                email: "ada@acme.test".to_string(),
                avatar: None,
                initials: None,
            })
            .with_footer(NavbarFooter {
                version: Some("v1.2.3".to_string()),
                copyright: None,
            })
    }

    fn state() -> NavbarState {
        NavbarState {
            active_area: "Home".to_string(),
            active_item: Some("Dashboard".to_string()),
            expanded_items: Vec::new(),
        }
    }

    #[test]
    fn test_rail_marks_active_area() {
        let view = build_view(&config(), &state(), false);
        assert_eq!(view.rail.len(), 2);
        assert!(view.rail[0].active);
        assert!(!view.rail[1].active);
    }

    #[test]
    fn test_only_active_area_sections_appear() {
        let mut s = state();
        s.active_area = "Admin".to_string();
        let view = build_view(&config(), &s, false);
        assert!(view.sections.is_empty());
    }

    #[test]
    fn test_empty_stored_area_falls_back_to_default() {
        let view = build_view(&config(), &NavbarState::new(), false);
        assert!(view.rail[0].active);
        assert_eq!(view.sections.len(), 1);
    }

    #[test]
    fn test_active_item_and_badge_flags() {
        let view = build_view(&config(), &state(), false);
        let EntryView::Item(item) = &view.sections[0].entries[0] else {
            panic!("expected leaf entry");
        };
        assert!(item.active);
        assert_eq!(item.badge.as_deref(), Some("3"));
    }

    #[test]
    fn test_collapsed_hides_expandable_entries() {
        let view = build_view(&config(), &state(), true);
        assert_eq!(view.sections[0].entries.len(), 1);
        assert!(matches!(view.sections[0].entries[0], EntryView::Item(_)));
    }

    #[test]
    fn test_children_only_while_disclosed() {
        let collapsed_parent = build_view(&config(), &state(), false);
        let EntryView::Expandable(parent) = &collapsed_parent.sections[0].entries[1] else {
            panic!("expected expandable entry");
        };
        assert!(!parent.expanded);
        assert!(parent.children.is_empty());

        let mut s = state();
        s.expanded_items.push("Reports".to_string());
        s.active_item = Some("Weekly".to_string());
        let disclosed = build_view(&config(), &s, false);
        let EntryView::Expandable(parent) = &disclosed.sections[0].entries[1] else {
            panic!("expected expandable entry");
        };
        assert!(parent.expanded);
        assert_eq!(parent.children.len(), 1);
        assert!(parent.children[0].active);
    }

    #[test]
    fn test_chrome_blocks_carried_through() {
        let view = build_view(&config(), &state(), false);
        assert_eq!(view.header.as_ref().unwrap().name, "Acme");
        assert_eq!(view.general.as_ref().unwrap().items.len(), 1);
        assert_eq!(view.user.as_ref().unwrap().initials, "AL");
        assert_eq!(view.footer.as_ref().unwrap().version.as_deref(), Some("v1.2.3"));
    }

    #[test]
    fn test_view_serializes() {
        let view = build_view(&config(), &state(), false);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["rail"][0]["title"], "Home");
        assert_eq!(json["sections"][0]["entries"][0]["kind"], "item");
    }
}
