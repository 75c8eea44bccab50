//! Navigation configuration model
//!
//! The embedding application supplies one [`NavbarConfiguration`] per
//! navbar instance. The model is a plain data tree: areas own sections,
//! sections own menu items, and an expandable item owns exactly one
//! level of regular children. All types serialize so a configuration
//! can be shipped across the frontend boundary or loaded from JSON.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::compile_pattern;

/// Identifier of an embedder-registered event handler.
///
/// Click handlers cannot be serialized, so items carry the handler's
/// name and the embedder dispatches it when a click resolves to an
/// action instead of a navigation.
pub type EventHandler = String;

// =============================================================================
// Badges
// =============================================================================

/// Badge rendered next to an item title: either a short label or a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BadgeValue {
    /// Numeric badge (e.g. unread count)
    Count(u64),
    /// Free-form label (e.g. "new")
    Label(String),
}

impl fmt::Display for BadgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeValue::Count(n) => write!(f, "{n}"),
            BadgeValue::Label(s) => f.write_str(s),
        }
    }
}

impl From<u64> for BadgeValue {
    fn from(count: u64) -> Self {
        BadgeValue::Count(count)
    }
}

impl From<&str> for BadgeValue {
    fn from(label: &str) -> Self {
        BadgeValue::Label(label.to_string())
    }
}

// =============================================================================
// Menu Items
// =============================================================================

/// Leaf navigation entry with a path or click action.
///
/// `title` doubles as the item's identity: it is the key the state
/// store compares against when deciding whether the item is active, so
/// it must be unique within the items reachable from one area
/// ([`NavbarConfiguration::validate`] enforces this).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Display title, unique within the owning area
    pub title: String,
    /// Icon name, resolved by the rendering layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Exact route this item represents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Route pattern with `:param` and `*` wildcards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_pattern: Option<String>,
    /// Handler to dispatch instead of navigating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
    /// Whether the item is inert
    #[serde(default)]
    pub disabled: bool,
    /// Badge shown next to the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeValue>,
}

impl NavigationItem {
    /// Create an item with the given title and nothing else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            path: None,
            path_pattern: None,
            on_click: None,
            disabled: false,
            badge: None,
        }
    }

    /// Set the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the exact route path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the route pattern (`:param` and `*` wildcards).
    pub fn with_path_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.path_pattern = Some(pattern.into());
        self
    }

    /// Set the click handler identifier; it takes precedence over `path`.
    pub fn with_on_click(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Attach a badge.
    pub fn with_badge(mut self, badge: impl Into<BadgeValue>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Mark the item disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Navigation entry that discloses child items instead of navigating.
///
/// Children are always regular items; the tree is bounded at one level
/// of nesting by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandableItem {
    /// Display title, unique within the owning area
    pub title: String,
    /// Icon name, resolved by the rendering layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the item is inert
    #[serde(default)]
    pub disabled: bool,
    /// Child items disclosed when the parent is expanded
    pub children: Vec<NavigationItem>,
}

impl ExpandableItem {
    /// Create an expandable item with no children yet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Set the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append a child item.
    pub fn with_child(mut self, child: NavigationItem) -> Self {
        self.children.push(child);
        self
    }

    /// Mark the item disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A menu entry: either a regular leaf or an expandable parent.
///
/// The discriminant is explicit so every consumer matches exhaustively;
/// adding a third kind of entry is a compile-enforced change at each
/// call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuItem {
    /// Leaf entry with a path or click action
    Regular(NavigationItem),
    /// Parent entry that only discloses children
    Expandable(ExpandableItem),
}

impl MenuItem {
    /// Display title of either kind.
    pub fn title(&self) -> &str {
        match self {
            MenuItem::Regular(item) => &item.title,
            MenuItem::Expandable(item) => &item.title,
        }
    }

    /// Icon name of either kind.
    pub fn icon(&self) -> Option<&str> {
        match self {
            MenuItem::Regular(item) => item.icon.as_deref(),
            MenuItem::Expandable(item) => item.icon.as_deref(),
        }
    }

    /// Whether the entry is inert.
    pub fn is_disabled(&self) -> bool {
        match self {
            MenuItem::Regular(item) => item.disabled,
            MenuItem::Expandable(item) => item.disabled,
        }
    }

    /// Borrow the regular item, if this is one.
    pub fn as_regular(&self) -> Option<&NavigationItem> {
        match self {
            MenuItem::Regular(item) => Some(item),
            MenuItem::Expandable(_) => None,
        }
    }

    /// Borrow the expandable item, if this is one.
    pub fn as_expandable(&self) -> Option<&ExpandableItem> {
        match self {
            MenuItem::Regular(_) => None,
            MenuItem::Expandable(item) => Some(item),
        }
    }
}

impl From<NavigationItem> for MenuItem {
    fn from(item: NavigationItem) -> Self {
        MenuItem::Regular(item)
    }
}

impl From<ExpandableItem> for MenuItem {
    fn from(item: ExpandableItem) -> Self {
        MenuItem::Expandable(item)
    }
}

// =============================================================================
// Sections and Areas
// =============================================================================

/// Labeled group of menu items within an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Section heading
    pub label: String,
    /// Entries in configured order
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    /// Create an empty section.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Append a menu entry.
    pub fn with_item(mut self, item: impl Into<MenuItem>) -> Self {
        self.items.push(item.into());
        self
    }
}

/// Top-level navigation area shown on the primary rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationArea {
    /// Area title, also the area's identity
    pub title: String,
    /// Icon name shown on the rail
    pub icon: String,
    /// Sections in configured order
    pub sections: Vec<MenuSection>,
    /// Whether this area is the default when no explicit default is set
    #[serde(default)]
    pub default_active: bool,
}

impl NavigationArea {
    /// Create an area with no sections yet.
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            sections: Vec::new(),
            default_active: false,
        }
    }

    /// Append a section.
    pub fn with_section(mut self, section: MenuSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Mark this area as the configuration's default.
    pub fn default_active(mut self) -> Self {
        self.default_active = true;
        self
    }
}

/// Section-less bag of items rendered outside any area (e.g. "Settings",
/// "Logout").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralArea {
    /// Heading above the general items
    pub title: String,
    /// Items in configured order
    pub items: Vec<NavigationItem>,
}

impl GeneralArea {
    /// Create an empty general area.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item.
    pub fn with_item(mut self, item: NavigationItem) -> Self {
        self.items.push(item);
        self
    }
}

// =============================================================================
// Chrome metadata
// =============================================================================

/// Organization block shown in the navbar header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization name
    pub name: String,
    /// Small line above the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// User block shown in the navbar footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarUser {
    /// Display name
    pub name: String,
    /// Email shown under the name
    pub email: String,
    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Explicit initials for the avatar fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

impl NavbarUser {
    /// Initials shown when no avatar is set: the explicit `initials`
    /// override, else the uppercased first letter of each name part.
    pub fn display_initials(&self) -> String {
        if let Some(initials) = &self.initials {
            return initials.clone();
        }
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Version/copyright line at the bottom of the navbar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavbarFooter {
    /// Application version string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Copyright notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

fn default_fixed() -> bool {
    true
}

/// Styling passthrough for the rendering layer. The core never
/// interprets these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarStyling {
    /// Background override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Extra class names appended by the renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Whether the sidebar is fixed-position
    #[serde(default = "default_fixed")]
    pub fixed: bool,
}

impl Default for NavbarStyling {
    fn default() -> Self {
        Self {
            background: None,
            class_name: None,
            fixed: true,
        }
    }
}

// =============================================================================
// Configuration root
// =============================================================================

/// The aggregate navigation configuration supplied by the embedding
/// application.
///
/// Treated as immutable for the lifetime of a navbar instance: the
/// resolver re-reads it on every path change but never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavbarConfiguration {
    /// Areas in rail order
    pub areas: Vec<NavigationArea>,
    /// Explicit default area title, overriding per-area flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_active_area: Option<String>,
    /// Whether path changes drive active state automatically
    #[serde(default)]
    pub allow_default_path_behavior: bool,
    /// Application-wide base path all configured paths are relative to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_prefix: Option<String>,
    /// Header organization block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    /// Items rendered outside any area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_area: Option<GeneralArea>,
    /// Footer user block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<NavbarUser>,
    /// Footer version/copyright line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<NavbarFooter>,
    /// Renderer styling passthrough
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styling: Option<NavbarStyling>,
}

impl NavbarConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an area.
    pub fn with_area(mut self, area: NavigationArea) -> Self {
        self.areas.push(area);
        self
    }

    /// Set the explicit default active area.
    pub fn with_default_active_area(mut self, title: impl Into<String>) -> Self {
        self.default_active_area = Some(title.into());
        self
    }

    /// Enable or disable location-driven active state.
    pub fn with_default_path_behavior(mut self, allow: bool) -> Self {
        self.allow_default_path_behavior = allow;
        self
    }

    /// Set the route prefix.
    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = Some(prefix.into());
        self
    }

    /// Set the general area.
    pub fn with_general_area(mut self, general: GeneralArea) -> Self {
        self.general_area = Some(general);
        self
    }

    /// Set the header organization block.
    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Set the footer user block.
    pub fn with_user(mut self, user: NavbarUser) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the footer version/copyright line.
    pub fn with_footer(mut self, footer: NavbarFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Set the styling passthrough.
    pub fn with_styling(mut self, styling: NavbarStyling) -> Self {
        self.styling = Some(styling);
        self
    }

    /// Check structural invariants: item titles unique within each
    /// area, and every `path_pattern` compiles.
    ///
    /// Lookups assume a valid configuration and never re-validate.
    pub fn validate<'a>(&'a self) -> Result<(), ConfigError> {
        for area in &self.areas {
            let mut seen: HashSet<&'a str> = HashSet::new();
            let mut check_title = |title: &'a str| -> Result<(), ConfigError> {
                if !seen.insert(title) {
                    return Err(ConfigError::DuplicateItemTitle {
                        area: area.title.clone(),
                        title: title.to_string(),
                    });
                }
                Ok(())
            };

            for section in &area.sections {
                for item in &section.items {
                    match item {
                        MenuItem::Regular(regular) => {
                            check_title(&regular.title)?;
                            check_pattern(regular)?;
                        }
                        MenuItem::Expandable(expandable) => {
                            check_title(&expandable.title)?;
                            for child in &expandable.children {
                                check_title(&child.title)?;
                                check_pattern(child)?;
                            }
                        }
                    }
                }
            }
        }

        if let Some(general) = &self.general_area {
            for item in &general.items {
                check_pattern(item)?;
            }
        }

        Ok(())
    }
}

fn check_pattern(item: &NavigationItem) -> Result<(), ConfigError> {
    if let Some(pattern) = &item.path_pattern {
        compile_pattern(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Structural problems in a [`NavbarConfiguration`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two items reachable from the same area share a title.
    #[error("duplicate item title {title:?} in area {area:?}")]
    DuplicateItemTitle {
        /// Title of the area containing the collision
        area: String,
        /// The colliding item title
        title: String,
    },
    /// A `path_pattern` does not compile to a valid matcher.
    #[error("path pattern {pattern:?} does not compile")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// The underlying compile error
        #[source]
        source: regex::Error,
    },
}
