//! Navigation configuration and resolution for Meridian UI
//!
//! This crate holds the declarative model behind the navbar — areas,
//! sections, and menu items — together with the pure functions that map
//! a browser location onto it:
//!
//! - [`config`] - Configuration model and validation
//! - [`path`] - Route prefix handling and path/pattern matching
//! - [`tree`] - Lookups over a configuration (find by path, enumerate paths)
//! - [`resolve`] - Active area/item resolution from the current path
//!
//! Everything here is side-effect free: the configuration is read-only
//! for the lifetime of a navbar instance, and resolution is a pure
//! function of `(configuration, pathname)`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod path;
pub mod resolve;
pub mod tree;

pub use config::{
    BadgeValue, ConfigError, EventHandler, ExpandableItem, GeneralArea, MenuItem, MenuSection,
    NavbarConfiguration, NavbarFooter, NavbarStyling, NavbarUser, NavigationArea, NavigationItem,
    Organization,
};
pub use path::{
    add_route_prefix, compile_pattern, match_path_pattern, matches_navigation_item,
    strip_route_prefix,
};
pub use resolve::{active_states_from_path, ActiveStates};
pub use tree::{
    all_navigation_paths, area_rail_items, default_active_area,
    find_expandable_parent_by_child_path, find_item_by_path, RailItem,
};
