//! Navbar controller
//!
//! The composition root for one navigation surface: it owns a validated
//! [`NavbarConfiguration`] and a [`NavbarStore`], turns clicks into
//! state changes and navigation requests, and keeps the store in sync
//! with the browser location.
//!
//! Embedder callbacks run after the store has been updated, so an
//! observer always sees post-update state.

use navbar_core::{
    active_states_from_path, add_route_prefix, default_active_area,
    find_expandable_parent_by_child_path, ConfigError, EventHandler, MenuItem,
    NavbarConfiguration, NavigationItem,
};
use navbar_state::{NavbarState, NavbarStore};

use crate::sections::{build_view, NavbarView};

/// External navigation function (router push).
pub type NavigateFn = Box<dyn FnMut(&str)>;
/// Embedder callback invoked after an item click is handled.
pub type ItemCallback = Box<dyn FnMut(&MenuItem)>;
/// Embedder callback invoked after the active area changes.
pub type AreaCallback = Box<dyn FnMut(&str)>;

/// What a handled click amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    /// An expandable item's disclosure was toggled; the active item is
    /// untouched.
    ToggledDisclosure {
        /// Title of the toggled item
        title: String,
        /// Disclosure state after the toggle
        expanded: bool,
    },
    /// The item carries an `on_click` handler the embedder should
    /// dispatch; no navigation was performed.
    Action(EventHandler),
    /// A navigation request was issued for the given (prefixed) path.
    Navigated(String),
    /// The item became active but had neither handler nor path.
    Activated,
    /// The item is disabled; nothing happened.
    Ignored,
}

/// Controller for one navbar instance.
///
/// Construct with [`Navbar::new`] to self-provide a store, or
/// [`Navbar::with_store`] to attach an external one shared across a
/// wider scope. Either way each controller's configuration is validated
/// once, up front.
pub struct Navbar {
    config: NavbarConfiguration,
    store: NavbarStore,
    navigate: Option<NavigateFn>,
    on_item_click: Option<ItemCallback>,
    on_area_change: Option<AreaCallback>,
}

impl Navbar {
    /// Create a controller with its own store, seeded with the
    /// configuration's default active area.
    pub fn new(config: NavbarConfiguration) -> Result<Self, ConfigError> {
        let initial = NavbarState::with_active_area(default_active_area(&config));
        Self::with_store(config, NavbarStore::new(initial))
    }

    /// Create a controller on top of an externally provided store.
    pub fn with_store(config: NavbarConfiguration, store: NavbarStore) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            navigate: None,
            on_item_click: None,
            on_area_change: None,
        })
    }

    /// Register the router push function used when a clicked item has a
    /// path and no `on_click` handler.
    pub fn on_navigate(mut self, navigate: impl FnMut(&str) + 'static) -> Self {
        self.navigate = Some(Box::new(navigate));
        self
    }

    /// Register the embedder's item-click observer.
    pub fn on_item_click(mut self, callback: impl FnMut(&MenuItem) + 'static) -> Self {
        self.on_item_click = Some(Box::new(callback));
        self
    }

    /// Register the embedder's area-change observer.
    pub fn on_area_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_area_change = Some(Box::new(callback));
        self
    }

    /// The configuration this controller serves.
    pub fn config(&self) -> &NavbarConfiguration {
        &self.config
    }

    /// Handle to the state store. Clone it to share the state with
    /// other consumers in the same scope.
    pub fn store(&self) -> &NavbarStore {
        &self.store
    }

    /// Handle a click on a menu entry.
    ///
    /// Expandable entries only toggle their disclosure. Regular entries
    /// become active; their `on_click` handler, when present, wins over
    /// path navigation. Disabled entries are inert.
    pub fn handle_item_click(&mut self, item: &MenuItem) -> ClickEffect {
        if item.is_disabled() {
            return ClickEffect::Ignored;
        }

        let effect = match item {
            MenuItem::Expandable(expandable) => {
                self.store.toggle_expanded_item(&expandable.title);
                ClickEffect::ToggledDisclosure {
                    title: expandable.title.clone(),
                    expanded: self.store.is_expanded(&expandable.title),
                }
            }
            MenuItem::Regular(regular) => self.click_regular(regular),
        };

        tracing::debug!(item = item.title(), effect = ?effect, "handled item click");

        if let Some(callback) = &mut self.on_item_click {
            callback(item);
        }
        effect
    }

    /// Handle a click on a general-area item. Behaves exactly like a
    /// regular menu entry.
    pub fn handle_general_item_click(&mut self, item: &NavigationItem) -> ClickEffect {
        let entry = MenuItem::Regular(item.clone());
        self.handle_item_click(&entry)
    }

    fn click_regular(&mut self, item: &NavigationItem) -> ClickEffect {
        self.store.set_active_item(Some(item.title.clone()));

        if let Some(handler) = &item.on_click {
            return ClickEffect::Action(handler.clone());
        }

        if let Some(path) = &item.path {
            let target = add_route_prefix(path, self.config.route_prefix.as_deref());
            if let Some(navigate) = &mut self.navigate {
                navigate(&target);
            }
            return ClickEffect::Navigated(target);
        }

        ClickEffect::Activated
    }

    /// Handle a click on a rail area.
    pub fn handle_area_change(&mut self, area: &str) {
        self.store.set_active_area(area);
        if let Some(callback) = &mut self.on_area_change {
            callback(area);
        }
    }

    /// Sync store state with the browser location.
    ///
    /// Runs on mount and on every path change, but only when the
    /// configuration opts into location-driven behavior. Resolves the
    /// active area/item, writes them to the store, and auto-discloses
    /// the expandable parent of a deep-linked child.
    pub fn handle_path_change(&mut self, pathname: &str) {
        if !self.config.allow_default_path_behavior {
            return;
        }

        let states = active_states_from_path(&self.config, pathname);
        self.store.set_active_area(states.active_area);
        self.store.set_active_item(states.active_item.clone());

        if states.active_item.is_some() {
            if let Some(parent) = find_expandable_parent_by_child_path(&self.config, pathname) {
                self.store.expand_item(parent);
            }
        }
    }

    /// Assemble the headless view-model for the current state.
    pub fn view(&self, collapsed: bool) -> NavbarView {
        build_view(&self.config, &self.store.state(), collapsed)
    }
}
