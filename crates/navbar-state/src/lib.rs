//! Navbar state management for Meridian UI
//!
//! One [`store::NavbarStore`] per navbar instance holds the mutable UI
//! state: active area, active item, and the set of disclosed expandable
//! items. The store is the single source of truth consumed by
//! rendering; it never validates against the navigation configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{NavbarState, NavbarStore};
