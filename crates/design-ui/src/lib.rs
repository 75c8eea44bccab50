//! Headless design-system components for Meridian UI
//!
//! This crate provides the component layer of the design system:
//! serializable prop/state models rendered by the embedding frontend,
//! plus the navbar controller that wires configuration, state store,
//! and router together.
//!
//! # Component Design
//!
//! Components are plain Rust structs with serializable properties and
//! small synchronous state transitions. Each component provides:
//!
//! - Type-safe props with builder methods
//! - Variant enums instead of free-form class strings
//! - Event handling through string handler identifiers
//!
//! # Modules
//!
//! - [`navbar`] - Navbar controller (clicks, navigation, path sync)
//! - [`sections`] - Headless navbar view-model assembly
//! - [`components`] - Badge, switch, selects, OTP input, toast surface
//! - [`typography`] - Typography variants and semantic elements
//! - [`theme`] - Light/dark theme state and toggle

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navbar;
pub mod sections;
pub mod theme;
pub mod typography;

pub use components::{
    Badge, BadgeVariant, ControlSize, IconPosition, MultiSelect, MultiSelectOption, OtpInput,
    OtpSlot, Select, SelectOption, Switch, SwitchVariant, Toast, ToastLevel, Toaster,
    ToasterPosition,
};
pub use navbar::{ClickEffect, Navbar};
pub use sections::{
    EntryView, ExpandableView, FooterLineView, GeneralView, HeaderView, ItemView, NavbarView,
    RailEntryView, SectionView, UserView,
};
pub use theme::{ThemeName, ThemeState};
pub use typography::{TextColor, Typography, TypographyVariant};
