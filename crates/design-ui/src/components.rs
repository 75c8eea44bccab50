//! Component prop and state models
//!
//! Headless counterparts of the design system's styled primitives. Each
//! component is a serializable struct the frontend renders; state
//! transitions (toggling a switch, selecting an option, typing into the
//! OTP input) are plain synchronous methods.
//!
//! # Available Components
//!
//! - [`Badge`] - Status/label chip with an optional icon
//! - [`Switch`] - On/off toggle with brand variants
//! - [`Select`] - Stylized single-value select
//! - [`MultiSelect`] - Multi-value select rendering selections as badge chips
//! - [`OtpInput`] - One-time-password slot input
//! - [`Toaster`] - Notification surface holding a queue of [`Toast`]s

use serde::{Deserialize, Serialize};

use navbar_core::EventHandler;

// =============================================================================
// Common Types
// =============================================================================

/// Control sizing shared by form components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    /// Compact control
    Sm,
    /// Standard control
    #[default]
    Default,
    /// Large control
    Lg,
}

/// Icon placement relative to the component's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    /// Icon before the text
    #[default]
    Left,
    /// Icon after the text
    Right,
}

// =============================================================================
// Badge
// =============================================================================

/// Badge style variants, including order-status colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Primary badge
    #[default]
    Default,
    /// Neutral badge
    Secondary,
    /// Destructive/red badge
    Destructive,
    /// Success/green badge
    Success,
    /// Delivered status (green)
    Delivered,
    /// Canceled status (red)
    Canceled,
    /// Pending status (blue)
    Pending,
    /// Accent-colored badge
    Accent,
    /// Muted badge
    Muted,
    /// Outlined, transparent badge
    Outline,
}

/// Status/label chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge text
    pub text: String,
    /// Style variant
    #[serde(default)]
    pub variant: BadgeVariant,
    /// Icon name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Icon placement
    #[serde(default)]
    pub icon_position: IconPosition,
}

impl Badge {
    /// Create a default-variant badge with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
            icon: None,
            icon_position: IconPosition::default(),
        }
    }

    /// Set the style variant.
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Attach an icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Place the icon after the text.
    pub fn icon_right(mut self) -> Self {
        self.icon_position = IconPosition::Right;
        self
    }
}

// =============================================================================
// Switch
// =============================================================================

/// Switch style variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchVariant {
    /// Primary colors
    #[default]
    Default,
    /// Brand purple when checked
    Brand,
    /// Accent color when checked
    Accent,
}

/// On/off toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    /// Whether the switch is on
    #[serde(default)]
    pub checked: bool,
    /// Whether the switch is inert
    #[serde(default)]
    pub disabled: bool,
    /// Style variant
    #[serde(default)]
    pub variant: SwitchVariant,
    /// Control size
    #[serde(default)]
    pub size: ControlSize,
    /// Handler dispatched when the checked state changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
}

impl Switch {
    /// Create an unchecked switch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Set the style variant.
    pub fn with_variant(mut self, variant: SwitchVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the control size.
    pub fn with_size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Set the change handler identifier.
    pub fn with_on_change(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Mark the switch disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Flip the checked state. Returns the new state; a disabled switch
    /// does not move.
    pub fn toggle(&mut self) -> bool {
        if !self.disabled {
            self.checked = !self.checked;
        }
        self.checked
    }
}

// =============================================================================
// Select
// =============================================================================

/// One choice in a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Stable option value
    pub value: String,
    /// Text shown for the option
    pub label: String,
    /// Whether the option can be chosen
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// Stylized single-value select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    /// Inline label shown before the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown while nothing is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choices in display order
    pub options: Vec<SelectOption>,
    /// Currently selected value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the control is inert
    #[serde(default)]
    pub disabled: bool,
    /// Whether the dropdown is open
    #[serde(default)]
    pub open: bool,
}

impl Select {
    /// Create an empty select.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inline label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Append an option.
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Open or close the dropdown; inert while disabled.
    pub fn toggle_open(&mut self) {
        if !self.disabled {
            self.open = !self.open;
        }
    }

    /// Select the option with `value`. Returns `false` and leaves the
    /// state untouched when the value is unknown or the option is
    /// disabled; a successful selection closes the dropdown.
    pub fn select(&mut self, value: &str) -> bool {
        let Some(option) = self.options.iter().find(|o| o.value == value) else {
            return false;
        };
        if option.disabled || self.disabled {
            return false;
        }
        self.value = Some(option.value.clone());
        self.open = false;
        true
    }

    /// The selected option, if any.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        let value = self.value.as_deref()?;
        self.options.iter().find(|o| o.value == value)
    }

    /// Text the trigger should show: the selected label, else the
    /// placeholder, else empty.
    pub fn display_value(&self) -> &str {
        self.selected_option()
            .map(|o| o.label.as_str())
            .or(self.placeholder.as_deref())
            .unwrap_or("")
    }
}

// =============================================================================
// MultiSelect
// =============================================================================

/// One choice in a [`MultiSelect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelectOption {
    /// Stable option value
    pub value: String,
    /// Text shown for the option and its chip
    pub label: String,
    /// Icon name shown inside the chip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MultiSelectOption {
    /// Create an option without an icon.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    /// Attach a chip icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

fn default_multi_placeholder() -> String {
    "Select options...".to_string()
}

fn default_no_options_message() -> String {
    "No options found".to_string()
}

fn default_true() -> bool {
    true
}

/// Multi-value select; selections render as removable badge chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelect {
    /// Choices in display order
    pub options: Vec<MultiSelectOption>,
    /// Selected options in selection order
    #[serde(default)]
    pub value: Vec<MultiSelectOption>,
    /// Placeholder shown while nothing is selected
    #[serde(default = "default_multi_placeholder")]
    pub placeholder: String,
    /// Whether the whole selection can be cleared at once
    #[serde(default = "default_true")]
    pub clearable: bool,
    /// Whether options can be filtered by typing
    #[serde(default = "default_true")]
    pub searchable: bool,
    /// Whether the control is inert
    #[serde(default)]
    pub disabled: bool,
    /// Whether options are still being loaded
    #[serde(default)]
    pub loading: bool,
    /// Message shown when no option matches the filter
    #[serde(default = "default_no_options_message")]
    pub no_options_message: String,
    /// Control size
    #[serde(default)]
    pub size: ControlSize,
}

impl Default for MultiSelect {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            value: Vec::new(),
            placeholder: default_multi_placeholder(),
            clearable: true,
            searchable: true,
            disabled: false,
            loading: false,
            no_options_message: default_no_options_message(),
            size: ControlSize::default(),
        }
    }
}

impl MultiSelect {
    /// Create an empty multi-select.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option.
    pub fn with_option(mut self, option: MultiSelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Whether the option with `value` is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.value.iter().any(|o| o.value == value)
    }

    /// Select or deselect the option with `value`. Unknown values and a
    /// disabled control are ignored.
    pub fn toggle_option(&mut self, value: &str) {
        if self.disabled {
            return;
        }
        if let Some(index) = self.value.iter().position(|o| o.value == value) {
            self.value.remove(index);
        } else if let Some(option) = self.options.iter().find(|o| o.value == value) {
            self.value.push(option.clone());
        }
    }

    /// Remove one selection, the chip's close button. Returns whether
    /// anything was removed.
    pub fn remove_value(&mut self, value: &str) -> bool {
        if self.disabled {
            return false;
        }
        if let Some(index) = self.value.iter().position(|o| o.value == value) {
            self.value.remove(index);
            true
        } else {
            false
        }
    }

    /// Clear the whole selection; inert unless `clearable`.
    pub fn clear(&mut self) {
        if self.clearable && !self.disabled {
            self.value.clear();
        }
    }

    /// Options whose label matches `query` case-insensitively. With
    /// searching disabled every option matches.
    pub fn filter_options(&self, query: &str) -> Vec<&MultiSelectOption> {
        if !self.searchable || query.is_empty() {
            return self.options.iter().collect();
        }
        let needle = query.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .collect()
    }
}

// =============================================================================
// OTP Input
// =============================================================================

/// One rendered slot of the OTP input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpSlot {
    /// Character in this slot, if entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char: Option<char>,
    /// Whether the caret sits on this slot
    pub is_active: bool,
    /// Whether the slot renders the blinking fake caret
    pub has_fake_caret: bool,
}

/// One-time-password slot input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpInput {
    /// Number of slots
    pub length: usize,
    /// Entered characters, at most `length`
    pub value: String,
    /// Whether the input is inert
    #[serde(default)]
    pub disabled: bool,
}

impl OtpInput {
    /// Create an empty input with `length` slots.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            value: String::new(),
            disabled: false,
        }
    }

    /// Append one character; full or disabled inputs ignore it.
    /// Whitespace is never accepted.
    pub fn push_char(&mut self, c: char) {
        if self.disabled || c.is_whitespace() || self.value.chars().count() >= self.length {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        if !self.disabled {
            self.value.pop();
        }
    }

    /// Empty the input.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Whether every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.value.chars().count() == self.length
    }

    /// Render state for each slot. The caret sits after the last
    /// entered character (on the last slot once complete); an active
    /// empty slot shows the fake caret.
    pub fn slots(&self) -> Vec<OtpSlot> {
        let entered: Vec<char> = self.value.chars().collect();
        let cursor = entered.len().min(self.length.saturating_sub(1));

        (0..self.length)
            .map(|index| {
                let char = entered.get(index).copied();
                let is_active = index == cursor;
                OtpSlot {
                    char,
                    is_active,
                    has_fake_caret: is_active && char.is_none(),
                }
            })
            .collect()
    }
}

// =============================================================================
// Toast Surface
// =============================================================================

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Neutral message
    #[default]
    Info,
    /// Success confirmation
    Success,
    /// Recoverable warning
    Warning,
    /// Error notification
    Error,
}

/// One notification on the toast surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique toast id, used to dismiss
    pub id: String,
    /// Toast headline
    pub title: String,
    /// Longer description under the headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Severity
    #[serde(default)]
    pub level: ToastLevel,
}

/// Corner the toast surface anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToasterPosition {
    /// Top right corner (the design system default)
    #[default]
    TopRight,
    /// Top left corner
    TopLeft,
    /// Top center
    TopCenter,
    /// Bottom right corner
    BottomRight,
    /// Bottom left corner
    BottomLeft,
    /// Bottom center
    BottomCenter,
}

/// Notification surface holding the live toast queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toaster {
    /// Anchor corner
    #[serde(default)]
    pub position: ToasterPosition,
    /// Whether stacked toasts render expanded
    #[serde(default = "default_true")]
    pub expand: bool,
    /// Whether toasts carry a close button
    #[serde(default = "default_true")]
    pub close_button: bool,
    /// Live toasts, oldest first
    #[serde(default)]
    pub toasts: Vec<Toast>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            position: ToasterPosition::default(),
            expand: true,
            close_button: true,
            toasts: Vec::new(),
        }
    }
}

impl Toaster {
    /// Create an empty surface with the design system defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast and return its generated id.
    pub fn push(&mut self, title: impl Into<String>, level: ToastLevel) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            title: title.into(),
            description: None,
            level,
        });
        id
    }

    /// Push a toast with a description and return its generated id.
    pub fn push_with_description(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        level: ToastLevel,
    ) -> String {
        let id = self.push(title, level);
        if let Some(toast) = self.toasts.last_mut() {
            toast.description = Some(description.into());
        }
        id
    }

    /// Push an info toast.
    pub fn info(&mut self, title: impl Into<String>) -> String {
        self.push(title, ToastLevel::Info)
    }

    /// Push a success toast.
    pub fn success(&mut self, title: impl Into<String>) -> String {
        self.push(title, ToastLevel::Success)
    }

    /// Push an error toast.
    pub fn error(&mut self, title: impl Into<String>) -> String {
        self.push(title, ToastLevel::Error)
    }

    /// Dismiss the toast with `id`. Returns whether it was present.
    pub fn dismiss(&mut self, id: &str) -> bool {
        if let Some(index) = self.toasts.iter().position(|t| t.id == id) {
            self.toasts.remove(index);
            true
        } else {
            false
        }
    }

    /// Dismiss everything.
    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_builder() {
        let badge = Badge::new("Delivered")
            .with_variant(BadgeVariant::Delivered)
            .with_icon("check")
            .icon_right();
        assert_eq!(badge.variant, BadgeVariant::Delivered);
        assert_eq!(badge.icon_position, IconPosition::Right);

        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json["variant"], "delivered");
    }

    #[test]
    fn test_switch_toggle() {
        let mut switch = Switch::new().with_variant(SwitchVariant::Brand);
        assert!(switch.toggle());
        assert!(!switch.toggle());
    }

    #[test]
    fn test_disabled_switch_does_not_move() {
        let mut switch = Switch::new().disabled();
        assert!(!switch.toggle());
        assert!(!switch.checked);
    }

    #[test]
    fn test_select_selection_closes_dropdown() {
        let mut select = Select::new()
            .with_placeholder("Pick one")
            .with_option(SelectOption::new("a", "Alpha"))
            .with_option(SelectOption::new("b", "Beta"));

        assert_eq!(select.display_value(), "Pick one");

        select.toggle_open();
        assert!(select.open);

        assert!(select.select("b"));
        assert!(!select.open);
        assert_eq!(select.display_value(), "Beta");

        assert!(!select.select("missing"));
        assert_eq!(select.value.as_deref(), Some("b"));
    }

    #[test]
    fn test_select_skips_disabled_option() {
        let mut select = Select::new().with_option(SelectOption {
            value: "a".to_string(),
            label: "Alpha".to_string(),
            disabled: true,
        });
        assert!(!select.select("a"));
        assert_eq!(select.value, None);
    }

    #[test]
    fn test_multi_select_toggle_and_remove() {
        let mut multi = MultiSelect::new()
            .with_option(MultiSelectOption::new("a", "Alpha").with_icon("star"))
            .with_option(MultiSelectOption::new("b", "Beta"));

        multi.toggle_option("a");
        multi.toggle_option("b");
        assert!(multi.is_selected("a"));
        assert_eq!(multi.value.len(), 2);

        multi.toggle_option("a");
        assert!(!multi.is_selected("a"));

        assert!(multi.remove_value("b"));
        assert!(!multi.remove_value("b"));
        assert!(multi.value.is_empty());
    }

    #[test]
    fn test_multi_select_clear_respects_clearable() {
        let mut multi = MultiSelect::new().with_option(MultiSelectOption::new("a", "Alpha"));
        multi.toggle_option("a");

        multi.clearable = false;
        multi.clear();
        assert_eq!(multi.value.len(), 1);

        multi.clearable = true;
        multi.clear();
        assert!(multi.value.is_empty());
    }

    #[test]
    fn test_multi_select_filtering() {
        let multi = MultiSelect::new()
            .with_option(MultiSelectOption::new("ap", "Apple"))
            .with_option(MultiSelectOption::new("av", "Avocado"))
            .with_option(MultiSelectOption::new("b", "Banana"));

        let hits = multi.filter_options("a");
        assert_eq!(hits.len(), 3);
        let hits = multi.filter_options("Av");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, "av");
    }

    #[test]
    fn test_otp_entry_and_slots() {
        let mut otp = OtpInput::new(4);
        otp.push_char('1');
        otp.push_char(' ');
        otp.push_char('2');
        assert_eq!(otp.value, "12");
        assert!(!otp.is_complete());

        let slots = otp.slots();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].char, Some('1'));
        assert!(slots[2].is_active);
        assert!(slots[2].has_fake_caret);

        otp.push_char('3');
        otp.push_char('4');
        otp.push_char('5');
        assert_eq!(otp.value, "1234");
        assert!(otp.is_complete());

        // Caret parks on the last slot once complete.
        let slots = otp.slots();
        assert!(slots[3].is_active);
        assert!(!slots[3].has_fake_caret);

        otp.backspace();
        assert_eq!(otp.value, "123");
    }

    #[test]
    fn test_toaster_defaults_and_queue() {
        let mut toaster = Toaster::new();
        assert_eq!(toaster.position, ToasterPosition::TopRight);
        assert!(toaster.expand);
        assert!(toaster.close_button);

        let id = toaster.success("Saved");
        let other = toaster.push_with_description("Sync failed", "Retry shortly", ToastLevel::Error);
        assert_eq!(toaster.toasts.len(), 2);
        assert_ne!(id, other);
        assert_eq!(toaster.toasts[1].description.as_deref(), Some("Retry shortly"));

        assert!(toaster.dismiss(&id));
        assert!(!toaster.dismiss(&id));
        assert_eq!(toaster.toasts.len(), 1);

        toaster.dismiss_all();
        assert!(toaster.toasts.is_empty());
    }
}
