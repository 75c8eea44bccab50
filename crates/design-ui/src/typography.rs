//! Typography variants and semantic elements
//!
//! Maps a typographic variant to the semantic element it renders as by
//! default, with an explicit override for cases like a heading styled
//! as body copy.

use serde::{Deserialize, Serialize};

/// Typographic scale of the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    /// Page title
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
    /// Minor heading
    H4,
    /// Small heading
    H5,
    /// Smallest heading
    H6,
    /// Body copy
    #[default]
    P,
    /// Quoted passage
    Blockquote,
    /// Bulleted list
    List,
    /// Intro paragraph
    Lead,
    /// Emphasized body copy
    Large,
    /// Fine print
    Small,
    /// De-emphasized text
    Muted,
    /// Inline code
    Code,
}

impl TypographyVariant {
    /// The semantic element this variant renders as when no override is
    /// given.
    pub fn default_element(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Blockquote => "blockquote",
            Self::List => "ul",
            Self::Code => "code",
            Self::P | Self::Lead | Self::Large | Self::Small | Self::Muted => "p",
        }
    }
}

/// Text color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// Foreground color
    #[default]
    Default,
    /// Muted foreground
    Muted,
    /// Primary color
    Primary,
    /// Secondary color
    Secondary,
    /// Accent color
    Accent,
    /// Destructive/red
    Destructive,
    /// Brand purple
    Brand,
    /// Color for text on filled surfaces
    Surface,
}

/// A run of styled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    /// Text content
    pub text: String,
    /// Typographic variant
    #[serde(default)]
    pub variant: TypographyVariant,
    /// Color token
    #[serde(default)]
    pub color: TextColor,
    /// Explicit element override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Typography {
    /// Create body copy with default color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: TypographyVariant::default(),
            color: TextColor::default(),
            element: None,
        }
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the color token.
    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = color;
        self
    }

    /// Override the rendered element.
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// The element this run renders as: the override when set, else the
    /// variant's default.
    pub fn element(&self) -> &str {
        self.element
            .as_deref()
            .unwrap_or_else(|| self.variant.default_element())
    }
}
