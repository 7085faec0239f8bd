//! Catalog record types
//!
//! Every showcase section is a catalog of one of these records. Records are
//! plain `'static` data, so they are `Copy` and cost nothing to hand out.

use crate::catalog::{Category, CatalogEntry};
use crate::error::{CatalogError, Result};
use serde::Serialize;

// ============================================================================
// Fonts
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontCategory {
    Serif,
    SansSerif,
    Display,
    Monospace,
    Handwriting,
}

impl FontCategory {
    /// Generic CSS family used as the fallback in `font-family` declarations
    pub fn generic_family(&self) -> &'static str {
        match self {
            FontCategory::Serif => "serif",
            FontCategory::Monospace => "monospace",
            _ => "sans-serif",
        }
    }
}

impl Category for FontCategory {
    const ALL: &'static [Self] = &[
        FontCategory::Serif,
        FontCategory::SansSerif,
        FontCategory::Display,
        FontCategory::Monospace,
        FontCategory::Handwriting,
    ];

    fn slug(&self) -> &'static str {
        match self {
            FontCategory::Serif => "serif",
            FontCategory::SansSerif => "sans-serif",
            FontCategory::Display => "display",
            FontCategory::Monospace => "monospace",
            FontCategory::Handwriting => "handwriting",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FontCategory::Serif => "Serif",
            FontCategory::SansSerif => "Sans-serif",
            FontCategory::Display => "Display",
            FontCategory::Monospace => "Monospace",
            FontCategory::Handwriting => "Handwriting",
        }
    }
}

/// A web font listing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Font {
    pub id: &'static str,
    pub name: &'static str,
    pub family: &'static str,
    pub category: FontCategory,
    pub weights: &'static [u16],
    pub preview_text: &'static str,
    pub description: &'static str,
}

impl CatalogEntry for Font {
    type Category = FontCategory;

    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> FontCategory {
        self.category
    }
}

// ============================================================================
// Gradients
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GradientCategory {
    Mesh,
    Aurora,
    Neon,
    Metallic,
    Glass,
    Organic,
}

impl Category for GradientCategory {
    const ALL: &'static [Self] = &[
        GradientCategory::Mesh,
        GradientCategory::Aurora,
        GradientCategory::Neon,
        GradientCategory::Metallic,
        GradientCategory::Glass,
        GradientCategory::Organic,
    ];

    fn slug(&self) -> &'static str {
        match self {
            GradientCategory::Mesh => "mesh",
            GradientCategory::Aurora => "aurora",
            GradientCategory::Neon => "neon",
            GradientCategory::Metallic => "metallic",
            GradientCategory::Glass => "glass",
            GradientCategory::Organic => "organic",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            GradientCategory::Mesh => "Mesh",
            GradientCategory::Aurora => "Aurora",
            GradientCategory::Neon => "Neon",
            GradientCategory::Metallic => "Metallic",
            GradientCategory::Glass => "Glass",
            GradientCategory::Organic => "Organic",
        }
    }
}

/// A copy-paste CSS gradient preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: GradientCategory,
    pub usage: &'static str,
    pub css: &'static str,
}

impl CatalogEntry for Gradient {
    type Category = GradientCategory;

    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> GradientCategory {
        self.category
    }
}

// ============================================================================
// Animation demos
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AnimationCategory {
    Hover,
    Click,
    Continuous,
    #[serde(rename = "Micro-interaction")]
    MicroInteraction,
}

impl Category for AnimationCategory {
    const ALL: &'static [Self] = &[
        AnimationCategory::Hover,
        AnimationCategory::Click,
        AnimationCategory::Continuous,
        AnimationCategory::MicroInteraction,
    ];

    fn slug(&self) -> &'static str {
        match self {
            AnimationCategory::Hover => "hover",
            AnimationCategory::Click => "click",
            AnimationCategory::Continuous => "continuous",
            AnimationCategory::MicroInteraction => "micro-interaction",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AnimationCategory::Hover => "Hover",
            AnimationCategory::Click => "Click",
            AnimationCategory::Continuous => "Continuous",
            AnimationCategory::MicroInteraction => "Micro-interaction",
        }
    }
}

/// An interactive animation demo with its source snippet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AnimationDemo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AnimationCategory,
    pub code: &'static str,
    pub dependencies: &'static [&'static str],
}

impl CatalogEntry for AnimationDemo {
    type Category = AnimationCategory;

    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> AnimationCategory {
        self.category
    }
}

// ============================================================================
// Color swatches
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Palette {
    Linear,
    Vercel,
    Stripe,
    Framer,
}

impl Category for Palette {
    const ALL: &'static [Self] = &[
        Palette::Linear,
        Palette::Vercel,
        Palette::Stripe,
        Palette::Framer,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Palette::Linear => "linear",
            Palette::Vercel => "vercel",
            Palette::Stripe => "stripe",
            Palette::Framer => "framer",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Palette::Linear => "Linear",
            Palette::Vercel => "Vercel",
            Palette::Stripe => "Stripe",
            Palette::Framer => "Framer",
        }
    }
}

/// 8-bit RGB triple
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || CatalogError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Perceived brightness on a 0..=255 scale
    pub fn brightness(&self) -> f32 {
        (self.r as f32 * 299.0 + self.g as f32 * 587.0 + self.b as f32 * 114.0) / 1000.0
    }

    /// Whether dark text reads better on top of this color
    pub fn is_light(&self) -> bool {
        self.brightness() > 128.0
    }
}

/// One named color of a brand palette
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
    pub usage: &'static str,
    pub palette: Palette,
}

impl ColorSwatch {
    pub fn rgb(&self) -> Result<Rgb> {
        Rgb::from_hex(self.hex)
    }
}

impl CatalogEntry for ColorSwatch {
    type Category = Palette;

    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.usage
    }

    fn category(&self) -> Palette {
        self.palette
    }
}

// ============================================================================
// Component examples
// ============================================================================

/// What a component example is for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentCategory {
    Actions,
    Layout,
    Forms,
    Feedback,
    Navigation,
}

impl Category for ComponentCategory {
    const ALL: &'static [Self] = &[
        ComponentCategory::Actions,
        ComponentCategory::Layout,
        ComponentCategory::Forms,
        ComponentCategory::Feedback,
        ComponentCategory::Navigation,
    ];

    fn slug(&self) -> &'static str {
        match self {
            ComponentCategory::Actions => "actions",
            ComponentCategory::Layout => "layout",
            ComponentCategory::Forms => "forms",
            ComponentCategory::Feedback => "feedback",
            ComponentCategory::Navigation => "navigation",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ComponentCategory::Actions => "Actions",
            ComponentCategory::Layout => "Layout",
            ComponentCategory::Forms => "Forms",
            ComponentCategory::Feedback => "Feedback",
            ComponentCategory::Navigation => "Navigation",
        }
    }
}

/// A copy-paste UI component with its markup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentExample {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ComponentCategory,
    pub code: &'static str,
    pub dependencies: &'static [&'static str],
}

impl CatalogEntry for ComponentExample {
    type Category = ComponentCategory;

    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> ComponentCategory {
        self.category
    }
}

// ============================================================================
// Mixed catalog item
// ============================================================================

/// Which catalog an item belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Fonts,
    Gradients,
    Animations,
    Colors,
    Components,
}

impl CatalogKind {
    pub const ALL: &'static [CatalogKind] = &[
        CatalogKind::Fonts,
        CatalogKind::Gradients,
        CatalogKind::Animations,
        CatalogKind::Colors,
        CatalogKind::Components,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            CatalogKind::Fonts => "fonts",
            CatalogKind::Gradients => "gradients",
            CatalogKind::Animations => "animations",
            CatalogKind::Colors => "colors",
            CatalogKind::Components => "components",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.slug().eq_ignore_ascii_case(slug))
    }
}

/// Category of a [`CatalogItem`], tagged by catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Font(FontCategory),
    Gradient(GradientCategory),
    Animation(AnimationCategory),
    Color(Palette),
    Component(ComponentCategory),
}

impl Category for ItemCategory {
    const ALL: &'static [Self] = &[
        ItemCategory::Font(FontCategory::Serif),
        ItemCategory::Font(FontCategory::SansSerif),
        ItemCategory::Font(FontCategory::Display),
        ItemCategory::Font(FontCategory::Monospace),
        ItemCategory::Font(FontCategory::Handwriting),
        ItemCategory::Gradient(GradientCategory::Mesh),
        ItemCategory::Gradient(GradientCategory::Aurora),
        ItemCategory::Gradient(GradientCategory::Neon),
        ItemCategory::Gradient(GradientCategory::Metallic),
        ItemCategory::Gradient(GradientCategory::Glass),
        ItemCategory::Gradient(GradientCategory::Organic),
        ItemCategory::Animation(AnimationCategory::Hover),
        ItemCategory::Animation(AnimationCategory::Click),
        ItemCategory::Animation(AnimationCategory::Continuous),
        ItemCategory::Animation(AnimationCategory::MicroInteraction),
        ItemCategory::Color(Palette::Linear),
        ItemCategory::Color(Palette::Vercel),
        ItemCategory::Color(Palette::Stripe),
        ItemCategory::Color(Palette::Framer),
        ItemCategory::Component(ComponentCategory::Actions),
        ItemCategory::Component(ComponentCategory::Layout),
        ItemCategory::Component(ComponentCategory::Forms),
        ItemCategory::Component(ComponentCategory::Feedback),
        ItemCategory::Component(ComponentCategory::Navigation),
    ];

    fn slug(&self) -> &'static str {
        match self {
            ItemCategory::Font(c) => c.slug(),
            ItemCategory::Gradient(c) => c.slug(),
            ItemCategory::Animation(c) => c.slug(),
            ItemCategory::Color(c) => c.slug(),
            ItemCategory::Component(c) => c.slug(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ItemCategory::Font(c) => c.label(),
            ItemCategory::Gradient(c) => c.label(),
            ItemCategory::Animation(c) => c.label(),
            ItemCategory::Color(c) => c.label(),
            ItemCategory::Component(c) => c.label(),
        }
    }
}

/// Any catalog record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogItem {
    Font(Font),
    Gradient(Gradient),
    Animation(AnimationDemo),
    Color(ColorSwatch),
    Component(ComponentExample),
}

impl CatalogItem {
    pub fn kind(&self) -> CatalogKind {
        match self {
            CatalogItem::Font(_) => CatalogKind::Fonts,
            CatalogItem::Gradient(_) => CatalogKind::Gradients,
            CatalogItem::Animation(_) => CatalogKind::Animations,
            CatalogItem::Color(_) => CatalogKind::Colors,
            CatalogItem::Component(_) => CatalogKind::Components,
        }
    }

    /// The text a "copy" action puts on the clipboard by default
    pub fn snippet(&self) -> &'static str {
        match self {
            CatalogItem::Font(font) => font.family,
            CatalogItem::Gradient(gradient) => gradient.css,
            CatalogItem::Animation(demo) => demo.code,
            CatalogItem::Color(color) => color.hex,
            CatalogItem::Component(component) => component.code,
        }
    }
}

impl CatalogEntry for CatalogItem {
    type Category = ItemCategory;

    fn id(&self) -> &str {
        match self {
            CatalogItem::Font(f) => f.id,
            CatalogItem::Gradient(g) => g.id,
            CatalogItem::Animation(a) => a.id,
            CatalogItem::Color(c) => c.id,
            CatalogItem::Component(c) => c.id,
        }
    }

    fn name(&self) -> &str {
        match self {
            CatalogItem::Font(f) => f.name,
            CatalogItem::Gradient(g) => g.name,
            CatalogItem::Animation(a) => a.name,
            CatalogItem::Color(c) => c.name,
            CatalogItem::Component(c) => c.name,
        }
    }

    fn description(&self) -> &str {
        match self {
            CatalogItem::Font(f) => f.description,
            CatalogItem::Gradient(g) => g.description,
            CatalogItem::Animation(a) => a.description,
            CatalogItem::Color(c) => c.usage,
            CatalogItem::Component(c) => c.description,
        }
    }

    fn category(&self) -> ItemCategory {
        match self {
            CatalogItem::Font(f) => ItemCategory::Font(f.category),
            CatalogItem::Gradient(g) => ItemCategory::Gradient(g.category),
            CatalogItem::Animation(a) => ItemCategory::Animation(a.category),
            CatalogItem::Color(c) => ItemCategory::Color(c.palette),
            CatalogItem::Component(c) => ItemCategory::Component(c.category),
        }
    }
}

impl From<Font> for CatalogItem {
    fn from(font: Font) -> Self {
        CatalogItem::Font(font)
    }
}

impl From<Gradient> for CatalogItem {
    fn from(gradient: Gradient) -> Self {
        CatalogItem::Gradient(gradient)
    }
}

impl From<AnimationDemo> for CatalogItem {
    fn from(demo: AnimationDemo) -> Self {
        CatalogItem::Animation(demo)
    }
}

impl From<ColorSwatch> for CatalogItem {
    fn from(color: ColorSwatch) -> Self {
        CatalogItem::Color(color)
    }
}

impl From<ComponentExample> for CatalogItem {
    fn from(component: ComponentExample) -> Self {
        CatalogItem::Component(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_parse_and_brightness() {
        let rgb = Rgb::from_hex("#5E6AD2").unwrap();
        assert_eq!(rgb, Rgb { r: 0x5E, g: 0x6A, b: 0xD2 });
        assert!(!rgb.is_light());
        assert!(Rgb::from_hex("#FFFFFF").unwrap().is_light());
        assert!(!Rgb::from_hex("#000000").unwrap().is_light());
    }

    #[test]
    fn test_rgb_rejects_malformed() {
        for bad in ["5E6AD2", "#5E6AD", "#GGGGGG", "#5E6AD2FF", "#ééé"] {
            assert_eq!(
                Rgb::from_hex(bad).unwrap_err(),
                CatalogError::InvalidHex(bad.to_string())
            );
        }
    }

    #[test]
    fn test_font_generic_family() {
        assert_eq!(FontCategory::Serif.generic_family(), "serif");
        assert_eq!(FontCategory::Monospace.generic_family(), "monospace");
        assert_eq!(FontCategory::Display.generic_family(), "sans-serif");
        assert_eq!(FontCategory::Handwriting.generic_family(), "sans-serif");
    }

    #[test]
    fn test_item_category_slugs_resolve() {
        assert_eq!(
            FontCategory::from_slug("sans-serif"),
            Some(FontCategory::SansSerif)
        );
        assert_eq!(
            AnimationCategory::from_slug("micro-interaction"),
            Some(AnimationCategory::MicroInteraction)
        );
        assert_eq!(CatalogKind::from_slug("Gradients"), Some(CatalogKind::Gradients));
        assert_eq!(
            CatalogKind::from_slug("components"),
            Some(CatalogKind::Components)
        );
        assert_eq!(
            ComponentCategory::from_slug("feedback"),
            Some(ComponentCategory::Feedback)
        );
    }

    #[test]
    fn test_catalog_item_delegates() {
        let swatch = ColorSwatch {
            id: "linear-primary",
            name: "Primary",
            hex: "#5E6AD2",
            usage: "Primary actions, links",
            palette: Palette::Linear,
        };
        let item = CatalogItem::from(swatch);
        assert_eq!(item.id(), "linear-primary");
        assert_eq!(item.description(), "Primary actions, links");
        assert_eq!(item.category(), ItemCategory::Color(Palette::Linear));
        assert_eq!(item.kind(), CatalogKind::Colors);
        assert_eq!(item.snippet(), "#5E6AD2");
    }
}
