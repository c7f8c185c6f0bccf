//! Style objects and the style resolver.
//!
//! A style can be supplied to an entity in three ways: as a pre-built style
//! object, as an attribute mapping, or as a preset name. [`resolve`] turns any
//! of these into an owned, boxed style object. Attribute keys outside a
//! style's recognized set are dropped with a debug log and never produce an
//! error, so callers written against a newer attribute set still work.

pub mod color;
pub mod font;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod section;
pub mod table;
pub mod toc;
pub mod value;

pub use color::RGBColor;
pub use font::FontStyle;
pub use image::{ImageAlignment, ImageStyle, ImageWrapping};
pub use list::{ListStyle, ListType};
pub use paragraph::{Alignment, ParagraphStyle};
pub use section::{BreakType, Orientation, PaperSize, SectionStyle, VerticalAlignment};
pub use table::TableStyle;
pub use toc::{TabLeader, TocStyle};
pub use value::{StyleAttributes, StyleValue};

use std::fmt;

/// A concrete style object that can be built from attributes or presets.
pub trait Style: Default + fmt::Debug {
    /// Name used in log messages.
    const NAME: &'static str;

    /// Apply one attribute. Returns `false` if the key is not recognized.
    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool;

    /// Apply a named preset. Returns `false` if the name is unknown.
    fn apply_preset(&mut self, _name: &str) -> bool {
        false
    }

    /// Apply every recognized attribute of `attrs` in order.
    fn apply_attributes(&mut self, attrs: &StyleAttributes) {
        for (key, value) in attrs.iter() {
            if !self.set_attribute(key, value) {
                log::debug!("ignoring unrecognized {} attribute '{}'", Self::NAME, key);
            }
        }
    }
}

/// How a caller specifies the style of an entity.
#[derive(Debug)]
pub enum StyleSpec<S> {
    /// No style given; documented defaults apply.
    Default,
    /// A pre-built style object, adopted without copying.
    Instance(Box<S>),
    /// Attribute mapping applied on top of the defaults.
    Attributes(StyleAttributes),
    /// Named preset.
    Preset(String),
}

impl<S> Default for StyleSpec<S> {
    fn default() -> Self {
        StyleSpec::Default
    }
}

impl<S: Style> StyleSpec<S> {
    /// Resolve into an owned style object.
    pub fn resolve(self) -> Box<S> {
        match self {
            StyleSpec::Default => Box::default(),
            StyleSpec::Instance(style) => style,
            StyleSpec::Attributes(attrs) => {
                let mut style = Box::<S>::default();
                style.apply_attributes(&attrs);
                style
            },
            StyleSpec::Preset(name) => {
                let mut style = Box::<S>::default();
                if !style.apply_preset(&name) {
                    log::warn!("unknown {} preset '{}', using defaults", S::NAME, name);
                }
                style
            },
        }
    }

    /// Update an already-resolved style in place.
    ///
    /// An instance replaces the current style outright; attributes and presets
    /// are applied on top of it; `Default` leaves it untouched.
    pub fn apply_to(self, target: &mut Box<S>) {
        match self {
            StyleSpec::Default => {},
            StyleSpec::Instance(style) => *target = style,
            StyleSpec::Attributes(attrs) => target.apply_attributes(&attrs),
            StyleSpec::Preset(name) => {
                if !target.apply_preset(&name) {
                    log::warn!("unknown {} preset '{}', style unchanged", S::NAME, name);
                }
            },
        }
    }
}

/// Resolve a style specification into an owned style object.
#[inline]
pub fn resolve<S: Style>(spec: impl Into<StyleSpec<S>>) -> Box<S> {
    spec.into().resolve()
}

impl<S> From<()> for StyleSpec<S> {
    fn from(_: ()) -> Self {
        StyleSpec::Default
    }
}

impl<S> From<Box<S>> for StyleSpec<S> {
    fn from(style: Box<S>) -> Self {
        StyleSpec::Instance(style)
    }
}

impl<S> From<StyleAttributes> for StyleSpec<S> {
    fn from(attrs: StyleAttributes) -> Self {
        StyleSpec::Attributes(attrs)
    }
}

impl<S> From<&str> for StyleSpec<S> {
    fn from(name: &str) -> Self {
        StyleSpec::Preset(name.to_string())
    }
}

impl<S> From<String> for StyleSpec<S> {
    fn from(name: String) -> Self {
        StyleSpec::Preset(name)
    }
}

macro_rules! impl_spec_from_style {
    ($($style:ty),* $(,)?) => {
        $(
            impl From<$style> for StyleSpec<$style> {
                fn from(style: $style) -> Self {
                    StyleSpec::Instance(Box::new(style))
                }
            }
        )*
    };
}

impl_spec_from_style!(
    FontStyle,
    ImageStyle,
    ListStyle,
    ParagraphStyle,
    SectionStyle,
    TableStyle,
    TocStyle,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default() {
        let style: Box<SectionStyle> = resolve(());
        assert_eq!(style.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_resolve_instance_keeps_allocation() {
        let style = Box::new(SectionStyle::default());
        let ptr: *const SectionStyle = &*style;
        let resolved: Box<SectionStyle> = resolve(style);
        assert!(std::ptr::eq(&*resolved, ptr));
    }

    #[test]
    fn test_resolve_attributes_ignores_unknown() {
        let attrs = StyleAttributes::new()
            .with("orientation", "landscape")
            .with("foo", StyleValue::Null)
            .with("colsNum", 2);
        let style: Box<SectionStyle> = resolve(attrs);
        assert_eq!(style.orientation(), Orientation::Landscape);
        assert_eq!(style.column_count(), 2);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_defaults() {
        let style: Box<SectionStyle> = resolve("NoSuchPaper");
        assert_eq!(style.paper_size(), PaperSize::A4);
    }

    #[test]
    fn test_apply_to_merges_attributes() {
        let mut style: Box<FontStyle> = resolve(StyleAttributes::new().with("bold", true));
        StyleSpec::from(StyleAttributes::new().with("size", 14)).apply_to(&mut style);
        assert!(style.bold());
        assert_eq!(style.size(), Some(14.0));

        StyleSpec::Default.apply_to(&mut style);
        assert!(style.bold());

        StyleSpec::from(FontStyle::default()).apply_to(&mut style);
        assert!(!style.bold());
    }
}
