//! Character formatting.
use super::{RGBColor, Style, StyleValue};

/// Font style applied to text-bearing elements and titles.
///
/// A preset name is a reference to a style registered under that name; the
/// inline attributes then act as overrides on top of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontStyle {
    style_name: Option<String>,
    name: Option<String>,
    /// Size in points
    size: Option<f64>,
    bold: bool,
    italic: bool,
    underline: Option<String>,
    strikethrough: bool,
    superscript: bool,
    subscript: bool,
    color: Option<RGBColor>,
    background: Option<RGBColor>,
    hidden: bool,
}

impl FontStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the registered style this one refers to.
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn size(&self) -> Option<f64> {
        self.size
    }

    pub fn set_size(&mut self, points: f64) -> &mut Self {
        self.size = Some(points);
        self
    }

    /// Size in half-points, as stored by word-processing formats.
    pub fn size_half_points(&self) -> Option<u32> {
        self.size.map(|pt| (pt * 2.0).round() as u32)
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn italic(&self) -> bool {
        self.italic
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.italic = italic;
        self
    }

    pub fn underline(&self) -> Option<&str> {
        self.underline.as_deref()
    }

    pub fn strikethrough(&self) -> bool {
        self.strikethrough
    }

    pub fn superscript(&self) -> bool {
        self.superscript
    }

    pub fn subscript(&self) -> bool {
        self.subscript
    }

    /// Superscript and subscript are mutually exclusive; setting one clears the other.
    pub fn set_superscript(&mut self, on: bool) -> &mut Self {
        self.superscript = on;
        if on {
            self.subscript = false;
        }
        self
    }

    pub fn set_subscript(&mut self, on: bool) -> &mut Self {
        self.subscript = on;
        if on {
            self.superscript = false;
        }
        self
    }

    pub fn color(&self) -> Option<RGBColor> {
        self.color
    }

    pub fn set_color(&mut self, color: RGBColor) -> &mut Self {
        self.color = Some(color);
        self
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }
}

impl Style for FontStyle {
    const NAME: &'static str = "font";

    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool {
        match key {
            "name" => self.name = value.as_str().map(str::to_string),
            "size" => self.size = value.as_f64(),
            "bold" => self.bold = value.as_bool().unwrap_or(false),
            "italic" => self.italic = value.as_bool().unwrap_or(false),
            "underline" => {
                self.underline = match value {
                    StyleValue::Str(s) if s != "none" => Some(s.clone()),
                    StyleValue::Bool(true) => Some("single".to_string()),
                    _ => None,
                };
            },
            "strikethrough" => self.strikethrough = value.as_bool().unwrap_or(false),
            "superScript" | "superscript" => {
                self.set_superscript(value.as_bool().unwrap_or(false));
            },
            "subScript" | "subscript" => {
                self.set_subscript(value.as_bool().unwrap_or(false));
            },
            "color" => self.color = value.as_str().and_then(RGBColor::parse),
            "bgColor" | "bg_color" | "fgColor" | "fg_color" => {
                self.background = value.as_str().and_then(RGBColor::parse);
            },
            "hidden" => self.hidden = value.as_bool().unwrap_or(false),
            _ => return false,
        }
        true
    }

    fn apply_preset(&mut self, name: &str) -> bool {
        self.style_name = Some(name.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleAttributes, resolve};

    #[test]
    fn test_font_attributes() {
        let attrs = StyleAttributes::new()
            .with("name", "Arial")
            .with("size", 10.5)
            .with("bold", true)
            .with("underline", "double")
            .with("color", "#336699")
            .with("superScript", true)
            .with("subScript", true);
        let font: Box<FontStyle> = resolve(attrs);
        assert_eq!(font.name(), Some("Arial"));
        assert_eq!(font.size_half_points(), Some(21));
        assert!(font.bold());
        assert_eq!(font.underline(), Some("double"));
        assert_eq!(font.color(), Some(RGBColor::new(0x33, 0x66, 0x99)));
        assert!(font.subscript());
        assert!(!font.superscript());
    }

    #[test]
    fn test_preset_is_style_reference() {
        let font: Box<FontStyle> = resolve("Emphasis");
        assert_eq!(font.style_name(), Some("Emphasis"));
        assert!(!font.bold());
    }
}
