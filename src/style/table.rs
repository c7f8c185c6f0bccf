//! Table formatting.
use super::{Alignment, RGBColor, Style, StyleValue};

/// Table style. Border sizes are in eighths of a point, margins and width in twips.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableStyle {
    style_name: Option<String>,
    border_size: Option<u32>,
    border_color: Option<RGBColor>,
    cell_margin: Option<u32>,
    width: Option<u32>,
    alignment: Option<Alignment>,
    background: Option<RGBColor>,
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    pub fn border_size(&self) -> Option<u32> {
        self.border_size
    }

    pub fn border_color(&self) -> Option<RGBColor> {
        self.border_color
    }

    pub fn cell_margin(&self) -> Option<u32> {
        self.cell_margin
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }
}

impl Style for TableStyle {
    const NAME: &'static str = "table";

    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool {
        match key {
            "borderSize" | "border_size" => self.border_size = value.as_u32(),
            "borderColor" | "border_color" => {
                self.border_color = value.as_str().and_then(RGBColor::parse);
            },
            "cellMargin" | "cell_margin" => self.cell_margin = value.as_u32(),
            "width" => self.width = value.as_u32(),
            "alignment" => self.alignment = value.as_str().and_then(Alignment::parse),
            "bgColor" | "bg_color" => self.background = value.as_str().and_then(RGBColor::parse),
            _ => return false,
        }
        true
    }

    fn apply_preset(&mut self, name: &str) -> bool {
        self.style_name = Some(name.to_string());
        true
    }
}
