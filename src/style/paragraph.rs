//! Paragraph formatting.
use super::{Style, StyleValue};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "both" | "justify" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// Paragraph style. Spacing and indentation are in twips.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphStyle {
    style_name: Option<String>,
    alignment: Option<Alignment>,
    space_before: Option<u32>,
    space_after: Option<u32>,
    /// Line height as a multiple of single spacing
    line_height: Option<f64>,
    indent: Option<u32>,
    hanging: Option<u32>,
    keep_next: bool,
    keep_lines: bool,
    page_break_before: bool,
    widow_control: Option<bool>,
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_before(&self) -> Option<u32> {
        self.space_before
    }

    pub fn space_after(&self) -> Option<u32> {
        self.space_after
    }

    pub fn line_height(&self) -> Option<f64> {
        self.line_height
    }

    pub fn indent(&self) -> Option<u32> {
        self.indent
    }

    pub fn hanging(&self) -> Option<u32> {
        self.hanging
    }

    pub fn keep_next(&self) -> bool {
        self.keep_next
    }

    pub fn keep_lines(&self) -> bool {
        self.keep_lines
    }

    pub fn page_break_before(&self) -> bool {
        self.page_break_before
    }

    pub fn set_page_break_before(&mut self, on: bool) -> &mut Self {
        self.page_break_before = on;
        self
    }

    pub fn widow_control(&self) -> Option<bool> {
        self.widow_control
    }
}

impl Style for ParagraphStyle {
    const NAME: &'static str = "paragraph";

    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool {
        match key {
            "alignment" | "align" => self.alignment = value.as_str().and_then(Alignment::parse),
            "spaceBefore" | "space_before" => self.space_before = value.as_u32(),
            "spaceAfter" | "space_after" => self.space_after = value.as_u32(),
            "lineHeight" | "line_height" => {
                // Non-positive heights are meaningless and are dropped.
                self.line_height = value.as_f64().filter(|h| *h > 0.0);
            },
            "indent" => self.indent = value.as_u32(),
            "hanging" => self.hanging = value.as_u32(),
            "keepNext" | "keep_next" => self.keep_next = value.as_bool().unwrap_or(false),
            "keepLines" | "keep_lines" => self.keep_lines = value.as_bool().unwrap_or(false),
            "pageBreakBefore" | "page_break_before" => {
                self.page_break_before = value.as_bool().unwrap_or(false);
            },
            "widowControl" | "widow_control" => self.widow_control = value.as_bool(),
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
    fn test_paragraph_attributes() {
        let attrs = StyleAttributes::new()
            .with("alignment", "justify")
            .with("spaceAfter", 240)
            .with("lineHeight", -1.0)
            .with("keepNext", true);
        let para: Box<ParagraphStyle> = resolve(attrs);
        assert_eq!(para.alignment(), Some(Alignment::Justify));
        assert_eq!(para.alignment().map(|a| a.as_str()), Some("both"));
        assert_eq!(para.space_after(), Some(240));
        assert_eq!(para.line_height(), None);
        assert!(para.keep_next());
    }
}
