//! List items.
use super::ElementMeta;
use crate::style::{FontStyle, ListStyle, ParagraphStyle, StyleSpec};

/// Deepest nesting level a list item can have.
pub const MAX_DEPTH: u8 = 8;

/// One item of a bulleted or numbered list.
#[derive(Debug)]
pub struct ListItem {
    pub(crate) meta: ElementMeta,
    text: String,
    depth: u8,
    font: Box<FontStyle>,
    list: Box<ListStyle>,
    paragraph: Box<ParagraphStyle>,
}

impl ListItem {
    pub(crate) fn new(
        meta: ElementMeta,
        text: String,
        depth: u8,
        font: StyleSpec<FontStyle>,
        list: StyleSpec<ListStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        Self {
            meta,
            text,
            depth: depth.min(MAX_DEPTH),
            font: font.resolve(),
            list: list.resolve(),
            paragraph: paragraph.resolve(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Nesting depth, 0 for top-level items.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn font_style(&self) -> &FontStyle {
        &self.font
    }

    pub fn list_style(&self) -> &ListStyle {
        &self.list
    }

    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph
    }

    pub fn set_list_style(&mut self, spec: impl Into<StyleSpec<ListStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.list);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::id::IdAllocator;
    use crate::element::{Container, Section};
    use crate::style::ListType;

    #[test]
    fn test_list_item() {
        let mut section = Section::new(0, (), IdAllocator::isolated());
        let item = section.add_list_item("step", 12).unwrap();
        assert_eq!(item.depth(), MAX_DEPTH);
        assert_eq!(item.list_style().list_type(), ListType::BulletFilled);
        item.set_list_style("number");
        assert_eq!(item.list_style().list_type(), ListType::Number);
    }
}
