//! Form-field elements.
use super::ElementMeta;
use crate::style::{FontStyle, ParagraphStyle, StyleSpec};

/// A check box form field followed by a label.
#[derive(Debug)]
pub struct CheckBox {
    pub(crate) meta: ElementMeta,
    name: String,
    text: String,
    checked: bool,
    font: Box<FontStyle>,
    paragraph: Box<ParagraphStyle>,
}

impl CheckBox {
    pub(crate) fn new(
        meta: ElementMeta,
        name: String,
        text: String,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        Self {
            meta,
            name,
            text,
            checked: false,
            font: font.resolve(),
            paragraph: paragraph.resolve(),
        }
    }

    /// Form field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) -> &mut Self {
        self.checked = checked;
        self
    }

    pub fn font_style(&self) -> &FontStyle {
        &self.font
    }

    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph
    }
}
