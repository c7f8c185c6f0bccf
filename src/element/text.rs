//! Plain text and break elements.
use super::ElementMeta;
use crate::style::{FontStyle, ParagraphStyle, StyleSpec};

/// A run of plain text with its own font and paragraph style.
#[derive(Debug)]
pub struct Text {
    pub(crate) meta: ElementMeta,
    text: String,
    font: Box<FontStyle>,
    paragraph: Box<ParagraphStyle>,
}

impl Text {
    pub(crate) fn new(
        meta: ElementMeta,
        text: String,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        Self {
            meta,
            text,
            font: font.resolve(),
            paragraph: paragraph.resolve(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_style(&self) -> &FontStyle {
        &self.font
    }

    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph
    }

    pub fn set_font_style(&mut self, spec: impl Into<StyleSpec<FontStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.font);
        self
    }

    pub fn set_paragraph_style(&mut self, spec: impl Into<StyleSpec<ParagraphStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.paragraph);
        self
    }
}

/// Text whose `{FIELD}` placeholders are turned into fields by the writer,
/// e.g. `Page {PAGE} of {NUMPAGES}`.
#[derive(Debug)]
pub struct PreserveText {
    pub(crate) meta: ElementMeta,
    text: String,
    font: Box<FontStyle>,
    paragraph: Box<ParagraphStyle>,
}

impl PreserveText {
    pub(crate) fn new(
        meta: ElementMeta,
        text: String,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        Self {
            meta,
            text,
            font: font.resolve(),
            paragraph: paragraph.resolve(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split into literal text and field names, in order.
    ///
    /// An unmatched `{` is kept as literal text.
    pub fn segments(&self) -> Vec<TextSegment<'_>> {
        let mut segments = Vec::new();
        let mut rest = self.text.as_str();
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };
            if open > 0 {
                segments.push(TextSegment::Literal(&rest[..open]));
            }
            segments.push(TextSegment::Field(&rest[open + 1..close]));
            rest = &rest[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(TextSegment::Literal(rest));
        }
        segments
    }

    pub fn font_style(&self) -> &FontStyle {
        &self.font
    }

    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph
    }

    pub fn set_font_style(&mut self, spec: impl Into<StyleSpec<FontStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.font);
        self
    }
}

/// Part of a [`PreserveText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSegment<'a> {
    Literal(&'a str),
    Field(&'a str),
}

/// One or more line breaks.
#[derive(Debug)]
pub struct TextBreak {
    pub(crate) meta: ElementMeta,
    count: usize,
    font: Box<FontStyle>,
    paragraph: Box<ParagraphStyle>,
}

impl TextBreak {
    pub(crate) fn new(
        meta: ElementMeta,
        count: usize,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        Self {
            meta,
            count: count.max(1),
            font: font.resolve(),
            paragraph: paragraph.resolve(),
        }
    }

    /// Number of breaks, at least one.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn font_style(&self) -> &FontStyle {
        &self.font
    }

    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph
    }
}

/// Hard page break.
#[derive(Debug)]
pub struct PageBreak {
    pub(crate) meta: ElementMeta,
}

impl PageBreak {
    pub(crate) fn new(meta: ElementMeta) -> Self {
        Self { meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::id::IdAllocator;
    use crate::element::{Container, ContainerBody, ContainerKind, ElementContext};
    use crate::document::DocumentRef;
    use crate::style::StyleAttributes;

    fn footer() -> ContainerBody {
        ContainerBody::new(
            ContainerKind::Footer,
            ElementContext::new(IdAllocator::isolated(), DocumentRef::detached()),
        )
    }

    #[test]
    fn test_text_styles() {
        let mut body = footer();
        let text = body.add_text("hello").unwrap();
        text.set_font_style(StyleAttributes::new().with("bold", true))
            .set_paragraph_style("Caption");
        assert!(text.font_style().bold());
        assert_eq!(text.paragraph_style().style_name(), Some("Caption"));
        assert_eq!(text.text(), "hello");
    }

    #[test]
    fn test_preserve_text_segments() {
        let mut body = footer();
        let text = body.add_preserve_text("Page {PAGE} of {NUMPAGES}").unwrap();
        assert_eq!(
            text.segments(),
            [
                TextSegment::Literal("Page "),
                TextSegment::Field("PAGE"),
                TextSegment::Literal(" of "),
                TextSegment::Field("NUMPAGES"),
            ]
        );

        let text = body.add_preserve_text("{PAGE} {broken").unwrap();
        assert_eq!(
            text.segments(),
            [TextSegment::Field("PAGE"), TextSegment::Literal(" {broken")]
        );
    }

    #[test]
    fn test_text_break_count() {
        let mut body = footer();
        assert_eq!(body.add_text_break(0).unwrap().count(), 1);
        assert_eq!(body.add_text_break(3).unwrap().count(), 3);
    }
}
