//! Hyperlink support.
use super::ElementMeta;
use crate::document::RelationKind;
use crate::style::{FontStyle, ParagraphStyle, StyleSpec};

/// A hyperlink to an external URL or to a bookmark in the document.
///
/// External links register a relationship with the owning document when
/// added; internal links never do.
#[derive(Debug)]
pub struct Link {
    pub(crate) meta: ElementMeta,
    target: String,
    text: String,
    internal: bool,
    font: Box<FontStyle>,
    paragraph: Box<ParagraphStyle>,
}

impl Link {
    pub(crate) fn new(
        mut meta: ElementMeta,
        target: String,
        text: String,
        internal: bool,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        if !internal {
            let relation = meta
                .document
                .register_relation(RelationKind::Hyperlink, &target, meta.id);
            meta.set_relation_id(relation);
        }
        // A link without its own text shows its target.
        let text = if text.is_empty() { target.clone() } else { text };
        Self {
            meta,
            target,
            text,
            internal,
            font: font.resolve(),
            paragraph: paragraph.resolve(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_internal(&self) -> bool {
        self.internal
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

#[cfg(test)]
mod tests {
    use crate::document::Document;
    use crate::element::{Container, DocumentElement};

    #[test]
    fn test_external_link_registers_relation() {
        let mut doc = Document::new();
        let section = doc.add_section(());
        let link = section.add_link("https://example.com", "").unwrap();
        assert_eq!(link.text(), "https://example.com");
        assert_eq!(link.relation_id(), Some(1));

        let internal = section.add_internal_link("_Toc1", "Intro").unwrap();
        assert!(internal.is_internal());
        assert_eq!(internal.relation_id(), None);
        assert_eq!(doc.relations().len(), 1);
    }
}
