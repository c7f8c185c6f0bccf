//! Text runs: a paragraph assembled from several inline elements.
use super::{Container, ContainerBody, ContainerKind, ElementContext, ElementMeta};
use crate::style::{ParagraphStyle, StyleSpec};

#[derive(Debug)]
pub struct TextRun {
    pub(crate) meta: ElementMeta,
    body: ContainerBody,
    paragraph: Box<ParagraphStyle>,
}

impl TextRun {
    pub(crate) fn new(
        meta: ElementMeta,
        ctx: ElementContext,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        Self {
            meta,
            body: ContainerBody::new(ContainerKind::TextRun, ctx),
            paragraph: paragraph.resolve(),
        }
    }

    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph
    }

    pub fn set_paragraph_style(&mut self, spec: impl Into<StyleSpec<ParagraphStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.paragraph);
        self
    }
}

impl Container for TextRun {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use crate::common::id::IdAllocator;
    use crate::element::{Container, ContainerKind, DocumentElement, ElementKind, Section};
    use crate::Error;

    #[test]
    fn test_text_run_holds_inline_elements() {
        let mut section = Section::new(0, (), IdAllocator::isolated());
        let run = section.add_text_run().unwrap();
        run.add_text("See ").unwrap();
        run.add_link("https://example.com", "here").unwrap();
        run.add_footnote().unwrap().add_text("A note").unwrap();
        assert_eq!(run.count_elements(), 3);
        assert_eq!(run.container_kind(), ContainerKind::TextRun);

        assert_eq!(
            run.add_table().unwrap_err(),
            Error::UnsupportedElement {
                element: ElementKind::Table,
                container: ContainerKind::TextRun,
            }
        );

        // Nested elements belong to the run, not to the section.
        assert_eq!(section.count_elements(), 1);
        assert_eq!(section.element(0).unwrap().kind(), ElementKind::TextRun);
    }
}
