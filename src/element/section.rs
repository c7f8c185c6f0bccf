//! Document sections.
use super::{
    Container, ContainerBody, ContainerKind, ElementContext, Footer, Header, HeaderFooterType,
};
use crate::common::id::IdAllocator;
use crate::document::DocumentRef;
use crate::style::{SectionStyle, StyleSpec};
use crate::Result;
use smallvec::SmallVec;

/// One document section.
///
/// The section's own element sequence is its body content. Headers and
/// footers are separate containers, at most one of each per
/// [`HeaderFooterType`], and are not part of [`Container::elements`].
#[derive(Debug)]
pub struct Section {
    index: usize,
    style: Box<SectionStyle>,
    body: ContainerBody,
    headers: SmallVec<[Header; 3]>,
    footers: SmallVec<[Footer; 3]>,
}

impl Section {
    /// Create a section that is not attached to a document.
    ///
    /// Sections inside a [`Document`](crate::Document) are created with
    /// [`Document::add_section`](crate::Document::add_section).
    pub fn new(index: usize, style: impl Into<StyleSpec<SectionStyle>>, ids: IdAllocator) -> Self {
        let ctx = ElementContext::new(ids, DocumentRef::detached());
        Self {
            index,
            style: style.into().resolve(),
            body: ContainerBody::new(ContainerKind::Section, ctx),
            headers: SmallVec::new(),
            footers: SmallVec::new(),
        }
    }

    /// Position among the document's sections, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn style(&self) -> &SectionStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut SectionStyle {
        &mut self.style
    }

    /// Update the section style.
    ///
    /// A style object replaces the current one. Attributes and presets are
    /// applied on top of it, ignoring unknown keys.
    pub fn set_style(&mut self, spec: impl Into<StyleSpec<SectionStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.style);
        self
    }

    pub fn document(&self) -> &DocumentRef {
        self.body.document()
    }

    pub(crate) fn set_document(&mut self, document: DocumentRef) {
        for header in &mut self.headers {
            header.set_document(document.clone());
        }
        for footer in &mut self.footers {
            footer.set_document(document.clone());
        }
        self.body.set_document(document);
    }

    fn forget(&self, body: &ContainerBody) {
        let mut ids = Vec::new();
        body.collect_ids(&mut ids);
        self.body.document().forget(&ids);
    }

    /// Add a header of type `ty`, replacing any header of that type.
    pub fn add_header(&mut self, ty: HeaderFooterType) -> &mut Header {
        let header = Header::new(ty, self.body.context().clone());
        log::debug!("section {}: added {} header {}", self.index, ty, header.id());

        let index = match self.headers.iter().position(|h| h.header_type() == ty) {
            Some(index) => {
                let replaced = std::mem::replace(&mut self.headers[index], header);
                self.forget(replaced.body());
                index
            },
            None => {
                self.headers.push(header);
                self.headers.len() - 1
            },
        };
        &mut self.headers[index]
    }

    /// Add a header from a type tag (`default`, `first` or `even`).
    pub fn add_header_tag(&mut self, tag: &str) -> Result<&mut Header> {
        let ty = HeaderFooterType::from_tag(tag)?;
        Ok(self.add_header(ty))
    }

    /// Add a footer of type `ty`, replacing any footer of that type.
    pub fn add_footer(&mut self, ty: HeaderFooterType) -> &mut Footer {
        let footer = Footer::new(ty, self.body.context().clone());
        log::debug!("section {}: added {} footer {}", self.index, ty, footer.id());

        let index = match self.footers.iter().position(|f| f.footer_type() == ty) {
            Some(index) => {
                let replaced = std::mem::replace(&mut self.footers[index], footer);
                self.forget(replaced.body());
                index
            },
            None => {
                self.footers.push(footer);
                self.footers.len() - 1
            },
        };
        &mut self.footers[index]
    }

    pub fn add_footer_tag(&mut self, tag: &str) -> Result<&mut Footer> {
        let ty = HeaderFooterType::from_tag(tag)?;
        Ok(self.add_footer(ty))
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut [Header] {
        &mut self.headers
    }

    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    pub fn footers_mut(&mut self) -> &mut [Footer] {
        &mut self.footers
    }

    pub fn header(&self, ty: HeaderFooterType) -> Option<&Header> {
        self.headers.iter().find(|h| h.header_type() == ty)
    }

    pub fn header_mut(&mut self, ty: HeaderFooterType) -> Option<&mut Header> {
        self.headers.iter_mut().find(|h| h.header_type() == ty)
    }

    pub fn footer(&self, ty: HeaderFooterType) -> Option<&Footer> {
        self.footers.iter().find(|f| f.footer_type() == ty)
    }

    pub fn footer_mut(&mut self, ty: HeaderFooterType) -> Option<&mut Footer> {
        self.footers.iter_mut().find(|f| f.footer_type() == ty)
    }

    /// Whether any header or footer currently applies to the first page only.
    pub fn has_different_first_page(&self) -> bool {
        self.headers.iter().any(Header::is_first) || self.footers.iter().any(Footer::is_first)
    }
}

impl Container for Section {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::element::{DocumentElement, ElementKind, ElementTarget};
    use crate::style::{FontStyle, Orientation, ParagraphStyle, StyleAttributes, StyleValue};
    use crate::Error;

    fn section() -> Section {
        Section::new(0, (), IdAllocator::isolated())
    }

    #[test]
    fn test_default_style() {
        let section = section();
        assert_eq!(section.index(), 0);
        assert_eq!(section.style(), &SectionStyle::default());
        assert_eq!(section.style().orientation(), Orientation::Portrait);
        assert!(!section.document().is_attached());
    }

    #[test]
    fn test_style_from_attributes() {
        let attrs = StyleAttributes::new().with("orientation", "landscape");
        let section = Section::new(0, attrs, IdAllocator::isolated());
        assert_eq!(section.style().orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_style_instance_is_adopted() {
        let mut style = Box::new(SectionStyle::new());
        style.set_orientation(Orientation::Landscape);
        let address: *const SectionStyle = &*style;

        let section = Section::new(0, style, IdAllocator::isolated());
        assert!(std::ptr::eq(section.style(), address));
        assert_eq!(section.style().orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_set_style_ignores_unknown_keys() {
        let mut section = section();
        section.set_style(
            StyleAttributes::new()
                .with("orientation", "landscape")
                .with("foo", StyleValue::Null),
        );
        assert_eq!(section.style().orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_add_elements() {
        let mut doc = Document::with_allocator(IdAllocator::isolated());
        let section = doc.add_section(());
        section.add_text("text").unwrap();
        section.add_link("https://example.com", "link").unwrap();
        section.add_text_break(1).unwrap();
        section.add_page_break().unwrap();
        section.add_table().unwrap();
        section.add_list_item("item", 0).unwrap();
        section.add_object("sheet.xls").unwrap();
        section.add_image("figure.png").unwrap();
        section.add_title("Title", 1).unwrap();
        section.add_text_run().unwrap();
        section.add_footnote().unwrap();
        section.add_check_box("agree", "I agree").unwrap();
        section.add_toc().unwrap();

        let kinds: Vec<_> = section.elements().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            [
                ElementKind::Text,
                ElementKind::Link,
                ElementKind::TextBreak,
                ElementKind::PageBreak,
                ElementKind::Table,
                ElementKind::ListItem,
                ElementKind::Object,
                ElementKind::Image,
                ElementKind::Title,
                ElementKind::TextRun,
                ElementKind::Footnote,
                ElementKind::CheckBox,
                ElementKind::Toc,
            ]
        );

        let ids: Vec<_> = section.elements().iter().map(|e| e.id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_add_object_rejects_non_embeddable() {
        let mut section = section();
        let err = section.add_object("transform.xsl").unwrap_err();
        assert_eq!(err, Error::InvalidObject("transform.xsl".to_string()));
        assert_eq!(section.count_elements(), 0);
    }

    #[test]
    fn test_add_title_with_registered_style() {
        let mut doc = Document::with_allocator(IdAllocator::isolated());
        doc.add_title_style(1, FontStyle::default(), ParagraphStyle::default());
        let section = doc.add_section(());
        let title = section.add_title("Chapter", 1).unwrap();
        assert_eq!(title.style_name(), Some("Heading1"));
        assert_eq!(title.bookmark_id(), Some(1));

        let untitled = section.add_title("Section", 2).unwrap();
        assert_eq!(untitled.style_name(), None);
    }

    #[test]
    fn test_headers_and_first_page() {
        let mut section = section();
        assert!(!section.has_different_first_page());

        section.add_header(HeaderFooterType::Default);
        assert!(!section.has_different_first_page());

        section.add_footer(HeaderFooterType::First);
        assert!(section.has_different_first_page());
        assert_eq!(section.headers().len(), 1);
        assert_eq!(section.footers().len(), 1);
    }

    #[test]
    fn test_header_type_change_is_seen_live() {
        let mut section = section();
        section.add_header(HeaderFooterType::Default);
        assert!(!section.has_different_first_page());

        section
            .header_mut(HeaderFooterType::Default)
            .unwrap()
            .set_type(HeaderFooterType::First);
        assert!(section.has_different_first_page());
        assert!(section.header(HeaderFooterType::Default).is_none());
    }

    #[test]
    fn test_invalid_header_tag() {
        let mut section = section();
        let err = section.add_header_tag("ODD").unwrap_err();
        assert_eq!(err.to_string(), "Invalid header/footer type.");
        assert!(section.add_footer_tag("Default").is_err());
        assert!(section.headers().is_empty());
        assert!(section.footers().is_empty());

        section.add_header_tag("even").unwrap();
        assert_eq!(section.headers()[0].header_type(), HeaderFooterType::Even);
    }

    #[test]
    fn test_add_header_replaces_same_type() {
        let mut section = section();
        let first = section.add_header(HeaderFooterType::Default).id();
        section.add_header(HeaderFooterType::Even);
        let second = section.add_header(HeaderFooterType::Default).id();

        assert_eq!(section.headers().len(), 2);
        assert_ne!(first, second);
        assert_eq!(section.header(HeaderFooterType::Default).unwrap().id(), second);
    }

    #[test]
    fn test_header_content_is_separate_from_body() {
        let mut section = section();
        section
            .add_header(HeaderFooterType::Default)
            .add_text("Running head")
            .unwrap();
        section.add_text("Body").unwrap();
        assert_eq!(section.count_elements(), 1);
        assert_eq!(section.headers()[0].count_elements(), 1);
    }

    #[test]
    fn test_remove_element_by_index() {
        let mut section = section();
        let first = section.add_text("firstText").unwrap().id();
        section.add_text("secondText").unwrap();

        let removed = section.remove_element(1).unwrap();
        assert_eq!(removed.as_text().unwrap().text(), "secondText");
        assert_eq!(section.count_elements(), 1);
        assert_eq!(section.element(0).unwrap().id(), first);
    }

    #[test]
    fn test_remove_element_by_reference() {
        let mut section = section();
        section.add_text("firstText").unwrap();
        let second = section.add_text("secondText").unwrap().id();

        let target = ElementTarget::from(section.element(0).unwrap());
        section.remove_element(target).unwrap();
        assert_eq!(section.count_elements(), 1);
        assert_eq!(section.element(1).unwrap().id(), second);
        assert!(matches!(section.element(0), Err(Error::IndexOutOfRange { index: 0, .. })));

        // Removing it again does nothing.
        assert!(section.remove_element(target).is_none());
        assert!(section.remove_element(0).is_none());
        assert!(section.remove_element(5).is_none());
        assert_eq!(section.count_elements(), 1);
    }

    #[test]
    fn test_indices_stay_stable_after_removal() {
        let mut section = section();
        section.add_text("a").unwrap();
        section.add_text("b").unwrap();
        section.remove_element(0).unwrap();
        let c = section.add_text("c").unwrap().id();

        assert_eq!(section.element(2).unwrap().id(), c);
        let keys: Vec<_> = section.body().entries().map(|(key, _)| key).collect();
        assert_eq!(keys, [1, 2]);
        assert_eq!(section.elements().len(), 2);
    }

    #[test]
    fn test_removal_clears_document_registry() {
        let mut doc = Document::with_allocator(IdAllocator::isolated());
        let section = doc.add_section(());
        let title = section.add_title("Gone", 1).unwrap().id();
        section.add_title("Kept", 1).unwrap();
        let image = section.add_image("figure.png").unwrap().id();
        let run = section.add_text_run().unwrap();
        run.add_link("https://example.com", "site").unwrap();
        run.add_footnote().unwrap();
        let run = run.id();

        section.remove_element(title).unwrap();
        let toc = section.add_toc().unwrap();
        let entries: Vec<_> = toc.entries().into_iter().map(|t| t.text).collect();
        assert_eq!(entries, ["Kept"]);

        section.remove_element(image).unwrap();
        assert_eq!(doc.relations().len(), 1);

        // Nested content goes with its parent.
        doc.section_mut(0).unwrap().remove_element(run).unwrap();
        assert!(doc.relations().is_empty());
        assert_eq!(doc.footnote_count(), 0);
    }

    #[test]
    fn test_ids_unique_across_sections_and_documents() {
        let mut left = Section::new(0, (), IdAllocator::global());
        let mut right = Section::new(1, (), IdAllocator::default());
        let a = left.add_text("left").unwrap().id();
        let b = right.add_text("right").unwrap().id();
        assert!(b > a);

        let mut first = Document::new();
        let mut second = Document::new();
        let c = first.add_section(()).add_text("one").unwrap().id();
        let d = second.add_section(()).add_text("two").unwrap().id();
        assert!(d > c && c > b);
    }

    #[test]
    fn test_document_handle_reaches_headers() {
        let mut doc = Document::with_allocator(IdAllocator::isolated());
        let section = doc.add_section(());
        let header = section.add_header(HeaderFooterType::Default);
        let image = header.add_watermark("logo.png").unwrap();
        assert!(image.relation_id().is_some());
        assert_eq!(doc.relations().len(), 1);

        // A replaced header takes its registrations with it.
        doc.section_mut(0).unwrap().add_header(HeaderFooterType::Default);
        assert!(doc.relations().is_empty());
    }
}
