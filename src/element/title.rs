//! Titles and tables of contents.
use super::ElementMeta;
use crate::document::{TitleEntry, TitleStyle};
use crate::style::{FontStyle, StyleSpec, TocStyle};

/// A heading.
///
/// If the owning document has a title style registered for the title's depth
/// when it is added, the title refers to that style by name. Titles added to
/// a document are also given a bookmark number so tables of contents can
/// link to them.
#[derive(Debug)]
pub struct Title {
    pub(crate) meta: ElementMeta,
    text: String,
    depth: u8,
    style_name: Option<String>,
    bookmark_id: Option<u32>,
}

impl Title {
    pub(crate) fn new(meta: ElementMeta, text: String, depth: u8) -> Self {
        let style_name = meta
            .document
            .title_style(depth)
            .map(|_| TitleStyle::style_name(depth));
        let bookmark_id = meta.document.register_title(depth, &text, meta.id);
        Self {
            meta,
            text,
            depth,
            style_name,
            bookmark_id,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Heading depth; 0 is the document title.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Registered style this title refers to, e.g. `Heading1`.
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    pub fn bookmark_id(&self) -> Option<u32> {
        self.bookmark_id
    }

    /// Bookmark name used as the TOC anchor.
    pub fn anchor(&self) -> Option<String> {
        self.bookmark_id.map(|id| format!("_Toc{}", id))
    }
}

/// Table of contents built from the document's titles.
#[derive(Debug)]
pub struct Toc {
    pub(crate) meta: ElementMeta,
    font: Box<FontStyle>,
    style: Box<TocStyle>,
    min_depth: u8,
    max_depth: u8,
}

impl Toc {
    pub(crate) fn new(
        meta: ElementMeta,
        font: StyleSpec<FontStyle>,
        style: StyleSpec<TocStyle>,
        min_depth: u8,
        max_depth: u8,
    ) -> Self {
        let mut toc = Self {
            meta,
            font: font.resolve(),
            style: style.resolve(),
            min_depth: 1,
            max_depth: 9,
        };
        toc.set_depth_range(min_depth, max_depth);
        toc
    }

    pub fn min_depth(&self) -> u8 {
        self.min_depth
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Restrict the depths listed. Depths are clamped to 1..=9 and the range is
    /// never inverted.
    pub fn set_depth_range(&mut self, min: u8, max: u8) -> &mut Self {
        self.min_depth = min.clamp(1, 9);
        self.max_depth = max.clamp(self.min_depth, 9);
        self
    }

    pub fn font_style(&self) -> &FontStyle {
        &self.font
    }

    pub fn style(&self) -> &TocStyle {
        &self.style
    }

    pub fn set_style(&mut self, spec: impl Into<StyleSpec<TocStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.style);
        self
    }

    /// Titles of the owning document within the depth range.
    pub fn entries(&self) -> Vec<TitleEntry> {
        self.meta
            .document
            .titles()
            .into_iter()
            .filter(|t| (self.min_depth..=self.max_depth).contains(&t.depth))
            .collect()
    }

    /// Field instruction a writer emits for this TOC.
    pub fn field_instruction(&self) -> String {
        format!(r#"TOC \o "{}-{}" \h \z \u"#, self.min_depth, self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use crate::document::Document;
    use crate::element::{Container, DocumentElement};
    use crate::style::StyleAttributes;

    #[test]
    fn test_title_uses_registered_style() {
        let mut doc = Document::new();
        doc.add_title_style(1, StyleAttributes::new().with("size", 14), ());
        let section = doc.add_section(());
        let styled = section.add_title("Test", 1).unwrap();
        assert_eq!(styled.style_name(), Some("Heading1"));
        assert_eq!(styled.anchor().as_deref(), Some("_Toc1"));

        let plain = section.add_title("Other", 2).unwrap();
        assert_eq!(plain.style_name(), None);
        assert_eq!(plain.bookmark_id(), Some(2));
    }

    #[test]
    fn test_detached_title() {
        let mut section = crate::element::Section::new(0, (), crate::IdAllocator::isolated());
        let title = section.add_title("Loose", 1).unwrap();
        assert!(title.style_name().is_none());
        assert!(title.bookmark_id().is_none());
        assert!(!title.document().is_attached());
    }

    #[test]
    fn test_toc_entries_follow_depth_range() {
        let mut doc = Document::new();
        let section = doc.add_section(());
        section.add_title("Front", 0).unwrap();
        section.add_title("Chapter", 1).unwrap();
        section.add_title("Detail", 3).unwrap();
        let toc = section.add_toc().unwrap();
        toc.set_depth_range(1, 2);
        let entries = toc.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Chapter");
        assert_eq!(toc.field_instruction(), r#"TOC \o "1-2" \h \z \u"#);

        toc.set_depth_range(5, 2);
        assert_eq!((toc.min_depth(), toc.max_depth()), (5, 5));
    }
}
