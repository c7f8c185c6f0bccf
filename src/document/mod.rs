//! The owning document.
//!
//! A [`Document`] owns its sections. Elements never own the document: they
//! hold a [`DocumentRef`], a weak handle used to look up registered title
//! styles and to obtain relationship and note numbers. A section built on its
//! own has a detached handle, and those lookups return `None`.

pub mod relations;
pub mod settings;

pub use relations::{NoteKind, Relation, RelationKind, RelationRegistry, TitleEntry};
pub use settings::{DocumentSettings, TitleStyleSettings};

use crate::common::id::{ElementId, IdAllocator};
use crate::element::Section;
use crate::style::{FontStyle, ParagraphStyle, SectionStyle, StyleSpec};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

/// Style registered for one title depth.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TitleStyle {
    pub font: FontStyle,
    pub paragraph: ParagraphStyle,
}

impl TitleStyle {
    /// Style name a title of this depth refers to.
    pub fn style_name(depth: u8) -> String {
        if depth == 0 {
            "Title".to_string()
        } else {
            format!("Heading{}", depth)
        }
    }
}

/// Document-wide state shared with elements through [`DocumentRef`].
#[derive(Debug, Default)]
pub struct DocumentState {
    title_styles: RwLock<BTreeMap<u8, TitleStyle>>,
    registry: Mutex<RelationRegistry>,
}

/// Non-owning handle to a document's shared state.
#[derive(Debug, Clone, Default)]
pub struct DocumentRef(Weak<DocumentState>);

impl DocumentRef {
    /// A handle that is not attached to any document.
    pub fn detached() -> Self {
        Self(Weak::new())
    }

    /// Whether the document is still alive.
    pub fn is_attached(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Title style registered for `depth`, if any.
    pub fn title_style(&self, depth: u8) -> Option<TitleStyle> {
        let state = self.0.upgrade()?;
        let styles = state.title_styles.read();
        styles.get(&depth).cloned()
    }

    pub(crate) fn register_relation(
        &self,
        kind: RelationKind,
        target: &str,
        element: ElementId,
    ) -> Option<u32> {
        let state = self.0.upgrade()?;
        let id = state.registry.lock().add_relation(kind, target, element);
        Some(id)
    }

    pub(crate) fn register_note(&self, kind: NoteKind, element: ElementId) -> Option<u32> {
        let state = self.0.upgrade()?;
        let number = state.registry.lock().add_note(kind, element);
        Some(number)
    }

    pub(crate) fn register_title(&self, depth: u8, text: &str, element: ElementId) -> Option<u32> {
        let state = self.0.upgrade()?;
        let bookmark = state.registry.lock().add_title(depth, text, element);
        Some(bookmark)
    }

    /// Live number of a registered note.
    pub fn note_number(&self, kind: NoteKind, element: ElementId) -> Option<u32> {
        let state = self.0.upgrade()?;
        state.registry.lock().note_number(kind, element)
    }

    /// Drop registry entries of elements that left the tree.
    pub(crate) fn forget(&self, elements: &[ElementId]) {
        if let Some(state) = self.0.upgrade() {
            state.registry.lock().remove_elements(elements);
        }
    }

    /// Titles recorded so far, in document order.
    pub fn titles(&self) -> Vec<TitleEntry> {
        self.0
            .upgrade()
            .map(|state| state.registry.lock().titles().to_vec())
            .unwrap_or_default()
    }

    /// Whether two handles refer to the same document.
    pub fn same_document(&self, other: &DocumentRef) -> bool {
        Weak::ptr_eq(&self.0, &other.0) && self.is_attached()
    }
}

/// A word-processing document under construction.
///
/// # Examples
///
/// ```rust
/// use docweave::{Container, Document, HeaderFooterType, StyleAttributes};
///
/// let mut doc = Document::new();
/// let section = doc.add_section(StyleAttributes::new().with("orientation", "landscape"));
/// section.add_text("Hello").unwrap();
/// section.add_header(HeaderFooterType::First).add_text("Cover").unwrap();
/// assert!(section.has_different_first_page());
/// assert_eq!(doc.count_sections(), 1);
/// ```
#[derive(Debug)]
pub struct Document {
    state: Arc<DocumentState>,
    ids: IdAllocator,
    sections: Vec<Section>,
    settings: DocumentSettings,
}

impl Document {
    /// Create an empty document drawing ids from the process-wide counter.
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::global())
    }

    /// Create an empty document with an explicit identity allocator.
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            state: Arc::new(DocumentState::default()),
            ids,
            sections: Vec::new(),
            settings: DocumentSettings::default(),
        }
    }

    /// Create a document and apply settings: title styles are registered and
    /// the section attributes become the default for new sections.
    pub fn with_settings(settings: DocumentSettings) -> Self {
        let mut doc = Self::new();
        for (depth, title) in &settings.title_styles {
            doc.add_title_style(*depth, title.font.clone(), title.paragraph.clone());
        }
        doc.settings = settings;
        doc
    }

    /// Handle to this document's shared state.
    pub fn handle(&self) -> DocumentRef {
        DocumentRef(Arc::downgrade(&self.state))
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Default font name from the settings.
    pub fn default_font_name(&self) -> Option<&str> {
        self.settings.default_font_name.as_deref()
    }

    /// Default font size in points from the settings.
    pub fn default_font_size(&self) -> Option<f64> {
        self.settings.default_font_size
    }

    /// Append a new section.
    ///
    /// Without an explicit style, the settings' section attributes apply.
    pub fn add_section(&mut self, style: impl Into<StyleSpec<SectionStyle>>) -> &mut Section {
        let style = match style.into() {
            StyleSpec::Default if !self.settings.section.is_empty() => {
                StyleSpec::Attributes(self.settings.section.clone())
            },
            spec => spec,
        };
        let index = self.sections.len();
        let mut section = Section::new(index, style, self.ids.clone());
        section.set_document(self.handle());
        self.sections.push(section);
        log::debug!("added section {}", index);
        &mut self.sections[index]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub fn count_sections(&self) -> usize {
        self.sections.len()
    }

    /// Register the style used by titles of `depth` (0 is the document title).
    pub fn add_title_style(
        &mut self,
        depth: u8,
        font: impl Into<StyleSpec<FontStyle>>,
        paragraph: impl Into<StyleSpec<ParagraphStyle>>,
    ) {
        let style = TitleStyle {
            font: *font.into().resolve(),
            paragraph: *paragraph.into().resolve(),
        };
        self.state.title_styles.write().insert(depth, style);
    }

    pub fn title_style(&self, depth: u8) -> Option<TitleStyle> {
        self.state.title_styles.read().get(&depth).cloned()
    }

    /// All registered relationships, in registration order.
    pub fn relations(&self) -> Vec<Relation> {
        self.state.registry.lock().relations().to_vec()
    }

    /// All titles, in the order they were added.
    pub fn titles(&self) -> Vec<TitleEntry> {
        self.state.registry.lock().titles().to_vec()
    }

    pub fn footnote_count(&self) -> usize {
        self.state.registry.lock().footnote_count()
    }

    pub fn endnote_count(&self) -> usize {
        self.state.registry.lock().endnote_count()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
