//! Ordered element storage shared by every container kind.
use super::{
    CheckBox, ContainerKind, DocumentElement, Element, ElementContext, ElementDraft,
    ElementTarget, Image, ImageSource, Link, ListItem, Note, OleObject, PageBreak, PreserveText,
    Table, Text, TextBreak, TextRun, Title, Toc,
};
use crate::common::id::ElementId;
use crate::document::DocumentRef;
use crate::{Error, Result};
use std::path::PathBuf;

/// Ordered sequence of elements plus the rules for what may be added to it.
///
/// Every element is filed under the key it was appended at (0, 1, 2, ...).
/// Keys are never reused or shifted: after removing key 0, the element
/// appended second is still found at key 1.
#[derive(Debug)]
pub struct ContainerBody {
    kind: ContainerKind,
    elements: Vec<Element>,
    /// Key of each entry of `elements`, ascending
    keys: Vec<usize>,
    next_key: usize,
    ctx: ElementContext,
}

impl ContainerBody {
    pub(crate) fn new(kind: ContainerKind, ctx: ElementContext) -> Self {
        Self {
            kind,
            elements: Vec::new(),
            keys: Vec::new(),
            next_key: 0,
            ctx,
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Live elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Live elements with their keys, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.keys.iter().copied().zip(self.elements.iter())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn context(&self) -> &ElementContext {
        &self.ctx
    }

    pub(crate) fn document(&self) -> &DocumentRef {
        &self.ctx.document
    }

    pub(crate) fn set_document(&mut self, document: DocumentRef) {
        self.ctx.document = document;
    }

    /// Validate, build and append an element.
    pub(crate) fn append(&mut self, draft: ElementDraft) -> Result<&mut Element> {
        let kind = draft.kind();
        if !self.kind.accepts(kind) {
            return Err(Error::UnsupportedElement {
                element: kind,
                container: self.kind,
            });
        }

        let element = draft.build(&self.ctx)?;
        log::debug!(
            "added {} {} to {} at {}",
            kind,
            element.id(),
            self.kind,
            self.next_key
        );

        self.keys.push(self.next_key);
        self.next_key += 1;
        self.elements.push(element);
        let last = self.elements.len() - 1;
        Ok(&mut self.elements[last])
    }

    fn slot(&self, key: usize) -> Result<usize> {
        self.keys
            .binary_search(&key)
            .map_err(|_| Error::IndexOutOfRange {
                index: key,
                len: self.elements.len(),
            })
    }

    pub(crate) fn get(&self, key: usize) -> Result<&Element> {
        let slot = self.slot(key)?;
        Ok(&self.elements[slot])
    }

    pub(crate) fn get_mut(&mut self, key: usize) -> Result<&mut Element> {
        let slot = self.slot(key)?;
        Ok(&mut self.elements[slot])
    }

    /// Key of the element with this identity.
    pub fn key_of(&self, id: ElementId) -> Option<usize> {
        self.entries().find(|(_, e)| e.id() == id).map(|(key, _)| key)
    }

    /// Ids of every element in this container, nested content included.
    pub(crate) fn collect_ids(&self, out: &mut Vec<ElementId>) {
        for element in &self.elements {
            element.collect_ids(out);
        }
    }

    /// Remove by key or identity. A missing target is a no-op.
    ///
    /// Whatever the removed element registered with the document (relations,
    /// note numbers, titles, also for its nested content) is dropped too.
    pub(crate) fn take(&mut self, target: ElementTarget) -> Option<Element> {
        let slot = match target {
            ElementTarget::Index(key) => self.slot(key).ok(),
            ElementTarget::Id(id) => self.elements.iter().position(|e| e.id() == id),
        };

        let Some(slot) = slot else {
            log::debug!("remove {:?} from {}: no such element", target, self.kind);
            return None;
        };

        let key = self.keys.remove(slot);
        let removed = self.elements.remove(slot);
        log::debug!(
            "removed {} {} from {} at {}",
            removed.kind(),
            removed.id(),
            self.kind,
            key
        );

        let mut ids = Vec::new();
        removed.collect_ids(&mut ids);
        self.ctx.document.forget(&ids);
        Some(removed)
    }
}

macro_rules! add_as {
    ($container:expr, $draft:expr, $variant:ident) => {
        match $container.body_mut().append($draft)? {
            Element::$variant(e) => Ok(e),
            _ => unreachable!(),
        }
    };
}

/// Operations common to every element container.
///
/// Implementors only expose their [`ContainerBody`]; all add, lookup and
/// removal behaviour lives here.
pub trait Container {
    fn body(&self) -> &ContainerBody;

    fn body_mut(&mut self) -> &mut ContainerBody;

    fn container_kind(&self) -> ContainerKind {
        self.body().kind()
    }

    /// Add an element built from `draft`.
    ///
    /// Fails with [`Error::UnsupportedElement`] if this container does not
    /// accept the draft's kind, or with the kind's own validation error. On
    /// failure nothing is appended and no id is consumed.
    fn add_element(&mut self, draft: ElementDraft) -> Result<&mut Element> {
        self.body_mut().append(draft)
    }

    fn elements(&self) -> &[Element] {
        self.body().elements()
    }

    /// Element appended at `index` (the n-th add, counting from 0).
    ///
    /// Fails with [`Error::IndexOutOfRange`] if nothing was appended there or
    /// the element has been removed. Removal never shifts other indices.
    fn element(&self, index: usize) -> Result<&Element> {
        self.body().get(index)
    }

    fn element_mut(&mut self, index: usize) -> Result<&mut Element> {
        self.body_mut().get_mut(index)
    }

    fn count_elements(&self) -> usize {
        self.body().len()
    }

    /// Remove an element by index, element id, or element reference
    /// (compared by id, never by content).
    ///
    /// Removing something that is not there does nothing and returns `None`.
    fn remove_element(&mut self, target: impl Into<ElementTarget>) -> Option<Element>
    where
        Self: Sized,
    {
        self.body_mut().take(target.into())
    }

    fn add_text(&mut self, text: impl Into<String>) -> Result<&mut Text>
    where
        Self: Sized,
    {
        add_as!(self, ElementDraft::text(text), Text)
    }

    fn add_link(&mut self, target: impl Into<String>, text: impl Into<String>) -> Result<&mut Link>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Link {
            target: target.into(),
            text: text.into(),
            internal: false,
            font: Default::default(),
            paragraph: Default::default(),
        };
        add_as!(self, draft, Link)
    }

    /// Link to a bookmark inside the document. No relationship is registered.
    fn add_internal_link(
        &mut self,
        bookmark: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut Link>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Link {
            target: bookmark.into(),
            text: text.into(),
            internal: true,
            font: Default::default(),
            paragraph: Default::default(),
        };
        add_as!(self, draft, Link)
    }

    /// Text with field placeholders such as `{PAGE}` kept for the writer.
    fn add_preserve_text(&mut self, text: impl Into<String>) -> Result<&mut PreserveText>
    where
        Self: Sized,
    {
        let draft = ElementDraft::PreserveText {
            text: text.into(),
            font: Default::default(),
            paragraph: Default::default(),
        };
        add_as!(self, draft, PreserveText)
    }

    fn add_text_break(&mut self, count: usize) -> Result<&mut TextBreak>
    where
        Self: Sized,
    {
        let draft = ElementDraft::TextBreak {
            count,
            font: Default::default(),
            paragraph: Default::default(),
        };
        add_as!(self, draft, TextBreak)
    }

    fn add_page_break(&mut self) -> Result<&mut PageBreak>
    where
        Self: Sized,
    {
        add_as!(self, ElementDraft::PageBreak, PageBreak)
    }

    fn add_table(&mut self) -> Result<&mut Table>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Table {
            style: Default::default(),
        };
        add_as!(self, draft, Table)
    }

    fn add_list_item(&mut self, text: impl Into<String>, depth: u8) -> Result<&mut ListItem>
    where
        Self: Sized,
    {
        let draft = ElementDraft::ListItem {
            text: text.into(),
            depth,
            font: Default::default(),
            list: Default::default(),
            paragraph: Default::default(),
        };
        add_as!(self, draft, ListItem)
    }

    /// Embed an OLE object. The source must have an embeddable extension,
    /// otherwise [`Error::InvalidObject`] is returned.
    fn add_object(&mut self, source: impl Into<PathBuf>) -> Result<&mut OleObject>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Object {
            source: source.into(),
            style: Default::default(),
        };
        add_as!(self, draft, Object)
    }

    fn add_image(&mut self, source: impl Into<ImageSource>) -> Result<&mut Image>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Image {
            source: source.into(),
            style: Default::default(),
            watermark: false,
        };
        add_as!(self, draft, Image)
    }

    fn add_title(&mut self, text: impl Into<String>, depth: u8) -> Result<&mut Title>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Title {
            text: text.into(),
            depth,
        };
        add_as!(self, draft, Title)
    }

    fn add_text_run(&mut self) -> Result<&mut TextRun>
    where
        Self: Sized,
    {
        let draft = ElementDraft::TextRun {
            paragraph: Default::default(),
        };
        add_as!(self, draft, TextRun)
    }

    fn add_footnote(&mut self) -> Result<&mut Note>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Footnote {
            paragraph: Default::default(),
        };
        add_as!(self, draft, Footnote)
    }

    fn add_endnote(&mut self) -> Result<&mut Note>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Endnote {
            paragraph: Default::default(),
        };
        add_as!(self, draft, Endnote)
    }

    fn add_check_box(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut CheckBox>
    where
        Self: Sized,
    {
        let draft = ElementDraft::CheckBox {
            name: name.into(),
            text: text.into(),
            font: Default::default(),
            paragraph: Default::default(),
        };
        add_as!(self, draft, CheckBox)
    }

    /// Table of contents covering title depths 1 through 9.
    fn add_toc(&mut self) -> Result<&mut Toc>
    where
        Self: Sized,
    {
        let draft = ElementDraft::Toc {
            font: Default::default(),
            style: Default::default(),
            min_depth: 1,
            max_depth: 9,
        };
        add_as!(self, draft, Toc)
    }
}

impl Container for ContainerBody {
    fn body(&self) -> &ContainerBody {
        self
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        self
    }
}
