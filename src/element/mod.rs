//! Document elements and the containers that hold them.
//!
//! Elements are created only through a container's add methods, which check
//! the element kind against the container's legality set, stamp a fresh
//! [`ElementId`], resolve the element's styles and append it. Every element
//! is owned by exactly one container.

pub mod container;
pub mod draft;
pub mod field;
pub mod header_footer;
pub mod image;
pub mod kind;
pub mod link;
pub mod list;
pub mod note;
pub mod object;
pub mod section;
pub mod table;
pub mod text;
pub mod text_run;
pub mod title;

pub use container::{Container, ContainerBody};
pub use draft::ElementDraft;
pub use field::CheckBox;
pub use header_footer::{Footer, Header, HeaderFooterType};
pub use image::{Image, ImageFormat, ImageSource};
pub use kind::{ContainerKind, ContainerSet, ElementKind};
pub use link::Link;
pub use list::ListItem;
pub use note::{Endnote, Footnote, Note};
pub use object::{ObjectType, OleObject, is_embeddable};
pub use section::Section;
pub use table::{Cell, Row, Table};
pub use text::{PageBreak, PreserveText, Text, TextBreak};
pub use text_run::TextRun;
pub use title::{Title, Toc};

use crate::common::id::{ElementId, IdAllocator};
use crate::document::DocumentRef;

/// Identity and relationship fields shared by every element.
#[derive(Debug, Clone)]
pub struct ElementMeta {
    id: ElementId,
    relation_id: Option<u32>,
    document: DocumentRef,
}

impl ElementMeta {
    pub(crate) fn set_relation_id(&mut self, relation_id: Option<u32>) {
        self.relation_id = relation_id;
    }
}

/// What a container hands down to the elements it creates.
#[derive(Debug, Clone)]
pub(crate) struct ElementContext {
    pub(crate) ids: IdAllocator,
    pub(crate) document: DocumentRef,
}

impl ElementContext {
    pub(crate) fn new(ids: IdAllocator, document: DocumentRef) -> Self {
        Self { ids, document }
    }

    /// Allocate identity for a new element. Must only be called once every
    /// validation of the add has passed.
    pub(crate) fn meta(&self) -> ElementMeta {
        ElementMeta {
            id: self.ids.next(),
            relation_id: None,
            document: self.document.clone(),
        }
    }
}

/// Common accessors of every element.
pub trait DocumentElement {
    fn meta(&self) -> &ElementMeta;

    fn kind(&self) -> ElementKind;

    #[inline]
    fn id(&self) -> ElementId {
        self.meta().id
    }

    /// Document relationship or note number, once one has been registered.
    #[inline]
    fn relation_id(&self) -> Option<u32> {
        self.meta().relation_id
    }

    #[inline]
    fn document(&self) -> &DocumentRef {
        &self.meta().document
    }
}

macro_rules! impl_document_element {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl DocumentElement for $ty {
                #[inline]
                fn meta(&self) -> &ElementMeta {
                    &self.meta
                }

                #[inline]
                fn kind(&self) -> ElementKind {
                    $kind
                }
            }
        )*
    };
}

impl_document_element!(
    Text => ElementKind::Text,
    PreserveText => ElementKind::PreserveText,
    TextBreak => ElementKind::TextBreak,
    PageBreak => ElementKind::PageBreak,
    Link => ElementKind::Link,
    Table => ElementKind::Table,
    ListItem => ElementKind::ListItem,
    OleObject => ElementKind::Object,
    Title => ElementKind::Title,
    TextRun => ElementKind::TextRun,
    CheckBox => ElementKind::CheckBox,
    Toc => ElementKind::Toc,
);

impl DocumentElement for Image {
    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn kind(&self) -> ElementKind {
        if self.is_watermark() {
            ElementKind::Watermark
        } else {
            ElementKind::Image
        }
    }
}

impl DocumentElement for Note {
    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn kind(&self) -> ElementKind {
        if self.is_endnote() {
            ElementKind::Endnote
        } else {
            ElementKind::Footnote
        }
    }
}

/// An element stored in a container.
#[derive(Debug)]
pub enum Element {
    Text(Text),
    Link(Link),
    PreserveText(PreserveText),
    TextBreak(TextBreak),
    PageBreak(PageBreak),
    Table(Table),
    ListItem(ListItem),
    Object(OleObject),
    Image(Image),
    Title(Title),
    TextRun(TextRun),
    Footnote(Note),
    Endnote(Note),
    CheckBox(CheckBox),
    Toc(Toc),
}

macro_rules! each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Element::Text($inner) => $body,
            Element::Link($inner) => $body,
            Element::PreserveText($inner) => $body,
            Element::TextBreak($inner) => $body,
            Element::PageBreak($inner) => $body,
            Element::Table($inner) => $body,
            Element::ListItem($inner) => $body,
            Element::Object($inner) => $body,
            Element::Image($inner) => $body,
            Element::Title($inner) => $body,
            Element::TextRun($inner) => $body,
            Element::Footnote($inner) => $body,
            Element::Endnote($inner) => $body,
            Element::CheckBox($inner) => $body,
            Element::Toc($inner) => $body,
        }
    };
}

impl DocumentElement for Element {
    fn meta(&self) -> &ElementMeta {
        each_variant!(self, e => e.meta())
    }

    fn kind(&self) -> ElementKind {
        each_variant!(self, e => e.kind())
    }
}

impl Element {
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_run(&self) -> Option<&TextRun> {
        match self {
            Self::TextRun(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_text_run_mut(&mut self) -> Option<&mut TextRun> {
        match self {
            Self::TextRun(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_note(&self) -> Option<&Note> {
        match self {
            Self::Footnote(n) | Self::Endnote(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_note_mut(&mut self) -> Option<&mut Note> {
        match self {
            Self::Footnote(n) | Self::Endnote(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Self::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_title(&self) -> Option<&Title> {
        match self {
            Self::Title(t) => Some(t),
            _ => None,
        }
    }

    /// Push the id of this element and of everything nested inside it.
    pub(crate) fn collect_ids(&self, out: &mut Vec<ElementId>) {
        out.push(self.id());
        match self {
            Self::TextRun(r) => r.body().collect_ids(out),
            Self::Footnote(n) | Self::Endnote(n) => n.body().collect_ids(out),
            Self::Table(t) => {
                for cell in t.rows().iter().flat_map(|row| row.cells()) {
                    cell.body().collect_ids(out);
                }
            },
            _ => {},
        }
    }

    /// Nested container of this element, for kinds that hold elements.
    pub fn as_container(&self) -> Option<&ContainerBody> {
        match self {
            Self::TextRun(r) => Some(r.body()),
            Self::Footnote(n) | Self::Endnote(n) => Some(n.body()),
            _ => None,
        }
    }
}

/// Target of [`Container::remove_element`]: an element index or an
/// element identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTarget {
    Index(usize),
    Id(ElementId),
}

impl From<usize> for ElementTarget {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<ElementId> for ElementTarget {
    fn from(id: ElementId) -> Self {
        Self::Id(id)
    }
}

impl<E: DocumentElement + ?Sized> From<&E> for ElementTarget {
    fn from(element: &E) -> Self {
        Self::Id(element.id())
    }
}
