//! Docweave - an in-memory object model for building word-processing documents
//!
//! A [`Document`] owns an ordered list of [`Section`]s. Each section is a
//! [`Container`] of body elements and owns its own headers and footers, which
//! are containers too. Writers for concrete file formats walk the finished
//! tree read-only.
//!
//! # Features
//!
//! - **Legality checks**: every container kind accepts a fixed set of element
//!   kinds; anything else is rejected before the tree changes
//! - **Stable identity**: every element, row and cell gets a process-unique,
//!   strictly increasing [`ElementId`]
//! - **Style resolution**: styles can be given as a ready object, an attribute
//!   map or a preset name; unknown attributes are skipped
//! - **Document registry**: relationships, note numbers and title bookmarks are
//!   numbered per document
//! - **YAML settings** (`yaml` feature): document defaults loaded from config
//!
//! # Example
//!
//! ```
//! use docweave::{Container, Document, HeaderFooterType, StyleAttributes};
//!
//! # fn main() -> docweave::Result<()> {
//! let mut doc = Document::new();
//! let section = doc.add_section(StyleAttributes::new().with("orientation", "landscape"));
//!
//! section.add_title("Introduction", 1)?;
//! let run = section.add_text_run()?;
//! run.add_text("Hello, ")?;
//! run.add_link("https://example.com", "world")?;
//!
//! section.add_footer(HeaderFooterType::First).add_preserve_text("Page {PAGE}")?;
//! assert!(section.has_different_first_page());
//! assert_eq!(section.count_elements(), 2);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod document;
pub mod element;
pub mod style;

pub use common::{ElementId, Error, IdAllocator, Result};
pub use document::{
    Document, DocumentRef, DocumentSettings, NoteKind, Relation, RelationKind, TitleEntry,
    TitleStyle,
};
pub use element::{
    Cell, CheckBox, Container, ContainerBody, ContainerKind, DocumentElement, Element,
    ElementDraft, ElementKind, ElementTarget, Endnote, Footer, Footnote, Header,
    HeaderFooterType, Image, ImageFormat, ImageSource, Link, ListItem, Note, OleObject,
    PageBreak, PreserveText, Row, Section, Table, Text, TextBreak, TextRun, Title, Toc,
};
pub use style::{
    FontStyle, Orientation, PaperSize, ParagraphStyle, SectionStyle, Style, StyleAttributes,
    StyleSpec, StyleValue, resolve,
};
