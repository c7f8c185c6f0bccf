//! Footnotes and endnotes.
use super::{Container, ContainerBody, ContainerKind, ElementContext, ElementMeta};
use crate::document::NoteKind;
use crate::style::{ParagraphStyle, StyleSpec};

/// Footnote or endnote entry.
///
/// A note is itself a container for its content. Notes added under a document
/// get a reference id, stored as the element's relation id, that stays fixed.
/// The displayed number follows the live notes of the same kind and closes up
/// when an earlier note is removed.
#[derive(Debug)]
pub struct Note {
    pub(crate) meta: ElementMeta,
    body: ContainerBody,
    paragraph: Box<ParagraphStyle>,
}

pub type Footnote = Note;
pub type Endnote = Note;

impl Note {
    pub(crate) fn new(
        mut meta: ElementMeta,
        ctx: ElementContext,
        kind: NoteKind,
        paragraph: StyleSpec<ParagraphStyle>,
    ) -> Self {
        let number = meta.document.register_note(kind, meta.id);
        meta.set_relation_id(number);
        let container = match kind {
            NoteKind::Footnote => ContainerKind::Footnote,
            NoteKind::Endnote => ContainerKind::Endnote,
        };
        Self {
            meta,
            body: ContainerBody::new(container, ctx),
            paragraph: paragraph.resolve(),
        }
    }

    pub fn is_endnote(&self) -> bool {
        self.body.kind() == ContainerKind::Endnote
    }

    pub fn note_kind(&self) -> NoteKind {
        if self.is_endnote() {
            NoteKind::Endnote
        } else {
            NoteKind::Footnote
        }
    }

    /// Displayed note number, 1 for the first live note of this kind.
    pub fn number(&self) -> Option<u32> {
        self.meta.document.note_number(self.note_kind(), self.meta.id)
    }

    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.paragraph
    }
}

impl Container for Note {
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
    use crate::element::{DocumentElement, ElementKind};

    #[test]
    fn test_notes_are_numbered_per_collection() {
        let mut doc = Document::new();
        let section = doc.add_section(());
        let first = section.add_footnote().unwrap().relation_id();
        let second = section.add_footnote().unwrap().relation_id();
        let endnote = section.add_endnote().unwrap();
        assert_eq!(endnote.kind(), ElementKind::Endnote);
        assert_eq!((first, second, endnote.relation_id()), (Some(1), Some(2), Some(1)));
        assert_eq!(doc.footnote_count(), 2);
        assert_eq!(doc.endnote_count(), 1);
    }

    #[test]
    fn test_removing_a_note_renumbers_the_rest() {
        let mut doc = Document::new();
        let section = doc.add_section(());
        let first = section.add_footnote().unwrap().id();
        section.add_footnote().unwrap();
        section.remove_element(first).unwrap();

        let remaining = section.element(1).unwrap().as_note().unwrap();
        assert_eq!(remaining.relation_id(), Some(2));
        assert_eq!(remaining.number(), Some(1));
        assert_eq!(doc.footnote_count(), 1);

        let third = doc.section_mut(0).unwrap().add_footnote().unwrap();
        assert_eq!(third.relation_id(), Some(3));
        assert_eq!(third.number(), Some(2));
    }

    #[test]
    fn test_note_rejects_block_content() {
        let mut doc = Document::new();
        let note = doc.add_section(()).add_footnote().unwrap();
        assert_eq!(note.note_kind(), NoteKind::Footnote);
        note.add_text("text").unwrap();
        note.add_image("figure.png").unwrap();
        assert!(note.add_toc().is_err());
        assert!(note.add_title("Nope", 1).is_err());
        assert!(note.add_page_break().is_err());
        assert_eq!(note.count_elements(), 2);
    }
}
