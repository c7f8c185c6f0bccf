//! Document-wide relationship and numbering registry.
//!
//! Elements that point outside the main story (hyperlinks, images, embedded
//! objects) get a relationship id; notes get a note number; titles get a
//! bookmark number and are recorded for tables of contents. The registry only
//! hands out numbers and remembers what they were handed out for. Resolving
//! them into package parts is left to the writer.
use crate::common::id::ElementId;

/// What a relationship points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Hyperlink,
    Image,
    Watermark,
    Object,
}

/// One registered relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub id: u32,
    pub kind: RelationKind,
    /// URL or source path
    pub target: String,
    /// Element the relationship was registered for
    pub element: ElementId,
}

impl Relation {
    /// Relationship id in package form, e.g. `rId3`.
    pub fn r_id(&self) -> String {
        format!("rId{}", self.id)
    }
}

/// A title recorded for table-of-contents generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEntry {
    pub bookmark_id: u32,
    pub depth: u8,
    pub text: String,
    pub element: ElementId,
}

/// Which note collection a number is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Footnote,
    Endnote,
}

/// Numbers handed out per collection. Every counter only moves forward, so a
/// number stays unique after the entry it was issued for has been removed.
#[derive(Debug, Default)]
struct Counters {
    relation: u32,
    bookmark: u32,
    footnote: u32,
    endnote: u32,
}

#[derive(Debug, Default)]
pub struct RelationRegistry {
    relations: Vec<Relation>,
    titles: Vec<TitleEntry>,
    footnotes: Vec<ElementId>,
    endnotes: Vec<ElementId>,
    issued: Counters,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a relationship and return its id (starting from 1).
    pub fn add_relation(&mut self, kind: RelationKind, target: &str, element: ElementId) -> u32 {
        self.issued.relation += 1;
        let id = self.issued.relation;
        self.relations.push(Relation {
            id,
            kind,
            target: target.to_string(),
            element,
        });
        log::trace!("registered {:?} relation rId{} for {}", kind, id, element);
        id
    }

    /// Register a note and return its reference id (starting from 1).
    ///
    /// The reference id never changes. The number a reader sees is the note's
    /// live position, see [`note_number`](Self::note_number).
    pub fn add_note(&mut self, kind: NoteKind, element: ElementId) -> u32 {
        let (notes, counter) = match kind {
            NoteKind::Footnote => (&mut self.footnotes, &mut self.issued.footnote),
            NoteKind::Endnote => (&mut self.endnotes, &mut self.issued.endnote),
        };
        notes.push(element);
        *counter += 1;
        log::trace!("registered {:?} {} for {}", kind, counter, element);
        *counter
    }

    /// Displayed number of a note: its position among the live notes of its
    /// kind, starting from 1.
    pub fn note_number(&self, kind: NoteKind, element: ElementId) -> Option<u32> {
        let notes = match kind {
            NoteKind::Footnote => &self.footnotes,
            NoteKind::Endnote => &self.endnotes,
        };
        notes
            .iter()
            .position(|&id| id == element)
            .map(|pos| pos as u32 + 1)
    }

    /// Record a title and return its bookmark number (starting from 1).
    pub fn add_title(&mut self, depth: u8, text: &str, element: ElementId) -> u32 {
        self.issued.bookmark += 1;
        let bookmark_id = self.issued.bookmark;
        self.titles.push(TitleEntry {
            bookmark_id,
            depth,
            text: text.to_string(),
            element,
        });
        bookmark_id
    }

    /// Drop every entry registered for these elements.
    pub fn remove_elements(&mut self, elements: &[ElementId]) {
        if elements.is_empty() {
            return;
        }
        let before = self.relations.len() + self.titles.len();
        self.relations.retain(|r| !elements.contains(&r.element));
        self.titles.retain(|t| !elements.contains(&t.element));
        self.footnotes.retain(|id| !elements.contains(id));
        self.endnotes.retain(|id| !elements.contains(id));
        log::trace!(
            "dropped {} entries for {} removed elements",
            before - self.relations.len() - self.titles.len(),
            elements.len()
        );
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Relationship registered for an element, if any.
    pub fn relation_for(&self, element: ElementId) -> Option<&Relation> {
        self.relations.iter().find(|r| r.element == element)
    }

    pub fn titles(&self) -> &[TitleEntry] {
        &self.titles
    }

    pub fn footnote_count(&self) -> usize {
        self.footnotes.len()
    }

    pub fn endnote_count(&self) -> usize {
        self.endnotes.len()
    }
}
