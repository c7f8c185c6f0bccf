//! Element and container kinds, and which elements each container accepts.
use bitflags::bitflags;
use std::fmt;

/// Kinds of container that hold elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Section,
    Header,
    Footer,
    Cell,
    TextRun,
    Footnote,
    Endnote,
}

bitflags! {
    /// A set of container kinds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ContainerSet: u8 {
        const SECTION = 1 << 0;
        const HEADER = 1 << 1;
        const FOOTER = 1 << 2;
        const CELL = 1 << 3;
        const TEXT_RUN = 1 << 4;
        const FOOTNOTE = 1 << 5;
        const ENDNOTE = 1 << 6;
    }
}

impl ContainerKind {
    #[inline]
    pub const fn flag(self) -> ContainerSet {
        match self {
            Self::Section => ContainerSet::SECTION,
            Self::Header => ContainerSet::HEADER,
            Self::Footer => ContainerSet::FOOTER,
            Self::Cell => ContainerSet::CELL,
            Self::TextRun => ContainerSet::TEXT_RUN,
            Self::Footnote => ContainerSet::FOOTNOTE,
            Self::Endnote => ContainerSet::ENDNOTE,
        }
    }

    /// Whether an element of `kind` may be added to this container.
    #[inline]
    pub const fn accepts(self, kind: ElementKind) -> bool {
        kind.allowed_in().contains(self.flag())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Section => "Section",
            Self::Header => "Header",
            Self::Footer => "Footer",
            Self::Cell => "Cell",
            Self::TextRun => "TextRun",
            Self::Footnote => "Footnote",
            Self::Endnote => "Endnote",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of element that can be stored in a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Link,
    PreserveText,
    TextBreak,
    PageBreak,
    Table,
    ListItem,
    Object,
    Image,
    Watermark,
    Title,
    TextRun,
    Footnote,
    Endnote,
    CheckBox,
    Toc,
}

impl ElementKind {
    /// Containers this kind may be added to.
    pub const fn allowed_in(self) -> ContainerSet {
        const ALL: ContainerSet = ContainerSet::all();
        const BLOCK: ContainerSet = ContainerSet::SECTION
            .union(ContainerSet::HEADER)
            .union(ContainerSet::FOOTER)
            .union(ContainerSet::CELL);

        match self {
            Self::Text | Self::Link | Self::TextBreak | Self::Image | Self::Object => ALL,
            Self::PreserveText => ContainerSet::HEADER
                .union(ContainerSet::FOOTER)
                .union(ContainerSet::CELL),
            Self::TextRun | Self::Table | Self::ListItem => BLOCK,
            Self::CheckBox => BLOCK.union(ContainerSet::TEXT_RUN),
            Self::Footnote | Self::Endnote => ContainerSet::SECTION
                .union(ContainerSet::CELL)
                .union(ContainerSet::TEXT_RUN),
            Self::Title => ContainerSet::SECTION.union(ContainerSet::CELL),
            Self::Toc | Self::PageBreak => ContainerSet::SECTION,
            Self::Watermark => ContainerSet::HEADER,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Link => "Link",
            Self::PreserveText => "PreserveText",
            Self::TextBreak => "TextBreak",
            Self::PageBreak => "PageBreak",
            Self::Table => "Table",
            Self::ListItem => "ListItem",
            Self::Object => "OLEObject",
            Self::Image => "Image",
            Self::Watermark => "Watermark",
            Self::Title => "Title",
            Self::TextRun => "TextRun",
            Self::Footnote => "Footnote",
            Self::Endnote => "Endnote",
            Self::CheckBox => "CheckBox",
            Self::Toc => "TOC",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
