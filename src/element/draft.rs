//! Element drafts: the kind, payload and style specification of an element
//! that has not been added yet.
use super::{
    CheckBox, Element, ElementContext, ElementKind, Image, ImageSource, Link, ListItem, Note,
    OleObject, PageBreak, PreserveText, Table, Text, TextBreak, TextRun, Title, Toc,
};
use crate::Result;
use crate::document::NoteKind;
use crate::style::{
    FontStyle, ImageStyle, ListStyle, ParagraphStyle, StyleSpec, TableStyle, TocStyle,
};
use std::path::PathBuf;

/// Everything needed to build one element.
///
/// Pass a draft to [`Container::add_element`](super::Container::add_element);
/// the `add_*` convenience methods build drafts with default styles.
#[derive(Debug)]
pub enum ElementDraft {
    Text {
        text: String,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    },
    Link {
        target: String,
        text: String,
        /// Bookmark inside the document rather than an external URL
        internal: bool,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    },
    PreserveText {
        text: String,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    },
    TextBreak {
        count: usize,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    },
    PageBreak,
    Table {
        style: StyleSpec<TableStyle>,
    },
    ListItem {
        text: String,
        depth: u8,
        font: StyleSpec<FontStyle>,
        list: StyleSpec<ListStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    },
    Object {
        source: PathBuf,
        style: StyleSpec<ImageStyle>,
    },
    Image {
        source: ImageSource,
        style: StyleSpec<ImageStyle>,
        watermark: bool,
    },
    Title {
        text: String,
        depth: u8,
    },
    TextRun {
        paragraph: StyleSpec<ParagraphStyle>,
    },
    Footnote {
        paragraph: StyleSpec<ParagraphStyle>,
    },
    Endnote {
        paragraph: StyleSpec<ParagraphStyle>,
    },
    CheckBox {
        name: String,
        text: String,
        font: StyleSpec<FontStyle>,
        paragraph: StyleSpec<ParagraphStyle>,
    },
    Toc {
        font: StyleSpec<FontStyle>,
        style: StyleSpec<TocStyle>,
        min_depth: u8,
        max_depth: u8,
    },
}

impl ElementDraft {
    /// Plain text with default styles.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            font: StyleSpec::Default,
            paragraph: StyleSpec::Default,
        }
    }

    /// Kind of the element this draft builds.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text { .. } => ElementKind::Text,
            Self::Link { .. } => ElementKind::Link,
            Self::PreserveText { .. } => ElementKind::PreserveText,
            Self::TextBreak { .. } => ElementKind::TextBreak,
            Self::PageBreak => ElementKind::PageBreak,
            Self::Table { .. } => ElementKind::Table,
            Self::ListItem { .. } => ElementKind::ListItem,
            Self::Object { .. } => ElementKind::Object,
            Self::Image {
                watermark: true, ..
            } => ElementKind::Watermark,
            Self::Image { .. } => ElementKind::Image,
            Self::Title { .. } => ElementKind::Title,
            Self::TextRun { .. } => ElementKind::TextRun,
            Self::Footnote { .. } => ElementKind::Footnote,
            Self::Endnote { .. } => ElementKind::Endnote,
            Self::CheckBox { .. } => ElementKind::CheckBox,
            Self::Toc { .. } => ElementKind::Toc,
        }
    }

    /// Build the element.
    ///
    /// Kind-specific validation runs before identity is allocated, so a
    /// rejected draft leaves the id counter untouched.
    pub(crate) fn build(self, ctx: &ElementContext) -> Result<Element> {
        let element = match self {
            Self::Text {
                text,
                font,
                paragraph,
            } => Element::Text(Text::new(ctx.meta(), text, font, paragraph)),
            Self::Link {
                target,
                text,
                internal,
                font,
                paragraph,
            } => Element::Link(Link::new(
                ctx.meta(),
                target,
                text,
                internal,
                font,
                paragraph,
            )),
            Self::PreserveText {
                text,
                font,
                paragraph,
            } => Element::PreserveText(PreserveText::new(ctx.meta(), text, font, paragraph)),
            Self::TextBreak {
                count,
                font,
                paragraph,
            } => Element::TextBreak(TextBreak::new(ctx.meta(), count, font, paragraph)),
            Self::PageBreak => Element::PageBreak(PageBreak::new(ctx.meta())),
            Self::Table { style } => Element::Table(Table::new(ctx.meta(), ctx.clone(), style)),
            Self::ListItem {
                text,
                depth,
                font,
                list,
                paragraph,
            } => Element::ListItem(ListItem::new(
                ctx.meta(),
                text,
                depth,
                font,
                list,
                paragraph,
            )),
            Self::Object { source, style } => {
                let object_type = OleObject::validate(&source)?;
                Element::Object(OleObject::new(ctx.meta(), source, object_type, style))
            },
            Self::Image {
                source,
                style,
                watermark,
            } => {
                let format = Image::validate(&source)?;
                Element::Image(Image::new(ctx.meta(), source, format, style, watermark))
            },
            Self::Title { text, depth } => Element::Title(Title::new(ctx.meta(), text, depth)),
            Self::TextRun { paragraph } => {
                Element::TextRun(TextRun::new(ctx.meta(), ctx.clone(), paragraph))
            },
            Self::Footnote { paragraph } => Element::Footnote(Note::new(
                ctx.meta(),
                ctx.clone(),
                NoteKind::Footnote,
                paragraph,
            )),
            Self::Endnote { paragraph } => Element::Endnote(Note::new(
                ctx.meta(),
                ctx.clone(),
                NoteKind::Endnote,
                paragraph,
            )),
            Self::CheckBox {
                name,
                text,
                font,
                paragraph,
            } => Element::CheckBox(CheckBox::new(ctx.meta(), name, text, font, paragraph)),
            Self::Toc {
                font,
                style,
                min_depth,
                max_depth,
            } => Element::Toc(Toc::new(ctx.meta(), font, style, min_depth, max_depth)),
        };
        Ok(element)
    }
}
