//! Embedded OLE objects.
use super::ElementMeta;
use crate::document::RelationKind;
use crate::style::{ImageStyle, StyleSpec};
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Kinds of document that can be embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Doc,
    Docx,
    Xls,
    Xlsx,
    Ppt,
    Pptx,
}

static EMBEDDABLE: phf::Map<&'static str, ObjectType> = phf::phf_map! {
    "doc" => ObjectType::Doc,
    "docx" => ObjectType::Docx,
    "xls" => ObjectType::Xls,
    "xlsx" => ObjectType::Xlsx,
    "ppt" => ObjectType::Ppt,
    "pptx" => ObjectType::Pptx,
};

impl ObjectType {
    /// Object type for a source path, keyed on its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        EMBEDDABLE.get(ext.as_str()).copied()
    }

    /// OLE program id of the embedding application.
    pub fn prog_id(&self) -> &'static str {
        match self {
            Self::Doc => "Word.Document.8",
            Self::Docx => "Word.Document.12",
            Self::Xls => "Excel.Sheet.8",
            Self::Xlsx => "Excel.Sheet.12",
            Self::Ppt => "PowerPoint.Show.8",
            Self::Pptx => "PowerPoint.Show.12",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Ppt => "ppt",
            Self::Pptx => "pptx",
        }
    }
}

/// Whether a source can be embedded as an OLE object.
///
/// Pure check on the file extension; the file is not opened.
pub fn is_embeddable(path: impl AsRef<Path>) -> bool {
    ObjectType::from_path(path.as_ref()).is_some()
}

/// An embedded document shown as an icon.
#[derive(Debug)]
pub struct OleObject {
    pub(crate) meta: ElementMeta,
    source: PathBuf,
    object_type: ObjectType,
    style: Box<ImageStyle>,
}

impl OleObject {
    pub(crate) fn validate(source: &Path) -> Result<ObjectType> {
        ObjectType::from_path(source)
            .ok_or_else(|| Error::InvalidObject(source.to_string_lossy().into_owned()))
    }

    pub(crate) fn new(
        mut meta: ElementMeta,
        source: PathBuf,
        object_type: ObjectType,
        style: StyleSpec<ImageStyle>,
    ) -> Self {
        let relation = meta.document.register_relation(
            RelationKind::Object,
            &source.to_string_lossy(),
            meta.id,
        );
        meta.set_relation_id(relation);
        Self {
            meta,
            source,
            object_type,
            style: style.resolve(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn style(&self) -> &ImageStyle {
        &self.style
    }

    pub fn set_style(&mut self, spec: impl Into<StyleSpec<ImageStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.style);
        self
    }
}
