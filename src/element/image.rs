//! Image support.
//!
//! The image source is only inspected for its format here. Reading the bytes
//! of a local or remote source is the writer's job.
use super::ElementMeta;
use crate::document::RelationKind;
use crate::style::{ImageStyle, StyleSpec};
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    Emf,
    Wmf,
}

impl ImageFormat {
    /// Detect image format from byte signature.
    pub fn detect_from_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }
        if data.starts_with(b"BM") {
            return Some(Self::Bmp);
        }
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
            return Some(Self::Tiff);
        }
        // EMF carries its signature at offset 40
        if data.len() >= 44 && data[40..44] == [0x20, 0x45, 0x4D, 0x46] {
            return Some(Self::Emf);
        }
        // Placeable and plain WMF headers
        if data.starts_with(&[0xD7, 0xCD, 0xC6, 0x9A]) || data.starts_with(&[0x01, 0x00, 0x09, 0x00]) {
            return Some(Self::Wmf);
        }
        None
    }

    /// Format for a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" | "jpe" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "emf" => Some(Self::Emf),
            "wmf" => Some(Self::Wmf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Emf => "emf",
            Self::Wmf => "wmf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Emf => "image/x-emf",
            Self::Wmf => "image/x-wmf",
        }
    }
}

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    /// `http://` or `https://` URL
    Remote(String),
    /// Image data held in memory
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Textual form used as the relationship target.
    pub fn target(&self) -> String {
        match self {
            Self::Local(path) => path.to_string_lossy().into_owned(),
            Self::Remote(url) => url.clone(),
            Self::Bytes(_) => String::new(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl From<&str> for ImageSource {
    fn from(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Remote(s.to_string())
        } else {
            Self::Local(PathBuf::from(s))
        }
    }
}

impl From<String> for ImageSource {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Local(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes(data)
    }
}

/// An inline, floating or watermark image.
#[derive(Debug)]
pub struct Image {
    pub(crate) meta: ElementMeta,
    source: ImageSource,
    format: ImageFormat,
    style: Box<ImageStyle>,
    watermark: bool,
}

impl Image {
    /// Determine the format of a source without reading it.
    pub(crate) fn validate(source: &ImageSource) -> Result<ImageFormat> {
        let format = match source {
            ImageSource::Local(path) => path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(ImageFormat::from_extension),
            ImageSource::Remote(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                path.rsplit_once('.')
                    .and_then(|(_, ext)| ImageFormat::from_extension(ext))
            },
            ImageSource::Bytes(data) => ImageFormat::detect_from_bytes(data),
        };
        format.ok_or_else(|| match source {
            ImageSource::Bytes(_) => Error::InvalidImage("unrecognized image data".to_string()),
            other => Error::InvalidImage(other.target()),
        })
    }

    pub(crate) fn new(
        mut meta: ElementMeta,
        source: ImageSource,
        format: ImageFormat,
        style: StyleSpec<ImageStyle>,
        watermark: bool,
    ) -> Self {
        let kind = if watermark {
            RelationKind::Watermark
        } else {
            RelationKind::Image
        };
        let relation = meta.document.register_relation(kind, &source.target(), meta.id);
        meta.set_relation_id(relation);
        Self {
            meta,
            source,
            format,
            style: style.resolve(),
            watermark,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn style(&self) -> &ImageStyle {
        &self.style
    }

    pub fn set_style(&mut self, spec: impl Into<StyleSpec<ImageStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.style);
        self
    }

    pub fn is_watermark(&self) -> bool {
        self.watermark
    }

    /// Media part name a writer stores the image under, e.g. `image7.png`.
    pub fn media_name(&self) -> String {
        format!("image{}.{}", self.meta.id.get(), self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::id::IdAllocator;
    use crate::element::{Container, DocumentElement, Section};

    #[test]
    fn test_validate_sources() {
        assert_eq!(Image::validate(&"photo.JPG".into()), Ok(ImageFormat::Jpeg));
        assert_eq!(
            Image::validate(&"https://example.com/a/logo.png?v=2".into()),
            Ok(ImageFormat::Png)
        );
        assert!(Image::validate(&"https://example.com/image".into()).is_err());
        assert_eq!(
            Image::validate(&ImageSource::Bytes(b"GIF89a......".to_vec())),
            Ok(ImageFormat::Gif)
        );
        assert!(matches!(
            Image::validate(&"notes.txt".into()),
            Err(Error::InvalidImage(path)) if path == "notes.txt"
        ));
    }

    #[test]
    fn test_invalid_image_does_not_consume_id() {
        let ids = IdAllocator::isolated();
        let mut section = Section::new(0, (), ids.clone());
        let before = ids.last();
        assert!(section.add_image("diagram.svgz").is_err());
        assert_eq!(ids.last(), before);
        assert_eq!(section.count_elements(), 0);
    }

    #[test]
    fn test_image_without_document_has_no_relation() {
        let mut section = Section::new(0, (), IdAllocator::isolated());
        let image = section.add_image(PathBuf::from("assets/logo.png")).unwrap();
        image.set_style(crate::style::StyleAttributes::new().with("width", 120));
        assert_eq!(image.relation_id(), None);
        assert_eq!(image.style().width(), Some(120.0));
        assert!(image.media_name().ends_with(".png"));
    }
}
