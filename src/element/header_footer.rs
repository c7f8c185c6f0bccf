//! Section headers and footers.
use super::{
    Container, ContainerBody, ContainerKind, Element, ElementContext, ElementDraft, Image,
    ImageSource,
};
use crate::common::id::ElementId;
use crate::document::DocumentRef;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Which pages a header or footer applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderFooterType {
    /// Every page not covered by a more specific header or footer
    #[default]
    Default,
    /// First page of the section only
    First,
    /// Even pages
    Even,
}

impl HeaderFooterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::First => "first",
            Self::Even => "even",
        }
    }

    /// Parse a type tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "default" => Ok(Self::Default),
            "first" => Ok(Self::First),
            "even" => Ok(Self::Even),
            _ => Err(Error::InvalidHeaderType(tag.to_string())),
        }
    }
}

impl FromStr for HeaderFooterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

impl fmt::Display for HeaderFooterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section header. Accepts the same content as a footer plus watermarks.
#[derive(Debug)]
pub struct Header {
    id: ElementId,
    ty: HeaderFooterType,
    body: ContainerBody,
}

impl Header {
    pub(crate) fn new(ty: HeaderFooterType, ctx: ElementContext) -> Self {
        Self {
            id: ctx.ids.next(),
            ty,
            body: ContainerBody::new(ContainerKind::Header, ctx),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn header_type(&self) -> HeaderFooterType {
        self.ty
    }

    pub fn set_type(&mut self, ty: HeaderFooterType) -> &mut Self {
        self.ty = ty;
        self
    }

    /// Set the type from a tag, leaving the header unchanged on error.
    pub fn set_type_tag(&mut self, tag: &str) -> Result<&mut Self> {
        self.ty = HeaderFooterType::from_tag(tag)?;
        Ok(self)
    }

    pub fn is_first(&self) -> bool {
        self.ty == HeaderFooterType::First
    }

    /// Add a background image drawn behind the page content.
    pub fn add_watermark(&mut self, source: impl Into<ImageSource>) -> Result<&mut Image> {
        let draft = ElementDraft::Image {
            source: source.into(),
            style: Default::default(),
            watermark: true,
        };
        match self.body.append(draft)? {
            Element::Image(image) => Ok(image),
            _ => unreachable!(),
        }
    }

    pub(crate) fn set_document(&mut self, document: DocumentRef) {
        self.body.set_document(document);
    }
}

impl Container for Header {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }
}

#[derive(Debug)]
pub struct Footer {
    id: ElementId,
    ty: HeaderFooterType,
    body: ContainerBody,
}

impl Footer {
    pub(crate) fn new(ty: HeaderFooterType, ctx: ElementContext) -> Self {
        Self {
            id: ctx.ids.next(),
            ty,
            body: ContainerBody::new(ContainerKind::Footer, ctx),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn footer_type(&self) -> HeaderFooterType {
        self.ty
    }

    pub fn set_type(&mut self, ty: HeaderFooterType) -> &mut Self {
        self.ty = ty;
        self
    }

    pub fn set_type_tag(&mut self, tag: &str) -> Result<&mut Self> {
        self.ty = HeaderFooterType::from_tag(tag)?;
        Ok(self)
    }

    pub fn is_first(&self) -> bool {
        self.ty == HeaderFooterType::First
    }

    pub(crate) fn set_document(&mut self, document: DocumentRef) {
        self.body.set_document(document);
    }
}

impl Container for Footer {
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
    use crate::common::id::IdAllocator;
    use crate::element::{DocumentElement, ElementKind};

    fn ctx() -> ElementContext {
        ElementContext::new(IdAllocator::isolated(), DocumentRef::detached())
    }

    #[test]
    fn test_type_tags() {
        assert_eq!("first".parse::<HeaderFooterType>().unwrap(), HeaderFooterType::First);
        assert_eq!(HeaderFooterType::from_tag("even").unwrap(), HeaderFooterType::Even);
        assert_eq!(HeaderFooterType::default().to_string(), "default");

        let err = HeaderFooterType::from_tag("FIRST").unwrap_err();
        assert_eq!(err, Error::InvalidHeaderType("FIRST".to_string()));
        assert_eq!(err.to_string(), "Invalid header/footer type.");
    }

    #[test]
    fn test_watermark_only_in_header() {
        let mut header = Header::new(HeaderFooterType::Default, ctx());
        let mark = header.add_watermark("logo.png").unwrap();
        assert_eq!(mark.kind(), ElementKind::Watermark);
        assert!(mark.is_watermark());
        header.add_preserve_text("Page {PAGE}").unwrap();
        assert_eq!(header.count_elements(), 2);

        let mut footer = Footer::new(HeaderFooterType::Default, ctx());
        let draft = ElementDraft::Image {
            source: "logo.png".into(),
            style: Default::default(),
            watermark: true,
        };
        assert_eq!(
            footer.add_element(draft).unwrap_err(),
            Error::UnsupportedElement {
                element: ElementKind::Watermark,
                container: ContainerKind::Footer,
            }
        );
        assert_eq!(footer.count_elements(), 0);
    }

    #[test]
    fn test_set_type_tag_keeps_type_on_error() {
        let mut footer = Footer::new(HeaderFooterType::Even, ctx());
        assert!(footer.set_type_tag("odd").is_err());
        assert_eq!(footer.footer_type(), HeaderFooterType::Even);
        footer.set_type_tag("first").unwrap();
        assert!(footer.is_first());
    }
}
