//! Section layout style: paper, orientation, margins and columns.
//!
//! All lengths are in twips (1/1440 inch).
use super::{Style, StyleValue};

pub const DEFAULT_MARGIN: u32 = 1440;
pub const DEFAULT_GUTTER: u32 = 0;
pub const DEFAULT_HEADER_HEIGHT: u32 = 720;
pub const DEFAULT_FOOTER_HEIGHT: u32 = 720;
pub const DEFAULT_COLUMN_COUNT: u32 = 1;
pub const DEFAULT_COLUMN_SPACING: u32 = 720;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "portrait" => Some(Self::Portrait),
            "landscape" => Some(Self::Landscape),
            _ => None,
        }
    }
}

/// Named paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Folio,
}

impl PaperSize {
    /// Portrait (width, height) in twips.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::A3 => (16838, 23811),
            Self::A4 => (11906, 16838),
            Self::A5 => (8391, 11906),
            Self::Letter => (12240, 15840),
            Self::Legal => (12240, 20160),
            Self::Folio => (12240, 18720),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A3" => Some(Self::A3),
            "A4" => Some(Self::A4),
            "A5" => Some(Self::A5),
            "Letter" => Some(Self::Letter),
            "Legal" => Some(Self::Legal),
            "Folio" => Some(Self::Folio),
            _ => None,
        }
    }
}

/// How the section starts relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakType {
    Continuous,
    #[default]
    NextPage,
    EvenPage,
    OddPage,
    NextColumn,
}

impl BreakType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::NextPage => "nextPage",
            Self::EvenPage => "evenPage",
            Self::OddPage => "oddPage",
            Self::NextColumn => "nextColumn",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "continuous" => Some(Self::Continuous),
            "nextPage" => Some(Self::NextPage),
            "evenPage" => Some(Self::EvenPage),
            "oddPage" => Some(Self::OddPage),
            "nextColumn" => Some(Self::NextColumn),
            _ => None,
        }
    }
}

/// Vertical alignment of text on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Both,
    Bottom,
}

impl VerticalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Both => "both",
            Self::Bottom => "bottom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "both" => Some(Self::Both),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Layout style owned by a section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStyle {
    paper_size: PaperSize,
    /// Portrait page width in twips
    paper_width: u32,
    /// Portrait page height in twips
    paper_height: u32,
    orientation: Orientation,
    margin_top: u32,
    margin_bottom: u32,
    margin_left: u32,
    margin_right: u32,
    gutter: u32,
    header_height: u32,
    footer_height: u32,
    column_count: u32,
    column_spacing: u32,
    break_type: BreakType,
    page_numbering_start: Option<u32>,
    vertical_alignment: Option<VerticalAlignment>,
}

impl Default for SectionStyle {
    fn default() -> Self {
        let (paper_width, paper_height) = PaperSize::A4.dimensions();
        Self {
            paper_size: PaperSize::A4,
            paper_width,
            paper_height,
            orientation: Orientation::Portrait,
            margin_top: DEFAULT_MARGIN,
            margin_bottom: DEFAULT_MARGIN,
            margin_left: DEFAULT_MARGIN,
            margin_right: DEFAULT_MARGIN,
            gutter: DEFAULT_GUTTER,
            header_height: DEFAULT_HEADER_HEIGHT,
            footer_height: DEFAULT_FOOTER_HEIGHT,
            column_count: DEFAULT_COLUMN_COUNT,
            column_spacing: DEFAULT_COLUMN_SPACING,
            break_type: BreakType::NextPage,
            page_numbering_start: None,
            vertical_alignment: None,
        }
    }
}

impl SectionStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    pub fn paper_size(&self) -> PaperSize {
        self.paper_size
    }

    /// Select a paper size; resets the page dimensions to the paper's own.
    pub fn set_paper_size(&mut self, paper: PaperSize) -> &mut Self {
        self.paper_size = paper;
        (self.paper_width, self.paper_height) = paper.dimensions();
        self
    }

    /// Effective page width, taking orientation into account.
    pub fn page_width(&self) -> u32 {
        match self.orientation {
            Orientation::Portrait => self.paper_width,
            Orientation::Landscape => self.paper_height,
        }
    }

    /// Effective page height, taking orientation into account.
    pub fn page_height(&self) -> u32 {
        match self.orientation {
            Orientation::Portrait => self.paper_height,
            Orientation::Landscape => self.paper_width,
        }
    }

    pub fn margins(&self) -> (u32, u32, u32, u32) {
        (
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        )
    }

    /// Set all four margins (top, right, bottom, left).
    pub fn set_margins(&mut self, top: u32, right: u32, bottom: u32, left: u32) -> &mut Self {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self
    }

    pub fn gutter(&self) -> u32 {
        self.gutter
    }

    pub fn header_height(&self) -> u32 {
        self.header_height
    }

    pub fn footer_height(&self) -> u32 {
        self.footer_height
    }

    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    pub fn column_spacing(&self) -> u32 {
        self.column_spacing
    }

    /// Set the column layout. A count of zero is treated as one column.
    pub fn set_columns(&mut self, count: u32, spacing: u32) -> &mut Self {
        self.column_count = count.max(1);
        self.column_spacing = spacing;
        self
    }

    pub fn break_type(&self) -> BreakType {
        self.break_type
    }

    pub fn set_break_type(&mut self, break_type: BreakType) -> &mut Self {
        self.break_type = break_type;
        self
    }

    pub fn page_numbering_start(&self) -> Option<u32> {
        self.page_numbering_start
    }

    pub fn vertical_alignment(&self) -> Option<VerticalAlignment> {
        self.vertical_alignment
    }

    /// Width available to body content.
    pub fn content_width(&self) -> u32 {
        self.page_width()
            .saturating_sub(self.margin_left)
            .saturating_sub(self.margin_right)
            .saturating_sub(self.gutter)
    }
}

impl Style for SectionStyle {
    const NAME: &'static str = "section";

    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool {
        // Values that fail to parse are ignored like unknown keys.
        match key {
            "orientation" => {
                if let Some(o) = value.as_str().and_then(Orientation::parse) {
                    self.orientation = o;
                }
            },
            "paperSize" | "paper_size" => {
                if let Some(p) = value.as_str().and_then(PaperSize::parse) {
                    self.set_paper_size(p);
                }
            },
            "pageSizeW" | "page_size_w" => {
                if let Some(v) = value.as_u32() {
                    self.paper_width = v;
                }
            },
            "pageSizeH" | "page_size_h" => {
                if let Some(v) = value.as_u32() {
                    self.paper_height = v;
                }
            },
            "marginTop" | "margin_top" => set_u32(&mut self.margin_top, value),
            "marginBottom" | "margin_bottom" => set_u32(&mut self.margin_bottom, value),
            "marginLeft" | "margin_left" => set_u32(&mut self.margin_left, value),
            "marginRight" | "margin_right" => set_u32(&mut self.margin_right, value),
            "gutter" => set_u32(&mut self.gutter, value),
            "headerHeight" | "header_height" => set_u32(&mut self.header_height, value),
            "footerHeight" | "footer_height" => set_u32(&mut self.footer_height, value),
            "colsNum" | "cols_num" => {
                if let Some(v) = value.as_u32() {
                    self.column_count = v.max(1);
                }
            },
            "colsSpace" | "cols_space" => set_u32(&mut self.column_spacing, value),
            "breakType" | "break_type" => {
                if let Some(b) = value.as_str().and_then(BreakType::parse) {
                    self.break_type = b;
                }
            },
            "pageNumberingStart" | "page_numbering_start" => {
                if let Some(v) = value.as_u32() {
                    self.page_numbering_start = Some(v);
                }
            },
            "vAlign" | "v_align" => {
                if let Some(v) = value.as_str().and_then(VerticalAlignment::parse) {
                    self.vertical_alignment = Some(v);
                }
            },
            _ => return false,
        }
        true
    }

    fn apply_preset(&mut self, name: &str) -> bool {
        match PaperSize::parse(name) {
            Some(paper) => {
                self.set_paper_size(paper);
                true
            },
            None => false,
        }
    }
}

fn set_u32(field: &mut u32, value: &StyleValue) {
    if let Some(v) = value.as_u32() {
        *field = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleAttributes, StyleSpec, resolve};

    #[test]
    fn test_defaults() {
        let style = SectionStyle::default();
        assert_eq!(style.paper_size(), PaperSize::A4);
        assert_eq!(style.orientation(), Orientation::Portrait);
        assert_eq!(style.page_width(), 11906);
        assert_eq!(style.margins(), (1440, 1440, 1440, 1440));
        assert_eq!(style.column_count(), 1);
        assert_eq!(style.break_type(), BreakType::NextPage);
        assert_eq!(style.content_width(), 11906 - 2880);
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let mut style = SectionStyle::default();
        style.set_orientation(Orientation::Landscape);
        assert_eq!(style.page_width(), 16838);
        assert_eq!(style.page_height(), 11906);
        assert_eq!(style.orientation().as_str(), "landscape");
    }

    #[test]
    fn test_attribute_keys() {
        let attrs = StyleAttributes::new()
            .with("paperSize", "Letter")
            .with("margin_top", 720)
            .with("marginLeft", "360")
            .with("colsNum", 0)
            .with("breakType", "continuous")
            .with("vAlign", "center")
            .with("orientation", "sideways");
        let style: Box<SectionStyle> = resolve(attrs);
        assert_eq!(style.paper_size(), PaperSize::Letter);
        assert_eq!(style.page_width(), 12240);
        assert_eq!(style.margins(), (720, 1440, 1440, 360));
        assert_eq!(style.column_count(), 1);
        assert_eq!(style.break_type(), BreakType::Continuous);
        assert_eq!(style.vertical_alignment(), Some(VerticalAlignment::Center));
        assert_eq!(style.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_unparsable_values_keep_current_setting() {
        let mut style: Box<SectionStyle> = resolve(
            StyleAttributes::new()
                .with("vAlign", "bottom")
                .with("pageNumberingStart", 3),
        );
        StyleSpec::from(
            StyleAttributes::new()
                .with("vAlign", "sideways")
                .with("pageNumberingStart", "first"),
        )
        .apply_to(&mut style);
        assert_eq!(style.vertical_alignment(), Some(VerticalAlignment::Bottom));
        assert_eq!(style.page_numbering_start(), Some(3));
    }

    #[test]
    fn test_custom_page_size() {
        let attrs = StyleAttributes::new()
            .with("pageSizeW", 10000)
            .with("pageSizeH", 20000)
            .with("orientation", "landscape");
        let style: Box<SectionStyle> = resolve(attrs);
        assert_eq!((style.page_width(), style.page_height()), (20000, 10000));
    }

    #[test]
    fn test_paper_preset() {
        let style: Box<SectionStyle> = resolve("Legal");
        assert_eq!(style.page_height(), 20160);
    }
}
