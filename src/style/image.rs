//! Image and embedded-object frame formatting.
use super::{Style, StyleValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAlignment {
    Left,
    Center,
    Right,
}

impl ImageAlignment {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Text wrapping around a floating image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageWrapping {
    #[default]
    Inline,
    Square,
    Tight,
    Behind,
    Infront,
}

impl ImageWrapping {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inline" => Some(Self::Inline),
            "square" => Some(Self::Square),
            "tight" => Some(Self::Tight),
            "behind" => Some(Self::Behind),
            "infront" => Some(Self::Infront),
            _ => None,
        }
    }
}

/// Image style. Dimensions and offsets are in points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageStyle {
    width: Option<f64>,
    height: Option<f64>,
    alignment: Option<ImageAlignment>,
    wrapping: ImageWrapping,
    margin_top: Option<f64>,
    margin_left: Option<f64>,
}

impl ImageStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn alignment(&self) -> Option<ImageAlignment> {
        self.alignment
    }

    pub fn wrapping(&self) -> ImageWrapping {
        self.wrapping
    }

    pub fn set_wrapping(&mut self, wrapping: ImageWrapping) -> &mut Self {
        self.wrapping = wrapping;
        self
    }

    pub fn margin_top(&self) -> Option<f64> {
        self.margin_top
    }

    pub fn margin_left(&self) -> Option<f64> {
        self.margin_left
    }
}

impl Style for ImageStyle {
    const NAME: &'static str = "image";

    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool {
        match key {
            "width" => self.width = value.as_f64().filter(|w| *w > 0.0),
            "height" => self.height = value.as_f64().filter(|h| *h > 0.0),
            "alignment" | "align" => self.alignment = value.as_str().and_then(ImageAlignment::parse),
            "wrappingStyle" | "wrapping_style" => {
                self.wrapping = value
                    .as_str()
                    .and_then(ImageWrapping::parse)
                    .unwrap_or_default();
            },
            "marginTop" | "margin_top" => self.margin_top = value.as_f64(),
            "marginLeft" | "margin_left" => self.margin_left = value.as_f64(),
            _ => return false,
        }
        true
    }
}
