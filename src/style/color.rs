use std::fmt;

/// RGB color used by font and table styles.
///
/// # Examples
///
/// ```rust
/// use docweave::style::RGBColor;
///
/// let red = RGBColor::from_hex("FF0000").unwrap();
/// assert_eq!(red, RGBColor::new(255, 0, 0));
/// assert_eq!(RGBColor::from_name("blue").unwrap().to_hex(), "0000FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf::phf_map! {
    "black" => (0x00, 0x00, 0x00),
    "blue" => (0x00, 0x00, 0xFF),
    "cyan" => (0x00, 0xFF, 0xFF),
    "darkBlue" => (0x00, 0x00, 0x8B),
    "darkCyan" => (0x00, 0x8B, 0x8B),
    "darkGray" => (0xA9, 0xA9, 0xA9),
    "darkGreen" => (0x00, 0x64, 0x00),
    "darkMagenta" => (0x80, 0x00, 0x80),
    "darkRed" => (0x8B, 0x00, 0x00),
    "darkYellow" => (0x80, 0x80, 0x00),
    "green" => (0x00, 0xFF, 0x00),
    "lightGray" => (0xD3, 0xD3, 0xD3),
    "magenta" => (0xFF, 0x00, 0xFF),
    "red" => (0xFF, 0x00, 0x00),
    "white" => (0xFF, 0xFF, 0xFF),
    "yellow" => (0xFF, 0xFF, 0x00),
};

impl RGBColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex string, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Look up one of the highlight color names.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS.get(name).map(|&(r, g, b)| Self::new(r, g, b))
    }

    /// Parse either a color name or a hex string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_name(s).or_else(|| Self::from_hex(s))
    }

    /// Upper-case hex string without the `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(RGBColor::parse("#00ff00"), Some(RGBColor::new(0, 255, 0)));
        assert_eq!(RGBColor::parse("darkRed"), Some(RGBColor::new(0x8B, 0, 0)));
        assert_eq!(RGBColor::parse("F00"), None);
        assert_eq!(RGBColor::parse("zzzzzz"), None);
    }
}
