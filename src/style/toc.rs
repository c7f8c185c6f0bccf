//! Table-of-contents entry layout.
use super::{Style, StyleValue};

/// Leader characters between entry text and page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabLeader {
    None,
    #[default]
    Dot,
    Hyphen,
    Underscore,
    MiddleDot,
}

impl TabLeader {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dot => "dot",
            Self::Hyphen => "hyphen",
            Self::Underscore => "underscore",
            Self::MiddleDot => "middleDot",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "dot" => Some(Self::Dot),
            "hyphen" => Some(Self::Hyphen),
            "underscore" => Some(Self::Underscore),
            "middleDot" => Some(Self::MiddleDot),
            _ => None,
        }
    }
}

/// TOC style. Positions are in twips.
#[derive(Debug, Clone, PartialEq)]
pub struct TocStyle {
    tab_leader: TabLeader,
    tab_position: u32,
    /// Indent per depth level
    indent: u32,
}

impl Default for TocStyle {
    fn default() -> Self {
        Self {
            tab_leader: TabLeader::Dot,
            tab_position: 9062,
            indent: 200,
        }
    }
}

impl TocStyle {
    pub fn tab_leader(&self) -> TabLeader {
        self.tab_leader
    }

    pub fn tab_position(&self) -> u32 {
        self.tab_position
    }

    pub fn indent(&self) -> u32 {
        self.indent
    }
}

impl Style for TocStyle {
    const NAME: &'static str = "toc";

    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool {
        match key {
            "tabLeader" | "tab_leader" => {
                if let Some(l) = value.as_str().and_then(TabLeader::parse) {
                    self.tab_leader = l;
                }
            },
            "tabPos" | "tab_pos" => {
                if let Some(p) = value.as_u32() {
                    self.tab_position = p;
                }
            },
            "indent" => {
                if let Some(i) = value.as_u32() {
                    self.indent = i;
                }
            },
            _ => return false,
        }
        true
    }
}
