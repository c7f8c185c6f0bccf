//! List numbering presets.
use super::{Style, StyleValue};

/// Built-in list numbering schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    SquareFilled,
    #[default]
    BulletFilled,
    BulletEmpty,
    Number,
    NumberNested,
    Alphanumeric,
}

impl ListType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "squareFilled" => Some(Self::SquareFilled),
            "bulletFilled" => Some(Self::BulletFilled),
            "bulletEmpty" => Some(Self::BulletEmpty),
            "number" => Some(Self::Number),
            "numberNested" => Some(Self::NumberNested),
            "alphanumeric" => Some(Self::Alphanumeric),
            _ => None,
        }
    }

    pub fn is_numbered(self) -> bool {
        matches!(self, Self::Number | Self::NumberNested | Self::Alphanumeric)
    }
}

/// Numbering style of a list item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListStyle {
    list_type: ListType,
    /// Custom numbering definition this item refers to
    numbering_style: Option<String>,
}

impl ListStyle {
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            numbering_style: None,
        }
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn numbering_style(&self) -> Option<&str> {
        self.numbering_style.as_deref()
    }
}

impl Style for ListStyle {
    const NAME: &'static str = "list";

    fn set_attribute(&mut self, key: &str, value: &StyleValue) -> bool {
        match key {
            "listType" | "list_type" => {
                if let Some(t) = value.as_str().and_then(ListType::parse) {
                    self.list_type = t;
                }
            },
            "numStyle" | "num_style" => self.numbering_style = value.as_str().map(str::to_string),
            _ => return false,
        }
        true
    }

    /// Presets name either a built-in list type or a custom numbering definition.
    fn apply_preset(&mut self, name: &str) -> bool {
        match ListType::parse(name) {
            Some(t) => self.list_type = t,
            None => self.numbering_style = Some(name.to_string()),
        }
        true
    }
}
