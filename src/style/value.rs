//! Attribute mappings used to build styles.
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    #[default]
    #[serde(skip)]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl StyleValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Interpret as a boolean. Accepts `true`/`false`, `1`/`0`, and the strings
    /// "true", "false", "1", "0".
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            Self::Str(s) => match s.trim() {
                "true" | "1" => Some(true),
                "false" | "0" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) => Some(*f as i64),
            Self::Str(s) => s.trim().parse::<f64>().ok().map(|f| f as i64),
            _ => None,
        }
    }

    /// Interpret as a non-negative integer (twips, counts, half-points).
    pub fn as_u32(&self) -> Option<u32> {
        self.as_i64().and_then(|i| u32::try_from(i).ok())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for StyleValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for StyleValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for StyleValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for StyleValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Ordered attribute mapping.
///
/// Keys keep insertion order, which is the order attributes are applied in.
/// A key given twice is applied twice; the later value wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleAttributes {
    entries: Vec<(String, StyleValue)>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Last value given for `key`.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML mapping of attribute names to scalar values.
    ///
    /// ```rust
    /// # #[cfg(feature = "yaml")] {
    /// use docweave::style::StyleAttributes;
    ///
    /// let attrs = StyleAttributes::from_yaml("orientation: landscape\nmarginTop: 720\n").unwrap();
    /// assert_eq!(attrs.len(), 2);
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| crate::Error::Settings(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for StyleAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = StyleAttributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of style attribute names to scalar values")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(StyleAttributes::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut attrs = StyleAttributes::new();
                while let Some((key, value)) = map.next_entry::<String, Option<StyleValue>>()? {
                    attrs.insert(key, value.unwrap_or(StyleValue::Null));
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercions() {
        assert_eq!(StyleValue::from("720").as_u32(), Some(720));
        assert_eq!(StyleValue::from(12.5).as_u32(), Some(12));
        assert_eq!(StyleValue::from(-1).as_u32(), None);
        assert_eq!(StyleValue::from("true").as_bool(), Some(true));
        assert_eq!(StyleValue::from(0).as_bool(), Some(false));
        assert_eq!(StyleValue::Null.as_bool(), None);
        assert_eq!(StyleValue::from(None::<i64>), StyleValue::Null);
    }

    #[test]
    fn test_later_value_wins() {
        let attrs = StyleAttributes::new().with("size", 10).with("size", 12);
        assert_eq!(attrs.get("size"), Some(&StyleValue::Int(12)));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let attrs: StyleAttributes = [("bold", true), ("italic", false)].into_iter().collect();
        assert_eq!(attrs.get("italic").and_then(StyleValue::as_bool), Some(false));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_keeps_order_and_nulls() {
        let attrs = StyleAttributes::from_yaml("orientation: landscape\nfoo: ~\ncolsNum: 2\n").unwrap();
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["orientation", "foo", "colsNum"]);
        assert!(attrs.get("foo").unwrap().is_null());
        assert_eq!(attrs.get("colsNum"), Some(&StyleValue::Int(2)));
        assert_eq!(attrs.get("orientation").and_then(StyleValue::as_str), Some("landscape"));
    }
}
