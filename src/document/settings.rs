//! Document-level settings loaded from configuration.
use crate::style::StyleAttributes;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Title style settings for one heading depth.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TitleStyleSettings {
    pub font: StyleAttributes,
    pub paragraph: StyleAttributes,
}

/// Settings applied when a [`Document`](super::Document) is created.
///
/// Unknown keys are ignored so that settings files written for newer versions
/// keep loading.
///
/// ```rust
/// # #[cfg(feature = "yaml")] {
/// use docweave::document::DocumentSettings;
///
/// let settings = DocumentSettings::from_yaml(r#"
/// default_font_name: Calibri
/// default_font_size: 11
/// section:
///   orientation: landscape
/// title_styles:
///   1:
///     font: { size: 16, bold: true }
/// "#).unwrap();
/// assert_eq!(settings.default_font_name.as_deref(), Some("Calibri"));
/// assert!(settings.title_styles.contains_key(&1));
/// # }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub default_font_name: Option<String>,
    /// Default font size in points
    pub default_font_size: Option<f64>,
    /// Attributes applied to sections created without an explicit style
    pub section: StyleAttributes,
    /// Title styles keyed by heading depth
    pub title_styles: BTreeMap<u8, TitleStyleSettings>,
}

impl DocumentSettings {
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| crate::Error::Settings(e.to_string()))
    }
}

#[cfg(all(test, feature = "yaml"))]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings = DocumentSettings::from_yaml(
            "default_font_size: 12\ncompat_mode: 15\nsection:\n  marginTop: 720\n",
        )
        .unwrap();
        assert_eq!(settings.default_font_size, Some(12.0));
        assert_eq!(settings.section.get("marginTop"), Some(&StyleValue::Int(720)));
        assert!(settings.title_styles.is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = DocumentSettings::from_yaml("section: [unclosed").unwrap_err();
        assert!(matches!(err, crate::Error::Settings(_)));
    }
}
