//! Sidebar configuration: element identifiers and marker classes
//!
//! Defaults reproduce the auction site's base template, so a page that uses
//! that markup needs no configuration at all.

use crate::error::SidebarError;
use serde::{Deserialize, Serialize};

/// Marker classes toggled on the sidebar elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerClasses {
    /// Applied to the nav panel while it is expanded
    pub show: String,
    /// Swaps the toggle control's icon
    pub toggle_icon: String,
    pub body_padding: String,
    pub header_padding: String,
    /// Toggled on the logo label inside the nav panel
    pub logo_hidden: String,
    /// Marks the last clicked navigation link
    pub active: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            show: "show".to_string(),
            toggle_icon: "fa-times".to_string(),
            body_padding: "body-pd".to_string(),
            header_padding: "body-pd".to_string(),
            logo_hidden: "hide-inner".to_string(),
            active: "active".to_string(),
        }
    }
}

/// Where the controller finds its elements and which classes it flips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub toggle_id: String,
    pub nav_id: String,
    pub body_id: String,
    pub header_id: String,
    /// Class of the logo label, looked up inside the nav panel
    pub logo_class: String,
    /// Class shared by every navigation link
    pub link_class: String,
    pub classes: MarkerClasses,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            toggle_id: "header-toggle".to_string(),
            nav_id: "nav-bar".to_string(),
            body_id: "body-pd".to_string(),
            header_id: "header".to_string(),
            logo_class: "nav_logo".to_string(),
            link_class: "nav_link".to_string(),
            classes: MarkerClasses::default(),
        }
    }
}

impl SidebarConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SidebarError> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| SidebarError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, SidebarError> {
        serde_json::to_string_pretty(self).map_err(|source| SidebarError::ConfigParse { source })
    }

    /// Check that every id and class is a single non-empty token.
    ///
    /// DOM token lists reject whitespace, so after this passes no class
    /// operation on a real page can fail.
    pub fn validate(&self) -> Result<(), SidebarError> {
        let fields = [
            ("toggle_id", &self.toggle_id),
            ("nav_id", &self.nav_id),
            ("body_id", &self.body_id),
            ("header_id", &self.header_id),
            ("logo_class", &self.logo_class),
            ("link_class", &self.link_class),
            ("classes.show", &self.classes.show),
            ("classes.toggle_icon", &self.classes.toggle_icon),
            ("classes.body_padding", &self.classes.body_padding),
            ("classes.header_padding", &self.classes.header_padding),
            ("classes.logo_hidden", &self.classes.logo_hidden),
            ("classes.active", &self.classes.active),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(SidebarError::InvalidConfig {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            if value.chars().any(|c| c.is_ascii_whitespace()) {
                return Err(SidebarError::InvalidConfig {
                    field: field.to_string(),
                    reason: format!("must be a single token, got {value:?}"),
                });
            }
        }

        // Each id must name a distinct element
        let ids = &fields[..4];
        for (i, (field, value)) in ids.iter().enumerate() {
            if let Some((other, _)) = ids[..i].iter().find(|(_, v)| v == value) {
                return Err(SidebarError::InvalidConfig {
                    field: field.to_string(),
                    reason: format!("must differ from {other}, both are {value:?}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_base_template() {
        let config = SidebarConfig::default();
        assert_eq!(config.toggle_id, "header-toggle");
        assert_eq!(config.nav_id, "nav-bar");
        assert_eq!(config.body_id, "body-pd");
        assert_eq!(config.header_id, "header");
        assert_eq!(config.logo_class, "nav_logo");
        assert_eq!(config.link_class, "nav_link");
        assert_eq!(config.classes.toggle_icon, "fa-times");
        assert_eq!(config.classes.logo_hidden, "hide-inner");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            SidebarConfig::from_json(r#"{"nav_id": "side", "classes": {"active": "current"}}"#)
                .unwrap();
        assert_eq!(config.nav_id, "side");
        assert_eq!(config.toggle_id, "header-toggle");
        assert_eq!(config.classes.active, "current");
        assert_eq!(config.classes.show, "show");
    }

    #[test]
    fn test_rejects_whitespace_class() {
        let err = SidebarConfig::from_json(r#"{"classes": {"show": "is shown"}}"#).unwrap_err();
        assert!(
            matches!(err, SidebarError::InvalidConfig { ref field, .. } if field == "classes.show")
        );
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = SidebarConfig::from_json(r#"{"header_id": ""}"#).unwrap_err();
        assert!(matches!(err, SidebarError::InvalidConfig { ref field, .. } if field == "header_id"));
    }

    #[test]
    fn test_rejects_shared_element_ids() {
        let err = SidebarConfig::from_json(r#"{"body_id": "shell", "header_id": "shell"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SidebarError::InvalidConfig { ref field, ref reason }
                if field == "header_id" && reason.contains("body_id")
        ));

        let err = SidebarConfig::from_json(r#"{"toggle_id": "nav-bar"}"#).unwrap_err();
        assert!(matches!(err, SidebarError::InvalidConfig { ref field, .. } if field == "nav_id"));
    }

    #[test]
    fn test_accepts_non_identifier_class_tokens() {
        let config =
            SidebarConfig::from_json(r#"{"link_class": "1col", "logo_class": "nav.logo"}"#)
                .unwrap();
        assert_eq!(config.link_class, "1col");
        assert_eq!(config.logo_class, "nav.logo");
    }

    #[test]
    fn test_malformed_json() {
        let err = SidebarConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SidebarError::ConfigParse { .. }));
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = SidebarConfig::default().to_json().unwrap();
        assert_eq!(
            SidebarConfig::from_json(&json).unwrap(),
            SidebarConfig::default()
        );
    }
}
