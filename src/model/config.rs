use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Starting theme: "dark" or "light". The in-session toggle wins after
    /// the first run (the choice is remembered in the state file).
    #[serde(default)]
    pub theme: Option<String>,
    /// Starting layout: "grid" or "list"
    #[serde(default)]
    pub layout: Option<String>,
    /// Palette overrides, hex strings keyed by palette slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert!(config.ui.theme.is_none());
        assert!(config.ui.layout.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn ui_section_parses() {
        let config: FolioConfig = toml::from_str(
            r##"
[ui]
theme = "light"
layout = "list"

[ui.colors]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.as_deref(), Some("light"));
        assert_eq!(config.ui.layout.as_deref(), Some("list"));
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FB4196");
    }
}
