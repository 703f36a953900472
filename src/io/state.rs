use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const STATE_FILE: &str = ".folio-state.json";

/// Persisted TUI state (written to .folio-state.json).
///
/// Sort key and technology filter are deliberately absent: view order is
/// session-local and the stored order stays insertion/deletion order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// "dark" or "light"
    #[serde(default)]
    pub theme: Option<String>,
    /// "grid" or "list"
    #[serde(default)]
    pub layout: Option<String>,
    /// Cursor position in the card grid
    #[serde(default)]
    pub cursor: usize,
}

/// Read .folio-state.json from the portfolio directory
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let path = dir.join(STATE_FILE);
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .folio-state.json to the portfolio directory
pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = dir.join(STATE_FILE);
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
