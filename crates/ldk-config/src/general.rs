//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_table_color() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether table output colorizes status-like cells.
    #[serde(default = "default_table_color")]
    pub table_color: bool,

    /// Hard cap on rendered table width; unset means fit to content.
    #[serde(default)]
    pub max_table_width: Option<usize>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            table_color: default_table_color(),
            max_table_width: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.table_color);
        assert!(config.max_table_width.is_none());
    }
}
