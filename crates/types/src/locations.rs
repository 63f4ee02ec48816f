use serde::{Deserialize, Serialize};

use crate::MenuKey;

/// Relative locations of the three menu documents.
///
/// Sources resolve these against their root (a data directory or a base
/// URL). Defaults match the file names the site ships with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLocations {
    pub menu1: String,
    pub menu2: String,
    pub menu3: String,
}

impl Default for MenuLocations {
    fn default() -> Self {
        Self {
            menu1: "menu1-data.json".to_string(),
            menu2: "menu2-data.json".to_string(),
            menu3: "menu3-data.json".to_string(),
        }
    }
}

impl MenuLocations {
    pub fn get(&self, key: MenuKey) -> &str {
        match key {
            MenuKey::Menu1 => &self.menu1,
            MenuKey::Menu2 => &self.menu2,
            MenuKey::Menu3 => &self.menu3,
        }
    }
}
