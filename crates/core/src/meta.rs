//! Mod metadata and status

use serde::Serialize;

/// Category shown in the host's mod menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModType {
    Utility,
    Gameplay,
}

/// Whether a mod is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModStatus {
    Enabled,
    Disabled,
}

impl ModStatus {
    /// Caption for the settings input that toggles the mod
    pub fn settings_input(self) -> &'static str {
        match self {
            ModStatus::Enabled => "Disable",
            ModStatus::Disabled => "Enable",
        }
    }
}

/// Static description of a mod, shown in the host's mod menu
#[derive(Debug, Clone, Serialize)]
pub struct ModMeta {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub mod_type: ModType,
}

impl ModMeta {
    /// Directory name under the mods directory
    ///
    /// The enabled-marker file lives in this directory.
    pub fn dir_name(&self) -> String {
        self.name.chars().filter(|c| !c.is_whitespace()).collect()
    }
}
