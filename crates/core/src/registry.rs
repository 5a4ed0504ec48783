//! Mod registry - lifecycle, persistence, and option routing
//!
//! The registry owns every registered mod and is the only place that
//! touches enabled-markers: enabling a mod installs its hooks and then
//! writes the marker, disabling removes the marker and then the hooks
//! (so a crash mid-transition fails toward "disabled at next launch").
//! At registration time the marker decides whether the mod auto-enables.

use std::path::PathBuf;

use slotmap::{new_key_type, SlotMap};

use bl2rust_host::Host;
use serde::Serialize;

use crate::meta::{ModMeta, ModStatus, ModType};
use crate::options::{OptionChange, OptionDesc};
use crate::persist;

new_key_type! {
    /// Key for registered mods
    pub struct ModKey;
}

/// Errors surfaced to the host's mod-management UI
#[derive(Debug, thiserror::Error)]
pub enum ModError {
    /// Marker-file I/O failed for a reason other than "already absent"
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The registry was handed a key it does not know
    #[error("unknown mod key")]
    UnknownMod,
}

/// A mod the registry can drive
///
/// `enable`/`disable` are invoked by the registry with the host adapter;
/// implementations install and remove their hooks there and perform any
/// one-time world adjustments. `option_changed` is only delivered while
/// the mod is enabled, and only for its own options.
pub trait GameMod: Send {
    fn meta(&self) -> &ModMeta;

    /// Option snapshots for the host's settings menu
    fn options(&self) -> Vec<OptionDesc> {
        Vec::new()
    }

    fn enable(&mut self, host: &mut dyn Host) -> Result<(), ModError>;

    fn disable(&mut self, host: &mut dyn Host) -> Result<(), ModError>;

    /// React to a settings-menu change; the new value is already stored
    /// by the menu when this runs
    fn option_changed(&mut self, host: &mut dyn Host, change: &OptionChange) {
        let _ = (host, change);
    }
}

/// Snapshot of a registered mod, serialized for the mod-management UI
#[derive(Debug, Clone, Serialize)]
pub struct ModInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub mod_type: ModType,
    pub status: ModStatus,
    /// Caption of the Enter-key settings input
    pub settings_input: &'static str,
    pub options: Vec<OptionDesc>,
}

struct ModEntry {
    game_mod: Box<dyn GameMod>,
    status: ModStatus,
}

/// Owner of all registered mods
pub struct ModRegistry {
    mods_dir: PathBuf,
    entries: SlotMap<ModKey, ModEntry>,
    /// Registration order, for stable UI listings
    order: Vec<ModKey>,
}

impl ModRegistry {
    /// Registry rooted at the SDK's mods directory
    pub fn new(mods_dir: impl Into<PathBuf>) -> Self {
        Self {
            mods_dir: mods_dir.into(),
            entries: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    fn marker_path(&self, meta: &ModMeta) -> PathBuf {
        self.mods_dir.join(meta.dir_name()).join(persist::MARKER_FILE)
    }

    /// Register a mod, auto-enabling it if its marker survived from a
    /// previous launch
    pub fn register(
        &mut self,
        host: &mut dyn Host,
        game_mod: Box<dyn GameMod>,
    ) -> Result<ModKey, ModError> {
        let name = game_mod.meta().name;
        let auto_enable = persist::marker_present(&self.marker_path(game_mod.meta()));

        let key = self.entries.insert(ModEntry {
            game_mod,
            status: ModStatus::Disabled,
        });
        self.order.push(key);
        tracing::info!("registered mod: {name}");

        if auto_enable {
            tracing::info!("[{name}] auto-enabling");
            self.enable(host, key)?;
        }
        Ok(key)
    }

    /// Enable a mod and persist the choice
    pub fn enable(&mut self, host: &mut dyn Host, key: ModKey) -> Result<(), ModError> {
        let marker = {
            let entry = self.entries.get(key).ok_or(ModError::UnknownMod)?;
            if entry.status == ModStatus::Enabled {
                tracing::debug!("[{}] already enabled", entry.game_mod.meta().name);
                return Ok(());
            }
            self.marker_path(entry.game_mod.meta())
        };

        let entry = self.entries.get_mut(key).ok_or(ModError::UnknownMod)?;
        entry.game_mod.enable(host)?;
        persist::write_marker(&marker)?;
        entry.status = ModStatus::Enabled;
        tracing::info!("[{}] enabled", entry.game_mod.meta().name);
        Ok(())
    }

    /// Disable a mod and persist the choice
    pub fn disable(&mut self, host: &mut dyn Host, key: ModKey) -> Result<(), ModError> {
        let marker = {
            let entry = self.entries.get(key).ok_or(ModError::UnknownMod)?;
            if entry.status == ModStatus::Disabled {
                tracing::debug!("[{}] already disabled", entry.game_mod.meta().name);
                return Ok(());
            }
            self.marker_path(entry.game_mod.meta())
        };

        let entry = self.entries.get_mut(key).ok_or(ModError::UnknownMod)?;
        persist::clear_marker(&marker)?;
        entry.game_mod.disable(host)?;
        entry.status = ModStatus::Disabled;
        tracing::info!("[{}] disabled", entry.game_mod.meta().name);
        Ok(())
    }

    /// Route a settings-menu change to its mod
    ///
    /// Disabled mods are skipped so a menu change can never mutate the
    /// world while a mod's hooks are uninstalled.
    pub fn option_changed(
        &mut self,
        host: &mut dyn Host,
        key: ModKey,
        change: &OptionChange,
    ) -> Result<(), ModError> {
        let entry = self.entries.get_mut(key).ok_or(ModError::UnknownMod)?;
        if entry.status == ModStatus::Enabled {
            entry.game_mod.option_changed(host, change);
        }
        Ok(())
    }

    pub fn status(&self, key: ModKey) -> Option<ModStatus> {
        self.entries.get(key).map(|e| e.status)
    }

    pub fn is_enabled(&self, key: ModKey) -> bool {
        self.status(key) == Some(ModStatus::Enabled)
    }

    /// UI snapshot for one mod
    pub fn info(&self, key: ModKey) -> Option<ModInfo> {
        self.entries.get(key).map(|entry| {
            let meta = entry.game_mod.meta();
            ModInfo {
                name: meta.name,
                author: meta.author,
                description: meta.description,
                version: meta.version,
                mod_type: meta.mod_type,
                status: entry.status,
                settings_input: entry.status.settings_input(),
                options: entry.game_mod.options(),
            }
        })
    }

    /// UI snapshots for every mod, in registration order
    pub fn infos(&self) -> Vec<ModInfo> {
        self.order.iter().filter_map(|&key| self.info(key)).collect()
    }
}
