use crate::book::FavoritePolicy;
use crate::error::{AddressBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the address book, stored in `<config dir>/config.json`.
///
/// Every field defaults to the address book's standard behavior, so a missing
/// file or a partial one is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AddressBookConfig {
    /// Drop a person from the favorites when it is deleted or the book is cleared
    pub prune_favorites_on_remove: bool,

    /// Refuse to add a person to the favorites twice
    pub reject_duplicate_favorites: bool,
}

impl AddressBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddressBookError::Io)?;
        let config: AddressBookConfig =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddressBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AddressBookError::Serialization)?;
        fs::write(config_path, content).map_err(AddressBookError::Io)?;
        Ok(())
    }

    pub fn favorite_policy(&self) -> FavoritePolicy {
        FavoritePolicy {
            prune_favorites_on_remove: self.prune_favorites_on_remove,
            reject_duplicate_favorites: self.reject_duplicate_favorites,
        }
    }
}
