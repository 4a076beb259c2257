use addressbook::config::AddressBookConfig;
use addressbook::error::Result;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "ADDRESSBOOK_CONFIG_DIR";

/// Logs go to stderr so stdout carries only command output.
///
/// `--verbose` forces debug level, otherwise `RUST_LOG` applies (default `warn`).
pub(crate) fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolves the config directory: `--config-dir`, then `ADDRESSBOOK_CONFIG_DIR`,
/// then the platform config dir.
pub(crate) fn config_dir(flag: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = flag {
        return Some(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "addressbook", "addressbook").map(|d| d.config_dir().to_path_buf())
}

pub(crate) fn load_config(flag: Option<&Path>) -> Result<AddressBookConfig> {
    match config_dir(flag) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            AddressBookConfig::load(dir)
        }
        None => Ok(AddressBookConfig::default()),
    }
}
