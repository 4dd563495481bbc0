//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_cache::FileStore;
use shop_commerce::{CartStore, HttpCatalogSource};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// The store type every cart command works against.
pub type SessionStore = CartStore<HttpCatalogSource, FileStore>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the settings came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Open the cart store and run its startup sequence.
    pub async fn open_store(&self) -> Result<SessionStore> {
        let source = HttpCatalogSource::from_config(&self.config.store)
            .context("Failed to configure catalog source")?;
        let storage_dir = self.resolve_path(&self.config.storage.path);
        tracing::debug!(path = %storage_dir.display(), "opening cart storage");
        let storage = FileStore::open(&storage_dir)
            .with_context(|| format!("Failed to open storage at {}", storage_dir.display()))?;

        let mut store =
            CartStore::new(source, storage).with_storage_key(self.config.store.storage_key.clone());

        let spinner = self.output.spinner("Loading catalog...");
        store.initialize().await;
        spinner.finish_and_clear();

        if store.catalog().is_none() {
            self.output.warn(&format!(
                "Catalog unavailable from {}; totals will read 0",
                self.config.store.catalog_url
            ));
        }

        Ok(store)
    }

    /// Resolve a path relative to the config file's directory, or the
    /// working directory when no config file was found.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(self.cwd.as_path());
        base.join(path)
    }
}

/// Find a config file in the directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
