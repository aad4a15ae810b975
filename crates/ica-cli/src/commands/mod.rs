//! Subcommand implementations.

pub mod dashboard;
pub mod init;
pub mod jobs;
pub mod quiz;
pub mod reset;
pub mod resume;
pub mod sidebar;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use ica_core::catalog::Catalog;
use ica_core::config::{load_config_from, IcaConfig};
use ica_core::matching::resolve_board_role;
use ica_core::parser::load_catalog;
use ica_core::{FileStore, LocalStore};

/// Config, store and catalog shared by the data commands.
pub struct Session {
    pub config: IcaConfig,
    pub store: LocalStore<FileStore>,
    pub catalog: Catalog,
}

impl Session {
    /// Load config, open the data directory and load the catalog.
    ///
    /// `--data-dir` beats `ICA_DATA_DIR`, which beats the config file.
    pub fn open(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = load_config_from(config_path)?;
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        let store = FileStore::open(config.data_dir.clone()).with_context(|| {
            format!("failed to open data directory {}", config.data_dir.display())
        })?;
        tracing::debug!("using data directory {}", store.root().display());

        let catalog = match &config.catalog {
            Some(path) => load_catalog(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?,
            None => Catalog::builtin(Utc::now()),
        };

        Ok(Self {
            config,
            store: LocalStore::new(store),
            catalog,
        })
    }

    /// The explicit role, else the latest resume's role, else the configured default.
    pub fn resolve_role(&self, explicit: Option<&str>) -> String {
        resolve_board_role(explicit, &self.store.resumes(), &self.config.default_role)
    }
}
