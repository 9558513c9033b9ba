//! Configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/domtool/domtool.toml`
//! 3. Environment variables: `DOMTOOL_*` prefix
//!
//! Defaults reproduce the pipeline contract exactly; the layer exists so a
//! pipeline can retarget the suffix without patching every calling script.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Suffix appended to the running domain's uid and namespace.
pub const DEFAULT_TEST_SUFFIX: &str = "-test";

/// Replica count pinned on generated test domains.
pub const DEFAULT_TEST_REPLICAS: u64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub test_suffix: String,
    pub test_replicas: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            test_suffix: DEFAULT_TEST_SUFFIX.to_string(),
            test_replicas: DEFAULT_TEST_REPLICAS,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("test_suffix", DEFAULT_TEST_SUFFIX)?
            .set_default("test_replicas", DEFAULT_TEST_REPLICAS)?;

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("DOMTOOL").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// `$XDG_CONFIG_HOME/domtool/domtool.toml`
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "domtool").map(|dirs| dirs.config_dir().join("domtool.toml"))
    }
}
