//! Configuration handling for git-pep8-hook.
//!
//! A run operates on one immutable [`Config`] snapshot, layered once
//! before any file is checked: built-in defaults, then command-line
//! flags, then overrides from an optional `setup.cfg`-style file. Nothing
//! mutates the configuration after that.

use crate::core::error::{Error, Result};
use configparser::ini::Ini;
use std::path::Path;

/// Default checker executable.
pub const DEFAULT_CHECKER: &str = "pep8";

/// Default override-config file, also forwarded to the checker.
pub const DEFAULT_CONFIG_FILE: &str = "setup.cfg";

/// Section of the override file read by the hook.
pub const OVERRIDE_SECTION: &str = "pep8_pre_commit_hook";

/// Immutable settings snapshot for one hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name or path of the style-checker executable.
    pub checker: String,
    /// Maximum violations a single file may have and still pass.
    pub max_violations_per_file: u32,
    /// Extra parameters forwarded to the checker, whitespace-separated.
    pub checker_params: Option<String>,
    /// Path to the override file, also passed to the checker as `--config=`.
    pub config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checker: DEFAULT_CHECKER.to_string(),
            max_violations_per_file: 0,
            checker_params: None,
            config_file: DEFAULT_CONFIG_FILE.to_string(),
        }
    }
}

impl Config {
    /// Builds the final configuration from command-line values plus any
    /// override file found at `config_file`.
    ///
    /// A missing override file is not an error; flags and defaults stand
    /// as-is. An unreadable or malformed one is fatal, since gating
    /// commits on a half-read configuration would be worse than failing.
    pub fn resolve(
        checker: String,
        max_violations_per_file: u32,
        checker_params: Option<String>,
        config_file: String,
    ) -> Result<Self> {
        let mut config = Self {
            checker,
            max_violations_per_file,
            checker_params,
            config_file,
        };
        config.apply_overrides()?;
        Ok(config)
    }

    /// Applies overrides from the `[pep8_pre_commit_hook]` section of the
    /// configured file, if the file exists.
    fn apply_overrides(&mut self) -> Result<()> {
        let path = Path::new(&self.config_file);
        if !path.exists() {
            tracing::debug!(path = %self.config_file, "no override config file");
            return Ok(());
        }

        let mut ini = Ini::new();
        ini.load(path).map_err(Error::config_parse)?;

        if let Some(command) = ini.get(OVERRIDE_SECTION, "command") {
            tracing::debug!(%command, "checker overridden by config file");
            self.checker = command;
        }

        if let Some(params) = ini.get(OVERRIDE_SECTION, "params") {
            self.checker_params = Some(match self.checker_params.take() {
                Some(existing) => format!("{existing} {params}"),
                None => params,
            });
        }

        match ini.getuint(OVERRIDE_SECTION, "max-violations-per-file") {
            Ok(Some(max)) => {
                self.max_violations_per_file =
                    u32::try_from(max).map_err(|_| Error::ConfigInvalid {
                        field: "max-violations-per-file".to_string(),
                        message: format!("value out of range: {max}"),
                    })?;
            }
            Ok(None) => {}
            Err(message) => {
                return Err(Error::ConfigInvalid {
                    field: "max-violations-per-file".to_string(),
                    message,
                });
            }
        }

        Ok(())
    }
}
