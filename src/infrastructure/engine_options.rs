// SPDX-License-Identifier: MPL-2.0
//! Process-wide rendering engine options.
//!
//! Engines built on a worker script need its location before the first
//! document is opened. The options are installed once at startup and read by
//! engine adapters afterwards; installing twice is an error rather than a
//! silent overwrite.
//!
//! # Example
//!
//! ```
//! use folio::config::EngineConfig;
//! use folio::infrastructure::engine_options::{EngineOptions, EngineOptionsCell};
//!
//! let cell = EngineOptionsCell::new();
//! let options = EngineOptions::from_config(&EngineConfig::default(), "2.16.105");
//! cell.install(options).unwrap();
//! assert!(cell.get().unwrap().worker_url().contains("2.16.105"));
//! ```

use crate::config::{EngineConfig, WORKER_VERSION_PLACEHOLDER};
use crate::error::{Error, Result};
use std::sync::OnceLock;

/// Options every engine instance in the process shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    worker_url: String,
    engine_version: String,
}

impl EngineOptions {
    /// Resolves the worker URL template of `config` for `engine_version`.
    #[must_use]
    pub fn from_config(config: &EngineConfig, engine_version: &str) -> Self {
        Self {
            worker_url: config
                .worker_url_template
                .replace(WORKER_VERSION_PLACEHOLDER, engine_version),
            engine_version: engine_version.to_string(),
        }
    }

    #[must_use]
    pub fn worker_url(&self) -> &str {
        &self.worker_url
    }

    #[must_use]
    pub fn engine_version(&self) -> &str {
        &self.engine_version
    }
}

/// A write-once slot for [`EngineOptions`].
#[derive(Debug, Default)]
pub struct EngineOptionsCell(OnceLock<EngineOptions>);

impl EngineOptionsCell {
    #[must_use]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Stores `options` if nothing was installed yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineAlreadyInitialized`] on every call after the
    /// first; the options installed first stay in effect.
    pub fn install(&self, options: EngineOptions) -> Result<&EngineOptions> {
        self.0
            .set(options)
            .map_err(|rejected| {
                tracing::warn!(
                    version = rejected.engine_version(),
                    "engine options already installed"
                );
                Error::EngineAlreadyInitialized
            })?;
        self.0.get().ok_or(Error::EngineAlreadyInitialized)
    }

    #[must_use]
    pub fn get(&self) -> Option<&EngineOptions> {
        self.0.get()
    }
}

static GLOBAL: EngineOptionsCell = EngineOptionsCell::new();

/// Installs the process-wide engine options.
///
/// # Errors
///
/// Returns [`Error::EngineAlreadyInitialized`] if options were installed before.
pub fn install(options: EngineOptions) -> Result<&'static EngineOptions> {
    let installed = GLOBAL.install(options)?;
    tracing::debug!(worker = installed.worker_url(), "engine options installed");
    Ok(installed)
}

/// Returns the process-wide engine options, if installed.
#[must_use]
pub fn installed() -> Option<&'static EngineOptions> {
    GLOBAL.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_placeholder_is_replaced() {
        let config = EngineConfig {
            worker_url_template: "/assets/{version}/worker.js".to_string(),
        };
        let options = EngineOptions::from_config(&config, "4.0.1");
        assert_eq!(options.worker_url(), "/assets/4.0.1/worker.js");
        assert_eq!(options.engine_version(), "4.0.1");
    }

    #[test]
    fn template_without_placeholder_is_used_verbatim() {
        let config = EngineConfig {
            worker_url_template: "/static/worker.js".to_string(),
        };
        let options = EngineOptions::from_config(&config, "1.0");
        assert_eq!(options.worker_url(), "/static/worker.js");
    }

    #[test]
    fn second_install_fails_and_keeps_first() {
        let cell = EngineOptionsCell::new();
        let first = EngineOptions::from_config(&EngineConfig::default(), "1.0");
        let second = EngineOptions::from_config(&EngineConfig::default(), "2.0");

        cell.install(first.clone()).expect("first install");
        assert!(matches!(
            cell.install(second),
            Err(Error::EngineAlreadyInitialized)
        ));
        assert_eq!(cell.get(), Some(&first));
    }

    #[test]
    fn empty_cell_has_nothing() {
        assert!(EngineOptionsCell::new().get().is_none());
    }
}
