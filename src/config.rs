use serde::{Deserialize, Serialize};

use crate::primitives::curves;
use crate::{HashAlgorithm, Result};

/// Settings for the `dleq` command-line tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Curve name, resolved with [`curves::by_name`].
    pub curve: String,
    /// Hash algorithm for the challenge.
    pub hash: HashAlgorithm,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            curve: curves::P256_NAME.to_string(),
            hash: HashAlgorithm::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `.env` file, TOML file, and environment variables.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables with `DLEQ_` prefix (e.g., `DLEQ_HASH=sha512`)
    /// 2. TOML configuration file (if exists)
    /// 3. `.env` file (if exists)
    /// 4. Built-in defaults
    ///
    /// The TOML file path can be set via `DLEQ_CONFIG_PATH` environment variable.
    /// If not set, defaults to `./config/dleq.toml`. A missing file is skipped.
    ///
    /// # Environment Variable Examples
    /// ```bash
    /// DLEQ_CURVE=secp256k1
    /// DLEQ_HASH=sha3-256
    /// ```
    ///
    /// # Errors
    /// Returns an error if the configuration is malformed.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        use figment::providers::{Env, Format, Toml};
        use figment::Figment;

        let _ = dotenvy::dotenv();

        let config_path =
            std::env::var("DLEQ_CONFIG_PATH").unwrap_or_else(|_| "config/dleq.toml".to_string());

        Figment::new()
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("DLEQ_").ignore(&["config_path"]))
            .extract()
    }

    /// Checks that the configured curve is one of the built-in curves.
    ///
    /// # Errors
    /// Returns [`Error::UnknownCurve`](crate::Error::UnknownCurve) otherwise.
    pub fn validate(&self) -> Result<()> {
        curves::by_name(&self.curve).map(|_| ())
    }
}
