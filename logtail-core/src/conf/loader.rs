use crate::conf::error::ConfigError;
use crate::conf::types::LogTailConfig;
use crate::tail::{LogTail, Redactor};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<LogTailConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: LogTailConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
    cfg.validate()?;
    Ok(cfg)
}

impl LogTailConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_config(path.as_ref())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.listen.trim().is_empty() {
            return Err(ConfigError::EmptyListen);
        }

        if self.tail.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyTailPath);
        }

        if !self.tail.route.starts_with('/') {
            return Err(ConfigError::InvalidRoute {
                route: self.tail.route.clone(),
            });
        }

        self.redactor()?;

        Ok(())
    }

    pub fn redactor(&self) -> Result<Option<Redactor>, ConfigError> {
        self.tail
            .redact
            .as_deref()
            .map(|pattern| {
                Redactor::from_pattern(pattern).map_err(|source| {
                    ConfigError::InvalidRedactPattern {
                        pattern: pattern.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }

    /// Build the request handler described by the `[tail]` table.
    pub fn build_tail(&self) -> Result<LogTail, ConfigError> {
        let tail = LogTail::new(&self.tail.path);
        Ok(match self.redactor()? {
            Some(redactor) => tail.with_redaction(redactor),
            None => tail,
        })
    }
}

impl FromStr for LogTailConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::parse("<string>", e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
