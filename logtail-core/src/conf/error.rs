use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Validation
    #[error("server.listen must not be empty")]
    EmptyListen,

    #[error("tail.path must not be empty")]
    EmptyTailPath,

    #[error("invalid tail route '{route}': routes must start with '/'")]
    InvalidRoute { route: String },

    #[error("invalid redaction pattern '{pattern}': {source}")]
    InvalidRedactPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
