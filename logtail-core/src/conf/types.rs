use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:8080"
    pub listen: String,

    /// Overrides the pingora worker thread count.
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TailConfig {
    /// Base path of the tailed log; rotated variants live at `<path>.<suffix>`.
    pub path: PathBuf,

    /// URL path the endpoint is mounted on.
    #[serde(default = "default_route")]
    pub route: String,

    /// Regex whose matches are masked before serving.
    pub redact: Option<String>,
}

fn default_route() -> String {
    "/".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogTailConfig {
    pub server: ServerConfig,
    pub tail: TailConfig,
}
