use std::path::Path;

/// Render a LogTail TOML config for a test server.
pub fn render_config(listen_port: u16, log_path: &Path, redact: Option<&str>) -> String {
    let mut cfg = format!(
        "[server]\nlisten = \"127.0.0.1:{listen_port}\"\nthreads = 1\n\n[tail]\npath = {path:?}\nroute = \"/logtail\"\n",
        path = log_path.display().to_string(),
    );

    if let Some(pattern) = redact {
        cfg.push_str(&format!("redact = '{pattern}'\n"));
    }

    cfg
}
