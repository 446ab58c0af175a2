use crate::harness::config::render_config;
use crate::harness::{CapturedEvent, init_test_tracing};
use logtail_core::conf::LogTailConfig;
use logtail_core::server::build_pingora_server;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Handle to a running LogTail test server.
///
/// The tailed log lives in a temp dir owned by the handle.
pub struct TestServer {
    base_url: String,
    client: Client,
    log_dir: TempDir,
    log_path: PathBuf,
}

impl TestServer {
    /// Start a server tailing a fresh log file seeded with `contents`.
    pub fn start(contents: &[u8]) -> Self {
        Self::start_with_redaction(contents, None)
    }

    /// Start a server whose responses are masked with `redact`.
    ///
    /// Ports are allocated dynamically, so servers can run in parallel.
    pub fn start_with_redaction(contents: &[u8], redact: Option<&str>) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing(events());

        let log_dir = tempfile::tempdir().expect("failed to create log dir");
        let log_path = log_dir.path().join("app.log");
        std::fs::write(&log_path, contents).expect("failed to seed log file");

        let listen_port = free_port();
        let cfg = LogTailConfig::from_str(&render_config(listen_port, &log_path, redact))
            .expect("failed to parse test config");

        let server = build_pingora_server(&cfg).expect("failed to build logtail server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        // Wait for server to accept connections
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        Self {
            base_url,
            client,
            log_dir,
            log_path,
        }
    }

    /// GET the tail endpoint with a raw query string.
    pub fn tail(&self, query: &str) -> RequestBuilder {
        self.get(&format!("/logtail?{query}"))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.client.head(format!("{}{}", self.base_url, path))
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn log_dir(&self) -> &Path {
        self.log_dir.path()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Poll until the server responds (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

pub fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
