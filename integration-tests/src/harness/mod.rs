mod config;
pub mod server;
pub mod tracing;

pub use config::render_config;
pub use server::TestServer;
pub use tracing::{CapturedEvent, init_test_tracing};
