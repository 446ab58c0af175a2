mod gateway;
mod setup;

pub use gateway::LogTailGateway;
pub use setup::{build_pingora_server, run};
