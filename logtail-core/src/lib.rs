pub mod conf;
pub mod logging;
pub mod server;
pub mod tail;
