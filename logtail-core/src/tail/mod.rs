mod handler;
mod logger;
mod params;
mod redact;
mod response;
mod window;
#[cfg(test)]
mod tests;

pub use handler::{BodySink, LogTail};
pub use logger::{ErrorLogger, TracingErrorLogger};
pub use params::{DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_SUFFIX, Offset, ParamError, RequestParams};
pub use redact::Redactor;
pub use response::{FILE_LENGTH_HEADER, TailBody, TailResponse};
pub use window::{Window, WindowPlan, resolve_window};
