use std::fmt;

/// Reports server-side failures encountered while serving a request.
///
/// Client errors (bad parameters, missing files) are never reported here.
pub trait ErrorLogger: Send + Sync {
    fn report(&self, message: fmt::Arguments<'_>);
}

/// Default logger, forwarding reports to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorLogger;

impl ErrorLogger for TracingErrorLogger {
    fn report(&self, message: fmt::Arguments<'_>) {
        tracing::error!(target: "logtail", "{message}");
    }
}

/// `format!`-style shorthand for [`ErrorLogger::report`].
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::tail::ErrorLogger::report(&*$logger, format_args!($($arg)+))
    };
}
