use crate::log_error;
use crate::tail::logger::{ErrorLogger, TracingErrorLogger};
use crate::tail::params::RequestParams;
use crate::tail::redact::Redactor;
use crate::tail::response::{HeaderBuilder, TailBody, TailResponse};
use crate::tail::window::{Window, WindowPlan, resolve_window};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use http::StatusCode;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeekExt};

const CHUNK_SIZE: usize = 32 * 1024;

/// Destination for a response body, written chunk by chunk.
#[async_trait]
pub trait BodySink: Send {
    async fn write_chunk(&mut self, chunk: Bytes) -> io::Result<()>;
}

#[async_trait]
impl BodySink for Vec<u8> {
    async fn write_chunk(&mut self, chunk: Bytes) -> io::Result<()> {
        self.extend_from_slice(&chunk);
        Ok(())
    }
}

/// Serves a window of a log file, optionally redacting it.
///
/// The handler is immutable after construction and can be shared across requests
/// behind an `Arc`. Every request opens the target file on its own.
pub struct LogTail {
    path: PathBuf,
    redactor: Option<Redactor>,
    logger: Arc<dyn ErrorLogger>,
}

impl LogTail {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            redactor: None,
            logger: Arc::new(TracingErrorLogger),
        }
    }

    pub fn with_redaction(mut self, redactor: Redactor) -> Self {
        self.redactor = Some(redactor);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ErrorLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn redactor(&self) -> Option<&Redactor> {
        self.redactor.as_ref()
    }

    /// Path of the file addressed by `suffix`, e.g. `app.log` + `1` is `app.log.1`.
    ///
    /// The suffix is appended as given, without numeric normalization.
    pub fn target_path(&self, suffix: Option<&str>) -> PathBuf {
        match suffix {
            Some(suffix) => {
                let mut path = self.path.clone().into_os_string();
                path.push(".");
                path.push(suffix);
                PathBuf::from(path)
            }
            None => self.path.clone(),
        }
    }

    /// Resolve a request into a status, headers and a body that is yet to be streamed.
    pub async fn handle(&self, query: Option<&str>) -> TailResponse {
        match RequestParams::from_query(query) {
            Ok(params) => self.serve(&params).await,
            Err(_) => TailResponse::empty(StatusCode::BAD_REQUEST, HeaderBuilder::default()),
        }
    }

    pub async fn serve(&self, params: &RequestParams) -> TailResponse {
        let path = self.target_path(params.suffix.as_deref());

        // TODO: detect rotated files that were compressed (`.gz`) and decompress them.
        let mut file = match fs::File::open(&path).await {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return TailResponse::empty(StatusCode::NOT_FOUND, HeaderBuilder::default());
            }
            Err(err) => {
                log_error!(self.logger, "failed to open {:?}: {err}", path);
                return TailResponse::empty(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    HeaderBuilder::default(),
                );
            }
        };

        let size = match file.metadata().await {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                log_error!(self.logger, "failed to stat {:?}: {err}", path);
                return TailResponse::empty(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    HeaderBuilder::default(),
                );
            }
        };

        let mut headers = HeaderBuilder::default();
        headers.file_length(size);

        let window = match resolve_window(params.offset, params.limit, size) {
            WindowPlan::NoContent => return TailResponse::empty(StatusCode::NO_CONTENT, headers),
            WindowPlan::Serve(window) => window,
        };

        if let Err(err) = file.seek(window.seek).await {
            log_error!(
                self.logger,
                "failed to seek {:?} to {:?}: {err}",
                path,
                window.seek
            );
            return TailResponse::empty(StatusCode::INTERNAL_SERVER_ERROR, headers);
        }

        let body = match &self.redactor {
            Some(redactor) => {
                let bytes = self.read_redacted(&mut file, &path, &window, redactor).await;
                TailBody::Bytes {
                    bytes,
                    limit: window.limit,
                }
            }
            None => TailBody::File {
                file,
                limit: window.limit,
            },
        };

        headers.plain_text();

        TailResponse {
            status: StatusCode::OK,
            headers: headers.build(),
            body,
        }
    }

    /// Read the window into memory and mask it.
    ///
    /// Only the bytes actually read are matched and served. A failed read is reported
    /// and whatever was read before the failure is still served.
    async fn read_redacted(
        &self,
        file: &mut fs::File,
        path: &Path,
        window: &Window,
        redactor: &Redactor,
    ) -> Bytes {
        let wanted = window.limit.min(window.available);
        let mut buf = Vec::with_capacity(usize::try_from(wanted).unwrap_or(CHUNK_SIZE));

        if let Err(err) = file.take(wanted).read_to_end(&mut buf).await {
            log_error!(self.logger, "failed to read {:?}: {err}", path);
        }

        Bytes::from(redactor.redact(&buf))
    }

    /// Copy the body into `sink`, returning the number of bytes written.
    ///
    /// The status line has already been committed by the time this runs, so short copies
    /// and sink failures are reported to the logger only.
    pub async fn stream_body<S>(&self, body: TailBody, sink: &mut S) -> u64
    where
        S: BodySink + ?Sized,
    {
        let (limit, (copied, result)) = match body {
            TailBody::Empty => return 0,
            TailBody::Bytes { bytes, limit } => {
                let mut reader: &[u8] = &bytes;
                (limit, copy_n(&mut reader, limit, sink).await)
            }
            TailBody::File { mut file, limit } => (limit, copy_n(&mut file, limit, sink).await),
        };

        match result {
            Ok(()) if copied < limit => {
                log_error!(
                    self.logger,
                    "error writing response: copied {copied} of {limit} bytes"
                );
            }
            Ok(()) => {}
            Err(err) => {
                log_error!(self.logger, "error writing response: {err}");
            }
        }

        copied
    }
}

impl std::fmt::Debug for LogTail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogTail")
            .field("path", &self.path)
            .field("redactor", &self.redactor)
            .finish_non_exhaustive()
    }
}

/// Copy at most `limit` bytes from `reader` into `sink`.
///
/// Stops early at end-of-file. The byte count is returned alongside the outcome so
/// partial copies stay visible on failure.
async fn copy_n<R, S>(reader: &mut R, limit: u64, sink: &mut S) -> (u64, io::Result<()>)
where
    R: AsyncRead + Unpin + Send,
    S: BodySink + ?Sized,
{
    let mut copied = 0u64;
    let mut buf = BytesMut::with_capacity(CHUNK_SIZE);

    while copied < limit {
        let to_read = (limit - copied).min(CHUNK_SIZE as u64) as usize;
        buf.resize(to_read, 0);

        let n = match reader.read(&mut buf[..]).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) => return (copied, Err(err)),
        };

        buf.truncate(n);

        if let Err(err) = sink.write_chunk(buf.split().freeze()).await {
            return (copied, Err(err));
        }

        copied += n as u64;
    }

    (copied, Ok(()))
}
