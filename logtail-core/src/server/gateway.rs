use crate::tail::{BodySink, LogTail, TailBody};
use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use pingora::prelude::*;
use pingora_http::ResponseHeader;
use std::io;
use std::sync::Arc;

/// Answers every request locally; nothing is ever proxied upstream.
pub struct LogTailGateway {
    route: String,
    tail: Arc<LogTail>,
}

impl LogTailGateway {
    pub fn new(route: String, tail: Arc<LogTail>) -> Self {
        Self { route, tail }
    }
}

struct SessionSink<'a> {
    session: &'a mut Session,
}

#[async_trait]
impl BodySink for SessionSink<'_> {
    async fn write_chunk(&mut self, chunk: Bytes) -> io::Result<()> {
        self.session
            .write_response_body(Some(chunk), false)
            .await
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

#[async_trait]
impl ProxyHttp for LogTailGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> Result<Box<HttpPeer>> {
        Err(Error::new(Custom("logtail has no upstream")))
    }

    async fn request_filter(&self, session: &mut Session, _ctx: &mut Self::CTX) -> Result<bool> {
        let req = session.req_header();
        let on_route = req.uri.path() == self.route;
        let is_head = req.method == Method::HEAD;
        let query = req.uri.query().map(str::to_owned);

        if !on_route {
            session.respond_error(StatusCode::NOT_FOUND.as_u16()).await?;
            return Ok(true);
        }

        let resp = self.tail.handle(query.as_deref()).await;

        let mut header = ResponseHeader::build(resp.status, None)?;
        for (name, value) in resp.headers.iter() {
            header.insert_header(name, value)?;
        }

        let end_of_stream = is_head || matches!(resp.body, TailBody::Empty);
        session
            .write_response_header(Box::new(header), end_of_stream)
            .await?;

        tracing::debug!(status = resp.status.as_u16(), query = ?query, "logtail response");

        if end_of_stream {
            return Ok(true);
        }

        // The status is already on the wire; copy failures are reported by the handler.
        self.tail
            .stream_body(resp.body, &mut SessionSink { session: &mut *session })
            .await;

        if let Err(err) = session.write_response_body(None, true).await {
            tracing::debug!(error = %err, "failed to finish logtail response");
        }

        Ok(true)
    }
}
