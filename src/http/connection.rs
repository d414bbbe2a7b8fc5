use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::files::Resolver;
use crate::http::parser::{find_headers_end, parse_request, ParseError};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Largest request head accepted before answering 400, whether or not its
/// terminating blank line has arrived.
pub const MAX_REQUEST_HEAD: usize = 64 * 1024;

const READ_CHUNK: usize = 1024;

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    resolver: Resolver,
    io_timeout: Duration,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(String),
    Writing(ResponseWriter),
    Closed,
}

/// Outcome of the read phase.
enum Received {
    Request(String),
    TooLarge,
    Nothing,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// `io_timeout` bounds reading the request and, separately, writing the
    /// response.
    pub fn new(stream: S, resolver: Resolver, io_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            resolver,
            io_timeout,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request, then shuts the stream down.
    ///
    /// Errors are connection faults (timeout, reset, undecodable bytes); the
    /// caller logs them and moves on to the next client.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        // Best effort: the peer may already be gone.
        let _ = self.stream.shutdown().await;
        self.state = ConnectionState::Closed;
        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let limit = self.io_timeout;
                    let received = timeout(limit, self.read_request())
                        .await
                        .map_err(|_| anyhow::anyhow!("timed out after {:?} waiting for request", limit))??;

                    self.state = match received {
                        Received::Request(raw) => ConnectionState::Processing(raw),
                        Received::TooLarge => {
                            tracing::warn!(limit = MAX_REQUEST_HEAD, "Request head too large");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        Received::Nothing => {
                            tracing::debug!("Client closed without sending a request");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Processing(raw) => {
                    let response = handle_request(raw, &self.resolver);
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    let limit = self.io_timeout;
                    timeout(limit, writer.write_to_stream(&mut self.stream))
                        .await
                        .map_err(|_| anyhow::anyhow!("timed out after {:?} while writing response", limit))??;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the end of the request head or until the peer stops sending.
    async fn read_request(&mut self) -> anyhow::Result<Received> {
        loop {
            if let Some(end) = find_headers_end(&self.buffer) {
                if end > MAX_REQUEST_HEAD {
                    return Ok(Received::TooLarge);
                }
                break;
            }

            if self.buffer.len() > MAX_REQUEST_HEAD {
                return Ok(Received::TooLarge);
            }

            self.buffer.reserve(READ_CHUNK);
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed its side
                break;
            }
        }

        if self.buffer.is_empty() {
            return Ok(Received::Nothing);
        }

        let raw = std::str::from_utf8(&self.buffer)
            .map_err(|e| anyhow::anyhow!("request is not valid UTF-8: {}", e))?
            .to_string();
        self.buffer.clear();

        Ok(Received::Request(raw))
    }
}

/// Turns raw request text into the response to send back.
///
/// Parse failures never reach the filesystem. Resolve failures of any kind
/// become the same 404 so nothing about the underlying error leaks.
pub fn handle_request(raw: &str, resolver: &Resolver) -> Response {
    tracing::debug!(request = raw, "Request received");

    let request = match parse_request(raw) {
        Ok(request) => request,
        Err(ParseError::UnsupportedMethod(method)) => {
            tracing::info!(method = %method, status = 405, "Rejected request method");
            return Response::method_not_allowed();
        }
        Err(ParseError::Malformed) => {
            tracing::info!(status = 400, "Malformed request line");
            return Response::bad_request();
        }
    };

    match resolver.resolve(&request.path) {
        Ok(resource) => {
            tracing::info!(method = request.method.as_str(), path = %request.path, status = 200, bytes = resource.content.len(), "Serving");
            Response::ok(resource.content, resource.mime_type.as_deref())
        }
        Err(e) => {
            tracing::info!(path = %request.path, status = 404, error = %e, "Not found");
            Response::not_found()
        }
    }
}
