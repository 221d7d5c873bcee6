//! hyper-based HTTP/1.1 transport.
//!
//! Owns everything wire-level: accepting connections, converting hyper
//! requests into the seam types from [`crate::http`], and writing responses
//! back out. The caching core never sees a socket.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper::StatusCode;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

use crate::http::{Handler, Request, Response};

/// Minimal HTTP server that forwards every request to a [`Handler`].
pub struct HttpServer {
    handler: Arc<dyn Handler>,
}

impl HttpServer {
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// Accepts connections on `addr` until the process exits, one spawned
    /// task per connection.
    pub async fn listen(self, addr: SocketAddr) -> std::io::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "Server listening");

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let handler = self.handler.clone();

            tokio::spawn(async move {
                if let Err(err) = Self::handle_connection(stream, handler).await {
                    error!(%remote_addr, error = %err, "Connection error");
                }
            });
        }
    }

    async fn handle_connection(
        stream: TcpStream,
        handler: Arc<dyn Handler>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let io = TokioIo::new(stream);
        http1::Builder::new()
            .serve_connection(io, RequestService { handler })
            .await?;
        Ok(())
    }
}

/// Service implementation bridging hyper to the [`Handler`] seam.
struct RequestService {
    handler: Arc<dyn Handler>,
}

impl Service<hyper::Request<Incoming>> for RequestService {
    type Response = hyper::Response<Full<Bytes>>;
    type Error = Box<dyn std::error::Error + Send + Sync>;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
        let handler = self.handler.clone();

        Box::pin(async move {
            let (parts, _body) = req.into_parts();
            let request = Request::new(parts.method, parts.uri, parts.headers);

            let response = match handler.handle(request).await {
                Ok(response) => response,
                Err(err) => {
                    error!(error = %err, "Handler failed");
                    Response::new(StatusCode::INTERNAL_SERVER_ERROR)
                }
            };

            let mut builder = hyper::Response::builder().status(response.status);
            if let Some(headers) = builder.headers_mut() {
                headers.extend(response.headers);
            }
            Ok(builder.body(Full::new(response.body))?)
        })
    }
}
