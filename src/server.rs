//! HTTP server.
//!
//! # Connection model
//!
//! One tokio task per accepted connection, each driven by hyper's HTTP/1.1
//! connection builder. The router is shared read-only behind an `Arc`; the
//! handlers hold nothing mutable, so tasks never coordinate.
//!
//! A failed connection (client hung up mid-body, malformed request line) is
//! logged and dropped with its task. The accept loop keeps going.
//!
//! There is no shutdown path: [`Server::serve`] runs until the process is
//! killed.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::Error;
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::{Miss, Router};
use crate::status::Status;

/// The HTTP server.
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Binds the listener on the configured host and port.
    ///
    /// Fails with [`Error::Bind`] when the address is in use or not
    /// permitted.
    pub async fn bind(config: &Config) -> Result<Self, Error> {
        let addr = config.addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        Self::from_listener(listener)
    }

    /// Serves on a listener the caller has already bound.
    pub fn from_listener(listener: TcpListener) -> Result<Self, Error> {
        let addr = listener.local_addr()?;
        Ok(Self { listener, addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Accepts connections forever, dispatching each request through `router`.
    pub async fn serve(self, router: Router) {
        let router = Arc::new(router);

        info!(host = %self.addr.ip(), port = self.addr.port(), "starting server");

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(v) => v,
                Err(e) => {
                    error!("accept error: {e}");
                    continue;
                }
            };

            let router = Arc::clone(&router);
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                // Called once per request on the connection.
                let svc = service_fn(move |req| dispatch(Arc::clone(&router), req));

                if let Err(e) = http1::Builder::new().serve_connection(io, svc).await {
                    error!(%peer, "connection error: {e}");
                }
            });
        }
    }
}

/// Routes one request and produces one response.
///
/// Every failure is already a response by the time it gets here, so hyper
/// never sees an error.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let token = req.method().clone();
    let target = req.uri().to_string();

    let response = match token.as_str().parse::<Method>() {
        Ok(method) => {
            let route = router.lookup(method, req.uri().path());
            match route {
                Ok(handler) => handler(Request::from_hyper(req, method)).await,
                Err(Miss::Method) => Response::status(Status::NotImplemented),
                Err(Miss::Path) => Response::status(Status::NotFound),
            }
        }
        Err(()) => Response::status(Status::NotImplemented),
    };

    debug!(
        method = %token,
        path = %target,
        status = u16::from(response.status_code()),
        "handled request"
    );

    Ok(response.into_inner())
}
