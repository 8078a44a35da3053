//! The health responder.
//!
//! Every GET and POST, on any path, gets `200 OK` and a JSON status:
//!
//! ```text
//! GET  /foo?x=1       → {"status":"healthy","port":8080,"method":"GET","path":"/foo?x=1"}
//! POST /submit hello  → {"status":"healthy","port":8080,"method":"POST","path":"/submit","body_received":true}
//! ```
//!
//! Other methods never reach this module; the server answers them with
//! `501 Not Implemented`.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Error;
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;

const HEALTHY: &str = "healthy";

/// The JSON body of every health answer. Built per request, never stored.
#[derive(Debug, Serialize)]
pub struct HealthResponse<'a> {
    pub status: &'static str,
    pub port: u16,
    pub method: &'static str,
    pub path: &'a str,
    /// Present on POST answers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_received: Option<bool>,
}

/// Answers probes with the port captured at startup.
#[derive(Clone, Copy, Debug)]
pub struct HealthHandler {
    port: u16,
    body_read_timeout: Option<Duration>,
}

impl HealthHandler {
    pub fn new(config: &Config) -> Self {
        Self { port: config.port, body_read_timeout: config.body_read_timeout }
    }

    /// A router serving GET and POST on every path.
    pub fn router(self) -> Router {
        Router::new()
            .any_path(Method::Get, move |req| self.get(req))
            .any_path(Method::Post, move |req| self.post(req))
    }

    /// GET: the body, if any, is left unread.
    pub async fn get(self, req: Request) -> Response {
        Json(self.status(Method::Get, req.target(), None)).into_response()
    }

    /// POST: reads the declared body and reports whether it was non-empty.
    ///
    /// Only a `Content-Length` body counts. A body sent without one (chunked)
    /// is drained and reported as not received.
    pub async fn post(self, mut req: Request) -> Response {
        let received = match req.content_length() {
            Some(_) => self.bounded(req.text()).await.map(|body| !body.is_empty()),
            None => self.bounded(req.discard_body()).await.map(|()| false),
        };

        match received {
            Ok(received) => {
                debug!(path = req.target(), received, "read request body");
                Json(self.status(Method::Post, req.target(), Some(received))).into_response()
            }
            Err(e) => {
                warn!(
                    path = req.target(),
                    content_length = req.content_length(),
                    error = %e,
                    "abandoning request"
                );
                e.into_response()
            }
        }
    }

    fn status<'a>(
        &self,
        method: Method,
        path: &'a str,
        body_received: Option<bool>,
    ) -> HealthResponse<'a> {
        HealthResponse {
            status: HEALTHY,
            port: self.port,
            method: method.as_str(),
            path,
            body_received,
        }
    }

    async fn bounded<T>(&self, read: impl Future<Output = Result<T, Error>>) -> Result<T, Error> {
        match self.body_read_timeout {
            Some(limit) => tokio::time::timeout(limit, read)
                .await
                .map_err(|_| Error::BodyTimeout(limit))?,
            None => read.await,
        }
    }
}
