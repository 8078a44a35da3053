//! Unified error type.

use std::io;
use std::net::SocketAddr;
use std::string::FromUtf8Error;
use std::time::Duration;

use serde::Serialize;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The error type returned by vitals' fallible operations.
///
/// `Config` and `Bind` are startup failures and end the process. The body
/// variants belong to a single request: they are turned into a response for
/// that request and never reach the accept loop.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {var}={value:?}: {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read request body: {0}")]
    Body(#[from] hyper::Error),

    #[error("request body is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error("request body not received within {0:?}")]
    BodyTimeout(Duration),
}

impl Error {
    fn status(&self) -> Status {
        match self {
            Self::Body(_) | Self::Decode(_) => Status::BadRequest,
            Self::BodyTimeout(_) => Status::RequestTimeout,
            Self::Config { .. } | Self::Bind { .. } | Self::Io(_) => Status::InternalServerError,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match serde_json::to_vec(&ErrorBody { error: self.to_string() }) {
            Ok(body) => Response::builder().status(status).json(body),
            Err(_) => Response::status(status),
        }
    }
}
