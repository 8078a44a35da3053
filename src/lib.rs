//! # vitals
//!
//! A catch-all HTTP responder for liveness and readiness probes.
//!
//! Every GET and POST, on any path, is answered `200 OK` with a JSON status
//! echoing the method and the request target. POST answers also say whether
//! a body arrived. Other methods get `501 Not Implemented`.
//!
//! What the proxy or orchestrator already owns, vitals ignores: TLS,
//! authentication, rate limiting, request validation.
//!
//! ## Running
//!
//! ```text
//! PORT=9090 RUST_LOG=vitals=debug vitals
//! curl http://localhost:9090/foo?x=1
//! {"status":"healthy","port":9090,"method":"GET","path":"/foo?x=1"}
//! ```
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use vitals::{Config, HealthHandler, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vitals::Error> {
//!     let config = Config::from_env()?;
//!     let server = Server::bind(&config).await?;
//!     server.serve(HealthHandler::new(&config).router()).await;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod handler;
mod health;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub use config::{Config, DEFAULT_HOST, DEFAULT_PORT};
pub use error::Error;
pub use handler::Handler;
pub use health::{HealthHandler, HealthResponse};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
