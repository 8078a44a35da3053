//! Route handlers and their boxed form.
//!
//! Anything callable as `Fn(Request) -> impl Future<Output = impl IntoResponse>`
//! is a [`Handler`]: plain `async fn`s, and closures over a `Copy` value such
//! as [`HealthHandler`](crate::HealthHandler):
//!
//! ```text
//! move |req| health.post(req)
//!        ↓ Handler::into_boxed_handler
//! Arc<dyn Fn(Request) -> BoxFuture>     ← one allocation, shared by `/` and `/{*path}`
//!        ↓ per request
//! Box::pin(async { fut.await.into_response() })
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

#[doc(hidden)]
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A handler with its concrete type erased, cloned into every route and
/// connection task that needs it.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

/// Implemented for every valid route handler.
pub trait Handler: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(move |req: Request| -> BoxFuture {
            let fut = self(req);
            Box::pin(async move { fut.await.into_response() })
        })
    }
}
