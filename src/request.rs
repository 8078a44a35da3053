//! Incoming HTTP request type.

use bytes::Bytes;
use http::HeaderMap;
use http::header::CONTENT_LENGTH;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty};

use crate::error::Error;
use crate::method::Method;

type Body = UnsyncBoxBody<Bytes, hyper::Error>;

/// An incoming HTTP request.
///
/// The body is not read until a handler asks for it, so handlers that ignore
/// it (GET) never wait on the client.
pub struct Request {
    method: Method,
    target: String,
    headers: HeaderMap,
    body: Body,
}

impl Request {
    pub(crate) fn from_hyper(req: hyper::Request<hyper::body::Incoming>, method: Method) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method,
            // hyper keeps only the parsed `Uri`. Path and query render back
            // byte-for-byte; a `#fragment` does not survive parsing.
            target: parts.uri.to_string(),
            headers: parts.headers,
            body: body.boxed_unsync(),
        }
    }

    pub fn method(&self) -> Method { self.method }

    /// The request target from the request line, query string included and
    /// any fragment dropped.
    pub fn target(&self) -> &str { &self.target }

    /// Case-insensitive header lookup. Values that are not visible ASCII are
    /// treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The declared `Content-Length`, if any.
    ///
    /// hyper refuses requests whose header does not parse, so `None` here
    /// means the client declared no length (possibly sending a chunked body).
    pub fn content_length(&self) -> Option<u64> {
        self.header(CONTENT_LENGTH.as_str()).and_then(|v| v.trim().parse().ok())
    }

    /// Reads the whole body as hyper framed it: `Content-Length` bytes, the
    /// decoded chunks of a chunked body, or nothing. The body can be taken
    /// once; later calls return empty.
    pub async fn bytes(&mut self) -> Result<Bytes, Error> {
        Ok(self.take_body().collect().await?.to_bytes())
    }

    /// Reads and drops the body so the connection stays in sync.
    pub async fn discard_body(&mut self) -> Result<(), Error> {
        let mut body = self.take_body();
        while let Some(frame) = body.frame().await {
            frame?;
        }
        Ok(())
    }

    /// Reads the whole body and decodes it as UTF-8.
    pub async fn text(&mut self) -> Result<String, Error> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    fn take_body(&mut self) -> Body {
        std::mem::replace(&mut self.body, empty())
    }
}

fn empty() -> Body {
    Empty::<Bytes>::new().map_err(|never| match never {}).boxed_unsync()
}

#[cfg(test)]
impl Request {
    /// A request whose body is framed by a matching `Content-Length`.
    pub(crate) fn for_test(method: Method, target: &str, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        let mut req = Self::unframed_for_test(method, target, body.clone());
        req.headers.insert(CONTENT_LENGTH, body.len().into());
        req
    }

    /// A request carrying a body but no `Content-Length`, as a chunked
    /// request reaches the handler.
    pub(crate) fn unframed_for_test(method: Method, target: &str, body: impl Into<Bytes>) -> Self {
        use http_body_util::Full;

        Self {
            method,
            target: target.to_owned(),
            headers: HeaderMap::new(),
            body: Full::new(body.into()).map_err(|never| match never {}).boxed_unsync(),
        }
    }
}
