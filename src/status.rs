//! HTTP status codes emitted by the responder.
//!
//! Health answers are always `Ok`. The rest cover requests the responder
//! refuses: bodies it cannot read or decode, and methods it does not serve.

/// The status codes vitals sends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                            // 200

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,                    // 400
    NotFound,                      // 404
    RequestTimeout,                // 408

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,           // 500
    NotImplemented,                // 501
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::BadRequest          => 400,
            Status::NotFound            => 404,
            Status::RequestTimeout      => 408,
            Status::InternalServerError => 500,
            Status::NotImplemented      => 501,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> Self {
        match s {
            Status::Ok                  => Self::OK,
            Status::BadRequest          => Self::BAD_REQUEST,
            Status::NotFound            => Self::NOT_FOUND,
            Status::RequestTimeout      => Self::REQUEST_TIMEOUT,
            Status::InternalServerError => Self::INTERNAL_SERVER_ERROR,
            Status::NotImplemented      => Self::NOT_IMPLEMENTED,
        }
    }
}
