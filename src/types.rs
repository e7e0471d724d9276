//! Types for common values in homework responses.

/// The ID of a homework.
pub type HomeworkId = u64;

pub use crate::time::Timestamp;

use reqwest_middleware::ClientWithMiddleware;

/// The client used for HTTP requests.
pub type HttpClient = ClientWithMiddleware;
