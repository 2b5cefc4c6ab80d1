//! The seam between the deterministic core and whoever performs I/O.

use std::future::Future;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one request and hands back whatever the server answered.
///
/// Non-2xx statuses are responses, not errors: status interpretation belongs
/// to `RecordClient`. Only failures to complete the round-trip map to
/// `ApiError::Transport`. Implementations must not retry.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

