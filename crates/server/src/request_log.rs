// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response logging middleware.
//!
//! Every request is logged once on completion with its method, path,
//! status and latency. Server errors log at `error`, client errors at
//! `warn`.

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Logs the outcome of each request passing through the router.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method: Method = request.method().clone();
    let path: String = request.uri().path().to_string();
    let started: Instant = Instant::now();

    let response: Response = next.run(request).await;

    let status: StatusCode = response.status();
    let elapsed: Duration = started.elapsed();
    let latency_ms: u64 = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if status.is_server_error() {
        error!(%method, %path, status = status.as_u16(), latency_ms, "Request failed");
    } else if status.is_client_error() {
        warn!(%method, %path, status = status.as_u16(), latency_ms, "Request rejected");
    } else {
        info!(%method, %path, status = status.as_u16(), latency_ms, "Request completed");
    }

    response
}
