//! Bearer-token extraction middleware
//!
//! Gates the identity-scoped routes. The gate only checks that an
//! Authorization header is present and carries a whitespace-separated
//! token portion; it attaches the raw token to request extensions without
//! verifying it. Verification happens in the handler that needs an
//! identity, so routes that only require the header's presence stay a
//! pure passthrough.
//!
//! A missing header or one with no token portion is rejected with 403.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};
use tracing::debug;

use crate::error::ApiError;

/// Raw bearer token extracted from the Authorization header
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Layer that applies bearer-token extraction
#[derive(Debug, Clone, Default)]
pub struct BearerAuthLayer;

impl BearerAuthLayer {
    /// Create a new bearer auth layer
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BearerAuth { inner }
    }
}

/// Middleware service for bearer-token extraction
#[derive(Debug, Clone)]
pub struct BearerAuth<S> {
    inner: S,
}

impl<S> Service<Request> for BearerAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok());

            match header.and_then(extract_token) {
                Some(token) => {
                    req.extensions_mut().insert(BearerToken(token));
                    inner.call(req).await
                },
                None => {
                    debug!("Rejected request without a usable Authorization header");
                    Ok(ApiError::Forbidden.into_response())
                },
            }
        })
    }
}

/// Split the header value on whitespace and take the token portion
///
/// `None` for a value with no whitespace-separated token, e.g. a bare
/// scheme or a scheme-less blob.
fn extract_token(header: &str) -> Option<String> {
    let mut parts = header.split_whitespace();
    let _scheme = parts.next()?;
    parts.next().map(ToString::to_string)
}
