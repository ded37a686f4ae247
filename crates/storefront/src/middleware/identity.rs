//! Customer identity extraction.
//!
//! Authentication itself lives in the upstream proxy; by the time a request
//! reaches this service the proxy has verified the session and, for signed-in
//! customers, set the `x-customer-id` header. The extractor surfaces that as
//! an `Option` and never rejects the request - anonymous browsing is a
//! normal state, not an error.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crystal_harmony_core::CustomerId;

/// Header set by the authentication proxy for signed-in customers.
pub const CUSTOMER_ID_HEADER: &str = "x-customer-id";

/// The optional customer identity bound to a request.
#[derive(Debug, Clone)]
pub struct CustomerIdentity(pub Option<CustomerId>);

impl CustomerIdentity {
    /// The identity, when the customer is signed in.
    #[must_use]
    pub fn customer(&self) -> Option<&CustomerId> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for CustomerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .headers
            .get(CUSTOMER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(CustomerId::new);

        Ok(Self(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> CustomerIdentity {
        let (mut parts, ()) = request.into_parts();
        CustomerIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap_or_else(|never| match never {})
    }

    #[tokio::test]
    async fn test_header_present() {
        let request = Request::builder()
            .header(CUSTOMER_ID_HEADER, "customer-42")
            .body(())
            .expect("request");
        let identity = extract(request).await;
        assert_eq!(
            identity.customer().map(CustomerId::as_str),
            Some("customer-42")
        );
    }

    #[tokio::test]
    async fn test_header_absent_is_anonymous() {
        let request = Request::builder().body(()).expect("request");
        let identity = extract(request).await;
        assert!(identity.customer().is_none());
    }

    #[tokio::test]
    async fn test_blank_header_is_anonymous() {
        let request = Request::builder()
            .header(CUSTOMER_ID_HEADER, "  ")
            .body(())
            .expect("request");
        let identity = extract(request).await;
        assert!(identity.customer().is_none());
    }
}
