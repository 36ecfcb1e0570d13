//! Axum extractor for [`ApiKey`].

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::api_key::{ApiKey, AuthError};

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Reuse the key stored by api_key_middleware when it ran first.
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        ApiKey::from_headers(&parts.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};

    async fn extract(request: Request<Body>) -> Result<ApiKey, AuthError> {
        let (mut parts, _) = request.into_parts();
        ApiKey::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_from_headers() {
        let request = Request::builder()
            .header("Authorization", "ApiKey 12345")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract(request).await.unwrap().as_str(), "12345");
    }

    #[tokio::test]
    async fn test_rejects_missing_header() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(extract(request).await, Err(AuthError::NoAuthHeader));
    }

    #[tokio::test]
    async fn test_prefers_extension() {
        let mut request = Request::builder()
            .header("Authorization", "Bearer nope")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(ApiKey::from("from-middleware"));
        assert_eq!(extract(request).await.unwrap().as_str(), "from-middleware");
    }
}
