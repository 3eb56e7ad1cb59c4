use axum::{
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag every request/response pair with an id and run the handler inside a
/// tracing span carrying it. A caller-supplied id is kept; otherwise one is
/// generated.
pub async fn request_id_middleware(mut request: Request<axum::body::Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!("request", request_id = %request_id);

    match HeaderValue::from_str(&request_id) {
        Ok(value) => {
            request.headers_mut().insert(REQUEST_ID_HEADER, value.clone());
            let mut response = next.run(request).instrument(span).await;
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
            response
        }
        // A caller-supplied id that is not a valid header value is dropped.
        Err(_) => next.run(request).instrument(span).await,
    }
}
