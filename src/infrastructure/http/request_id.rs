use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Longest caller-supplied id that is echoed back
const MAX_FORWARDED_ID_LEN: usize = 128;

/// Tag every request with an id and echo it in the response headers.
/// A caller-supplied `x-request-id` is kept, otherwise a v4 uuid is generated.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = forwarded_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

fn forwarded_id(request: &Request) -> Option<String> {
    let value = request.headers().get(X_REQUEST_ID)?.to_str().ok()?.trim();
    let usable = !value.is_empty()
        && value.len() <= MAX_FORWARDED_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    usable.then(|| value.to_string())
}

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);
