//! Cross-cutting response middleware
//!
//! Static security headers and CORS rules, applied uniformly to every
//! response. Nothing here is negotiated per-request: the rules are fixed at
//! compile time.

use axum::{
  Router,
  extract::Request,
  http::{HeaderValue, Method, StatusCode, header},
  middleware::{self, Next},
  response::{IntoResponse, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// `Strict-Transport-Security` value sent with every response
pub const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";

const CORS_ALLOW_ORIGIN: &str = "*";
const CORS_ALLOW_CREDENTIALS: &str = "true";
const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";
const CORS_ALLOW_HEADERS: &str = "Content-Type, Accept";

/// Wraps the router with the full middleware stack
///
/// Ordering (outermost first): trace, security headers, CORS. The CORS
/// layer sits innermost so preflight short-circuits still pass through the
/// header layers on the way out.
pub fn apply_layers(router: Router) -> Router {
  router
    .layer(middleware::from_fn(cors))
    .layer(SetResponseHeaderLayer::overriding(
      header::STRICT_TRANSPORT_SECURITY,
      HeaderValue::from_static(HSTS_VALUE),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::X_CONTENT_TYPE_OPTIONS,
      HeaderValue::from_static("nosniff"),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::X_FRAME_OPTIONS,
      HeaderValue::from_static("DENY"),
    ))
    .layer(TraceLayer::new_for_http())
}

/// Static CORS middleware
///
/// All origins allowed, credentials allowed, methods restricted to
/// POST/OPTIONS, headers restricted to Content-Type/Accept. OPTIONS
/// preflight requests are answered directly without reaching the router.
async fn cors(request: Request, next: Next) -> Response {
  if request.method() == Method::OPTIONS {
    let mut response = StatusCode::OK.into_response();
    insert_cors_headers(&mut response);
    return response;
  }

  let mut response = next.run(request).await;
  insert_cors_headers(&mut response);
  response
}

fn insert_cors_headers(response: &mut Response) {
  let headers = response.headers_mut();
  headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(CORS_ALLOW_ORIGIN));
  headers
    .insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static(CORS_ALLOW_CREDENTIALS));
  headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(CORS_ALLOW_METHODS));
  headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(CORS_ALLOW_HEADERS));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cors_header_values_are_valid_header_bytes() {
    // from_static panics on invalid header bytes
    let _ = HeaderValue::from_static(CORS_ALLOW_ORIGIN);
    let _ = HeaderValue::from_static(CORS_ALLOW_CREDENTIALS);
    let _ = HeaderValue::from_static(CORS_ALLOW_METHODS);
    let _ = HeaderValue::from_static(CORS_ALLOW_HEADERS);
    assert!(CORS_ALLOW_METHODS.contains("POST") && CORS_ALLOW_METHODS.contains("OPTIONS"));
    assert!(CORS_ALLOW_HEADERS.contains("Content-Type") && CORS_ALLOW_HEADERS.contains("Accept"));
  }

  #[test]
  fn hsts_value_sets_max_age() {
    assert!(HSTS_VALUE.starts_with("max-age="));
  }
}
