use http::{HeaderValue, Method, header::CONTENT_TYPE, header::InvalidHeaderValue};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS for a site served from another origin than the API.
///
/// Only the listed origins may call the API, and only with JSON bodies.
pub fn cors_layer<S: AsRef<str>>(origins: &[S]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin.as_ref().trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]))
}
