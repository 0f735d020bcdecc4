use axum::{
    body::Body,
    http::{header, Response, StatusCode, Uri},
    response::IntoResponse,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "../frontend/dist/"]
struct Assets;

/// Whether the sign-in bundle was built before this binary.
pub fn assets_embedded() -> bool {
    Assets::get("index.html").is_some()
}

fn respond(status: StatusCode, content_type: &str, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    if let Ok(value) = header::HeaderValue::from_str(content_type) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

pub async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return respond(StatusCode::OK, mime.as_ref(), Body::from(content.data.into_owned()));
    }

    // Unknown paths get the page itself; the router in the bundle redirects.
    if let Some(content) = Assets::get("index.html") {
        return respond(StatusCode::OK, "text/html", Body::from(content.data.into_owned()));
    }

    tracing::debug!("No embedded asset for /{}", path);
    respond(StatusCode::NOT_FOUND, "text/plain", Body::from("Not Found"))
}
