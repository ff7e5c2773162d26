// HTTP response utilities for rendered pages
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";

/// Build a response with an explicit content type and length
pub fn text_response(
    status: StatusCode,
    content_type: &'static str,
    body: String,
) -> Result<Response<Body>, StatusCode> {
    let length = HeaderValue::from_str(&body.len().to_string()).map_err(|e| {
        tracing::error!("Invalid content length header: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, length)
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

pub fn html_response(status: StatusCode, body: String) -> Result<Response<Body>, StatusCode> {
    text_response(status, HTML_CONTENT_TYPE, body)
}

pub fn css_response(body: String) -> Result<Response<Body>, StatusCode> {
    text_response(StatusCode::OK, CSS_CONTENT_TYPE, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_response_headers() {
        let response = html_response(StatusCode::NOT_FOUND, "<p>x</p>".to_string()).unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], HTML_CONTENT_TYPE);
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "8");
    }
}
