//! Content negotiation between JSON and CSV responses, and JSON request bodies.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::error::ApiError;

/// MIME type for JSON.
pub const MIME_JSON: &str = "application/json";

/// MIME type for CSV.
pub const MIME_CSV: &str = "text/csv";

/// Response format chosen from the Accept header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    /// JSON (default).
    #[default]
    Json,
    /// CSV download.
    Csv,
}

impl ContentFormat {
    /// Parse content format from Accept header value.
    pub fn from_accept(accept: &str) -> Self {
        if accept.to_lowercase().contains(MIME_CSV) {
            ContentFormat::Csv
        } else {
            ContentFormat::Json
        }
    }
}

/// Extractor for the desired response format from Accept header.
pub struct AcceptFormat(pub ContentFormat);

impl<S> FromRequestParts<S> for AcceptFormat
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let format = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(ContentFormat::from_accept)
            .unwrap_or_default();

        Ok(AcceptFormat(format))
    }
}

/// JSON request body whose rejection is an [`ApiError`].
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// CSV body served as a file download.
pub struct CsvResponse {
    filename: &'static str,
    body: Bytes,
}

impl CsvResponse {
    pub fn new(filename: &'static str, body: impl Into<Bytes>) -> Self {
        Self {
            filename,
            body: body.into(),
        }
    }
}

impl IntoResponse for CsvResponse {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/csv; charset=utf-8"),
        );
        if let Ok(disposition) =
            HeaderValue::from_str(&format!("attachment; filename=\"{}\"", self.filename))
        {
            headers.insert(header::CONTENT_DISPOSITION, disposition);
        }
        (StatusCode::OK, headers, self.body).into_response()
    }
}

/// Respond with `value` as JSON, or with `csv()` when CSV was requested.
pub fn negotiate<T, F, E>(
    format: ContentFormat,
    filename: &'static str,
    value: T,
    csv: F,
) -> Result<Response, E>
where
    T: Serialize,
    F: FnOnce() -> Result<String, E>,
{
    match format {
        ContentFormat::Json => Ok(Json(value).into_response()),
        ContentFormat::Csv => Ok(CsvResponse::new(filename, csv()?).into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_accept() {
        assert_eq!(ContentFormat::from_accept("text/csv"), ContentFormat::Csv);
        assert_eq!(
            ContentFormat::from_accept("Text/CSV; charset=utf-8"),
            ContentFormat::Csv
        );
        assert_eq!(ContentFormat::from_accept(MIME_JSON), ContentFormat::Json);
        assert_eq!(ContentFormat::from_accept("*/*"), ContentFormat::Json);
    }
}
