//! axum request extraction for multipart uploads
//!
//! [`UploadForm`] is the calling-layer seam: it buffers the request body
//! (bounded by [`UploadConfig::max_body_bytes`]), pulls the boundary out of
//! the Content-Type header, and hands the decoded [`ParsedForm`] to the
//! handler. Rejections convert to HTTP responses through
//! [`IntoResponse`] on [`Error`].
//!
//! The config reaches the extractor through router state ([`FromRef`]), so
//! endpoints share one instance instead of constructing limits per request.

use crate::boundary::extract_boundary;
use crate::config::UploadConfig;
use crate::error::{ApiError, Error};
use crate::multipart::ParsedForm;
use axum::{
    Json, async_trait,
    extract::{FromRef, FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Buffered multipart upload extractor.
///
/// # Example
///
/// ```no_run
/// use axum::{Router, routing::post};
/// use formpart::{FormatPolicy, UploadConfig, UploadForm};
///
/// async fn upload_receipt(UploadForm(form): UploadForm) -> Result<String, formpart::Error> {
///     let receipt = form.require_file("file")?;
///     let file_name = receipt.file_name.as_deref().unwrap_or("receipt.jpg");
///     let data = receipt.bytes().unwrap_or_default();
///     if !FormatPolicy::Permissive.accepts(file_name, data) {
///         return Err(formpart::Error::UnsupportedFormat {
///             file_name: file_name.to_string(),
///         });
///     }
///     Ok(format!("stored {} bytes", data.len()))
/// }
///
/// let app: Router = Router::new()
///     .route("/receipts", post(upload_receipt))
///     .with_state(UploadConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct UploadForm(pub ParsedForm);

#[async_trait]
impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
    UploadConfig: FromRef<S>,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let config = UploadConfig::from_ref(state);

        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type
            .trim_start()
            .to_ascii_lowercase()
            .starts_with("multipart/form-data")
        {
            return Err(Error::NotMultipart);
        }

        let boundary = extract_boundary(&content_type).ok_or(Error::MissingBoundary)?;

        let body = axum::body::to_bytes(req.into_body(), config.max_body_bytes)
            .await
            .map_err(|error| {
                tracing::warn!(
                    %error,
                    limit_bytes = config.max_body_bytes,
                    "failed to buffer upload body"
                );
                Error::BodyTooLarge {
                    limit_bytes: config.max_body_bytes,
                }
            })?;

        Ok(UploadForm(ParsedForm::parse(&body, &boundary)))
    }
}

/// Convert errors to HTTP responses with the structured JSON error body
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body: ApiError = self.into();

        (status, Json(body)).into_response()
    }
}
