//! Embed page endpoint.
//!
//! `GET /media-embed?id=&t=&end=&page=` resolves a media identifier to a
//! file in the media directory and returns a complete HTML page embedding
//! it. Each request runs the same linear sequence: validate, sanitize,
//! check existence, classify, render.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::AppContext;
use crate::embed::{self, EmbedQuery, FragmentParams};

/// Failures surfaced by the embed endpoint.
///
/// An unsupported file type is not a failure: the file exists, so the
/// renderer answers 200 with an explanatory fragment instead.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The `id` parameter was absent, or empty after sanitization.
    #[error("Media ID is required")]
    MissingId,

    /// The sanitized identifier does not name a file in the media directory.
    #[error("File not found")]
    NotFound,
}

impl EmbedError {
    /// Map this error to its HTTP status code.
    pub fn http_status(&self) -> StatusCode {
        match self {
            EmbedError::MissingId => StatusCode::BAD_REQUEST,
            EmbedError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for EmbedError {
    fn into_response(self) -> Response {
        (self.http_status(), self.to_string()).into_response()
    }
}

/// Render the embed page for one media file.
pub async fn media_embed(
    State(ctx): State<AppContext>,
    Query(query): Query<EmbedQuery>,
) -> Result<Html<String>, EmbedError> {
    let id = query.id.as_deref().unwrap_or("");
    let safe_id = embed::sanitize_media_id(id).ok_or(EmbedError::MissingId)?;

    let media_path = ctx.media_dir.join(&safe_id);
    if tokio::fs::metadata(&media_path).await.is_err() {
        tracing::warn!("Media file not found: {:?}", media_path);
        return Err(EmbedError::NotFound);
    }

    let kind = embed::classify(&safe_id);
    let params = FragmentParams {
        t: query.t.as_deref(),
        end: query.end.as_deref(),
        page: query.page.as_deref(),
    };

    let fragment = embed::render_fragment(&kind, &safe_id, &params);
    Ok(Html(embed::render_document(&fragment)))
}
