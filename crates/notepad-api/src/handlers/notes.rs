//! Note handlers: new-note redirect, read (editor or raw), save.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, info};

use notepad_core::NoteId;
use notepad_store::WriteOutcome;

use crate::error::ApiError;
use crate::negotiation::{BodyEncoding, ResponseMode};
use crate::render::render_editor;
use crate::state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const TEXT_HTML: &str = "text/html; charset=utf-8";

/// `GET /`: redirect to a freshly generated note id.
///
/// The target is not checked for an existing note; at the default id space
/// a collision lands on someone else's note, which is accepted.
pub async fn new_note(State(state): State<AppState>) -> Result<Response, ApiError> {
    let id = state.ids.generate();
    let location = HeaderValue::try_from(format!("/{}", id))
        .map_err(|e| ApiError::Internal(format!("generated id is not a valid header: {}", e)))?;

    debug!(subsystem = "api", note_id = %id, "Redirecting to new note");

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
    )
        .into_response())
}

/// `GET /:id`: the editor page, or the bare text in raw mode.
///
/// The id is validated before the store is touched.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let id = NoteId::parse(&id)?;
    let mode = ResponseMode::from_request(query.as_deref(), &headers);
    let content = state.notes.read(&id).await?;

    debug!(
        subsystem = "api",
        note_id = %id,
        raw_mode = mode == ResponseMode::Raw,
        found = content.is_some(),
        "Note fetched"
    );

    match mode {
        ResponseMode::Raw => match content {
            Some(text) => Ok((
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN)),
                    (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
                ],
                text,
            )
                .into_response()),
            None => Err(ApiError::NotFound),
        },
        ResponseMode::Editor => {
            let page = render_editor(&id, content.as_deref().unwrap_or(""));
            Ok((
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static(TEXT_HTML)),
                    (
                        header::CACHE_CONTROL,
                        HeaderValue::from_static("no-store, must-revalidate"),
                    ),
                    (
                        header::X_CONTENT_TYPE_OPTIONS,
                        HeaderValue::from_static("nosniff"),
                    ),
                    (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
                ],
                page,
            )
                .into_response())
        }
    }
}

/// `POST /:id`: replace the note with the request body. Empty text deletes.
///
/// Form bodies carry the text in the `text` field; any other content type is
/// taken as the text itself.
pub async fn save_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = NoteId::parse(&id)?;
    let encoding = BodyEncoding::from_headers(&headers);
    let text = encoding.decode(&body)?;

    let outcome = state.notes.write(&id, &text).await?;
    let reply = match outcome {
        WriteOutcome::Saved => "Saved",
        WriteOutcome::Deleted => "Deleted",
    };

    info!(
        subsystem = "api",
        note_id = %id,
        content_len = text.len(),
        form = encoding == BodyEncoding::Form,
        outcome = reply,
        "Note written"
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN)),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
        reply,
    )
        .into_response())
}
