//! Request inspection: which response mode a GET wants, and how a POST body
//! is encoded.

use axum::http::{header, HeaderMap};
use serde::Deserialize;

use notepad_core::{defaults, Error, Result};

/// How a note is returned on GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Plain text, 404 when absent.
    Raw,
    /// HTML editor page, empty when absent.
    Editor,
}

impl ResponseMode {
    /// Raw when the query string has a `raw` parameter (any value) or the
    /// User-Agent belongs to a known command-line client.
    pub fn from_request(query: Option<&str>, headers: &HeaderMap) -> Self {
        if query.is_some_and(has_raw_param) || is_cli_user_agent(headers) {
            ResponseMode::Raw
        } else {
            ResponseMode::Editor
        }
    }
}

fn has_raw_param(query: &str) -> bool {
    serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .map(|pairs| pairs.iter().any(|(key, _)| key == "raw"))
        .unwrap_or(false)
}

fn is_cli_user_agent(headers: &HeaderMap) -> bool {
    headers
        .get(header::USER_AGENT)
        .and_then(|ua| ua.to_str().ok())
        .is_some_and(|ua| {
            defaults::RAW_USER_AGENT_PREFIXES
                .iter()
                .any(|prefix| ua.starts_with(prefix))
        })
}

/// Recognised POST body encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/x-www-form-urlencoded`, note text in the `text` field.
    Form,
    /// Anything else: the body is the note text.
    Raw,
}

#[derive(Debug, Deserialize)]
struct NoteForm {
    #[serde(default)]
    text: String,
}

impl BodyEncoding {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let essence = headers
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .and_then(|ct| ct.split(';').next())
            .map(str::trim);

        match essence {
            Some(mime) if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") => {
                BodyEncoding::Form
            }
            _ => BodyEncoding::Raw,
        }
    }

    /// Extract the note text from a body in this encoding. A form without a
    /// `text` field yields empty text. Invalid UTF-8 in a raw body is
    /// replaced, not rejected.
    pub fn decode(self, body: &[u8]) -> Result<String> {
        match self {
            BodyEncoding::Form => serde_urlencoded::from_bytes::<NoteForm>(body)
                .map(|form| form.text)
                .map_err(|e| Error::InvalidInput(format!("malformed form body: {}", e))),
            BodyEncoding::Raw => Ok(String::from_utf8_lossy(body).into_owned()),
        }
    }
}
