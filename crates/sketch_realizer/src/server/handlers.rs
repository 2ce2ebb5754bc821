//! Route handlers.

use super::{AppState, PageView};
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use sketch_core::StyleChoice;
use sketch_error::{ServerError, ServerErrorKind, SketchError};
use tracing::{debug, error, instrument, warn};

const MISSING_IMAGE: &str = "Please upload a drawing (png, jpg or jpeg).";

/// Render the page or fall back to a bare 500.
fn render(state: &AppState, status: StatusCode, view: PageView) -> Response {
    match state.pages.render(&view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Render a rejected submission with its one message.
fn reject(state: &AppState, status: StatusCode, view: PageView, message: String) -> Response {
    let err = SketchError::from(ServerError::new(ServerErrorKind::Form(message)));
    warn!(error = %err, status = %status, "Rejected form submission");
    render(state, status, view.with_error(err.user_message()))
}

/// Empty form.
pub async fn index(State(state): State<AppState>) -> Response {
    render(&state, StatusCode::OK, PageView::default())
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Run the pipeline on a multipart submission with `image` and `style` fields.
#[instrument(skip_all)]
pub async fn realize(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload: Option<Vec<u8>> = None;
    let mut style_label: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return reject(&state, e.status(), PageView::default(), e.body_text()),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => match field.bytes().await {
                Ok(bytes) => upload = Some(bytes.to_vec()),
                Err(e) => return reject(&state, e.status(), PageView::default(), e.body_text()),
            },
            Some("style") => match field.text().await {
                Ok(text) => style_label = Some(text),
                Err(e) => return reject(&state, e.status(), PageView::default(), e.body_text()),
            },
            other => debug!(field = ?other, "Ignoring form field"),
        }
    }

    let style = match style_label.as_deref() {
        None | Some("") => StyleChoice::default(),
        Some(label) => match label.parse::<StyleChoice>() {
            Ok(style) => style,
            Err(message) => {
                return reject(&state, StatusCode::BAD_REQUEST, PageView::default(), message);
            }
        },
    };

    let view = PageView::default().with_style(style);
    let Some(upload) = upload.filter(|bytes| !bytes.is_empty()) else {
        return reject(&state, StatusCode::BAD_REQUEST, view, MISSING_IMAGE.to_string());
    };

    let outcome = state.realizer.realize(&upload, style).await;
    render(
        &state,
        StatusCode::OK,
        view.with_upload(&upload).with_outcome(outcome),
    )
}
