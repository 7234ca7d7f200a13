//! Contact API Handlers

use axum::{Json, extract::State};
use tokio::io::AsyncWriteExt;

use shared::models::{ContactReceipt, ContactRequest, ContactSubmission};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/contact - validated contact form submission
///
/// Validation failures short-circuit with the full issue list and touch
/// nothing on disk. Accepted submissions are appended as one JSON line
/// to the contact sink; an append failure is a 500 and the visitor must
/// resubmit - there is no retry or queueing.
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<ContactReceipt>> {
    if let Err(issues) = payload.validate() {
        return Err(AppError::Validation(issues.join("; ")));
    }

    let submission = ContactSubmission::new(payload);
    append_submission(&state, &submission).await?;

    tracing::info!(
        id = %submission.id,
        interest = %submission.request.interest,
        "Contact submission received"
    );

    Ok(Json(ContactReceipt::received(submission.id)))
}

/// Append one submission to `WORK_DIR/contact/submissions.jsonl`.
async fn append_submission(
    state: &ServerState,
    submission: &ContactSubmission,
) -> AppResult<()> {
    let dir = state.contact_dir();
    tokio::fs::create_dir_all(&dir).await?;

    let mut line = serde_json::to_vec(submission)?;
    line.push(b'\n');

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("submissions.jsonl"))
        .await?;
    file.write_all(&line).await?;
    file.flush().await?;

    Ok(())
}
