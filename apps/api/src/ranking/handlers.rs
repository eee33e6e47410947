//! Axum route handlers for the ranking API.
//!
//! Thin adapter: collect the multipart upload, extract text, hand the batch to
//! the ranker on the blocking pool. No scoring logic lives here.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ranking::{Document, RankedEntry};
use crate::ranking::rank_documents;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct JobRolesResponse {
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessFilesResponse {
    pub results: Vec<RankedEntry>,
}

/// One uploaded file before text extraction.
struct Upload {
    file_name: Option<String>,
    content: Bytes,
}

/// Fields collected from a `/process-files` multipart body.
#[derive(Default)]
struct ProcessFilesForm {
    job_description: Option<Upload>,
    resumes: Vec<Upload>,
    job_role: Option<String>,
    limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /job-roles
///
/// Known role names, in catalog order.
pub async fn handle_job_roles(State(state): State<AppState>) -> Json<JobRolesResponse> {
    let roles = state
        .catalog
        .role_names()
        .into_iter()
        .map(String::from)
        .collect();
    Json(JobRolesResponse { roles })
}

/// POST /process-files
///
/// Multipart fields: `job_description` (file), `resumes` (zero or more files),
/// `job_role` (text), `limit` (optional text, positive integer).
/// Returns every resume ranked by hybrid score unless `limit` truncates.
pub async fn handle_process_files(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ProcessFilesResponse>, AppError> {
    let request_id = Uuid::new_v4();
    process_files(state, multipart)
        .instrument(info_span!("process_files", %request_id))
        .await
}

async fn process_files(
    state: AppState,
    multipart: Multipart,
) -> Result<Json<ProcessFilesResponse>, AppError> {
    let form = read_form(multipart).await?;

    let job_description = form
        .job_description
        .ok_or_else(|| AppError::Validation("job_description file is required".to_string()))?;
    let job_role = form
        .job_role
        .ok_or_else(|| AppError::Validation("job_role is required".to_string()))?;

    let jd_name = job_description.file_name.as_deref().unwrap_or("job_description");
    let jd_text = state
        .extractor
        .extract(jd_name, job_description.content)
        .await;

    let mut documents = Vec::with_capacity(form.resumes.len());
    for (i, upload) in form.resumes.into_iter().enumerate() {
        let mut document = Document::numbered(i, String::new());
        if let Some(name) = upload.file_name.filter(|n| !n.trim().is_empty()) {
            document.name = name;
        }
        document.text = state.extractor.extract(&document.name, upload.content).await;
        documents.push(document);
    }

    info!(
        "Ranking {} resumes for role '{}'",
        documents.len(),
        job_role
    );

    let catalog = state.catalog.clone();
    let mut results = tokio::task::spawn_blocking(move || {
        rank_documents(&jd_text, &documents, &job_role, &catalog)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Ranking task failed: {e}")))?;

    if let Some(limit) = form.limit {
        results.truncate(limit);
    }

    Ok(Json(ProcessFilesResponse { results }))
}

async fn read_form(mut multipart: Multipart) -> Result<ProcessFilesForm, AppError> {
    let mut form = ProcessFilesForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                let file_name = field.file_name().map(String::from);
                let content = field.bytes().await?;
                form.job_description = Some(Upload { file_name, content });
            }
            "resumes" => {
                let file_name = field.file_name().map(String::from);
                let content = field.bytes().await?;
                form.resumes.push(Upload { file_name, content });
            }
            "job_role" => form.job_role = Some(field.text().await?.trim().to_string()),
            "limit" => form.limit = Some(parse_limit(&field.text().await?)?),
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    Ok(form)
}

fn parse_limit(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation(format!(
            "limit must be a positive integer, got '{raw}'"
        ))),
    }
}
