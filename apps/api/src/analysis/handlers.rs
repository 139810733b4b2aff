use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::analysis::result_parser::{parse_analysis_markdown, AnalysisReport};
use crate::analysis::tiering::ScoreTier;
use crate::errors::AppError;
use crate::export::export_analysis;
use crate::extract::extract_text;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report: AnalysisReport,
    /// Qualitative tier for the score; absent when the response carried no
    /// recognizable score.
    pub tier: Option<ScoreTier>,
    /// The unparsed model response, suitable for the export endpoint.
    pub raw_markdown: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub path: String,
}

/// POST /api/v1/analyze
///
/// Multipart form: `resume` file (required), `job` file and/or `job_text`
/// text field. An uploaded job file takes precedence over pasted text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_file: Option<(String, Bytes)> = None;
    let mut job_file: Option<(String, Bytes)> = None;
    let mut job_text_input: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "resume" | "job" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        AppError::Validation(format!("'{name}' upload is missing a file name"))
                    })?;
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read '{name}' upload: {e}"))
                })?;
                if name == "resume" {
                    resume_file = Some((file_name, bytes));
                } else {
                    job_file = Some((file_name, bytes));
                }
            }
            "job_text" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read 'job_text' field: {e}"))
                })?;
                job_text_input = Some(text);
            }
            _ => {}
        }
    }

    let (resume_name, resume_bytes) = resume_file
        .ok_or_else(|| AppError::Validation("a 'resume' file upload is required".to_string()))?;
    let resume_text = extract_text(&resume_name, &resume_bytes)?;
    if resume_text.is_empty() {
        return Err(AppError::Validation(format!(
            "no text could be extracted from '{resume_name}'"
        )));
    }

    let job_text = resolve_job_text(job_file, job_text_input)?;

    let raw_markdown = state
        .provider
        .generate_analysis(&resume_text, &job_text)
        .await?;
    let report = parse_analysis_markdown(&raw_markdown);
    let tier = report.score.map(ScoreTier::from_score);

    Ok(Json(AnalyzeResponse {
        report,
        tier,
        raw_markdown,
    }))
}

/// POST /api/v1/export
///
/// Writes the raw analysis markdown as a printable document and returns
/// its path.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    if req.markdown.trim().is_empty() {
        return Err(AppError::Validation(
            "'markdown' must not be empty".to_string(),
        ));
    }
    let path = export_analysis(&req.markdown, &state.config.export_dir)?;
    Ok(Json(ExportResponse {
        path: path.display().to_string(),
    }))
}

/// Resolves the job description text: an uploaded file wins over pasted
/// text; one of the two must yield non-empty text.
fn resolve_job_text(
    job_file: Option<(String, Bytes)>,
    pasted: Option<String>,
) -> Result<String, AppError> {
    if let Some((file_name, bytes)) = job_file {
        let text = extract_text(&file_name, &bytes)?;
        if text.is_empty() {
            return Err(AppError::Validation(format!(
                "no text could be extracted from '{file_name}'"
            )));
        }
        return Ok(text);
    }

    let pasted = pasted.map(|t| t.trim().to_string()).unwrap_or_default();
    if pasted.is_empty() {
        return Err(AppError::Validation(
            "provide a 'job' file upload or a non-empty 'job_text' field".to_string(),
        ));
    }
    Ok(pasted)
}
