use crate::core::pipeline::{FILE_A_FIELD, FILE_B_FIELD, OUTPUT_A_NAME, OUTPUT_B_NAME};
use crate::core::{CompareRequest, SortMode, Storage};
use crate::server::response::{ApiError, CompareResponse};
use crate::server::AppState;
use crate::utils::error::CompareError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

const SORT_ORDER_FIELDS: [&str; 2] = ["sortOrder", "sort_order"];

#[derive(Debug, Default)]
struct CompareForm {
    file1: Option<Vec<u8>>,
    file2: Option<Vec<u8>>,
    sort_order: Option<String>,
}

async fn read_form(multipart: &mut Multipart) -> Result<CompareForm, ApiError> {
    let mut form = CompareForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::from_multipart)?
    {
        let name = field.name().unwrap_or_default().to_string();
        // 瀏覽器在未選擇檔案時會送出空檔名的空欄位
        let unselected = field.file_name() == Some("");

        match name.as_str() {
            FILE_A_FIELD | FILE_B_FIELD => {
                let bytes = field.bytes().await.map_err(ApiError::from_multipart)?;
                let content = if unselected && bytes.is_empty() {
                    None
                } else {
                    Some(bytes.to_vec())
                };
                if name == FILE_A_FIELD {
                    form.file1 = content;
                } else {
                    form.file2 = content;
                }
            }
            n if SORT_ORDER_FIELDS.contains(&n) => {
                form.sort_order = Some(field.text().await.map_err(ApiError::from_multipart)?);
            }
            other => tracing::debug!("Ignoring unexpected form field '{}'", other),
        }
    }

    Ok(form)
}

pub async fn compare(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CompareResponse>, ApiError> {
    let mut multipart = multipart.map_err(ApiError::from_multipart_rejection)?;
    let form = read_form(&mut multipart).await?;

    let sort_mode = SortMode::from_request_token(form.sort_order.as_deref()).inspect_err(|e| {
        tracing::warn!("⚠️ Rejected compare request: {}", e);
    })?;

    tracing::info!(
        "📥 Compare request: file1={} bytes, file2={} bytes, sort={}",
        form.file1.as_ref().map_or(0, Vec::len),
        form.file2.as_ref().map_or(0, Vec::len),
        sort_mode
    );

    let request = CompareRequest {
        file_a: form.file1,
        file_b: form.file2,
        sort_mode,
    };

    let outcome = state.engine.run(request).await.inspect_err(|e| {
        if e.is_caller_error() {
            tracing::warn!("⚠️ Rejected compare request: {}", e);
        }
    })?;

    let response = CompareResponse::from(outcome);
    if response.identical {
        tracing::info!("✅ Files are identical");
    } else {
        tracing::info!(
            "✅ Comparison done: {} unique to file1, {} unique to file2",
            response.unique_to_file1,
            response.unique_to_file2
        );
    }

    Ok(Json(response))
}

fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && segment != ".." && !segment.contains(['/', '\\'])
}

pub async fn download(
    State(state): State<AppState>,
    Path((id, file)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    if !is_safe_segment(&id) || !is_safe_segment(&file) {
        return Err(CompareError::invalid_input("path", "invalid artifact path").into());
    }

    if file != OUTPUT_A_NAME && file != OUTPUT_B_NAME {
        return Err(CompareError::NotFound {
            resource: format!("{}/{}", id, file),
        }
        .into());
    }

    let path = format!("{}/{}", id, file);
    let data = state.engine.pipeline().storage().read_file(&path).await?;
    tracing::debug!("📤 Serving {} ({} bytes)", path, data.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file),
            ),
        ],
        data,
    ))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
