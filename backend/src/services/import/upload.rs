use super::parse::{parse_values, FileFormat};
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::services::with_store;
use crate::store::Store;
use actix_multipart::{Field, Multipart};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use log::warn;

#[derive(Default)]
struct Upload {
    name: Option<String>,
    file: Option<UploadedFile>,
}

struct UploadedFile {
    filename: String,
    contents: Vec<u8>,
}

/// Handler for `POST /api/dataset`.
///
/// Everything is validated before the store is touched, so a rejected upload
/// never leaves a dataset row behind. Checks run in this order: name, file
/// presence, extension, contents.
///
/// - On success: `302 Found` with `Location: /?id=<dataset_id>`.
/// - On a client error: `400 Bad Request` with the reason as body.
pub async fn process(
    store: web::Data<Store>,
    config: web::Data<ServerConfig>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let upload = read_upload(payload, config.upload_limit).await?;

    let name = upload
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or(ApiError::MissingName)?;
    let file = upload.file.ok_or(ApiError::MissingFile)?;
    let format = FileFormat::from_filename(&file.filename)
        .ok_or_else(|| ApiError::UnsupportedFormat(file.filename.clone()))?;
    let values = parse_values(format, &file.contents).inspect_err(|e| {
        warn!("Rejected upload '{}': {}", file.filename, e);
    })?;

    let dataset_id = with_store(&store, move |s| s.create_dataset(&name, &values)).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/?id={}", dataset_id)))
        .finish())
}

/// Collects the `name` and `file` parts, in whichever order they arrive.
async fn read_upload(mut payload: Multipart, limit: usize) -> Result<Upload, ApiError> {
    let mut upload = Upload::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let (field_name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(|n| n.to_string()),
                cd.get_filename().map(|f| f.to_string()),
            ),
            None => (None, None),
        };

        match field_name.as_deref() {
            Some("name") => {
                let bytes = read_field(&mut field, limit).await?;
                let name = String::from_utf8(bytes)
                    .map_err(|_| ApiError::BadRequest("Dataset name is not valid UTF-8".into()))?;
                upload.name = Some(name);
            }
            Some("file") => {
                let contents = read_field(&mut field, limit).await?;
                upload.file = Some(UploadedFile {
                    filename: filename.unwrap_or_default(),
                    contents,
                });
            }
            _ => {
                // Drain parts we do not use.
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
            }
        }
    }

    Ok(upload)
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, ApiError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > limit {
            return Err(ApiError::UploadTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}
