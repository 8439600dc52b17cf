use super::{method_not_allowed, with_store};
use crate::error::ApiError;
use crate::store::Store;
use actix_web::http::header;
use actix_web::web::{get, resource, scope, to};
use actix_web::{web, HttpResponse, Scope};

const API_PATH: &str = "/api/export";
const EXPORT_FILENAME: &str = "comments_export.csv";

/// `GET /api/export`: all comments, unfiltered, as a CSV attachment.
pub fn configure_routes() -> Scope {
    scope(API_PATH).service(
        resource("")
            .route(get().to(process))
            .default_service(to(method_not_allowed)),
    )
}

async fn process(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let rows = with_store(&store, |s| s.export_comments()).await?;
    let body = write_csv(&rows)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment;filename={}", EXPORT_FILENAME),
        ))
        .body(body))
}

/// Encodes `(comment, category)` rows under a `comment,category` header.
fn write_csv(rows: &[(String, String)]) -> Result<Vec<u8>, ApiError> {
    let export_err = |e: csv::Error| ApiError::Export(e.to_string());

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["comment", "category"])
        .map_err(export_err)?;
    for (comment, category) in rows {
        writer
            .write_record([comment.as_str(), category.as_str()])
            .map_err(export_err)?;
    }
    writer
        .into_inner()
        .map_err(|e| ApiError::Export(e.to_string()))
}
