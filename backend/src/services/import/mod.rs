//! Dataset import under `POST /api/dataset`.
//!
//! A multipart form carries a dataset `name` and a `file` (`.csv` or `.json`).
//! The file is parsed into a flat list of strings, then a dataset row and one
//! comment per string are written in a single transaction. The client is
//! redirected to `/?id=<dataset_id>`.

mod parse;
mod upload;

use super::method_not_allowed;
use actix_web::web::{post, resource, scope, to};
use actix_web::Scope;

const API_PATH: &str = "/api/dataset";

pub fn configure_routes() -> Scope {
    scope(API_PATH).service(
        resource("")
            .route(post().to(upload::process))
            .default_service(to(method_not_allowed)),
    )
}
