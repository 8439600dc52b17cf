//! Listing and soft deletion of datasets under `/api/datasets`.
//! Creation lives in `services::import`, which owns `POST /api/dataset`.

mod delete;
mod list;

use super::method_not_allowed;
use actix_web::web::{delete, get, resource, scope, to};
use actix_web::Scope;

const API_PATH: &str = "/api/datasets";

/// # Registered Routes:
///
/// *   **`GET ""`**: non-deleted datasets as `[{id, name}]`, newest first.
/// *   **`DELETE /{dataset_id}`**: sets the dataset's deleted flag. Repeating
///     the call, or naming an unknown id, still answers `200 OK`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(list::process))
                .default_service(to(method_not_allowed)),
        )
        .service(
            resource("/{dataset_id}")
                .route(delete().to(delete::process))
                .default_service(to(method_not_allowed)),
        )
}
