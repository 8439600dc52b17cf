//! # Comment Service Module
//!
//! Listing and editing of individual comments under `/api/comments`.
//!
//! ## Sub-modules:
//! - `list`: returns the comments of one dataset, or of all datasets.
//! - `update`: overwrites the text and category of one comment.

mod list;
mod update;

use super::method_not_allowed;
use actix_web::web::{get, put, resource, scope, to};
use actix_web::Scope;

const API_PATH: &str = "/api/comments";

/// Configures and returns the Actix `Scope` for comment routes.
///
/// # Registered Routes:
///
/// *   **`GET ""`**: every comment with text, ordered by category descending.
/// *   **`GET /{dataset_id}`**: comments of one dataset, ordered by category
///     descending then text ascending.
/// *   **`PUT ""`, `PUT /`**: update using the `id` in the JSON body.
/// *   **`PUT /{id}`**: update using the id in the path.
///
/// Both `GET` routes accept `?sort=category_desc|category_desc_comment_asc`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(list::all))
                .route(put().to(update::process))
                .default_service(to(method_not_allowed)),
        )
        .service(
            resource("/")
                .route(put().to(update::process))
                .default_service(to(method_not_allowed)),
        )
        .service(
            resource("/{id}")
                .route(get().to(list::by_dataset))
                .route(put().to(update::by_path))
                .default_service(to(method_not_allowed)),
        )
}
