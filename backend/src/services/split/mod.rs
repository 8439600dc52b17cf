mod apply;

use super::method_not_allowed;
use actix_web::web::{post, resource, scope, to};
use actix_web::Scope;

const API_PATH: &str = "/api/split";

/// Configures the `Scope` for splitting a comment into several rows.
/// `POST` is accepted with and without the trailing slash.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("/")
                .route(post().to(apply::process))
                .default_service(to(method_not_allowed)),
        )
        .service(
            resource("")
                .route(post().to(apply::process))
                .default_service(to(method_not_allowed)),
        )
}
