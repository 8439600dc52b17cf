use super::{method_not_allowed, with_store};
use crate::error::ApiError;
use crate::store::Store;
use actix_web::web::{get, resource, scope, to};
use actix_web::{web, HttpResponse, Scope};

const API_PATH: &str = "/api/categories";

/// `GET /api/categories`: every distinct category, ascending, across all datasets.
pub fn configure_routes() -> Scope {
    scope(API_PATH).service(
        resource("")
            .route(get().to(process))
            .default_service(to(method_not_allowed)),
    )
}

async fn process(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let categories = with_store(&store, |s| s.list_categories()).await?;
    Ok(HttpResponse::Ok().json(categories))
}
