//! HTTP handlers, grouped by the API path they serve.
//!
//! Each sub-module exposes a `configure_routes()` returning the Actix `Scope`
//! for its path. A handler makes one store call, or one transaction, and turns
//! the result into JSON, CSV or an empty `200 OK`.

pub mod categories;
pub mod comments;
pub mod datasets;
pub mod export;
pub mod import;
pub mod split;

use crate::error::{ApiError, StoreError};
use crate::store::Store;
use actix_web::{web, HttpResponse};

/// Runs a store call on the blocking thread pool.
pub(crate) async fn with_store<T, F>(store: &web::Data<Store>, call: F) -> Result<T, ApiError>
where
    F: FnOnce(&Store) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = store.get_ref().clone();
    Ok(web::block(move || call(&store)).await??)
}

/// Fallback for a known API resource hit with the wrong method.
pub(crate) async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
