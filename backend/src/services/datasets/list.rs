use crate::error::ApiError;
use crate::services::with_store;
use crate::store::Store;
use actix_web::{web, HttpResponse};

pub(crate) async fn process(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let datasets = with_store(&store, |s| s.list_datasets()).await?;
    Ok(HttpResponse::Ok().json(datasets))
}
