use crate::error::ApiError;
use crate::services::with_store;
use crate::store::Store;
use actix_web::{web, HttpResponse};
use log::info;

pub(crate) async fn process(
    store: web::Data<Store>,
    dataset_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let dataset_id = dataset_id.into_inner();
    with_store(&store, move |s| s.delete_dataset(dataset_id)).await?;
    info!("Dataset {} marked as deleted", dataset_id);
    Ok(HttpResponse::Ok().finish())
}
