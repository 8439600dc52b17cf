use crate::error::ApiError;
use crate::services::with_store;
use crate::store::Store;
use actix_web::{web, HttpResponse};
use common::model::comment::Comment;

/// Handler for `PUT /api/comments` and `PUT /api/comments/`.
///
/// The row is chosen by the `id` in the body. Both fields are overwritten
/// unconditionally; an unknown id is not an error.
pub async fn process(
    store: web::Data<Store>,
    payload: web::Json<Comment>,
) -> Result<HttpResponse, ApiError> {
    update_comment(store, payload.into_inner()).await
}

/// Handler for `PUT /api/comments/{id}`. The path id wins over the body id.
pub async fn by_path(
    store: web::Data<Store>,
    id: web::Path<i64>,
    payload: web::Json<Comment>,
) -> Result<HttpResponse, ApiError> {
    let comment = Comment {
        id: id.into_inner(),
        ..payload.into_inner()
    };
    update_comment(store, comment).await
}

async fn update_comment(store: web::Data<Store>, comment: Comment) -> Result<HttpResponse, ApiError> {
    with_store(&store, move |s| s.update_comment(&comment)).await?;
    Ok(HttpResponse::Ok().finish())
}
