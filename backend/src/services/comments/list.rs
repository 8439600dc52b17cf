use crate::error::ApiError;
use crate::services::with_store;
use crate::store::{CommentQuery, Store};
use actix_web::{web, HttpResponse};
use common::requests::{CommentSort, ListCommentsParams};

/// `GET /api/comments`: comments across all datasets.
pub async fn all(
    store: web::Data<Store>,
    params: web::Query<ListCommentsParams>,
) -> Result<HttpResponse, ApiError> {
    let query = CommentQuery {
        dataset_id: None,
        sort: params.sort.unwrap_or(CommentSort::CategoryDesc),
    };
    list_comments(store, query).await
}

/// `GET /api/comments/{dataset_id}`: comments of a single dataset.
pub async fn by_dataset(
    store: web::Data<Store>,
    dataset_id: web::Path<i64>,
    params: web::Query<ListCommentsParams>,
) -> Result<HttpResponse, ApiError> {
    let query = CommentQuery {
        dataset_id: Some(dataset_id.into_inner()),
        sort: params.sort.unwrap_or(CommentSort::CategoryDescCommentAsc),
    };
    list_comments(store, query).await
}

async fn list_comments(
    store: web::Data<Store>,
    query: CommentQuery,
) -> Result<HttpResponse, ApiError> {
    let comments = with_store(&store, move |s| s.list_comments(query)).await?;
    Ok(HttpResponse::Ok().json(comments))
}
