//! # Comment Split Service
//!
//! Backs `POST /api/split/`. The body carries the id of an existing comment, a
//! multi-line text blob and a category. The comment row is deleted and replaced
//! by one row per non-blank line of the blob, each trimmed and each given the
//! category from the body.
//!
//! The whole replacement is one store transaction (see `Store::split_comment`).
//! If any insert fails, the original row is still there and the client gets a
//! `500` with the store's message. An id that matches no row is not an error;
//! the lines are simply inserted.

use crate::error::ApiError;
use crate::services::with_store;
use crate::store::Store;
use actix_web::{web, HttpResponse};
use common::model::comment::Comment;
use log::info;

pub(crate) async fn process(
    store: web::Data<Store>,
    payload: web::Json<Comment>,
) -> Result<HttpResponse, ApiError> {
    let Comment {
        id,
        comment,
        category,
    } = payload.into_inner();

    let new_ids = with_store(&store, move |s| s.split_comment(id, &comment, &category)).await?;
    info!("Split comment {} into {} row(s)", id, new_ids.len());

    Ok(HttpResponse::Ok().finish())
}
