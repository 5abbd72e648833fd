//! Community comments.

use axum::{
    extract::Extension,
    Json,
};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServerError;
use crate::handlers::InsertAck;
use crate::models::Comment;
use crate::server::State;

/// The body of a `POST /api/v1/comment` request.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentInput {
    pub(crate) name: String,
    pub(crate) heading: String,
    pub(crate) comment: String,
    pub(crate) date: String,
}

/// Handler for `POST /api/v1/comment`
pub(crate) async fn create_comment(
    Extension(state): Extension<Arc<State>>,
    Json(input): Json<CommentInput>,
) -> Result<Json<InsertAck>, ServerError> {
    let comment = Comment {
        id: None,
        name: input.name,
        heading: input.heading,
        comment: input.comment,
        date: input.date,
    };

    let result = state.store.comments().insert_one(&comment, None).await?;
    Ok(Json(result.into()))
}

/// Handler for `GET /api/v1/comments`
///
/// Newest first, by descending `_id`.
pub(crate) async fn list_comments(
    Extension(state): Extension<Arc<State>>,
) -> Result<Json<Vec<Comment>>, ServerError> {
    let options = FindOptions::builder().sort(doc! { "_id": -1 }).build();

    let comments = state
        .store
        .comments()
        .find(None, options)
        .await?
        .try_collect()
        .await?;

    Ok(Json(comments))
}
