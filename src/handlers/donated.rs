//! Completed-donation history.

use axum::{
    extract::Extension,
    Json,
};
use chrono::Utc;
use futures::TryStreamExt;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServerError;
use crate::handlers::InsertAck;
use crate::models::DonatedRecord;
use crate::server::State;

/// The body of a `POST /api/v1/donated` request.
#[derive(Debug, Deserialize)]
pub(crate) struct DonatedInput {
    pub(crate) email: String,
    pub(crate) title: String,
    pub(crate) category: String,
    pub(crate) amount: f64,
}

/// Handler for `POST /api/v1/donated`
///
/// Independent of any donation-listing write; there is no atomicity between
/// a listing and its history entries.
pub(crate) async fn create_donated(
    Extension(state): Extension<Arc<State>>,
    Json(input): Json<DonatedInput>,
) -> Result<Json<InsertAck>, ServerError> {
    let record = DonatedRecord {
        id: None,
        email: input.email,
        title: input.title,
        category: input.category,
        amount: input.amount,
        date: Utc::now(),
    };

    let result = state.store.donated().insert_one(&record, None).await?;
    Ok(Json(result.into()))
}

/// Handler for `GET /api/v1/donated`
pub(crate) async fn list_donated(
    Extension(state): Extension<Arc<State>>,
) -> Result<Json<Vec<DonatedRecord>>, ServerError> {
    let records = state
        .store
        .donated()
        .find(None, None)
        .await?
        .try_collect()
        .await?;

    Ok(Json(records))
}
