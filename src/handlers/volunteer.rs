//! Volunteer signups.

use axum::{
    extract::Extension,
    Json,
};
use futures::TryStreamExt;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServerError;
use crate::handlers::InsertAck;
use crate::models::Volunteer;
use crate::server::State;

/// The body of a `POST /api/v1/volunteer` request.
#[derive(Debug, Deserialize)]
pub(crate) struct VolunteerInput {
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(rename = "phoneNumber")]
    pub(crate) phone_number: String,
    pub(crate) location: String,
}

/// Handler for `POST /api/v1/volunteer`
pub(crate) async fn create_volunteer(
    Extension(state): Extension<Arc<State>>,
    Json(input): Json<VolunteerInput>,
) -> Result<Json<InsertAck>, ServerError> {
    let volunteer = Volunteer {
        id: None,
        name: input.name,
        email: input.email,
        phone_number: input.phone_number,
        location: input.location,
    };

    let result = state
        .store
        .volunteers()
        .insert_one(&volunteer, None)
        .await?;
    Ok(Json(result.into()))
}

/// Handler for `GET /api/v1/volunteers`
pub(crate) async fn list_volunteers(
    Extension(state): Extension<Arc<State>>,
) -> Result<Json<Vec<Volunteer>>, ServerError> {
    let volunteers = state
        .store
        .volunteers()
        .find(None, None)
        .await?
        .try_collect()
        .await?;

    Ok(Json(volunteers))
}
