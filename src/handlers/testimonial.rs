//! Donor testimonials.

use axum::{
    extract::Extension,
    Json,
};
use futures::TryStreamExt;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServerError;
use crate::handlers::InsertAck;
use crate::models::Testimonial;
use crate::server::State;

/// The body of a `POST /api/v1/testimonial` request.
#[derive(Debug, Deserialize)]
pub(crate) struct TestimonialInput {
    pub(crate) name: String,
    pub(crate) image: String,
    pub(crate) amount: f64,
    pub(crate) description: String,
}

/// Handler for `POST /api/v1/testimonial`
pub(crate) async fn create_testimonial(
    Extension(state): Extension<Arc<State>>,
    Json(input): Json<TestimonialInput>,
) -> Result<Json<InsertAck>, ServerError> {
    let testimonial = Testimonial {
        id: None,
        name: input.name,
        image: input.image,
        amount: input.amount,
        description: input.description,
    };

    let result = state
        .store
        .testimonials()
        .insert_one(&testimonial, None)
        .await?;
    Ok(Json(result.into()))
}

/// Handler for `GET /api/v1/testimonials`
pub(crate) async fn list_testimonials(
    Extension(state): Extension<Arc<State>>,
) -> Result<Json<Vec<Testimonial>>, ServerError> {
    let testimonials = state
        .store
        .testimonials()
        .find(None, None)
        .await?
        .try_collect()
        .await?;

    Ok(Json(testimonials))
}
