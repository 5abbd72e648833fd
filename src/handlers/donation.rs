//! Donation listings and their review threads.

use axum::{
    extract::{Extension, Path},
    Json,
};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServerError;
use crate::handlers::{DeleteAck, InsertAck, UpdateAck};
use crate::models::{Donation, Review};
use crate::server::State;

/// The body of a `POST /api/v1/donation` or `PUT /api/v1/donation/:id`
/// request: the full fixed field set of a listing.
#[derive(Debug, Deserialize)]
pub(crate) struct DonationInput {
    pub(crate) image: String,
    pub(crate) category: String,
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) description: String,
}

/// The body of a `POST /api/v1/donation/:id/review` request.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewInput {
    #[serde(rename = "reviewText")]
    pub(crate) review_text: String,
    #[serde(rename = "reviewerName")]
    pub(crate) reviewer_name: String,
}

/// Handler for `POST /api/v1/donation`
pub(crate) async fn create_donation(
    Extension(state): Extension<Arc<State>>,
    Json(input): Json<DonationInput>,
) -> Result<Json<InsertAck>, ServerError> {
    let donation = Donation {
        id: None,
        image: input.image,
        category: input.category,
        title: input.title,
        amount: input.amount,
        description: input.description,
        reviews: None,
    };

    let result = state.store.donations().insert_one(&donation, None).await?;
    Ok(Json(result.into()))
}

/// Handler for `GET /api/v1/donation`
pub(crate) async fn list_donations(
    Extension(state): Extension<Arc<State>>,
) -> Result<Json<Vec<Donation>>, ServerError> {
    let donations = state
        .store
        .donations()
        .find(None, None)
        .await?
        .try_collect()
        .await?;

    Ok(Json(donations))
}

/// Handler for `PUT /api/v1/donation/:id`
///
/// Overwrites the fixed listing fields; the review list is left untouched.
pub(crate) async fn update_donation(
    Extension(state): Extension<Arc<State>>,
    Path(id): Path<String>,
    Json(input): Json<DonationInput>,
) -> Result<Json<UpdateAck>, ServerError> {
    let id = ObjectId::parse_str(&id)?;

    let result = state
        .store
        .donations()
        .update_one(
            doc! { "_id": id },
            doc! { "$set": {
                "image": &input.image,
                "category": &input.category,
                "title": &input.title,
                "amount": input.amount,
                "description": &input.description,
            }},
            None,
        )
        .await?;

    Ok(Json(result.into()))
}

/// Handler for `DELETE /api/v1/donation/:id`
///
/// Deleting an id that matches nothing is a zero-effect acknowledgement.
pub(crate) async fn delete_donation(
    Extension(state): Extension<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ServerError> {
    let id = ObjectId::parse_str(&id)?;

    let result = state
        .store
        .donations()
        .delete_one(doc! { "_id": id }, None)
        .await?;

    Ok(Json(result.into()))
}

/// Handler for `POST /api/v1/donation/:id/review`
pub(crate) async fn append_review(
    Extension(state): Extension<Arc<State>>,
    Path(id): Path<String>,
    Json(input): Json<ReviewInput>,
) -> Result<Json<UpdateAck>, ServerError> {
    let id = ObjectId::parse_str(&id)?;

    let review = Review {
        text: input.review_text,
        name: input.reviewer_name,
        date: Utc::now(),
    };

    let result = state
        .store
        .donations()
        .update_one(
            doc! { "_id": id },
            doc! { "$push": { "reviews": bson::to_bson(&review)? } },
            None,
        )
        .await?;

    if result.matched_count == 0 {
        return Err(ServerError::NotFound("Donation"));
    }

    Ok(Json(result.into()))
}

/// Handler for `GET /api/v1/donation/:id/reviews`
///
/// An existing donation that was never reviewed yields an empty list.
pub(crate) async fn list_reviews(
    Extension(state): Extension<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, ServerError> {
    let id = ObjectId::parse_str(&id)?;

    let donation = state
        .store
        .donations()
        .find_one(doc! { "_id": id }, None)
        .await?
        .ok_or(ServerError::NotFound("Donation"))?;

    Ok(Json(donation.reviews.unwrap_or_default()))
}
