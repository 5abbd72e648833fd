//! Registration, login, profile updates and the donor leaderboard.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth::{issue_token, Claims};
use crate::error::{is_duplicate_key, ServerError};
use crate::models::User;
use crate::server::State;
use crate::utils::pass;

/// The body of a `POST /api/auth/register` request.
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterInput {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

/// The body of a `POST /api/v1/login` request.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginInput {
    pub(crate) email: String,
    pub(crate) password: String,
}

/// The body of a `PUT /api/auth/donors-user/:email` request.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateProfileInput {
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) amount: Option<f64>,
}

/// A user as exposed to clients. Strips the password hash.
#[derive(Debug, Serialize)]
pub(crate) struct UserProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(rename = "totalDonated")]
    pub(crate) total_donated: f64,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            total_donated: user.total_donated,
        }
    }
}

/// Handler for `POST /api/auth/register`
///
/// The existence check and the insert are two separate operations; a
/// concurrent registration that slips between them is caught by the unique
/// email index instead.
pub(crate) async fn register(
    Extension(state): Extension<Arc<State>>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<Value>), ServerError> {
    let users = state.store.users();

    if users
        .find_one(doc! { "email": &input.email }, None)
        .await?
        .is_some()
    {
        return Err(ServerError::DuplicateUser);
    }

    let user = User {
        id: None,
        name: input.name,
        email: input.email,
        password: pass::hash_password(&input.password)?,
        total_donated: 0.0,
    };
    if let Err(err) = users.insert_one(&user, None).await {
        if is_duplicate_key(&err) {
            return Err(ServerError::DuplicateUser);
        }
        return Err(err.into());
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "User registered successfully" })),
    ))
}

/// Handler for `POST /api/v1/login`
///
/// An unknown email and a wrong password are deliberately indistinguishable.
pub(crate) async fn login(
    Extension(state): Extension<Arc<State>>,
    Json(input): Json<LoginInput>,
) -> Result<Json<Value>, ServerError> {
    let user = state
        .store
        .users()
        .find_one(doc! { "email": &input.email }, None)
        .await?
        .ok_or(ServerError::InvalidCredentials)?;

    if !pass::verify_password(&input.password, &user.password)? {
        return Err(ServerError::InvalidCredentials);
    }

    let claims = Claims::for_user(&user, state.config.token_expiry_secs);
    let token = issue_token(&claims, &state.config.jwt_secret)?;

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "token": token,
    })))
}

/// Handler for `PUT /api/auth/donors-user/:email`
pub(crate) async fn update_profile(
    Extension(state): Extension<Arc<State>>,
    Path(email): Path<String>,
    Json(input): Json<UpdateProfileInput>,
) -> Result<Json<UserProfile>, ServerError> {
    let users = state.store.users();

    let user = users
        .find_one(doc! { "email": &email }, None)
        .await?
        .ok_or(ServerError::NotFound("User"))?;

    let merged = merge_profile(user, input);
    let update = users
        .update_one(
            doc! { "email": &email },
            doc! { "$set": {
                "name": &merged.name,
                "email": &merged.email,
                "totalDonated": merged.total_donated,
            }},
            None,
        )
        .await;
    if let Err(err) = update {
        // changing email to one already registered trips the unique index
        if is_duplicate_key(&err) {
            return Err(ServerError::DuplicateUser);
        }
        return Err(err.into());
    }

    Ok(Json(UserProfile::from(merged)))
}

/// Handler for `GET /api/v1/users`
///
/// All users by cumulative donation, highest first. Ties land in whatever
/// order the database returns them.
pub(crate) async fn list_users(
    Extension(state): Extension<Arc<State>>,
) -> Result<Json<Vec<UserProfile>>, ServerError> {
    let options = FindOptions::builder()
        .sort(doc! { "totalDonated": -1 })
        .build();

    let users: Vec<User> = state
        .store
        .users()
        .find(None, options)
        .await?
        .try_collect()
        .await?;

    Ok(Json(users.into_iter().map(UserProfile::from).collect()))
}

/// A provided field only replaces the stored one when it is truthy: a
/// non-empty string, or a nonzero amount. `amount: 0` is indistinguishable
/// from omitting the field and leaves `totalDonated` untouched.
fn merge_profile(mut user: User, input: UpdateProfileInput) -> User {
    if let Some(name) = input.name.filter(|name| !name.is_empty()) {
        user.name = name;
    }
    if let Some(email) = input.email.filter(|email| !email.is_empty()) {
        user.email = email;
    }
    if let Some(amount) = input.amount.filter(|amount| *amount != 0.0) {
        user.total_donated = amount;
    }
    user
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> User {
        User {
            id: None,
            name: "A".to_owned(),
            email: "a@x.com".to_owned(),
            password: "$2b$10$hash".to_owned(),
            total_donated: 50.0,
        }
    }

    #[test]
    fn merge_replaces_provided_truthy_fields() {
        let merged = merge_profile(
            stored_user(),
            UpdateProfileInput {
                name: Some("B".to_owned()),
                email: Some("b@x.com".to_owned()),
                amount: Some(75.0),
            },
        );
        assert_eq!(merged.name, "B");
        assert_eq!(merged.email, "b@x.com");
        assert_eq!(merged.total_donated, 75.0);
    }

    #[test]
    fn merge_keeps_fields_that_are_absent() {
        let merged = merge_profile(
            stored_user(),
            UpdateProfileInput {
                name: None,
                email: None,
                amount: None,
            },
        );
        assert_eq!(merged.name, "A");
        assert_eq!(merged.email, "a@x.com");
        assert_eq!(merged.total_donated, 50.0);
    }

    #[test]
    fn zero_amount_is_indistinguishable_from_absent() {
        let merged = merge_profile(
            stored_user(),
            UpdateProfileInput {
                name: None,
                email: None,
                amount: Some(0.0),
            },
        );
        assert_eq!(merged.total_donated, 50.0);
    }

    #[test]
    fn empty_strings_do_not_clear_fields() {
        let merged = merge_profile(
            stored_user(),
            UpdateProfileInput {
                name: Some(String::new()),
                email: Some(String::new()),
                amount: None,
            },
        );
        assert_eq!(merged.name, "A");
        assert_eq!(merged.email, "a@x.com");
    }

    #[test]
    fn merge_never_touches_the_password_hash() {
        let merged = merge_profile(
            stored_user(),
            UpdateProfileInput {
                name: Some("B".to_owned()),
                email: None,
                amount: Some(10.0),
            },
        );
        assert_eq!(merged.password, "$2b$10$hash");
    }
}
