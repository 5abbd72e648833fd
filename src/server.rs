use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    db::Store,
    handlers::{comment, donated, donation, status, testimonial, user, volunteer},
};

pub(crate) struct State {
    pub(crate) store: Store,
    pub(crate) config: Config,
}

impl State {
    /// Attempt to create a new State instance
    pub(crate) async fn try_new(config: Config) -> Result<State> {
        let store = Store::connect(&config.mongodb_uri, &config.database).await?;

        Ok(State { store, config })
    }
}

/// Run the server.
pub(crate) async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let state = Arc::new(State::try_new(config).await?);

    let app = router(state.clone())?.layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: Arc<State>) -> Result<Router> {
    let cors = cors_layer(&state.config.allowed_origins)?;

    let router = Router::new()
        .route("/", get(status::status))
        .route("/api/auth/register", post(user::register))
        .route("/api/v1/login", post(user::login))
        .route("/api/auth/donors-user/:email", put(user::update_profile))
        .route("/api/v1/users", get(user::list_users))
        .route(
            "/api/v1/donation",
            post(donation::create_donation).get(donation::list_donations),
        )
        .route(
            "/api/v1/donation/:id",
            put(donation::update_donation).delete(donation::delete_donation),
        )
        .route("/api/v1/donation/:id/review", post(donation::append_review))
        .route("/api/v1/donation/:id/reviews", get(donation::list_reviews))
        .route(
            "/api/v1/donated",
            post(donated::create_donated).get(donated::list_donated),
        )
        .route("/api/v1/comment", post(comment::create_comment))
        .route("/api/v1/comments", get(comment::list_comments))
        .route("/api/v1/testimonial", post(testimonial::create_testimonial))
        .route("/api/v1/testimonials", get(testimonial::list_testimonials))
        .route("/api/v1/volunteer", post(volunteer::create_volunteer))
        .route("/api/v1/volunteers", get(volunteer::list_volunteers))
        .layer(cors)
        .layer(Extension(state));

    Ok(router)
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutting down");
}
