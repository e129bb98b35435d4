// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{answer, auth, sound_test},
    state::AppState,
    utils::jwt::{auth_middleware, optional_auth_middleware},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, sound tests, answer validation).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, config, answer store).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/signup", post(auth::sign_up))
        .route("/login", post(auth::login));

    let sound_test_routes = Router::new()
        .route(
            "/",
            get(sound_test::list_sound_tests)
                // A valid token personalizes the listing but is never required
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    optional_auth_middleware,
                )),
        )
        .route("/today", get(sound_test::get_featured_sound_test))
        .route("/{id}", get(sound_test::get_sound_test))
        // Protected routes
        .merge(
            Router::new()
                .route("/", post(sound_test::create_sound_test))
                .route("/{id}/vote", put(sound_test::vote))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/sound-tests", sound_test_routes)
        .route("/api/validate-answer", post(answer::validate_answer))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
