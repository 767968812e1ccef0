use axum::{Router, Server, middleware::from_fn, routing::post};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use runova_backend::{AppState, config::Config, db::DbPool};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    runova_backend::init_tracing(&config);

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .build(manager)
        .expect("Failed to create database connection pool");

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    // Application state
    let state = Arc::new(AppState::new(db, config));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes that don't need authentication
    let auth_routes = Router::new()
        .route("/auth/register", post(runova_backend::routes::auth::register))
        .route("/auth/login", post(runova_backend::routes::auth::login))
        .route(
            "/auth/refresh",
            post(runova_backend::routes::auth::refresh_token),
        )
        .with_state(state.clone());

    // Everything else sits behind the bearer-token middleware
    let protected_routes = runova_backend::routes::create_router(state.clone()).layer(
        axum::middleware::from_fn_with_state(
            state.clone(),
            runova_backend::middleware::auth::auth_middleware,
        ),
    );

    let app = Router::new()
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(from_fn(runova_backend::middleware::logger::logger));

    // Start server
    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
