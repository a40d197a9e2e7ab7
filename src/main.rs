use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{app::env::Envy, images::util::storage::ImageStore};

mod app;
mod images;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub store: ImageStore,
    pub client: reqwest::Client,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();

    let store = ImageStore::new(envy.generated_dir());
    store
        .ensure_dir()
        .await
        .expect("failed to create generated directory");

    tracing::info!("storing images in {}", store.dir().display());

    let state = AppState {
        envy: Arc::new(envy),
        store,
        client: reqwest::Client::new(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/generate-image", post(images::controller::generate_image))
        .route(
            "/image/:filename",
            get(images::controller::get_image_by_filename),
        )
        // layers
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
