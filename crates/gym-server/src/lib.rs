//! Gym Member Server
//!
//! Registers, lists, edits and deletes gym members through server-rendered
//! HTML forms. Uses SQLite (embedded) for storage.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;
pub mod views;

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use services::MemberDirectory;
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub directory: Arc<MemberDirectory>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        let directory = Arc::new(MemberDirectory::new(db.clone()));
        Self { db, directory }
    }
}

/// Build the full HTTP router, serving `upload_dir` under `/static`
pub fn build_router(state: AppState, upload_dir: &Path) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Static pages
        .route("/", get(handlers::pages::index))
        .route("/info", get(handlers::pages::info))
        .route("/servicios", get(handlers::pages::services))
        // Member directory
        .route(
            "/inscripcion",
            get(handlers::members::registration_form).post(handlers::members::register),
        )
        .route("/usuarios", get(handlers::members::list))
        .route(
            "/nuevo_usuario",
            get(handlers::members::new_member_form).post(handlers::members::create_new_member),
        )
        .route(
            "/editar_usuario/:id",
            get(handlers::members::edit_form).post(handlers::members::update),
        )
        .route("/eliminar_usuario/:id", get(handlers::members::delete))
        // Uploaded files
        .nest_service("/static", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
