pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod response;

use actix_web::{middleware::DefaultHeaders, web};
use std::sync::Arc;

pub use error::{AppError, DirectoryError};
pub type Result<T> = std::result::Result<T, AppError>;
pub use config::Settings;

pub use auth::{Claims, TokenIssuer};
pub use db::{NewUser, Session, User, UserDirectory};

/// Application state shared across all workers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub directory: UserDirectory,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(config: Settings) -> Self {
        let directory = UserDirectory::new(config.directory.unique_emails);
        let tokens = TokenIssuer::new(
            config.auth.jwt_secret.clone(),
            config.auth.token_expiry_hours,
        );

        Self {
            config: Arc::new(config),
            directory,
            tokens,
        }
    }
}

/// Permissive CORS headers attached to every response, errors included.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Credentials", "true"))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, OPTIONS"))
        .add((
            "Access-Control-Allow-Headers",
            "Accept, Accept-Language, Content-Type, Origin, token",
        ))
        .add((
            "Vary",
            "Origin, Access-Control-Request-Method, Access-Control-Request-Headers",
        ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Undecodable bodies answer with the generic internal code instead of actix's plain-text 400.
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::InternalError(err.to_string()).into()
    }))
    .route("/register", web::post().to(auth::handlers::register))
    .route("/login", web::post().to(auth::handlers::login))
    .route("/users/{id}", web::method(actix_web::http::Method::OPTIONS).to(auth::handlers::get_user));
}
