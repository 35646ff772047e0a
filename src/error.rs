use thiserror::Error;
use actix_web::{ResponseError, HttpResponse, http::StatusCode};

use crate::response::{Reply, ResultCode};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Directory error: {0}")]
    DirectoryError(#[from] DirectoryError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Failures produced by the user directory and token issuer.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("First and last name are required")]
    EmptyName,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Password is required")]
    EmptyPassword,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Invalid user identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("No user at position {0}")]
    BadIdentifier(usize),

    #[error("No user registered with that email")]
    NoEmailFound,

    #[error("Password does not match")]
    PasswordNotMatch,

    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Token lifetime of {0} hours is out of range")]
    TokenLifetime(i64),
}

impl DirectoryError {
    pub fn code(&self) -> ResultCode {
        match self {
            DirectoryError::EmptyName => ResultCode::EmptyName,
            DirectoryError::EmptyEmail => ResultCode::EmptyEmail,
            DirectoryError::EmptyPassword => ResultCode::EmptyPassword,
            DirectoryError::EmailAlreadyExists => ResultCode::EmailAlreadyExists,
            DirectoryError::BadIdentifier(_) => ResultCode::BadIdentifier,
            DirectoryError::NoEmailFound => ResultCode::NoEmailFound,
            DirectoryError::PasswordNotMatch => ResultCode::PasswordNotMatch,
            DirectoryError::InvalidIdentifier(_)
            | DirectoryError::Jwt(_)
            | DirectoryError::TokenLifetime(_) => ResultCode::Oops,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::EmptyName
            | DirectoryError::EmptyEmail
            | DirectoryError::EmptyPassword
            | DirectoryError::EmailAlreadyExists => StatusCode::NOT_ACCEPTABLE,
            DirectoryError::BadIdentifier(_) => StatusCode::NOT_FOUND,
            DirectoryError::NoEmailFound | DirectoryError::PasswordNotMatch => StatusCode::BAD_REQUEST,
            DirectoryError::InvalidIdentifier(_)
            | DirectoryError::Jwt(_)
            | DirectoryError::TokenLifetime(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn code(&self) -> ResultCode {
        match self {
            AppError::DirectoryError(e) => e.code(),
            _ => ResultCode::Oops,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

// Failures never carry a message on the wire, only the numeric code.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Reply::failure(self.code()))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DirectoryError(e) => e.status_code(),
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
