use actix_web::{web, HttpResponse};
use crate::AppState;
use crate::auth::form::FormValues;
use crate::db::NewUser;
use crate::error::AppError;
use crate::response::Reply;
use tracing::{info, warn, error};

pub async fn register(
    form: FormValues,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let submission = NewUser::new(
        form.value("first_name"),
        form.value("last_name"),
        form.value("email"),
        form.value("password"),
    );
    info!("Received registration request for email: {}", submission.email);

    match state.directory.create(submission).await {
        Ok(user) => {
            info!("Registration successful for user {}", user.id);
            Ok(HttpResponse::Created().json(Reply::success("success")))
        }
        Err(e) => {
            warn!("Registration rejected: {}", e);
            Err(e.into())
        }
    }
}

pub async fn login(
    form: FormValues,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = form.value("email");
    info!("Received login request for email: {}", email);

    match state.directory.authenticate(email, form.value("password"), &state.tokens).await {
        Ok(session) => {
            info!("Login successful for email: {}", email);
            Ok(HttpResponse::Accepted().json(Reply::success(session)))
        }
        Err(e) => {
            error!("Login failed for email: {}: {}", email, e);
            Err(e.into())
        }
    }
}

/// Fetches a user by 0-based position taken from the `userId` field.
///
/// The `{id}` path segment is not consulted; a missing `userId` is
/// rejected like any other non-numeric identifier.
pub async fn get_user(
    form: FormValues,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = state.directory.get_by_position(form.value("userId")).await.map_err(|e| {
        warn!("User lookup failed: {}", e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Accepted().json(Reply::success(user)))
}
