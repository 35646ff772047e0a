//! Registration, login and user lookup endpoints.
//!
//! Session tokens are HS256 JWTs signed with the configured secret.

pub mod form;
pub mod handlers;
mod service;

pub use service::{TokenIssuer, Claims};
