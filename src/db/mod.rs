//! User storage for the directory service.
//!
//! Records live in memory only, in registration order, behind a
//! read/write lock owned by the application state.

pub mod directory;
pub mod models;

pub use directory::UserDirectory;
pub use models::{NewUser, Session, User};
