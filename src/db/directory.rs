use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::auth::TokenIssuer;
use crate::db::models::{NewUser, Session, User};
use crate::error::DirectoryError;

/// Append-only, in-memory collection of registered users.
///
/// Position in the collection is the public identifier; the stored `id`
/// is always `position + 1` since nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Arc<RwLock<Vec<User>>>,
    unique_emails: bool,
}

impl UserDirectory {
    pub fn new(unique_emails: bool) -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            unique_emails,
        }
    }

    /// Checks required fields in the order clients rely on for the error code.
    pub fn validate(submission: &NewUser) -> Result<(), DirectoryError> {
        if submission.first_name.is_empty() || submission.last_name.is_empty() {
            return Err(DirectoryError::EmptyName);
        }
        if submission.email.is_empty() {
            return Err(DirectoryError::EmptyEmail);
        }
        if submission.password.is_empty() {
            return Err(DirectoryError::EmptyPassword);
        }
        Ok(())
    }

    pub async fn create(&self, submission: NewUser) -> Result<User, DirectoryError> {
        Self::validate(&submission)?;

        // Id assignment and append happen under one write guard.
        let mut users = self.users.write().await;

        if self.unique_emails && users.iter().any(|u| u.email == submission.email) {
            return Err(DirectoryError::EmailAlreadyExists);
        }

        let user = User::new(users.len() as u64 + 1, submission);
        info!(
            id = user.id,
            email = %user.email,
            created_at = %user.created_at,
            "New user created"
        );
        users.push(user.clone());

        Ok(user)
    }

    /// Looks up a user by 0-based position parsed from raw request input.
    pub async fn get_by_position(&self, raw: &str) -> Result<User, DirectoryError> {
        let position: usize = raw
            .parse()
            .map_err(|_| DirectoryError::InvalidIdentifier(raw.to_string()))?;

        let users = self.users.read().await;
        users
            .get(position)
            .cloned()
            .ok_or(DirectoryError::BadIdentifier(position))
    }

    /// First exact email match in registration order.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.email == email).cloned()
    }

    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        issuer: &TokenIssuer,
    ) -> Result<Session, DirectoryError> {
        let user = self
            .find_by_email(email)
            .await
            .ok_or(DirectoryError::NoEmailFound)?;

        if user.password != password {
            return Err(DirectoryError::PasswordNotMatch);
        }

        let token = issuer.issue(&user)?;
        debug!(user_id = user.id, "Token generated");

        Ok(Session { user, token })
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> NewUser {
        NewUser::new("Ada", "Lovelace", "ada@x.io", "p1")
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test_secret", 12)
    }

    #[test]
    fn test_validation_precedence() {
        let all_empty = NewUser::default();
        assert!(matches!(UserDirectory::validate(&all_empty), Err(DirectoryError::EmptyName)));

        let no_last = NewUser::new("Ada", "", "", "");
        assert!(matches!(UserDirectory::validate(&no_last), Err(DirectoryError::EmptyName)));

        let no_email = NewUser::new("Ada", "Lovelace", "", "");
        assert!(matches!(UserDirectory::validate(&no_email), Err(DirectoryError::EmptyEmail)));

        let no_password = NewUser::new("Ada", "Lovelace", "ada@x.io", "");
        assert!(matches!(UserDirectory::validate(&no_password), Err(DirectoryError::EmptyPassword)));

        assert!(UserDirectory::validate(&ada()).is_ok());
    }

    #[test_log::test(tokio::test)]
    async fn test_rejected_submission_leaves_directory_unchanged() {
        let directory = UserDirectory::default();
        directory.create(ada()).await.unwrap();

        for bad in [
            NewUser::new("", "Lovelace", "a@x.io", "p"),
            NewUser::new("Ada", "", "a@x.io", "p"),
            NewUser::new("Ada", "Lovelace", "", "p"),
            NewUser::new("Ada", "Lovelace", "a@x.io", ""),
        ] {
            assert!(directory.create(bad).await.is_err());
            assert_eq!(directory.len().await, 1);
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_create_assigns_sequential_ids() {
        let directory = UserDirectory::default();
        assert!(directory.is_empty().await);

        let first = directory.create(ada()).await.unwrap();
        let second = directory
            .create(NewUser::new("Charles", "Babbage", "cb@x.io", "p2"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(directory.len().await, 2);
        assert!(first.is_admin);
        assert!(chrono::DateTime::parse_from_rfc3339(&first.created_at).is_ok());

        let stored = directory.get_by_position("1").await.unwrap();
        assert_eq!(stored, second);
    }

    #[tokio::test]
    async fn test_get_by_position() {
        let directory = UserDirectory::default();
        directory.create(ada()).await.unwrap();

        let user = directory.get_by_position("0").await.unwrap();
        assert_eq!(user.email, "ada@x.io");

        assert!(matches!(
            directory.get_by_position("5").await,
            Err(DirectoryError::BadIdentifier(5))
        ));
        assert!(matches!(
            directory.get_by_position("1").await,
            Err(DirectoryError::BadIdentifier(1))
        ));
        for raw in ["abc", "", "-1", "1.5"] {
            assert!(matches!(
                directory.get_by_position(raw).await,
                Err(DirectoryError::InvalidIdentifier(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_find_by_email_returns_first_match() {
        let directory = UserDirectory::default();
        directory.create(ada()).await.unwrap();
        directory
            .create(NewUser::new("Augusta", "King", "ada@x.io", "p2"))
            .await
            .unwrap();

        let found = directory.find_by_email("ada@x.io").await.unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.firstname, "Ada");
        assert!(directory.find_by_email("nobody@x.io").await.is_none());
        assert!(directory.find_by_email("ADA@x.io").await.is_none());
    }

    #[tokio::test]
    async fn test_unique_emails_rejects_duplicate() {
        let directory = UserDirectory::new(true);
        directory.create(ada()).await.unwrap();

        let result = directory
            .create(NewUser::new("Augusta", "King", "ada@x.io", "p2"))
            .await;
        assert!(matches!(result, Err(DirectoryError::EmailAlreadyExists)));
        assert_eq!(directory.len().await, 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_authenticate() {
        let directory = UserDirectory::default();
        directory.create(ada()).await.unwrap();
        let issuer = issuer();

        assert!(matches!(
            directory.authenticate("nobody@x.io", "p1", &issuer).await,
            Err(DirectoryError::NoEmailFound)
        ));
        assert!(matches!(
            directory.authenticate("ada@x.io", "wrong", &issuer).await,
            Err(DirectoryError::PasswordNotMatch)
        ));

        let session = directory.authenticate("ada@x.io", "p1", &issuer).await.unwrap();
        assert_eq!(session.user.email, "ada@x.io");

        let claims = issuer.decode(&session.token).unwrap();
        assert!(claims.admin);
        assert_eq!(claims.sub, "1");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let directory = UserDirectory::default();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let directory = directory.clone();
                tokio::spawn(async move {
                    directory
                        .create(NewUser::new("User", "Number", format!("u{}@x.io", i), "pw"))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=64).collect::<Vec<u64>>());

        let snapshot = directory.snapshot().await;
        for (position, user) in snapshot.iter().enumerate() {
            assert_eq!(user.id, position as u64 + 1);
        }
    }
}
