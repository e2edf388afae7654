//! User registration service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::auth_service::hash_password;
use crate::domain::blog_service::map_user_repository_error;
use crate::domain::ports::{
    PasswordHasher, UserRecord, UserRegistration, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, Registration, User, UserId};

/// Registers users and lists the directory.
#[derive(Clone)]
pub struct UserRegistrationService<U> {
    users: Arc<U>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<U> UserRegistrationService<U> {
    /// Build the service over a user repository and password hasher.
    pub fn new(users: Arc<U>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<U> UserRegistration for UserRegistrationService<U>
where
    U: UserRepository,
{
    async fn register(&self, registration: Registration) -> Result<User, Error> {
        let password_hash = hash_password(&self.hasher, registration.password()).await?;
        let user = User::new(
            UserId::random(),
            registration.username().clone(),
            registration.display_name().clone(),
        );

        let record = UserRecord {
            user: user.clone(),
            password_hash,
        };
        match self.users.insert(record).await {
            Ok(()) => {}
            Err(UserRepositoryError::DuplicateUsername { username }) => {
                return Err(Error::conflict(format!("username {username} is already taken"))
                    .with_details(json!({ "field": "username", "code": "duplicate_username" })));
            }
            Err(err) => return Err(map_user_repository_error(err)),
        }

        info!(user_id = %user.id(), username = %user.username(), "user registered");
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockPasswordHasher, MockUserRepository};
    use crate::outbound::memory::InMemoryUserRepository;
    use rstest::rstest;

    fn registration(username: &str) -> Registration {
        Registration::try_from_parts("Andrew Padgett", username, "weakpassword")
            .expect("valid registration")
    }

    fn stub_hasher() -> Arc<dyn PasswordHasher> {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hashed:{password}")));
        Arc::new(hasher)
    }

    #[rstest]
    #[tokio::test]
    async fn register_stores_hash_not_password() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = UserRegistrationService::new(repo.clone(), stub_hasher());

        let user = service.register(registration("adp10390")).await.expect("register");

        let stored = repo
            .find_by_username("adp10390")
            .await
            .expect("query")
            .expect("stored");
        assert_eq!(stored.user, user);
        assert_eq!(stored.password_hash, "hashed:weakpassword");
    }

    #[rstest]
    #[tokio::test]
    async fn hashing_runs_off_the_async_worker() {
        let worker = std::thread::current().id();
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().times(1).returning(move |password| {
            assert_ne!(std::thread::current().id(), worker);
            Ok(format!("hashed:{password}"))
        });
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = UserRegistrationService::new(repo, Arc::new(hasher));

        service.register(registration("adp10390")).await.expect("register");
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = UserRegistrationService::new(repo, stub_hasher());
        service.register(registration("adp10390")).await.expect("first");

        let err = service
            .register(registration("adp10390"))
            .await
            .expect_err("duplicate");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "username", "code": "duplicate_username" }))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn repository_failure_is_internal() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(UserRepositoryError::connection("refused")));
        let service = UserRegistrationService::new(Arc::new(repo), stub_hasher());

        let err = service
            .register(registration("adp10390"))
            .await
            .expect_err("failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn hasher_failure_skips_the_repository() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .return_once(|_| Err(crate::domain::ports::PasswordHashError::hash("oom")));
        let mut repo = MockUserRepository::new();
        repo.expect_insert().times(0);
        let service = UserRegistrationService::new(Arc::new(repo), Arc::new(hasher));

        let err = service
            .register(registration("adp10390"))
            .await
            .expect_err("failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
