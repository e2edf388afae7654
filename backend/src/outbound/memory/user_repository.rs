//! `UserRepository` adapter backed by locked maps.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRecord, UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

#[derive(Debug, Default)]
struct UserTable {
    by_id: HashMap<UserId, UserRecord>,
    // Username index; ordered so listings come out sorted.
    by_username: BTreeMap<String, UserId>,
}

/// In-memory credential store and user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, record: UserRecord) -> Result<(), UserRepositoryError> {
        let mut table = self.table.write().await;
        let username = record.user.username().as_ref().to_owned();
        if table.by_username.contains_key(&username) {
            return Err(UserRepositoryError::duplicate_username(username));
        }
        let id = record.user.id().clone();
        if table.by_id.contains_key(&id) {
            return Err(UserRepositoryError::query(format!("user id {id} already exists")));
        }
        table.by_username.insert(username, id.clone());
        table.by_id.insert(id, record);
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, UserRepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .by_username
            .get(username)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let table = self.table.read().await;
        Ok(table.by_id.get(id).map(|record| record.user.clone()))
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .by_username
            .values()
            .filter_map(|id| table.by_id.get(id))
            .map(|record| record.user.clone())
            .collect())
    }

    async fn clear(&self) -> Result<(), UserRepositoryError> {
        let mut table = self.table.write().await;
        table.by_id.clear();
        table.by_username.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayName, Username};
    use rstest::rstest;

    fn record(username: &str) -> UserRecord {
        UserRecord {
            user: User::new(
                UserId::random(),
                Username::new(username).expect("username"),
                DisplayName::new("Some Name").expect("name"),
            ),
            password_hash: "$argon2id$stub".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn usernames_are_unique() {
        let repo = InMemoryUserRepository::default();
        repo.insert(record("adp10390")).await.expect("first insert");
        let err = repo.insert(record("adp10390")).await.expect_err("duplicate");
        assert_eq!(err, UserRepositoryError::duplicate_username("adp10390"));
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_by_username_and_id_agree() {
        let repo = InMemoryUserRepository::default();
        let stored = record("alice");
        repo.insert(stored.clone()).await.expect("insert");

        let by_name = repo.find_by_username("alice").await.expect("query");
        assert_eq!(by_name, Some(stored.clone()));
        let by_id = repo.find_by_id(stored.user.id()).await.expect("query");
        assert_eq!(by_id, Some(stored.user));
        assert!(repo.find_by_username("bob").await.expect("query").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_sorted_by_username_and_clear_empties() {
        let repo = InMemoryUserRepository::default();
        for name in ["carol", "alice", "bob"] {
            repo.insert(record(name)).await.expect("insert");
        }
        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|user| user.username().to_string())
            .collect();
        assert_eq!(names, ["alice", "bob", "carol"]);

        repo.clear().await.expect("clear");
        assert!(repo.list().await.expect("list").is_empty());
    }
}
