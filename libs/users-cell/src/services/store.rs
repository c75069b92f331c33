// libs/users-cell/src/services/store.rs
use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{NewUser, User, UserError};

#[derive(Default)]
struct StoreInner {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// Registered users keyed by id. Email and username are each unique.
#[derive(Default)]
pub struct UserStore {
    inner: RwLock<StoreInner>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniqueness is checked under the same write lock as the insert.
    pub async fn create(&self, new: NewUser, password_hash: String) -> Result<User, UserError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == new.email) {
            return Err(UserError::EmailTaken);
        }
        if inner.users.values().any(|u| u.username == new.username) {
            return Err(UserError::UsernameTaken);
        }

        inner.last_id += 1;
        let user = User {
            id: inner.last_id,
            username: new.username,
            email: new.email,
            first_name: new.first_name,
            last_name: new.last_name,
            role: new.role,
            password_hash,
        };
        inner.users.insert(user.id, user.clone());
        debug!("Created user {} ({})", user.id, user.role);
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            role: "patient".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn test_ids_increase_and_lookup_by_email() {
        let store = UserStore::new();

        let jane = store
            .create(new_user("jane", "jane@example.com"), "hash-1".into())
            .await
            .unwrap();
        let john = store
            .create(new_user("john", "john@example.com"), "hash-2".into())
            .await
            .unwrap();

        assert_eq!((jane.id, john.id), (1, 2));
        assert_eq!(
            store.find_by_email("john@example.com").await.map(|u| u.id),
            Some(2)
        );
        assert!(store.find_by_email("nobody@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicates_are_rejected() {
        let store = UserStore::new();
        store
            .create(new_user("jane", "jane@example.com"), "hash".into())
            .await
            .unwrap();

        let same_email = store
            .create(new_user("janet", "jane@example.com"), "hash".into())
            .await;
        assert_matches!(same_email, Err(UserError::EmailTaken));

        let same_username = store
            .create(new_user("jane", "other@example.com"), "hash".into())
            .await;
        assert_matches!(same_username, Err(UserError::UsernameTaken));

        let next = store
            .create(new_user("john", "john@example.com"), "hash".into())
            .await
            .unwrap();
        assert_eq!(next.id, 2);
    }
}
