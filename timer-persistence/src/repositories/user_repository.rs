use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::entities::{prelude::*, users};
use crate::error::StoreError;
use timer_types::User;

pub struct UserRepository {
    db: DatabaseConnection,
}

/// Fields supplied when creating a user; the id is assigned here.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
}

pub(crate) fn model_to_user(model: users::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        user_name: model.user_name,
        email: model.email,
    }
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User, StoreError> {
        Users::find_by_id(id)
            .one(&self.db)
            .await?
            .map(model_to_user)
            .ok_or(StoreError::NotFound)
    }

    /// Fails with [`StoreError::Constraint`] when the user name is already taken.
    pub async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user_model = users::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            first_name: ActiveValue::Set(new_user.first_name),
            last_name: ActiveValue::Set(new_user.last_name),
            user_name: ActiveValue::Set(new_user.user_name),
            email: ActiveValue::Set(new_user.email),
        };

        let created = user_model.insert(&self.db).await?;
        tracing::debug!("Created user {}", created.id);
        Ok(model_to_user(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{connect_to_memory_database, ensure_schema};

    async fn setup_test_db() -> UserRepository {
        let db = connect_to_memory_database().await.unwrap();
        ensure_schema(&db).await.unwrap();
        UserRepository::new(db)
    }

    fn new_user(user_name: &str) -> NewUser {
        NewUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: user_name.to_string(),
            email: format!("{}@example.com", user_name),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let repo = setup_test_db().await;

        let created = repo.create(new_user("ada")).await.unwrap();
        assert_eq!(created.user_name, "ada");
        assert_eq!(created.full_name(), "Ada Lovelace");

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_duplicate_user_name_is_constraint_violation() {
        let repo = setup_test_db().await;

        repo.create(new_user("ada")).await.unwrap();
        let err = repo.create(new_user("ada")).await.unwrap_err();

        assert!(matches!(err, StoreError::Constraint(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let repo = setup_test_db().await;

        let err = repo.find_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
