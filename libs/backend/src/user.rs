use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    entity::*, ActiveValue, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::{BackendResult, IntoBackend};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<user::Model> for UserEntity {
    fn from(value: user::Model) -> Self {
        UserEntity {
            id: value.id,
            email: value.email,
            password_hash: value.password_hash,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<UserEntity> for user::ActiveModel {
    fn from(value: UserEntity) -> Self {
        Self {
            id: {
                if value.id == i32::default() {
                    ActiveValue::not_set()
                } else {
                    ActiveValue::Set(value.id)
                }
            },
            email: ActiveValue::Set(value.email),
            password_hash: ActiveValue::Set(value.password_hash),
            created_at: if value.created_at == NaiveDateTime::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at)
            },
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
    }
}

impl UserRepository {
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> BackendResult<Option<UserEntity>> {
        let user = Users::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .into_backend("in find user by email")?;

        Ok(user.map(UserEntity::from))
    }

    pub async fn save(&self, user: UserEntity) -> BackendResult<i32> {
        let user = user::ActiveModel::from(user)
            .save(&self.db)
            .await
            .into_backend("in save user")?;

        Ok(user.id.unwrap())
    }
}
