use chrono::Utc;
use sea_orm::{
    strum::IntoEnumIterator as _, ActiveModelTrait, ActiveValue,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use sea_orm::ColumnTrait;
use strum::IntoEnumIterator as _;

use crate::active_models::{decode_list, encode_list, prelude::*, *};
use crate::{BackendResult, IntoBackend};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct WorkRepository {
    db: DatabaseConnection,
}

impl WorkRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<work_item::Model> for WorkItemEntity {
    fn from(value: work_item::Model) -> Self {
        Self {
            id: value.id,
            slug: value.slug,
            work_type: value.work_type.into(),
            title: value.title,
            subtext: value.subtext,
            description: value.description,
            content: value.content,
            tags: decode_list(&value.tags),
            image: value.image,
            link: value.link,
            date: value.date,
            published: value.published,
            display_order: value.display_order,
            created_at: Some(value.created_at.and_utc()),
            updated_at: value.updated_at.map(|t| t.and_utc()),
        }
    }
}

impl From<WorkItemEntity> for work_item::ActiveModel {
    fn from(value: WorkItemEntity) -> Self {
        let work_type: work_item::WorkType = value.work_type.into();
        Self {
            id: ActiveValue::set(value.id),
            slug: ActiveValue::set(value.slug),
            work_type: ActiveValue::set(work_type),
            title: ActiveValue::set(value.title),
            subtext: ActiveValue::set(value.subtext),
            description: ActiveValue::set(value.description),
            content: ActiveValue::set(value.content),
            tags: ActiveValue::set(encode_list(&value.tags)),
            image: ActiveValue::set(value.image),
            link: ActiveValue::set(value.link),
            date: ActiveValue::set(value.date),
            published: ActiveValue::set(value.published),
            display_order: ActiveValue::set(value.display_order),
            created_at: ActiveValue::set(
                value
                    .created_at
                    .map(|t| t.naive_utc())
                    .unwrap_or_else(|| Utc::now().naive_utc()),
            ),
            updated_at: ActiveValue::set(
                value.updated_at.map(|t| t.naive_utc()),
            ),
        }
    }
}

impl WorkRepository {
    /// Publicly visible items in their curated listing order.
    pub async fn find_published(&self) -> BackendResult<Vec<WorkItemEntity>> {
        let works = WorkItems::find()
            .filter(work_item::Column::Published.eq(true))
            .order_by_asc(work_item::Column::DisplayOrder)
            .all(&self.db)
            .await
            .into_backend("in find published works")?;

        Ok(works.into_iter().map(WorkItemEntity::from).collect())
    }

    pub async fn find_all(&self) -> BackendResult<Vec<WorkItemEntity>> {
        let works = WorkItems::find()
            .order_by_asc(work_item::Column::DisplayOrder)
            .all(&self.db)
            .await
            .into_backend("in find all works")?;

        Ok(works.into_iter().map(WorkItemEntity::from).collect())
    }

    pub async fn count(&self) -> BackendResult<u64> {
        WorkItems::find()
            .count(&self.db)
            .await
            .into_backend("in count works")
    }

    pub async fn insert(&self, work: WorkItemEntity) -> BackendResult<()> {
        let model = work_item::ActiveModel::from(work);

        let _ = WorkItems::insert(model)
            .exec(&self.db)
            .await
            .into_backend("in insert work")?;

        Ok(())
    }

    pub async fn update(&self, work: WorkItemEntity) -> BackendResult<()> {
        let model = update_model(work);

        let _ = model.update(&self.db).await.into_backend("in update work")?;

        Ok(())
    }

    pub async fn set_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()> {
        let model = work_item::ActiveModel {
            id: ActiveValue::set(id.to_string()),
            published: ActiveValue::set(published),
            ..Default::default()
        };

        let _ = model
            .update(&self.db)
            .await
            .into_backend("in set work published")?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> BackendResult<()> {
        work_item::Entity::delete(work_item::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .into_backend("in delete work")?;

        Ok(())
    }
}

/// Same contract as the post repository: an edit without a creation
/// timestamp leaves the stored column untouched.
fn update_model(work: WorkItemEntity) -> work_item::ActiveModel {
    let keep_created_at = work.created_at.is_none();
    let mut model = work_item::ActiveModel::from(work);
    if keep_created_at {
        model.created_at = ActiveValue::NotSet;
    }
    model
}

macro_rules! impl_from {
    ($from:ty, $to:ty) => {
        impl From<$from> for $to {
            fn from(value: $from) -> Self {
                <$to>::iter()
                    .find(|x| (x.clone() as usize) == (value.clone() as usize))
                    .unwrap()
            }
        }

        impl From<$to> for $from {
            fn from(value: $to) -> Self {
                <$from>::iter()
                    .find(|x| (x.clone() as usize) == (value.clone() as usize))
                    .unwrap()
            }
        }
    };
}

impl_from!(entity::work::WorkType, work_item::WorkType);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn update_without_created_at_leaves_the_column_alone() {
        // Arrange
        let work = WorkItemEntity {
            id: "a-work".to_string(),
            display_order: 2,
            ..Default::default()
        };

        // Act
        let model = update_model(work);

        // Assert
        assert!(matches!(model.created_at, ActiveValue::NotSet));
        assert!(matches!(model.display_order, ActiveValue::Set(2)));
    }
}
