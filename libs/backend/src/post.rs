use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use sea_orm::ColumnTrait;

use crate::active_models::{decode_list, encode_list, prelude::*, *};
use crate::{BackendResult, IntoBackend};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<blog_post::Model> for BlogPostEntity {
    fn from(value: blog_post::Model) -> Self {
        Self {
            id: value.id,
            slug: value.slug,
            title: value.title,
            date: value.date,
            summary: value.summary,
            content: value.content,
            tags: decode_list(&value.tags),
            published: value.published,
            featured_image: value.featured_image,
            meta_title: value.meta_title,
            meta_description: value.meta_description,
            canonical_url: value.canonical_url,
            og_title: value.og_title,
            og_description: value.og_description,
            og_image: value.og_image,
            twitter_card_type: value.twitter_card_type,
            twitter_title: value.twitter_title,
            twitter_description: value.twitter_description,
            twitter_image: value.twitter_image,
            robots: value.robots,
            keywords: value.keywords.as_deref().map(decode_list),
            created_at: Some(value.created_at.and_utc()),
            updated_at: value.updated_at.map(|t| t.and_utc()),
        }
    }
}

impl From<BlogPostEntity> for blog_post::ActiveModel {
    fn from(value: BlogPostEntity) -> Self {
        Self {
            id: ActiveValue::set(value.id),
            slug: ActiveValue::set(value.slug),
            title: ActiveValue::set(value.title),
            date: ActiveValue::set(value.date),
            summary: ActiveValue::set(value.summary),
            content: ActiveValue::set(value.content),
            tags: ActiveValue::set(encode_list(&value.tags)),
            published: ActiveValue::set(value.published),
            featured_image: ActiveValue::set(value.featured_image),
            meta_title: ActiveValue::set(value.meta_title),
            meta_description: ActiveValue::set(value.meta_description),
            canonical_url: ActiveValue::set(value.canonical_url),
            og_title: ActiveValue::set(value.og_title),
            og_description: ActiveValue::set(value.og_description),
            og_image: ActiveValue::set(value.og_image),
            twitter_card_type: ActiveValue::set(value.twitter_card_type),
            twitter_title: ActiveValue::set(value.twitter_title),
            twitter_description: ActiveValue::set(value.twitter_description),
            twitter_image: ActiveValue::set(value.twitter_image),
            robots: ActiveValue::set(value.robots),
            keywords: ActiveValue::set(
                value.keywords.as_deref().map(encode_list),
            ),
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

impl PostRepository {
    /// Publicly visible posts, newest first. The `date` column is the
    /// display string the original site stored, so ordering is
    /// lexicographic on it.
    pub async fn find_published(&self) -> BackendResult<Vec<BlogPostEntity>> {
        let posts = BlogPosts::find()
            .filter(blog_post::Column::Published.eq(true))
            .order_by_desc(blog_post::Column::Date)
            .all(&self.db)
            .await
            .into_backend("in find published posts")?;

        Ok(posts.into_iter().map(BlogPostEntity::from).collect())
    }

    /// Every post including drafts, for the admin list.
    pub async fn find_all(&self) -> BackendResult<Vec<BlogPostEntity>> {
        let posts = BlogPosts::find()
            .order_by_desc(blog_post::Column::Date)
            .all(&self.db)
            .await
            .into_backend("in find all posts")?;

        Ok(posts.into_iter().map(BlogPostEntity::from).collect())
    }

    pub async fn insert(&self, post: BlogPostEntity) -> BackendResult<()> {
        let model = blog_post::ActiveModel::from(post);

        let _ = BlogPosts::insert(model)
            .exec(&self.db)
            .await
            .into_backend("in insert post")?;

        Ok(())
    }

    pub async fn update(&self, post: BlogPostEntity) -> BackendResult<()> {
        let model = update_model(post);

        let _ = model.update(&self.db).await.into_backend("in update post")?;

        Ok(())
    }

    /// Flips only the `published` column; every other field is left
    /// untouched.
    pub async fn set_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()> {
        let model = blog_post::ActiveModel {
            id: ActiveValue::set(id.to_string()),
            published: ActiveValue::set(published),
            ..Default::default()
        };

        let _ = model
            .update(&self.db)
            .await
            .into_backend("in set post published")?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> BackendResult<()> {
        blog_post::Entity::delete(blog_post::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .into_backend("in delete post")?;

        Ok(())
    }
}

/// An edit that carries no creation timestamp must not rewrite the
/// stored one, so the column is left out of the update statement.
fn update_model(post: BlogPostEntity) -> blog_post::ActiveModel {
    let keep_created_at = post.created_at.is_none();
    let mut model = blog_post::ActiveModel::from(post);
    if keep_created_at {
        model.created_at = ActiveValue::NotSet;
    }
    model
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn update_without_created_at_leaves_the_column_alone() {
        // Arrange
        let post = BlogPostEntity {
            id: "a-post".to_string(),
            title: "A Post".to_string(),
            ..Default::default()
        };

        // Act
        let model = update_model(post);

        // Assert
        assert!(matches!(model.created_at, ActiveValue::NotSet));
        assert!(matches!(model.title, ActiveValue::Set(_)));
    }

    #[test]
    fn update_with_created_at_writes_it() {
        // Arrange
        let post = BlogPostEntity {
            id: "a-post".to_string(),
            created_at: Some(Utc::now()),
            ..Default::default()
        };

        // Act
        let model = update_model(post);

        // Assert
        assert!(matches!(model.created_at, ActiveValue::Set(_)));
    }
}
