use std::sync::Arc;

use entity::prelude::*;
use migration::Migrator;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use auth::Auth;
use post::PostRepository;
use user::UserRepository;
use work::WorkRepository;

mod active_models;
pub mod auth;
pub mod post;
pub mod user;
pub mod work;

pub use auth::Session;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("content backend is not configured")]
    NotConfigured,

    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    Db {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("{0}")]
    Auth(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

pub(crate) trait IntoBackend<T> {
    fn into_backend(self, message: &str) -> BackendResult<T>;
}

impl<T> IntoBackend<T> for Result<T, sea_orm::DbErr> {
    fn into_backend(self, message: &str) -> BackendResult<T> {
        self.map_err(|e| BackendError::Db {
            message: message.to_string(),
            source: e,
        })
    }
}

/// The single seam between the application and the hosted store. The
/// live implementation talks to Postgres; [`Offline`] stands in when no
/// credentials are configured. Callers must treat "not configured" and
/// "unreachable" identically: both surface as recoverable errors.
#[async_trait::async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    async fn published_posts(&self) -> BackendResult<Vec<BlogPostEntity>>;
    async fn all_posts(&self) -> BackendResult<Vec<BlogPostEntity>>;
    async fn insert_post(&self, post: BlogPostEntity) -> BackendResult<()>;
    async fn update_post(&self, post: BlogPostEntity) -> BackendResult<()>;
    async fn set_post_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()>;
    async fn delete_post(&self, id: &str) -> BackendResult<()>;

    async fn published_works(&self) -> BackendResult<Vec<WorkItemEntity>>;
    async fn all_works(&self) -> BackendResult<Vec<WorkItemEntity>>;
    async fn count_works(&self) -> BackendResult<u64>;
    async fn insert_work(&self, work: WorkItemEntity) -> BackendResult<()>;
    async fn update_work(&self, work: WorkItemEntity) -> BackendResult<()>;
    async fn set_work_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()>;
    async fn delete_work(&self, id: &str) -> BackendResult<()>;

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session>;
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session>;
    async fn sign_out(&self, token: &str) -> BackendResult<()>;
    async fn session(&self, token: &str) -> BackendResult<Option<Session>>;
}

pub type SharedBackend = Arc<dyn Backend>;

#[derive(Clone, Debug)]
pub struct Live {
    pub post: PostRepository,
    pub work: WorkRepository,
    pub auth: Auth,
}

impl Live {
    pub async fn connect(db_url: &str) -> BackendResult<Self> {
        let db = init_db(db_url).await?;

        Ok(Self {
            post: PostRepository::new(db.clone()),
            work: WorkRepository::new(db.clone()),
            auth: Auth::new(UserRepository::new(db)),
        })
    }
}

async fn init_db(db_url: &str) -> BackendResult<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_backend("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_backend("in migrator up")?;

    Ok(db)
}

#[async_trait::async_trait]
impl Backend for Live {
    async fn published_posts(&self) -> BackendResult<Vec<BlogPostEntity>> {
        self.post.find_published().await
    }

    async fn all_posts(&self) -> BackendResult<Vec<BlogPostEntity>> {
        self.post.find_all().await
    }

    async fn insert_post(&self, post: BlogPostEntity) -> BackendResult<()> {
        self.post.insert(post).await
    }

    async fn update_post(&self, post: BlogPostEntity) -> BackendResult<()> {
        self.post.update(post).await
    }

    async fn set_post_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()> {
        self.post.set_published(id, published).await
    }

    async fn delete_post(&self, id: &str) -> BackendResult<()> {
        self.post.delete(id).await
    }

    async fn published_works(&self) -> BackendResult<Vec<WorkItemEntity>> {
        self.work.find_published().await
    }

    async fn all_works(&self) -> BackendResult<Vec<WorkItemEntity>> {
        self.work.find_all().await
    }

    async fn count_works(&self) -> BackendResult<u64> {
        self.work.count().await
    }

    async fn insert_work(&self, work: WorkItemEntity) -> BackendResult<()> {
        self.work.insert(work).await
    }

    async fn update_work(&self, work: WorkItemEntity) -> BackendResult<()> {
        self.work.update(work).await
    }

    async fn set_work_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()> {
        self.work.set_published(id, published).await
    }

    async fn delete_work(&self, id: &str) -> BackendResult<()> {
        self.work.delete(id).await
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        self.auth.sign_in(email, password).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        self.auth.sign_up(email, password).await
    }

    async fn sign_out(&self, token: &str) -> BackendResult<()> {
        self.auth.sign_out(token).await;
        Ok(())
    }

    async fn session(&self, token: &str) -> BackendResult<Option<Session>> {
        Ok(self.auth.session(token).await)
    }
}

/// Stub used when no database credentials are configured. Reads and
/// writes fail with [`BackendError::NotConfigured`], the session is
/// always absent, nothing ever panics.
#[derive(Clone, Debug)]
pub struct Offline;

#[async_trait::async_trait]
impl Backend for Offline {
    async fn published_posts(&self) -> BackendResult<Vec<BlogPostEntity>> {
        Err(BackendError::NotConfigured)
    }

    async fn all_posts(&self) -> BackendResult<Vec<BlogPostEntity>> {
        Err(BackendError::NotConfigured)
    }

    async fn insert_post(&self, _post: BlogPostEntity) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn update_post(&self, _post: BlogPostEntity) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn set_post_published(
        &self,
        _id: &str,
        _published: bool,
    ) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn delete_post(&self, _id: &str) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn published_works(&self) -> BackendResult<Vec<WorkItemEntity>> {
        Err(BackendError::NotConfigured)
    }

    async fn all_works(&self) -> BackendResult<Vec<WorkItemEntity>> {
        Err(BackendError::NotConfigured)
    }

    async fn count_works(&self) -> BackendResult<u64> {
        Err(BackendError::NotConfigured)
    }

    async fn insert_work(&self, _work: WorkItemEntity) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn update_work(&self, _work: WorkItemEntity) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn set_work_published(
        &self,
        _id: &str,
        _published: bool,
    ) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn delete_work(&self, _id: &str) -> BackendResult<()> {
        Err(BackendError::NotConfigured)
    }

    async fn sign_in(
        &self,
        _email: &str,
        _password: &str,
    ) -> BackendResult<Session> {
        Err(BackendError::NotConfigured)
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
    ) -> BackendResult<Session> {
        Err(BackendError::NotConfigured)
    }

    async fn sign_out(&self, _token: &str) -> BackendResult<()> {
        Ok(())
    }

    async fn session(&self, _token: &str) -> BackendResult<Option<Session>> {
        Ok(None)
    }
}
