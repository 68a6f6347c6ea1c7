use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use backend::{Backend, BackendError, BackendResult, Session, SharedBackend};
use entity::prelude::*;
use tokio::sync::RwLock;

/// In-memory stand-in for the hosted store. Rows live in process
/// memory, writes can be forced to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    posts: RwLock<Vec<BlogPostEntity>>,
    works: RwLock<Vec<WorkItemEntity>>,
    accounts: RwLock<HashMap<String, String>>,
    sessions: RwLock<HashMap<String, Session>>,
    fail_writes: AtomicBool,
    next_user_id: RwLock<i32>,
}

impl MemoryBackend {
    pub fn shared(self) -> SharedBackend {
        Arc::new(self)
    }

    pub async fn with_account(self, email: &str, password: &str) -> Self {
        self.accounts
            .write()
            .await
            .insert(email.to_string(), password.to_string());
        self
    }

    pub async fn with_posts(self, posts: Vec<BlogPostEntity>) -> Self {
        *self.posts.write().await = posts;
        self
    }

    pub async fn with_works(self, works: Vec<WorkItemEntity>) -> Self {
        *self.works.write().await = works;
        self
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> BackendResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(BackendError::NotConfigured)
        } else {
            Ok(())
        }
    }

    async fn open_session(&self, email: &str) -> Session {
        let mut next = self.next_user_id.write().await;
        *next += 1;
        let session = Session {
            token: uuid::Uuid::new_v4().to_string(),
            user_id: *next,
            email: email.to_string(),
        };
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        session
    }
}

#[async_trait::async_trait]
impl Backend for MemoryBackend {
    async fn published_posts(&self) -> BackendResult<Vec<BlogPostEntity>> {
        let mut posts: Vec<_> = self
            .posts
            .read()
            .await
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn all_posts(&self) -> BackendResult<Vec<BlogPostEntity>> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn insert_post(&self, post: BlogPostEntity) -> BackendResult<()> {
        self.check_writable()?;
        self.posts.write().await.push(post);
        Ok(())
    }

    async fn update_post(&self, post: BlogPostEntity) -> BackendResult<()> {
        self.check_writable()?;
        let mut posts = self.posts.write().await;
        if let Some(row) = posts.iter_mut().find(|p| p.id == post.id) {
            *row = post;
        }
        Ok(())
    }

    async fn set_post_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()> {
        self.check_writable()?;
        let mut posts = self.posts.write().await;
        if let Some(row) = posts.iter_mut().find(|p| p.id == id) {
            row.published = published;
        }
        Ok(())
    }

    async fn delete_post(&self, id: &str) -> BackendResult<()> {
        self.check_writable()?;
        self.posts.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn published_works(&self) -> BackendResult<Vec<WorkItemEntity>> {
        let mut works: Vec<_> = self
            .works
            .read()
            .await
            .iter()
            .filter(|w| w.published)
            .cloned()
            .collect();
        works.sort_by_key(|w| w.display_order);
        Ok(works)
    }

    async fn all_works(&self) -> BackendResult<Vec<WorkItemEntity>> {
        let mut works = self.works.read().await.clone();
        works.sort_by_key(|w| w.display_order);
        Ok(works)
    }

    async fn count_works(&self) -> BackendResult<u64> {
        Ok(self.works.read().await.len() as u64)
    }

    async fn insert_work(&self, work: WorkItemEntity) -> BackendResult<()> {
        self.check_writable()?;
        self.works.write().await.push(work);
        Ok(())
    }

    async fn update_work(&self, work: WorkItemEntity) -> BackendResult<()> {
        self.check_writable()?;
        let mut works = self.works.write().await;
        if let Some(row) = works.iter_mut().find(|w| w.id == work.id) {
            *row = work;
        }
        Ok(())
    }

    async fn set_work_published(
        &self,
        id: &str,
        published: bool,
    ) -> BackendResult<()> {
        self.check_writable()?;
        let mut works = self.works.write().await;
        if let Some(row) = works.iter_mut().find(|w| w.id == id) {
            row.published = published;
        }
        Ok(())
    }

    async fn delete_work(&self, id: &str) -> BackendResult<()> {
        self.check_writable()?;
        self.works.write().await.retain(|w| w.id != id);
        Ok(())
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        let accounts = self.accounts.read().await;
        match accounts.get(email) {
            Some(stored) if stored == password => {
                drop(accounts);
                Ok(self.open_session(email).await)
            }
            _ => Err(BackendError::Auth(
                "invalid email or password".to_string(),
            )),
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(BackendError::Auth(
                "an account with this email already exists".to_string(),
            ));
        }
        accounts.insert(email.to_string(), password.to_string());
        drop(accounts);
        Ok(self.open_session(email).await)
    }

    async fn sign_out(&self, token: &str) -> BackendResult<()> {
        self.sessions.write().await.remove(token);
        Ok(())
    }

    async fn session(&self, token: &str) -> BackendResult<Option<Session>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }
}
