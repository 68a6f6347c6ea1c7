use std::time::{Duration, Instant};

use backend::{Session, SharedBackend};
use chrono::Utc;
use entity::post::BlogPost;
use entity::work::WorkItem;
use uuid::Uuid;

const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible status message that expires on its own.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    posted_at: Instant,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            posted_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            posted_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= NOTICE_TTL
    }
}

#[derive(Debug, Clone)]
pub enum AdminState {
    SignedOut,
    Listing,
    EditingPost { draft: BlogPost, is_new: bool },
    EditingWork { draft: WorkItem, is_new: bool },
}

/// The authoring workflow. Every operation that talks to the store
/// surfaces failure as a notice and leaves the previous state intact,
/// so the panel is always in an interactive state.
pub struct AdminPanel {
    backend: SharedBackend,
    state: AdminState,
    session: Option<Session>,
    posts: Vec<BlogPost>,
    works: Vec<WorkItem>,
    saving: bool,
    notice: Option<Notice>,
}

impl AdminPanel {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            backend,
            state: AdminState::SignedOut,
            session: None,
            posts: Vec::new(),
            works: Vec::new(),
            saving: false,
            notice: None,
        }
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Drafts are listed alongside published rows. The admin sees
    /// everything.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn works(&self) -> &[WorkItem] {
        &self.works
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired())
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) {
        match self.backend.sign_in(email, password).await {
            Ok(session) => {
                self.session = Some(session);
                self.state = AdminState::Listing;
                self.refresh().await;
            }
            Err(error) => {
                self.notice = Some(Notice::error(error.to_string()));
            }
        }
    }

    pub async fn sign_up(&mut self, email: &str, password: &str) {
        match self.backend.sign_up(email, password).await {
            Ok(_) => {
                self.notice =
                    Some(Notice::success("Account created! You can sign in now."));
            }
            Err(error) => {
                self.notice = Some(Notice::error(error.to_string()));
            }
        }
    }

    pub async fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            // A failed sign-out still drops the local session.
            let _ = self.backend.sign_out(&session.token).await;
        }
        self.posts.clear();
        self.works.clear();
        self.state = AdminState::SignedOut;
    }

    pub async fn refresh(&mut self) {
        if self.session.is_none() {
            return;
        }
        match self.backend.all_posts().await {
            Ok(posts) => self.posts = posts,
            Err(error) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to fetch posts: {}",
                    error
                )));
            }
        }
        match self.backend.all_works().await {
            Ok(works) => self.works = works,
            Err(error) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to fetch works: {}",
                    error
                )));
            }
        }
    }

    pub fn new_post(&mut self) {
        if self.session.is_none() {
            return;
        }
        let draft = BlogPost {
            id: Uuid::new_v4().to_string(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            ..Default::default()
        };
        self.state = AdminState::EditingPost {
            draft,
            is_new: true,
        };
    }

    pub fn edit_post(&mut self, id: &str) {
        if let Some(post) = self.posts.iter().find(|p| p.id == id) {
            self.state = AdminState::EditingPost {
                draft: post.clone(),
                is_new: false,
            };
        }
    }

    /// New works append at the end of the curated ordering.
    pub fn new_work(&mut self) {
        if self.session.is_none() {
            return;
        }
        let draft = WorkItem {
            id: Uuid::new_v4().to_string(),
            display_order: self.works.len() as i32,
            ..Default::default()
        };
        self.state = AdminState::EditingWork {
            draft,
            is_new: true,
        };
    }

    pub fn edit_work(&mut self, id: &str) {
        if let Some(work) = self.works.iter().find(|w| w.id == id) {
            self.state = AdminState::EditingWork {
                draft: work.clone(),
                is_new: false,
            };
        }
    }

    pub fn edit_draft_post(&mut self) -> Option<&mut BlogPost> {
        match &mut self.state {
            AdminState::EditingPost { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn edit_draft_work(&mut self) -> Option<&mut WorkItem> {
        match &mut self.state {
            AdminState::EditingWork { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        if self.session.is_some() {
            self.state = AdminState::Listing;
        }
    }

    /// Persists the open draft. Success returns to the listing with a
    /// fresh fetch; failure keeps the draft open so nothing typed is
    /// lost.
    pub async fn save(&mut self) {
        if self.saving {
            return;
        }
        self.saving = true;
        let result = match self.state.clone() {
            AdminState::EditingPost { mut draft, is_new } => {
                draft.prepare_save(Utc::now());
                if is_new {
                    self.backend.insert_post(draft).await
                } else {
                    self.backend.update_post(draft).await
                }
            }
            AdminState::EditingWork { mut draft, is_new } => {
                draft.prepare_save(Utc::now());
                if is_new {
                    self.backend.insert_work(draft).await
                } else {
                    self.backend.update_work(draft).await
                }
            }
            _ => {
                self.saving = false;
                return;
            }
        };
        match result {
            Ok(()) => {
                self.notice = Some(Notice::success("Saved successfully!"));
                self.state = AdminState::Listing;
                self.refresh().await;
            }
            Err(error) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to save: {}",
                    error
                )));
            }
        }
        self.saving = false;
    }

    pub async fn toggle_post_published(&mut self, id: &str) {
        let Some(post) = self.posts.iter().find(|p| p.id == id) else {
            return;
        };
        let target = !post.published;
        match self.backend.set_post_published(id, target).await {
            Ok(()) => {
                self.notice = Some(Notice::success(if target {
                    "Post published!"
                } else {
                    "Post unpublished!"
                }));
                self.refresh().await;
            }
            Err(error) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to update: {}",
                    error
                )));
            }
        }
    }

    pub async fn toggle_work_published(&mut self, id: &str) {
        let Some(work) = self.works.iter().find(|w| w.id == id) else {
            return;
        };
        let target = !work.published;
        match self.backend.set_work_published(id, target).await {
            Ok(()) => {
                self.notice = Some(Notice::success(if target {
                    "Work published!"
                } else {
                    "Work unpublished!"
                }));
                self.refresh().await;
            }
            Err(error) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to update: {}",
                    error
                )));
            }
        }
    }

    /// Deleting requires an explicit confirmation from the caller.
    /// Without it the row is left alone and no notice is shown.
    pub async fn delete_post(&mut self, id: &str, confirmed: bool) {
        if !confirmed {
            return;
        }
        match self.backend.delete_post(id).await {
            Ok(()) => {
                self.notice =
                    Some(Notice::success("Post deleted successfully!"));
                self.refresh().await;
            }
            Err(error) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to delete: {}",
                    error
                )));
            }
        }
    }

    pub async fn delete_work(&mut self, id: &str, confirmed: bool) {
        if !confirmed {
            return;
        }
        match self.backend.delete_work(id).await {
            Ok(()) => {
                self.notice =
                    Some(Notice::success("Work deleted successfully!"));
                self.refresh().await;
            }
            Err(error) => {
                self.notice = Some(Notice::error(format!(
                    "Failed to delete: {}",
                    error
                )));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use backend::Offline;

    use super::*;

    #[tokio::test]
    async fn save_is_a_no_op_while_a_save_is_in_flight() {
        // Arrange
        let draft = BlogPost {
            id: "draft".to_string(),
            title: "Draft".to_string(),
            ..Default::default()
        };
        let mut panel = AdminPanel::new(Arc::new(Offline));
        panel.state = AdminState::EditingPost {
            draft,
            is_new: true,
        };
        panel.saving = true;

        // Act
        panel.save().await;

        // Assert
        // The offline store rejects every write, so reaching it would
        // have produced a failure notice.
        assert!(panel.notice.is_none());
        assert!(matches!(panel.state, AdminState::EditingPost { .. }));
        assert!(panel.saving);
    }
}
