use entity::post::BlogPost;
use entity::work::{WorkItem, WorkType};

/// Top-level screens of the public site.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub enum View {
    #[default]
    Home,
    BlogList,
    Portfolio,
    Contact,
    PostDetail,
    ProjectDetail,
}

/// Tracks which screen is showing and which item it is showing.
/// Selections survive navigating away, but a detail screen only
/// exposes its item while it is the current view.
#[derive(Debug, Default, Clone)]
pub struct ViewRouter {
    current: View,
    selected_post: Option<BlogPost>,
    selected_work: Option<WorkItem>,
    admin_open: bool,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn navigate(&mut self, view: View) {
        self.current = view;
    }

    pub fn open_post(&mut self, post: BlogPost) {
        self.selected_post = Some(post);
        self.current = View::PostDetail;
    }

    /// Blog-flavored works open as a post so the reader gets the full
    /// article, with the loaded catalog supplying the body when the
    /// teaser matches a real post.
    pub fn open_work(&mut self, work: WorkItem, posts: &[BlogPost]) {
        if work.work_type == WorkType::Blog {
            self.selected_post = Some(work.to_post(posts));
            self.current = View::PostDetail;
        } else {
            self.selected_work = Some(work);
            self.current = View::ProjectDetail;
        }
    }

    pub fn back(&mut self) {
        self.current = match self.current {
            View::PostDetail => View::BlogList,
            _ => View::Home,
        };
    }

    pub fn visible_post(&self) -> Option<&BlogPost> {
        if self.current == View::PostDetail {
            self.selected_post.as_ref()
        } else {
            None
        }
    }

    pub fn visible_work(&self) -> Option<&WorkItem> {
        if self.current == View::ProjectDetail {
            self.selected_work.as_ref()
        } else {
            None
        }
    }

    pub fn admin_open(&self) -> bool {
        self.admin_open
    }

    pub fn toggle_admin(&mut self) {
        self.admin_open = !self.admin_open;
    }
}
