use backend::{Backend, BackendError};
use entity::post::BlogPost;
use entity::work::WorkItem;
use tracing::warn;

use crate::fallback::{fallback_posts, fallback_works};

/// Substitutes fallback rows when a fetch failed or came back empty.
/// An empty table reads the same as an outage to visitors, so both
/// cases get the built-in content.
pub fn reconcile<T>(
    result: Result<Vec<T>, BackendError>,
    fallback: Vec<T>,
) -> Vec<T> {
    match result {
        Ok(rows) if !rows.is_empty() => rows,
        _ => fallback,
    }
}

pub async fn published_posts(backend: &dyn Backend) -> Vec<BlogPost> {
    let result = backend.published_posts().await;
    if let Err(error) = &result {
        warn!("failed to fetch posts, serving fallback: {}", error);
    }
    reconcile(result, fallback_posts())
}

pub async fn published_works(backend: &dyn Backend) -> Vec<WorkItem> {
    let result = backend.published_works().await;
    if let Err(error) = &result {
        warn!("failed to fetch works, serving fallback: {}", error);
    }
    reconcile(result, fallback_works())
}

/// The public site's view of the content store. Starts on fallback
/// content and swaps in live rows once a refresh succeeds.
#[derive(Debug, Clone)]
pub struct Catalog {
    posts: Vec<BlogPost>,
    works: Vec<WorkItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            posts: fallback_posts(),
            works: fallback_works(),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshing twice in a row with the same backend state leaves
    /// the catalog unchanged.
    pub async fn refresh(&mut self, backend: &dyn Backend) {
        self.posts = published_posts(backend).await;
        self.works = published_works(backend).await;
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn works(&self) -> &[WorkItem] {
        &self.works
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts
            .iter()
            .find(|p| p.slug == slug || p.id == slug)
    }

    pub fn work_by_slug(&self, slug: &str) -> Option<&WorkItem> {
        self.works
            .iter()
            .find(|w| w.slug == slug || w.id == slug)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn post(id: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn reconcile_keeps_live_rows() {
        // Arrange
        let live = vec![post("live")];

        // Act
        let rows = reconcile(Ok(live), vec![post("fallback")]);

        // Assert
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "live");
    }

    #[test]
    fn reconcile_substitutes_on_error() {
        // Act
        let rows = reconcile(
            Err(BackendError::NotConfigured),
            vec![post("fallback")],
        );

        // Assert
        assert_eq!(rows[0].id, "fallback");
    }

    #[test]
    fn reconcile_treats_empty_as_missing() {
        // Act
        let rows = reconcile(Ok(vec![]), vec![post("fallback")]);

        // Assert
        assert_eq!(rows[0].id, "fallback");
    }

    #[test]
    fn catalog_starts_on_fallback() {
        // Act
        let catalog = Catalog::new();

        // Assert
        assert_eq!(catalog.posts().len(), 3);
        assert_eq!(catalog.works().len(), 3);
    }

    #[test]
    fn lookup_falls_back_to_id() {
        // Arrange
        let catalog = Catalog::new();

        // Act
        let found = catalog.post_by_slug("silent-interface");

        // Assert
        assert_eq!(found.unwrap().title, "The Silent Interface");
    }
}
