mod common;

use backend::Offline;
use common::MemoryBackend;
use entity::post::BlogPost;
use entity::work::{WorkItem, WorkType};
use site::admin::{AdminPanel, AdminState, NoticeKind};

fn published_post(id: &str, date: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        slug: id.to_string(),
        title: id.to_string(),
        date: date.to_string(),
        published: true,
        ..Default::default()
    }
}

fn work(id: &str, order: i32) -> WorkItem {
    WorkItem {
        id: id.to_string(),
        slug: id.to_string(),
        work_type: WorkType::Project,
        title: id.to_string(),
        published: true,
        display_order: order,
        ..Default::default()
    }
}

#[tokio::test]
async fn unconfigured_backend_serves_fallback_content() {
    // Act
    let posts = site::published_posts(&Offline).await;
    let works = site::published_works(&Offline).await;

    // Assert
    assert_eq!(posts.len(), 3);
    assert_eq!(works.len(), 3);
    assert!(posts.iter().any(|p| p.id == "geopolitics-ai"));
}

#[tokio::test]
async fn live_rows_replace_fallback_after_refresh() {
    // Arrange
    let backend = MemoryBackend::default()
        .with_posts(vec![published_post("live-post", "2026-01-01")])
        .await
        .shared();
    let mut catalog = site::Catalog::new();

    // Act
    catalog.refresh(backend.as_ref()).await;

    // Assert
    assert_eq!(catalog.posts().len(), 1);
    assert_eq!(catalog.posts()[0].id, "live-post");
    // Works table is empty upstream, so the curated set stays.
    assert_eq!(catalog.works().len(), 3);
}

#[tokio::test]
async fn sign_in_with_bad_credentials_stays_signed_out() {
    // Arrange
    let backend = MemoryBackend::default().shared();
    let mut panel = AdminPanel::new(backend);

    // Act
    panel.sign_in("admin@hollyfrank.com", "wrong").await;

    // Assert
    assert!(matches!(panel.state(), AdminState::SignedOut));
    assert_eq!(panel.notice().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn sign_in_loads_drafts_too() {
    // Arrange
    let mut draft = published_post("draft-post", "2026-02-01");
    draft.published = false;
    let backend = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await
        .with_posts(vec![
            published_post("live-post", "2026-01-01"),
            draft,
        ])
        .await
        .shared();
    let mut panel = AdminPanel::new(backend);

    // Act
    panel.sign_in("admin@hollyfrank.com", "hunter2").await;

    // Assert
    assert!(matches!(panel.state(), AdminState::Listing));
    assert_eq!(panel.posts().len(), 2);
}

#[tokio::test]
async fn saving_a_new_post_derives_its_slug() {
    // Arrange
    let backend = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await
        .shared();
    let mut panel = AdminPanel::new(backend.clone());
    panel.sign_in("admin@hollyfrank.com", "hunter2").await;

    // Act
    panel.new_post();
    {
        let draft = panel.edit_draft_post().unwrap();
        draft.title = "Hello World!!".to_string();
    }
    panel.save().await;

    // Assert
    assert!(matches!(panel.state(), AdminState::Listing));
    assert_eq!(panel.posts().len(), 1);
    let saved = &panel.posts()[0];
    assert_eq!(saved.slug, "hello-world");
    assert!(!saved.published);
    assert!(saved.updated_at.is_some());
    // A draft is not visible to the public site.
    let public = backend.published_posts().await.unwrap();
    assert!(public.is_empty());
}

#[tokio::test]
async fn failed_save_keeps_the_draft_open() {
    // Arrange
    let memory = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await;
    let backend = std::sync::Arc::new(memory);
    let mut panel = AdminPanel::new(backend.clone());
    panel.sign_in("admin@hollyfrank.com", "hunter2").await;
    panel.new_post();
    panel.edit_draft_post().unwrap().title = "Unsaved".to_string();
    backend.set_fail_writes(true);

    // Act
    panel.save().await;

    // Assert
    let AdminState::EditingPost { draft, is_new } = panel.state() else {
        panic!("draft was discarded");
    };
    assert_eq!(draft.title, "Unsaved");
    assert!(*is_new);
    assert!(!panel.saving());
    assert_eq!(panel.notice().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn publish_toggle_flips_only_the_flag() {
    // Arrange
    let mut post = published_post("live-post", "2026-01-01");
    post.published = false;
    post.summary = "untouched".to_string();
    let backend = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await
        .with_posts(vec![post])
        .await
        .shared();
    let mut panel = AdminPanel::new(backend.clone());
    panel.sign_in("admin@hollyfrank.com", "hunter2").await;

    // Act
    panel.toggle_post_published("live-post").await;

    // Assert
    let public = backend.published_posts().await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].summary, "untouched");

    // Toggling again hides it.
    panel.toggle_post_published("live-post").await;
    assert!(backend.published_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_requires_confirmation() {
    // Arrange
    let backend = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await
        .with_posts(vec![published_post("live-post", "2026-01-01")])
        .await
        .shared();
    let mut panel = AdminPanel::new(backend.clone());
    panel.sign_in("admin@hollyfrank.com", "hunter2").await;

    // Act
    panel.delete_post("live-post", false).await;

    // Assert
    assert_eq!(panel.posts().len(), 1);

    // Act
    panel.delete_post("live-post", true).await;

    // Assert
    assert!(panel.posts().is_empty());
    assert!(backend.published_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn new_work_appends_to_curated_order() {
    // Arrange
    let backend = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await
        .with_works(vec![work("coincentral", 0), work("aether-os", 1)])
        .await
        .shared();
    let mut panel = AdminPanel::new(backend);
    panel.sign_in("admin@hollyfrank.com", "hunter2").await;

    // Act
    panel.new_work();

    // Assert
    let draft = panel.edit_draft_work().unwrap();
    assert_eq!(draft.display_order, 2);
    assert!(!draft.published);
}

#[tokio::test]
async fn sign_out_clears_loaded_content() {
    // Arrange
    let backend = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await
        .with_posts(vec![published_post("live-post", "2026-01-01")])
        .await
        .shared();
    let mut panel = AdminPanel::new(backend);
    panel.sign_in("admin@hollyfrank.com", "hunter2").await;
    assert_eq!(panel.posts().len(), 1);

    // Act
    panel.sign_out().await;

    // Assert
    assert!(matches!(panel.state(), AdminState::SignedOut));
    assert!(panel.posts().is_empty());
    assert!(panel.session().is_none());
}

#[tokio::test]
async fn duplicate_sign_up_is_rejected() {
    // Arrange
    let backend = MemoryBackend::default()
        .with_account("admin@hollyfrank.com", "hunter2")
        .await
        .shared();
    let mut panel = AdminPanel::new(backend);

    // Act
    panel.sign_up("admin@hollyfrank.com", "other").await;

    // Assert
    assert_eq!(panel.notice().unwrap().kind, NoticeKind::Error);
}
