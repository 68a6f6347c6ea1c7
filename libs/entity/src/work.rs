use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::post::BlogPost;
use crate::slug::derive_slug;

/// A portfolio entry: either an external project with a case study, or
/// a teaser that reuses a blog post's content.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub slug: String,
    pub work_type: WorkType,
    pub title: String,
    pub subtext: String,
    pub description: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub image: String,
    pub link: Option<String>,
    pub date: Option<String>,
    pub published: bool,
    pub display_order: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Default, PartialEq, Clone, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    #[default]
    Project,
    Blog,
}

impl From<WorkType> for String {
    fn from(value: WorkType) -> Self {
        match value {
            WorkType::Project => "project".to_string(),
            WorkType::Blog => "blog".to_string(),
        }
    }
}

impl From<String> for WorkType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "blog" => WorkType::Blog,
            _ => WorkType::Project,
        }
    }
}

impl WorkItem {
    /// Normalizes the record before it is persisted, same rule as
    /// [`BlogPost::prepare_save`].
    pub fn prepare_save(&mut self, now: DateTime<Utc>) {
        if self.slug.is_empty() {
            self.slug = derive_slug(&self.title);
        }
        self.updated_at = Some(now);
    }

    /// Presents a `blog`-type item as a post. The full post's content
    /// wins when a loaded post matches by id; the teaser's own content
    /// is the fallback.
    pub fn to_post(&self, loaded: &[BlogPost]) -> BlogPost {
        let full = loaded.iter().find(|p| p.id == self.id);

        BlogPost {
            id: self.id.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self
                .date
                .clone()
                .unwrap_or_else(|| Utc::now().format("%Y").to_string()),
            summary: self.subtext.clone(),
            content: match full {
                Some(post) => post.content.clone(),
                None => self.content.clone().unwrap_or_default(),
            },
            tags: self.tags.clone(),
            published: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn work_type_round_trips_through_string() {
        assert_eq!(WorkType::from(String::from(WorkType::Blog)), WorkType::Blog);
        assert_eq!(
            WorkType::from(String::from(WorkType::Project)),
            WorkType::Project
        );
        assert_eq!(WorkType::from("garbage".to_string()), WorkType::Project);
    }

    #[test]
    fn blog_teaser_reuses_full_post_content() {
        let work = WorkItem {
            id: "singularity-self".to_string(),
            work_type: WorkType::Blog,
            title: "The Singularity of Self".to_string(),
            subtext: "When 'I' Becomes a Network".to_string(),
            content: Some("<p>teaser</p>".to_string()),
            date: Some("2024-11-12".to_string()),
            ..Default::default()
        };
        let loaded = vec![BlogPost {
            id: "singularity-self".to_string(),
            content: "<p>full article</p>".to_string(),
            ..Default::default()
        }];

        let post = work.to_post(&loaded);

        assert_eq!(post.content, "<p>full article</p>");
        assert_eq!(post.summary, "When 'I' Becomes a Network");
        assert!(post.published);
    }

    #[test]
    fn blog_teaser_falls_back_to_own_content() {
        let work = WorkItem {
            id: "unmatched".to_string(),
            work_type: WorkType::Blog,
            content: Some("<p>teaser</p>".to_string()),
            ..Default::default()
        };

        let post = work.to_post(&[]);

        assert_eq!(post.content, "<p>teaser</p>");
    }
}
