use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slug::derive_slug;

/// A blog post as the site shows it. SEO extension fields are all
/// optional and resolve against the core attributes, see [`crate::seo`].
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical_url: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card_type: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub robots: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Normalizes the record before it is persisted: derives the slug
    /// from the title when none was entered and stamps `updated_at`.
    pub fn prepare_save(&mut self, now: DateTime<Utc>) {
        if self.slug.is_empty() {
            self.slug = derive_slug(&self.title);
        }
        self.updated_at = Some(now);
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::*;

    #[test]
    fn prepare_save_derives_slug_when_absent() {
        let mut post = BlogPost {
            title: "Hello World!!".to_string(),
            ..Default::default()
        };

        post.prepare_save(Utc::now());

        assert_eq!(post.slug, "hello-world");
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn prepare_save_keeps_explicit_slug() {
        let mut post = BlogPost {
            title: "Hello World!!".to_string(),
            slug: "custom-slug".to_string(),
            ..Default::default()
        };

        post.prepare_save(Utc::now());

        assert_eq!(post.slug, "custom-slug");
    }
}
