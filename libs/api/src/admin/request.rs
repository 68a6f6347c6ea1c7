use entity::post::BlogPost;
use entity::work::{WorkItem, WorkType};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct SavePostRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
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
}

impl SavePostRequest {
    pub fn into_post(self, id: String) -> BlogPost {
        BlogPost {
            id,
            slug: self.slug,
            title: self.title,
            date: self.date,
            summary: self.summary,
            content: self.content,
            tags: self.tags,
            published: self.published,
            featured_image: self.featured_image,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            canonical_url: self.canonical_url,
            og_title: self.og_title,
            og_description: self.og_description,
            og_image: self.og_image,
            twitter_card_type: self.twitter_card_type,
            twitter_title: self.twitter_title,
            twitter_description: self.twitter_description,
            twitter_image: self.twitter_image,
            robots: self.robots,
            keywords: self.keywords,
            ..Default::default()
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct SaveWorkRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "type", default)]
    pub work_type: String,
    pub title: String,
    #[serde(default)]
    pub subtext: String,
    #[serde(default)]
    pub description: String,
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    pub link: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub display_order: Option<i32>,
}

impl SaveWorkRequest {
    pub fn into_work(self, id: String, display_order: i32) -> WorkItem {
        WorkItem {
            id,
            slug: self.slug,
            work_type: WorkType::from(self.work_type),
            title: self.title,
            subtext: self.subtext,
            description: self.description,
            content: self.content,
            tags: self.tags,
            image: self.image,
            link: self.link,
            date: self.date,
            published: self.published,
            display_order,
            ..Default::default()
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct PublishRequest {
    pub published: bool,
}

#[derive(Deserialize, IntoParams)]
pub struct DeleteParams {
    pub confirm: Option<bool>,
}
