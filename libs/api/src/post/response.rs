use entity::post::BlogPost;
use entity::seo::SeoTags;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PostSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
}

impl From<BlogPost> for PostSummary {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            date: post.date,
            summary: post.summary,
            tags: post.tags,
            featured_image: post.featured_image,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetPostsResponse {
    pub posts: Vec<PostSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct PostDetail {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub content: String,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
}

impl From<BlogPost> for PostDetail {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            date: post.date,
            summary: post.summary,
            content: post.content,
            tags: post.tags,
            featured_image: post.featured_image,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SeoResponse {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
    pub robots: String,
    pub keywords: Vec<String>,
}

impl From<SeoTags> for SeoResponse {
    fn from(tags: SeoTags) -> Self {
        Self {
            title: tags.title,
            description: tags.description,
            canonical: tags.canonical,
            og_title: tags.og_title,
            og_description: tags.og_description,
            og_image: tags.og_image,
            twitter_card: tags.twitter_card,
            twitter_title: tags.twitter_title,
            twitter_description: tags.twitter_description,
            twitter_image: tags.twitter_image,
            robots: tags.robots,
            keywords: tags.keywords,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetPostResponse {
    pub post: PostDetail,
    pub seo: SeoResponse,
}
