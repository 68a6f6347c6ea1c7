use entity::work::WorkItem;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct WorkResponse {
    pub id: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub work_type: String,
    pub title: String,
    pub subtext: String,
    pub description: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub image: String,
    pub link: Option<String>,
    pub date: Option<String>,
    pub display_order: i32,
}

impl From<WorkItem> for WorkResponse {
    fn from(work: WorkItem) -> Self {
        Self {
            id: work.id,
            slug: work.slug,
            work_type: String::from(work.work_type),
            title: work.title,
            subtext: work.subtext,
            description: work.description,
            content: work.content,
            tags: work.tags,
            image: work.image,
            link: work.link,
            date: work.date,
            display_order: work.display_order,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetWorksResponse {
    pub works: Vec<WorkResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct GetWorkResponse {
    pub work: WorkResponse,
}
