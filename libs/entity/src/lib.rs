pub mod post;
pub mod seo;
pub mod slug;
pub mod user;
pub mod work;

pub mod prelude {
    pub use crate::post::BlogPost as BlogPostEntity;
    pub use crate::seo::SeoTags;
    pub use crate::user::User as UserEntity;
    pub use crate::work::{WorkItem as WorkItemEntity, WorkType};
}
