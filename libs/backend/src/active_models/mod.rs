pub mod blog_post;
pub mod user;
pub mod work_item;

// Lenient codec for the JSON-encoded list columns (tags, keywords).
// Undecodable rows degrade to an empty list instead of failing the read.
pub(crate) fn decode_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub(crate) fn encode_list(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_default()
}

pub mod prelude {
    pub use super::blog_post::Entity as BlogPosts;
    pub use super::user::Entity as Users;
    pub use super::work_item::Entity as WorkItems;
}
