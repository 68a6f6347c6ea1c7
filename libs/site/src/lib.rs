pub mod admin;
pub mod catalog;
pub mod fallback;
pub mod view;

pub use catalog::{published_posts, published_works, reconcile, Catalog};
