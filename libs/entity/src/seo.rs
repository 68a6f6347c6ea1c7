use serde::{Deserialize, Serialize};

use crate::post::BlogPost;

pub const SITE_NAME: &str = "HOLLYFRANK";
pub const DEFAULT_DESCRIPTION: &str = "A thought and design studio \
exploring what's possible in a post-internet world";
pub const DEFAULT_IMAGE: &str = "/og-image.png";

/// Fully resolved head metadata for a page. Every field is concrete;
/// the optional per-post overrides have already been folded in.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct SeoTags {
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

impl BlogPost {
    /// Resolves the post's SEO extension fields against its core
    /// attributes. Absent overrides default to the title/summary/tags,
    /// relative image paths are absolutized against `base_url`.
    pub fn seo(&self, base_url: &str) -> SeoTags {
        let title = self.meta_title.clone().unwrap_or_else(|| self.title.clone());
        let description = self
            .meta_description
            .clone()
            .unwrap_or_else(|| self.summary.clone());
        let canonical = self.canonical_url.clone().unwrap_or_else(|| {
            let path = if self.slug.is_empty() { &self.id } else { &self.slug };
            format!("{}/blog/{}", base_url, path)
        });
        let og_title = self.og_title.clone().unwrap_or_else(|| title.clone());
        let og_description = self
            .og_description
            .clone()
            .unwrap_or_else(|| description.clone());
        let og_image = absolutize(
            self.og_image.as_deref().unwrap_or(DEFAULT_IMAGE),
            base_url,
        );

        SeoTags {
            twitter_card: self
                .twitter_card_type
                .clone()
                .unwrap_or_else(|| "summary_large_image".to_string()),
            twitter_title: self
                .twitter_title
                .clone()
                .unwrap_or_else(|| og_title.clone()),
            twitter_description: self
                .twitter_description
                .clone()
                .unwrap_or_else(|| og_description.clone()),
            twitter_image: self
                .twitter_image
                .as_deref()
                .map(|image| absolutize(image, base_url))
                .unwrap_or_else(|| og_image.clone()),
            robots: self
                .robots
                .clone()
                .unwrap_or_else(|| "index, follow".to_string()),
            keywords: self.keywords.clone().unwrap_or_else(|| self.tags.clone()),
            title,
            description,
            canonical,
            og_title,
            og_description,
            og_image,
        }
    }
}

fn absolutize(image: &str, base_url: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else {
        format!("{}{}", base_url, image)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const BASE: &str = "https://hollyfrank.com";

    fn post() -> BlogPost {
        BlogPost {
            id: "geopolitics-ai".to_string(),
            slug: "drawing-the-geopolitical-boundaries-around-ai".to_string(),
            title: "Drawing The Geopolitical Boundaries Around AI".to_string(),
            summary: "Export controls on AI chips.".to_string(),
            tags: vec!["Deep Dive".to_string(), "Policy".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn everything_defaults_to_core_attributes() {
        let tags = post().seo(BASE);

        assert_eq!(tags.title, "Drawing The Geopolitical Boundaries Around AI");
        assert_eq!(tags.description, "Export controls on AI chips.");
        assert_eq!(
            tags.canonical,
            "https://hollyfrank.com/blog/drawing-the-geopolitical-boundaries-around-ai"
        );
        assert_eq!(tags.og_title, tags.title);
        assert_eq!(tags.og_image, "https://hollyfrank.com/og-image.png");
        assert_eq!(tags.twitter_card, "summary_large_image");
        assert_eq!(tags.twitter_image, tags.og_image);
        assert_eq!(tags.robots, "index, follow");
        assert_eq!(tags.keywords, post().tags);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let mut source = post();
        source.meta_title = Some("Custom title".to_string());
        source.canonical_url = Some("https://elsewhere.test/x".to_string());
        source.og_image = Some("https://cdn.test/img.png".to_string());
        source.keywords = Some(vec!["chips".to_string()]);

        let tags = source.seo(BASE);

        assert_eq!(tags.title, "Custom title");
        assert_eq!(tags.canonical, "https://elsewhere.test/x");
        assert_eq!(tags.og_image, "https://cdn.test/img.png");
        assert_eq!(tags.keywords, vec!["chips".to_string()]);
        // og falls back to the resolved meta title
        assert_eq!(tags.og_title, "Custom title");
    }

    #[test]
    fn canonical_falls_back_to_id_without_slug() {
        let mut source = post();
        source.slug = String::new();

        let tags = source.seo(BASE);

        assert_eq!(tags.canonical, "https://hollyfrank.com/blog/geopolitics-ai");
    }
}
