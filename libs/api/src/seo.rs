use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::ApiState;

struct SitemapUrl {
    loc: String,
    lastmod: Option<String>,
    changefreq: &'static str,
    priority: f32,
}

/// Enumerates the static pages plus every published post and work.
/// Fetch failures drop the dynamic entries rather than failing the
/// whole document.
pub async fn get_sitemap(
    State(state): State<ApiState>,
) -> impl IntoResponse {
    let base = &state.config.site.base_url;
    let today = Utc::now().format("%Y-%m-%d").to_string();

    let mut urls = vec![
        SitemapUrl {
            loc: base.clone(),
            lastmod: Some(today),
            changefreq: "weekly",
            priority: 1.0,
        },
        SitemapUrl {
            loc: format!("{}/blog", base),
            lastmod: None,
            changefreq: "daily",
            priority: 0.9,
        },
        SitemapUrl {
            loc: format!("{}/portfolio", base),
            lastmod: None,
            changefreq: "weekly",
            priority: 0.8,
        },
        SitemapUrl {
            loc: format!("{}/contact", base),
            lastmod: None,
            changefreq: "monthly",
            priority: 0.7,
        },
    ];

    let posts = state
        .backend
        .published_posts()
        .await
        .unwrap_or_default();
    for post in posts {
        let path = if post.slug.is_empty() {
            &post.id
        } else {
            &post.slug
        };
        urls.push(SitemapUrl {
            loc: format!("{}/blog/{}", base, path),
            lastmod: Some(
                post.updated_at
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or(post.date.clone()),
            ),
            changefreq: "monthly",
            priority: 0.8,
        });
    }

    let works = state
        .backend
        .published_works()
        .await
        .unwrap_or_default();
    for work in works {
        let is_project =
            work.work_type == entity::work::WorkType::Project;
        let path = if work.slug.is_empty() {
            &work.id
        } else {
            &work.slug
        };
        urls.push(SitemapUrl {
            loc: format!(
                "{}/{}/{}",
                base,
                if is_project { "projects" } else { "blog" },
                path
            ),
            lastmod: work
                .updated_at
                .map(|t| t.format("%Y-%m-%d").to_string()),
            changefreq: "monthly",
            priority: if is_project { 0.7 } else { 0.8 },
        });
    }

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&urls),
    )
}

fn render_sitemap(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", url.loc));
        if let Some(lastmod) = &url.lastmod {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                lastmod
            ));
        }
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            url.changefreq
        ));
        xml.push_str(&format!(
            "    <priority>{:.1}</priority>\n",
            url.priority
        ));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub async fn get_robots(State(state): State<ApiState>) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /admin\n\
         \n\
         Sitemap: {}/sitemap.xml\n",
        state.config.site.base_url
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sitemap_renders_optional_lastmod() {
        // Arrange
        let urls = vec![
            SitemapUrl {
                loc: "https://hollyfrank.com".to_string(),
                lastmod: Some("2026-08-27".to_string()),
                changefreq: "weekly",
                priority: 1.0,
            },
            SitemapUrl {
                loc: "https://hollyfrank.com/blog".to_string(),
                lastmod: None,
                changefreq: "daily",
                priority: 0.9,
            },
        ];

        // Act
        let xml = render_sitemap(&urls);

        // Assert
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<lastmod>2026-08-27</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert_eq!(xml.matches("<lastmod>").count(), 1);
        assert!(xml.ends_with("</urlset>\n"));
    }
}
