use std::sync::OnceLock;

use regex::Regex;

static NON_ALNUM: OnceLock<Regex> = OnceLock::new();

/// Derives a URL-safe slug from a title: lowercase, runs of anything
/// outside `[a-z0-9]` collapse to a single hyphen, leading/trailing
/// hyphens trimmed. Idempotent.
pub fn derive_slug(title: &str) -> String {
    let re = NON_ALNUM
        .get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("invalid slug regex"));

    re.replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
