use crate::models::PageMetadata;

pub const HEADER_COMMENT: &str = "<!-- SEO Meta Tags -->";
pub const TWITTER_CARD_TYPE: &str = "summary_large_image";

/// Render the SEO meta-tag block for a page.
///
/// Values are interpolated verbatim; escaping is left to whatever displays
/// the block. Empty values still produce their tag with an empty attribute.
pub fn build(title: &str, description: &str, url: &str, keywords: &str) -> String {
    let lines = [
        HEADER_COMMENT.to_string(),
        format!("<title>{title}</title>"),
        format!(r#"<meta name="description" content="{description}">"#),
        format!(r#"<meta name="keywords" content="{keywords}">"#),
        format!(r#"<meta property="og:title" content="{title}">"#),
        format!(r#"<meta property="og:description" content="{description}">"#),
        format!(r#"<meta property="og:url" content="{url}">"#),
        format!(r#"<meta name="twitter:card" content="{TWITTER_CARD_TYPE}">"#),
        format!(r#"<meta name="twitter:title" content="{title}">"#),
        format!(r#"<meta name="twitter:description" content="{description}">"#),
    ];

    lines.join("\n")
}

/// Convenience wrapper over [`build`] for a whole metadata record.
pub fn build_for(meta: &PageMetadata) -> String {
    build(&meta.title, &meta.description, &meta.url, &meta.keywords)
}
