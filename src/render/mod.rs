//! Server-rendered page: the form, the generated tag block, both previews and
//! the length analysis. All interpolated text goes through maud's escaping.

pub mod assets;

use maud::{html, Markup, DOCTYPE};

use crate::models::{GeneratedTagsDto, PageMetadata};
use crate::seo::{self, evaluator, FieldReport, LengthVerdict};

pub const APP_TITLE: &str = "SEO Meta Tag Generator Pro";

const PRO_TIPS: &[&str] = &[
    "🔍 Keep titles under 60 characters",
    "✍️ Write compelling, action-oriented descriptions",
    "🎯 Focus on 3-5 primary keywords",
    "🔗 Use absolute URLs for better indexing",
];

/// Everything one render of the page needs.
pub struct PageView<'a> {
    /// Values shown in the form inputs.
    pub form: &'a PageMetadata,
    /// Present only after a successful submission.
    pub generated: Option<&'a GeneratedTagsDto>,
    pub error: Option<String>,
}

pub fn page(view: &PageView<'_>) -> Markup {
    // The analysis panel always reflects the values in the form.
    let analysis = match view.generated {
        Some(g) => seo::SeoReport {
            title: g.title.clone(),
            description: g.description.clone(),
        },
        None => seo::evaluate(&view.form.title, &view.form.description),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (APP_TITLE) }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                header class="header" {
                    h1 { "🚀 " (APP_TITLE) }
                    p { "Craft perfect SEO meta tags with real-time previews & expert guidance" }
                }
                div class="layout" {
                    main class="main-column" {
                        (form(view.form, view.error.as_deref()))
                        @if let Some(generated) = view.generated {
                            (results(generated))
                        }
                    }
                    aside class="side-column" {
                        (pro_tips())
                        hr;
                        (analysis_panel(&analysis))
                    }
                }
                script src="/assets/main.js" {}
            }
        }
    }
}

fn form(values: &PageMetadata, error: Option<&str>) -> Markup {
    html! {
        form method="post" action="/" class="meta-form" {
            @if let Some(message) = error {
                div class="form-error" role="alert" { (message) }
            }
            label for="title" { "Page Title *" }
            input id="title" type="text" name="title" value=(values.title)
                maxlength=(evaluator::TITLE_LIMIT)
                title="Ideal length: 50-60 characters";

            label for="description" { "Meta Description *" }
            textarea id="description" name="description" rows="4"
                maxlength=(evaluator::DESCRIPTION_LIMIT)
                title="Ideal length: 150-160 characters" { (values.description) }

            label for="url" { "Page URL *" }
            input id="url" type="text" name="url" value=(values.url)
                title="Full canonical URL of the page";

            label for="keywords" { "Keywords (comma-separated)" }
            input id="keywords" type="text" name="keywords" value=(values.keywords)
                title="Main keywords for the page content";

            button type="submit" class="submit-btn" { "✨ Generate Meta Tags" }
        }
    }
}

fn results(generated: &GeneratedTagsDto) -> Markup {
    html! {
        section class="results" {
            h3 { "📋 Generated Meta Tags" }
            div class="code-block" {
                button type="button" class="copy-btn" data-copy-target="meta-tags-code" { "Copy" }
                pre { code id="meta-tags-code" { (generated.meta_tags) } }
            }

            h3 { "🔍 Live Previews" }
            details class="preview" open {
                summary { "Google Search Preview" }
                div class="preview-card google-preview" {
                    h3 class="google-title" { (generated.title.preview) }
                    p class="google-url" { (generated.url) }
                    p class="google-description" { (generated.description.preview) }
                }
            }
            details class="preview" {
                summary { "Social Media Preview" }
                div class="preview-card social-preview" {
                    div class="social-card" {
                        h3 { (generated.title.preview) }
                        p class="social-description" { (generated.description.preview) }
                        p class="social-url" { (generated.url) }
                    }
                }
            }
        }
    }
}

fn pro_tips() -> Markup {
    html! {
        h3 { "📌 Pro Tips" }
        ul class="pro-tips" {
            @for tip in PRO_TIPS {
                li { (tip) }
            }
        }
    }
}

fn analysis_panel(report: &seo::SeoReport) -> Markup {
    html! {
        details class="analysis" open {
            summary { "🔎 SEO Analysis" }
            (metric("Title Length", &report.title))
            (metric("Description Length", &report.description))
        }
    }
}

fn metric(label: &str, field: &FieldReport) -> Markup {
    html! {
        div class="metric" {
            div class="metric-label" { (label) }
            div class="metric-value" { (field.metric()) }
            div class=(format!("metric-verdict {}", verdict_class(field.verdict))) {
                (field.verdict.as_ref())
            }
        }
    }
}

fn verdict_class(verdict: LengthVerdict) -> &'static str {
    match verdict {
        LengthVerdict::TooShort => "verdict-short",
        LengthVerdict::Perfect => "verdict-perfect",
        LengthVerdict::TooLong => "verdict-long",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::generate;

    fn render(form: &PageMetadata, with_results: bool) -> String {
        let generated = generate(form);
        page(&PageView {
            form,
            generated: with_results.then_some(&generated),
            error: None,
        })
        .into_string()
    }

    #[test]
    fn initial_page_has_no_results() {
        let html = render(&PageMetadata::sample(), false);
        assert!(html.contains("Generate Meta Tags"));
        assert!(!html.contains("Generated Meta Tags"));
        assert!(!html.contains("Google Search Preview"));
    }

    #[test]
    fn initial_page_shows_analysis_for_defaults() {
        let html = render(&PageMetadata::sample(), false);
        assert!(html.contains("18/60"));
        assert!(html.contains("Too Short ⚠️"));
    }

    #[test]
    fn results_escape_tag_block() {
        let html = render(&PageMetadata::sample(), true);
        assert!(html.contains("&lt;title&gt;My Awesome Website&lt;/title&gt;"));
        assert!(!html.contains("<title>My Awesome Website</title>"));
    }

    #[test]
    fn user_markup_is_escaped() {
        let form = PageMetadata {
            title: "<script>alert(1)</script>".into(),
            ..PageMetadata::sample()
        };
        let html = render(&form, true);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn previews_use_truncated_text() {
        let form = PageMetadata {
            title: "y".repeat(70),
            ..PageMetadata::sample()
        };
        let html = render(&form, true);
        let expected = format!("{}...", "y".repeat(60));
        assert!(html.contains(&expected));
        assert!(html.contains("70/60"));
        assert!(html.contains("Too Long ⚠️"));
    }

    #[test]
    fn error_message_is_rendered() {
        let form = PageMetadata::sample();
        let html = page(&PageView {
            form: &form,
            generated: None,
            error: Some("Page title must be at most 60 characters".into()),
        })
        .into_string();
        assert!(html.contains("form-error"));
        assert!(html.contains("Page title must be at most 60 characters"));
    }
}
