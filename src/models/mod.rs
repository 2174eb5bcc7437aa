use serde::{Deserialize, Deserializer, Serialize};

use crate::seo::FieldReport;

// ============================================================================
// Page Metadata
// ============================================================================

pub const SAMPLE_TITLE: &str = "My Awesome Website";
pub const SAMPLE_DESCRIPTION: &str =
    "This is an example description that will appear in search engines.";
pub const SAMPLE_URL: &str = "https://example.com";
pub const SAMPLE_KEYWORDS: &str = "SEO, Meta Tags, Web Optimization";

/// The four user-supplied fields a submission carries.
///
/// Missing or `null` fields deserialize to empty strings so the generator
/// always gets a complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: String,
}

impl PageMetadata {
    /// Values the form is prefilled with.
    pub fn sample() -> Self {
        PageMetadata {
            title: SAMPLE_TITLE.into(),
            description: SAMPLE_DESCRIPTION.into(),
            url: SAMPLE_URL.into(),
            keywords: SAMPLE_KEYWORDS.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Generated Output
// ============================================================================

/// Response of `POST /api/meta-tags`: the tag block plus both previews.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTagsDto {
    pub meta_tags: String,
    pub url: String,
    pub keywords: String,
    pub title: FieldReport,
    pub description: FieldReport,
}
