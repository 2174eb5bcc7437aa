//! Pure meta-tag generation and length analysis.
//!
//! Nothing here touches request state: every function is total over its
//! string inputs and returns a fresh value.

pub mod evaluator;
pub mod meta_tags;

pub use evaluator::{evaluate, truncate_preview, FieldReport, LengthVerdict, SeoReport};
pub use meta_tags::build;

use crate::models::{GeneratedTagsDto, PageMetadata};

/// Run the builder and the evaluator once for a submission.
pub fn generate(meta: &PageMetadata) -> GeneratedTagsDto {
    let meta_tags = meta_tags::build_for(meta);
    let SeoReport { title, description } = evaluate(&meta.title, &meta.description);

    GeneratedTagsDto {
        meta_tags,
        url: meta.url.clone(),
        keywords: meta.keywords.clone(),
        title,
        description,
    }
}
