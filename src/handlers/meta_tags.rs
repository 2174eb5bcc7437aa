use axum::{extract::State, Json};
use tracing::info;

use crate::{
    models::{GeneratedTagsDto, PageMetadata},
    seo,
    state::AppState,
};

/// GET /api/defaults
///
/// The sample values the form starts with.
pub async fn get_defaults(State(state): State<AppState>) -> Json<PageMetadata> {
    Json(state.defaults.as_ref().clone())
}

/// POST /api/meta-tags
///
/// Builds the tag block and both previews. Any combination of fields is
/// accepted; absent ones count as empty.
pub async fn generate_meta_tags(Json(meta): Json<PageMetadata>) -> Json<GeneratedTagsDto> {
    let generated = seo::generate(&meta);

    info!(
        title_len = generated.title.length,
        description_len = generated.description.length,
        title_verdict = ?generated.title.verdict,
        description_verdict = ?generated.description.verdict,
        "Generated meta tags"
    );

    Json(generated)
}
