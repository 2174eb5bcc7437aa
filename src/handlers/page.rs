use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::PageMetadata,
    render::{self, PageView},
    seo,
    state::AppState,
};

// ============================================================================
// Input validation
// ============================================================================

/// Fields posted by the HTML form. Only the maximum lengths the inputs
/// advertise are enforced; empty and relative values go through unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct MetaFormRequest {
    #[serde(default)]
    #[validate(length(max = 60, message = "Page title must be at most 60 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 160, message = "Meta description must be at most 160 characters"))]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub keywords: String,
}

impl From<MetaFormRequest> for PageMetadata {
    fn from(req: MetaFormRequest) -> Self {
        PageMetadata {
            title: req.title,
            description: req.description,
            url: req.url,
            keywords: req.keywords,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
pub async fn show_form(State(state): State<AppState>) -> Markup {
    render::page(&PageView {
        form: &state.defaults,
        generated: None,
        error: None,
    })
}

/// POST /
///
/// Re-renders the page with the generated output, or with the validation
/// message and the submitted values when the form is rejected.
pub async fn submit_form(Form(req): Form<MetaFormRequest>) -> Response {
    let validated = validate_form(&req);
    let form: PageMetadata = req.into();

    match validated {
        Ok(()) => {
            let generated = seo::generate(&form);
            info!(
                title_len = generated.title.length,
                description_len = generated.description.length,
                "Form submitted"
            );

            render::page(&PageView {
                form: &form,
                generated: Some(&generated),
                error: None,
            })
            .into_response()
        }
        Err(AppError::Validation(message)) => {
            warn!(error = %message, "Rejected form submission");
            let markup = render::page(&PageView {
                form: &form,
                generated: None,
                error: Some(message),
            });
            (StatusCode::BAD_REQUEST, markup).into_response()
        }
        Err(err) => err.into_response(),
    }
}

fn validate_form(req: &MetaFormRequest) -> AppResult<()> {
    req.validate()?;
    Ok(())
}
