//! Q&A route handlers.
//!
//! Serves the markdown-based database-theory questions loaded at startup.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::instrument;

use crate::content::Question;
use crate::filters;
use crate::state::AppState;

/// One section as listed on the index page.
pub struct SectionView {
    pub slug: String,
    pub title: String,
    pub question_count: usize,
}

/// Q&A section index template.
#[derive(Template, WebTemplate)]
#[template(path = "questions/index.html")]
pub struct QuestionsIndexTemplate {
    pub sections: Vec<SectionView>,
}

/// Q&A section detail template.
#[derive(Template, WebTemplate)]
#[template(path = "questions/detail.html")]
pub struct QuestionsDetailTemplate {
    pub section_title: String,
    pub questions: Vec<Question>,
}

/// Q&A section index handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> QuestionsIndexTemplate {
    let sections = state
        .questions()
        .sections()
        .iter()
        .map(|s| SectionView {
            slug: s.slug.clone(),
            title: s.title.clone(),
            question_count: s.questions.len(),
        })
        .collect();

    QuestionsIndexTemplate { sections }
}

/// Q&A section detail handler.
///
/// # Errors
///
/// Returns 404 if the section doesn't exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let section = state
        .questions()
        .get_section(&section)
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(QuestionsDetailTemplate {
        section_title: section.title.clone(),
        questions: section.questions.clone(),
    })
}

/// Create the questions routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{section}", get(show))
}
