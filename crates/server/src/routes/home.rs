//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;

use crate::filters;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Home page handler.
pub async fn index() -> HomeTemplate {
    HomeTemplate
}
