//! Content management for the database-theory Q&A pages.
//!
//! This module loads markdown files from the `content/questions` directory at
//! startup, parses frontmatter metadata, and renders each answer to HTML.
//!
//! Layout on disk, one file per question:
//!
//! ```text
//! content/questions/<section>/<slug>.md
//! ```
//!
//! The set of sections is fixed; a section directory that is missing on disk
//! is served as an empty section rather than failing startup.

use std::collections::HashMap;
use std::path::Path;

use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;
use thiserror::Error;

/// The fixed Q&A sections, in display order: directory slug and page title.
const SECTIONS: &[(&str, &str)] = &[
    ("general_database_questions", "General Database Questions"),
    ("sql_database_queries", "SQL and Database Queries"),
    (
        "database_design_architecture",
        "Database Design and Architecture",
    ),
];

/// Errors loading or parsing Q&A content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Frontmatter metadata for a question file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionMeta {
    /// The question text, shown as the entry heading.
    pub question: String,
    /// Sort position within the section.
    #[serde(default)]
    pub position: i32,
}

/// A rendered question with its answer HTML.
#[derive(Debug, Clone)]
pub struct Question {
    pub slug: String,
    pub meta: QuestionMeta,
    pub answer_html: String,
}

/// A section of questions with its display title.
#[derive(Debug, Clone)]
pub struct QuestionSection {
    pub slug: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// Content store holding all Q&A sections in memory.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    sections: Vec<QuestionSection>,
    by_slug: HashMap<String, usize>,
}

impl QuestionStore {
    /// Load all question content from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if a section directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let questions_dir = content_dir.join("questions");

        let mut sections = Vec::with_capacity(SECTIONS.len());
        let mut by_slug = HashMap::new();

        for (slug, title) in SECTIONS {
            let questions = Self::load_section(&questions_dir.join(slug))?;
            by_slug.insert((*slug).to_string(), sections.len());
            sections.push(QuestionSection {
                slug: (*slug).to_string(),
                title: (*title).to_string(),
                questions,
            });
        }

        Ok(Self { sections, by_slug })
    }

    /// All sections, in display order.
    #[must_use]
    pub fn sections(&self) -> &[QuestionSection] {
        &self.sections
    }

    /// Look up a section by its slug.
    #[must_use]
    pub fn get_section(&self, slug: &str) -> Option<&QuestionSection> {
        self.by_slug.get(slug).and_then(|i| self.sections.get(*i))
    }

    /// Load all questions in one section directory.
    fn load_section(dir: &Path) -> Result<Vec<Question>, ContentError> {
        let mut questions = Vec::new();

        if !dir.exists() {
            tracing::warn!("Question section directory does not exist: {:?}", dir);
            return Ok(questions);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_question(&path) {
                    Ok(question) => {
                        tracing::info!("Loaded question: {}", question.slug);
                        questions.push(question);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load question {:?}: {}", path, e);
                    }
                }
            }
        }

        questions.sort_by(|a, b| {
            a.meta
                .position
                .cmp(&b.meta.position)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        Ok(questions)
    }

    /// Load a single question from a markdown file.
    fn load_question(path: &Path) -> Result<Question, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<QuestionMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let answer_html = markdown_to_html(&parsed.content, &Options::default());

        Ok(Question {
            slug,
            meta,
            answer_html,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_question(dir: &Path, name: &str, question: &str, position: i32, body: &str) {
        std::fs::create_dir_all(dir).unwrap();
        let content = format!("---\nquestion: \"{question}\"\nposition: {position}\n---\n\n{body}\n");
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_empty_content_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = QuestionStore::load(tmp.path()).unwrap();

        // All fixed sections exist, just empty
        assert_eq!(store.sections().len(), 3);
        assert!(store.sections().iter().all(|s| s.questions.is_empty()));
    }

    #[test]
    fn test_load_section_sorted_by_position() {
        let tmp = tempfile::tempdir().unwrap();
        let section = tmp.path().join("questions/general_database_questions");
        write_question(&section, "second.md", "Zweite Frage?", 2, "Antwort zwei.");
        write_question(&section, "first.md", "Erste Frage?", 1, "Antwort eins.");

        let store = QuestionStore::load(tmp.path()).unwrap();
        let loaded = store.get_section("general_database_questions").unwrap();

        assert_eq!(loaded.questions.len(), 2);
        assert_eq!(loaded.questions[0].meta.question, "Erste Frage?");
        assert_eq!(loaded.questions[1].meta.question, "Zweite Frage?");
    }

    #[test]
    fn test_markdown_rendered_to_html() {
        let tmp = tempfile::tempdir().unwrap();
        let section = tmp.path().join("questions/sql_database_queries");
        write_question(&section, "joins.md", "Welche JOIN-Typen gibt es?", 1, "**INNER JOIN** und mehr.");

        let store = QuestionStore::load(tmp.path()).unwrap();
        let loaded = store.get_section("sql_database_queries").unwrap();

        assert!(loaded.questions[0].answer_html.contains("<strong>INNER JOIN</strong>"));
    }

    #[test]
    fn test_unknown_section_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = QuestionStore::load(tmp.path()).unwrap();
        assert!(store.get_section("no_such_section").is_none());
    }

    #[test]
    fn test_file_without_frontmatter_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let section = tmp.path().join("questions/general_database_questions");
        std::fs::create_dir_all(&section).unwrap();
        std::fs::write(section.join("broken.md"), "no frontmatter here").unwrap();
        write_question(&section, "ok.md", "Frage?", 1, "Antwort.");

        let store = QuestionStore::load(tmp.path()).unwrap();
        let loaded = store.get_section("general_database_questions").unwrap();

        // The broken file is logged and skipped, the valid one loads
        assert_eq!(loaded.questions.len(), 1);
        assert_eq!(loaded.questions[0].slug, "ok");
    }
}
