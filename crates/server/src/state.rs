//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::content::QuestionStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: the database pool and the Q&A content store. Both are
/// immutable after startup; configuration is consumed in `main` and not
/// carried further.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    questions: QuestionStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(pool: PgPool, questions: QuestionStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, questions }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the Q&A content store.
    #[must_use]
    pub fn questions(&self) -> &QuestionStore {
        &self.inner.questions
    }
}
