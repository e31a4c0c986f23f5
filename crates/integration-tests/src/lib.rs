//! Integration tests for Kontor.
//!
//! # Running Tests
//!
//! The tests exercise a running server over HTTP and are `#[ignore]`d by
//! default. To run them:
//!
//! ```bash
//! # Start the database, migrate and seed
//! cargo run -p kontor-cli -- migrate
//! cargo run -p kontor-cli -- seed
//!
//! # Start the server
//! cargo run -p kontor-server
//!
//! # Run the ignored tests
//! cargo test -p kontor-integration-tests -- --ignored
//! ```
//!
//! The seed dataset is the one the assertions are written against:
//! Anna Schmidt (one order, 35.00), Bruno Keller (one order, 50.00) and
//! Clara Vogt (no orders).

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("KONTOR_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Create an HTTP client for the tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
