//! Bookmarks Module
//!
//! Session-scoped bookmark management: each browser session owns a flat
//! collection of saved videos, partitioned by an anonymous session id.
//!
//! # Features
//!
//! - Add / remove / list operations with app-layer duplicate prevention
//! - Ready-to-use HTTP handlers and routes
//! - Database migrations included
//!
//! # Usage
//!
//! ```rust,ignore
//! use tubemark::bookmarks;
//!
//! // Get the migrations to run
//! for (name, sql) in bookmarks::migrations() {
//!     // Run migration...
//! }
//!
//! // Mount the routes
//! let app = Router::new()
//!     .merge(bookmarks::routes())
//!     .with_state(app_state);
//!
//! // Use the library directly
//! let store = bookmarks::Bookmarks::new(connection);
//! store.add(&session_id, &record).await?;
//! ```

mod handler;
mod lib;
mod routes;

pub use lib::*;

pub use routes::routes;

/// Returns the migrations for the bookmarks module.
///
/// These should be run during application startup to ensure the database
/// schema is up to date.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "bookmarks_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
