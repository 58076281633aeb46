//! Video Search Module
//!
//! Proxies search requests to the video platform's public API and enriches
//! every result with a content-details lookup (duration, view count) and a
//! channel lookup (channel thumbnail) before returning a display-ready
//! shape. One search fans out into two dependent lookups per result; the
//! per-result enrichment runs concurrently. No retry or backoff wraps the
//! upstream calls; any failure surfaces as a generic server error.

mod client;
mod format;
mod handler;
mod routes;

pub use client::*;
pub use format::{format_duration, format_view_count, time_ago};

pub use routes::routes;
