//! HTTP API integration tests.
//!
//! Starts the axum app on an ephemeral port over a temporary item document
//! and exercises it with reqwest.

#![cfg(feature = "http")]

mod support;
mod cors;
mod stats;
