//! Demo backend for a fractional real-estate investment platform.
//!
//! All data is generated in memory at startup. The view-model modules
//! shape it into the rows and summaries each page of the client shows.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod geo;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod session;
pub mod views;

pub use handlers::{router, AppState};
