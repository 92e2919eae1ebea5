//! Typed client for the words API.
//!
//! # Overview
//! The backend groups words into categories and serves them as JSON under
//! `/api/v1`. This crate builds the requests, runs them with a 30 second
//! timeout, and decodes the envelopes into typed values.
//!
//! # Design
//! - `WordsApi` is stateless: `build_*` produces a plain-data request,
//!   `parse_*` consumes a plain-data response. No I/O.
//! - `ApiClient` executes those requests with `reqwest` and runs every
//!   call through its interceptors. Construct one and pass it around; there
//!   is no global instance.
//! - Failures are logged once by `LogFailures` and handed back unchanged.
//!   No retries.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod types;

pub use api::WordsApi;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use interceptor::{Interceptor, LogFailures};
pub use types::{Category, CategoryList, NewCategory, NewWord, Word, WordList};
