//! Client core for the board admin frontend.
//!
//! # Overview
//! Talks to a backend whose every reply is wrapped in a uniform envelope
//! (`{ isSuccess, code, message, result }`) and gives callers exactly two
//! shapes to handle: a resolved [`Envelope`] — which may itself report a
//! business failure — or a normalized [`ApiError`] for everything that went
//! wrong below the application level.
//!
//! # Design
//! - `ApiClient` is constructed once per process over an injected
//!   [`Transport`]; no global state, no I/O inside the crate.
//! - Resource clients (`api::UserApi`, `api::PostApi`) bind one backend
//!   operation each to its method, path, body, and headers.
//! - Page controllers (`pages::UserPage`, `pages::PostPage`) own the form
//!   state and translate call outcomes into banners and list refreshes.
//! - DTOs are defined independently of the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod pages;
pub mod types;

pub use client::ApiClient;
pub use envelope::{Envelope, Failure};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
