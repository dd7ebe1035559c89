//! Resource clients: one method per backend operation.
//!
//! Each method fixes the HTTP method, path template, body shape, and headers
//! for a single operation — no business logic, no retries, no caching.

pub mod posts;
pub mod users;

pub use posts::PostApi;
pub use users::UserApi;
