//! Page controllers: per-view form state and the glue to the resource
//! clients.
//!
//! # Design
//! Each page owns its form fields, target ids, and the last banner, and
//! borrows the shared `ApiClient`. Submissions follow one protocol: guard
//! required ids (no request when missing), call the resource client, then
//! translate the outcome — success banner plus form reset, error banner with
//! the envelope's message verbatim, or error banner from the normalized
//! rejection with a per-action fallback. Every failure is terminal for that
//! action; nothing is retried.

pub mod posts;
pub mod users;

pub use posts::PostPage;
pub use users::UserPage;

use crate::error::ApiError;

/// Kind of the message banner shown after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// The message banner shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Banner {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Banner {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Error banner for a rejected call: the rejection's message when it has
/// one, the page's per-action fallback otherwise.
pub(crate) fn rejection_banner(error: &ApiError, fallback: &str) -> Banner {
    Banner::error(error.user_message().unwrap_or(fallback))
}
