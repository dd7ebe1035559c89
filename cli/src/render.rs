//! Terminal rendering for the post list.

use board_core::types::PostSummary;
use chrono::NaiveDateTime;

/// Reformat the backend's `LocalDateTime` string for display.
///
/// Unparseable input is shown as-is rather than dropped.
pub fn format_created_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Render the post list as a table, one row per post.
pub fn post_table(posts: &[PostSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<24} {:<12} {:<12} {}\n",
        "ID", "제목", "작성자", "카테고리", "작성일"
    ));
    for post in posts {
        out.push_str(&format!(
            "{:<6} {:<24} {:<12} {:<12} {}\n",
            post.post_id,
            post.title,
            post.username,
            post.category,
            format_created_date(&post.created_date)
        ));
    }
    if posts.is_empty() {
        out.push_str("게시물이 없습니다.\n");
    }
    out
}
