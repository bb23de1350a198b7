//! Bullet and numbered list parsing

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:-|\*|\d+\.)[ \t]+(.+)$").expect("static regex must compile"));

/// Split a section body into list items
///
/// Lines starting with `-`, `*` or `N.` are collected in order. When no line
/// carries a marker, every non-blank line becomes an item. Never fails: a
/// missing or blank block yields an empty list.
pub fn parse_bullets(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        debug!("parse_bullets: no input");
        return Vec::new();
    };

    let bullets: Vec<String> = BULLET_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if !bullets.is_empty() {
        debug!(count = bullets.len(), "parse_bullets: found bullet items");
        return bullets;
    }

    if text.trim().is_empty() {
        return Vec::new();
    }

    debug!("parse_bullets: no markers, splitting lines");
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
