//! # Path Matcher
//!
//! Decides whether a request path is reachable under a state's pattern
//! sets. Three pattern forms are supported:
//!
//! - `*` matches any path.
//! - A pattern ending in `/*` matches the bare prefix and any path below
//!   it. `/workspaces/*` matches `/workspaces` and `/workspaces/123/tasks`
//!   but not `/workspacesX`.
//! - Any other pattern matches the exact path or a strict sub-path.
//!   `/billing` matches `/billing` and `/billing/invoices` but not
//!   `/billing-export`.
//!
//! Matching is plain string work on path segments; no glob or regex
//! engine is involved.

/// Whether `path` falls under `prefix` as a strict sub-path
/// (`prefix` + `/` + anything).
fn is_strict_subpath(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether a single routing pattern matches a request path.
pub fn matches_pattern(pattern: &str, path: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path == prefix || is_strict_subpath(path, prefix);
    }
    path == pattern || is_strict_subpath(path, pattern)
}

/// Whether a request path is reachable under the given pattern sets.
///
/// Evaluation order, fixed and load-bearing:
///
/// 1. The allow-list is checked first; its first match returns `true`.
/// 2. The block-list is checked next; its first match returns `false`.
/// 3. A path matching neither list is reachable (open default).
///
/// The ordering makes allow win over block when both could match the same
/// path. The routing table is authored to never rely on that tie-break,
/// but the matcher's priority is the contract if it ever happens.
pub fn is_allowed(allowed: &[&str], blocked: &[&str], path: &str) -> bool {
    if allowed.iter().any(|pattern| matches_pattern(pattern, path)) {
        return true;
    }
    if blocked.iter().any(|pattern| matches_pattern(pattern, path)) {
        return false;
    }
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
