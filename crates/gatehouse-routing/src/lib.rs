//! # gatehouse-routing — Routing Table & Path Matcher
//!
//! Derives routing consequences from a resolved lifecycle state:
//!
//! - **Table** ([`table`]): the compiled-in, process-wide constant mapping
//!   from [`gatehouse_core::LifecycleState`] to redirect target and
//!   allow/block pattern sets. Total over the enumeration.
//!
//! - **Matcher** ([`matcher`]): reachability checks over pattern sets with
//!   `*`, prefix-`/*`, and exact/sub-path semantics. Allow-list first,
//!   block-list second, open default for unlisted paths.
//!
//! Both halves are pure and allocation-free; the table borrows only
//! compiled-in data and is safe to share across unbounded concurrent
//! resolutions.

pub mod matcher;
pub mod table;

// Re-export primary items.
pub use matcher::{is_allowed, matches_pattern};
pub use table::{paths, routing_for, RoutingEntry};
