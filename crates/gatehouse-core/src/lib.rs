//! # gatehouse-core — Shared Domain Types
//!
//! Domain primitives shared by every Gatehouse crate:
//!
//! - **Identity** ([`identity`]): UUID-backed identifier newtypes, one
//!   distinct type per entity class.
//!
//! - **Account** ([`account`]): closed enums for account category,
//!   organization role, membership status, and billing standing.
//!
//! - **State** ([`state`]): the [`LifecycleState`] enumeration with its
//!   canonical names, display labels, and convenience predicates.
//!
//! This crate holds pure data types: no IO, no async, no lookup logic.

pub mod account;
pub mod identity;
pub mod state;

// Re-export primary types.
pub use account::{AccountType, BillingStatus, OrgMemberStatus, OrgRole};
pub use identity::{OrgId, PrincipalId, WorkspaceId};
pub use state::LifecycleState;
