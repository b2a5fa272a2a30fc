//! # gatehouse-lifecycle — Lifecycle Resolution
//!
//! The decision core of Gatehouse. Given read-only facts about a
//! principal, [`LifecycleResolver::resolve`] computes exactly one
//! [`gatehouse_core::LifecycleState`] and returns it inside a
//! [`ResolvedLifecycle`] decision object, together with the routing
//! consequences of that state.
//!
//! - **Facts** ([`facts`]): the fact model and the async [`FactSource`]
//!   collaborator trait. Every lookup is best-effort; absence never
//!   aborts a resolution.
//!
//! - **Resolver** ([`resolver`]): two ordered decision-rule tables,
//!   evaluated first-match-wins, with concurrent fact fan-out between
//!   them.
//!
//! - **Decision** ([`decision`]): the immutable per-call decision object.
//!
//! - **Invariants** ([`invariants`]): structural post-conditions over
//!   every decision, strict in development and tolerant in production.
//!
//! - **Testing** ([`testing`]): an in-memory fact source for tests.
//!
//! The resolver owns no persistent state and is safe for unbounded
//! concurrent invocation.

pub mod decision;
pub mod facts;
pub mod invariants;
pub mod resolver;
pub mod testing;

// Re-export primary types.
pub use decision::ResolvedLifecycle;
pub use facts::{BillingScope, FactSource, OrgMembership, OrgProfile, PrincipalRecord};
pub use invariants::{validate, InvariantViolation, ValidationMode};
pub use resolver::LifecycleResolver;
