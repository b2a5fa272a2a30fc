//! # Fact Model & Lookup Collaborator
//!
//! The read-only facts the resolver consumes, and the [`FactSource`] trait
//! through which the surrounding systems (identity store, org directory,
//! workspace index, billing) supply them.
//!
//! Every lookup is best-effort: a missing record and a failed fetch are
//! both `None`. Implementations log their own transport failures; the
//! resolver's control flow never sees an error from a lookup, only the
//! absence of a fact.

use serde::{Deserialize, Serialize};

use gatehouse_core::{AccountType, BillingStatus, OrgId, OrgMemberStatus, OrgRole, PrincipalId, WorkspaceId};

// ---------------------------------------------------------------------------
// PrincipalRecord
// ---------------------------------------------------------------------------

/// The identity system's record of an authenticated principal.
///
/// The caller (request middleware) loads this from the session and hands
/// it to the resolver; an anonymous request passes `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalRecord {
    /// The principal's identifier.
    pub id: PrincipalId,
    /// Whether the principal's email address has been verified.
    pub email_verified: bool,
    /// Whether a password reset is required before anything else.
    pub must_reset_password: bool,
    /// Whether the account has been soft-deleted.
    pub deleted: bool,
    /// The chosen account category; `None` until the principal picks one.
    pub account_type: Option<AccountType>,
    /// The principal's preferred organization, when they have set one.
    pub primary_org: Option<OrgId>,
}

impl PrincipalRecord {
    /// A fresh record in the state a principal has right after sign-up:
    /// unverified email, no account type, no flags set.
    pub fn new(id: PrincipalId) -> Self {
        Self {
            id,
            email_verified: false,
            must_reset_password: false,
            deleted: false,
            account_type: None,
            primary_org: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Organization facts
// ---------------------------------------------------------------------------

/// A principal's membership in an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMembership {
    /// The organization this membership belongs to.
    pub org_id: OrgId,
    /// The principal's role within the organization.
    pub role: OrgRole,
    /// Whether the membership has been accepted.
    pub status: OrgMemberStatus,
}

/// Display metadata for an organization. Best-effort: when the lookup
/// fails the decision simply carries no display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgProfile {
    /// The organization's display name.
    pub name: String,
    /// The organization's avatar image, when one is set.
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// BillingScope
// ---------------------------------------------------------------------------

/// The party a billing lookup is scoped to.
///
/// Organization accounts bill against the organization; individual
/// accounts bill against the principal. An org principal with no
/// organization has no billing scope at all, so no lookup is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingScope {
    /// Billing follows the organization.
    Organization(OrgId),
    /// Billing follows the principal directly.
    Principal(PrincipalId),
}

// ---------------------------------------------------------------------------
// FactSource
// ---------------------------------------------------------------------------

/// Read-only lookups against the surrounding systems.
///
/// All methods are best-effort: `None` means "no such record" and
/// "lookup failed" alike. Implementations are expected to log transport
/// failures themselves and to return futures that are `Send`, since
/// resolutions run on a multi-threaded runtime.
///
/// Lookups inherit the caller's cancellation: dropping a resolution
/// future drops any in-flight lookup with it.
#[allow(async_fn_in_trait)]
pub trait FactSource: Send + Sync {
    /// The principal's membership in a specific organization
    /// (`org = Some`), or any membership at all (`org = None`).
    ///
    /// The any-membership form returns the first membership found; a
    /// principal is expected to hold at most one active membership, so
    /// no tie-break is defined.
    async fn membership_for(
        &self,
        principal: PrincipalId,
        org: Option<OrgId>,
    ) -> Option<OrgMembership>;

    /// Display metadata for an organization.
    async fn organization_profile(&self, org: OrgId) -> Option<OrgProfile>;

    /// Whether the principal belongs to at least one workspace, and if
    /// so, one of its workspace ids. Which one, among several, is
    /// unspecified.
    async fn workspace_for(&self, principal: PrincipalId) -> Option<WorkspaceId>;

    /// The billing standing of the given scope.
    async fn billing_status(&self, scope: BillingScope) -> Option<BillingStatus>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
