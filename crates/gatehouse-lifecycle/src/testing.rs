//! # Test Support
//!
//! [`StaticFactSource`] is an in-memory [`FactSource`] for unit and
//! integration tests: facts are registered up front with builder methods
//! and every lookup answers from the registered maps. Anything not
//! registered is absent, which doubles as the "lookup failed" case since
//! the two are indistinguishable to the resolver by design.

use std::collections::HashMap;

use gatehouse_core::{BillingStatus, OrgId, PrincipalId, WorkspaceId};

use crate::facts::{BillingScope, FactSource, OrgMembership, OrgProfile};

/// An in-memory fact source with builder-style registration.
#[derive(Debug, Clone, Default)]
pub struct StaticFactSource {
    memberships: Vec<(PrincipalId, OrgMembership)>,
    profiles: HashMap<OrgId, OrgProfile>,
    workspaces: HashMap<PrincipalId, WorkspaceId>,
    billing: HashMap<BillingScope, BillingStatus>,
}

impl StaticFactSource {
    /// Register an organization membership for a principal.
    pub fn with_membership(mut self, principal: PrincipalId, membership: OrgMembership) -> Self {
        self.memberships.push((principal, membership));
        self
    }

    /// Register display metadata for an organization.
    pub fn with_profile(mut self, org: OrgId, profile: OrgProfile) -> Self {
        self.profiles.insert(org, profile);
        self
    }

    /// Register a workspace membership for a principal.
    pub fn with_workspace(mut self, principal: PrincipalId, workspace: WorkspaceId) -> Self {
        self.workspaces.insert(principal, workspace);
        self
    }

    /// Register a billing record for a scope.
    pub fn with_billing(mut self, scope: BillingScope, status: BillingStatus) -> Self {
        self.billing.insert(scope, status);
        self
    }
}

impl FactSource for StaticFactSource {
    async fn membership_for(
        &self,
        principal: PrincipalId,
        org: Option<OrgId>,
    ) -> Option<OrgMembership> {
        self.memberships
            .iter()
            .filter(|(p, _)| *p == principal)
            .map(|(_, m)| *m)
            .find(|m| org.map_or(true, |wanted| m.org_id == wanted))
    }

    async fn organization_profile(&self, org: OrgId) -> Option<OrgProfile> {
        self.profiles.get(&org).cloned()
    }

    async fn workspace_for(&self, principal: PrincipalId) -> Option<WorkspaceId> {
        self.workspaces.get(&principal).copied()
    }

    async fn billing_status(&self, scope: BillingScope) -> Option<BillingStatus> {
        self.billing.get(&scope).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
