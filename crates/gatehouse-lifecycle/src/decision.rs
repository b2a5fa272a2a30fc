//! # Resolved Decision Object
//!
//! [`ResolvedLifecycle`] is the complete answer to "where does this
//! principal stand, and what may they reach". It is created fresh for
//! every resolution, never mutated afterwards, and never cached across
//! requests: facts can change between calls (a billing suspension lands,
//! an invite is accepted) and a stale decision must not outlive them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use gatehouse_core::{
    AccountType, BillingStatus, LifecycleState, OrgId, OrgMemberStatus, OrgRole, PrincipalId,
    WorkspaceId,
};
use gatehouse_routing::matcher;

/// The resolver's verdict for one principal at one point in time.
///
/// Exactly one [`LifecycleState`] holds per decision; every other field
/// is consistent with that state (the invariant validator enforces the
/// structural rules). The routing fields borrow compiled-in table data.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLifecycle {
    /// The resolved lifecycle state.
    pub state: LifecycleState,
    /// The principal this decision is about; `None` for anonymous requests.
    pub principal_id: Option<PrincipalId>,
    /// The principal's chosen account category, if any.
    pub account_type: Option<AccountType>,
    /// The organization the principal belongs to, when one was found.
    pub org_id: Option<OrgId>,
    /// Organization display name, best-effort.
    pub org_name: Option<String>,
    /// Organization avatar, best-effort.
    pub org_image_url: Option<String>,
    /// The principal's role in the organization, when a membership exists.
    pub org_role: Option<OrgRole>,
    /// The membership's acceptance status, when a membership exists.
    pub org_member_status: Option<OrgMemberStatus>,
    /// One of the principal's workspaces, when any exists.
    pub workspace_id: Option<WorkspaceId>,
    /// Whether the principal belongs to at least one workspace.
    pub has_workspace: bool,
    /// Whether a password reset is required.
    pub must_reset_password: bool,
    /// Whether the principal's email address is verified.
    pub is_email_verified: bool,
    /// The billing standing of the paying party, when a record was found.
    pub billing_status: Option<BillingStatus>,
    /// Where the caller must send the principal when the current path is
    /// unreachable; `None` for fully active states.
    pub redirect_to: Option<&'static str>,
    /// Patterns reachable in this state.
    pub allowed_path_patterns: &'static [&'static str],
    /// Patterns unreachable in this state.
    pub blocked_path_patterns: &'static [&'static str],
    /// The name of the decision rule that produced the state.
    /// Diagnostics only, never a control-flow input.
    pub rule: &'static str,
    /// When this decision was made.
    pub resolved_at: DateTime<Utc>,
}

impl ResolvedLifecycle {
    /// Whether the given request path is reachable under this decision.
    ///
    /// Allow-list first, block-list second, open default; see
    /// [`gatehouse_routing::matcher::is_allowed`].
    pub fn is_allowed(&self, path: &str) -> bool {
        matcher::is_allowed(self.allowed_path_patterns, self.blocked_path_patterns, path)
    }

    /// Human-readable label for the resolved state, for display surfaces.
    pub fn label(&self) -> &'static str {
        self.state.label()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_routing::routing_for;

    fn decision_for(state: LifecycleState) -> ResolvedLifecycle {
        let routing = routing_for(state);
        ResolvedLifecycle {
            state,
            principal_id: Some(PrincipalId::new()),
            account_type: None,
            org_id: None,
            org_name: None,
            org_image_url: None,
            org_role: None,
            org_member_status: None,
            workspace_id: None,
            has_workspace: false,
            must_reset_password: false,
            is_email_verified: true,
            billing_status: None,
            redirect_to: routing.redirect_to,
            allowed_path_patterns: routing.allowed,
            blocked_path_patterns: routing.blocked,
            rule: "test",
            resolved_at: Utc::now(),
        }
    }

    #[test]
    fn is_allowed_delegates_to_the_decision_patterns() {
        let decision = decision_for(LifecycleState::Suspended);
        assert!(decision.is_allowed("/billing"));
        assert!(!decision.is_allowed("/workspaces/abc"));
    }

    #[test]
    fn label_follows_the_state() {
        let decision = decision_for(LifecycleState::Suspended);
        assert_eq!(decision.label(), LifecycleState::Suspended.label());
    }

    #[test]
    fn decision_serializes_with_canonical_state_name() {
        let decision = decision_for(LifecycleState::OrgMemberPending);
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["state"], "ORG_MEMBER_PENDING");
        assert_eq!(json["rule"], "test");
    }
}
