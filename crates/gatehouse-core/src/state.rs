//! # Lifecycle State Enumeration
//!
//! [`LifecycleState`] is the single closed enumeration describing where a
//! principal stands in onboarding, activation, and restriction. Exactly one
//! state holds per resolution; every downstream consequence (routing,
//! invariants, display) is derived from the state alone.
//!
//! Matches over this enum are exhaustive with no wildcard arms, so adding
//! a variant is a compile error until every consumer is updated.

use serde::{Deserialize, Serialize};

/// The resolved lifecycle state of a principal.
///
/// Variants are grouped by category. The canonical names (see
/// [`LifecycleState::as_str`]) are the platform-wide wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    // Unauthenticated category
    /// No authenticated principal.
    Unauthenticated,
    /// Principal exists but their email address is not verified.
    EmailUnverified,
    /// Email verified, but no account category has been chosen yet.
    AccountTypePending,

    // Individual-account category
    /// Individual account without a workspace yet.
    IndividualOnboarding,
    /// Individual account with at least one workspace.
    IndividualActive,

    // Organization-owner category
    /// Org account with no organization membership yet; the principal is
    /// expected to create (and thereby own) one.
    OrgOwnerOnboarding,
    /// Organization owner whose org has no workspace yet.
    OrgOwnerNoWorkspace,
    /// Organization owner with at least one workspace.
    OrgOwnerActive,

    // Organization-admin/moderator category
    /// Admin or moderator whose org has no workspace yet.
    OrgAdminNoWorkspace,
    /// Admin or moderator with at least one workspace.
    OrgAdminActive,

    // Organization-member category
    /// Invited member who has not accepted the invitation.
    OrgMemberPending,
    /// Accepted member whose org has no workspace yet.
    OrgMemberNoWorkspace,
    /// Accepted member with at least one workspace.
    OrgMemberActive,

    // Special / terminal category
    /// Access revoked by billing standing.
    Suspended,
    /// Account soft-deleted. Terminal; callers force logout.
    Deleted,
    /// A password reset is required before anything else.
    MustResetPassword,
}

impl LifecycleState {
    /// Every state, in declaration order. Used by exhaustive matrix tests.
    pub fn all() -> &'static [LifecycleState] {
        &[
            Self::Unauthenticated,
            Self::EmailUnverified,
            Self::AccountTypePending,
            Self::IndividualOnboarding,
            Self::IndividualActive,
            Self::OrgOwnerOnboarding,
            Self::OrgOwnerNoWorkspace,
            Self::OrgOwnerActive,
            Self::OrgAdminNoWorkspace,
            Self::OrgAdminActive,
            Self::OrgMemberPending,
            Self::OrgMemberNoWorkspace,
            Self::OrgMemberActive,
            Self::Suspended,
            Self::Deleted,
            Self::MustResetPassword,
        ]
    }

    /// The canonical string name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::EmailUnverified => "EMAIL_UNVERIFIED",
            Self::AccountTypePending => "ACCOUNT_TYPE_PENDING",
            Self::IndividualOnboarding => "INDIVIDUAL_ONBOARDING",
            Self::IndividualActive => "INDIVIDUAL_ACTIVE",
            Self::OrgOwnerOnboarding => "ORG_OWNER_ONBOARDING",
            Self::OrgOwnerNoWorkspace => "ORG_OWNER_NO_WORKSPACE",
            Self::OrgOwnerActive => "ORG_OWNER_ACTIVE",
            Self::OrgAdminNoWorkspace => "ORG_ADMIN_NO_WORKSPACE",
            Self::OrgAdminActive => "ORG_ADMIN_ACTIVE",
            Self::OrgMemberPending => "ORG_MEMBER_PENDING",
            Self::OrgMemberNoWorkspace => "ORG_MEMBER_NO_WORKSPACE",
            Self::OrgMemberActive => "ORG_MEMBER_ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Deleted => "DELETED",
            Self::MustResetPassword => "MUST_RESET_PASSWORD",
        }
    }

    /// Recover a state from its canonical name. Returns `None` for any
    /// string that is not a canonical state name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.as_str() == name)
    }

    /// A human-readable label for display surfaces. Never a control-flow
    /// input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Signed out",
            Self::EmailUnverified => "Email verification required",
            Self::AccountTypePending => "Choosing account type",
            Self::IndividualOnboarding => "Setting up personal workspace",
            Self::IndividualActive => "Active",
            Self::OrgOwnerOnboarding => "Creating organization",
            Self::OrgOwnerNoWorkspace => "Organization needs a workspace",
            Self::OrgOwnerActive => "Active (owner)",
            Self::OrgAdminNoWorkspace => "Organization needs a workspace",
            Self::OrgAdminActive => "Active (admin)",
            Self::OrgMemberPending => "Invitation pending",
            Self::OrgMemberNoWorkspace => "Waiting for a workspace",
            Self::OrgMemberActive => "Active (member)",
            Self::Suspended => "Suspended",
            Self::Deleted => "Account deleted",
            Self::MustResetPassword => "Password reset required",
        }
    }

    /// Whether this is a fully activated state (the principal has a
    /// workspace and unrestricted product access for their role).
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::IndividualActive
                | Self::OrgOwnerActive
                | Self::OrgAdminActive
                | Self::OrgMemberActive
        )
    }

    /// Whether this state still requires an onboarding step before the
    /// principal can use the product.
    pub fn requires_onboarding(&self) -> bool {
        matches!(
            self,
            Self::AccountTypePending
                | Self::IndividualOnboarding
                | Self::OrgOwnerOnboarding
                | Self::OrgOwnerNoWorkspace
                | Self::OrgAdminNoWorkspace
                | Self::OrgMemberNoWorkspace
        )
    }

    /// Whether this state is a restricted or pending org membership
    /// (invited but not accepted, or accepted with nowhere to land yet).
    pub fn is_restricted_org_member(&self) -> bool {
        matches!(self, Self::OrgMemberPending | Self::OrgMemberNoWorkspace)
    }

    /// Whether this is a terminal state: no amount of in-product activity
    /// moves the principal out of it (an external system must act first).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Suspended | Self::Deleted | Self::MustResetPassword)
    }

    /// Whether this state belongs to the individual-account family.
    pub fn is_individual_family(&self) -> bool {
        matches!(self, Self::IndividualOnboarding | Self::IndividualActive)
    }

    /// Whether this state belongs to the organization family.
    pub fn is_org_family(&self) -> bool {
        matches!(
            self,
            Self::OrgOwnerOnboarding
                | Self::OrgOwnerNoWorkspace
                | Self::OrgOwnerActive
                | Self::OrgAdminNoWorkspace
                | Self::OrgAdminActive
                | Self::OrgMemberPending
                | Self::OrgMemberNoWorkspace
                | Self::OrgMemberActive
        )
    }

    /// Whether this state asserts an established organization, and must
    /// therefore carry a non-null organization id.
    ///
    /// `OrgOwnerOnboarding` and `OrgMemberPending` are deliberately
    /// excluded: the first exists precisely because no organization was
    /// found, and the second may precede the invite lookup carrying an id.
    pub fn requires_org(&self) -> bool {
        matches!(
            self,
            Self::OrgOwnerNoWorkspace
                | Self::OrgOwnerActive
                | Self::OrgAdminActive
                | Self::OrgMemberActive
        )
    }

    /// Whether this state asserts the absence of a workspace.
    pub fn is_no_workspace(&self) -> bool {
        matches!(
            self,
            Self::OrgOwnerNoWorkspace | Self::OrgAdminNoWorkspace | Self::OrgMemberNoWorkspace
        )
    }

    /// Whether this state is reserved for the organization owner.
    pub fn is_org_owner_family(&self) -> bool {
        matches!(
            self,
            Self::OrgOwnerOnboarding | Self::OrgOwnerNoWorkspace | Self::OrgOwnerActive
        )
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_state_exactly_once() {
        let all = LifecycleState::all();
        assert_eq!(all.len(), 16);
        let mut seen = std::collections::HashSet::new();
        for state in all {
            assert!(seen.insert(state.as_str()), "duplicate state {state}");
        }
    }

    #[test]
    fn canonical_names_round_trip() {
        for &state in LifecycleState::all() {
            assert_eq!(
                LifecycleState::from_name(state.as_str()),
                Some(state),
                "from_name({}) should return {:?}",
                state.as_str(),
                state
            );
        }
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        assert_eq!(LifecycleState::from_name("ACTIVE"), None);
        assert_eq!(LifecycleState::from_name(""), None);
        assert_eq!(LifecycleState::from_name("unauthenticated"), None);
    }

    #[test]
    fn serde_names_match_canonical_names() {
        for &state in LifecycleState::all() {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
            let back: LifecycleState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn active_states_are_exactly_the_four_active_variants() {
        let active: Vec<_> = LifecycleState::all()
            .iter()
            .filter(|s| s.is_active())
            .collect();
        assert_eq!(
            active,
            vec![
                &LifecycleState::IndividualActive,
                &LifecycleState::OrgOwnerActive,
                &LifecycleState::OrgAdminActive,
                &LifecycleState::OrgMemberActive,
            ]
        );
    }

    #[test]
    fn active_and_onboarding_are_disjoint() {
        for &state in LifecycleState::all() {
            assert!(
                !(state.is_active() && state.requires_onboarding()),
                "{state} cannot be both active and onboarding"
            );
        }
    }

    #[test]
    fn families_are_disjoint() {
        for &state in LifecycleState::all() {
            assert!(
                !(state.is_individual_family() && state.is_org_family()),
                "{state} cannot be in both families"
            );
        }
    }

    #[test]
    fn terminal_states_classification() {
        assert!(LifecycleState::Suspended.is_terminal());
        assert!(LifecycleState::Deleted.is_terminal());
        assert!(LifecycleState::MustResetPassword.is_terminal());
        assert!(!LifecycleState::IndividualActive.is_terminal());
        assert!(!LifecycleState::Unauthenticated.is_terminal());
    }

    #[test]
    fn org_required_states_are_a_subset_of_the_org_family() {
        for &state in LifecycleState::all() {
            if state.requires_org() {
                assert!(state.is_org_family(), "{state} requires org but is not org family");
            }
        }
    }

    #[test]
    fn no_workspace_states_never_overlap_active_states() {
        for &state in LifecycleState::all() {
            assert!(
                !(state.is_no_workspace() && state.is_active()),
                "{state} cannot both lack and have a workspace"
            );
        }
    }

    #[test]
    fn every_state_has_a_nonempty_label() {
        for &state in LifecycleState::all() {
            assert!(!state.label().is_empty(), "{state} has an empty label");
        }
    }
}
