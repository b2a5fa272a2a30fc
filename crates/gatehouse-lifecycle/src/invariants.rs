//! # Invariant Validator
//!
//! Post-condition checks over a freshly built [`ResolvedLifecycle`]. A
//! violation here means a resolver bug, never a normal user condition;
//! the validator therefore reports, and never repairs, the decision.
//!
//! In [`ValidationMode::Strict`] (development, tests) a violation aborts
//! the resolution. In [`ValidationMode::Tolerant`] (production) it is
//! logged at error level and the decision is returned anyway; downstream
//! callers stay safe because the routing table defaults closed on the
//! blocked-path side regardless of what the validator saw.

use thiserror::Error;

use gatehouse_core::{AccountType, LifecycleState, OrgRole, WorkspaceId};

use crate::decision::ResolvedLifecycle;

// ---------------------------------------------------------------------------
// ValidationMode
// ---------------------------------------------------------------------------

/// How the resolver reacts to an invariant violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Abort the resolution with the violation. For development and
    /// tests, where a resolver bug should fail loudly.
    Strict,
    /// Log the violation and return the decision anyway. For production,
    /// where availability wins and blocked paths stay blocked either way.
    #[default]
    Tolerant,
}

// ---------------------------------------------------------------------------
// InvariantViolation
// ---------------------------------------------------------------------------

/// A structural rule that failed to hold between a resolved state and its
/// associated fields. One variant per rule, each carrying the offending
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// An individual-family state with a non-individual account type.
    #[error("state {state} is individual-family but account type is {account_type:?}")]
    IndividualFamilyAccountType {
        /// The resolved state.
        state: LifecycleState,
        /// The account type found on the decision.
        account_type: Option<AccountType>,
    },

    /// An org-family state with a non-org account type.
    #[error("state {state} is org-family but account type is {account_type:?}")]
    OrgFamilyAccountType {
        /// The resolved state.
        state: LifecycleState,
        /// The account type found on the decision.
        account_type: Option<AccountType>,
    },

    /// A state that asserts an established organization, without an
    /// organization id.
    #[error("state {state} requires an organization id but none is present")]
    OrganizationRequired {
        /// The resolved state.
        state: LifecycleState,
    },

    /// An active state without a workspace.
    #[error("active state {state} requires a workspace")]
    ActiveWithoutWorkspace {
        /// The resolved state.
        state: LifecycleState,
    },

    /// A no-workspace state that nevertheless carries a workspace.
    #[error("state {state} asserts no workspace but workspace {workspace_id} is present")]
    NoWorkspaceWithWorkspace {
        /// The resolved state.
        state: LifecycleState,
        /// The workspace that should not be there.
        workspace_id: WorkspaceId,
    },

    /// An owner-only state whose membership role is not owner.
    #[error("state {state} requires role OWNER but found {role:?}")]
    OwnerRoleRequired {
        /// The resolved state.
        state: LifecycleState,
        /// The role found on the decision.
        role: Option<OrgRole>,
    },
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Check every structural rule against a decision. Returns the first
/// violated rule; checks run in declaration order.
///
/// The owner-role rule applies only to the owner states that assert an
/// established organization. `ORG_OWNER_ONBOARDING` exists precisely
/// because no membership was found, so it carries no role to check.
pub fn validate(decision: &ResolvedLifecycle) -> Result<(), InvariantViolation> {
    let state = decision.state;

    if state.is_individual_family() && decision.account_type != Some(AccountType::Individual) {
        return Err(InvariantViolation::IndividualFamilyAccountType {
            state,
            account_type: decision.account_type,
        });
    }

    if state.is_org_family() && decision.account_type != Some(AccountType::Org) {
        return Err(InvariantViolation::OrgFamilyAccountType {
            state,
            account_type: decision.account_type,
        });
    }

    if state.requires_org() && decision.org_id.is_none() {
        return Err(InvariantViolation::OrganizationRequired { state });
    }

    if state.is_active() && !decision.has_workspace {
        return Err(InvariantViolation::ActiveWithoutWorkspace { state });
    }

    if state.is_no_workspace() {
        if let Some(workspace_id) = decision.workspace_id {
            return Err(InvariantViolation::NoWorkspaceWithWorkspace { state, workspace_id });
        }
        if decision.has_workspace {
            // has_workspace must track workspace_id; a mismatch between
            // the two is the same rule violated.
            return Err(InvariantViolation::ActiveWithoutWorkspace { state });
        }
    }

    if state.is_org_owner_family() && state.requires_org() && decision.org_role != Some(OrgRole::Owner)
    {
        return Err(InvariantViolation::OwnerRoleRequired {
            state,
            role: decision.org_role,
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
