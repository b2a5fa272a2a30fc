//! # Lifecycle Resolver
//!
//! Turns a principal record plus gathered facts into exactly one
//! [`LifecycleState`] and the decision object around it.
//!
//! ## Decision structure
//!
//! The precedence chain is encoded as two ordered rule tables evaluated
//! first-match-wins, not as nested conditionals:
//!
//! - `PRINCIPAL_RULES` run on the principal record alone, before any
//!   lookup is made. Password reset dominates everything, then the
//!   deleted flag, then email verification, then account-type choice.
//! - `ACCOUNT_RULES` run after fact gathering. Billing suspension is
//!   checked first, then the account-category branch, and finally a
//!   defensive fallback that fails closed and logs; the fallback is
//!   unreachable for well-formed inputs and tests assert exactly that.
//!
//! The table order is load-bearing. Reordering entries changes observable
//! behavior, which is why the tables are declared as data rather than
//! control flow.
//!
//! ## Fact gathering
//!
//! Lookups fan out concurrently where independent: membership and
//! workspace first, then organization profile and billing once the org id
//! is known. All lookups are best-effort; absence never aborts a
//! resolution. Cancellation propagates by dropping the future, so a
//! cancelled resolution yields no decision at all rather than a partial
//! one.

use gatehouse_core::{AccountType, BillingStatus, LifecycleState, OrgRole, WorkspaceId};
use gatehouse_routing::routing_for;

use crate::decision::ResolvedLifecycle;
use crate::facts::{BillingScope, FactSource, OrgMembership, OrgProfile, PrincipalRecord};
use crate::invariants::{self, InvariantViolation, ValidationMode};

// ---------------------------------------------------------------------------
// Gathered facts
// ---------------------------------------------------------------------------

/// Everything the lookups produced for one resolution. Fields stay `None`
/// when the fact is absent or its lookup failed.
#[derive(Debug, Clone, Default)]
struct GatheredFacts {
    membership: Option<OrgMembership>,
    org_profile: Option<OrgProfile>,
    workspace: Option<WorkspaceId>,
    billing: Option<BillingStatus>,
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// A named decision rule over the principal record alone.
type PrincipalRule = (&'static str, fn(&PrincipalRecord) -> Option<LifecycleState>);

/// A named decision rule over the principal record plus gathered facts.
type AccountRule = (
    &'static str,
    fn(&PrincipalRecord, &GatheredFacts) -> Option<LifecycleState>,
);

/// Early-exit rules, evaluated in order before any lookup runs.
const PRINCIPAL_RULES: &[PrincipalRule] = &[
    ("password_reset_required", rule_password_reset),
    ("account_deleted", rule_deleted),
    ("email_unverified", rule_email_unverified),
    ("account_type_pending", rule_account_type_pending),
];

/// Post-lookup rules, evaluated in order. The final entry is a defensive
/// fallback that always fires, so the table is total.
const ACCOUNT_RULES: &[AccountRule] = &[
    ("billing_suspended", rule_billing_suspended),
    ("individual_account", rule_individual),
    ("org_account", rule_org),
    ("unknown_account_type", rule_unknown_account_type),
];

fn rule_password_reset(record: &PrincipalRecord) -> Option<LifecycleState> {
    record
        .must_reset_password
        .then_some(LifecycleState::MustResetPassword)
}

fn rule_deleted(record: &PrincipalRecord) -> Option<LifecycleState> {
    record.deleted.then_some(LifecycleState::Deleted)
}

fn rule_email_unverified(record: &PrincipalRecord) -> Option<LifecycleState> {
    (!record.email_verified).then_some(LifecycleState::EmailUnverified)
}

fn rule_account_type_pending(record: &PrincipalRecord) -> Option<LifecycleState> {
    record
        .account_type
        .is_none()
        .then_some(LifecycleState::AccountTypePending)
}

fn rule_billing_suspended(_record: &PrincipalRecord, facts: &GatheredFacts) -> Option<LifecycleState> {
    facts
        .billing
        .is_some_and(|billing| billing.is_suspended())
        .then_some(LifecycleState::Suspended)
}

fn rule_individual(record: &PrincipalRecord, facts: &GatheredFacts) -> Option<LifecycleState> {
    if record.account_type != Some(AccountType::Individual) {
        return None;
    }
    Some(if facts.workspace.is_some() {
        LifecycleState::IndividualActive
    } else {
        LifecycleState::IndividualOnboarding
    })
}

fn rule_org(record: &PrincipalRecord, facts: &GatheredFacts) -> Option<LifecycleState> {
    if record.account_type != Some(AccountType::Org) {
        return None;
    }

    let Some(membership) = &facts.membership else {
        // Membership is a prerequisite for every role but the founding
        // owner, so a missing membership is read as "about to create the
        // organization". A revoked invite lands here too, which is why
        // the assumption is logged rather than silent.
        tracing::debug!(
            principal = %record.id,
            "org principal without membership, assuming owner onboarding"
        );
        return Some(LifecycleState::OrgOwnerOnboarding);
    };

    // An unaccepted invite confers no role-based access at all.
    if membership.status.is_invited() {
        return Some(LifecycleState::OrgMemberPending);
    }

    let has_workspace = facts.workspace.is_some();
    Some(match membership.role {
        OrgRole::Owner => {
            if has_workspace {
                LifecycleState::OrgOwnerActive
            } else {
                LifecycleState::OrgOwnerNoWorkspace
            }
        }
        OrgRole::Admin | OrgRole::Moderator => {
            if has_workspace {
                LifecycleState::OrgAdminActive
            } else {
                LifecycleState::OrgAdminNoWorkspace
            }
        }
        OrgRole::Member => {
            if has_workspace {
                LifecycleState::OrgMemberActive
            } else {
                LifecycleState::OrgMemberNoWorkspace
            }
        }
    })
}

fn rule_unknown_account_type(
    record: &PrincipalRecord,
    _facts: &GatheredFacts,
) -> Option<LifecycleState> {
    // Unreachable for well-formed inputs: the account-type-pending rule
    // catches None and the enum admits no other values. Fail closed.
    tracing::error!(
        principal = %record.id,
        account_type = ?record.account_type,
        "no account rule matched, failing closed to UNAUTHENTICATED"
    );
    Some(LifecycleState::Unauthenticated)
}

// ---------------------------------------------------------------------------
// LifecycleResolver
// ---------------------------------------------------------------------------

/// The lifecycle resolver. Stateless per call; one instance is safe for
/// unbounded concurrent use, since the only shared data (routing table,
/// rule tables) is compiled-in constants.
#[derive(Debug, Clone)]
pub struct LifecycleResolver<F> {
    source: F,
    mode: ValidationMode,
}

impl<F: FactSource> LifecycleResolver<F> {
    /// Create a resolver over the given fact source, with the default
    /// (tolerant) validation mode.
    pub fn new(source: F) -> Self {
        Self {
            source,
            mode: ValidationMode::default(),
        }
    }

    /// Set how invariant violations are handled. Strict for development
    /// and tests, tolerant for production.
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Resolve the lifecycle state and routing consequences for a
    /// principal. `None` means an anonymous request.
    ///
    /// Returns `Err` only in strict validation mode, and only for a
    /// decision that violates its own structural invariants, which is a
    /// resolver bug rather than a user condition. Lookups never produce
    /// errors; a failed lookup is an absent fact.
    pub async fn resolve(
        &self,
        principal: Option<&PrincipalRecord>,
    ) -> Result<ResolvedLifecycle, InvariantViolation> {
        let Some(record) = principal else {
            let decision = build_decision(
                LifecycleState::Unauthenticated,
                None,
                &GatheredFacts::default(),
                "no_principal",
            );
            return self.finish(decision);
        };

        for &(name, rule) in PRINCIPAL_RULES {
            if let Some(state) = rule(record) {
                let decision = build_decision(state, Some(record), &GatheredFacts::default(), name);
                return self.finish(decision);
            }
        }

        let facts = self.gather(record).await;

        for &(name, rule) in ACCOUNT_RULES {
            if let Some(state) = rule(record, &facts) {
                let decision = build_decision(state, Some(record), &facts, name);
                return self.finish(decision);
            }
        }

        // The fallback rule always fires, so this is unreachable; keep a
        // closed-by-default decision anyway rather than panicking.
        tracing::error!(principal = %record.id, "no decision rule fired at all");
        self.finish(build_decision(
            LifecycleState::Unauthenticated,
            Some(record),
            &facts,
            "no_rule_fired",
        ))
    }

    /// Gather facts for the account rules. Lookups fan out concurrently
    /// where independent of each other; billing waits for the org id
    /// because that id scopes the query.
    async fn gather(&self, record: &PrincipalRecord) -> GatheredFacts {
        match record.account_type {
            Some(AccountType::Org) => {
                let (membership, workspace) = tokio::join!(
                    self.org_membership(record),
                    self.source.workspace_for(record.id),
                );
                let (org_profile, billing) = match &membership {
                    Some(m) => tokio::join!(
                        self.source.organization_profile(m.org_id),
                        self.source.billing_status(BillingScope::Organization(m.org_id)),
                    ),
                    // No organization means no billing scope; both facts
                    // stay absent.
                    None => (None, None),
                };
                GatheredFacts {
                    membership,
                    org_profile,
                    workspace,
                    billing,
                }
            }
            Some(AccountType::Individual) => {
                let (workspace, billing) = tokio::join!(
                    self.source.workspace_for(record.id),
                    self.source.billing_status(BillingScope::Principal(record.id)),
                );
                GatheredFacts {
                    membership: None,
                    org_profile: None,
                    workspace,
                    billing,
                }
            }
            None => GatheredFacts::default(),
        }
    }

    /// The principal's organization membership: the primary organization
    /// when one is set and a membership exists there, otherwise any
    /// membership at all.
    async fn org_membership(&self, record: &PrincipalRecord) -> Option<OrgMembership> {
        if let Some(primary) = record.primary_org {
            if let Some(membership) = self.source.membership_for(record.id, Some(primary)).await {
                return Some(membership);
            }
        }
        self.source.membership_for(record.id, None).await
    }

    /// Validate the finished decision and apply the configured mode.
    fn finish(
        &self,
        decision: ResolvedLifecycle,
    ) -> Result<ResolvedLifecycle, InvariantViolation> {
        match invariants::validate(&decision) {
            Ok(()) => Ok(decision),
            Err(violation) => match self.mode {
                ValidationMode::Strict => Err(violation),
                ValidationMode::Tolerant => {
                    tracing::error!(
                        state = %decision.state,
                        rule = decision.rule,
                        violation = %violation,
                        "lifecycle decision violates its invariants, returning it anyway"
                    );
                    Ok(decision)
                }
            },
        }
    }
}

/// Assemble the decision object for a resolved state. Routing fields come
/// from the compiled-in table; everything else copies the facts verbatim.
fn build_decision(
    state: LifecycleState,
    principal: Option<&PrincipalRecord>,
    facts: &GatheredFacts,
    rule: &'static str,
) -> ResolvedLifecycle {
    let routing = routing_for(state);
    ResolvedLifecycle {
        state,
        principal_id: principal.map(|p| p.id),
        account_type: principal.and_then(|p| p.account_type),
        org_id: facts.membership.as_ref().map(|m| m.org_id),
        org_name: facts.org_profile.as_ref().map(|p| p.name.clone()),
        org_image_url: facts.org_profile.as_ref().and_then(|p| p.image_url.clone()),
        org_role: facts.membership.as_ref().map(|m| m.role),
        org_member_status: facts.membership.as_ref().map(|m| m.status),
        workspace_id: facts.workspace,
        has_workspace: facts.workspace.is_some(),
        must_reset_password: principal.is_some_and(|p| p.must_reset_password),
        is_email_verified: principal.is_some_and(|p| p.email_verified),
        billing_status: facts.billing,
        redirect_to: routing.redirect_to,
        allowed_path_patterns: routing.allowed,
        blocked_path_patterns: routing.blocked,
        rule,
        resolved_at: chrono::Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
