//! # Concrete Lifecycle Scenarios
//!
//! End-to-end resolutions for the situations the product actually ships:
//! each test builds the real fact constellation, resolves it, and checks
//! the state, the redirect target, and path reachability on the finished
//! decision object.

use anyhow::Result;

use gatehouse_core::{
    AccountType, BillingStatus, LifecycleState, OrgId, OrgMemberStatus, OrgRole, PrincipalId,
    WorkspaceId,
};
use gatehouse_lifecycle::testing::StaticFactSource;
use gatehouse_lifecycle::{
    BillingScope, LifecycleResolver, OrgMembership, OrgProfile, PrincipalRecord, ValidationMode,
};
use gatehouse_routing::paths;

fn resolver(source: StaticFactSource) -> LifecycleResolver<StaticFactSource> {
    LifecycleResolver::new(source).with_validation_mode(ValidationMode::Strict)
}

fn verified(account_type: AccountType) -> PrincipalRecord {
    let mut record = PrincipalRecord::new(PrincipalId::new());
    record.email_verified = true;
    record.account_type = Some(account_type);
    record
}

#[tokio::test]
async fn anonymous_visitor_is_sent_to_sign_in() -> Result<()> {
    let decision = resolver(StaticFactSource::default()).resolve(None).await?;
    assert_eq!(decision.state, LifecycleState::Unauthenticated);
    assert_eq!(decision.redirect_to, Some(paths::SIGN_IN));
    assert!(!decision.is_allowed("/dashboard"));
    assert!(decision.is_allowed(paths::SIGN_IN));
    Ok(())
}

#[tokio::test]
async fn fresh_individual_lands_in_onboarding() -> Result<()> {
    let record = verified(AccountType::Individual);
    let decision = resolver(StaticFactSource::default())
        .resolve(Some(&record))
        .await?;
    assert_eq!(decision.state, LifecycleState::IndividualOnboarding);
    assert!(decision.state.requires_onboarding());
    assert!(decision.is_allowed(paths::ONBOARDING));
    assert!(!decision.is_allowed("/workspaces/123"));
    Ok(())
}

#[tokio::test]
async fn org_owner_with_workspace_is_fully_active() -> Result<()> {
    let record = verified(AccountType::Org);
    let org = OrgId::new();
    let source = StaticFactSource::default()
        .with_membership(
            record.id,
            OrgMembership {
                org_id: org,
                role: OrgRole::Owner,
                status: OrgMemberStatus::Active,
            },
        )
        .with_profile(
            org,
            OrgProfile {
                name: "Northwind".into(),
                image_url: None,
            },
        )
        .with_workspace(record.id, WorkspaceId::new());

    let decision = resolver(source).resolve(Some(&record)).await?;
    assert_eq!(decision.state, LifecycleState::OrgOwnerActive);
    assert!(decision.state.is_active());
    assert!(decision.is_allowed("/organization/settings"));
    assert!(decision.is_allowed("/workspaces/123/tasks"));
    assert!(!decision.is_allowed(paths::ONBOARDING));
    assert_eq!(decision.org_name.as_deref(), Some("Northwind"));
    Ok(())
}

#[tokio::test]
async fn invited_admin_is_a_pending_member() -> Result<()> {
    let record = verified(AccountType::Org);
    let source = StaticFactSource::default().with_membership(
        record.id,
        OrgMembership {
            org_id: OrgId::new(),
            role: OrgRole::Admin,
            status: OrgMemberStatus::Invited,
        },
    );
    let decision = resolver(source).resolve(Some(&record)).await?;
    assert_eq!(decision.state, LifecycleState::OrgMemberPending);
    assert!(decision.state.is_restricted_org_member());
    assert_eq!(decision.redirect_to, Some(paths::INVITATION));
    Ok(())
}

#[tokio::test]
async fn suspended_individual_keeps_billing_access_only() -> Result<()> {
    let record = verified(AccountType::Individual);
    let source = StaticFactSource::default()
        .with_workspace(record.id, WorkspaceId::new())
        .with_billing(BillingScope::Principal(record.id), BillingStatus::Suspended);

    let decision = resolver(source).resolve(Some(&record)).await?;
    assert_eq!(decision.state, LifecycleState::Suspended);
    assert!(!decision.is_allowed("/workspaces/abc"));
    assert!(decision.is_allowed("/billing"));
    assert_eq!(decision.redirect_to, Some(paths::BILLING));
    Ok(())
}

#[tokio::test]
async fn accepted_member_without_workspace_waits() -> Result<()> {
    let record = verified(AccountType::Org);
    let source = StaticFactSource::default().with_membership(
        record.id,
        OrgMembership {
            org_id: OrgId::new(),
            role: OrgRole::Member,
            status: OrgMemberStatus::Active,
        },
    );
    let decision = resolver(source).resolve(Some(&record)).await?;
    assert_eq!(decision.state, LifecycleState::OrgMemberNoWorkspace);
    assert!(decision.state.is_restricted_org_member());
    // Plain members cannot create the workspace themselves.
    assert!(!decision.is_allowed(paths::WORKSPACE_NEW));
    assert!(decision.is_allowed(paths::NO_WORKSPACE));
    Ok(())
}

#[tokio::test]
async fn decision_object_serializes_for_diagnostics() -> Result<()> {
    let record = verified(AccountType::Individual);
    let decision = resolver(StaticFactSource::default())
        .resolve(Some(&record))
        .await?;
    let json = serde_json::to_value(&decision)?;
    assert_eq!(json["state"], "INDIVIDUAL_ONBOARDING");
    assert_eq!(json["rule"], "individual_account");
    assert_eq!(json["has_workspace"], false);
    Ok(())
}

#[tokio::test]
async fn every_resolvable_state_is_actually_produced() -> Result<()> {
    // Each entry builds the facts that should land in one state; together
    // they witness that the resolver reaches the full enumeration except
    // the defensive fallback path.
    let mut seen = std::collections::HashSet::new();

    // Unauthenticated.
    seen.insert(resolver(StaticFactSource::default()).resolve(None).await?.state);

    // Principal-rule states.
    let mut record = PrincipalRecord::new(PrincipalId::new());
    record.must_reset_password = true;
    seen.insert(
        resolver(StaticFactSource::default())
            .resolve(Some(&record))
            .await?
            .state,
    );
    let mut record = PrincipalRecord::new(PrincipalId::new());
    record.email_verified = true;
    record.deleted = true;
    seen.insert(
        resolver(StaticFactSource::default())
            .resolve(Some(&record))
            .await?
            .state,
    );
    seen.insert(
        resolver(StaticFactSource::default())
            .resolve(Some(&PrincipalRecord::new(PrincipalId::new())))
            .await?
            .state,
    );
    let mut record = PrincipalRecord::new(PrincipalId::new());
    record.email_verified = true;
    seen.insert(
        resolver(StaticFactSource::default())
            .resolve(Some(&record))
            .await?
            .state,
    );

    // Individual states.
    let record = verified(AccountType::Individual);
    seen.insert(
        resolver(StaticFactSource::default())
            .resolve(Some(&record))
            .await?
            .state,
    );
    seen.insert(
        resolver(StaticFactSource::default().with_workspace(record.id, WorkspaceId::new()))
            .resolve(Some(&record))
            .await?
            .state,
    );

    // Suspended.
    seen.insert(
        resolver(
            StaticFactSource::default()
                .with_billing(BillingScope::Principal(record.id), BillingStatus::Suspended),
        )
        .resolve(Some(&record))
        .await?
        .state,
    );

    // Org states, per role and workspace presence.
    for (role, status) in [
        (OrgRole::Owner, OrgMemberStatus::Active),
        (OrgRole::Admin, OrgMemberStatus::Active),
        (OrgRole::Member, OrgMemberStatus::Active),
        (OrgRole::Admin, OrgMemberStatus::Invited),
    ] {
        for has_workspace in [false, true] {
            let record = verified(AccountType::Org);
            let mut source = StaticFactSource::default().with_membership(
                record.id,
                OrgMembership {
                    org_id: OrgId::new(),
                    role,
                    status,
                },
            );
            if has_workspace {
                source = source.with_workspace(record.id, WorkspaceId::new());
            }
            seen.insert(resolver(source).resolve(Some(&record)).await?.state);
        }
    }

    // Owner onboarding: org account, no membership.
    let record = verified(AccountType::Org);
    seen.insert(
        resolver(StaticFactSource::default())
            .resolve(Some(&record))
            .await?
            .state,
    );

    for &state in LifecycleState::all() {
        assert!(seen.contains(&state), "state {state} was never produced");
    }
    Ok(())
}

#[tokio::test]
async fn labels_and_predicates_agree_with_routing() -> Result<()> {
    // Sample a resolved decision and confirm the display surface and the
    // convenience predicates line up with its routing.
    let record = verified(AccountType::Org);
    let decision = resolver(StaticFactSource::default())
        .resolve(Some(&record))
        .await?;
    assert_eq!(decision.state, LifecycleState::OrgOwnerOnboarding);
    assert_eq!(decision.label(), "Creating organization");
    assert!(decision.state.requires_onboarding());
    assert!(!decision.state.is_active());
    assert_eq!(decision.redirect_to, Some(paths::ORG_NEW));
    Ok(())
}
