//! # Routing Table
//!
//! The compiled-in mapping from [`LifecycleState`] to routing consequences:
//! an optional redirect target plus allow/block pattern sets. The table is
//! process-wide constant data; [`routing_for`] is a total function over the
//! enumeration realized as an exhaustive match, so adding a state is a
//! compile error until its routing is authored.
//!
//! ## Authoring rules
//!
//! - Pre-auth and no-workspace states carry a blanket block with a short
//!   allow-list naming the few reachable surfaces.
//! - Fully active states carry no allow-list at all. Their reachability
//!   comes from the matcher's open default, which keeps the blocked
//!   onboarding surfaces effective under the allow-first ordering. An
//!   explicit `*` allow would make the block-list dead.
//! - Terminal states (`DELETED`, `MUST_RESET_PASSWORD`) allow nothing and
//!   block everything; callers force logout or a blocking overlay.

use serde::Serialize;

use gatehouse_core::LifecycleState;

/// Well-known path surfaces referenced by the routing table.
///
/// These are the platform's stable route prefixes. The matcher treats each
/// as covering its strict sub-paths as well.
pub mod paths {
    /// Sign-in surface; also the redirect target for unauthenticated and
    /// defensively handled states.
    pub const SIGN_IN: &str = "/sign-in";
    /// Account registration surface.
    pub const SIGN_UP: &str = "/sign-up";
    /// Password reset surface.
    pub const RESET_PASSWORD: &str = "/reset-password";
    /// Email verification prompt.
    pub const VERIFY_EMAIL: &str = "/verify-email";
    /// Account category chooser shown once after verification.
    pub const ACCOUNT_TYPE: &str = "/account-type";
    /// Individual onboarding flow.
    pub const ONBOARDING: &str = "/onboarding";
    /// First-run welcome tour.
    pub const WELCOME: &str = "/welcome";
    /// Organization creation flow.
    pub const ORG_NEW: &str = "/organization/new";
    /// Organization settings.
    pub const ORG_SETTINGS: &str = "/organization/settings";
    /// Organization member management.
    pub const ORG_MEMBERS: &str = "/organization/members";
    /// Pending-invitation surface.
    pub const INVITATION: &str = "/invitation";
    /// Holding surface for accepted members with no workspace yet.
    pub const NO_WORKSPACE: &str = "/no-workspace";
    /// Workspace creation flow.
    pub const WORKSPACE_NEW: &str = "/workspaces/new";
    /// All workspace content.
    pub const WORKSPACES: &str = "/workspaces/*";
    /// Account settings root (covers profile, notifications, security).
    pub const SETTINGS: &str = "/settings";
    /// Profile management only.
    pub const SETTINGS_PROFILE: &str = "/settings/profile";
    /// Billing management.
    pub const BILLING: &str = "/billing";
}

/// The routing consequences of a lifecycle state.
///
/// Entries are compiled-in constants; nothing is derived at runtime and
/// nothing is ever mutated. Cloning is a pointer copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutingEntry {
    /// Where the caller must send the principal when the current path is
    /// not reachable. `None` for fully active states.
    pub redirect_to: Option<&'static str>,
    /// Patterns reachable in this state. Checked before `blocked`.
    pub allowed: &'static [&'static str],
    /// Patterns unreachable in this state.
    pub blocked: &'static [&'static str],
}

impl RoutingEntry {
    /// The most restrictive entry: redirect to sign-in, allow nothing,
    /// block everything.
    ///
    /// This is the defensive default for any state the table does not
    /// recognize. The match in [`routing_for`] is exhaustive, so the only
    /// way to need it is a future variant added without routing; the
    /// compiler makes that impossible to miss, and this constant is what
    /// the new arm should start from.
    pub const fn restricted() -> Self {
        Self {
            redirect_to: Some(paths::SIGN_IN),
            allowed: &[],
            blocked: &["*"],
        }
    }
}

/// Routing consequences for every lifecycle state.
///
/// Total over the enumeration. The returned entry borrows only
/// compiled-in data and is safe to share across concurrent resolutions
/// without synchronization.
pub fn routing_for(state: LifecycleState) -> RoutingEntry {
    match state {
        // ─── Unauthenticated category ───────────────────────────────
        LifecycleState::Unauthenticated => RoutingEntry {
            redirect_to: Some(paths::SIGN_IN),
            allowed: &[paths::SIGN_IN, paths::SIGN_UP, paths::RESET_PASSWORD],
            blocked: &["*"],
        },
        LifecycleState::EmailUnverified => RoutingEntry {
            redirect_to: Some(paths::VERIFY_EMAIL),
            allowed: &[paths::VERIFY_EMAIL, paths::SETTINGS_PROFILE],
            blocked: &["*"],
        },
        LifecycleState::AccountTypePending => RoutingEntry {
            redirect_to: Some(paths::ACCOUNT_TYPE),
            allowed: &[paths::ACCOUNT_TYPE, paths::SETTINGS_PROFILE],
            blocked: &["*"],
        },

        // ─── Individual category ────────────────────────────────────
        LifecycleState::IndividualOnboarding => RoutingEntry {
            redirect_to: Some(paths::ONBOARDING),
            allowed: &[
                paths::ONBOARDING,
                paths::WORKSPACE_NEW,
                paths::SETTINGS,
                paths::BILLING,
            ],
            blocked: &["*"],
        },
        LifecycleState::IndividualActive => RoutingEntry {
            redirect_to: None,
            allowed: &[],
            blocked: &[
                paths::ONBOARDING,
                paths::WELCOME,
                paths::ACCOUNT_TYPE,
                paths::ORG_NEW,
            ],
        },

        // ─── Organization-owner category ────────────────────────────
        LifecycleState::OrgOwnerOnboarding => RoutingEntry {
            redirect_to: Some(paths::ORG_NEW),
            allowed: &[paths::ORG_NEW, paths::SETTINGS, paths::BILLING],
            blocked: &["*"],
        },
        LifecycleState::OrgOwnerNoWorkspace => RoutingEntry {
            redirect_to: Some(paths::WORKSPACE_NEW),
            allowed: &[
                paths::WORKSPACE_NEW,
                paths::ORG_SETTINGS,
                paths::ORG_MEMBERS,
                paths::SETTINGS,
                paths::BILLING,
            ],
            blocked: &["*"],
        },
        LifecycleState::OrgOwnerActive => RoutingEntry {
            redirect_to: None,
            allowed: &[],
            blocked: &[
                paths::ONBOARDING,
                paths::WELCOME,
                paths::ACCOUNT_TYPE,
                paths::ORG_NEW,
            ],
        },

        // ─── Organization-admin category ────────────────────────────
        LifecycleState::OrgAdminNoWorkspace => RoutingEntry {
            redirect_to: Some(paths::WORKSPACE_NEW),
            allowed: &[
                paths::WORKSPACE_NEW,
                paths::ORG_MEMBERS,
                paths::SETTINGS,
            ],
            blocked: &["*"],
        },
        LifecycleState::OrgAdminActive => RoutingEntry {
            redirect_to: None,
            allowed: &[],
            blocked: &[
                paths::ONBOARDING,
                paths::WELCOME,
                paths::ACCOUNT_TYPE,
                paths::ORG_NEW,
            ],
        },

        // ─── Organization-member category ───────────────────────────
        LifecycleState::OrgMemberPending => RoutingEntry {
            redirect_to: Some(paths::INVITATION),
            allowed: &[paths::INVITATION, paths::SETTINGS_PROFILE],
            blocked: &["*"],
        },
        LifecycleState::OrgMemberNoWorkspace => RoutingEntry {
            redirect_to: Some(paths::NO_WORKSPACE),
            allowed: &[paths::NO_WORKSPACE, paths::SETTINGS],
            blocked: &["*"],
        },
        LifecycleState::OrgMemberActive => RoutingEntry {
            redirect_to: None,
            allowed: &[],
            blocked: &[
                paths::ONBOARDING,
                paths::WELCOME,
                paths::ACCOUNT_TYPE,
                paths::ORG_NEW,
            ],
        },

        // ─── Special / terminal category ────────────────────────────
        LifecycleState::Suspended => RoutingEntry {
            redirect_to: Some(paths::BILLING),
            allowed: &[paths::BILLING, paths::SETTINGS],
            blocked: &["*"],
        },
        LifecycleState::Deleted => RoutingEntry::restricted(),
        LifecycleState::MustResetPassword => RoutingEntry {
            redirect_to: Some(paths::RESET_PASSWORD),
            allowed: &[],
            blocked: &["*"],
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
