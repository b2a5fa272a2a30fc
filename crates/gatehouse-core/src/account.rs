//! # Account, Role, Membership and Billing Enums
//!
//! Closed enumerations describing a principal's account category, their
//! role and membership status within an organization, and the billing
//! standing of the paying party. Serialized names are the canonical
//! SCREAMING_SNAKE_CASE forms used across the platform.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AccountType
// ---------------------------------------------------------------------------

/// The account category a principal chose during sign-up.
///
/// A principal that has not yet chosen a category carries
/// `Option::<AccountType>::None`; there is no "unknown" variant by design,
/// so an out-of-range category is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// A standalone personal account billed against the principal.
    Individual,
    /// An organization account billed against the organization.
    Org,
}

impl AccountType {
    /// The canonical string name of this account type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Org => "ORG",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OrgRole
// ---------------------------------------------------------------------------

/// A principal's role within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrgRole {
    /// The organization owner. Exactly one per organization.
    Owner,
    /// An administrator with organization-wide management rights.
    Admin,
    /// A moderator with elevated but not administrative rights.
    Moderator,
    /// A regular member.
    Member,
}

impl OrgRole {
    /// The canonical string name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::Moderator => "MODERATOR",
            Self::Member => "MEMBER",
        }
    }

    /// Whether this role carries organization administration surfaces.
    /// Admins and moderators share the same routing treatment.
    pub fn is_admin_tier(&self) -> bool {
        matches!(self, Self::Admin | Self::Moderator)
    }
}

impl std::fmt::Display for OrgRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OrgMemberStatus
// ---------------------------------------------------------------------------

/// The acceptance status of an organization membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrgMemberStatus {
    /// Invitation sent, not yet accepted. The membership confers no access.
    Invited,
    /// Membership accepted and in good standing.
    Active,
}

impl OrgMemberStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invited => "INVITED",
            Self::Active => "ACTIVE",
        }
    }

    /// Whether the membership is still awaiting acceptance.
    pub fn is_invited(&self) -> bool {
        matches!(self, Self::Invited)
    }
}

impl std::fmt::Display for OrgMemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BillingStatus
// ---------------------------------------------------------------------------

/// The billing standing of the paying party (organization or principal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingStatus {
    /// Billing is current.
    Active,
    /// Payment is overdue but access has not been revoked yet.
    PastDue,
    /// Access has been revoked for non-payment or by operator action.
    Suspended,
}

impl BillingStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::PastDue => "PAST_DUE",
            Self::Suspended => "SUSPENDED",
        }
    }

    /// Whether this standing revokes access.
    ///
    /// `PastDue` deliberately does not: dunning keeps the account usable
    /// until the billing system escalates it to `Suspended`.
    pub fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended)
    }
}

impl std::fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
