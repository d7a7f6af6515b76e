//! # Types
//!
//! Shared data structures and protocol constants used across the ledger.
//!
//! ## Config / State split
//!
//! A `Campaign` is stored as two separate ledger entries:
//!
//! - [`CampaignConfig`]: written once at creation; never mutated.
//! - [`CampaignState`]: the window, the target and the raised total.
//!
//! The public API exposes the reconstructed [`Campaign`] struct.
//!
//! ## Lifecycle
//!
//! [`LifecycleState`] is never stored. It is derived from the campaign
//! window and the ledger timestamp on every call:
//!
//! ```text
//! NotStarted ──(now >= start)──► Active ──(now >= end)──► Ended
//! ```
//!
//! The start can only move before the campaign starts and the end only
//! before it ends, so an `Ended` campaign never becomes `Active` again.
//! There is no cancelled or paused state.

use soroban_sdk::{contracttype, Address, String, Vec};

// ── Protocol constants ───────────────────────────────────────────────

/// Base units per native unit (the native asset has 7 decimals).
pub const UNIT: i128 = 10_000_000;

/// Exact deposit a creator pays to open a campaign (0.5 units).
pub const CREATION_DEPOSIT: i128 = UNIT / 2;

/// Smallest amount accepted by a single donation call (0.25 units).
pub const MIN_DONATION: i128 = UNIT / 4;

/// Basis-point denominator.
pub const BASIS_POINTS: i128 = 10_000;

/// Share of a withdrawn balance returned to the donor (90%).
pub const REFUND_BPS: i128 = 9_000;

/// Maximum number of beneficiary slots on a campaign.
pub const MAX_BENEFICIARIES: u32 = 5;

/// Derived temporal state of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LifecycleState {
    /// `now < start_timestamp`.
    NotStarted,
    /// `start_timestamp <= now < end_timestamp`; donations accepted.
    Active,
    /// `now >= end_timestamp`.
    Ended,
}

/// Mutable campaign field named in `CampaignUpdated` events.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignField {
    StartTimestamp,
    EndTimestamp,
    TargetValue,
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub name: String,
    pub creator: Address,
    pub beneficiaries: Vec<Address>,
    pub deposit: i128,
    pub created_at: u64,
}

/// Mutable campaign state.
///
/// Donations and withdrawals only touch `raised_value`; the creator's
/// setters only touch the window and the target.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub target_value: i128,
    pub raised_value: i128,
}

/// Full on-chain representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from
/// the split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Display name, never empty.
    pub name: String,
    /// Address that paid the deposit; sole authority for field mutation.
    pub creator: Address,
    /// Informational beneficiary list, at most [`MAX_BENEFICIARIES`].
    pub beneficiaries: Vec<Address>,
    /// Creation deposit held by the ledger.
    pub deposit: i128,
    /// Ledger timestamp at creation.
    pub created_at: u64,
    /// First second at which donations are accepted.
    pub start_timestamp: u64,
    /// First second at which donations are refused again.
    pub end_timestamp: u64,
    /// Funding goal; donations may exceed it.
    pub target_value: i128,
    /// Sum of the currently recorded donations.
    pub raised_value: i128,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Campaign {
            id: config.id,
            name: config.name,
            creator: config.creator,
            beneficiaries: config.beneficiaries,
            deposit: config.deposit,
            created_at: config.created_at,
            start_timestamp: state.start_timestamp,
            end_timestamp: state.end_timestamp,
            target_value: state.target_value,
            raised_value: state.raised_value,
        }
    }
}

/// A donor's recorded contribution to one campaign.
///
/// `amount` is a running total: every donation adds to it and a
/// withdrawal clears it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
    pub last_donated_at: u64,
}

/// When donors may pull their recorded balance back out.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawalWindow {
    /// Whenever a balance exists.
    AnyTime,
    /// Only while the campaign is `Active`.
    WhileActive,
    /// Only once the campaign has `Ended`.
    AfterEnd,
}

/// Where the retained share of a withdrawal goes.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeRecipient {
    /// Kept by the contract and added to the ledger reserve.
    Ledger,
    /// Sent to the campaign creator.
    Creator,
}

/// Admin-tunable behaviour of the ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerPolicy {
    /// Refuse end-timestamp changes once the campaign has started.
    pub lock_end_after_start: bool,
    /// Refuse target changes once the campaign has started.
    pub lock_target_after_start: bool,
    pub withdrawal_window: WithdrawalWindow,
    pub fee_recipient: FeeRecipient,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        LedgerPolicy {
            lock_end_after_start: false,
            lock_target_after_start: false,
            withdrawal_window: WithdrawalWindow::AnyTime,
            fee_recipient: FeeRecipient::Ledger,
        }
    }
}

/// Contract-wide settings written by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Address allowed to change the policy and collect the reserve.
    pub admin: Address,
    /// Asset all deposits, donations and refunds are denominated in.
    pub token: Address,
}
