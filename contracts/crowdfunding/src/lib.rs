//! # Crowdfunding Campaign Ledger
//!
//! A single Soroban contract, `CrowdFunding`, that opens time-windowed
//! campaigns against a creator deposit, accepts donations while a campaign
//! is active, and lets donors withdraw their recorded balance minus a
//! retained fee.
//!
//! | Phase      | Entry Point(s)                                                      |
//! |------------|---------------------------------------------------------------------|
//! | Bootstrap  | [`CrowdFunding::init`], `set_policy`                                |
//! | Campaigns  | `create_campaign`, `set_campaign_start_timestamp`, `set_campaign_end_timestamp`, `set_campaign_target_value` |
//! | Funding    | `donate_to_campaign`                                                |
//! | Withdrawal | `withdraw_donation`                                                 |
//! | Reserve    | `collect_reserve`, `get_reserve`                                    |
//! | Queries    | `get_target_and_raised_values`, `get_campaign`, `get_donation`, ... |
//!
//! ## Architecture
//!
//! This file contains **only** the public entry points. Campaign records
//! live in [`registry`], timing rules in [`lifecycle`], balances in
//! [`donations`] and [`withdrawal`], token movement in [`treasury`], and
//! all storage access in [`storage`].
//!
//! Every entry point is one atomic invocation: any `Error` raised along the
//! way rolls back every storage write and token transfer made before it.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

mod config;
mod donations;
pub mod events;
mod lifecycle;
mod registry;
mod storage;
mod treasury;
mod types;
mod withdrawal;

#[cfg(test)]
mod test_donations;

pub use types::{
    Campaign, CampaignField, FeeRecipient, LedgerPolicy, LifecycleState, WithdrawalWindow,
    CREATION_DEPOSIT, MAX_BENEFICIARIES, MIN_DONATION, REFUND_BPS, UNIT,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidDeposit        = 1,
    NotOwner              = 2,
    AlreadyStarted        = 3,
    CampaignNotFound      = 4,
    NotStartedYet         = 5,
    CampaignEnded         = 6,
    BelowMinimumDonation  = 7,
    NoDonationToWithdraw  = 8,
    InvalidName           = 9,
    InvalidTimeWindow     = 10,
    InvalidTarget         = 11,
    TooManyBeneficiaries  = 12,
    WithdrawalNotAllowed  = 13,
    AmountOverflow        = 14,
    AlreadyInitialized    = 15,
    NotInitialized        = 16,
    NotAuthorized         = 17,
}

#[contract]
pub struct CrowdFunding;

#[contractimpl]
impl CrowdFunding {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the ledger.
    ///
    /// Must be called exactly once after deployment. `token` is the asset
    /// every deposit, donation and refund moves in (the native asset's
    /// Stellar Asset Contract in production). Seeds the default
    /// [`LedgerPolicy`].
    pub fn init(env: Env, admin: Address, token: Address) {
        admin.require_auth();
        config::init(&env, &admin, &token);
    }

    /// Replace the ledger policy. `admin` must be the configured admin.
    pub fn set_policy(env: Env, admin: Address, policy: LedgerPolicy) {
        config::set_policy(&env, &admin, &policy);
    }

    pub fn get_policy(env: Env) -> LedgerPolicy {
        config::policy(&env)
    }

    pub fn get_token(env: Env) -> Address {
        config::require_config(&env).token
    }

    // ─────────────────────────────────────────────────────────
    // Campaign registry
    // ─────────────────────────────────────────────────────────

    /// Open a new campaign and return its id (the first campaign is 1).
    ///
    /// `deposit` must be exactly [`CREATION_DEPOSIT`]; it is pulled from
    /// `creator` and held by the ledger. `beneficiaries` is informational
    /// and holds at most [`MAX_BENEFICIARIES`] addresses.
    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        start_timestamp: u64,
        end_timestamp: u64,
        target_value: i128,
        beneficiaries: Vec<Address>,
        deposit: i128,
    ) -> u64 {
        registry::create_campaign(
            &env,
            &creator,
            name,
            start_timestamp,
            end_timestamp,
            target_value,
            beneficiaries,
            deposit,
        )
    }

    /// Move the start of the campaign window. Only the creator, and only
    /// while the campaign has not started yet.
    pub fn set_campaign_start_timestamp(env: Env, caller: Address, id: u64, start_timestamp: u64) {
        registry::set_start_timestamp(&env, &caller, id, start_timestamp);
    }

    /// Move the end of the campaign window. Only the creator; locked after
    /// the start when the policy says so.
    pub fn set_campaign_end_timestamp(env: Env, caller: Address, id: u64, end_timestamp: u64) {
        registry::set_end_timestamp(&env, &caller, id, end_timestamp);
    }

    /// Change the funding goal. Only the creator; locked after the start
    /// when the policy says so.
    pub fn set_campaign_target_value(env: Env, caller: Address, id: u64, target_value: i128) {
        registry::set_target_value(&env, &caller, id, target_value);
    }

    /// `(target_value, raised_value)` of a campaign.
    pub fn get_target_and_raised_values(env: Env, id: u64) -> (i128, i128) {
        registry::target_and_raised(&env, id)
    }

    pub fn get_campaign(env: Env, id: u64) -> Campaign {
        registry::load_campaign(&env, id)
    }

    pub fn get_lifecycle_state(env: Env, id: u64) -> LifecycleState {
        let state = registry::load_state(&env, id);
        lifecycle::current_state(&env, &state)
    }

    pub fn campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Donations and withdrawals
    // ─────────────────────────────────────────────────────────

    /// Donate `amount` to an active campaign. At least [`MIN_DONATION`].
    pub fn donate_to_campaign(env: Env, donor: Address, id: u64, amount: i128) {
        donations::donate(&env, &donor, id, amount);
    }

    pub fn get_donation(env: Env, id: u64, donor: Address) -> i128 {
        donations::balance_of(&env, id, &donor)
    }

    /// Withdraw the caller's whole recorded balance on a campaign.
    /// Returns the amount refunded ([`REFUND_BPS`] of the balance).
    pub fn withdraw_donation(env: Env, donor: Address, id: u64) -> i128 {
        withdrawal::withdraw(&env, &donor, id)
    }

    // ─────────────────────────────────────────────────────────
    // Reserve
    // ─────────────────────────────────────────────────────────

    /// Creation deposits plus fees retained by the ledger.
    pub fn get_reserve(env: Env) -> i128 {
        treasury::reserve(&env)
    }

    /// Send the whole reserve to `to`. `admin` must be the configured admin.
    pub fn collect_reserve(env: Env, admin: Address, to: Address) -> i128 {
        treasury::collect_reserve(&env, &admin, &to)
    }
}
