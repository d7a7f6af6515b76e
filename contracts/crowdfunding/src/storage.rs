//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type           | Description                          |
//! |-----------------|----------------|--------------------------------------|
//! | `Config`        | `LedgerConfig` | Admin and value-transfer asset       |
//! | `Policy`        | `LedgerPolicy` | Admin-tunable guards and fee routing |
//! | `CampaignCount` | `u64`          | Last assigned campaign id            |
//! | `Reserve`       | `i128`         | Deposits and retained fees           |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type             | Description                 |
//! |-------------------------|------------------|-----------------------------|
//! | `CampConfig(id)`        | `CampaignConfig` | Immutable campaign fields   |
//! | `CampState(id)`         | `CampaignState`  | Window, target, raised      |
//! | `Donation(id, donor)`   | `Donation`       | Donor's running balance     |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Loaders return `Option` so the calling engine decides which typed
//! error a missing entry maps to.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{CampaignConfig, CampaignState, Donation, LedgerConfig, LedgerPolicy};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Admin + token (Instance).
    Config,
    /// Ledger policy (Instance).
    Policy,
    /// Last assigned campaign id (Instance).
    CampaignCount,
    /// Deposits and ledger-retained fees (Instance).
    Reserve,
    /// Immutable campaign configuration keyed by ID (Persistent).
    CampConfig(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    CampState(u64),
    /// Donor balance keyed by campaign ID and donor (Persistent).
    Donation(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn load_config(env: &Env) -> Option<LedgerConfig> {
    let config = env.storage().instance().get(&DataKey::Config);
    if config.is_some() {
        bump_instance(env);
    }
    config
}

pub fn save_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Policy falls back to the default if none has been written.
pub fn load_policy(env: &Env) -> LedgerPolicy {
    env.storage()
        .instance()
        .get(&DataKey::Policy)
        .unwrap_or_default()
}

pub fn save_policy(env: &Env, policy: &LedgerPolicy) {
    env.storage().instance().set(&DataKey::Policy, policy);
    bump_instance(env);
}

/// Number of campaigns created so far (also the highest assigned id).
pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reads, increments, and stores the campaign counter.
/// Returns the ID for the *new* campaign, so the first campaign is 1.
pub fn next_campaign_id(env: &Env) -> u64 {
    let next = campaign_count(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &next);
    bump_instance(env);
    next
}

pub fn load_reserve(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Reserve).unwrap_or(0)
}

pub fn save_reserve(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Reserve, &amount);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and the initial state for a new campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    let config_key = DataKey::CampConfig(config.id);
    let state_key = DataKey::CampState(config.id);

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

pub fn load_campaign_config(env: &Env, id: u64) -> Option<CampaignConfig> {
    let key = DataKey::CampConfig(id);
    let config = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

pub fn load_campaign_state(env: &Env, id: u64) -> Option<CampaignState> {
    let key = DataKey::CampState(id);
    let state = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable campaign state.
pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

pub fn load_donation(env: &Env, campaign_id: u64, donor: &Address) -> Option<Donation> {
    let key = DataKey::Donation(campaign_id, donor.clone());
    let donation = env.storage().persistent().get(&key);
    if donation.is_some() {
        bump_persistent(env, &key);
    }
    donation
}

pub fn save_donation(env: &Env, donation: &Donation) {
    let key = DataKey::Donation(donation.campaign_id, donation.donor.clone());
    env.storage().persistent().set(&key, donation);
    bump_persistent(env, &key);
}

pub fn remove_donation(env: &Env, campaign_id: u64, donor: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Donation(campaign_id, donor.clone()));
}
