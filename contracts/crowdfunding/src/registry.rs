//! Campaign registry: creation, lookup, and creator-gated field mutation.

use soroban_sdk::{log, panic_with_error, Address, Env, String, Vec};

use crate::config;
use crate::events::{self, CampaignCreated, CampaignUpdated};
use crate::lifecycle;
use crate::storage;
use crate::treasury;
use crate::types::{
    Campaign, CampaignConfig, CampaignField, CampaignState, CREATION_DEPOSIT, MAX_BENEFICIARIES,
};
use crate::Error;

#[allow(clippy::too_many_arguments)]
pub fn create_campaign(
    env: &Env,
    creator: &Address,
    name: String,
    start_timestamp: u64,
    end_timestamp: u64,
    target_value: i128,
    beneficiaries: Vec<Address>,
    deposit: i128,
) -> u64 {
    creator.require_auth();
    let config = config::require_config(env);

    if deposit != CREATION_DEPOSIT {
        panic_with_error!(env, Error::InvalidDeposit);
    }
    if name.is_empty() {
        panic_with_error!(env, Error::InvalidName);
    }
    if start_timestamp >= end_timestamp {
        panic_with_error!(env, Error::InvalidTimeWindow);
    }
    if target_value <= 0 {
        panic_with_error!(env, Error::InvalidTarget);
    }
    if beneficiaries.len() > MAX_BENEFICIARIES {
        panic_with_error!(env, Error::TooManyBeneficiaries);
    }

    treasury::receive_from(env, &config, creator, deposit);
    treasury::credit_reserve(env, deposit);

    let id = storage::next_campaign_id(env);
    let created_at = lifecycle::now(env);

    let campaign_config = CampaignConfig {
        id,
        name,
        creator: creator.clone(),
        beneficiaries,
        deposit,
        created_at,
    };
    let state = CampaignState {
        start_timestamp,
        end_timestamp,
        target_value,
        raised_value: 0,
    };
    storage::save_campaign(env, &campaign_config, &state);

    events::emit_campaign_created(
        env,
        CampaignCreated {
            id,
            creator: creator.clone(),
            created_at,
        },
    );
    log!(env, "campaign created", id, creator.clone());

    id
}

pub fn load_config(env: &Env, id: u64) -> CampaignConfig {
    match storage::load_campaign_config(env, id) {
        Some(config) => config,
        None => panic_with_error!(env, Error::CampaignNotFound),
    }
}

pub fn load_state(env: &Env, id: u64) -> CampaignState {
    match storage::load_campaign_state(env, id) {
        Some(state) => state,
        None => panic_with_error!(env, Error::CampaignNotFound),
    }
}

pub fn load_campaign(env: &Env, id: u64) -> Campaign {
    Campaign::from_parts(load_config(env, id), load_state(env, id))
}

/// The single ownership guard shared by every field setter.
pub fn require_creator(env: &Env, campaign: &CampaignConfig, caller: &Address) {
    if *caller != campaign.creator {
        panic_with_error!(env, Error::NotOwner);
    }
}

pub fn set_start_timestamp(env: &Env, caller: &Address, id: u64, new_start: u64) {
    caller.require_auth();
    config::require_config(env);
    let campaign = load_config(env, id);
    let mut state = load_state(env, id);
    require_creator(env, &campaign, caller);

    lifecycle::require_not_started(env, &state);
    if new_start >= state.end_timestamp {
        panic_with_error!(env, Error::InvalidTimeWindow);
    }

    state.start_timestamp = new_start;
    storage::save_campaign_state(env, id, &state);
    emit_updated(env, &campaign, CampaignField::StartTimestamp);
}

pub fn set_end_timestamp(env: &Env, caller: &Address, id: u64, new_end: u64) {
    caller.require_auth();
    config::require_config(env);
    let campaign = load_config(env, id);
    let mut state = load_state(env, id);
    require_creator(env, &campaign, caller);

    lifecycle::require_not_ended(env, &state);
    if storage::load_policy(env).lock_end_after_start {
        lifecycle::require_not_started(env, &state);
    }
    if state.start_timestamp >= new_end {
        panic_with_error!(env, Error::InvalidTimeWindow);
    }

    state.end_timestamp = new_end;
    storage::save_campaign_state(env, id, &state);
    emit_updated(env, &campaign, CampaignField::EndTimestamp);
}

pub fn set_target_value(env: &Env, caller: &Address, id: u64, new_target: i128) {
    caller.require_auth();
    config::require_config(env);
    let campaign = load_config(env, id);
    let mut state = load_state(env, id);
    require_creator(env, &campaign, caller);

    if storage::load_policy(env).lock_target_after_start {
        lifecycle::require_not_started(env, &state);
    }
    if new_target <= 0 {
        panic_with_error!(env, Error::InvalidTarget);
    }

    state.target_value = new_target;
    storage::save_campaign_state(env, id, &state);
    emit_updated(env, &campaign, CampaignField::TargetValue);
}

pub fn target_and_raised(env: &Env, id: u64) -> (i128, i128) {
    let state = load_state(env, id);
    (state.target_value, state.raised_value)
}

fn emit_updated(env: &Env, campaign: &CampaignConfig, field: CampaignField) {
    events::emit_campaign_updated(
        env,
        CampaignUpdated {
            id: campaign.id,
            creator: campaign.creator.clone(),
            field,
            updated_at: lifecycle::now(env),
        },
    );
}
