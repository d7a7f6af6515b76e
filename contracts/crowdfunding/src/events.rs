//! Typed event payloads published by the ledger.
//!
//! Every campaign event is published under `(topic, campaign_id)` so
//! observers can filter one campaign's history by its second topic.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::CampaignField;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub id: u64,
    pub creator: Address,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignUpdated {
    pub id: u64,
    pub creator: Address,
    pub field: CampaignField,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
    pub donated_at: u64,
}

/// `amount` is the full balance cleared from the ledger; `refunded`
/// reached the donor and `fee` was retained.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationWithdrawn {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
    pub refunded: i128,
    pub fee: i128,
    pub withdrawn_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveCollected {
    pub to: Address,
    pub amount: i128,
    pub collected_at: u64,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.id), event);
}

pub fn emit_campaign_updated(env: &Env, event: CampaignUpdated) {
    env.events()
        .publish((symbol_short!("updated"), event.id), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceived) {
    env.events()
        .publish((symbol_short!("donated"), event.campaign_id), event);
}

pub fn emit_donation_withdrawn(env: &Env, event: DonationWithdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), event.campaign_id), event);
}

pub fn emit_reserve_collected(env: &Env, event: ReserveCollected) {
    env.events().publish((symbol_short!("reserve"),), event);
}
