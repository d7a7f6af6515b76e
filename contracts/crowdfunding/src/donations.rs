//! Donation ledger: per-donor running balances and campaign raised totals.

use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::config;
use crate::events::{self, DonationReceived};
use crate::lifecycle;
use crate::registry;
use crate::storage;
use crate::treasury;
use crate::types::{Donation, MIN_DONATION};
use crate::Error;

pub fn donate(env: &Env, donor: &Address, campaign_id: u64, amount: i128) {
    donor.require_auth();
    let config = config::require_config(env);
    let mut state = registry::load_state(env, campaign_id);

    lifecycle::require_active(env, &state);
    if amount < MIN_DONATION {
        panic_with_error!(env, Error::BelowMinimumDonation);
    }

    treasury::receive_from(env, &config, donor, amount);

    state.raised_value = match state.raised_value.checked_add(amount) {
        Some(raised) => raised,
        None => panic_with_error!(env, Error::AmountOverflow),
    };
    storage::save_campaign_state(env, campaign_id, &state);

    let donated_at = lifecycle::now(env);
    let mut donation = storage::load_donation(env, campaign_id, donor).unwrap_or(Donation {
        campaign_id,
        donor: donor.clone(),
        amount: 0,
        last_donated_at: donated_at,
    });
    // Bounded by raised_value, which was checked above.
    donation.amount += amount;
    donation.last_donated_at = donated_at;
    storage::save_donation(env, &donation);

    events::emit_donation_received(
        env,
        DonationReceived {
            campaign_id,
            donor: donor.clone(),
            amount,
            donated_at,
        },
    );
    log!(env, "donation received", campaign_id, amount);
}

/// Recorded balance of `donor` on `campaign_id`; 0 when there is none.
pub fn balance_of(env: &Env, campaign_id: u64, donor: &Address) -> i128 {
    registry::load_state(env, campaign_id);
    storage::load_donation(env, campaign_id, donor)
        .map(|donation| donation.amount)
        .unwrap_or(0)
}
