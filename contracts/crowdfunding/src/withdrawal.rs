//! Withdrawal engine.
//!
//! A withdrawal always clears the donor's whole recorded balance on a
//! campaign. The donor gets [`REFUND_BPS`] of it back; the rest is
//! retained and routed per [`FeeRecipient`].
//!
//! Ordering is fixed: checks, then every storage write (balance removed,
//! raised total reduced, reserve credited), then the outbound transfers.
//! A transfer that calls back into the ledger therefore finds no balance
//! left to withdraw.

use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::config;
use crate::events::{self, DonationWithdrawn};
use crate::lifecycle;
use crate::registry;
use crate::storage;
use crate::treasury;
use crate::types::{FeeRecipient, BASIS_POINTS, REFUND_BPS};
use crate::Error;

/// Split a withdrawn balance into `(refund, fee)`.
///
/// The refund rounds down, so the fee absorbs any remainder and
/// `refund + fee == amount` always holds.
pub fn split(amount: i128) -> (i128, i128) {
    let refund = amount * REFUND_BPS / BASIS_POINTS;
    (refund, amount - refund)
}

/// Returns the amount refunded to `donor`.
pub fn withdraw(env: &Env, donor: &Address, campaign_id: u64) -> i128 {
    donor.require_auth();
    let config = config::require_config(env);
    let campaign = registry::load_config(env, campaign_id);
    let mut state = registry::load_state(env, campaign_id);

    let donation = match storage::load_donation(env, campaign_id, donor) {
        Some(donation) if donation.amount > 0 => donation,
        _ => panic_with_error!(env, Error::NoDonationToWithdraw),
    };
    let policy = storage::load_policy(env);
    lifecycle::require_withdrawal_window(env, &state, policy.withdrawal_window);

    let amount = donation.amount;
    let (refund, fee) = split(amount);

    // Effects.
    state.raised_value -= amount;
    storage::save_campaign_state(env, campaign_id, &state);
    storage::remove_donation(env, campaign_id, donor);
    if policy.fee_recipient == FeeRecipient::Ledger {
        treasury::credit_reserve(env, fee);
    }

    events::emit_donation_withdrawn(
        env,
        DonationWithdrawn {
            campaign_id,
            donor: donor.clone(),
            amount,
            refunded: refund,
            fee,
            withdrawn_at: lifecycle::now(env),
        },
    );
    log!(env, "donation withdrawn", campaign_id, amount, refund);

    // Interactions.
    treasury::send_to(env, &config, donor, refund);
    if policy.fee_recipient == FeeRecipient::Creator {
        treasury::send_to(env, &config, &campaign.creator, fee);
    }

    refund
}
