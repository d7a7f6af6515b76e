//! Value transfer and the ledger reserve.
//!
//! All value moves through the configured token contract. An outbound
//! transfer calls into another contract, so engines that send value must
//! finish their own storage writes before calling [`send_to`].

use soroban_sdk::{log, panic_with_error, token, Address, Env};

use crate::config;
use crate::events::{self, ReserveCollected};
use crate::lifecycle;
use crate::storage;
use crate::types::LedgerConfig;
use crate::Error;

/// Pull `amount` from `from` into the contract.
pub fn receive_from(env: &Env, config: &LedgerConfig, from: &Address, amount: i128) {
    let token_client = token::Client::new(env, &config.token);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Send `amount` from the contract to `to`. Zero amounts are skipped.
pub fn send_to(env: &Env, config: &LedgerConfig, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::Client::new(env, &config.token);
    token_client.transfer(&env.current_contract_address(), to, &amount);
}

pub fn credit_reserve(env: &Env, amount: i128) {
    match storage::load_reserve(env).checked_add(amount) {
        Some(reserve) => storage::save_reserve(env, reserve),
        None => panic_with_error!(env, Error::AmountOverflow),
    }
}

pub fn reserve(env: &Env) -> i128 {
    storage::load_reserve(env)
}

/// Sweep the whole reserve to `to`. Returns the amount sent.
pub fn collect_reserve(env: &Env, admin: &Address, to: &Address) -> i128 {
    let config = config::require_admin(env, admin);
    let amount = storage::load_reserve(env);

    storage::save_reserve(env, 0);
    events::emit_reserve_collected(
        env,
        ReserveCollected {
            to: to.clone(),
            amount,
            collected_at: lifecycle::now(env),
        },
    );
    log!(env, "reserve collected", amount);

    send_to(env, &config, to, amount);
    amount
}
