//! Contract bootstrap and admin-tunable policy.
//!
//! The ledger is useless until `init` names the asset value moves in, so
//! every other entry point goes through [`require_config`] first.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage;
use crate::types::{LedgerConfig, LedgerPolicy};
use crate::Error;

/// Store the admin and the value-transfer asset, and seed the default policy.
pub fn init(env: &Env, admin: &Address, token: &Address) {
    if storage::has_config(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    storage::save_config(
        env,
        &LedgerConfig {
            admin: admin.clone(),
            token: token.clone(),
        },
    );
    storage::save_policy(env, &LedgerPolicy::default());
}

pub fn require_config(env: &Env) -> LedgerConfig {
    match storage::load_config(env) {
        Some(config) => config,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

/// Authenticate `caller` and check it is the configured admin.
pub fn require_admin(env: &Env, caller: &Address) -> LedgerConfig {
    caller.require_auth();
    let config = require_config(env);
    if *caller != config.admin {
        panic_with_error!(env, Error::NotAuthorized);
    }
    config
}

pub fn set_policy(env: &Env, caller: &Address, policy: &LedgerPolicy) {
    require_admin(env, caller);
    storage::save_policy(env, policy);
}

pub fn policy(env: &Env) -> LedgerPolicy {
    require_config(env);
    storage::load_policy(env)
}
