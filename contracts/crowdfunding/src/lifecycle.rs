//! Lifecycle gate.
//!
//! A campaign's state is a pure function of its window and the ledger
//! close time. Nothing here writes storage; callers re-derive the state on
//! every invocation. Ledger time is only trusted to whole seconds, so all
//! comparisons are plain integer comparisons against the stored bounds.

use soroban_sdk::{panic_with_error, Env};

use crate::types::{CampaignState, LifecycleState, WithdrawalWindow};
use crate::Error;

/// Current ledger close time in seconds.
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

pub fn state_at(start_timestamp: u64, end_timestamp: u64, now: u64) -> LifecycleState {
    if now < start_timestamp {
        LifecycleState::NotStarted
    } else if now < end_timestamp {
        LifecycleState::Active
    } else {
        LifecycleState::Ended
    }
}

pub fn current_state(env: &Env, state: &CampaignState) -> LifecycleState {
    state_at(state.start_timestamp, state.end_timestamp, now(env))
}

/// Evaluated against the stored start, before any mutation is applied.
pub fn require_not_started(env: &Env, state: &CampaignState) {
    if current_state(env, state) != LifecycleState::NotStarted {
        panic_with_error!(env, Error::AlreadyStarted);
    }
}

/// An `Ended` campaign stays ended whatever its window is moved to.
pub fn require_not_ended(env: &Env, state: &CampaignState) {
    if current_state(env, state) == LifecycleState::Ended {
        panic_with_error!(env, Error::CampaignEnded);
    }
}

pub fn require_active(env: &Env, state: &CampaignState) {
    match current_state(env, state) {
        LifecycleState::Active => {}
        LifecycleState::NotStarted => panic_with_error!(env, Error::NotStartedYet),
        LifecycleState::Ended => panic_with_error!(env, Error::CampaignEnded),
    }
}

pub fn require_withdrawal_window(env: &Env, state: &CampaignState, window: WithdrawalWindow) {
    let open = match window {
        WithdrawalWindow::AnyTime => true,
        WithdrawalWindow::WhileActive => current_state(env, state) == LifecycleState::Active,
        WithdrawalWindow::AfterEnd => current_state(env, state) == LifecycleState::Ended,
    };
    if !open {
        panic_with_error!(env, Error::WithdrawalNotAllowed);
    }
}
