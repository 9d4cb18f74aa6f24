#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_per_block: i128,
    pub start_block: u32,
    pub end_block: u32,
}

/// Fired when a participant deposits (including zero-amount harvests).
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub user: Address,
    pub amount: i128,
    pub reward_paid: i128,
    pub new_total_staked: i128,
    pub block: u32,
}

/// Fired when a participant withdraws principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub user: Address,
    pub amount: i128,
    pub reward_paid: i128,
    pub new_total_staked: i128,
    pub block: u32,
}

/// Fired when pending rewards are paid out without a principal change.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub user: Address,
    pub amount: i128,
    pub block: u32,
}

/// Fired when pending rewards are folded into principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompoundedEvent {
    pub user: Address,
    pub amount: i128,
    pub new_stake: i128,
    pub block: u32,
}

/// Fired when principal is returned with pending rewards forfeited.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawnEvent {
    pub user: Address,
    pub amount: i128,
    pub forfeited: i128,
    pub block: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    stake_token: Address,
    reward_token: Address,
    reward_per_block: i128,
    start_block: u32,
    end_block: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            stake_token,
            reward_token,
            reward_per_block,
            start_block,
            end_block,
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    user: Address,
    amount: i128,
    reward_paid: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), user.clone()),
        DepositedEvent {
            user,
            amount,
            reward_paid,
            new_total_staked,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    user: Address,
    amount: i128,
    reward_paid: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), user.clone()),
        WithdrawnEvent {
            user,
            amount,
            reward_paid,
            new_total_staked,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), user.clone()),
        RewardClaimedEvent {
            user,
            amount,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_compounded(env: &Env, user: Address, amount: i128, new_stake: i128) {
    env.events().publish(
        (symbol_short!("COMPOUND"), user.clone()),
        CompoundedEvent {
            user,
            amount,
            new_stake,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_emergency_withdrawn(env: &Env, user: Address, amount: i128, forfeited: i128) {
    env.events().publish(
        (symbol_short!("EMERG_WD"), user.clone()),
        EmergencyWithdrawnEvent {
            user,
            amount,
            forfeited,
            block: env.ledger().sequence(),
        },
    );
}
