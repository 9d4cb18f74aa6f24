use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::accrual::{RewardPool, UserPosition};
use crate::errors::StakingError;

// ── Storage keys ────────────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const CONFIG: Symbol = symbol_short!("CONFIG");
const POOL: Symbol = symbol_short!("POOL");

// Per-user persistent storage uses tuple keys: (prefix, user_address)
const USER_POSITION: Symbol = symbol_short!("POS");

const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS;

// ── Configuration ───────────────────────────────────────────────────────────

/// Deployment parameters, fixed at `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_per_block: i128,
    pub start_block: u32,
    pub end_block: u32,
    pub reward_budget: i128,
}

// ── Instance storage ────────────────────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn require_initialized(env: &Env) -> Result<(), StakingError> {
    if !is_initialized(env) {
        return Err(StakingError::NotInitialized);
    }
    Ok(())
}

pub fn init(env: &Env, config: &PoolConfig, pool: &RewardPool) {
    env.storage().instance().set(&INITIALIZED, &true);
    env.storage().instance().set(&CONFIG, config);
    env.storage().instance().set(&POOL, pool);
    bump_instance(env);
}

pub fn get_config(env: &Env) -> Result<PoolConfig, StakingError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(StakingError::NotInitialized)
}

pub fn get_pool(env: &Env) -> Result<RewardPool, StakingError> {
    env.storage()
        .instance()
        .get(&POOL)
        .ok_or(StakingError::NotInitialized)
}

pub fn set_pool(env: &Env, pool: &RewardPool) {
    env.storage().instance().set(&POOL, pool);
    bump_instance(env);
}

// ── Per-user positions ──────────────────────────────────────────────────────

fn position_key(user: &Address) -> (Symbol, Address) {
    (USER_POSITION, user.clone())
}

/// The stored position for `user`, or an empty one if they never deposited.
pub fn get_position(env: &Env, user: &Address) -> UserPosition {
    let key = position_key(user);
    let position: Option<UserPosition> = env.storage().persistent().get(&key);
    match position {
        Some(position) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            position
        }
        None => UserPosition::default(),
    }
}

/// Zeroed positions are written back rather than removed.
pub fn set_position(env: &Env, user: &Address, position: &UserPosition) {
    let key = position_key(user);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
