#![no_std]

//! Self-custody reward staking: participants stake the reward token itself
//! and may compound accrued rewards straight back into principal.

use common::{Ledger, PoolConfig, RewardPool, SelfCustody, StakingError, UserPosition};
use soroban_sdk::{contract, contractimpl, Address, Env};

type Engine = Ledger<SelfCustody>;

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct RewardStaking;

#[contractimpl]
impl RewardStaking {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `token`            – SAC address of the token staked and paid out.
    /// * `reward_per_block` – tokens emitted per ledger across all stakers.
    /// * `start_block`      – first rewarded ledger; must be in the future.
    /// * `reward_budget`    – total emission; fixes `end_block`.
    pub fn initialize(
        env: Env,
        token: Address,
        reward_per_block: i128,
        start_block: u32,
        reward_budget: i128,
    ) -> Result<(), StakingError> {
        Engine::initialize(
            &env,
            token.clone(),
            token,
            reward_per_block,
            start_block,
            reward_budget,
        )
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens, paying out any pending reward first.
    ///
    /// `amount == 0` only harvests.
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<i128, StakingError> {
        Engine::deposit(&env, &user, amount)
    }

    /// Withdraw `amount` staked tokens together with any pending reward.
    pub fn withdraw(env: Env, user: Address, amount: i128) -> Result<i128, StakingError> {
        Engine::withdraw(&env, &user, amount)
    }

    /// Return the whole stake and forfeit pending rewards.
    pub fn emergency_withdraw(env: Env, user: Address) -> Result<i128, StakingError> {
        Engine::emergency_withdraw(&env, &user)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Add pending rewards to the caller's stake instead of paying them out.
    pub fn compound_deposit(env: Env, user: Address) -> Result<i128, StakingError> {
        Engine::compound_deposit(&env, &user)
    }

    /// Pay out pending rewards.
    pub fn claim_rewards(env: Env, user: Address) -> Result<i128, StakingError> {
        Engine::claim_rewards(&env, &user)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return real-time pending rewards for `user` without mutating state.
    pub fn pending_rewards(env: Env, user: Address) -> Result<i128, StakingError> {
        Engine::pending_rewards(&env, &user)
    }

    pub fn user_info(env: Env, user: Address) -> UserPosition {
        Engine::user_info(&env, &user)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        Engine::total_staked(&env)
    }

    /// Emissions still scheduled from the current ledger to `end_block`.
    pub fn rewards_remaining(env: Env) -> Result<i128, StakingError> {
        Engine::rewards_remaining(&env)
    }

    /// Contract balance in excess of staked principal.
    pub fn available_rewards(env: Env) -> Result<i128, StakingError> {
        Engine::available_rewards(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, StakingError> {
        common::storage::get_config(&env)
    }

    /// Stored pool state, as of its last synchronization.
    pub fn get_pool(env: Env) -> Result<RewardPool, StakingError> {
        common::storage::get_pool(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        common::storage::is_initialized(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
