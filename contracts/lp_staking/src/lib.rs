#![no_std]

//! Dual-asset reward staking: participants stake an LP token and earn a
//! separate reward token. There is no compounding entry point since rewards
//! cannot be added to an LP balance.

use common::{DualAsset, Ledger, PoolConfig, RewardPool, StakingError, UserPosition};
use soroban_sdk::{contract, contractimpl, Address, Env};

type Engine = Ledger<DualAsset>;

#[contract]
pub struct LpStaking;

#[contractimpl]
impl LpStaking {
    /// Bootstrap the pool.
    ///
    /// * `reward_token`     – SAC address of the token paid out.
    /// * `lp_token`         – SAC address of the token staked; must differ.
    /// * `reward_per_block` – reward tokens emitted per ledger.
    /// * `start_block`      – first rewarded ledger; must be in the future.
    /// * `reward_budget`    – total emission; fixes `end_block`.
    pub fn initialize(
        env: Env,
        reward_token: Address,
        lp_token: Address,
        reward_per_block: i128,
        start_block: u32,
        reward_budget: i128,
    ) -> Result<(), StakingError> {
        Engine::initialize(
            &env,
            lp_token,
            reward_token,
            reward_per_block,
            start_block,
            reward_budget,
        )
    }

    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<i128, StakingError> {
        Engine::deposit(&env, &user, amount)
    }

    pub fn withdraw(env: Env, user: Address, amount: i128) -> Result<i128, StakingError> {
        Engine::withdraw(&env, &user, amount)
    }

    pub fn emergency_withdraw(env: Env, user: Address) -> Result<i128, StakingError> {
        Engine::emergency_withdraw(&env, &user)
    }

    pub fn claim_rewards(env: Env, user: Address) -> Result<i128, StakingError> {
        Engine::claim_rewards(&env, &user)
    }

    pub fn pending_rewards(env: Env, user: Address) -> Result<i128, StakingError> {
        Engine::pending_rewards(&env, &user)
    }

    pub fn user_info(env: Env, user: Address) -> UserPosition {
        Engine::user_info(&env, &user)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        Engine::total_staked(&env)
    }

    pub fn rewards_remaining(env: Env) -> Result<i128, StakingError> {
        Engine::rewards_remaining(&env)
    }

    /// Reward-token balance held by the contract.
    pub fn available_rewards(env: Env) -> Result<i128, StakingError> {
        Engine::available_rewards(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, StakingError> {
        common::storage::get_config(&env)
    }

    pub fn get_pool(env: Env) -> Result<RewardPool, StakingError> {
        common::storage::get_pool(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        common::storage::is_initialized(&env)
    }
}
