//! The participant-facing ledger engine.
//!
//! [`Ledger`] is instantiated once per contract variant through an
//! [`AssetMode`] marker. Every mutating operation runs the same four steps:
//!
//! 1. synchronize the pool to the current block,
//! 2. compute the caller's pending reward against the synchronized pool,
//! 3. apply the principal change,
//! 4. re-base the caller's reward debt.
//!
//! All checks, including reward solvency, happen before the first storage
//! write, and token transfers come last (checks-effects-interactions), so a
//! failing call leaves the pool and the caller's position untouched.

use core::marker::PhantomData;

use soroban_sdk::{log, token, Address, Env};

use crate::accrual::{self, RewardPool, UserPosition, PRECISION};
use crate::errors::StakingError;
use crate::events;
use crate::storage::{self, PoolConfig};

// ── Variants ────────────────────────────────────────────────────────────────

/// Relationship between the staked asset and the reward asset.
pub trait AssetMode {
    /// `true` when deposits are made in the reward token itself.
    const SAME_ASSET: bool;
}

/// Staked asset and reward asset are the same token. Supports compounding.
pub struct SelfCustody;

impl AssetMode for SelfCustody {
    const SAME_ASSET: bool = true;
}

/// Staked asset (e.g. an LP token) differs from the reward asset.
pub struct DualAsset;

impl AssetMode for DualAsset {
    const SAME_ASSET: bool = false;
}

// ── Engine ──────────────────────────────────────────────────────────────────

pub struct Ledger<M: AssetMode>(PhantomData<M>);

impl<M: AssetMode> Ledger<M> {
    // ── Construction ────────────────────────────────────────────────────────

    /// Validate the deployment parameters and store the pool.
    ///
    /// `end_block = start_block + reward_budget / reward_per_block`. A budget
    /// whose scaled value `reward_budget × PRECISION` does not fit in `i128`
    /// is rejected as `InvalidAmount`.
    pub fn initialize(
        env: &Env,
        stake_token: Address,
        reward_token: Address,
        reward_per_block: i128,
        start_block: u32,
        reward_budget: i128,
    ) -> Result<(), StakingError> {
        if storage::is_initialized(env) {
            return Err(StakingError::AlreadyInitialized);
        }
        if !M::SAME_ASSET && stake_token == reward_token {
            return Err(StakingError::IdenticalAssets);
        }
        // The scaled budget bounds every accumulator step and the accumulator
        // itself, so synchronize cannot overflow for a stored pool.
        if reward_per_block <= 0
            || reward_budget < 0
            || reward_budget.checked_mul(PRECISION).is_none()
        {
            return Err(StakingError::InvalidAmount);
        }
        if start_block <= env.ledger().sequence() {
            return Err(StakingError::InvalidStartBlock);
        }

        let blocks = u32::try_from(reward_budget / reward_per_block)
            .map_err(|_| StakingError::ArithmeticOverflow)?;
        let end_block = start_block
            .checked_add(blocks)
            .ok_or(StakingError::ArithmeticOverflow)?;

        let config = PoolConfig {
            stake_token: stake_token.clone(),
            reward_token: reward_token.clone(),
            reward_per_block,
            start_block,
            end_block,
            reward_budget,
        };
        storage::init(
            env,
            &config,
            &RewardPool::new(reward_per_block, start_block, end_block),
        );

        events::publish_initialized(
            env,
            stake_token,
            reward_token,
            reward_per_block,
            start_block,
            end_block,
        );

        Ok(())
    }

    // ── Participant operations ──────────────────────────────────────────────

    /// Harvest pending rewards and stake `amount` more.
    ///
    /// A zero `amount` is a pure harvest. Returns the reward paid out.
    pub fn deposit(env: &Env, user: &Address, amount: i128) -> Result<i128, StakingError> {
        storage::require_initialized(env)?;
        user.require_auth();

        if amount < 0 {
            return Err(StakingError::InvalidAmount);
        }

        let config = storage::get_config(env)?;
        let mut pool = Self::synchronized_pool(env)?;
        let mut position = storage::get_position(env, user);

        let pending = accrual::compute_pending(env, &pool, &position)?;
        Self::ensure_solvent(env, &config, &pool, pending)?;

        position.amount = checked_add(position.amount, amount)?;
        pool.total_staked = checked_add(pool.total_staked, amount)?;
        position.reward_debt =
            accrual::reward_debt_for(env, position.amount, pool.acc_reward_per_share)?;

        storage::set_pool(env, &pool);
        storage::set_position(env, user, &position);

        let contract = env.current_contract_address();
        if pending > 0 {
            token::Client::new(env, &config.reward_token).transfer(&contract, user, &pending);
        }
        if amount > 0 {
            token::Client::new(env, &config.stake_token).transfer(user, &contract, &amount);
        }

        log!(env, "deposit", user.clone(), amount, pending);
        events::publish_deposited(env, user.clone(), amount, pending, pool.total_staked);

        Ok(pending)
    }

    /// Harvest pending rewards and return `amount` of principal.
    ///
    /// Returns the reward paid out.
    pub fn withdraw(env: &Env, user: &Address, amount: i128) -> Result<i128, StakingError> {
        storage::require_initialized(env)?;
        user.require_auth();

        if amount < 0 {
            return Err(StakingError::InvalidAmount);
        }

        let config = storage::get_config(env)?;
        let mut pool = Self::synchronized_pool(env)?;
        let mut position = storage::get_position(env, user);

        if amount > position.amount {
            return Err(StakingError::InsufficientBalance);
        }

        let pending = accrual::compute_pending(env, &pool, &position)?;
        Self::ensure_solvent(env, &config, &pool, pending)?;

        position.amount = checked_sub(position.amount, amount)?;
        pool.total_staked = checked_sub(pool.total_staked, amount)?;
        position.reward_debt =
            accrual::reward_debt_for(env, position.amount, pool.acc_reward_per_share)?;

        storage::set_pool(env, &pool);
        storage::set_position(env, user, &position);

        let contract = env.current_contract_address();
        if pending > 0 {
            token::Client::new(env, &config.reward_token).transfer(&contract, user, &pending);
        }
        if amount > 0 {
            token::Client::new(env, &config.stake_token).transfer(&contract, user, &amount);
        }

        log!(env, "withdraw", user.clone(), amount, pending);
        events::publish_withdrawn(env, user.clone(), amount, pending, pool.total_staked);

        Ok(pending)
    }

    /// Pay out pending rewards, leaving the principal where it is.
    pub fn claim_rewards(env: &Env, user: &Address) -> Result<i128, StakingError> {
        storage::require_initialized(env)?;
        user.require_auth();

        let config = storage::get_config(env)?;
        let pool = Self::synchronized_pool(env)?;
        let mut position = storage::get_position(env, user);

        let pending = accrual::compute_pending(env, &pool, &position)?;
        Self::ensure_solvent(env, &config, &pool, pending)?;

        position.reward_debt =
            accrual::reward_debt_for(env, position.amount, pool.acc_reward_per_share)?;

        storage::set_pool(env, &pool);
        storage::set_position(env, user, &position);

        if pending > 0 {
            token::Client::new(env, &config.reward_token).transfer(
                &env.current_contract_address(),
                user,
                &pending,
            );
        }

        events::publish_reward_claimed(env, user.clone(), pending);

        Ok(pending)
    }

    /// Fold pending rewards into the caller's principal.
    ///
    /// No tokens move: the reward is already held by the contract and simply
    /// changes from "reward budget" to "staked principal". Returns the amount
    /// compounded.
    pub fn compound_deposit(env: &Env, user: &Address) -> Result<i128, StakingError> {
        storage::require_initialized(env)?;
        if !M::SAME_ASSET {
            return Err(StakingError::CompoundUnsupported);
        }
        user.require_auth();

        let config = storage::get_config(env)?;
        let mut pool = Self::synchronized_pool(env)?;
        let mut position = storage::get_position(env, user);

        let pending = accrual::compute_pending(env, &pool, &position)?;
        Self::ensure_solvent(env, &config, &pool, pending)?;

        position.amount = checked_add(position.amount, pending)?;
        pool.total_staked = checked_add(pool.total_staked, pending)?;
        position.reward_debt =
            accrual::reward_debt_for(env, position.amount, pool.acc_reward_per_share)?;

        storage::set_pool(env, &pool);
        storage::set_position(env, user, &position);

        log!(env, "compound", user.clone(), pending);
        events::publish_compounded(env, user.clone(), pending, position.amount);

        Ok(pending)
    }

    /// Return the caller's whole principal and forfeit every pending reward.
    ///
    /// Never consults the reward balance, so it keeps working when the pool
    /// cannot pay rewards. A pool that fails to synchronize is left at its
    /// last good state and the exit still goes through. Returns the principal
    /// sent back.
    pub fn emergency_withdraw(env: &Env, user: &Address) -> Result<i128, StakingError> {
        storage::require_initialized(env)?;
        user.require_auth();

        let config = storage::get_config(env)?;
        let stored = storage::get_pool(env)?;
        let mut pool = match stored.synchronized(env.ledger().sequence()) {
            Ok(pool) => pool,
            Err(e) => {
                log!(env, "emergency withdraw without synchronize", user.clone(), e as u32);
                stored
            }
        };
        let position = storage::get_position(env, user);

        let amount = position.amount;
        let forfeited = accrual::saturating_pending(env, &pool, &position);
        if forfeited == i128::MAX {
            log!(env, "forfeited reward saturated", user.clone());
        }

        pool.total_staked = checked_sub(pool.total_staked, amount)?;

        storage::set_pool(env, &pool);
        storage::set_position(env, user, &UserPosition::default());

        if amount > 0 {
            token::Client::new(env, &config.stake_token).transfer(
                &env.current_contract_address(),
                user,
                &amount,
            );
        }

        log!(env, "emergency withdraw", user.clone(), amount, forfeited);
        events::publish_emergency_withdrawn(env, user.clone(), amount, forfeited);

        Ok(amount)
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Pending reward for `user` as of the current block.
    ///
    /// Synchronizes a copy of the pool, so the figure is exactly what the
    /// next mutating call in this block would pay.
    pub fn pending_rewards(env: &Env, user: &Address) -> Result<i128, StakingError> {
        let pool = storage::get_pool(env)?.synchronized(env.ledger().sequence())?;
        accrual::compute_pending(env, &pool, &storage::get_position(env, user))
    }

    pub fn user_info(env: &Env, user: &Address) -> UserPosition {
        storage::get_position(env, user)
    }

    pub fn total_staked(env: &Env) -> i128 {
        storage::get_pool(env)
            .map(|pool| pool.total_staked)
            .unwrap_or(0)
    }

    /// Emissions still scheduled between now and `end_block`.
    pub fn rewards_remaining(env: &Env) -> Result<i128, StakingError> {
        storage::get_pool(env)?.rewards_remaining(env.ledger().sequence())
    }

    /// Reward-token balance that can currently fund payouts.
    pub fn available_rewards(env: &Env) -> Result<i128, StakingError> {
        let config = storage::get_config(env)?;
        let pool = storage::get_pool(env)?;
        Ok(Self::reward_balance(env, &config, &pool))
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn synchronized_pool(env: &Env) -> Result<RewardPool, StakingError> {
        let mut pool = storage::get_pool(env)?;
        pool.synchronize(env.ledger().sequence())?;
        Ok(pool)
    }

    /// The self-custody pool holds principal and rewards in one balance; only
    /// the excess over `total_staked` is spendable as reward.
    fn reward_balance(env: &Env, config: &PoolConfig, pool: &RewardPool) -> i128 {
        let balance =
            token::Client::new(env, &config.reward_token).balance(&env.current_contract_address());
        if M::SAME_ASSET {
            balance.saturating_sub(pool.total_staked).max(0)
        } else {
            balance.max(0)
        }
    }

    /// Guard: `pool` must be the state before this call's principal change.
    fn ensure_solvent(
        env: &Env,
        config: &PoolConfig,
        pool: &RewardPool,
        pending: i128,
    ) -> Result<(), StakingError> {
        if pending > 0 && pending > Self::reward_balance(env, config, pool) {
            return Err(StakingError::InsufficientRewards);
        }
        Ok(())
    }
}

fn checked_add(a: i128, b: i128) -> Result<i128, StakingError> {
    a.checked_add(b).ok_or(StakingError::ArithmeticOverflow)
}

fn checked_sub(a: i128, b: i128) -> Result<i128, StakingError> {
    a.checked_sub(b).ok_or(StakingError::ArithmeticOverflow)
}
