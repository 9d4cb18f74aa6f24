use soroban_sdk::{contracttype, Env, I256};

use crate::errors::StakingError;

/// Fixed-point scaling factor for `acc_reward_per_share`.
///
/// 10^12 keeps twelve decimal places of per-share precision. A pool only
/// accepts a budget for which `reward_budget × PRECISION` fits in `i128`,
/// which also bounds `acc_reward_per_share`. The product
/// `amount × acc_reward_per_share` can still exceed `i128` (one unit staked
/// alone drives the accumulator up by `reward_per_block × PRECISION` per
/// block), so it is taken in 256 bits.
pub const PRECISION: i128 = 1_000_000_000_000;

// ── State ───────────────────────────────────────────────────────────────────

/// Global accrual state of the single reward pool a deployment manages.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPool {
    /// Sum of every `UserPosition::amount`.
    pub total_staked: i128,
    /// Cumulative reward per staked unit, scaled by [`PRECISION`].
    pub acc_reward_per_share: i128,
    /// Block up to which `acc_reward_per_share` has been advanced.
    pub last_reward_block: u32,
    pub reward_per_block: i128,
    /// First block (inclusive) of the emission window.
    pub start_block: u32,
    /// Last block (exclusive) of the emission window.
    pub end_block: u32,
}

/// A participant's stake and reward-debt snapshot.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserPosition {
    pub amount: i128,
    /// `amount × acc_reward_per_share / PRECISION` at the last re-base.
    pub reward_debt: i128,
}

// ── Core reward engine ──────────────────────────────────────────────────────

impl RewardPool {
    pub fn new(reward_per_block: i128, start_block: u32, end_block: u32) -> Self {
        Self {
            total_staked: 0,
            acc_reward_per_share: 0,
            last_reward_block: start_block,
            reward_per_block,
            start_block,
            end_block,
        }
    }

    /// The part of `[last_reward_block, current_block)` that lies inside the
    /// emission window `[start_block, end_block)`, or `None` when they do not
    /// overlap.
    pub fn effective_window(&self, current_block: u32) -> Option<(u32, u32)> {
        let from = self.last_reward_block.max(self.start_block);
        let to = current_block.min(self.end_block);
        if to > from {
            Some((from, to))
        } else {
            None
        }
    }

    /// Advance the accumulator to `current_block`.
    ///
    /// ```text
    /// emitted = reward_per_block × |effective window|
    /// acc_reward_per_share += emitted × PRECISION / total_staked
    /// ```
    ///
    /// Blocks elapsed while nothing is staked are skipped, not carried over:
    /// their emission is forfeited. Calling this twice for the same block is
    /// a no-op. The only failure is `ArithmeticOverflow`.
    pub fn synchronize(&mut self, current_block: u32) -> Result<(), StakingError> {
        if current_block <= self.last_reward_block {
            return Ok(());
        }

        if let Some((from, to)) = self.effective_window(current_block) {
            if self.total_staked > 0 {
                let elapsed = i128::from(to - from);
                let delta = elapsed
                    .checked_mul(self.reward_per_block)
                    .and_then(|emitted| emitted.checked_mul(PRECISION))
                    .ok_or(StakingError::ArithmeticOverflow)?
                    / self.total_staked;
                self.acc_reward_per_share = self
                    .acc_reward_per_share
                    .checked_add(delta)
                    .ok_or(StakingError::ArithmeticOverflow)?;
            }
        }

        self.last_reward_block = current_block;
        Ok(())
    }

    /// A copy of the pool as it would look after `synchronize(current_block)`,
    /// leaving `self` untouched. Backs the read-only pending-reward query.
    pub fn synchronized(&self, current_block: u32) -> Result<RewardPool, StakingError> {
        let mut projected = self.clone();
        projected.synchronize(current_block)?;
        Ok(projected)
    }

    /// Emissions still scheduled between `max(current_block, start_block)`
    /// and `end_block`.
    pub fn rewards_remaining(&self, current_block: u32) -> Result<i128, StakingError> {
        let from = current_block.max(self.start_block);
        if from >= self.end_block {
            return Ok(0);
        }
        i128::from(self.end_block - from)
            .checked_mul(self.reward_per_block)
            .ok_or(StakingError::ArithmeticOverflow)
    }
}

/// `amount × acc_reward_per_share / PRECISION`, the debt a position carries
/// right after being re-based.
///
/// The product is formed in 256 bits; only a quotient outside `i128` is an
/// overflow.
pub fn reward_debt_for(
    env: &Env,
    amount: i128,
    acc_reward_per_share: i128,
) -> Result<i128, StakingError> {
    I256::from_i128(env, amount)
        .mul(&I256::from_i128(env, acc_reward_per_share))
        .div(&I256::from_i128(env, PRECISION))
        .to_i128()
        .ok_or(StakingError::ArithmeticOverflow)
}

/// Reward earned by `position` and not yet paid out, measured against an
/// already-synchronized `pool`.
///
/// ```text
/// pending = amount × acc_reward_per_share / PRECISION − reward_debt
/// ```
///
/// Never negative as long as `acc_reward_per_share` only grows and every
/// change to `amount` re-bases `reward_debt`.
pub fn compute_pending(
    env: &Env,
    pool: &RewardPool,
    position: &UserPosition,
) -> Result<i128, StakingError> {
    reward_debt_for(env, position.amount, pool.acc_reward_per_share)?
        .checked_sub(position.reward_debt)
        .ok_or(StakingError::ArithmeticOverflow)
}

/// [`compute_pending`] clamped to `i128::MAX` when the figure does not fit.
pub fn saturating_pending(env: &Env, pool: &RewardPool, position: &UserPosition) -> i128 {
    compute_pending(env, pool, position).unwrap_or(i128::MAX)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Accumulator math only; the `Env` is there for 256-bit arithmetic.
