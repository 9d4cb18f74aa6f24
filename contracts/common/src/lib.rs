//! Shared reward-accrual core for the block-indexed staking contracts.
//!
//! This crate provides:
//! - [`accrual`]: the reward-per-share accumulator and the pure
//!   pending-reward formula.
//! - [`ledger`]: the participant operations, generic over whether the
//!   staked asset is the reward asset.
//! - [`StakingError`]: error codes shared by every staking contract.
//! - Storage layout and event publishers used by the ledger.

#![no_std]

pub mod accrual;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod storage;

pub use accrual::*;
pub use errors::StakingError;
pub use ledger::{AssetMode, DualAsset, Ledger, SelfCustody};
pub use storage::PoolConfig;
