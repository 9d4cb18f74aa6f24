use soroban_sdk::contracterror;

/// Error codes shared by both staking contracts.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 30 – 39 | Validation / input             |
/// | 40 – 49 | Balance and solvency           |
/// | 50 – 59 | Arithmetic                     |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The pool has not been initialised yet.
    NotInitialized = 1,

    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    // ── Validation (30–39) ───────────────────────────────────
    /// A negative amount, a non-positive reward rate, or a negative budget.
    InvalidAmount = 30,

    /// The start block is not strictly after the deployment block.
    InvalidStartBlock = 31,

    /// The dual-asset pool was configured with the same token twice.
    IdenticalAssets = 32,

    // ── Balance and solvency (40–49) ─────────────────────────
    /// Withdrawal exceeds the caller's staked amount.
    InsufficientBalance = 40,

    /// The pool's reward balance cannot cover the pending payout.
    InsufficientRewards = 41,

    /// Compounding requested on a pool whose staked and reward assets differ.
    CompoundUnsupported = 42,

    // ── Arithmetic (50–59) ───────────────────────────────────
    /// An accumulator would overflow.
    ArithmeticOverflow = 50,
}

#[cfg(test)]
mod tests {
    use super::StakingError;

    #[test]
    fn error_discriminants_are_stable() {
        assert_eq!(StakingError::NotInitialized as u32, 1);
        assert_eq!(StakingError::AlreadyInitialized as u32, 2);
        assert_eq!(StakingError::InvalidAmount as u32, 30);
        assert_eq!(StakingError::InvalidStartBlock as u32, 31);
        assert_eq!(StakingError::IdenticalAssets as u32, 32);
        assert_eq!(StakingError::InsufficientBalance as u32, 40);
        assert_eq!(StakingError::InsufficientRewards as u32, 41);
        assert_eq!(StakingError::CompoundUnsupported as u32, 42);
        assert_eq!(StakingError::ArithmeticOverflow as u32, 50);
    }
}
