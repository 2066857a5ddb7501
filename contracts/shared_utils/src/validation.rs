//! Validation utilities for escrow inputs

use super::time::TimeUtils;
use soroban_sdk::Env;

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Validate that an amount is greater than zero
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    /// Validate that an unlock time is strictly later than the current ledger time
    ///
    /// An unlock time equal to "now" is rejected: the lock would be born
    /// already open.
    pub fn is_valid_unlock_time(e: &Env, unlock_time: u64) -> bool {
        TimeUtils::is_in_future(e, unlock_time)
    }
}
