//! Errors returned by the lock contract.
//!
//! Discriminants are the `Error(Contract, #n)` codes clients observe; the
//! reason strings come from `shared_utils::error_codes`.

use shared_utils::error_codes::{code, message_for_code};
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LockError {
    /// Unlock time is not strictly after the creation time
    InvalidSchedule = 1,
    /// Withdrawal attempted before the unlock time
    Premature = 2,
    /// Withdrawal attempted by someone other than the owner
    Unauthorized = 3,
    /// Deposit amount must be greater than zero
    InvalidAmount = 4,
    AlreadyInitialized = 5,
    NotInitialized = 6,
    /// The locked funds have already been paid out
    AlreadyWithdrawn = 7,
}

impl LockError {
    /// Shared error code, used for logging and indexing.
    pub fn code(&self) -> u32 {
        match self {
            LockError::InvalidSchedule => code::UNLOCK_NOT_IN_FUTURE,
            LockError::Premature => code::WITHDRAW_TOO_EARLY,
            LockError::Unauthorized => code::NOT_OWNER,
            LockError::InvalidAmount => code::INVALID_AMOUNT,
            LockError::AlreadyInitialized => code::ALREADY_INITIALIZED,
            LockError::NotInitialized => code::NOT_INITIALIZED,
            LockError::AlreadyWithdrawn => code::ALREADY_WITHDRAWN,
        }
    }

    /// Revert reason for this error, verbatim.
    pub fn message(&self) -> &'static str {
        message_for_code(self.code())
    }
}
