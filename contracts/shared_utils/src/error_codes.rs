//! Standardized error codes and revert reasons for escrow contracts.
//!
//! The reason strings are observable by clients and indexers and must not
//! change once published.
//!
//! Error code ranges (for documentation and off-chain indexing):
//! - Schedule: 1-99 (unlock time, withdrawal timing)
//! - Authorization: 100-199 (caller is not the owner)
//! - Validation: 200-299 (invalid input)
//! - State: 300-399 (wrong lifecycle state)

/// Error category boundaries for documentation and indexing.
pub mod category {
    pub const SCHEDULE_START: u32 = 1;
    pub const SCHEDULE_END: u32 = 99;
    pub const AUTH_START: u32 = 100;
    pub const AUTH_END: u32 = 199;
    pub const VALIDATION_START: u32 = 200;
    pub const VALIDATION_END: u32 = 299;
    pub const STATE_START: u32 = 300;
    pub const STATE_END: u32 = 399;
}

/// Standard error code constants (numeric only; contracts use their own contracterror enums).
pub mod code {
    // Schedule (1-99)
    pub const UNLOCK_NOT_IN_FUTURE: u32 = 1;
    pub const WITHDRAW_TOO_EARLY: u32 = 2;

    // Authorization (100-199)
    pub const NOT_OWNER: u32 = 100;

    // Validation (200-299)
    pub const INVALID_AMOUNT: u32 = 200;

    // State (300-399)
    pub const ALREADY_INITIALIZED: u32 = 300;
    pub const NOT_INITIALIZED: u32 = 301;
    pub const ALREADY_WITHDRAWN: u32 = 302;
}

/// Returns the revert reason for a given error code.
pub fn message_for_code(error_code: u32) -> &'static str {
    match error_code {
        code::UNLOCK_NOT_IN_FUTURE => "Unlock time should be in the future",
        code::WITHDRAW_TOO_EARLY => "You can't withdraw yet",
        code::NOT_OWNER => "You aren't the owner",
        code::INVALID_AMOUNT => "Invalid amount: must be greater than zero",
        code::ALREADY_INITIALIZED => "Contract already initialized",
        code::NOT_INITIALIZED => "Contract not initialized",
        code::ALREADY_WITHDRAWN => "Funds already withdrawn",
        _ => "Unknown error",
    }
}

/// Returns the category name of an error code (for logging).
pub fn category_for_code(error_code: u32) -> &'static str {
    match error_code {
        category::SCHEDULE_START..=category::SCHEDULE_END => "schedule",
        category::AUTH_START..=category::AUTH_END => "auth",
        category::VALIDATION_START..=category::VALIDATION_END => "validation",
        category::STATE_START..=category::STATE_END => "state",
        _ => "unknown",
    }
}
