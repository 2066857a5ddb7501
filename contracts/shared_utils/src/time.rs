//! Time utilities for lock schedules and ledger timestamps

use soroban_sdk::Env;

/// Seconds in a day
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Seconds in a (non-leap) year
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// Time utility functions for working with timestamps and durations
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// Convert days to seconds
    pub fn days_to_seconds(days: u32) -> u64 {
        days as u64 * SECONDS_PER_DAY
    }

    /// Convert years to seconds
    pub fn years_to_seconds(years: u32) -> u64 {
        years as u64 * SECONDS_PER_YEAR
    }

    /// Check if a timestamp lies strictly after the current ledger time
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `timestamp` - The timestamp to check
    ///
    /// # Returns
    /// `true` if `timestamp > now`, `false` otherwise
    pub fn is_in_future(e: &Env, timestamp: u64) -> bool {
        timestamp > Self::now(e)
    }

    /// Check if the ledger clock has reached a timestamp (current time >= timestamp)
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `timestamp` - The timestamp to check
    ///
    /// # Returns
    /// `true` if reached, `false` otherwise
    pub fn has_reached(e: &Env, timestamp: u64) -> bool {
        Self::now(e) >= timestamp
    }

    /// Calculate time remaining until a timestamp
    ///
    /// # Returns
    /// Time remaining in seconds (0 once reached)
    pub fn time_remaining(e: &Env, timestamp: u64) -> u64 {
        timestamp.saturating_sub(Self::now(e))
    }

    /// Calculate elapsed time since a timestamp
    pub fn elapsed(e: &Env, start_time: u64) -> u64 {
        Self::now(e).saturating_sub(start_time)
    }
}
