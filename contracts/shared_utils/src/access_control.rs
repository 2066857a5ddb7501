//! Access control patterns and utilities

use super::errors::ErrorHelper;
use soroban_sdk::{Address, Env};

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Check if `caller` is `owner` without requiring authorization
    pub fn is_owner(caller: &Address, owner: &Address) -> bool {
        *caller == *owner
    }

    /// Require that the caller is the owner
    ///
    /// The caller must authorize the invocation; a missing signature aborts
    /// in the host before the ownership comparison runs.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `caller` - The caller address
    /// * `owner` - The owner address
    /// * `context` - The operation being guarded (for the log)
    /// * `code` - The shared error code logged on mismatch
    /// * `err` - The error returned on mismatch
    pub fn require_owner<E>(
        e: &Env,
        caller: &Address,
        owner: &Address,
        context: &str,
        code: u32,
        err: E,
    ) -> Result<(), E> {
        caller.require_auth();
        ErrorHelper::ensure(e, Self::is_owner(caller, owner), context, code, err)
    }
}
