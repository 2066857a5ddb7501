//! Error logging helpers shared by contract entry points

use crate::error_codes::{category_for_code, message_for_code};
use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log the revert reason for `code` and hand back the typed error.
    ///
    /// Lets entry points write `return Err(ErrorHelper::reject(..))` so the
    /// human-readable reason reaches the diagnostic log while the caller
    /// receives the contract error.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The failing operation, e.g. `"time_lock::withdraw"`
    /// * `code` - The shared error code (see [`crate::error_codes::code`])
    /// * `err` - The contract error returned to the caller
    pub fn reject<E>(e: &Env, context: &str, code: u32, err: E) -> E {
        log!(
            e,
            "Error [{}] {} #{}: {}",
            context,
            category_for_code(code),
            code,
            message_for_code(code)
        );
        err
    }

    /// Return `err` unless `condition` holds.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `condition` - The condition to check
    /// * `context` - The failing operation
    /// * `code` - The shared error code logged on failure
    /// * `err` - The contract error returned on failure
    pub fn ensure<E>(e: &Env, condition: bool, context: &str, code: u32, err: E) -> Result<(), E> {
        if condition {
            Ok(())
        } else {
            Err(Self::reject(e, context, code, err))
        }
    }
}
