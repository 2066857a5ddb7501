//! Storage helper utilities for common storage patterns

use soroban_sdk::{Env, Symbol};

/// Storage key constants
pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const INITIALIZED: Symbol = symbol_short!("INIT");
}

/// Instance entries are bumped to roughly 30 days of ledgers once they fall
/// under roughly a week.
pub const INSTANCE_TTL_THRESHOLD: u32 = 120_960;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;

/// Storage helper functions
pub struct Storage;

impl Storage {
    /// Check if a contract has been initialized
    pub fn is_initialized(e: &Env) -> bool {
        e.storage().instance().has(&keys::INITIALIZED)
    }

    /// Mark contract as initialized
    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&keys::INITIALIZED, &true);
    }

    /// Keep the contract instance (and everything stored in it) alive
    pub fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }

    /// Generic storage setter
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `key` - The storage key
    /// * `value` - The value to store
    pub fn set<T>(e: &Env, key: &Symbol, value: &T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.storage().instance().set(key, value);
    }

    /// Generic storage getter
    ///
    /// # Returns
    /// The stored value or None
    pub fn get<T>(e: &Env, key: &Symbol) -> Option<T>
    where
        T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
    {
        e.storage().instance().get::<_, T>(key)
    }
}
