//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Address, Env, Symbol, Topics};

/// Event names shared by escrow contracts
pub mod names {
    /// Name of the withdrawal event; clients match on it verbatim.
    pub const WITHDRAWAL: &str = "Withdrawal";
}

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with topic and data
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic (Symbol)
    /// * `data` - The event data (tuple)
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit a lock creation event
    ///
    /// Topics: `("Locked", owner)`, data: `(amount, unlock_time)`
    pub fn emit_locked(e: &Env, owner: &Address, amount: i128, unlock_time: u64) {
        Self::emit_with_topics(
            e,
            (symbol_short!("Locked"), owner.clone()),
            (amount, unlock_time),
        );
    }

    /// Emit a withdrawal event
    ///
    /// Topics: `("Withdrawal",)`, data: `(amount, timestamp)`
    pub fn emit_withdrawal(e: &Env, amount: i128) {
        Self::emit(
            e,
            Symbol::new(e, names::WITHDRAWAL),
            (amount, e.ledger().timestamp()),
        );
    }
}
